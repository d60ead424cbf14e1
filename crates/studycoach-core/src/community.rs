//! Community surface: leaderboard standings and study teams.
//!
//! Standings and the team directory are static placeholder data in this
//! version; nothing synchronizes with other users. Team creation is
//! local: it builds a roster of one (the creator, as leader) and an
//! invite code, ready for a backend that does not exist yet.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CommunityError;
use crate::progression::UserState;

/// Placeholder name for the local player's leaderboard row.
pub const LOCAL_PLAYER: &str = "You";
/// Characters an invite code is drawn from.
const INVITE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Invite code length.
const INVITE_CODE_LEN: usize = 6;

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: u32,
    pub name: String,
    pub level: u32,
    pub total_xp: u64,
    pub streak: u32,
    pub country: String,
    pub weekly_xp: u64,
}

fn standing(
    rank: u32,
    name: &str,
    level: u32,
    total_xp: u64,
    streak: u32,
    country: &str,
    weekly_xp: u64,
) -> Standing {
    Standing {
        rank,
        name: name.into(),
        level,
        total_xp,
        streak,
        country: country.into(),
        weekly_xp,
    }
}

/// The static standings, ranks 1-5, with a zeroed row for the local
/// player.
pub fn standings() -> Vec<Standing> {
    vec![
        standing(1, "Alex Chen", 25, 15420, 12, "🇺🇸", 2500),
        standing(2, "Sarah Kim", 22, 14200, 8, "🇰🇷", 2200),
        standing(3, "Mike Johnson", 20, 12800, 15, "🇬🇧", 2100),
        standing(4, LOCAL_PLAYER, 1, 0, 0, "🌍", 0),
        standing(5, "Emma Wilson", 18, 11200, 6, "🇦🇺", 1800),
    ]
}

/// Standings with the local player's row replaced by the live ledger,
/// re-ranked by total XP.
pub fn standings_for(user: &UserState, name: &str) -> Vec<Standing> {
    let mut rows = standings();
    if let Some(row) = rows.iter_mut().find(|row| row.name == LOCAL_PLAYER) {
        row.name = name.into();
        row.level = user.level;
        row.total_xp = user.total_xp;
        row.streak = user.streak;
    }
    rows.sort_by(|a, b| b.total_xp.cmp(&a.total_xp));
    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = position as u32 + 1;
    }
    rows
}

/// Standings ordered by this week's XP instead of lifetime XP.
pub fn weekly_standings_for(user: &UserState, name: &str) -> Vec<Standing> {
    let mut rows = standings_for(user, name);
    rows.sort_by(|a, b| b.weekly_xp.cmp(&a.weekly_xp));
    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = position as u32 + 1;
    }
    rows
}

/// Whether a team accepts join requests from anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamKind {
    Private,
    Public,
}

/// Role within a team roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Leader,
    Member,
}

/// One row of the public team directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamListing {
    pub id: String,
    pub name: String,
    pub kind: TeamKind,
    pub member_count: u32,
    pub level: u32,
    pub total_xp: u64,
    pub leader: String,
    pub description: String,
}

fn listing(
    id: &str,
    name: &str,
    kind: TeamKind,
    member_count: u32,
    level: u32,
    total_xp: u64,
    leader: &str,
    description: &str,
) -> TeamListing {
    TeamListing {
        id: id.into(),
        name: name.into(),
        kind,
        member_count,
        level,
        total_xp,
        leader: leader.into(),
        description: description.into(),
    }
}

/// The static team directory.
pub fn team_directory() -> Vec<TeamListing> {
    vec![
        listing(
            "1",
            "Focus Warriors",
            TeamKind::Private,
            12,
            25,
            15420,
            "Alex Chen",
            "Elite study group focused on productivity",
        ),
        listing(
            "2",
            "Study Squad",
            TeamKind::Public,
            8,
            18,
            9800,
            "Sarah Kim",
            "Friendly group for collaborative learning",
        ),
        listing(
            "3",
            "Brain Boosters",
            TeamKind::Public,
            15,
            30,
            22000,
            "Mike Johnson",
            "Advanced learners pushing boundaries",
        ),
    ]
}

/// One member of a locally created team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub xp: u64,
    pub streak: u32,
    pub country: String,
    pub role: MemberRole,
}

/// A team created on this device. Carries the full roster and the invite
/// code, unlike directory listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub kind: TeamKind,
    pub description: String,
    pub invite_code: String,
    pub members: Vec<TeamMember>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// The event announcing this team's creation.
    pub fn created_event(&self) -> crate::events::Event {
        crate::events::Event::TeamCreated {
            team_id: self.id.clone(),
            name: self.name.clone(),
            invite_code: self.invite_code.clone(),
            at: self.created_at,
        }
    }
}

/// Create a team locally, with the creator as its sole leader.
///
/// The name is trimmed and must not end up empty; the description is
/// trimmed and may be. The invite code is six uppercase alphanumerics.
pub fn create_team<R: Rng + ?Sized>(
    name: &str,
    kind: TeamKind,
    description: &str,
    creator: &UserState,
    creator_name: &str,
    rng: &mut R,
) -> Result<Team, CommunityError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CommunityError::EmptyTeamName);
    }
    Ok(Team {
        id: format!("team-{}", Uuid::new_v4()),
        name: name.to_string(),
        kind,
        description: description.trim().to_string(),
        invite_code: invite_code(rng),
        members: vec![TeamMember {
            id: "current-user".into(),
            name: creator_name.into(),
            level: creator.level,
            xp: creator.xp,
            streak: creator.streak,
            country: "🌍".into(),
            role: MemberRole::Leader,
        }],
        created_at: Utc::now(),
    })
}

fn invite_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..INVITE_CODE_LEN)
        .map(|_| INVITE_ALPHABET[rng.gen_range(0..INVITE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn rng() -> Mcg128Xsl64 {
        Mcg128Xsl64::seed_from_u64(99)
    }

    #[test]
    fn static_standings_carry_five_ranked_rows() {
        let rows = standings();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "Alex Chen");
        assert_eq!(rows[0].total_xp, 15420);
        assert_eq!(rows[3].name, LOCAL_PLAYER);
        for (position, row) in rows.iter().enumerate() {
            assert_eq!(row.rank, position as u32 + 1);
        }
    }

    #[test]
    fn live_user_is_merged_and_reranked() {
        let mut user = UserState::new();
        user.apply_reward(16000, 0);
        let rows = standings_for(&user, "Productivity Hero");
        assert_eq!(rows[0].name, "Productivity Hero");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].level, 17);
        assert_eq!(rows[1].name, "Alex Chen");
    }

    #[test]
    fn zero_xp_user_ranks_last() {
        let rows = standings_for(&UserState::new(), "Productivity Hero");
        assert_eq!(rows[4].name, "Productivity Hero");
        assert_eq!(rows[4].rank, 5);
    }

    #[test]
    fn weekly_order_differs_from_lifetime_order() {
        let rows = weekly_standings_for(&UserState::new(), "Productivity Hero");
        assert_eq!(rows[0].name, "Alex Chen");
        assert_eq!(rows[0].weekly_xp, 2500);
        assert_eq!(rows[4].weekly_xp, 0);
    }

    #[test]
    fn directory_lists_the_three_mock_teams() {
        let teams = team_directory();
        assert_eq!(teams.len(), 3);
        assert_eq!(teams[0].name, "Focus Warriors");
        assert_eq!(teams[0].kind, TeamKind::Private);
        assert_eq!(teams[2].total_xp, 22000);
    }

    #[test]
    fn create_team_requires_a_name() {
        let user = UserState::new();
        let err = create_team("   ", TeamKind::Public, "", &user, "Hero", &mut rng());
        assert!(matches!(err, Err(CommunityError::EmptyTeamName)));
    }

    #[test]
    fn create_team_trims_and_builds_a_leader_roster() {
        let mut user = UserState::new();
        user.apply_reward(1200, 0);
        let team = create_team(
            "  Night Owls  ",
            TeamKind::Private,
            " Late study crew ",
            &user,
            "Productivity Hero",
            &mut rng(),
        )
        .unwrap();

        assert_eq!(team.name, "Night Owls");
        assert_eq!(team.description, "Late study crew");
        assert!(team.id.starts_with("team-"));
        assert_eq!(team.members.len(), 1);
        assert_eq!(team.members[0].role, MemberRole::Leader);
        assert_eq!(team.members[0].name, "Productivity Hero");
        assert_eq!(team.members[0].level, 2);
    }

    #[test]
    fn invite_codes_are_six_uppercase_alphanumerics() {
        let mut rng = rng();
        for _ in 0..50 {
            let code = invite_code(&mut rng);
            assert_eq!(code.len(), INVITE_CODE_LEN);
            assert!(code
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        }
    }
}
