//! Command implementations, one module per top-level command.

pub mod config;
pub mod insights;
pub mod leaderboard;
pub mod quiz;
pub mod session;
pub mod shop;
pub mod simulate;
pub mod teams;

use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use studycoach_core::reward::SessionResult;

/// XP the demo timer grants per focused minute.
pub const XP_PER_MINUTE: u64 = 2;
/// Coins the demo timer grants per focused minute.
pub const COINS_PER_MINUTE: u64 = 1;

/// Seeded RNG when a seed is given, entropy otherwise.
pub fn rng_for(seed: Option<u64>) -> Mcg128Xsl64 {
    match seed {
        Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
        None => Mcg128Xsl64::from_entropy(),
    }
}

/// Parse a `MINUTES:DISTRACTIONS` spec like `25:2` (bare `25` means no
/// distractions) into a session result at the demo timer rates.
pub fn parse_session_spec(spec: &str) -> Result<SessionResult, String> {
    let (minutes, distractions) = match spec.split_once(':') {
        Some((minutes, distractions)) => (minutes, distractions),
        None => (spec, "0"),
    };
    let minutes: u64 = minutes
        .trim()
        .parse()
        .map_err(|_| format!("invalid session spec '{spec}': minutes must be a number"))?;
    let distractions: u32 = distractions
        .trim()
        .parse()
        .map_err(|_| format!("invalid session spec '{spec}': distractions must be a number"))?;
    if minutes == 0 {
        return Err(format!("invalid session spec '{spec}': minutes must be positive"));
    }
    Ok(SessionResult {
        duration_secs: minutes * 60,
        xp_earned: minutes * XP_PER_MINUTE,
        coins_earned: minutes * COINS_PER_MINUTE,
        distractions,
    })
}
