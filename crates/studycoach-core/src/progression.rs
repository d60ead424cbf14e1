//! Cumulative user progression: XP, level, coins, streak.
//!
//! `UserState` is the all-time ledger. It is owned by exactly one caller
//! and mutated only through [`UserState::apply_reward`] and
//! [`UserState::spend`]; the level is recomputed from total XP on every
//! mutation and never drifts independently of it.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// XP required to advance one level.
pub const XP_PER_LEVEL: u64 = 1000;
/// Coin balance a fresh profile starts with.
pub const STARTING_COINS: u64 = 2000;

/// All-time progression ledger for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    /// Display XP counter; mirrors `total_xp` in this scope.
    pub xp: u64,
    /// Lifetime XP. The level is always derived from this, never stored
    /// independently.
    pub total_xp: u64,
    pub coins: u64,
    pub level: u32,
    /// Consecutive-day counter, carried for display only.
    pub streak: u32,
}

impl Default for UserState {
    fn default() -> Self {
        Self::new()
    }
}

impl UserState {
    /// Fresh profile: level 1, no XP, the starting coin balance.
    pub fn new() -> Self {
        Self {
            xp: 0,
            total_xp: 0,
            coins: STARTING_COINS,
            level: 1,
            streak: 0,
        }
    }

    /// Apply one reward event to the ledger.
    ///
    /// Must be called exactly once per reward event; the core assumes
    /// at-most-once delivery, and re-invoking for the same event
    /// double-counts. Dedup is the dispatching caller's responsibility.
    pub fn apply_reward(&mut self, xp_delta: u64, coin_delta: u64) {
        self.total_xp = self.total_xp.saturating_add(xp_delta);
        self.xp = self.xp.saturating_add(xp_delta);
        self.coins = self.coins.saturating_add(coin_delta);
        self.level = level_for(self.total_xp);
    }

    /// Spend coins from the balance.
    ///
    /// Fails without touching the balance when the cost exceeds it; there
    /// are no partial spends. Spending the exact balance leaves zero.
    pub fn spend(&mut self, cost: u64) -> Result<(), LedgerError> {
        if self.coins < cost {
            return Err(LedgerError::InsufficientFunds {
                cost,
                balance: self.coins,
            });
        }
        self.coins -= cost;
        Ok(())
    }

    /// XP accumulated inside the current level band.
    pub fn xp_into_level(&self) -> u64 {
        self.total_xp % XP_PER_LEVEL
    }

    /// XP still missing to reach the next level.
    pub fn xp_for_next_level(&self) -> u64 {
        XP_PER_LEVEL - self.xp_into_level()
    }
}

/// Level as a function of lifetime XP: one level per [`XP_PER_LEVEL`],
/// starting at 1.
pub fn level_for(total_xp: u64) -> u32 {
    (total_xp / XP_PER_LEVEL + 1) as u32
}
