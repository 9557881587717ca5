//! Side-effecting collaborators outside the transformation core.
//!
//! The state machine decides *when* these happen; the surrounding game
//! owns *how*. Implementations are expected to complete synchronously;
//! the whole core runs to completion within one game-turn action.

use crate::state::PlayerState;

/// Hit-point formula supplied by the character/stats system.
pub trait VitalsOracle: Send + Sync {
    /// Maximum hit points from base stats, experience, and gear, without
    /// any transformation factor. The core applies the active form's
    /// factor itself so entry and exit cannot drift apart.
    fn base_max_hp(&self, player: &PlayerState) -> u32;
}

/// World mutations the transformation rules trigger but do not own.
pub trait WorldHooks {
    /// Spills the entire pack onto the ground beneath the player (the air
    /// form cannot carry anything). Returns how many items were dropped.
    fn drop_all_inventory(&mut self) -> usize;

    /// Aborts any butchering in progress (the delay queue owns it).
    fn cancel_butcher_action(&mut self);

    /// Re-checks terrain validity at the player's position, e.g. after a
    /// flying form ends over deep water.
    fn recompute_terrain_movement(&mut self);
}
