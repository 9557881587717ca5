//! Timed enchantments tracked on the player.
//!
//! Enchantments carry a turns-remaining counter that the external timer
//! decrements; this core only starts, clears, and shortens them as side
//! effects of entering and leaving forms. Zero turns means not active;
//! expired entries are dropped eagerly so `is_active` never sees them.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// Enchantment kinds the transformation rules interact with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnchantmentKind {
    /// Hardened skin; silently discarded on any transformation attempt.
    Stoneskin,
    /// Conjured stone plating; merges with the statue form.
    Stonemail,
    /// Conjured ice plating; merges with the ice-beast form.
    IcyArmour,
    /// Accelerated healing; incompatible with undeath.
    Regeneration,
    /// Poison immunity; redundant while undead.
    ResistPoison,
    /// Brush-with-death state; conflicts with the lich form.
    DeathsDoor,
}

/// A single active enchantment with its remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enchantment {
    pub kind: EnchantmentKind,
    /// Turns left before the external timer expires this enchantment.
    pub turns_left: u32,
}

/// Active enchantments on the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enchantments {
    effects: ArrayVec<Enchantment, { GameConfig::MAX_ENCHANTMENTS }>,
}

impl Enchantments {
    /// Creates an empty enchantment set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Returns true if `kind` is active (has turns remaining).
    pub fn is_active(&self, kind: EnchantmentKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Remaining turns for `kind`; zero when not active.
    pub fn turns_left(&self, kind: EnchantmentKind) -> u32 {
        self.effects
            .iter()
            .find(|e| e.kind == kind)
            .map_or(0, |e| e.turns_left)
    }

    /// Starts or refreshes `kind` with the given duration.
    ///
    /// A zero duration clears instead.
    pub fn put(&mut self, kind: EnchantmentKind, turns: u32) {
        if turns == 0 {
            self.clear(kind);
            return;
        }
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.turns_left = turns;
            return;
        }
        if !self.effects.is_full() {
            self.effects.push(Enchantment {
                kind,
                turns_left: turns,
            });
        }
    }

    /// Ends `kind` immediately.
    pub fn clear(&mut self, kind: EnchantmentKind) {
        self.effects.retain(|e| e.kind != kind);
    }

    /// Caps the remaining duration of `kind` at `turns` if it is active
    /// and currently longer.
    ///
    /// Used on reversion: a merged enchantment is not cut outright but
    /// left to lapse on its own within a turn.
    pub fn shorten_to(&mut self, kind: EnchantmentKind, turns: u32) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.turns_left = existing.turns_left.min(turns);
        }
        if turns == 0 {
            self.clear(kind);
        }
    }

    /// Iterates over all active enchantments.
    pub fn iter(&self) -> impl Iterator<Item = &Enchantment> {
        self.effects.iter()
    }

    /// Returns true if nothing is active.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
