//! Player entity state.
//!
//! The player is an explicit value passed into every operation; there is
//! no global. Only the transformation state machine mutates `form` and
//! `form_duration`; other systems (combat, resistances, the duration
//! timer) read them.

use super::common::ResourceMeter;
use super::display::{PlayerDisplay, RedrawFlags};
use super::enchantment::Enchantments;
use super::equipment::Loadout;
use crate::transform::Transformation;

/// Player species (immutable identity).
///
/// Species affects:
/// - Whether the character is bound to its own form while swimming
/// - Which equipment slots the body can use at all
/// - Flavour variants of transformation announcements
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Species {
    /// Human - versatile baseline
    #[default]
    Human,
    /// Merfolk - reverts to its natural form in water
    Merfolk,
    /// Naga - serpentine lower body, wears barding instead of boots
    Naga,
    /// Centaur - equine lower body, wears barding instead of boots
    Centaur,
    /// Kenku - avian anatomy, no boots or helmets
    Kenku,
    /// Gnome - small folk
    Gnome,
    /// Dwarf - stout folk
    Dwarf,
    /// Mummy - preserved undead body
    Mummy,
}

impl Species {
    /// True for species whose natural form reasserts itself in water,
    /// blocking transformation while swimming.
    pub const fn bound_to_water_form(self) -> bool {
        matches!(self, Species::Merfolk)
    }

    /// True for species that wear barding in the boots slot rather than
    /// ordinary boots.
    pub const fn wears_barding(self) -> bool {
        matches!(self, Species::Naga | Species::Centaur)
    }

    /// True for the dwarven genus (flavour text only).
    pub const fn is_dwarven(self) -> bool {
        matches!(self, Species::Dwarf)
    }

    /// True for species whose flesh is already dead.
    pub const fn inherently_undead(self) -> bool {
        matches!(self, Species::Mummy)
    }
}

/// Mutation levels relevant to equipment compatibility.
///
/// Levels are 0..=3; only presence (and level 3 for claws) matters here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mutations {
    pub horns: u8,
    pub hooves: u8,
    pub claws: u8,
}

impl Mutations {
    /// Claw level at which gloves no longer fit.
    pub const BLOCKING_CLAW_LEVEL: u8 = 3;
}

/// Whether the player's body is currently alive or undead.
///
/// The lich form flips this to `Undead` for its duration; species like
/// mummies start (and stay) undead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifeState {
    #[default]
    Alive,
    Undead,
}

/// Coarse hunger bands shown in the status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HungerState {
    Starving,
    Hungry,
    #[default]
    Satiated,
    Full,
    Engorged,
}

/// Core attributes transformations adjust.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Stat {
    Strength,
    Dexterity,
}

/// Complete player state the transformation core reads and mutates.
///
/// # Invariants
///
/// - `(form == Transformation::None) ⇔ (form_duration == 0)`, except
///   transiently inside enter/exit
/// - `hp.current <= hp.maximum` after every public operation
/// - `loadout` holds references only; items belong to the inventory
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    // === Identity ===
    pub species: Species,
    pub mutations: Mutations,

    // === Condition ===
    pub life: LifeState,
    pub hunger: HungerState,
    /// Maintained by the external terrain/movement system.
    pub swimming: bool,

    // === Attributes and resources ===
    pub strength: i32,
    pub dexterity: i32,
    pub hp: ResourceMeter,

    // === Gear and enchantments ===
    pub loadout: Loadout,
    pub enchantments: Enchantments,

    // === Transformation (mutated only by the state machine) ===
    pub form: Transformation,
    /// Turns remaining before the external timer reverts the form.
    pub form_duration: u32,

    // === Presentation ===
    pub display: PlayerDisplay,
    pub redraw: RedrawFlags,
}

impl PlayerState {
    /// A fresh, untransformed player of the given species.
    pub fn new(species: Species) -> Self {
        Self {
            species,
            mutations: Mutations::default(),
            life: if species.inherently_undead() {
                LifeState::Undead
            } else {
                LifeState::Alive
            },
            hunger: HungerState::default(),
            swimming: false,
            strength: 10,
            dexterity: 10,
            hp: ResourceMeter::full(10),
            loadout: Loadout::empty(),
            enchantments: Enchantments::empty(),
            form: Transformation::None,
            form_duration: 0,
            display: PlayerDisplay::BASELINE,
            redraw: RedrawFlags::empty(),
        }
    }

    /// Reads a core attribute.
    pub fn stat(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
        }
    }

    /// Adjusts a core attribute by `delta`.
    ///
    /// Announcements are the caller's concern; this only mutates.
    pub fn apply_stat_delta(&mut self, stat: Stat, delta: i32) {
        match stat {
            Stat::Strength => self.strength += delta,
            Stat::Dexterity => self.dexterity += delta,
        }
    }

    /// True if the body is currently undead, whether by species or form.
    #[inline]
    pub fn is_undead(&self) -> bool {
        self.life == LifeState::Undead
    }

    /// Marks display widgets stale.
    #[inline]
    pub fn mark_redraw(&mut self, flags: RedrawFlags) {
        self.redraw.insert(flags);
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(Species::Human)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_is_at_rest() {
        let player = PlayerState::new(Species::Human);
        assert_eq!(player.form, Transformation::None);
        assert_eq!(player.form_duration, 0);
        assert_eq!(player.display, PlayerDisplay::BASELINE);
        assert!(!player.is_undead());
    }

    #[test]
    fn mummies_start_undead() {
        let player = PlayerState::new(Species::Mummy);
        assert!(player.is_undead());
    }

    #[test]
    fn stat_deltas_accumulate() {
        let mut player = PlayerState::new(Species::Human);
        player.apply_stat_delta(Stat::Strength, 10);
        player.apply_stat_delta(Stat::Strength, -3);
        assert_eq!(player.stat(Stat::Strength), 17);
        assert_eq!(player.stat(Stat::Dexterity), 10);
    }
}
