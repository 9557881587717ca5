//! The form catalog.
//!
//! Each transformation is a closed enum variant with an associated
//! immutable [`FormProfile`]: announcement text, which slots survive the
//! equipment strip, stat deltas, the hit-point factor, the duration
//! formula, the map representation, and behaviour flags. The state
//! machine in [`super::machine`] is a generic driver over this table;
//! only genuinely per-form side effects stay as code there.

use bitflags::bitflags;

use crate::env::RngOracle;
use crate::state::{Colour, PlayerDisplay, RemovalRequest};

/// Transient shapes the player can take.
///
/// `None` is the rest state, jointly with a zero duration.
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
pub enum Transformation {
    /// Untransformed.
    #[default]
    None,
    /// Venomous arachnid; quick but fragile.
    Spider,
    /// Scythe-blade hands; everything else stays as it was.
    BladeHands,
    /// Crystalline ice body.
    IceBeast,
    /// Living stone; slow, tough, strong.
    Statue,
    /// Fire-breathing flight-capable dragon.
    Dragon,
    /// Undead spellcaster's husk.
    Lich,
    /// Diffuse body of air.
    Air,
    /// Huge demonic serpent.
    SerpentOfHell,
}

bitflags! {
    /// Per-form behaviour switches consulted by the state machine.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FormFlags: u8 {
        /// Entry is vetoed outright if any stripped slot holds a cursed item.
        const BLOCKS_ON_CURSED = 1 << 0;
        /// Entry strips equipment (all removable slots minus `keeps`).
        const REMOVES_EQUIPMENT = 1 << 1;
        /// Entry spills the entire pack onto the ground.
        const DROPS_INVENTORY = 1 << 2;
        /// The form's body is undead for its duration.
        const CAUSES_UNDEAD = 1 << 3;
    }
}

/// Entry duration formula: `base + rolls × rand(power)`, clamped to `cap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationFormula {
    pub base: u32,
    pub rolls: u32,
    pub cap: u32,
}

impl DurationFormula {
    pub const fn new(base: u32, rolls: u32, cap: u32) -> Self {
        Self { base, rolls, cap }
    }

    /// Rolls an entry duration at the given spell power.
    pub fn roll(&self, power: u32, rng: &mut dyn RngOracle) -> u32 {
        let mut duration = self.base;
        for _ in 0..self.rolls {
            duration += rng.random_below(power);
        }
        duration.min(self.cap)
    }
}

/// Body-size category a form imposes, for reach/stealth/armour systems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BodySize {
    Tiny,
    Medium,
    Large,
    Huge,
    /// Defer to the character's own species size.
    Character,
}

/// Immutable per-form parameter record.
///
/// Catalog data, not game state: profiles live in statics and are never
/// serialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormProfile {
    /// Default entry announcement (flavour variants live in the machine).
    pub entry_message: &'static str,
    /// Reversion announcement, sent on the duration channel.
    pub exit_message: &'static str,
    /// Slots exempt from the equipment strip.
    pub keeps: RemovalRequest,
    pub str_delta: i32,
    pub dex_delta: i32,
    /// Hit-point factor in tenths; 10 is neutral. Applied as a multiplier
    /// on entry and as the rescale divisor on exit.
    pub hp_factor: u32,
    pub duration: DurationFormula,
    pub display: PlayerDisplay,
    pub flags: FormFlags,
}

/// Neutral profile for the rest state.
const NONE: FormProfile = FormProfile {
    entry_message: "",
    exit_message: "",
    keeps: RemovalRequest::all(),
    str_delta: 0,
    dex_delta: 0,
    hp_factor: 10,
    duration: DurationFormula::new(0, 0, 0),
    display: PlayerDisplay::BASELINE,
    flags: FormFlags::empty(),
};

const SPIDER: FormProfile = FormProfile {
    entry_message: "You turn into a venomous arachnid creature.",
    exit_message: "Your transformation has ended.",
    keeps: RemovalRequest::empty(),
    str_delta: 0,
    dex_delta: 5,
    hp_factor: 10,
    duration: DurationFormula::new(10, 2, 60),
    display: PlayerDisplay::new('s', Colour::Brown),
    flags: FormFlags::BLOCKS_ON_CURSED.union(FormFlags::REMOVES_EQUIPMENT),
};

const BLADE_HANDS: FormProfile = FormProfile {
    entry_message: "Your hands turn into razor-sharp scythe blades.",
    exit_message: "Your hands revert to their normal proportions.",
    keeps: RemovalRequest::CLOAK
        .union(RemovalRequest::HELMET)
        .union(RemovalRequest::BOOTS)
        .union(RemovalRequest::BODY_ARMOUR),
    str_delta: 0,
    dex_delta: 0,
    hp_factor: 10,
    duration: DurationFormula::new(10, 1, 100),
    display: PlayerDisplay::BASELINE,
    flags: FormFlags::BLOCKS_ON_CURSED.union(FormFlags::REMOVES_EQUIPMENT),
};

const ICE_BEAST: FormProfile = FormProfile {
    entry_message: "You turn into a creature of crystalline ice.",
    exit_message: "You warm up again.",
    keeps: RemovalRequest::CLOAK,
    str_delta: 0,
    dex_delta: 0,
    hp_factor: 12,
    duration: DurationFormula::new(30, 2, 100),
    display: PlayerDisplay::new('I', Colour::White),
    flags: FormFlags::REMOVES_EQUIPMENT,
};

const STATUE: FormProfile = FormProfile {
    entry_message: "You turn into a living statue of rough stone.",
    exit_message: "You revert to your normal fleshy form.",
    // Too stiff for shields, gloves, or body armour; a held weapon is fine.
    keeps: RemovalRequest::WEAPON
        .union(RemovalRequest::CLOAK)
        .union(RemovalRequest::HELMET)
        .union(RemovalRequest::BOOTS),
    str_delta: 2,
    dex_delta: -2,
    hp_factor: 15,
    duration: DurationFormula::new(20, 2, 100),
    display: PlayerDisplay::new('8', Colour::LightGrey),
    flags: FormFlags::REMOVES_EQUIPMENT,
};

const DRAGON: FormProfile = FormProfile {
    entry_message: "You turn into a fearsome dragon!",
    exit_message: "Your transformation has ended.",
    keeps: RemovalRequest::empty(),
    str_delta: 10,
    dex_delta: 0,
    hp_factor: 16,
    duration: DurationFormula::new(20, 2, 100),
    display: PlayerDisplay::new('D', Colour::Green),
    flags: FormFlags::REMOVES_EQUIPMENT,
};

const LICH: FormProfile = FormProfile {
    entry_message: "Your body is suffused with negative energy!",
    exit_message: "You feel yourself come back to life.",
    keeps: RemovalRequest::all(),
    str_delta: 3,
    dex_delta: 0,
    hp_factor: 10,
    duration: DurationFormula::new(20, 2, 100),
    display: PlayerDisplay::new('L', Colour::LightGrey),
    flags: FormFlags::CAUSES_UNDEAD,
};

const AIR: FormProfile = FormProfile {
    entry_message: "You feel diffuse...",
    exit_message: "Your body solidifies.",
    keeps: RemovalRequest::empty(),
    str_delta: 0,
    dex_delta: 8,
    hp_factor: 10,
    duration: DurationFormula::new(35, 2, 150),
    display: PlayerDisplay::new('#', Colour::DarkGrey),
    flags: FormFlags::REMOVES_EQUIPMENT.union(FormFlags::DROPS_INVENTORY),
};

const SERPENT_OF_HELL: FormProfile = FormProfile {
    entry_message: "You transform into a huge demonic serpent!",
    exit_message: "Your transformation has ended.",
    keeps: RemovalRequest::empty(),
    str_delta: 13,
    dex_delta: 0,
    hp_factor: 17,
    duration: DurationFormula::new(20, 2, 120),
    display: PlayerDisplay::new('S', Colour::Red),
    flags: FormFlags::REMOVES_EQUIPMENT,
};

impl Transformation {
    /// Every enterable form, in catalog order.
    pub const ALL_FORMS: [Transformation; 8] = [
        Transformation::Spider,
        Transformation::BladeHands,
        Transformation::IceBeast,
        Transformation::Statue,
        Transformation::Dragon,
        Transformation::Lich,
        Transformation::Air,
        Transformation::SerpentOfHell,
    ];

    /// The form's parameter record.
    pub const fn profile(self) -> &'static FormProfile {
        match self {
            Transformation::None => &NONE,
            Transformation::Spider => &SPIDER,
            Transformation::BladeHands => &BLADE_HANDS,
            Transformation::IceBeast => &ICE_BEAST,
            Transformation::Statue => &STATUE,
            Transformation::Dragon => &DRAGON,
            Transformation::Lich => &LICH,
            Transformation::Air => &AIR,
            Transformation::SerpentOfHell => &SERPENT_OF_HELL,
        }
    }

    /// True for forms whose natural weaponry can butcher a corpse.
    pub const fn can_butcher_barehanded(self) -> bool {
        matches!(self, Transformation::BladeHands | Transformation::Dragon)
    }

    /// True when this form overrides species and mutation intrinsics.
    ///
    /// Blade-hands never counts: only the hands change. With
    /// `scales_only` the question is narrowed to the physical (AC/EV)
    /// properties of scales and the like: lich and statue keep the
    /// body's shape and therefore those, even though the special
    /// intrinsics are lost.
    pub const fn changes_physiology(self, scales_only: bool) -> bool {
        match self {
            Transformation::None | Transformation::BladeHands => false,
            Transformation::Lich | Transformation::Statue => !scales_only,
            _ => true,
        }
    }

    /// Body-size category imposed by the form.
    pub const fn body_size(self) -> BodySize {
        match self {
            Transformation::Spider => BodySize::Tiny,
            Transformation::IceBeast => BodySize::Large,
            Transformation::Dragon | Transformation::SerpentOfHell => BodySize::Huge,
            Transformation::Air => BodySize::Medium,
            _ => BodySize::Character,
        }
    }
}
