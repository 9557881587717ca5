//! Player map representation and redraw bookkeeping.
//!
//! Forms override the glyph and colour the player is drawn with; reverting
//! restores [`PlayerDisplay::BASELINE`]. The core never draws anything;
//! it only records what changed so the external display layer can refresh
//! the affected widgets.

use bitflags::bitflags;

/// Terminal palette colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Brown,
    #[default]
    LightGrey,
    DarkGrey,
    LightBlue,
    LightGreen,
    LightCyan,
    LightRed,
    LightMagenta,
    Yellow,
    White,
}

/// Glyph and colour the player is currently rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerDisplay {
    pub glyph: char,
    pub colour: Colour,
}

impl PlayerDisplay {
    /// Untransformed appearance.
    pub const BASELINE: Self = Self {
        glyph: '@',
        colour: Colour::LightGrey,
    };

    pub const fn new(glyph: char, colour: Colour) -> Self {
        Self { glyph, colour }
    }
}

impl Default for PlayerDisplay {
    fn default() -> Self {
        Self::BASELINE
    }
}

bitflags! {
    /// Display widgets that need refreshing after a state change.
    ///
    /// The external UI drains these; the core only ever sets them.
    /// Serialization comes with the `serde` cargo feature via
    /// `bitflags/serde`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RedrawFlags: u8 {
        /// Evasion readout is stale.
        const EVASION = 1 << 0;
        /// Armour-class readout is stale.
        const ARMOUR_CLASS = 1 << 1;
        /// Hunger readout is stale.
        const HUNGER = 1 << 2;
        /// Wielded-weapon line is stale.
        const WIELD = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_is_default() {
        assert_eq!(PlayerDisplay::default(), PlayerDisplay::BASELINE);
        assert_eq!(PlayerDisplay::BASELINE.glyph, '@');
        assert_eq!(PlayerDisplay::BASELINE.colour, Colour::LightGrey);
    }

    #[test]
    fn redraw_flags_accumulate() {
        let mut flags = RedrawFlags::empty();
        flags.insert(RedrawFlags::EVASION | RedrawFlags::ARMOUR_CLASS);
        flags.insert(RedrawFlags::WIELD);
        assert!(flags.contains(RedrawFlags::EVASION));
        assert!(flags.contains(RedrawFlags::WIELD));
        assert!(!flags.contains(RedrawFlags::HUNGER));
    }
}
