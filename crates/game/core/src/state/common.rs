use std::fmt;

/// Handle referencing an item owned by the external inventory system.
///
/// The transformation core never owns item data. It stores handles in
/// equipment slots and asks the [`ItemOracle`](crate::env::ItemOracle)
/// about item properties (curse state, display name, barding check).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Integer resource meter (hit points) tracked on the player.
///
/// The maximum is recomputed through the
/// [`VitalsOracle`](crate::env::VitalsOracle) whenever a form is entered
/// or left; recomputation never clamps `current` by itself; each call
/// site rescales and clamps according to its own rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Meter filled to the given maximum.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }
}
