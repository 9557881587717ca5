//! Player-facing state representation.
//!
//! This module owns the data structures the transformation core reads and
//! mutates: the player entity, its equipped-item references, timed
//! enchantments, and display bookkeeping. Other layers query this state
//! but mutate the transformation fields exclusively through
//! [`crate::transform`].
mod common;
mod display;
mod enchantment;
mod equipment;
mod player;

pub use common::{ItemHandle, ResourceMeter};
pub use display::{Colour, PlayerDisplay, RedrawFlags};
pub use enchantment::{Enchantment, EnchantmentKind, Enchantments};
pub use equipment::{EquipmentSlot, LINKED_REMOVALS, Loadout, RemovalRequest};
pub use player::{HungerState, LifeState, Mutations, PlayerState, Species, Stat};
