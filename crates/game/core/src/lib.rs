//! Deterministic player-transformation rules.
//!
//! `morph-core` owns the lifecycle of transient character forms: entering
//! a form (guards, equipment stripping, stat and hit-point adjustment),
//! extending it, reverting it exactly, and answering what may be equipped
//! while it lasts. All state mutation flows through
//! [`transform::transform`] and [`transform::untransform`] against an
//! explicit [`state::PlayerState`]; everything the rules cannot decide on
//! their own (item properties, the hit-point formula, dice, messages,
//! world side effects) is injected through the traits in [`env`].
pub mod config;
pub mod env;
pub mod error;
pub mod state;
pub mod transform;

#[cfg(test)]
pub(crate) mod testkit;

pub use config::GameConfig;
pub use env::{
    BufferedMessages, ItemOracle, MessageSink, MsgChannel, PcgRng, RngOracle, SilentMessages,
    TransformEnv, VitalsOracle, WorldHooks,
};
pub use error::TransformError;
pub use state::{
    Colour, Enchantment, EnchantmentKind, Enchantments, EquipmentSlot, HungerState, ItemHandle,
    LifeState, Loadout, Mutations, PlayerDisplay, PlayerState, RedrawFlags, RemovalRequest,
    ResourceMeter, Species, Stat,
};
pub use transform::{
    BodySize, DurationFormula, FormFlags, FormProfile, Transformation, can_equip,
    check_for_cursed_equipment, remove_equipment, transform, untransform,
};
