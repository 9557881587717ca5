/// Rule constants and compile-time bounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig;

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum simultaneously tracked enchantments on the player.
    pub const MAX_ENCHANTMENTS: usize = 8;

    // ===== rule constants =====
    /// Shared ceiling for same-form duration extension.
    ///
    /// Distinct from the per-form entry caps: extending an active form
    /// gates and clamps at this value for every form, so a long-capped
    /// form (air, 150) cannot be topped back up past it and a short-capped
    /// form (spider, 60) can exceed its own entry cap through extension.
    pub const EXTENSION_CEILING: u32 = 100;
}
