//! Failure outcomes of the transformation state machine.
//!
//! None of these are faults: every variant is an expected gameplay result
//! whose explanation has already been shown to the player by the time the
//! error is returned. Callers that only care about success treat the
//! `Result` as the boolean it stands for.

/// Why a transformation attempt did not happen.
///
/// Every variant is recoverable and leaves the transformation attribute,
/// duration, stats, and equipment untouched. One caveat: the pre-switch
/// side effects (stoneskin discard, display-dirty marks) are applied
/// before the curse guard runs and are not rolled back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformError {
    /// A water-bound species cannot leave its natural form while swimming.
    #[error("cannot transform out of the normal form while in water")]
    WaterBound,

    /// The rest state is not a form to enter; reverting is `untransform`.
    #[error("there is no transformation to enter")]
    FormlessTarget,

    /// The active form's duration is already at the extension ceiling.
    #[error("transformation cannot be extended any further")]
    ExtensionExhausted,

    /// Undead bodies do not transform.
    #[error("unliving flesh cannot be transformed")]
    UnlivingFlesh,

    /// Cursed equipment in a slot that would have to come off.
    #[error("cursed equipment prevents the transformation")]
    CursedEquipment,

    /// An active enchantment is incompatible with the target form.
    #[error("the transformation conflicts with an active enchantment")]
    ConflictingEnchantment,
}
