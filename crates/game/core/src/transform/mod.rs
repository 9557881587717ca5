//! The transformation subsystem.
//!
//! [`form`] is the catalog: one immutable parameter record per form.
//! [`machine`] enters, extends, and reverts forms against that table.
//! [`removal`] strips equipment and guards against curses. [`equip`]
//! answers, without side effects, whether a slot is usable right now.
mod equip;
mod form;
mod machine;
mod removal;

pub use equip::can_equip;
pub use form::{BodySize, DurationFormula, FormFlags, FormProfile, Transformation};
pub use machine::{transform, untransform};
pub use removal::{check_for_cursed_equipment, remove_equipment};
