//! Equipment stripping for forms that cannot wear gear.
//!
//! Removal itself cannot fail; only the curse guard can veto, and it must
//! run to completion before anything is unequipped or any stat changes,
//! for the forms that declare it. Forms without the guard strip cursed
//! gear like any other.

use crate::env::{MsgChannel, TransformEnv};
use crate::state::{EquipmentSlot, PlayerState, RedrawFlags, RemovalRequest};

/// Slots the curse guard scans, in order: the weapon first, then the
/// armour range.
fn removal_order() -> impl Iterator<Item = EquipmentSlot> {
    std::iter::once(EquipmentSlot::Weapon).chain(EquipmentSlot::ARMOUR)
}

/// Strips every requested, occupied slot.
///
/// The request is first expanded along the cross-slot dependency table
/// ([`crate::state::LINKED_REMOVALS`]): body armour drags the cloak,
/// gloves drag the weapon. The weapon comes off before any armour and
/// marks the wield line stale; each armour piece announces itself as it
/// falls away. Cleared handles remain owned by the external inventory.
pub fn remove_equipment(
    player: &mut PlayerState,
    request: RemovalRequest,
    env: &mut TransformEnv<'_>,
) {
    let request = request.expanded(&player.loadout);

    if request.requests(EquipmentSlot::Weapon)
        && player.loadout.unequip(EquipmentSlot::Weapon).is_some()
    {
        env.notify("You are empty-handed.", MsgChannel::Plain);
        player.mark_redraw(RedrawFlags::WIELD);
    }

    for slot in EquipmentSlot::ARMOUR {
        if !request.requests(slot) {
            continue;
        }
        let Some(item) = player.loadout.unequip(slot) else {
            continue;
        };
        let text = format!("Your {} falls away.", env.items.name(item));
        env.notify(&text, MsgChannel::Plain);
    }
}

/// Returns true (and tells the player) if any requested, occupied slot
/// holds a cursed item.
///
/// Scans the request as passed; expansion is the strip's concern. Used
/// to keep low-level transformations from doubling as curse removal.
pub fn check_for_cursed_equipment(
    player: &PlayerState,
    request: RemovalRequest,
    env: &mut TransformEnv<'_>,
) -> bool {
    for slot in removal_order() {
        if !request.requests(slot) {
            continue;
        }
        let Some(item) = player.loadout.equipped(slot) else {
            continue;
        };
        if env.items.is_cursed(item) {
            env.notify(
                "Your cursed equipment won't allow you to complete the transformation.",
                MsgChannel::Plain,
            );
            return true;
        }
    }
    false
}
