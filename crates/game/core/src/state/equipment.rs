//! Equipment slots and the removal-request set.
//!
//! The player has nine fixed equipment slots. Transformations only ever
//! strip the weapon and the armour range; the ring slots are outside the
//! removal domain entirely. Item ownership stays with the external
//! inventory; slots hold [`ItemHandle`] references that the core reads
//! and clears.

use bitflags::bitflags;

use super::ItemHandle;

/// Fixed body locations an item can occupy.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum EquipmentSlot {
    Weapon = 0,
    Cloak = 1,
    Helmet = 2,
    Gloves = 3,
    Boots = 4,
    Shield = 5,
    BodyArmour = 6,
    LeftRing = 7,
    RightRing = 8,
}

impl EquipmentSlot {
    /// Total number of slots.
    pub const COUNT: usize = 9;

    /// Armour slots stripped by transformations, in removal order.
    pub const ARMOUR: [EquipmentSlot; 6] = [
        EquipmentSlot::Cloak,
        EquipmentSlot::Helmet,
        EquipmentSlot::Gloves,
        EquipmentSlot::Boots,
        EquipmentSlot::Shield,
        EquipmentSlot::BodyArmour,
    ];

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// The removal-request bit for this slot, if it is in the removable range.
    pub const fn removal_bit(self) -> Option<RemovalRequest> {
        match self {
            EquipmentSlot::Weapon => Some(RemovalRequest::WEAPON),
            EquipmentSlot::Cloak => Some(RemovalRequest::CLOAK),
            EquipmentSlot::Helmet => Some(RemovalRequest::HELMET),
            EquipmentSlot::Gloves => Some(RemovalRequest::GLOVES),
            EquipmentSlot::Boots => Some(RemovalRequest::BOOTS),
            EquipmentSlot::Shield => Some(RemovalRequest::SHIELD),
            EquipmentSlot::BodyArmour => Some(RemovalRequest::BODY_ARMOUR),
            EquipmentSlot::LeftRing | EquipmentSlot::RightRing => None,
        }
    }
}

/// Equipped-item references, one per slot.
///
/// Equipping returns the previously held handle so callers can hand it
/// back to the inventory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    slots: [Option<ItemHandle>; EquipmentSlot::COUNT],
}

impl Loadout {
    /// Loadout with every slot empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the handle equipped in `slot`, if any.
    #[inline]
    pub fn equipped(&self, slot: EquipmentSlot) -> Option<ItemHandle> {
        self.slots[slot.as_index()]
    }

    /// Returns true if `slot` currently holds an item.
    #[inline]
    pub fn is_occupied(&self, slot: EquipmentSlot) -> bool {
        self.slots[slot.as_index()].is_some()
    }

    /// Places `item` in `slot`, returning the previously equipped handle if any.
    pub fn equip(&mut self, slot: EquipmentSlot, item: ItemHandle) -> Option<ItemHandle> {
        self.slots[slot.as_index()].replace(item)
    }

    /// Clears `slot`, returning the handle that was equipped if any.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<ItemHandle> {
        self.slots[slot.as_index()].take()
    }
}

bitflags! {
    /// Set of slots requested for transformation removal.
    ///
    /// Covers the removable range only (weapon plus the armour slots);
    /// rings cannot be requested by construction.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RemovalRequest: u8 {
        const WEAPON = 1 << 0;
        const CLOAK = 1 << 1;
        const HELMET = 1 << 2;
        const GLOVES = 1 << 3;
        const BOOTS = 1 << 4;
        const SHIELD = 1 << 5;
        const BODY_ARMOUR = 1 << 6;
    }
}

/// Cross-slot removal dependencies: requesting the first slot drags the
/// second into the request when the first is occupied. Body armour cannot
/// come off under a cloak, and a held weapon cannot stay in stripped
/// gloves.
pub const LINKED_REMOVALS: [(EquipmentSlot, EquipmentSlot); 2] = [
    (EquipmentSlot::BodyArmour, EquipmentSlot::Cloak),
    (EquipmentSlot::Gloves, EquipmentSlot::Weapon),
];

impl RemovalRequest {
    /// Every slot a transformation may strip.
    pub const REMOVABLE: Self = Self::all();

    /// Returns true if `slot` is requested.
    pub fn requests(self, slot: EquipmentSlot) -> bool {
        slot.removal_bit().is_some_and(|bit| self.contains(bit))
    }

    /// Adds `slot` to the request. Ring slots are ignored.
    pub fn request(&mut self, slot: EquipmentSlot) {
        if let Some(bit) = slot.removal_bit() {
            self.insert(bit);
        }
    }

    /// Applies the [`LINKED_REMOVALS`] expansion pass against the current
    /// loadout, returning the expanded request.
    ///
    /// Only occupied implying slots trigger their dependent slot.
    pub fn expanded(mut self, loadout: &Loadout) -> Self {
        for (cause, dependent) in LINKED_REMOVALS {
            if self.requests(cause) && loadout.is_occupied(cause) {
                self.request(dependent);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(slots: &[EquipmentSlot]) -> Loadout {
        let mut loadout = Loadout::empty();
        for (i, &slot) in slots.iter().enumerate() {
            loadout.equip(slot, ItemHandle(i as u32));
        }
        loadout
    }

    #[test]
    fn equip_returns_previous_handle() {
        let mut loadout = Loadout::empty();
        assert_eq!(loadout.equip(EquipmentSlot::Weapon, ItemHandle(7)), None);
        assert_eq!(
            loadout.equip(EquipmentSlot::Weapon, ItemHandle(9)),
            Some(ItemHandle(7))
        );
        assert_eq!(loadout.unequip(EquipmentSlot::Weapon), Some(ItemHandle(9)));
        assert_eq!(loadout.unequip(EquipmentSlot::Weapon), None);
    }

    #[test]
    fn body_armour_drags_cloak_when_worn() {
        let loadout = occupied(&[EquipmentSlot::BodyArmour, EquipmentSlot::Cloak]);
        let request = RemovalRequest::BODY_ARMOUR.expanded(&loadout);
        assert!(request.requests(EquipmentSlot::Cloak));
    }

    #[test]
    fn body_armour_expansion_requires_occupancy() {
        // Nothing worn on the body: the cloak stays out of the request.
        let loadout = occupied(&[EquipmentSlot::Cloak]);
        let request = RemovalRequest::BODY_ARMOUR.expanded(&loadout);
        assert!(!request.requests(EquipmentSlot::Cloak));
    }

    #[test]
    fn gloves_drag_weapon_when_worn() {
        let loadout = occupied(&[EquipmentSlot::Gloves, EquipmentSlot::Weapon]);
        let request = RemovalRequest::GLOVES.expanded(&loadout);
        assert!(request.requests(EquipmentSlot::Weapon));
    }

    #[test]
    fn unrelated_requests_pass_through_unchanged() {
        let loadout = occupied(&[EquipmentSlot::Helmet]);
        let request = RemovalRequest::HELMET | RemovalRequest::BOOTS;
        assert_eq!(request.expanded(&loadout), request);
    }

    #[test]
    fn rings_are_outside_the_removal_domain() {
        let mut request = RemovalRequest::empty();
        request.request(EquipmentSlot::LeftRing);
        request.request(EquipmentSlot::RightRing);
        assert!(request.is_empty());
        assert!(!RemovalRequest::REMOVABLE.requests(EquipmentSlot::LeftRing));
    }
}
