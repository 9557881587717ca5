//! Equipment compatibility as a function of form, species, and mutations.
//!
//! Consulted by the external wear/wield flow before it attempts anything.
//! This is a pure query: nothing here mutates, and nothing here removes;
//! stripping on entry is [`super::removal`]'s job.

use super::form::Transformation;
use crate::state::{EquipmentSlot, Mutations, PlayerState, Species};

/// Can the player currently put something in `slot`?
///
/// Checked in order: species anatomy (only while the body shape is the
/// character's own), mutations (always), then the active form's policy.
pub fn can_equip(player: &PlayerState, slot: EquipmentSlot) -> bool {
    // Species anatomy applies only while the overall shape is unchanged;
    // a dragon has no naga tail to worry about.
    if !player.form.changes_physiology(false) {
        match slot {
            EquipmentSlot::Boots => {
                if matches!(
                    player.species,
                    Species::Naga | Species::Centaur | Species::Kenku
                ) {
                    return false;
                }
            }
            EquipmentSlot::Helmet => {
                if player.species == Species::Kenku {
                    return false;
                }
            }
            _ => {}
        }
    }

    // Mutations protrude through any form.
    if slot == EquipmentSlot::Helmet && player.mutations.horns > 0 {
        return false;
    }
    if slot == EquipmentSlot::Boots && player.mutations.hooves > 0 {
        return false;
    }
    if slot == EquipmentSlot::Gloves && player.mutations.claws >= Mutations::BLOCKING_CLAW_LEVEL {
        return false;
    }

    match player.form {
        Transformation::None | Transformation::Lich => true,

        Transformation::BladeHands => !matches!(
            slot,
            EquipmentSlot::Weapon | EquipmentSlot::Gloves | EquipmentSlot::Shield
        ),

        Transformation::Statue => matches!(
            slot,
            EquipmentSlot::Weapon | EquipmentSlot::Cloak | EquipmentSlot::Helmet
        ),

        Transformation::IceBeast => slot == EquipmentSlot::Cloak,

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_in_form(species: Species, form: Transformation) -> PlayerState {
        let mut player = PlayerState::new(species);
        player.form = form;
        if form != Transformation::None {
            player.form_duration = 10;
        }
        player
    }

    #[test]
    fn untransformed_human_can_wear_anything() {
        let player = PlayerState::new(Species::Human);
        for slot in [
            EquipmentSlot::Weapon,
            EquipmentSlot::Cloak,
            EquipmentSlot::Helmet,
            EquipmentSlot::Gloves,
            EquipmentSlot::Boots,
            EquipmentSlot::Shield,
            EquipmentSlot::BodyArmour,
            EquipmentSlot::LeftRing,
            EquipmentSlot::RightRing,
        ] {
            assert!(can_equip(&player, slot), "{slot} should be allowed");
        }
    }

    #[test]
    fn ice_beast_permits_only_the_cloak() {
        let player = player_in_form(Species::Human, Transformation::IceBeast);
        assert!(can_equip(&player, EquipmentSlot::Cloak));
        assert!(!can_equip(&player, EquipmentSlot::Boots));
        assert!(!can_equip(&player, EquipmentSlot::Weapon));
        assert!(!can_equip(&player, EquipmentSlot::LeftRing));
    }

    #[test]
    fn blade_hands_block_everything_held_or_worn_on_them() {
        let player = player_in_form(Species::Human, Transformation::BladeHands);
        assert!(!can_equip(&player, EquipmentSlot::Weapon));
        assert!(!can_equip(&player, EquipmentSlot::Gloves));
        assert!(!can_equip(&player, EquipmentSlot::Shield));
        assert!(can_equip(&player, EquipmentSlot::BodyArmour));
        assert!(can_equip(&player, EquipmentSlot::Helmet));
    }

    #[test]
    fn statue_permits_weapon_cloak_helmet_only() {
        let player = player_in_form(Species::Human, Transformation::Statue);
        assert!(can_equip(&player, EquipmentSlot::Weapon));
        assert!(can_equip(&player, EquipmentSlot::Cloak));
        assert!(can_equip(&player, EquipmentSlot::Helmet));
        assert!(!can_equip(&player, EquipmentSlot::Gloves));
        assert!(!can_equip(&player, EquipmentSlot::BodyArmour));
    }

    #[test]
    fn lich_form_changes_nothing_about_gear() {
        let player = player_in_form(Species::Human, Transformation::Lich);
        assert!(can_equip(&player, EquipmentSlot::Weapon));
        assert!(can_equip(&player, EquipmentSlot::BodyArmour));
    }

    #[test]
    fn fully_changed_forms_permit_nothing() {
        for form in [
            Transformation::Spider,
            Transformation::Dragon,
            Transformation::Air,
            Transformation::SerpentOfHell,
        ] {
            let player = player_in_form(Species::Human, form);
            assert!(!can_equip(&player, EquipmentSlot::Cloak), "cloak in {form}");
            assert!(!can_equip(&player, EquipmentSlot::Weapon), "weapon in {form}");
        }
    }

    #[test]
    fn species_anatomy_gates_boots_and_helmets() {
        for species in [Species::Naga, Species::Centaur, Species::Kenku] {
            let player = PlayerState::new(species);
            assert!(!can_equip(&player, EquipmentSlot::Boots), "{species} boots");
        }
        let kenku = PlayerState::new(Species::Kenku);
        assert!(!can_equip(&kenku, EquipmentSlot::Helmet));

        let naga = PlayerState::new(Species::Naga);
        assert!(can_equip(&naga, EquipmentSlot::Helmet));
    }

    #[test]
    fn species_anatomy_is_suspended_while_shapechanged() {
        // A kenku in statue form has a statue's head, not a beak.
        let player = player_in_form(Species::Kenku, Transformation::Statue);
        assert!(can_equip(&player, EquipmentSlot::Helmet));

        // Blade-hands change only the hands, so the beak still counts.
        let player = player_in_form(Species::Kenku, Transformation::BladeHands);
        assert!(!can_equip(&player, EquipmentSlot::Helmet));
    }

    #[test]
    fn mutations_block_slots_regardless_of_form() {
        let mut player = player_in_form(Species::Human, Transformation::Lich);
        player.mutations.horns = 1;
        player.mutations.hooves = 1;
        player.mutations.claws = Mutations::BLOCKING_CLAW_LEVEL;

        assert!(!can_equip(&player, EquipmentSlot::Helmet));
        assert!(!can_equip(&player, EquipmentSlot::Boots));
        assert!(!can_equip(&player, EquipmentSlot::Gloves));
        assert!(can_equip(&player, EquipmentSlot::BodyArmour));
    }

    #[test]
    fn low_claw_levels_still_fit_gloves() {
        let mut player = PlayerState::new(Species::Human);
        player.mutations.claws = Mutations::BLOCKING_CLAW_LEVEL - 1;
        assert!(can_equip(&player, EquipmentSlot::Gloves));
    }
}
