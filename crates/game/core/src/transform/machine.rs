//! The transformation state machine: enter, extend, and revert.
//!
//! [`transform`] and [`untransform`] are the only writers of the player's
//! `form` and `form_duration` fields. Both drive the form catalog
//! generically; the per-form `match` blocks below hold only side effects
//! that are not expressible as table data (enchantment interactions,
//! undeath, flavour announcements).
//!
//! Ordering is load-bearing throughout. The curse guard must finish
//! before anything comes off; reversal must clear the attribute before
//! running per-form logic so nothing it calls observes a half-ended form;
//! hit-point rescaling happens last, against the recomputed maximum.

use tracing::debug;

use super::form::{FormFlags, Transformation};
use super::removal::{check_for_cursed_equipment, remove_equipment};
use crate::config::GameConfig;
use crate::env::{MsgChannel, TransformEnv};
use crate::error::TransformError;
use crate::state::{
    EnchantmentKind, EquipmentSlot, HungerState, LifeState, PlayerDisplay, PlayerState,
    RedrawFlags, RemovalRequest, Stat,
};

/// Attempts to enter `which` at the given spell power.
///
/// Re-entering the active form extends its duration instead. A different
/// active form is reverted first, then entry proceeds from the rest
/// state. On failure the player keeps their previous form, stats, and
/// equipment; the explanation has already been sent to the message sink.
///
/// The pre-switch side effects (stoneskin discard, display-dirty marks)
/// are applied before the curse and conflict guards and are not rolled
/// back if those fail; see DESIGN.md.
pub fn transform(
    player: &mut PlayerState,
    power: u32,
    which: Transformation,
    env: &mut TransformEnv<'_>,
) -> Result<(), TransformError> {
    // A water-bound body reasserts its natural form; only a flying form
    // gets it out of the water.
    if player.species.bound_to_water_form()
        && player.swimming
        && which != Transformation::Dragon
    {
        env.notify(
            "You cannot transform out of your normal form while in water.",
            MsgChannel::Plain,
        );
        return Err(TransformError::WaterBound);
    }

    // The rest state is not a form to enter; reverting is untransform's
    // job. Rejected before the same-form branch or the duration invariant
    // would be violated by "extending" a non-form.
    if which == Transformation::None {
        return Err(TransformError::FormlessTarget);
    }

    // Same form: extension. Must precede the reversion and undead checks
    // so an active lich can extend itself.
    if player.form == which {
        return extend_duration(player, power, env);
    }

    if player.form != Transformation::None {
        untransform(player, env);
    }

    if player.is_undead() {
        env.notify(
            "Your unliving flesh cannot be transformed in this way.",
            MsgChannel::Plain,
        );
        return Err(TransformError::UnlivingFlesh);
    }

    // Pre-switch side effects; see the function docs.
    player.enchantments.clear(EnchantmentKind::Stoneskin);
    player.mark_redraw(RedrawFlags::EVASION | RedrawFlags::ARMOUR_CLASS | RedrawFlags::WIELD);

    let profile = which.profile();
    let request = RemovalRequest::REMOVABLE.difference(profile.keeps);

    if profile.flags.contains(FormFlags::BLOCKS_ON_CURSED)
        && check_for_cursed_equipment(player, request, env)
    {
        return Err(TransformError::CursedEquipment);
    }

    if which == Transformation::Lich
        && player.enchantments.is_active(EnchantmentKind::DeathsDoor)
    {
        env.notify(
            "The transformation conflicts with an enchantment already in effect.",
            MsgChannel::Plain,
        );
        return Err(TransformError::ConflictingEnchantment);
    }

    announce_entry(player, which, env);

    if which == Transformation::Lich {
        // Undead cannot regenerate, and already resist poison.
        if player.enchantments.is_active(EnchantmentKind::Regeneration) {
            env.notify("You stop regenerating.", MsgChannel::Duration);
            player.enchantments.clear(EnchantmentKind::Regeneration);
        }
        player.enchantments.clear(EnchantmentKind::ResistPoison);
    }

    if profile.flags.contains(FormFlags::REMOVES_EQUIPMENT) {
        remove_equipment(player, request, env);
    }

    if profile.flags.contains(FormFlags::DROPS_INVENTORY) {
        let dropped = env.world.drop_all_inventory();
        if dropped > 0 {
            env.notify(
                "You find yourself unable to carry your possessions!",
                MsgChannel::Plain,
            );
        }
    }

    player.form = which;
    player.form_duration = profile.duration.roll(power, env.rng);

    modify_stat(player, Stat::Strength, profile.str_delta, true, env);
    modify_stat(player, Stat::Dexterity, profile.dex_delta, true, env);

    // Must follow the attribute switch: the maximum now includes the
    // form's factor.
    if profile.hp_factor > 10 {
        gain_form_hp(player, env);
    }

    match which {
        Transformation::IceBeast => {
            if player.enchantments.is_active(EnchantmentKind::IcyArmour) {
                env.notify("Your new body merges with your icy armour.", MsgChannel::Plain);
            }
        }
        Transformation::Statue => {
            if player.enchantments.is_active(EnchantmentKind::Stonemail)
                || player.enchantments.is_active(EnchantmentKind::Stoneskin)
            {
                env.notify("Your new body merges with your stone armour.", MsgChannel::Plain);
            }
        }
        Transformation::Lich => {
            player.life = LifeState::Undead;
            // No hunger while the body is dead.
            player.hunger = HungerState::Satiated;
            player.mark_redraw(RedrawFlags::HUNGER);
        }
        _ => {}
    }

    player.display = profile.display;
    debug!(form = %which, duration = player.form_duration, "transformation entered");
    Ok(())
}

/// Reverts to the rest state, exactly undoing the active form's effects.
///
/// Safe to call when already untransformed: the per-form reversal is a
/// no-op and the divisor stays neutral.
pub fn untransform(player: &mut PlayerState, env: &mut TransformEnv<'_>) {
    player.mark_redraw(RedrawFlags::EVASION | RedrawFlags::ARMOUR_CLASS | RedrawFlags::WIELD);
    player.display = PlayerDisplay::BASELINE;

    // Cleared before any reversal logic runs: anything called from here
    // must observe the rest state, or reversion could recurse.
    let old_form = player.form;
    player.form = Transformation::None;
    player.form_duration = 0;

    let profile = old_form.profile();

    if old_form != Transformation::None {
        env.notify(profile.exit_message, MsgChannel::Duration);
    }

    modify_stat(player, Stat::Strength, -profile.str_delta, true, env);
    modify_stat(player, Stat::Dexterity, -profile.dex_delta, true, env);

    match old_form {
        Transformation::BladeHands => {
            player.mark_redraw(RedrawFlags::WIELD);
        }
        Transformation::Statue => {
            // If the form goes down the merged enchantment soon follows;
            // the reverse isn't true.
            player.enchantments.shorten_to(EnchantmentKind::Stonemail, 1);
            player.enchantments.shorten_to(EnchantmentKind::Stoneskin, 1);
        }
        Transformation::IceBeast => {
            player.enchantments.shorten_to(EnchantmentKind::IcyArmour, 1);
        }
        Transformation::Dragon => {
            // Flight may just have ended over unwalkable terrain.
            env.world.recompute_terrain_movement();
        }
        Transformation::Lich => {
            player.life = LifeState::Alive;
        }
        _ => {}
    }

    if old_form.can_butcher_barehanded() {
        env.world.cancel_butcher_action();
    }

    // Barding-wearing species shed any ordinary boots acquired while
    // transformed. Curse state is deliberately not consulted.
    if player.species.wears_barding() {
        if let Some(boots) = player.loadout.equipped(EquipmentSlot::Boots) {
            if !env.items.is_species_barding(boots) {
                remove_equipment(player, RemovalRequest::BOOTS, env);
            }
        }
    }

    recalc_max_hp(player, env);
    let divisor = profile.hp_factor;
    if divisor != 10 {
        let rescaled = player.hp.current * 10 / divisor;
        player.hp.current = rescaled.clamp(1, player.hp.maximum);
    }

    if old_form != Transformation::None {
        debug!(form = %old_form, "transformation ended");
    }
}

/// Same-form duration extension, gated and clamped at the shared ceiling.
fn extend_duration(
    player: &mut PlayerState,
    power: u32,
    env: &mut TransformEnv<'_>,
) -> Result<(), TransformError> {
    if player.form_duration >= GameConfig::EXTENSION_CEILING {
        env.notify(
            "You cannot extend your transformation any further!",
            MsgChannel::Plain,
        );
        return Err(TransformError::ExtensionExhausted);
    }

    env.notify("You extend your transformation's duration.", MsgChannel::Plain);
    player.form_duration = (player.form_duration + env.rng.random_below(power))
        .min(GameConfig::EXTENSION_CEILING);
    Ok(())
}

/// Entry announcement, with species and terrain flavour variants.
fn announce_entry(player: &PlayerState, which: Transformation, env: &mut TransformEnv<'_>) {
    use crate::state::Species;

    let text = match which {
        Transformation::Statue => {
            if player.species == Species::Gnome && env.rng.coinflip() {
                "Look, a garden gnome.  How cute!"
            } else if player.species.is_dwarven() && env.rng.one_chance_in(10) {
                "You inwardly fear your resemblance to a lawn ornament."
            } else {
                which.profile().entry_message
            }
        }
        Transformation::Dragon if player.species.bound_to_water_form() && player.swimming => {
            "You fly out of the water as you turn into a fearsome dragon!"
        }
        _ => which.profile().entry_message,
    };
    env.notify(text, MsgChannel::Plain);
}

/// Adjusts one attribute, announcing the felt change when asked to.
fn modify_stat(
    player: &mut PlayerState,
    stat: Stat,
    delta: i32,
    announce: bool,
    env: &mut TransformEnv<'_>,
) {
    if delta == 0 {
        return;
    }
    player.apply_stat_delta(stat, delta);
    if announce {
        let text = match (stat, delta > 0) {
            (Stat::Strength, true) => "You feel stronger.",
            (Stat::Strength, false) => "You feel weaker.",
            (Stat::Dexterity, true) => "You feel agile.",
            (Stat::Dexterity, false) => "You feel clumsy.",
        };
        env.notify(text, MsgChannel::Plain);
    }
}

/// Recomputes the hit-point maximum: the external base formula times the
/// active form's factor. Does not clamp `current`; each caller rescales
/// and clamps by its own rule.
fn recalc_max_hp(player: &mut PlayerState, env: &TransformEnv<'_>) {
    let base = env.vitals.base_max_hp(player);
    player.hp.maximum = (base * player.form.profile().hp_factor / 10).max(1);
}

/// Applies a form's hit-point bonus on entry: recompute the maximum (the
/// attribute is already set, so the factor is included), then scale the
/// current value by the same factor, capped at the new maximum.
fn gain_form_hp(player: &mut PlayerState, env: &TransformEnv<'_>) {
    recalc_max_hp(player, env);
    let factor = player.form.profile().hp_factor;
    player.hp.current = (player.hp.current * factor / 10).min(player.hp.maximum);
}
