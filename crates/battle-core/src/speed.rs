//! Speed and delay model.
//!
//! Pure functions mapping a participant's stats to its readiness gain per
//! tick, and a chosen action to the one-shot delay charged after it resolves.
//! Called by both the scheduler and the action-resolution layer; never holds
//! state, never fails, always returns a positive integer.
//!
//! Formulas:
//! - base_speed = 8 + agility/2 + level/5 (floor division)
//! - delay = max(per-action floor, base_delay - (agility - 10)/4)

/// Readiness gained per tick before any modifiers.
pub const BASE_SPEED: i32 = 8;

const AGILITY_DIVISOR: i32 = 2;
const LEVEL_DIVISOR: i32 = 5;

/// Minimum delay for attacks and spells regardless of agility.
const MIN_CAST_DELAY: i32 = 6;

/// Per-tick readiness gain for a participant.
///
/// Monotone non-decreasing in both inputs and always at least [`BASE_SPEED`]
/// for non-negative agility and level, so it can never reach zero under
/// normal data.
pub fn base_speed(agility: i32, level: i32) -> i32 {
    BASE_SPEED + agility.div_euclid(AGILITY_DIVISOR) + level.div_euclid(LEVEL_DIVISOR)
}

/// Delay reduction earned above 10 agility, one point per 4 agility.
///
/// Floored division: below 10 agility the adjustment goes negative and
/// lengthens delays when subtracted.
fn agility_adjustment(agility: i32) -> i32 {
    (agility - 10).div_euclid(4)
}

/// Weapon speed category, determined by the equipped weapon.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponSpeed {
    /// Bare hands - fastest
    Unarmed,
    /// Daggers, claws
    Light,
    /// Swords, spears, wands
    #[default]
    Standard,
    /// Axes, hammers, greatswords
    Heavy,
}

impl WeaponSpeed {
    /// Base delay charged for a basic attack with this weapon class.
    pub const fn base_delay(self) -> i32 {
        match self {
            WeaponSpeed::Unarmed => 4,
            WeaponSpeed::Light => 8,
            WeaponSpeed::Standard => 14,
            WeaponSpeed::Heavy => 22,
        }
    }
}

/// Spell effect category.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpellCategory {
    Buff,
    Debuff,
    Damage,
    Heal,
    Summon,
    Resurrection,
}

impl SpellCategory {
    /// Base delay before scope adjustment.
    pub const fn base_delay(self) -> i32 {
        match self {
            SpellCategory::Buff => 4,
            SpellCategory::Debuff => 5,
            SpellCategory::Damage => 6,
            SpellCategory::Heal => 8,
            SpellCategory::Summon => 12,
            SpellCategory::Resurrection => 16,
        }
    }
}

/// Who a spell targets. Wider scopes cost more time.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpellScope {
    SelfOnly,
    SingleAlly,
    SingleEnemy,
    AllAllies,
    AllEnemies,
}

impl SpellScope {
    /// Delay modifier added to the category base.
    pub const fn delay_modifier(self) -> i32 {
        match self {
            SpellScope::SelfOnly => -2,
            SpellScope::SingleAlly => 0,
            SpellScope::SingleEnemy => 2,
            SpellScope::AllAllies => 4,
            SpellScope::AllEnemies => 6,
        }
    }
}

/// Actions with a fixed base delay independent of equipment.
///
/// Each action carries its own minimum: Defend and Escape bottom out at 4,
/// UseItem at 6. The floors are per-action, not a shared constant.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FixedAction {
    Defend,
    Escape,
    UseItem,
}

impl FixedAction {
    /// Base delay before agility adjustment.
    pub const fn base_delay(self) -> i32 {
        match self {
            FixedAction::Defend => 2,
            FixedAction::Escape => 1,
            FixedAction::UseItem => 6,
        }
    }

    /// Lower bound on the adjusted delay for this action.
    pub const fn min_delay(self) -> i32 {
        match self {
            FixedAction::Defend | FixedAction::Escape => 4,
            FixedAction::UseItem => 6,
        }
    }
}

/// Delay charged for a basic attack.
pub fn attack_delay(weapon: WeaponSpeed, agility: i32) -> i32 {
    (weapon.base_delay() - agility_adjustment(agility)).max(MIN_CAST_DELAY)
}

/// Delay charged for casting a spell of the given category and scope.
pub fn spell_delay(category: SpellCategory, scope: SpellScope) -> i32 {
    (category.base_delay() + scope.delay_modifier()).max(MIN_CAST_DELAY)
}

/// Delay charged for a fixed action, adjusted for agility against the
/// action's own floor.
pub fn fixed_action_delay(action: FixedAction, agility: i32) -> i32 {
    (action.base_delay() - agility_adjustment(agility)).max(action.min_delay())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_speed_is_monotone_and_floored() {
        assert_eq!(base_speed(0, 0), 8);
        assert_eq!(base_speed(10, 5), 8 + 5 + 1);
        assert_eq!(base_speed(11, 9), 8 + 5 + 1);

        let mut prev = 0;
        for agility in 0..40 {
            let speed = base_speed(agility, 0);
            assert!(speed >= prev);
            assert!(speed >= BASE_SPEED);
            prev = speed;
        }
    }

    #[test]
    fn attack_delay_scales_with_agility() {
        // 22 - (18-10)/4 = 20
        assert_eq!(attack_delay(WeaponSpeed::Heavy, 18), 20);
        // Below 10 agility the adjustment turns negative and adds delay:
        // 22 - floor(-4/4) = 23
        assert_eq!(attack_delay(WeaponSpeed::Heavy, 6), 23);
        // Fast weapons bottom out at the cast floor.
        assert_eq!(attack_delay(WeaponSpeed::Unarmed, 30), 6);
    }

    #[test]
    fn spell_delay_combines_category_and_scope() {
        assert_eq!(
            spell_delay(SpellCategory::Damage, SpellScope::AllEnemies),
            12
        );
        // 4 - 2 = 2, floored at 6.
        assert_eq!(spell_delay(SpellCategory::Buff, SpellScope::SelfOnly), 6);
        assert_eq!(
            spell_delay(SpellCategory::Resurrection, SpellScope::SingleAlly),
            16
        );
    }

    #[test]
    fn fixed_actions_keep_their_own_floors() {
        // Defend and Escape floor at 4 even though their bases are lower.
        assert_eq!(fixed_action_delay(FixedAction::Defend, 10), 4);
        assert_eq!(fixed_action_delay(FixedAction::Escape, 14), 4);
        // UseItem floors at 6.
        assert_eq!(fixed_action_delay(FixedAction::UseItem, 30), 6);
        // Sluggish item use gets slower, not clamped.
        assert_eq!(fixed_action_delay(FixedAction::UseItem, 2), 8);
    }

    #[test]
    fn delays_are_always_positive() {
        for agility in -10..60 {
            assert!(attack_delay(WeaponSpeed::Unarmed, agility) > 0);
            assert!(fixed_action_delay(FixedAction::Escape, agility) > 0);
        }
    }
}
