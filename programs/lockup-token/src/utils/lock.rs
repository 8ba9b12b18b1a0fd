//! Locked-balance calculation (whole seconds, whole-day vesting steps).
//!
//! - before `timelock_until`: everything is locked
//! - at `timelock_until`: `perc_unlocked_at_time_unlock` bps are released
//! - from `timelock_until + vesting_starts_after_days`: the remainder decays
//!   linearly over `vesting_duration_days`, one step per elapsed day
//!
//! Every division truncates toward zero.

use crate::constants::{BPS_DENOMINATOR, SECONDS_PER_DAY};
use crate::error::{LockupError, LockupResult};
use crate::state::{InboundRule, LockSchedule};

/// Still-locked part of the tokens governed by an inbound rule.
pub fn locked_amount(rule: &InboundRule, now: i64) -> LockupResult<u64> {
    locked_portion(&rule.schedule, rule.tokens, now)
}

/// Still-locked part of `tokens` under `schedule` at `now`. Always in `[0, tokens]`.
pub fn locked_portion(schedule: &LockSchedule, tokens: u64, now: i64) -> LockupResult<u64> {
    if now < schedule.timelock_until {
        return Ok(tokens);
    }

    let total = tokens as u128;
    let released = total
        .checked_mul(schedule.perc_unlocked_at_time_unlock as u128)
        .ok_or(LockupError::MathOverflow)?
        / BPS_DENOMINATOR as u128;
    // Saturating: a rule above 100% releases everything.
    let base = total.saturating_sub(released);

    let vesting_start = schedule.vesting_start()?;
    if now < vesting_start || schedule.vesting_duration_days == 0 {
        return to_u64(base);
    }

    // now >= vesting_start, so the difference is non-negative.
    let days_elapsed = (now - vesting_start) / SECONDS_PER_DAY;
    let duration = schedule.vesting_duration_days as i64;
    if days_elapsed >= duration {
        return Ok(0);
    }

    let remaining_days = (duration - days_elapsed) as u128;
    let locked = base
        .checked_mul(remaining_days)
        .ok_or(LockupError::MathOverflow)?
        / duration as u128;
    to_u64(locked)
}

fn to_u64(v: u128) -> LockupResult<u64> {
    u64::try_from(v).map_err(|_| LockupError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const T: i64 = 1_700_000_000;
    const DAY: i64 = SECONDS_PER_DAY;

    fn schedule(starts_after: u32, duration: u32, perc: u16) -> LockSchedule {
        LockSchedule {
            timelock_until: T,
            vesting_starts_after_days: starts_after,
            vesting_duration_days: duration,
            perc_unlocked_at_time_unlock: perc,
        }
    }

    #[test]
    fn fully_locked_before_timelock() {
        let s = schedule(0, 300, 0);
        assert_eq!(locked_portion(&s, 1_000, T - 1).unwrap(), 1_000);
        assert_eq!(locked_portion(&s, 1_000, 0).unwrap(), 1_000);
    }

    #[test]
    fn instant_unlock_then_daily_decay() {
        let s = schedule(0, 360, 1_000); // 10%
        assert_eq!(locked_portion(&s, 1_000, T).unwrap(), 900);
        // 900 * 359 / 360 = 897.5, truncated.
        assert_eq!(locked_portion(&s, 1_000, T + DAY).unwrap(), 897);
        // Partial days do not count.
        assert_eq!(locked_portion(&s, 1_000, T + DAY - 1).unwrap(), 900);
        assert_eq!(locked_portion(&s, 1_000, T + 2 * DAY - 1).unwrap(), 897);
        assert_eq!(locked_portion(&s, 1_000, T + 359 * DAY).unwrap(), 2);
        assert_eq!(locked_portion(&s, 1_000, T + 360 * DAY).unwrap(), 0);
        assert_eq!(locked_portion(&s, 1_000, T + 3_600 * DAY).unwrap(), 0);
    }

    #[test]
    fn no_instant_unlock_keeps_everything_until_first_day() {
        let s = schedule(0, 360, 0);
        assert_eq!(locked_portion(&s, 1_000, T).unwrap(), 1_000);
        // 1000 * 359 / 360 = 997.2
        assert_eq!(locked_portion(&s, 1_000, T + DAY).unwrap(), 997);
    }

    #[test]
    fn full_instant_unlock_ignores_duration() {
        assert_eq!(locked_portion(&schedule(0, 0, 10_000), 1_000, T).unwrap(), 0);
        assert_eq!(locked_portion(&schedule(0, 720, 10_000), 1_000, T).unwrap(), 0);
        assert_eq!(locked_portion(&schedule(0, 0, 10_000), 1_000, T - 1).unwrap(), 1_000);
    }

    #[test]
    fn zero_duration_keeps_remainder_locked() {
        let s = schedule(0, 0, 2_500);
        assert_eq!(locked_portion(&s, 1_000, T).unwrap(), 750);
        assert_eq!(locked_portion(&s, 1_000, T + 10_000 * DAY).unwrap(), 750);
    }

    #[test]
    fn vesting_start_delay_holds_remainder_flat() {
        // 15% at unlock, 60 days flat, then 660 days of decay.
        let s = schedule(60, 660, 1_500);
        assert_eq!(locked_portion(&s, 10_000, T).unwrap(), 8_500);
        assert_eq!(locked_portion(&s, 10_000, T + 59 * DAY).unwrap(), 8_500);
        assert_eq!(locked_portion(&s, 10_000, T + 60 * DAY).unwrap(), 8_500);
        // 8500 * 659 / 660 = 8487.12
        assert_eq!(locked_portion(&s, 10_000, T + 61 * DAY).unwrap(), 8_487);
        assert_eq!(locked_portion(&s, 10_000, T + 720 * DAY).unwrap(), 0);
    }

    #[test]
    fn instant_unlock_truncates_released_share() {
        // 3 * 3333 / 10000 = 0.9999 -> nothing released.
        let s = schedule(0, 0, 3_333);
        assert_eq!(locked_portion(&s, 3, T).unwrap(), 3);
    }

    #[test]
    fn large_balances_do_not_overflow() {
        let s = schedule(0, 1_620, 1);
        let locked = locked_portion(&s, u64::MAX, T + DAY).unwrap();
        assert!(locked < u64::MAX);
    }

    #[test]
    fn inbound_rule_uses_its_token_counter() {
        let rule = InboundRule {
            id: 3,
            schedule: schedule(0, 360, 1_000),
            is_pool: false,
            tokens: 2_000,
        };
        assert_eq!(locked_amount(&rule, T).unwrap(), 1_800);
    }

    proptest! {
        /// Locked amount never grows as time passes and never exceeds the tokens.
        #[test]
        fn locked_is_bounded_and_non_increasing(
            tokens in any::<u64>(),
            starts_after in 0u32..400,
            duration in 0u32..2_000,
            perc in 0u16..=10_000,
            t1 in (T - 10 * DAY)..(T + 3_000 * DAY),
            dt in 0i64..(500 * DAY),
        ) {
            let s = schedule(starts_after, duration, perc);
            let a = locked_portion(&s, tokens, t1).unwrap();
            let b = locked_portion(&s, tokens, t1 + dt).unwrap();
            prop_assert!(a <= tokens);
            prop_assert!(b <= a);
        }
    }
}
