use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, SECONDS_PER_DAY};
use crate::error::{LockupError, LockupResult};

/// Lock and vesting parameters shared by outbound and inbound rules.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct LockSchedule {
    /// Unix seconds before which 100% of the governed tokens are locked.
    pub timelock_until: i64,
    /// Flat period (days) after `timelock_until` before decay begins.
    pub vesting_starts_after_days: u32,
    /// Linear decay period (days); 0 keeps the remainder locked forever.
    pub vesting_duration_days: u32,
    /// Basis points released the moment `timelock_until` is reached.
    pub perc_unlocked_at_time_unlock: u16,
}

impl LockSchedule {
    /// Registration-time checks. `now` is the current cluster time.
    pub fn validate(&self, now: i64) -> LockupResult<()> {
        if self.timelock_until <= now {
            return Err(LockupError::TimelockInPast);
        }
        if self.perc_unlocked_at_time_unlock == 0 && self.vesting_duration_days == 0 {
            return Err(LockupError::DegenerateRule);
        }
        if self.perc_unlocked_at_time_unlock > BPS_DENOMINATOR {
            return Err(LockupError::PercentageOutOfRange);
        }
        Ok(())
    }

    /// Timestamp at which linear decay starts.
    pub fn vesting_start(&self) -> LockupResult<i64> {
        i64::from(self.vesting_starts_after_days)
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|delay| self.timelock_until.checked_add(delay))
            .ok_or(LockupError::MathOverflow)
    }
}

/// Schedule a distributing account stamps onto the tokens it sends.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct OutboundRule {
    pub id: u64,
    pub schedule: LockSchedule,
}

/// Schedule governing tokens an account has received.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct InboundRule {
    /// Shared with the outbound rule this entry was propagated from.
    pub id: u64,
    pub schedule: LockSchedule,
    /// Marks the owning holder as a pool: its schedule is never overridden.
    pub is_pool: bool,
    /// Running total of tokens ever credited under this entry.
    pub tokens: u64,
}

impl InboundRule {
    /// Entry created the first time tokens arrive under `outbound`.
    pub fn propagated_from(outbound: &OutboundRule, tokens: u64) -> Self {
        Self {
            id: outbound.id,
            schedule: outbound.schedule,
            is_pool: false,
            tokens,
        }
    }

    pub fn credit(&mut self, amount: u64) -> LockupResult<()> {
        self.tokens = self
            .tokens
            .checked_add(amount)
            .ok_or(LockupError::MathOverflow)?;
        Ok(())
    }
}

/// Discriminant of a registration, as exposed to clients.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleType {
    Inbound,
    Outbound,
}

/// Instruction input for `register_transfer_rule`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleRegistration {
    Inbound { schedule: LockSchedule, is_pool: bool },
    Outbound { schedule: LockSchedule },
}

impl RuleRegistration {
    pub fn rule_type(&self) -> RuleType {
        match self {
            RuleRegistration::Inbound { .. } => RuleType::Inbound,
            RuleRegistration::Outbound { .. } => RuleType::Outbound,
        }
    }

    pub fn schedule(&self) -> &LockSchedule {
        match self {
            RuleRegistration::Inbound { schedule, .. } => schedule,
            RuleRegistration::Outbound { schedule } => schedule,
        }
    }

    /// Number of inbound entries this registration appends to the holder.
    pub fn inbound_slots(&self) -> usize {
        match self {
            RuleRegistration::Inbound { .. } => 1,
            RuleRegistration::Outbound { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(timelock_until: i64, duration: u32, perc: u16) -> LockSchedule {
        LockSchedule {
            timelock_until,
            vesting_starts_after_days: 0,
            vesting_duration_days: duration,
            perc_unlocked_at_time_unlock: perc,
        }
    }

    #[test]
    fn timelock_must_be_strictly_in_future() {
        let now = 1_700_000_000;
        assert!(matches!(
            schedule(now, 300, 0).validate(now),
            Err(LockupError::TimelockInPast)
        ));
        assert!(matches!(
            schedule(now - 1, 300, 0).validate(now),
            Err(LockupError::TimelockInPast)
        ));
        assert!(schedule(now + 1, 300, 0).validate(now).is_ok());
    }

    #[test]
    fn rejects_rule_that_never_unlocks() {
        let now = 1_700_000_000;
        assert!(matches!(
            schedule(now + 1000, 0, 0).validate(now),
            Err(LockupError::DegenerateRule)
        ));
        // Either knob alone is enough.
        assert!(schedule(now + 1000, 0, 1).validate(now).is_ok());
        assert!(schedule(now + 1000, 1, 0).validate(now).is_ok());
    }

    #[test]
    fn percentage_capped_at_100() {
        let now = 1_700_000_000;
        assert!(matches!(
            schedule(now + 1000, 0, 10_001).validate(now),
            Err(LockupError::PercentageOutOfRange)
        ));
        assert!(schedule(now + 1000, 0, 10_000).validate(now).is_ok());
    }

    #[test]
    fn vesting_start_offsets_whole_days() {
        let mut s = schedule(1_000, 10, 0);
        s.vesting_starts_after_days = 60;
        assert_eq!(s.vesting_start().unwrap(), 1_000 + 60 * SECONDS_PER_DAY);

        s.timelock_until = i64::MAX - 10;
        assert!(matches!(s.vesting_start(), Err(LockupError::MathOverflow)));
    }

    #[test]
    fn registration_variants() {
        let s = schedule(1_000, 10, 0);
        let inbound = RuleRegistration::Inbound {
            schedule: s,
            is_pool: true,
        };
        let outbound = RuleRegistration::Outbound { schedule: s };
        assert_eq!(inbound.rule_type(), RuleType::Inbound);
        assert_eq!(outbound.rule_type(), RuleType::Outbound);
        assert_eq!(inbound.inbound_slots(), 1);
        assert_eq!(outbound.inbound_slots(), 0);
        assert_eq!(outbound.schedule(), &s);
    }
}
