use anchor_lang::prelude::*;

use crate::error::LockupResult;
use crate::state::{InboundRule, OutboundRule};
use crate::utils::lock;

/// Per-wallet rule storage. Tokens live in the holder's vault token account.
#[account]
pub struct Holder {
    /// Wallet this holder belongs to (signs transfers out of the vault).
    pub wallet: Pubkey,
    /// Schedule stamped onto tokens this wallet sends. Immutable once set.
    pub outbound_rule: Option<OutboundRule>,
    /// Append-only; insertion order is the first-seen order of rule ids.
    pub inbound_rules: Vec<InboundRule>,
    pub bump: u8,
}

impl Holder {
    /// Account size (with discriminator) for `inbound` stored entries.
    pub fn space(inbound: usize) -> usize {
        8 + // discriminator
        32 + // wallet
        1 + OutboundRule::INIT_SPACE + // outbound_rule (tag + payload)
        4 + inbound * InboundRule::INIT_SPACE + // vec
        1 // bump
    }

    pub fn outbound_rule(&self) -> Option<&OutboundRule> {
        self.outbound_rule.as_ref()
    }

    pub fn inbound_rules(&self) -> &[InboundRule] {
        &self.inbound_rules
    }

    /// Position and entry of the inbound rule with `id`.
    pub fn find_inbound_rule(&self, id: u64) -> Option<(usize, &InboundRule)> {
        self.inbound_rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.id == id)
    }

    /// Index of the first inbound rule flagged as a pool, if any.
    pub fn pool_rule_index(&self) -> Option<usize> {
        self.inbound_rules.iter().position(|rule| rule.is_pool)
    }

    pub fn is_pool(&self) -> bool {
        self.pool_rule_index().is_some()
    }

    /// Sum of the still-locked portions of all inbound rules.
    ///
    /// Saturates at `u64::MAX`; no balance can exceed that, so a saturated
    /// sum still blocks every debit.
    pub fn locked_balance(&self, now: i64) -> LockupResult<u64> {
        let mut locked: u64 = 0;
        for rule in self.inbound_rules.iter() {
            locked = locked.saturating_add(lock::locked_amount(rule, now)?);
        }
        Ok(locked)
    }

    /// Total/locked/unlocked view of `balance` (the vault amount).
    pub fn balance_stats(&self, balance: u64, now: i64) -> LockupResult<BalanceStats> {
        let locked = self.locked_balance(now)?;
        Ok(BalanceStats {
            balance_total: balance,
            balance_locked: locked,
            balance_unlocked: balance.saturating_sub(locked),
        })
    }

    /// Inbound rules in list order with their locked amount at `now`.
    pub fn rule_report(&self, now: i64) -> LockupResult<Vec<RuleLockReport>> {
        self.inbound_rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                Ok(RuleLockReport {
                    index: index as u32,
                    rule: *rule,
                    locked: lock::locked_amount(rule, now)?,
                })
            })
            .collect()
    }
}

/// Aggregate balance view reported by `emit_balance_stats`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceStats {
    pub balance_total: u64,
    pub balance_locked: u64,
    pub balance_unlocked: u64,
}

/// One inbound rule and its current locked amount.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleLockReport {
    pub index: u32,
    pub rule: InboundRule,
    pub locked: u64,
}
