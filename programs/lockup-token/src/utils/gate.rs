//! Transfer gate: runs around every token movement.
//!
//! 1. enforcement on the sender (skipped when minting)
//! 2. balance movement (SPL CPI, done by the instruction handler)
//! 3. propagation onto the recipient (skipped when burning)
//!
//! Propagation only looks at the sender's *outbound* rule. Inbound rules a
//! sender has accumulated never follow the tokens any further.

use crate::error::{LockupError, LockupResult};
use crate::state::{Holder, InboundRule, OutboundRule};

/// How a credited amount was recorded on the recipient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// No pool rule on the recipient and no outbound rule on the sender.
    Untracked,
    /// Added to the recipient's pool rule.
    Pool { index: usize, rule_id: u64 },
    /// Added to an existing entry carrying the sender's outbound rule id.
    Merged { index: usize, rule_id: u64 },
    /// New entry cloned from the sender's outbound rule, appended last.
    Appended { index: usize, rule_id: u64 },
}

impl Propagation {
    pub fn rule_id(&self) -> Option<u64> {
        match *self {
            Propagation::Untracked => None,
            Propagation::Pool { rule_id, .. }
            | Propagation::Merged { rule_id, .. }
            | Propagation::Appended { rule_id, .. } => Some(rule_id),
        }
    }
}

/// Rejects a debit of `amount` that would leave `balance` below the sender's
/// locked tokens. Returns the locked amount that was checked against.
///
/// Zero amounts are rejected outright, unlike a plain ERC20 token.
pub fn ensure_unlocked(sender: &Holder, balance: u64, amount: u64, now: i64) -> LockupResult<u64> {
    if amount == 0 {
        return Err(LockupError::InvalidAmount);
    }
    let remaining = balance
        .checked_sub(amount)
        .ok_or(LockupError::InsufficientBalance)?;
    let locked = sender.locked_balance(now)?;
    if remaining < locked {
        return Err(LockupError::InsufficientUnlocked);
    }
    Ok(locked)
}

enum Plan {
    Untracked,
    Pool(usize),
    Merge(usize),
    Append(OutboundRule),
}

fn plan(sender_outbound: Option<&OutboundRule>, recipient: &Holder) -> Plan {
    if let Some(index) = recipient.pool_rule_index() {
        return Plan::Pool(index);
    }
    match sender_outbound {
        None => Plan::Untracked,
        Some(outbound) => match recipient.find_inbound_rule(outbound.id) {
            Some((index, _)) => Plan::Merge(index),
            None => Plan::Append(*outbound),
        },
    }
}

/// Inbound entries `propagate` would append (0 or 1); sizes the recipient account.
pub fn inbound_slots_needed(sender_outbound: Option<&OutboundRule>, recipient: &Holder) -> usize {
    match plan(sender_outbound, recipient) {
        Plan::Append(_) => 1,
        _ => 0,
    }
}

/// Records `amount` credited to `recipient` against the right inbound rule.
pub fn propagate(
    sender_outbound: Option<&OutboundRule>,
    recipient: &mut Holder,
    amount: u64,
) -> LockupResult<Propagation> {
    match plan(sender_outbound, recipient) {
        Plan::Untracked => Ok(Propagation::Untracked),
        Plan::Pool(index) => {
            let rule = &mut recipient.inbound_rules[index];
            rule.credit(amount)?;
            Ok(Propagation::Pool {
                index,
                rule_id: rule.id,
            })
        }
        Plan::Merge(index) => {
            let rule = &mut recipient.inbound_rules[index];
            rule.credit(amount)?;
            Ok(Propagation::Merged {
                index,
                rule_id: rule.id,
            })
        }
        Plan::Append(outbound) => {
            recipient
                .inbound_rules
                .push(InboundRule::propagated_from(&outbound, amount));
            Ok(Propagation::Appended {
                index: recipient.inbound_rules.len() - 1,
                rule_id: outbound.id,
            })
        }
    }
}
