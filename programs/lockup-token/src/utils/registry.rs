//! Rule registration: validation, id allocation and storage.
//!
//! Checks run in a fixed order and all of them pass before anything is
//! written, so a rejected registration leaves config and holder untouched.

use anchor_lang::prelude::*;

use crate::error::{LockupError, LockupResult};
use crate::state::{Holder, InboundRule, OutboundRule, RuleRegistration, TokenConfig};

/// What a successful registration stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisteredRule {
    Outbound(OutboundRule),
    Inbound { index: usize, rule: InboundRule },
}

impl RegisteredRule {
    pub fn id(&self) -> u64 {
        match self {
            RegisteredRule::Outbound(rule) => rule.id,
            RegisteredRule::Inbound { rule, .. } => rule.id,
        }
    }
}

pub fn register_rule(
    config: &mut TokenConfig,
    caller: &Pubkey,
    holder: &mut Holder,
    registration: &RuleRegistration,
    now: i64,
) -> LockupResult<RegisteredRule> {
    config.ensure_owner(caller)?;
    if holder.wallet == Pubkey::default() {
        return Err(LockupError::ZeroAccount);
    }
    registration.schedule().validate(now)?;

    match *registration {
        RuleRegistration::Outbound { schedule } => {
            if holder.outbound_rule.is_some() {
                return Err(LockupError::DuplicateOutboundRule);
            }
            let rule = OutboundRule {
                id: config.allocate_rule_id()?,
                schedule,
            };
            holder.outbound_rule = Some(rule);
            Ok(RegisteredRule::Outbound(rule))
        }
        RuleRegistration::Inbound { schedule, is_pool } => {
            let rule = InboundRule {
                id: config.allocate_rule_id()?,
                schedule,
                is_pool,
                tokens: 0,
            };
            holder.inbound_rules.push(rule);
            Ok(RegisteredRule::Inbound {
                index: holder.inbound_rules.len() - 1,
                rule,
            })
        }
    }
}
