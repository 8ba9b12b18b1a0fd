use anchor_lang::prelude::*;

use crate::state::{Holder, InboundRule, OutboundRule};

pub fn emit_transfer_rules(ctx: Context<EmitTransferRules>) -> Result<()> {
    let holder = &ctx.accounts.holder;
    let now = Clock::get()?.unix_timestamp;

    if let Some(rule) = holder.outbound_rule() {
        emit!(OutboundRuleQuote {
            wallet: holder.wallet,
            rule: *rule,
        });
    }
    for entry in holder.rule_report(now)? {
        emit!(InboundRuleQuote {
            wallet: holder.wallet,
            index: entry.index,
            rule: entry.rule,
            locked: entry.locked,
        });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct EmitTransferRules<'info> {
    #[account(seeds = [b"holder", holder.wallet.as_ref()], bump = holder.bump)]
    pub holder: Account<'info, Holder>,
}

#[event]
pub struct OutboundRuleQuote {
    pub wallet: Pubkey,
    pub rule: OutboundRule,
}

#[event]
pub struct InboundRuleQuote {
    pub wallet: Pubkey,
    /// Position in the holder's inbound list.
    pub index: u32,
    pub rule: InboundRule,
    pub locked: u64,
}
