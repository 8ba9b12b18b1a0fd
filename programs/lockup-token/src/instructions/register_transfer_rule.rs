use anchor_lang::prelude::*;

use crate::state::{Holder, InboundRule, OutboundRule, RuleRegistration, TokenConfig};
use crate::utils::registry::{self, RegisteredRule};

/// Owner-only entry point for both outbound and inbound rules.
pub fn register_transfer_rule(
    ctx: Context<RegisterTransferRule>,
    registration: RuleRegistration,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.authority.key();

    let registered = registry::register_rule(
        &mut ctx.accounts.token_config,
        &caller,
        &mut ctx.accounts.holder,
        &registration,
        now,
    )?;

    let wallet = ctx.accounts.holder.wallet;
    match registered {
        RegisteredRule::Outbound(rule) => {
            emit!(TransferRuleOutboundRegistered { wallet, rule });
        }
        RegisteredRule::Inbound { index, rule } => {
            emit!(TransferRuleInboundRegistered {
                wallet,
                index: index as u32,
                rule,
            });
        }
    }
    Ok(())
}

#[derive(Accounts)]
#[instruction(registration: RuleRegistration)]
pub struct RegisterTransferRule<'info> {
    #[account(mut, seeds = [b"token_config"], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    #[account(
        mut,
        seeds = [b"holder", holder.wallet.as_ref()],
        bump = holder.bump,
        realloc = Holder::space(holder.inbound_rules.len() + registration.inbound_slots()),
        realloc::payer = authority,
        realloc::zero = false,
    )]
    pub holder: Account<'info, Holder>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TransferRuleOutboundRegistered {
    pub wallet: Pubkey,
    pub rule: OutboundRule,
}

#[event]
pub struct TransferRuleInboundRegistered {
    pub wallet: Pubkey,
    pub index: u32,
    pub rule: InboundRule,
}
