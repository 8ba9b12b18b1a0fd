use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::LockupError;
use crate::instructions::transfer_tokens::{move_tokens, TokensTransferred};
use crate::state::{Allowance, Holder};
use crate::utils::gate;

pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
    let accounts = ctx.accounts;
    accounts.allowance.consume(amount)?;

    let propagation = move_tokens(
        &accounts.token_program,
        &accounts.from_holder,
        &accounts.from_vault,
        &mut accounts.to_holder,
        &accounts.to_vault,
        amount,
    )?;

    emit!(TokensTransferred {
        from: accounts.from_holder.wallet,
        to: accounts.to_holder.wallet,
        spender: Some(accounts.spender.key()),
        amount,
        inbound_rule_id: propagation.rule_id(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferFrom<'info> {
    #[account(
        mut,
        seeds = [b"allowance", from_holder.wallet.as_ref(), spender.key().as_ref()],
        bump = allowance.bump
    )]
    pub allowance: Account<'info, Allowance>,

    #[account(
        seeds = [b"holder", from_holder.wallet.as_ref()],
        bump = from_holder.bump
    )]
    pub from_holder: Account<'info, Holder>,

    #[account(mut, seeds = [b"vault", from_holder.key().as_ref()], bump)]
    pub from_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"holder", to_holder.wallet.as_ref()],
        bump = to_holder.bump,
        constraint = to_holder.key() != from_holder.key() @ LockupError::SelfTransfer,
        realloc = Holder::space(
            to_holder.inbound_rules.len()
                + gate::inbound_slots_needed(from_holder.outbound_rule(), &to_holder)
        ),
        realloc::payer = spender,
        realloc::zero = false,
    )]
    pub to_holder: Account<'info, Holder>,

    #[account(mut, seeds = [b"vault", to_holder.key().as_ref()], bump)]
    pub to_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub spender: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
