use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LockupError;
use crate::state::Holder;
use crate::utils::gate::{self, Propagation};

pub fn transfer(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
    let accounts = ctx.accounts;
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
        spender: None,
        amount,
        inbound_rule_id: propagation.rule_id(),
    });
    Ok(())
}

/// Gate-wrapped vault to vault movement shared by `transfer` and `transfer_from`.
///
/// Enforcement runs against the sender's vault balance, the SPL transfer is
/// signed by the sender's holder PDA, then the amount is recorded on the
/// recipient under the sender's outbound rule (or the recipient's pool rule).
///
/// Unlike a plain ERC20 token, zero amounts fail with `InvalidAmount` and a
/// holder cannot transfer to itself (`SelfTransfer`, checked on the accounts).
pub(crate) fn move_tokens<'info>(
    token_program: &Program<'info, Token>,
    from_holder: &Account<'info, Holder>,
    from_vault: &Account<'info, TokenAccount>,
    to_holder: &mut Account<'info, Holder>,
    to_vault: &Account<'info, TokenAccount>,
    amount: u64,
) -> Result<Propagation> {
    let now = Clock::get()?.unix_timestamp;

    if let Err(err) = gate::ensure_unlocked(from_holder, from_vault.amount, amount, now) {
        msg!(
            "transfer of {} from {} rejected (balance {})",
            amount,
            from_holder.wallet,
            from_vault.amount
        );
        return Err(err.into());
    }

    let wallet = from_holder.wallet;
    let signer_seeds: &[&[&[u8]]] = &[&[b"holder", wallet.as_ref(), &[from_holder.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: from_vault.to_account_info(),
                to: to_vault.to_account_info(),
                authority: from_holder.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let propagation = gate::propagate(from_holder.outbound_rule(), to_holder, amount)?;
    match propagation {
        Propagation::Untracked => {}
        Propagation::Pool { rule_id, .. } => msg!("credited pool rule {}", rule_id),
        Propagation::Merged { rule_id, .. } => msg!("merged into inbound rule {}", rule_id),
        Propagation::Appended { index, rule_id } => {
            msg!("appended inbound rule {} at {}", rule_id, index)
        }
    }
    Ok(propagation)
}

#[derive(Accounts)]
pub struct TransferTokens<'info> {
    #[account(
        seeds = [b"holder", authority.key().as_ref()],
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
        realloc::payer = authority,
        realloc::zero = false,
    )]
    pub to_holder: Account<'info, Holder>,

    #[account(mut, seeds = [b"vault", to_holder.key().as_ref()], bump)]
    pub to_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    /// Set when the movement went through an allowance.
    pub spender: Option<Pubkey>,
    pub amount: u64,
    /// Inbound rule on the recipient that was credited, if any.
    pub inbound_rule_id: Option<u64>,
}
