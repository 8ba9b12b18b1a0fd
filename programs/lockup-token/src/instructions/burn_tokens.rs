use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::error::LockupError;
use crate::state::{Holder, TokenConfig};
use crate::utils::gate;

/// Destroys unlocked tokens from the signer's vault. Burns never propagate.
pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let holder = &ctx.accounts.holder;
    gate::ensure_unlocked(holder, ctx.accounts.vault.amount, amount, now)?;

    let wallet = holder.wallet;
    let signer_seeds: &[&[&[u8]]] = &[&[b"holder", wallet.as_ref(), &[holder.bump]]];
    token::burn(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.vault.to_account_info(),
                authority: holder.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    ctx.accounts.mint.reload()?;
    emit!(TokensBurned {
        wallet,
        amount,
        total_supply: ctx.accounts.mint.supply,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(seeds = [b"token_config"], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    #[account(mut, address = token_config.mint @ LockupError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    #[account(
        seeds = [b"holder", authority.key().as_ref()],
        bump = holder.bump
    )]
    pub holder: Account<'info, Holder>,

    #[account(mut, seeds = [b"vault", holder.key().as_ref()], bump)]
    pub vault: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensBurned {
    pub wallet: Pubkey,
    pub amount: u64,
    /// Mint supply after the burn.
    pub total_supply: u64,
}
