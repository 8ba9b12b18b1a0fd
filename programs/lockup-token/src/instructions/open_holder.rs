use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::LockupError;
use crate::state::{Holder, TokenConfig};

/// Creates the rule account and custodied vault for `wallet`. Anyone may pay.
pub fn open_holder(ctx: Context<OpenHolder>, wallet: Pubkey) -> Result<()> {
    require!(wallet != Pubkey::default(), LockupError::ZeroAccount);

    let holder = &mut ctx.accounts.holder;
    holder.wallet = wallet;
    holder.outbound_rule = None;
    holder.inbound_rules = Vec::new();
    holder.bump = ctx.bumps.holder;

    msg!("holder opened for {}", wallet);
    emit!(HolderOpened {
        wallet,
        holder: holder.key(),
        vault: ctx.accounts.vault.key(),
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct OpenHolder<'info> {
    #[account(seeds = [b"token_config"], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    #[account(address = token_config.mint @ LockupError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = payer,
        space = Holder::space(0),
        seeds = [b"holder", wallet.as_ref()],
        bump
    )]
    pub holder: Account<'info, Holder>,

    #[account(
        init,
        payer = payer,
        token::mint = mint,
        token::authority = holder,
        seeds = [b"vault", holder.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct HolderOpened {
    pub wallet: Pubkey,
    pub holder: Pubkey,
    pub vault: Pubkey,
}
