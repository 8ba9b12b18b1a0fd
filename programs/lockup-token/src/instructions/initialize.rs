use anchor_lang::prelude::*;
use anchor_spl::token::{
    self, spl_token::instruction::AuthorityType, Mint, MintTo, SetAuthority, Token, TokenAccount,
};

use crate::error::LockupError;
use crate::state::{Holder, TokenConfig};
use crate::utils::gate;

pub fn initialize(ctx: Context<Initialize>, total_supply: u64, decimals: u8) -> Result<()> {
    require!(total_supply > 0, LockupError::InvalidConfig);

    // Capture AccountInfos/keys before taking mutable borrows.
    let config_ai = ctx.accounts.token_config.to_account_info();
    let config_bump = ctx.bumps.token_config;
    let owner = ctx.accounts.owner.key();
    let mint_key = ctx.accounts.mint.key();

    let cfg = &mut ctx.accounts.token_config;
    cfg.owner = owner;
    cfg.mint = mint_key;
    cfg.last_rule_id = 0;
    cfg.decimals = decimals;
    cfg.bump = config_bump;
    cfg.mint_bump = ctx.bumps.mint;

    let holder = &mut ctx.accounts.owner_holder;
    holder.wallet = owner;
    holder.outbound_rule = None;
    holder.inbound_rules = Vec::new();
    holder.bump = ctx.bumps.owner_holder;

    let signer_seeds: &[&[&[u8]]] = &[&[b"token_config", &[config_bump]]];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.owner_vault.to_account_info(),
                authority: config_ai.clone(),
            },
            signer_seeds,
        ),
        total_supply,
    )?;
    // Minting skips enforcement but still goes through propagation.
    gate::propagate(None, &mut ctx.accounts.owner_holder, total_supply)?;

    // Fixed supply from here on.
    token::set_authority(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            SetAuthority {
                current_authority: config_ai,
                account_or_mint: ctx.accounts.mint.to_account_info(),
            },
            signer_seeds,
        ),
        AuthorityType::MintTokens,
        None,
    )?;

    emit!(TokenInitialized {
        owner,
        mint: mint_key,
        total_supply,
        decimals,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(total_supply: u64, decimals: u8)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + TokenConfig::SIZE,
        seeds = [b"token_config"],
        bump
    )]
    pub token_config: Account<'info, TokenConfig>,

    #[account(
        init,
        payer = owner,
        mint::decimals = decimals,
        mint::authority = token_config,
        seeds = [b"mint"],
        bump
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = owner,
        space = Holder::space(0),
        seeds = [b"holder", owner.key().as_ref()],
        bump
    )]
    pub owner_holder: Account<'info, Holder>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = owner_holder,
        seeds = [b"vault", owner_holder.key().as_ref()],
        bump
    )]
    pub owner_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TokenInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub total_supply: u64,
    pub decimals: u8,
}
