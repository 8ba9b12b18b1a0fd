use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::state::TokenConfig;

pub fn transfer_ownership(ctx: Context<UpdateOwner>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), LockupError::ZeroAccount);
    let caller = ctx.accounts.owner.key();
    let previous_owner = ctx.accounts.token_config.replace_owner(&caller, new_owner)?;
    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    Ok(())
}

/// Drops ownership for good; rule registration is closed afterwards.
pub fn renounce_ownership(ctx: Context<UpdateOwner>) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let previous_owner = ctx
        .accounts
        .token_config
        .replace_owner(&caller, Pubkey::default())?;
    msg!("ownership renounced by {}", previous_owner);
    emit!(OwnershipTransferred {
        previous_owner,
        new_owner: Pubkey::default(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateOwner<'info> {
    #[account(mut, seeds = [b"token_config"], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
