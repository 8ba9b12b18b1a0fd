use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::state::Holder;

/// Read-only: clients simulate and decode the `BalanceStatsQuote` event.
pub fn emit_balance_stats(ctx: Context<EmitBalanceStats>) -> Result<()> {
    let holder = &ctx.accounts.holder;
    let now = Clock::get()?.unix_timestamp;
    let stats = holder.balance_stats(ctx.accounts.vault.amount, now)?;

    emit!(BalanceStatsQuote {
        wallet: holder.wallet,
        balance_total: stats.balance_total,
        balance_locked: stats.balance_locked,
        balance_unlocked: stats.balance_unlocked,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitBalanceStats<'info> {
    #[account(seeds = [b"holder", holder.wallet.as_ref()], bump = holder.bump)]
    pub holder: Account<'info, Holder>,

    #[account(seeds = [b"vault", holder.key().as_ref()], bump)]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct BalanceStatsQuote {
    pub wallet: Pubkey,
    pub balance_total: u64,
    pub balance_locked: u64,
    pub balance_unlocked: u64,
}
