use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::approve::{Approval, Approve};
pub use instructions::burn_tokens::{BurnTokens, TokensBurned};
pub use instructions::emit_balance_stats::{BalanceStatsQuote, EmitBalanceStats};
pub use instructions::emit_transfer_rules::{EmitTransferRules, InboundRuleQuote, OutboundRuleQuote};
pub use instructions::initialize::{Initialize, TokenInitialized};
pub use instructions::open_holder::{HolderOpened, OpenHolder};
pub use instructions::register_transfer_rule::{
    RegisterTransferRule, TransferRuleInboundRegistered, TransferRuleOutboundRegistered,
};
pub use instructions::transfer_from::TransferFrom;
pub use instructions::transfer_ownership::{OwnershipTransferred, UpdateOwner};
pub use instructions::transfer_tokens::{TokensTransferred, TransferTokens};
pub use state::RuleRegistration;

// Client account modules generated by `#[derive(Accounts)]`; the `#[program]`
// codegen looks them up at the crate root.
pub(crate) use instructions::approve::{__client_accounts_approve, __cpi_client_accounts_approve};
pub(crate) use instructions::burn_tokens::{
    __client_accounts_burn_tokens, __cpi_client_accounts_burn_tokens,
};
pub(crate) use instructions::emit_balance_stats::{
    __client_accounts_emit_balance_stats, __cpi_client_accounts_emit_balance_stats,
};
pub(crate) use instructions::emit_transfer_rules::{
    __client_accounts_emit_transfer_rules, __cpi_client_accounts_emit_transfer_rules,
};
pub(crate) use instructions::initialize::{
    __client_accounts_initialize, __cpi_client_accounts_initialize,
};
pub(crate) use instructions::open_holder::{
    __client_accounts_open_holder, __cpi_client_accounts_open_holder,
};
pub(crate) use instructions::register_transfer_rule::{
    __client_accounts_register_transfer_rule, __cpi_client_accounts_register_transfer_rule,
};
pub(crate) use instructions::transfer_from::{
    __client_accounts_transfer_from, __cpi_client_accounts_transfer_from,
};
pub(crate) use instructions::transfer_ownership::{
    __client_accounts_update_owner, __cpi_client_accounts_update_owner,
};
pub(crate) use instructions::transfer_tokens::{
    __client_accounts_transfer_tokens, __cpi_client_accounts_transfer_tokens,
};

declare_id!("BoUG4u7qP7JGVLNb4NbLV3pFBhDN26XeL74uETycBhot");

#[program]
pub mod lockup_token {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, total_supply: u64, decimals: u8) -> Result<()> {
        instructions::initialize::initialize(ctx, total_supply, decimals)
    }

    pub fn open_holder(ctx: Context<OpenHolder>, wallet: Pubkey) -> Result<()> {
        instructions::open_holder::open_holder(ctx, wallet)
    }

    pub fn register_transfer_rule(
        ctx: Context<RegisterTransferRule>,
        registration: RuleRegistration,
    ) -> Result<()> {
        instructions::register_transfer_rule::register_transfer_rule(ctx, registration)
    }

    pub fn transfer(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
        instructions::transfer_tokens::transfer(ctx, amount)
    }

    pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
        instructions::approve::approve(ctx, spender, amount)
    }

    pub fn transfer_from(ctx: Context<TransferFrom>, amount: u64) -> Result<()> {
        instructions::transfer_from::transfer_from(ctx, amount)
    }

    pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        instructions::burn_tokens::burn(ctx, amount)
    }

    pub fn transfer_ownership(ctx: Context<UpdateOwner>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::transfer_ownership(ctx, new_owner)
    }

    pub fn renounce_ownership(ctx: Context<UpdateOwner>) -> Result<()> {
        instructions::transfer_ownership::renounce_ownership(ctx)
    }

    pub fn emit_balance_stats(ctx: Context<EmitBalanceStats>) -> Result<()> {
        instructions::emit_balance_stats::emit_balance_stats(ctx)
    }

    pub fn emit_transfer_rules(ctx: Context<EmitTransferRules>) -> Result<()> {
        instructions::emit_transfer_rules::emit_transfer_rules(ctx)
    }
}
