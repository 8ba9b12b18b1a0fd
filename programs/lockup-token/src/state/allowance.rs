use anchor_lang::prelude::*;

use crate::error::{LockupError, LockupResult};

/// Amount `spender` may move out of `owner`'s holder via `transfer_from`.
#[account]
pub struct Allowance {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl Allowance {
    pub const SIZE: usize =
        32 + // owner
        32 + // spender
        8 +  // amount
        1;   // bump

    pub fn consume(&mut self, amount: u64) -> LockupResult<()> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(LockupError::InsufficientAllowance)?;
        Ok(())
    }
}
