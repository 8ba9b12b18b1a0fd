use anchor_lang::prelude::*;

use crate::error::{LockupError, LockupResult};

/// Singleton config PDA: ownership, mint and the global rule-id counter.
#[account]
pub struct TokenConfig {
    /// Only key allowed to register transfer rules. Default once renounced.
    pub owner: Pubkey,
    /// Fixed-supply mint; its authority is revoked at initialization.
    pub mint: Pubkey,
    /// Last rule id handed out (0 before the first registration).
    pub last_rule_id: u64,
    pub decimals: u8,
    pub bump: u8,
    pub mint_bump: u8,
}

impl TokenConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        8 +  // last_rule_id
        1 +  // decimals
        1 +  // bump
        1;   // mint_bump

    pub fn ensure_owner(&self, caller: &Pubkey) -> LockupResult<()> {
        if *caller != self.owner {
            return Err(LockupError::Unauthorized);
        }
        Ok(())
    }

    /// Hands ownership to `new_owner` (default key renounces). Returns the previous owner.
    pub fn replace_owner(&mut self, caller: &Pubkey, new_owner: Pubkey) -> LockupResult<Pubkey> {
        self.ensure_owner(caller)?;
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    /// Next rule id. Ids start at 1 and are never reused.
    pub fn allocate_rule_id(&mut self) -> LockupResult<u64> {
        let id = self
            .last_rule_id
            .checked_add(1)
            .ok_or(LockupError::MathOverflow)?;
        self.last_rule_id = id;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TokenConfig {
        TokenConfig {
            owner: Pubkey::new_from_array([1u8; 32]),
            mint: Pubkey::new_from_array([2u8; 32]),
            last_rule_id: 0,
            decimals: 9,
            bump: 254,
            mint_bump: 253,
        }
    }

    #[test]
    fn rule_ids_start_at_one_and_increase() {
        let mut cfg = config();
        assert_eq!(cfg.allocate_rule_id().unwrap(), 1);
        assert_eq!(cfg.allocate_rule_id().unwrap(), 2);
        assert_eq!(cfg.last_rule_id, 2);

        cfg.last_rule_id = u64::MAX;
        assert!(matches!(cfg.allocate_rule_id(), Err(LockupError::MathOverflow)));
    }

    #[test]
    fn ownership_handover_and_renounce() {
        let mut cfg = config();
        let owner = cfg.owner;
        let next = Pubkey::new_from_array([3u8; 32]);

        assert!(matches!(
            cfg.replace_owner(&next, next),
            Err(LockupError::Unauthorized)
        ));
        assert_eq!(cfg.replace_owner(&owner, next).unwrap(), owner);
        assert_eq!(cfg.owner, next);

        cfg.replace_owner(&next, Pubkey::default()).unwrap();
        assert!(matches!(
            cfg.ensure_owner(&next),
            Err(LockupError::Unauthorized)
        ));
    }
}
