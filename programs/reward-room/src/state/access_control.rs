use anchor_lang::prelude::*;
use crate::errors::RoomError;

/// Single-administrator guard embedded in every room.
/// The administrator is fixed at initialization and never reassigned.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct AccessControl {
    pub administrator: Pubkey,
}

impl AccessControl {
    pub const LEN: usize = 32; // administrator
    
    pub fn new(administrator: Pubkey) -> Self {
        Self { administrator }
    }
    
    /// Fails with `Unauthorized` unless `caller` is the administrator.
    pub fn require_administrator(&self, caller: &Pubkey) -> Result<()> {
        require!(
            *caller == self.administrator,
            RoomError::Unauthorized
        );
        Ok(())
    }
    
    pub fn is_administrator(&self, key: &Pubkey) -> bool {
        *key == self.administrator
    }
}
