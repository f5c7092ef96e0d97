use anchor_lang::prelude::*;
use crate::errors::RoomError;
use crate::state::AccessControl;

/// Distribution mode of a room.
/// While `Active`, pooled funds are earmarked for rewards and cannot be
/// swept back to the administrator.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ActivationStatus {
    #[default]
    Inactive,
    Active,
}

impl ActivationStatus {
    pub const LEN: usize = 1;
    
    pub fn is_active(&self) -> bool {
        *self == ActivationStatus::Active
    }
    
    /// Inactive -> Active. Administrator only; re-activating is rejected.
    pub fn activate(&mut self, access: &AccessControl, caller: &Pubkey) -> Result<()> {
        access.require_administrator(caller)?;
        require!(!self.is_active(), RoomError::InvalidState);
        *self = ActivationStatus::Active;
        Ok(())
    }
    
    /// Active -> Inactive. Administrator only; deactivating an inactive room is rejected.
    pub fn deactivate(&mut self, access: &AccessControl, caller: &Pubkey) -> Result<()> {
        access.require_administrator(caller)?;
        require!(self.is_active(), RoomError::InvalidState);
        *self = ActivationStatus::Inactive;
        Ok(())
    }
}
