use anchor_lang::prelude::*;
use crate::errors::RoomError;
use crate::state::AccessControl;

/// Operational pause, independent of `ActivationStatus`.
/// Halts deposits only.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum PauseStatus {
    #[default]
    Unpaused,
    Paused,
}

impl PauseStatus {
    pub const LEN: usize = 1;
    
    pub fn is_paused(&self) -> bool {
        *self == PauseStatus::Paused
    }
    
    pub fn pause(&mut self, access: &AccessControl, caller: &Pubkey) -> Result<()> {
        access.require_administrator(caller)?;
        require!(!self.is_paused(), RoomError::InvalidState);
        *self = PauseStatus::Paused;
        Ok(())
    }
    
    pub fn unpause(&mut self, access: &AccessControl, caller: &Pubkey) -> Result<()> {
        access.require_administrator(caller)?;
        require!(self.is_paused(), RoomError::InvalidState);
        *self = PauseStatus::Unpaused;
        Ok(())
    }
}
