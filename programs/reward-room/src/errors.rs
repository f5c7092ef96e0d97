use anchor_lang::prelude::*;

#[error_code]
pub enum RoomError {
    // ============================================================
    // ACCESS ERRORS
    // ============================================================
    
    #[msg("Caller is not the room administrator")]
    Unauthorized,
    
    #[msg("Administrator cannot be the zero address")]
    InvalidAdministrator,
    
    // ============================================================
    // STATE ERRORS
    // ============================================================
    
    #[msg("Room is not in the required lifecycle state")]
    InvalidState,
    
    // ============================================================
    // VALIDATION ERRORS
    // ============================================================
    
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    
    #[msg("Recipient cannot be the zero address or the administrator")]
    InvalidRecipient,
    
    #[msg("Reward already sent to this recipient for this campaign")]
    DuplicateReward,
    
    #[msg("Room balance is insufficient")]
    InsufficientBalance,
    
    // ============================================================
    // MATH ERRORS
    // ============================================================
    
    #[msg("Arithmetic overflow")]
    Overflow,
}
