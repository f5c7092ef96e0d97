use anchor_lang::prelude::*;

/// Proof that a reward was paid to `recipient` for `campaign_id`.
/// One RewardRecord per (room, recipient, campaign id); never closed, so a
/// pair can be paid at most once.
#[account]
#[derive(Default)]
pub struct RewardRecord {
    /// The room that paid the reward
    pub room: Pubkey,
    
    /// Wallet that received the reward
    pub recipient: Pubkey,
    
    /// Campaign the reward belongs to
    pub campaign_id: u64,
    
    /// Amount paid in lamports
    pub reward: u64,
    
    /// Set once the reward has been committed
    pub paid: bool,
    
    /// Timestamp of the payout
    pub paid_at: i64,
    
    /// PDA bump seed
    pub bump: u8,
}

impl RewardRecord {
    pub const LEN: usize = 8  // discriminator
        + 32  // room
        + 32  // recipient
        + 8   // campaign_id
        + 8   // reward
        + 1   // paid
        + 8   // paid_at
        + 1   // bump
        + 16; // padding
    
    pub fn is_paid(&self) -> bool {
        self.paid
    }
    
    pub(crate) fn mark_paid(
        &mut self,
        recipient: Pubkey,
        campaign_id: u64,
        reward: u64,
        paid_at: i64,
    ) {
        self.recipient = recipient;
        self.campaign_id = campaign_id;
        self.reward = reward;
        self.paid = true;
        self.paid_at = paid_at;
    }
}
