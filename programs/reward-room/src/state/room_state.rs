use anchor_lang::prelude::*;
use crate::errors::RoomError;
use crate::state::{AccessControl, ActivationStatus, PauseStatus, RewardRecord};

/// Pooled-reward room - one PDA per (administrator, room_id)
///
/// Holds the accounting side of the pool; the lamports themselves sit in the
/// room vault PDA. Every mutating method checks all of its preconditions
/// before touching any field, so a rejected call leaves the room unchanged.
/// Callers must apply these mutations before moving lamports out of the vault.
#[account]
#[derive(Default)]
pub struct RoomState {
    // ============================================================
    // IDENTIFICATION
    // ============================================================

    /// Administrator guard
    pub access: AccessControl,

    /// Distinguishes rooms owned by the same administrator
    pub room_id: u64,

    // ============================================================
    // LIFECYCLE GATES
    // ============================================================

    /// Blocks refunds while Active
    pub activation: ActivationStatus,

    /// Blocks deposits while Paused
    pub pause: PauseStatus,

    // ============================================================
    // ACCOUNTING
    // ============================================================

    /// Lamports available for rewards or refund
    pub pooled_balance: u64,

    /// Lifetime accepted deposits
    pub total_deposited: u64,

    /// Lifetime paid rewards
    pub total_rewarded: u64,

    /// Lifetime refunds swept to the administrator
    pub total_refunded: u64,

    /// Number of rewards paid
    pub rewards_sent: u64,

    /// Timestamp of initialization
    pub created_at: i64,

    /// PDA bump seed
    pub bump: u8,

    /// Vault PDA bump seed
    pub vault_bump: u8,
}

impl RoomState {
    pub const LEN: usize = 8  // discriminator
        + AccessControl::LEN  // access
        + 8   // room_id
        + ActivationStatus::LEN  // activation
        + PauseStatus::LEN  // pause
        + 8   // pooled_balance
        + 8   // total_deposited
        + 8   // total_rewarded
        + 8   // total_refunded
        + 8   // rewards_sent
        + 8   // created_at
        + 1   // bump
        + 1   // vault_bump
        + 32; // padding for future expansion

    pub fn new(
        administrator: Pubkey,
        room_id: u64,
        created_at: i64,
        bump: u8,
        vault_bump: u8,
    ) -> Self {
        Self {
            access: AccessControl::new(administrator),
            room_id,
            created_at,
            bump,
            vault_bump,
            ..Default::default()
        }
    }

    pub fn administrator(&self) -> Pubkey {
        self.access.administrator
    }

    pub fn is_active(&self) -> bool {
        self.activation.is_active()
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    // ============================================================
    // LIFECYCLE TRANSITIONS
    // ============================================================

    pub fn activate(&mut self, caller: &Pubkey) -> Result<()> {
        self.activation.activate(&self.access, caller)
    }

    pub fn deactivate(&mut self, caller: &Pubkey) -> Result<()> {
        self.activation.deactivate(&self.access, caller)
    }

    pub fn pause(&mut self, caller: &Pubkey) -> Result<()> {
        self.pause.pause(&self.access, caller)
    }

    pub fn unpause(&mut self, caller: &Pubkey) -> Result<()> {
        self.pause.unpause(&self.access, caller)
    }

    // ============================================================
    // FUND FLOWS
    // ============================================================

    /// Accept a deposit from any caller. Returns the new pooled balance.
    pub fn record_deposit(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, RoomError::InvalidAmount);
        require!(!self.is_paused(), RoomError::InvalidState);

        let pooled_balance = self.pooled_balance
            .checked_add(amount)
            .ok_or(RoomError::Overflow)?;
        let total_deposited = self.total_deposited
            .checked_add(amount)
            .ok_or(RoomError::Overflow)?;

        self.pooled_balance = pooled_balance;
        self.total_deposited = total_deposited;

        Ok(pooled_balance)
    }

    /// Recipients may be neither the zero address, the administrator, nor one
    /// of the room's own accounts (`room_accounts`: the room and its vault).
    pub fn validate_recipient(&self, recipient: &Pubkey, room_accounts: &[Pubkey]) -> Result<()> {
        require!(
            *recipient != Pubkey::default()
                && !self.access.is_administrator(recipient)
                && !room_accounts.contains(recipient),
            RoomError::InvalidRecipient
        );
        Ok(())
    }

    /// Commit a reward payout: marks `record` paid and debits the pool.
    /// Returns the remaining pooled balance. The lamport transfer must happen
    /// only after this returns, so a reentrant replay sees the paid record.
    ///
    /// Preconditions, first failure wins:
    /// administrator, reward > 0, valid recipient, not already paid, reward <= pool.
    pub fn commit_reward(
        &mut self,
        caller: &Pubkey,
        reward: u64,
        recipient: &Pubkey,
        room_accounts: &[Pubkey],
        campaign_id: u64,
        record: &mut RewardRecord,
        paid_at: i64,
    ) -> Result<u64> {
        self.access.require_administrator(caller)?;
        require!(reward > 0, RoomError::InvalidAmount);
        self.validate_recipient(recipient, room_accounts)?;
        require!(!record.is_paid(), RoomError::DuplicateReward);
        require!(
            reward <= self.pooled_balance,
            RoomError::InsufficientBalance
        );

        let pooled_balance = self.pooled_balance
            .checked_sub(reward)
            .ok_or(RoomError::InsufficientBalance)?;
        let total_rewarded = self.total_rewarded
            .checked_add(reward)
            .ok_or(RoomError::Overflow)?;
        let rewards_sent = self.rewards_sent
            .checked_add(1)
            .ok_or(RoomError::Overflow)?;

        record.mark_paid(*recipient, campaign_id, reward, paid_at);
        self.pooled_balance = pooled_balance;
        self.total_rewarded = total_rewarded;
        self.rewards_sent = rewards_sent;

        Ok(pooled_balance)
    }

    /// Sweep the whole pool back to the administrator; only while inactive.
    /// Returns the pooled amount released. Zeroes the pool before any transfer.
    pub fn commit_refund(&mut self, caller: &Pubkey) -> Result<u64> {
        self.access.require_administrator(caller)?;
        require!(!self.is_active(), RoomError::InvalidState);
        require!(self.pooled_balance > 0, RoomError::InsufficientBalance);

        let refunded = self.pooled_balance;
        let total_refunded = self.total_refunded
            .checked_add(refunded)
            .ok_or(RoomError::Overflow)?;

        self.pooled_balance = 0;
        self.total_refunded = total_refunded;

        Ok(refunded)
    }
}
