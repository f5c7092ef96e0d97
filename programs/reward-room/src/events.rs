use anchor_lang::prelude::*;

// ============================================================
// ROOM LIFECYCLE EVENTS
// ============================================================

#[event]
pub struct RoomInitialized {
    pub room: Pubkey,
    pub administrator: Pubkey,
    pub room_id: u64,
}

#[event]
pub struct Activated {
    pub room: Pubkey,
    pub sender: Pubkey,
}

#[event]
pub struct Deactivated {
    pub room: Pubkey,
    pub sender: Pubkey,
}

#[event]
pub struct Paused {
    pub room: Pubkey,
    pub sender: Pubkey,
}

#[event]
pub struct Unpaused {
    pub room: Pubkey,
    pub sender: Pubkey,
}

// ============================================================
// FUND EVENTS
// ============================================================

#[event]
pub struct Deposited {
    pub room: Pubkey,
    pub depositor: Pubkey,
    pub deposited_value: u64,
    pub pooled_balance: u64,
}

#[event]
pub struct RewardSent {
    pub room: Pubkey,
    pub dest: Pubkey,
    pub reward: u64,
    pub id: u64,
    pub pooled_balance: u64,
}

#[event]
pub struct RefundedToOwner {
    pub room: Pubkey,
    pub dest: Pubkey,
    pub refunded_balance: u64,
}
