use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod vault;

use instructions::*;

declare_id!("phck7ByvkDsXW4tnbnDVmE7HKs1gQ94a9MSrbGv2ydW");

#[program]
pub mod reward_room {
    use super::*;

    // ============ Room Initialization ============
    
    /// Create a room for `administrator` and seed its vault's rent reserve
    pub fn initialize_room(ctx: Context<InitializeRoom>, room_id: u64) -> Result<()> {
        instructions::initialize_room::handler(ctx, room_id)
    }

    // ============ Fund Flows ============
    
    /// Deposit SOL into the room pool (any signer, not while paused)
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Pay a one-time reward to `recipient` for `campaign_id`
    pub fn send_reward(ctx: Context<SendReward>, reward: u64, campaign_id: u64) -> Result<()> {
        instructions::send_reward::handler(ctx, reward, campaign_id)
    }

    /// Sweep the whole pool back to the administrator (inactive rooms only)
    pub fn refund_to_owner(ctx: Context<RefundToOwner>) -> Result<()> {
        instructions::refund::handler(ctx)
    }

    // ============ Lifecycle Gates ============
    
    pub fn activate(ctx: Context<SetRoomGate>) -> Result<()> {
        instructions::admin::activate_handler(ctx)
    }

    pub fn deactivate(ctx: Context<SetRoomGate>) -> Result<()> {
        instructions::admin::deactivate_handler(ctx)
    }

    pub fn pause(ctx: Context<SetRoomGate>) -> Result<()> {
        instructions::admin::pause_handler(ctx)
    }

    pub fn unpause(ctx: Context<SetRoomGate>) -> Result<()> {
        instructions::admin::unpause_handler(ctx)
    }

    // ============ Views ============
    
    pub fn is_active(ctx: Context<ReadRoom>) -> Result<bool> {
        instructions::views::is_active_handler(ctx)
    }

    pub fn is_paused(ctx: Context<ReadRoom>) -> Result<bool> {
        instructions::views::is_paused_handler(ctx)
    }

    /// Environment balance of the room (vault lamports above rent reserve)
    pub fn room_balance(ctx: Context<ReadRoom>) -> Result<u64> {
        instructions::views::room_balance_handler(ctx)
    }
}
