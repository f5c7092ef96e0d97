use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::vault;

/// Read-only room queries, answered through return data
#[derive(Accounts)]
pub struct ReadRoom<'info> {
    #[account(
        seeds = [ROOM_SEED, room.access.administrator.as_ref(), &room.room_id.to_le_bytes()],
        bump = room.bump
    )]
    pub room: Account<'info, RoomState>,
    
    /// CHECK: PDA that holds SOL
    #[account(
        seeds = [ROOM_VAULT_SEED, room.key().as_ref()],
        bump = room.vault_bump
    )]
    pub room_vault: SystemAccount<'info>,
}

pub fn is_active_handler(ctx: Context<ReadRoom>) -> Result<bool> {
    Ok(ctx.accounts.room.is_active())
}

pub fn is_paused_handler(ctx: Context<ReadRoom>) -> Result<bool> {
    Ok(ctx.accounts.room.is_paused())
}

/// Lamports held by the vault above its rent reserve
pub fn room_balance_handler(ctx: Context<ReadRoom>) -> Result<u64> {
    vault::spendable_balance(&ctx.accounts.room_vault.to_account_info())
}
