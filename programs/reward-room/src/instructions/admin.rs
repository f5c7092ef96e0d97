use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::errors::RoomError;
use crate::events::{Activated, Deactivated, Paused, Unpaused};

/// Flip one of the room's lifecycle gates
/// Only callable by the room administrator
#[derive(Accounts)]
pub struct SetRoomGate<'info> {
    #[account(
        address = room.access.administrator @ RoomError::Unauthorized
    )]
    pub administrator: Signer<'info>,
    
    #[account(
        mut,
        seeds = [ROOM_SEED, room.access.administrator.as_ref(), &room.room_id.to_le_bytes()],
        bump = room.bump
    )]
    pub room: Account<'info, RoomState>,
}

// ============================================================
// ACTIVATION
// ============================================================

pub fn activate_handler(ctx: Context<SetRoomGate>) -> Result<()> {
    let room_key = ctx.accounts.room.key();
    let sender = ctx.accounts.administrator.key();
    
    ctx.accounts.room.activate(&sender)?;
    msg!("Room activated - refunds locked");
    
    emit!(Activated { room: room_key, sender });
    Ok(())
}

pub fn deactivate_handler(ctx: Context<SetRoomGate>) -> Result<()> {
    let room_key = ctx.accounts.room.key();
    let sender = ctx.accounts.administrator.key();
    
    ctx.accounts.room.deactivate(&sender)?;
    msg!("Room deactivated - refunds unlocked");
    
    emit!(Deactivated { room: room_key, sender });
    Ok(())
}

// ============================================================
// PAUSE
// ============================================================

pub fn pause_handler(ctx: Context<SetRoomGate>) -> Result<()> {
    let room_key = ctx.accounts.room.key();
    let sender = ctx.accounts.administrator.key();
    
    ctx.accounts.room.pause(&sender)?;
    msg!("Room paused - deposits halted");
    
    emit!(Paused { room: room_key, sender });
    Ok(())
}

pub fn unpause_handler(ctx: Context<SetRoomGate>) -> Result<()> {
    let room_key = ctx.accounts.room.key();
    let sender = ctx.accounts.administrator.key();
    
    ctx.accounts.room.unpause(&sender)?;
    msg!("Room unpaused - deposits resumed");
    
    emit!(Unpaused { room: room_key, sender });
    Ok(())
}
