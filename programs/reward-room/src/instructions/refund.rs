use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::errors::RoomError;
use crate::events::RefundedToOwner;
use crate::vault;

/// Sweep the pool back to the administrator
/// Disabled while the room is Active
#[derive(Accounts)]
pub struct RefundToOwner<'info> {
    #[account(
        mut,
        address = room.access.administrator @ RoomError::Unauthorized
    )]
    pub administrator: Signer<'info>,
    
    #[account(
        mut,
        seeds = [ROOM_SEED, room.access.administrator.as_ref(), &room.room_id.to_le_bytes()],
        bump = room.bump
    )]
    pub room: Account<'info, RoomState>,
    
    /// CHECK: PDA that holds SOL
    #[account(
        mut,
        seeds = [ROOM_VAULT_SEED, room.key().as_ref()],
        bump = room.vault_bump
    )]
    pub room_vault: SystemAccount<'info>,
    
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RefundToOwner>) -> Result<()> {
    let room_key = ctx.accounts.room.key();
    let administrator = ctx.accounts.administrator.key();
    
    let room = &mut ctx.accounts.room;
    let pooled_balance = room.commit_refund(&administrator)?;
    let vault_bump = room.vault_bump;
    
    // Sweep everything above the rent reserve, including lamports that
    // reached the vault outside `deposit`
    let refunded_balance = vault::spendable_balance(&ctx.accounts.room_vault.to_account_info())?;
    require!(
        refunded_balance >= pooled_balance,
        RoomError::InsufficientBalance
    );
    
    vault::transfer_from_vault(
        &ctx.accounts.system_program,
        ctx.accounts.room_vault.to_account_info(),
        ctx.accounts.administrator.to_account_info(),
        &room_key,
        vault_bump,
        refunded_balance,
    )?;
    
    msg!(
        "Refunded {} lamports to administrator {} (pooled: {})",
        refunded_balance,
        administrator,
        pooled_balance
    );
    
    emit!(RefundedToOwner {
        room: room_key,
        dest: administrator,
        refunded_balance,
    });
    
    Ok(())
}
