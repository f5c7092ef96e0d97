use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::events::Deposited;
use crate::vault;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,
    
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

/// Anyone may deposit while the room is not paused.
pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let room_key = ctx.accounts.room.key();
    let depositor = ctx.accounts.depositor.key();
    
    let pooled_balance = ctx.accounts.room.record_deposit(amount)?;
    
    vault::transfer_into_vault(
        &ctx.accounts.system_program,
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.room_vault.to_account_info(),
        amount,
    )?;
    
    msg!("Deposited {} lamports from {} (pool: {})", amount, depositor, pooled_balance);
    
    emit!(Deposited {
        room: room_key,
        depositor,
        deposited_value: amount,
        pooled_balance,
    });
    
    Ok(())
}
