use anchor_lang::prelude::*;
use crate::state::RoomState;
use crate::constants::*;
use crate::errors::RoomError;
use crate::events::RoomInitialized;
use crate::vault;

#[derive(Accounts)]
#[instruction(room_id: u64)]
pub struct InitializeRoom<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    
    /// CHECK: Room administrator - any wallet except the zero address
    #[account(
        constraint = administrator.key() != Pubkey::default() @ RoomError::InvalidAdministrator
    )]
    pub administrator: UncheckedAccount<'info>,
    
    #[account(
        init,
        payer = payer,
        space = RoomState::LEN,
        seeds = [ROOM_SEED, administrator.key().as_ref(), &room_id.to_le_bytes()],
        bump
    )]
    pub room: Account<'info, RoomState>,
    
    /// Vault PDA holding the pooled lamports
    #[account(
        mut,
        seeds = [ROOM_VAULT_SEED, room.key().as_ref()],
        bump
    )]
    pub room_vault: SystemAccount<'info>,
    
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeRoom>, room_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let administrator = ctx.accounts.administrator.key();
    let room_key = ctx.accounts.room.key();
    
    // Vault keeps its rent reserve for life; only lamports above it are pooled
    let reserve = vault::rent_reserve()?;
    let vault_lamports = ctx.accounts.room_vault.lamports();
    if vault_lamports < reserve {
        vault::transfer_into_vault(
            &ctx.accounts.system_program,
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.room_vault.to_account_info(),
            reserve - vault_lamports,
        )?;
    }
    
    ctx.accounts.room.set_inner(RoomState::new(
        administrator,
        room_id,
        clock.unix_timestamp,
        ctx.bumps.room,
        ctx.bumps.room_vault,
    ));
    
    msg!("Room {} initialized for administrator {}", room_id, administrator);
    
    emit!(RoomInitialized {
        room: room_key,
        administrator,
        room_id,
    });
    
    Ok(())
}
