use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::errors::RoomError;
use crate::events::RewardSent;
use crate::vault;

#[derive(Accounts)]
#[instruction(reward: u64, campaign_id: u64)]
pub struct SendReward<'info> {
    /// Must be the room administrator (checked by `RoomState::commit_reward`)
    #[account(mut)]
    pub authority: Signer<'info>,
    
    #[account(
        mut,
        seeds = [ROOM_SEED, room.access.administrator.as_ref(), &room.room_id.to_le_bytes()],
        bump = room.bump
    )]
    pub room: Account<'info, RoomState>,
    
    /// CHECK: Reward destination - validated by `RoomState::validate_recipient`.
    /// Not declared `mut`: the runtime demotes reserved ids such as the zero
    /// address to read-only, which must surface as `InvalidRecipient`. Clients
    /// still pass it writable so the vault can credit it.
    pub recipient: UncheckedAccount<'info>,
    
    /// Reward record - created on first payout for this (recipient, campaign)
    #[account(
        init_if_needed,
        payer = authority,
        space = RewardRecord::LEN,
        seeds = [
            REWARD_RECORD_SEED,
            room.key().as_ref(),
            recipient.key().as_ref(),
            &campaign_id.to_le_bytes(),
        ],
        bump
    )]
    pub reward_record: Account<'info, RewardRecord>,
    
    /// CHECK: PDA that holds SOL
    #[account(
        mut,
        seeds = [ROOM_VAULT_SEED, room.key().as_ref()],
        bump = room.vault_bump
    )]
    pub room_vault: SystemAccount<'info>,
    
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SendReward>, reward: u64, campaign_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let room_key = ctx.accounts.room.key();
    let authority = ctx.accounts.authority.key();
    let recipient = ctx.accounts.recipient.key();
    let vault_key = ctx.accounts.room_vault.key();
    
    let room = &mut ctx.accounts.room;
    let reward_record = &mut ctx.accounts.reward_record;
    
    // Effects first: record is marked paid and the pool debited before any
    // lamports leave the vault
    let pooled_balance = room.commit_reward(
        &authority,
        reward,
        &recipient,
        &[room_key, vault_key],
        campaign_id,
        reward_record,
        clock.unix_timestamp,
    )?;
    reward_record.room = room_key;
    reward_record.bump = ctx.bumps.reward_record;
    let vault_bump = room.vault_bump;
    
    // Accounting must never outrun the lamports actually held
    let spendable = vault::spendable_balance(&ctx.accounts.room_vault.to_account_info())?;
    require!(spendable >= reward, RoomError::InsufficientBalance);
    vault::require_rent_exempt_after_credit(&ctx.accounts.recipient.to_account_info(), reward)?;
    
    vault::transfer_from_vault(
        &ctx.accounts.system_program,
        ctx.accounts.room_vault.to_account_info(),
        ctx.accounts.recipient.to_account_info(),
        &room_key,
        vault_bump,
        reward,
    )?;
    
    msg!("Reward {} sent to {} for campaign {} (pool: {})", reward, recipient, campaign_id, pooled_balance);
    
    emit!(RewardSent {
        room: room_key,
        dest: recipient,
        reward,
        id: campaign_id,
        pooled_balance,
    });
    
    Ok(())
}
