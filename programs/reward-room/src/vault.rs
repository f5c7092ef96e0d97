use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::constants::*;
use crate::errors::RoomError;

/// Lamports the vault must keep to stay rent exempt (zero-data system account).
pub fn rent_reserve() -> Result<u64> {
    Ok(Rent::get()?.minimum_balance(0))
}

/// Vault lamports above the rent reserve - the environment view of the pool.
pub fn spendable_balance(vault: &AccountInfo) -> Result<u64> {
    Ok(vault.lamports().saturating_sub(rent_reserve()?))
}

/// The runtime rejects a credit that leaves `to` funded but under its
/// rent-exempt minimum; report that as `InvalidAmount` before any transfer.
pub fn require_rent_exempt_after_credit(to: &AccountInfo, amount: u64) -> Result<()> {
    let resulting = to.lamports()
        .checked_add(amount)
        .ok_or(RoomError::Overflow)?;
    require!(
        resulting >= Rent::get()?.minimum_balance(to.data_len()),
        RoomError::InvalidAmount
    );
    Ok(())
}

/// Move lamports into the vault from a signing wallet.
pub fn transfer_into_vault<'info>(
    system_program: &Program<'info, System>,
    from: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            system_program::Transfer { from, to: vault },
        ),
        amount,
    )
}

/// Pay lamports out of the room vault, signing with the vault PDA seeds.
/// Room accounting must already reflect the payout.
pub fn transfer_from_vault<'info>(
    system_program: &Program<'info, System>,
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    room: &Pubkey,
    vault_bump: u8,
    amount: u64,
) -> Result<()> {
    let vault_seeds: &[&[u8]] = &[
        ROOM_VAULT_SEED,
        room.as_ref(),
        &[vault_bump],
    ];

    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.to_account_info(),
            system_program::Transfer { from: vault, to },
            &[vault_seeds],
        ),
        amount,
    )
}
