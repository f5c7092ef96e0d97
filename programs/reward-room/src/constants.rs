// ============================================================
// LAMPORTS
// ============================================================

/// SOL per lamport (1 SOL = 1_000_000_000 lamports)
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

// ============================================================
// PDA SEEDS
// ============================================================

pub const ROOM_SEED: &[u8] = b"room";
pub const ROOM_VAULT_SEED: &[u8] = b"room_vault";
pub const REWARD_RECORD_SEED: &[u8] = b"reward_record";
