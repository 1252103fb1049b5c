/// Seed prefix for the registry PDA: `[REGISTRY_SEED, creator, id.to_le_bytes()]`.
pub const REGISTRY_SEED: &[u8] = b"registry";

// Storage bounds. The `max_len` attributes on `Registry` must match these.
pub const MAX_CONTESTANTS: usize = 16;
pub const MAX_VOTERS: usize = 100;

// Delegation targets are stored as u16 voter slots.
const _: () = assert!(MAX_VOTERS <= u16::MAX as usize + 1);

/// Fixed byte width of a contestant name.
pub const CONTESTANT_NAME_LEN: usize = 32;

/// Weight every voter is registered with.
pub const VOTER_WEIGHT: u64 = 1;
