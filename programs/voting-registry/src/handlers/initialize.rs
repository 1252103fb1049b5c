use anchor_lang::prelude::*;

use crate::{state::RegistryInitialized, Initialize};

/// Creates a voting registry with a fixed, ordered list of contestants.
///
/// The payer becomes the chair person. Contestant ids are the zero-based
/// positions in `contestant_names`.
///
/// # Arguments
/// * `id` - Registry identifier, used with the payer key to derive the registry PDA
/// * `contestant_names` - Contestant names, at most 32 bytes each
pub fn initialize(ctx: Context<Initialize>, id: u32, contestant_names: Vec<String>) -> Result<()> {
    msg!(
        "Creating voting registry {} with {} contestants",
        id,
        contestant_names.len()
    );

    let chair_person = ctx.accounts.payer.key();
    ctx.accounts
        .registry
        .initialize(id, chair_person, ctx.bumps.registry, &contestant_names)?;

    emit!(RegistryInitialized {
        registry: ctx.accounts.registry.key(),
        chair_person,
        contestants: contestant_names.len() as u32,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
