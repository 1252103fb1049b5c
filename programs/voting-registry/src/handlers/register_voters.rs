use anchor_lang::prelude::*;

use crate::{state::VotersRegistered, RegisterVoters};

/// Registers `principals` as voters. Only the chair person may call this.
///
/// Principals that are already registered are skipped, so overlapping batches
/// are safe to submit.
pub fn register_voters(ctx: Context<RegisterVoters>, principals: Vec<Pubkey>) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let registry = &mut ctx.accounts.registry;

    let added = registry.register_voters(&caller, &principals)?;
    msg!(
        "Registered {} of {} submitted voters ({} total)",
        added,
        principals.len(),
        registry.voters.len()
    );

    emit!(VotersRegistered {
        registry: registry.key(),
        added: added as u32,
        total: registry.voters.len() as u32,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
