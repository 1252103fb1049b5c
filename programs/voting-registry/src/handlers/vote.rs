use anchor_lang::prelude::*;

use crate::{state::VoteCast, Vote};

/// Casts the caller's vote, worth its current weight, for `contestant_id`.
///
/// Weight delegated to the caller has already been pushed onto it, so no
/// delegation chain is walked here.
pub fn vote(ctx: Context<Vote>, contestant_id: u32) -> Result<()> {
    let voter = ctx.accounts.caller.key();
    let registry = &mut ctx.accounts.registry;

    let weight = registry.vote(&voter, contestant_id)?;
    msg!(
        "Voter {} cast {} vote(s) for contestant {}",
        voter,
        weight,
        contestant_id
    );

    emit!(VoteCast {
        registry: registry.key(),
        voter,
        contestant_id,
        weight,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
