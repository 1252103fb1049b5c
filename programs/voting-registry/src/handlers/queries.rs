use anchor_lang::prelude::*;

use crate::{
    state::{Contestant, VoterView},
    ReadRegistry,
};

pub fn get_voter(ctx: Context<ReadRegistry>, principal: Pubkey) -> Result<VoterView> {
    ctx.accounts.registry.voter_view(&principal)
}

pub fn get_contestant(ctx: Context<ReadRegistry>, id: u32) -> Result<Contestant> {
    Ok(ctx.accounts.registry.contestant(id)?.clone())
}

pub fn chair_person(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
    Ok(ctx.accounts.registry.chair_person)
}

/// Contestant with the most votes so far; ties go to the lowest id.
pub fn winning_contestant(ctx: Context<ReadRegistry>) -> Result<Contestant> {
    let winner = ctx.accounts.registry.winning_contestant()?;
    msg!(
        "Leading contestant {} ({}) with {} vote(s)",
        winner.id,
        winner.label(),
        winner.vote_count
    );
    Ok(winner.clone())
}
