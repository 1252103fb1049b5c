use anchor_lang::prelude::*;

use crate::{state::VoteDelegated, Delegate};

/// Delegates the caller's voting weight to `to`.
///
/// The weight is resolved along `to`'s delegation chain right away: it either
/// lands on the voter at the end of the chain or, if that voter has already
/// voted, on the contestant it voted for.
pub fn delegate(ctx: Context<Delegate>, to: Pubkey) -> Result<()> {
    let from = ctx.accounts.caller.key();
    let registry = &mut ctx.accounts.registry;

    let delegation = registry.delegate(&from, &to)?;
    match delegation.tallied_for {
        Some(contestant_id) => msg!(
            "Voter {} delegated {} vote(s) via {}; counted for contestant {}",
            from,
            delegation.weight,
            delegation.final_delegate,
            contestant_id
        ),
        None => msg!(
            "Voter {} delegated {} vote(s) to {}; held by {}",
            from,
            delegation.weight,
            to,
            delegation.final_delegate
        ),
    }

    emit!(VoteDelegated {
        registry: registry.key(),
        from,
        to,
        final_delegate: delegation.final_delegate,
        weight: delegation.weight,
        contestant_id: delegation.tallied_for,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
