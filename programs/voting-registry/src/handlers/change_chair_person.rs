use anchor_lang::prelude::*;

use crate::{state::ChairPersonChanged, ChangeChairPerson};

/// Hands the chair person role to `new_chair`. Only the current chair may call this.
pub fn change_chair_person(ctx: Context<ChangeChairPerson>, new_chair: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let registry = &mut ctx.accounts.registry;

    let previous = registry.change_chair_person(&caller, new_chair)?;
    msg!("Chair person changed from {} to {}", previous, new_chair);

    emit!(ChairPersonChanged {
        registry: registry.key(),
        previous,
        chair_person: new_chair,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
