// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;

use constants::*;
pub use error::ErrorCode;
pub use state::{Ballot, Contestant, Registry, Voter, VoterView};

declare_id!("8uxgwaAj4NkMQ1Exn3ZBDXiPfEce4fjMHbEJ4QUneFnu");

#[program]
pub mod voting_registry {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        id: u32,
        contestant_names: Vec<String>,
    ) -> Result<()> {
        handlers::initialize::initialize(ctx, id, contestant_names)
    }

    pub fn register_voters(ctx: Context<RegisterVoters>, principals: Vec<Pubkey>) -> Result<()> {
        handlers::register_voters::register_voters(ctx, principals)
    }

    pub fn vote(ctx: Context<Vote>, contestant_id: u32) -> Result<()> {
        handlers::vote::vote(ctx, contestant_id)
    }

    pub fn delegate(ctx: Context<Delegate>, to: Pubkey) -> Result<()> {
        handlers::delegate::delegate(ctx, to)
    }

    pub fn change_chair_person(ctx: Context<ChangeChairPerson>, new_chair: Pubkey) -> Result<()> {
        handlers::change_chair_person::change_chair_person(ctx, new_chair)
    }

    pub fn get_voter(ctx: Context<ReadRegistry>, principal: Pubkey) -> Result<VoterView> {
        handlers::queries::get_voter(ctx, principal)
    }

    pub fn get_contestant(ctx: Context<ReadRegistry>, id: u32) -> Result<Contestant> {
        handlers::queries::get_contestant(ctx, id)
    }

    pub fn chair_person(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
        handlers::queries::chair_person(ctx)
    }

    pub fn winning_contestant(ctx: Context<ReadRegistry>) -> Result<Contestant> {
        handlers::queries::winning_contestant(ctx)
    }
}

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED, payer.key().as_ref(), id.to_le_bytes().as_ref()],
        bump,
    )]
    pub registry: Box<Account<'info, Registry>>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RegisterVoters<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.creator.as_ref(), registry.id.to_le_bytes().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, Registry>>,
}

#[derive(Accounts)]
pub struct Vote<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.creator.as_ref(), registry.id.to_le_bytes().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, Registry>>,
}

#[derive(Accounts)]
pub struct Delegate<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.creator.as_ref(), registry.id.to_le_bytes().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, Registry>>,
}

#[derive(Accounts)]
pub struct ChangeChairPerson<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.creator.as_ref(), registry.id.to_le_bytes().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, Registry>>,
}

#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.creator.as_ref(), registry.id.to_le_bytes().as_ref()],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, Registry>>,
}
