use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub chair_person: Pubkey,
    pub contestants: u32,
    pub timestamp: i64,
}

#[event]
pub struct VotersRegistered {
    pub registry: Pubkey,
    /// Voters actually added; already known principals are not counted
    pub added: u32,
    pub total: u32,
    pub timestamp: i64,
}

#[event]
pub struct VoteCast {
    pub registry: Pubkey,
    pub voter: Pubkey,
    pub contestant_id: u32,
    pub weight: u64,
    pub timestamp: i64,
}

#[event]
pub struct VoteDelegated {
    pub registry: Pubkey,
    pub from: Pubkey,
    /// Immediate target recorded on the delegator
    pub to: Pubkey,
    /// Voter at the end of the chain when the delegation was recorded
    pub final_delegate: Pubkey,
    pub weight: u64,
    /// Contestant credited right away if the final delegate had already voted
    pub contestant_id: Option<u32>,
    pub timestamp: i64,
}

#[event]
pub struct ChairPersonChanged {
    pub registry: Pubkey,
    pub previous: Pubkey,
    pub chair_person: Pubkey,
    pub timestamp: i64,
}
