use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Only chairperson allowed.")]
    Unauthorized,
    #[msg("You are not a registered voter")]
    NotRegistered,
    #[msg("You have already voted or delegated your vote")]
    AlreadyVoted,
    #[msg("Self-delegation is not allowed")]
    SelfDelegation,
    #[msg("Found loop in delegation")]
    CyclicDelegation,
    #[msg("Invalid contestant")]
    InvalidContestant,
    #[msg("Too many contestants for one registry")]
    TooManyContestants,
    #[msg("Voter registry is full")]
    TooManyVoters,
    #[msg("Contestant name exceeds 32 bytes")]
    ContestantNameTooLong,
    #[msg("Contestant name must not contain NUL bytes")]
    InvalidContestantName,
}
