use anchor_lang::prelude::*;

use crate::{
    constants::{CONTESTANT_NAME_LEN, MAX_CONTESTANTS, MAX_VOTERS, VOTER_WEIGHT},
    error::ErrorCode,
};

/// Where a voter stands: not yet resolved, delegated to another voter, or voted.
///
/// `Delegated` and `Voted` are exclusive, so a voter that has voted can never
/// carry an outstanding delegate.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Ballot {
    Unresolved,
    /// `to` is the target's slot in the voter table.
    Delegated { to: u16 },
    Voted { contestant: u32 },
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Voter {
    pub principal: Pubkey,
    /// Votes this voter's ballot is worth. Zero once delegated.
    pub weight: u64,
    pub ballot: Ballot,
}

impl Voter {
    fn new(principal: Pubkey) -> Self {
        Self {
            principal,
            weight: VOTER_WEIGHT,
            ballot: Ballot::Unresolved,
        }
    }

    pub fn voted(&self) -> bool {
        matches!(self.ballot, Ballot::Voted { .. })
    }

    /// Voter table slot this voter delegated to.
    pub fn delegate_slot(&self) -> Option<usize> {
        match self.ballot {
            Ballot::Delegated { to } => Some(to as usize),
            _ => None,
        }
    }

    pub fn voted_contestant_id(&self) -> Option<u32> {
        match self.ballot {
            Ballot::Voted { contestant } => Some(contestant),
            _ => None,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Contestant {
    /// Zero-based position in the contestant list, also the vote index.
    pub id: u32,
    /// UTF-8 name, zero padded
    pub name: [u8; 32],
    pub vote_count: u64,
}

impl Contestant {
    /// Name with the zero padding stripped.
    pub fn label(&self) -> &str {
        let len = self
            .name
            .iter()
            .position(|byte| *byte == 0)
            .unwrap_or(self.name.len());
        std::str::from_utf8(&self.name[..len]).unwrap_or_default()
    }
}

/// Packs a contestant name into its fixed-width form.
///
/// NUL is the padding byte, so names containing it are rejected.
pub fn encode_name(name: &str) -> Result<[u8; CONTESTANT_NAME_LEN]> {
    let bytes = name.as_bytes();
    require!(
        bytes.len() <= CONTESTANT_NAME_LEN,
        ErrorCode::ContestantNameTooLong
    );
    require!(!bytes.contains(&0), ErrorCode::InvalidContestantName);

    let mut encoded = [0u8; CONTESTANT_NAME_LEN];
    encoded[..bytes.len()].copy_from_slice(bytes);
    Ok(encoded)
}

/// Flat read view of a voter, with the delegate resolved to its key.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VoterView {
    pub principal: Pubkey,
    pub weight: u64,
    pub voted: bool,
    pub delegate: Option<Pubkey>,
    pub voted_contestant_id: Option<u32>,
}

/// End of a delegation chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainEnd {
    /// Voter with no outstanding delegate; it holds the chain's weight.
    Root(usize),
    /// Voter that has voted; weight arriving here is tallied immediately.
    Voted { voter: usize, contestant: u32 },
}

/// What an accepted delegation moved, for logs and events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delegation {
    pub final_delegate: Pubkey,
    pub weight: u64,
    /// Set when the final delegate had already voted.
    pub tallied_for: Option<u32>,
}

/// A single voting registry: chair person, contestants and the voter table.
///
/// Voters live in an arena (`voters`) and are never removed, so a voter's
/// position is stable for the lifetime of the registry.
#[account]
#[derive(InitSpace, Default)]
pub struct Registry {
    /// PDA bump seed
    pub bump: u8,
    /// Registry id, part of the PDA seeds
    pub id: u32,
    /// Key that created the registry, part of the PDA seeds
    pub creator: Pubkey,
    pub chair_person: Pubkey,
    #[max_len(16)]
    pub contestants: Vec<Contestant>,
    #[max_len(100)]
    pub voters: Vec<Voter>,
}

impl Registry {
    pub fn initialize(
        &mut self,
        id: u32,
        creator: Pubkey,
        bump: u8,
        contestant_names: &[String],
    ) -> Result<()> {
        require!(
            contestant_names.len() <= MAX_CONTESTANTS,
            ErrorCode::TooManyContestants
        );

        let contestants = contestant_names
            .iter()
            .enumerate()
            .map(|(position, name)| {
                Ok(Contestant {
                    id: position as u32,
                    name: encode_name(name)?,
                    vote_count: 0,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.bump = bump;
        self.id = id;
        self.creator = creator;
        self.chair_person = creator;
        self.contestants = contestants;
        self.voters = Vec::new();
        Ok(())
    }

    pub fn voter_index(&self, principal: &Pubkey) -> Option<usize> {
        self.voters
            .iter()
            .position(|voter| voter.principal == *principal)
    }

    pub fn voter(&self, principal: &Pubkey) -> Result<&Voter> {
        let index = self
            .voter_index(principal)
            .ok_or(ErrorCode::NotRegistered)?;
        Ok(&self.voters[index])
    }

    /// Key of the voter that `principal` delegated to, if any.
    pub fn delegate_of(&self, principal: &Pubkey) -> Result<Option<Pubkey>> {
        let voter = self.voter(principal)?;
        Ok(voter
            .delegate_slot()
            .map(|slot| self.voters[slot].principal))
    }

    pub fn voter_view(&self, principal: &Pubkey) -> Result<VoterView> {
        let voter = self.voter(principal)?;
        Ok(VoterView {
            principal: voter.principal,
            weight: voter.weight,
            voted: voter.voted(),
            delegate: self.delegate_of(principal)?,
            voted_contestant_id: voter.voted_contestant_id(),
        })
    }

    pub fn contestant(&self, id: u32) -> Result<&Contestant> {
        Ok(self
            .contestants
            .get(id as usize)
            .ok_or(ErrorCode::InvalidContestant)?)
    }

    /// Contestant with the most votes; the lowest id wins a tie.
    pub fn winning_contestant(&self) -> Result<&Contestant> {
        Ok(self
            .contestants
            .iter()
            .rev()
            .max_by_key(|contestant| contestant.vote_count)
            .ok_or(ErrorCode::InvalidContestant)?)
    }

    fn require_chair_person(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.chair_person, ErrorCode::Unauthorized);
        Ok(())
    }

    /// Adds every principal not yet known as a voter with the base weight.
    ///
    /// Known principals (and repeats within the batch) are skipped. Returns the
    /// number of voters actually added.
    pub fn register_voters(&mut self, caller: &Pubkey, principals: &[Pubkey]) -> Result<usize> {
        self.require_chair_person(caller)?;

        let mut fresh: Vec<Pubkey> = Vec::with_capacity(principals.len());
        for principal in principals {
            if self.voter_index(principal).is_none() && !fresh.contains(principal) {
                fresh.push(*principal);
            }
        }
        require!(
            self.voters.len() + fresh.len() <= MAX_VOTERS,
            ErrorCode::TooManyVoters
        );

        let added = fresh.len();
        self.voters.extend(fresh.into_iter().map(Voter::new));
        Ok(added)
    }

    /// Casts `caller`'s current weight for `contestant_id`. Returns that weight.
    pub fn vote(&mut self, caller: &Pubkey, contestant_id: u32) -> Result<u64> {
        let index = self.voter_index(caller).ok_or(ErrorCode::NotRegistered)?;
        require!(
            self.voters[index].ballot == Ballot::Unresolved,
            ErrorCode::AlreadyVoted
        );

        let weight = self.voters[index].weight;
        let contestant = self
            .contestants
            .get_mut(contestant_id as usize)
            .ok_or(ErrorCode::InvalidContestant)?;
        contestant.vote_count += weight;

        self.voters[index].ballot = Ballot::Voted {
            contestant: contestant_id,
        };
        Ok(weight)
    }

    /// Points `caller` at `to` and pushes its weight to the end of `to`'s chain.
    ///
    /// A voter that already delegated may re-delegate as long as its weight has
    /// not been cast yet. In that case everything routed through it moves from
    /// the old root to the new final delegate.
    pub fn delegate(&mut self, caller: &Pubkey, to: &Pubkey) -> Result<Delegation> {
        let from = self.voter_index(caller).ok_or(ErrorCode::NotRegistered)?;
        let previous = match self.voters[from].ballot {
            Ballot::Voted { .. } => return err!(ErrorCode::AlreadyVoted),
            Ballot::Delegated { to: current } => Some(current as usize),
            Ballot::Unresolved => None,
        };
        require!(caller != to, ErrorCode::SelfDelegation);

        let target = self.voter_index(to).ok_or(ErrorCode::NotRegistered)?;
        let end = self.resolve(target, Some(from))?;

        let (weight, old_root) = match previous {
            None => (self.voters[from].weight, None),
            Some(old_target) => {
                match self.resolve(old_target, None)? {
                    ChainEnd::Voted { .. } => return err!(ErrorCode::AlreadyVoted),
                    ChainEnd::Root(root) => (self.routed_weight(from)?, Some(root)),
                }
            }
        };

        // Every check has passed; nothing below can fail.
        if let Some(root) = old_root {
            self.voters[root].weight -= weight;
        }
        self.voters[from].weight = 0;
        // MAX_VOTERS fits in a u16 slot
        self.voters[from].ballot = Ballot::Delegated { to: target as u16 };

        let (final_delegate, tallied_for) = match end {
            ChainEnd::Root(root) => {
                self.voters[root].weight += weight;
                (root, None)
            }
            ChainEnd::Voted { voter, contestant } => {
                self.contestants[contestant as usize].vote_count += weight;
                (voter, Some(contestant))
            }
        };

        Ok(Delegation {
            final_delegate: self.voters[final_delegate].principal,
            weight,
            tallied_for,
        })
    }

    pub fn change_chair_person(&mut self, caller: &Pubkey, new_chair: Pubkey) -> Result<Pubkey> {
        self.require_chair_person(caller)?;
        Ok(std::mem::replace(&mut self.chair_person, new_chair))
    }

    /// Follows delegate pointers from `start` to the end of its chain.
    ///
    /// Each voter is visited at most once. Reaching `delegator` or a voter seen
    /// before means the walk has looped.
    pub fn resolve(&self, start: usize, delegator: Option<usize>) -> Result<ChainEnd> {
        let mut seen = vec![false; self.voters.len()];
        let mut current = start;
        loop {
            if Some(current) == delegator || seen[current] {
                return err!(ErrorCode::CyclicDelegation);
            }
            seen[current] = true;

            match self.voters[current].ballot {
                Ballot::Unresolved => return Ok(ChainEnd::Root(current)),
                Ballot::Voted { contestant } => {
                    return Ok(ChainEnd::Voted {
                        voter: current,
                        contestant,
                    })
                }
                Ballot::Delegated { to } => current = to as usize,
            }
        }
    }

    /// Weight parked downstream on behalf of `through`: its own plus that of
    /// every voter whose chain passes through it.
    fn routed_weight(&self, through: usize) -> Result<u64> {
        let mut weight = 0;
        for start in 0..self.voters.len() {
            let mut current = Some(start);
            let mut hops = 0;
            while let Some(index) = current {
                if index == through {
                    weight += VOTER_WEIGHT;
                    break;
                }
                hops += 1;
                require!(hops <= self.voters.len(), ErrorCode::CyclicDelegation);
                current = self.voters[index].delegate_slot();
            }
        }
        Ok(weight)
    }
}
