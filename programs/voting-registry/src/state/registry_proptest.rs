//! Property-based tests for the registry's vote/delegate state machine.
//!
//! Random sequences of votes and delegations are replayed against a fresh
//! registry; after every step the tally invariants must hold, and a rejected
//! step must leave the registry exactly as it was.
