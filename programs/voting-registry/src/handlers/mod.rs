pub mod initialize;
pub use initialize::*;

pub mod register_voters;
pub use register_voters::*;

pub mod vote;
pub use vote::*;

pub mod delegate;
pub use delegate::*;

pub mod change_chair_person;
pub use change_chair_person::*;

pub mod queries;
pub use queries::*;
