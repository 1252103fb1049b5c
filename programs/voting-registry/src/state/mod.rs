pub mod events;
pub use events::*;

pub mod registry;
pub use registry::*;

mod registry_proptest;
