use super::*;

pub mod ledger;
pub mod holder;
pub mod bridge;

pub use ledger::*;
pub use holder::*;
pub use bridge::*;
