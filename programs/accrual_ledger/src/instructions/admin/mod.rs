use super::*;

pub mod auth;
pub mod initialize_ledger;
pub mod set_global_rate;
pub mod supply_role;

pub use auth::*;
pub use initialize_ledger::*;
pub use set_global_rate::*;
pub use supply_role::*;
