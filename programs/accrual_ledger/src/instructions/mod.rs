use super::*;

pub mod admin;
pub mod mint_units;
pub mod burn_units;
pub mod transfer_units;
pub mod settle_holder;
pub mod query;
pub mod lz_ixs;

pub use admin::*;
pub use mint_units::*;
pub use burn_units::*;
pub use transfer_units::*;
pub use settle_holder::*;
pub use query::*;
pub use lz_ixs::*;
