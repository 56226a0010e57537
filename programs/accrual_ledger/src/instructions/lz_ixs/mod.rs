use super::*;

pub mod initialize_bridge;
pub mod set_peer_config;
pub mod lz_send;
pub mod lz_receive;

pub use initialize_bridge::*;
pub use set_peer_config::*;
pub use lz_send::*;
pub use lz_receive::*;
