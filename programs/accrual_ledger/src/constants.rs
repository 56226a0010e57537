use super::*;

pub const LEDGER_SEED: &[u8] = b"ledger";
pub const HOLDER_SEED: &[u8] = b"holder";
pub const BRIDGE_SEED: &[u8] = b"bridge";
pub const EVENT_AUTHORITY_SEED: &[u8] = b"__event_authority";

pub const PRECISION_FACTOR: u128 = 1_000_000_000_000_000_000; // 1e18, scale of every rate
pub const AMOUNT_ALL: u64 = u64::MAX;                          // "whole balance" sentinel for burn/transfer/send
pub const DEFAULT_GLOBAL_RATE: u64 = 50_000_000_000;            // 5e10 per second

pub const MAX_SYMBOL_LEN: usize = 8;
pub const MAX_SUPPLY_OPERATORS: usize = 8;

// LayerZero seeds
pub const PEER_SEED: &[u8] = b"Peer";
pub const LZ_RECEIVE_TYPES_SEED: &[u8] = oapp::LZ_RECEIVE_TYPES_SEED;

// Cross-ledger payload layout (version 1)
pub const PAYLOAD_VERSION: u8 = 1;
pub const VERSION_OFFSET: usize = 0;
pub const SEND_TO_OFFSET: usize = 1;
pub const SOURCE_HOLDER_OFFSET: usize = 33;
pub const AMOUNT_OFFSET: usize = 65;
pub const RATE_OFFSET: usize = 73;
pub const PAYLOAD_LEN: usize = 81;

const_assert_eq!(RATE_OFFSET + 8, PAYLOAD_LEN);
