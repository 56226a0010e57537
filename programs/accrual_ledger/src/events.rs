use super::*;

#[event]
pub struct LedgerInitializedEvent {
    pub authority: Pubkey,
    pub ledger: Pubkey,
    pub symbol: String,
    pub global_rate: u64,
    pub timestamp: i64,
}

#[event]
pub struct InterestSettledEvent {
    pub ledger: Pubkey,
    pub holder: Pubkey,
    pub interest: u64,
    pub principal: u64,
    pub timestamp: i64,
}

#[event]
pub struct BalanceCreatedEvent {
    pub ledger: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
    pub interest_settled: u64,
    pub locked_rate: u64,
    pub timestamp: i64,
}

#[event]
pub struct BalanceDestroyedEvent {
    pub ledger: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
    pub interest_settled: u64,
    pub timestamp: i64,
}

#[event]
pub struct TransferEvent {
    pub ledger: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub rate_inherited: bool,
    pub timestamp: i64,
}

#[event]
pub struct GlobalRateChangedEvent {
    pub ledger: Pubkey,
    pub authority: Pubkey,
    pub old_rate: u64,
    pub new_rate: u64,
    pub timestamp: i64,
}

#[event]
pub struct SupplyOperatorUpdatedEvent {
    pub ledger: Pubkey,
    pub operator: Pubkey,
    pub granted: bool,
    pub timestamp: i64,
}

#[event]
pub struct BridgeInitializedEvent {
    pub ledger: Pubkey,
    pub bridge_store: Pubkey,
    pub custody: Pubkey,
    pub endpoint_program: Pubkey,
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PeerConfigUpdatedEvent {
    pub ledger: Pubkey,
    pub remote_eid: u32,
    pub config_type: String,
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CrossLedgerLockedEvent {
    pub guid: [u8; 32],
    pub ledger: Pubkey,
    pub dst_eid: u32,
    pub from: Pubkey,
    pub to: [u8; 32],
    pub amount: u64,
    pub rate: u64,
    pub timestamp: i64,
}

#[event]
pub struct CrossLedgerReleasedEvent {
    pub guid: [u8; 32],
    pub ledger: Pubkey,
    pub src_eid: u32,
    pub to: Pubkey,
    pub amount: u64,
    pub rate: u64,
    pub timestamp: i64,
}
