use super::*;

#[error_code]
pub enum LedgerError {
    #[msg("The global interest rate can only decrease")]
    RateIncreaseRejected,
    #[msg("Insufficient balance for this operation")]
    InsufficientBalance,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("There has been an arithmetic overflow error")]
    ArithmeticOverflow,
    #[msg("Please enter a valid amount greater than zero")]
    InvalidAmount,
    #[msg("Symbol is too long")]
    SymbolTooLong,
    #[msg("Sender and recipient must be different holders")]
    SelfTransfer,
    #[msg("The holder account does not belong to this ledger")]
    InvalidHolder,
    #[msg("The maximum number of supply operators has been reached")]
    SupplyOperatorsFull,
    #[msg("The cross-ledger payload is malformed")]
    MalformedPayload,
    #[msg("The cross-ledger payload version is not supported")]
    UnsupportedPayloadVersion,
    #[msg("The payload receiver does not match the destination holder")]
    InvalidReceiver,
    #[msg("Symbol must be non-empty and free of zero bytes")]
    InvalidSymbol,
    // LayerZero specific errors
    #[msg("Unauthorized LayerZero operation")]
    LzUnauthorized = 7000,
    #[msg("Invalid LayerZero sender")]
    LzInvalidSender = 7001,
    #[msg("LayerZero rate limit exceeded")]
    LzRateLimitExceeded = 7005,
    #[msg("Invalid LayerZero bridge store")]
    LzInvalidBridgeStore = 7102,
    #[msg("Invalid LayerZero peer configuration")]
    LzInvalidPeer = 7103,
    #[msg("Invalid LayerZero rate limit configuration")]
    LzInvalidRateLimit = 7104,
}
