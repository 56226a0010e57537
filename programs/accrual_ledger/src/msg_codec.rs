use super::*;

/// What a cross-ledger message carries between two ledgers. The destination
/// ledger itself is the LayerZero receiver of the message (the peer address),
/// so it is not repeated in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossLedgerTransfer {
    pub receiver: [u8; 32],
    pub source_holder: [u8; 32],
    pub amount: u64,
    pub rate: u64,
}

pub fn encode(transfer: &CrossLedgerTransfer) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(PAYLOAD_LEN);
    encoded.push(PAYLOAD_VERSION);
    encoded.extend_from_slice(&transfer.receiver);
    encoded.extend_from_slice(&transfer.source_holder);
    encoded.extend_from_slice(&transfer.amount.to_be_bytes());
    encoded.extend_from_slice(&transfer.rate.to_be_bytes());
    encoded
}

pub fn decode(message: &[u8]) -> Result<CrossLedgerTransfer> {
    require!(!message.is_empty(), LedgerError::MalformedPayload);
    require!(
        message[VERSION_OFFSET] == PAYLOAD_VERSION,
        LedgerError::UnsupportedPayloadVersion
    );
    require!(message.len() == PAYLOAD_LEN, LedgerError::MalformedPayload);

    Ok(CrossLedgerTransfer {
        receiver: read_bytes32(message, SEND_TO_OFFSET),
        source_holder: read_bytes32(message, SOURCE_HOLDER_OFFSET),
        amount: read_u64(message, AMOUNT_OFFSET),
        rate: read_u64(message, RATE_OFFSET),
    })
}

/// Receiver of a message, or the default key when the message cannot be a
/// valid payload. Used in account constraints, where decoding errors are
/// reported later by `decode`.
pub fn send_to(message: &[u8]) -> Pubkey {
    if message.len() != PAYLOAD_LEN {
        return Pubkey::default();
    }
    Pubkey::from(read_bytes32(message, SEND_TO_OFFSET))
}

fn read_bytes32(message: &[u8], offset: usize) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&message[offset..offset + 32]);
    bytes
}

fn read_u64(message: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&message[offset..offset + 8]);
    u64::from_be_bytes(bytes)
}
