use super::*;

#[account]
#[derive(InitSpace)]
pub struct BridgeStore {
    pub ledger: Pubkey,             // ledger whose supply this bridge locks and releases
    pub custody: Pubkey,            // holder account the bridge burns from on lock
    pub endpoint_program: Pubkey,   // LayerZero endpoint program
    pub admin: Pubkey,              // LayerZero admin
    pub bump: u8,
    pub total_locked: u64,          // units burned on this ledger by outbound transfers
    pub total_released: u64,        // units minted on this ledger by inbound transfers
}

impl BridgeStore {
    /// Source side of a cross-ledger transfer.
    ///
    /// The sender's locked rate is captured first, then `amount` moves into
    /// the bridge custody holder and is burned from there. `bridge_key` is the
    /// identity the access boundary is asked about. Nothing is written unless
    /// every step succeeds.
    pub fn lock(
        &mut self,
        bridge_key: &Pubkey,
        ledger: &mut Ledger,
        sender: &mut Holder,
        custody: &mut Holder,
        receiver: [u8; 32],
        amount: u64,
        now: i64,
    ) -> Result<CrossLedgerTransfer> {
        require!(amount > 0, LedgerError::InvalidAmount);
        require!(ledger.may_mutate_supply(bridge_key), LedgerError::Unauthorized);

        let rate = sender.accrual.locked_rate;

        let mut next_ledger = ledger.clone();
        let mut next_sender = sender.clone();
        let mut next_custody = custody.clone();

        let moved = next_ledger.transfer(&mut next_sender, &mut next_custody, amount, now)?;
        let burned = next_ledger.burn(&mut next_custody, moved.amount, now)?;
        require!(burned.amount > 0, LedgerError::InvalidAmount);

        let total_locked = self.total_locked.safe_add(burned.amount)?;

        *ledger = next_ledger;
        *sender = next_sender;
        *custody = next_custody;
        self.total_locked = total_locked;

        Ok(CrossLedgerTransfer {
            receiver,
            source_holder: sender.owner.to_bytes(),
            amount: burned.amount,
            rate,
        })
    }

    /// Destination side: mints the carried amount to `receiver` and
    /// re-establishes the carried rate, whatever the receiver held before.
    pub fn release(
        &mut self,
        bridge_key: &Pubkey,
        ledger: &mut Ledger,
        receiver: &mut Holder,
        message: &[u8],
        now: i64,
    ) -> Result<CrossLedgerTransfer> {
        require!(ledger.may_mutate_supply(bridge_key), LedgerError::Unauthorized);

        let transfer = msg_codec::decode(message)?;
        require!(
            receiver.owner.to_bytes() == transfer.receiver,
            LedgerError::InvalidReceiver
        );
        ledger.require_external_recipient(&receiver.owner)?;

        let total_released = self.total_released.safe_add(transfer.amount)?;
        ledger.mint(receiver, transfer.amount, Some(transfer.rate), now)?;
        self.total_released = total_released;

        Ok(transfer)
    }
}

#[account]
#[derive(InitSpace)]
pub struct PeerConfig {
    pub peer_address: [u8; 32],                     // remote ledger's bridge store
    pub bump: u8,
    pub enforced_options: EnforcedOptions,          // Enforced execution options
    pub outbound_rate_limiter: Option<RateLimiter>, // Rate limiting for outbound transfers
    pub inbound_rate_limiter: Option<RateLimiter>,  // Rate limiting for inbound transfers
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize, InitSpace, Default)]
pub struct EnforcedOptions {
    #[max_len(64)]
    pub send: Vec<u8>,
}

impl EnforcedOptions {
    pub fn combine_options(&self, user_options: &[u8]) -> Result<Vec<u8>> {
        if self.send.is_empty() {
            Ok(user_options.to_vec())
        } else if user_options.is_empty() {
            Ok(self.send.clone())
        } else {
            // both are type 3 options; the user's worker options follow the enforced ones
            require!(user_options.len() >= 2, LedgerError::LzInvalidPeer);
            let mut combined = self.send.clone();
            combined.extend_from_slice(&user_options[2..]);
            Ok(combined)
        }
    }
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize, InitSpace, Default, Debug, PartialEq, Eq)]
pub struct RateLimiter {
    pub capacity: u64,        // Maximum tokens in bucket
    pub tokens: u64,          // Current tokens available
    pub refill_rate: u64,     // Tokens per second refill rate
    pub last_refill: i64,     // Last refill timestamp
}

impl RateLimiter {
    pub fn new(capacity: u64, refill_rate: u64, now: i64) -> Self {
        Self {
            capacity,
            tokens: capacity,
            refill_rate,
            last_refill: now,
        }
    }

    pub fn try_consume(&mut self, amount: u64, now: i64) -> Result<()> {
        self.refill_tokens(now);

        require_gte!(self.tokens, amount, LedgerError::LzRateLimitExceeded);
        self.tokens -= amount;
        Ok(())
    }

    pub fn refill(&mut self, amount: u64, now: i64) {
        self.refill_tokens(now);
        self.tokens = std::cmp::min(self.capacity, self.tokens.saturating_add(amount));
    }

    pub fn set_capacity(&mut self, capacity: u64) {
        self.capacity = capacity;
        self.tokens = std::cmp::min(self.tokens, capacity);
    }

    pub fn set_rate(&mut self, rate: u64) {
        self.refill_rate = rate;
    }

    fn refill_tokens(&mut self, now: i64) {
        if self.last_refill == 0 {
            self.last_refill = now;
            return;
        }

        let time_passed = now.saturating_sub(self.last_refill).max(0) as u64;
        let tokens_to_add = time_passed.saturating_mul(self.refill_rate);

        self.tokens = std::cmp::min(self.capacity, self.tokens.saturating_add(tokens_to_add));
        self.last_refill = now;
    }
}

#[account]
#[derive(InitSpace)]
pub struct LzReceiveTypesAccounts {
    pub bridge_store: Pubkey,
    pub ledger: Pubkey,
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: u64 = 1_000_000_000;

    fn limiter(capacity: u64, refill_rate: u64) -> RateLimiter {
        RateLimiter {
            capacity,
            tokens: capacity,
            refill_rate,
            last_refill: 0,
        }
    }

    #[test]
    fn limiter_consumes_and_refills_over_time() {
        let mut limiter = limiter(100, 1);

        limiter.try_consume(60, 1_000).unwrap();
        assert_eq!(limiter.tokens, 40);
        assert!(limiter.try_consume(41, 1_000).is_err());

        limiter.try_consume(50, 1_010).unwrap();
        assert_eq!(limiter.tokens, 0);

        limiter.refill(500, 1_010);
        assert_eq!(limiter.tokens, 100);
    }

    #[test]
    fn shrinking_capacity_clamps_available_tokens() {
        let mut limiter = limiter(100, 0);
        limiter.set_capacity(10);
        assert_eq!(limiter.tokens, 10);
        limiter.set_rate(5);
        assert_eq!(limiter.refill_rate, 5);
    }

    #[test]
    fn enforced_options_merge_with_user_options() {
        let enforced = EnforcedOptions { send: vec![0, 3, 1, 1] };
        assert_eq!(enforced.combine_options(&[]).unwrap(), vec![0, 3, 1, 1]);
        assert_eq!(enforced.combine_options(&[0, 3, 9]).unwrap(), vec![0, 3, 1, 1, 9]);

        let empty = EnforcedOptions::default();
        assert_eq!(empty.combine_options(&[0, 3, 7]).unwrap(), vec![0, 3, 7]);
    }

    struct Side {
        bridge_key: Pubkey,
        bridge: BridgeStore,
        ledger: Ledger,
        custody: Holder,
    }

    fn side(global_rate: u64) -> Side {
        let ledger_key = Pubkey::new_unique();
        let bridge_key = Pubkey::new_unique();
        let mut ledger = Ledger::new(Pubkey::new_unique(), "ACR", global_rate, 255).unwrap();
        ledger.grant_supply_role(bridge_key).unwrap();

        let custody = Holder::new(ledger_key, bridge_key, 255);
        Side {
            bridge_key,
            bridge: BridgeStore {
                ledger: ledger_key,
                custody: Pubkey::new_unique(),
                endpoint_program: Pubkey::new_unique(),
                admin: Pubkey::new_unique(),
                bump: 255,
                total_locked: 0,
                total_released: 0,
            },
            ledger,
            custody,
        }
    }

    #[test]
    fn lock_captures_rate_and_burns_through_custody() {
        let mut source = side(50_000_000_000);
        let mut alice = Holder::new(source.bridge.ledger, Pubkey::new_unique(), 255);
        source.ledger.mint(&mut alice, 10 * UNIT, None, 0).unwrap();
        let receiver = alice.owner.to_bytes();

        let transfer = source
            .bridge
            .lock(
                &source.bridge_key,
                &mut source.ledger,
                &mut alice,
                &mut source.custody,
                receiver,
                4 * UNIT,
                3_600,
            )
            .unwrap();

        assert_eq!(transfer.amount, 4 * UNIT);
        assert_eq!(transfer.rate, 50_000_000_000);
        assert_eq!(transfer.source_holder, alice.owner.to_bytes());
        assert_eq!(alice.principal(), 10 * UNIT + 1_800_000 - 4 * UNIT);
        assert_eq!(source.custody.principal(), 0);
        assert_eq!(source.ledger.total_principal, alice.principal());
        assert_eq!(source.bridge.total_locked, 4 * UNIT);
    }

    #[test]
    fn lock_without_supply_role_is_rejected() {
        let mut source = side(50_000_000_000);
        let mut alice = Holder::new(source.bridge.ledger, Pubkey::new_unique(), 255);
        source.ledger.mint(&mut alice, UNIT, None, 0).unwrap();
        source.ledger.revoke_supply_role(&source.bridge_key);

        let result = source.bridge.lock(
            &source.bridge_key,
            &mut source.ledger,
            &mut alice,
            &mut source.custody,
            [7u8; 32],
            UNIT,
            10,
        );
        assert!(result.is_err());
        assert_eq!(alice.principal(), UNIT);
        assert_eq!(source.bridge.total_locked, 0);
    }

    #[test]
    fn oversized_lock_produces_nothing() {
        let mut source = side(50_000_000_000);
        let mut alice = Holder::new(source.bridge.ledger, Pubkey::new_unique(), 255);
        source.ledger.mint(&mut alice, UNIT, None, 0).unwrap();
        let before = alice.accrual;

        let result = source.bridge.lock(
            &source.bridge_key,
            &mut source.ledger,
            &mut alice,
            &mut source.custody,
            [7u8; 32],
            2 * UNIT,
            3_600,
        );
        assert!(result.is_err());
        assert_eq!(alice.accrual, before);
        assert_eq!(source.custody.accrual, Accrual::default());
    }

    #[test]
    fn release_overwrites_the_local_rate() {
        let mut source = side(50_000_000_000);
        let mut destination = side(10_000_000_000);

        let owner = Pubkey::new_unique();
        let mut alice_src = Holder::new(source.bridge.ledger, owner, 255);
        let mut alice_dst = Holder::new(destination.bridge.ledger, owner, 255);

        source.ledger.mint(&mut alice_src, 5 * UNIT, None, 0).unwrap();
        destination.ledger.mint(&mut alice_dst, UNIT, None, 0).unwrap();
        assert_eq!(alice_dst.locked_rate(), 10_000_000_000);

        let transfer = source
            .bridge
            .lock(
                &source.bridge_key,
                &mut source.ledger,
                &mut alice_src,
                &mut source.custody,
                owner.to_bytes(),
                AMOUNT_ALL,
                100,
            )
            .unwrap();
        let message = msg_codec::encode(&transfer);

        let released = destination
            .bridge
            .release(
                &destination.bridge_key,
                &mut destination.ledger,
                &mut alice_dst,
                &message,
                200,
            )
            .unwrap();

        assert_eq!(released, transfer);
        assert_eq!(alice_dst.locked_rate(), 50_000_000_000);
        assert_eq!(alice_src.principal(), 0);
        assert_eq!(destination.bridge.total_released, transfer.amount);
    }

    #[test]
    fn release_to_the_wrong_holder_is_rejected() {
        let mut destination = side(10_000_000_000);
        let mut mallory = Holder::new(destination.bridge.ledger, Pubkey::new_unique(), 255);

        let message = msg_codec::encode(&CrossLedgerTransfer {
            receiver: [9u8; 32],
            source_holder: [1u8; 32],
            amount: UNIT,
            rate: 1,
        });

        let result = destination.bridge.release(
            &destination.bridge_key,
            &mut destination.ledger,
            &mut mallory,
            &message,
            0,
        );
        assert!(result.is_err());
        assert_eq!(mallory.principal(), 0);
        assert_eq!(destination.bridge.total_released, 0);
    }
}
