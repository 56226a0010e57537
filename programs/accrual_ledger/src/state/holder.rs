use super::*;

/// Stored principal bookkeeping for one holder. Everything else about the
/// holder's balance is derived from these three fields and the clock.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq, InitSpace)]
pub struct Accrual {
    pub principal: u64,     // realized balance, excludes unsettled interest
    pub locked_rate: u64,   // per-second rate at PRECISION_FACTOR scale, 0 = never set
    pub last_settled: i64,  // unix timestamp of the last settlement
}

impl Accrual {
    pub fn effective_balance(&self, now: i64) -> Result<u64> {
        accrual::effective_balance(self.principal, self.locked_rate, self.last_settled, now)
    }

    pub fn pending_interest(&self, now: i64) -> Result<u64> {
        accrual::pending_interest(self.principal, self.locked_rate, self.last_settled, now)
    }

    /// The record as it looks once interest up to `now` is realized, together
    /// with the interest that was realized. `self` is left untouched.
    pub fn settled(&self, now: i64) -> Result<(Accrual, u64)> {
        let interest = self.pending_interest(now)?;

        let next = Accrual {
            principal: self.principal.safe_add(interest)?,
            locked_rate: self.locked_rate,
            last_settled: now,
        };

        Ok((next, interest))
    }
}

#[account]
#[derive(InitSpace)]
pub struct Holder {
    pub bump: u8,
    pub ledger: Pubkey,   // the ledger this account belongs to
    pub owner: Pubkey,    // holder identity
    pub accrual: Accrual,
}

impl Holder {
    pub fn new(ledger: Pubkey, owner: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            ledger,
            owner,
            accrual: Accrual::default(),
        }
    }

    /// Fills in identity on an account created by `init_if_needed`.
    pub fn bind(&mut self, ledger: Pubkey, owner: Pubkey, bump: u8) -> Result<()> {
        if self.ledger == Pubkey::default() {
            self.ledger = ledger;
            self.owner = owner;
            self.bump = bump;
        }

        require_keys_eq!(self.ledger, ledger, LedgerError::InvalidHolder);
        require_keys_eq!(self.owner, owner, LedgerError::InvalidHolder);
        Ok(())
    }

    pub fn principal(&self) -> u64 {
        self.accrual.principal
    }

    pub fn locked_rate(&self) -> u64 {
        self.accrual.locked_rate
    }
}
