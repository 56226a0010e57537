use super::*;

#[account]
#[derive(InitSpace)]
pub struct Ledger {
    pub bump: u8,
    pub authority: Pubkey,                          // governs the rate and the supply operators
    pub symbol: [u8; MAX_SYMBOL_LEN],               // zero padded, part of the PDA seeds
    pub global_rate: u64,                           // rate offered to first-time depositors, never increases
    pub total_principal: u64,                       // sum of all stored principals
    pub supply_operator_count: u8,
    pub supply_operators: [Pubkey; MAX_SUPPLY_OPERATORS],
    pub bridge_store: Option<Pubkey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    pub interest: u64,
    pub principal: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintOutcome {
    pub interest_settled: u64,
    pub locked_rate: u64,
    pub rate_assigned: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnOutcome {
    pub amount: u64,
    pub interest_settled: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferOutcome {
    pub amount: u64,
    pub rate_inherited: bool,
    pub interest_settled: u64,
}

impl Ledger {
    pub fn new(authority: Pubkey, symbol: &str, global_rate: u64, bump: u8) -> Result<Self> {
        Ok(Self {
            bump,
            authority,
            symbol: Self::pack_symbol(symbol)?,
            global_rate,
            total_principal: 0,
            supply_operator_count: 0,
            supply_operators: [Pubkey::default(); MAX_SUPPLY_OPERATORS],
            bridge_store: None,
        })
    }

    pub fn pack_symbol(symbol: &str) -> Result<[u8; MAX_SYMBOL_LEN]> {
        let bytes = symbol.as_bytes();
        require!(!bytes.is_empty(), LedgerError::InvalidSymbol);
        require!(!bytes.contains(&0), LedgerError::InvalidSymbol);
        require!(bytes.len() <= MAX_SYMBOL_LEN, LedgerError::SymbolTooLong);

        let mut packed = [0u8; MAX_SYMBOL_LEN];
        packed[..bytes.len()].copy_from_slice(bytes);
        Ok(packed)
    }

    /// Symbol bytes without the zero padding, as used in the PDA seeds.
    pub fn symbol_seed(&self) -> &[u8] {
        let len = self.symbol.iter().position(|&x| x == 0).unwrap_or(MAX_SYMBOL_LEN);
        &self.symbol[..len]
    }

    pub fn symbol_string(&self) -> String {
        String::from_utf8_lossy(self.symbol_seed()).into_owned()
    }

    /// The bridge custody holder is credited only by the bridge's own lock,
    /// which burns the same units in the same instruction.
    pub fn require_external_recipient(&self, recipient: &Pubkey) -> Result<()> {
        require!(
            self.bridge_store != Some(*recipient),
            LedgerError::InvalidReceiver
        );
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Accrual ledger
    // ---------------------------------------------------------------------

    /// Realizes the holder's interest up to `now`.
    pub fn settle(&mut self, holder: &mut Holder, now: i64) -> Result<Settlement> {
        let (next, interest) = holder.accrual.settled(now)?;
        let total_principal = self.total_principal.safe_add(interest)?;

        holder.accrual = next;
        self.total_principal = total_principal;

        Ok(Settlement {
            interest,
            principal: next.principal,
        })
    }

    /// Credits `amount` to `to`.
    ///
    /// With `rate_override` the holder's rate is replaced unconditionally (the
    /// cross-ledger receive path). Without it the current global rate is locked
    /// in only when the holder had nothing before this mint.
    pub fn mint(
        &mut self,
        to: &mut Holder,
        amount: u64,
        rate_override: Option<u64>,
        now: i64,
    ) -> Result<MintOutcome> {
        let first_contact = to.accrual.principal == 0;
        let (mut next, interest) = to.accrual.settled(now)?;

        let (locked_rate, rate_assigned) = match rate_override {
            Some(rate) => (rate, true),
            None if first_contact => (self.global_rate, true),
            None => (next.locked_rate, false),
        };

        next.locked_rate = locked_rate;
        next.principal = next.principal.safe_add(amount)?;

        let total_principal = self
            .total_principal
            .safe_add(interest)?
            .safe_add(amount)?;

        to.accrual = next;
        self.total_principal = total_principal;

        Ok(MintOutcome {
            interest_settled: interest,
            locked_rate,
            rate_assigned,
        })
    }

    /// Debits `amount` (or the whole settled balance for `AMOUNT_ALL`) from `from`.
    pub fn burn(&mut self, from: &mut Holder, amount: u64, now: i64) -> Result<BurnOutcome> {
        let (mut next, interest) = from.accrual.settled(now)?;

        let amount = Self::resolve_amount(amount, next.principal);
        require_gte!(next.principal, amount, LedgerError::InsufficientBalance);

        next.principal = next.principal.safe_sub(amount)?;

        let total_principal = self
            .total_principal
            .safe_add(interest)?
            .safe_sub(amount)?;

        from.accrual = next;
        self.total_principal = total_principal;

        Ok(BurnOutcome {
            amount,
            interest_settled: interest,
        })
    }

    /// Moves principal between two holders of this ledger. A recipient with
    /// nothing settled adopts the sender's locked rate.
    pub fn transfer(
        &mut self,
        from: &mut Holder,
        to: &mut Holder,
        amount: u64,
        now: i64,
    ) -> Result<TransferOutcome> {
        let (mut next_from, from_interest) = from.accrual.settled(now)?;
        let (mut next_to, to_interest) = to.accrual.settled(now)?;

        let amount = Self::resolve_amount(amount, next_from.principal);
        require_gte!(next_from.principal, amount, LedgerError::InsufficientBalance);

        let rate_inherited = next_to.principal == 0 && amount > 0;
        if rate_inherited {
            next_to.locked_rate = next_from.locked_rate;
        }

        next_from.principal = next_from.principal.safe_sub(amount)?;
        next_to.principal = next_to.principal.safe_add(amount)?;

        let interest_settled = from_interest.safe_add(to_interest)?;
        let total_principal = self.total_principal.safe_add(interest_settled)?;

        from.accrual = next_from;
        to.accrual = next_to;
        self.total_principal = total_principal;

        Ok(TransferOutcome {
            amount,
            rate_inherited,
            interest_settled,
        })
    }

    fn resolve_amount(amount: u64, balance: u64) -> u64 {
        if amount == AMOUNT_ALL {
            balance
        } else {
            amount
        }
    }

    // ---------------------------------------------------------------------
    // Rate governor
    // ---------------------------------------------------------------------

    /// Replaces the global rate, returning the previous one. Increases are rejected.
    pub fn set_global_rate(&mut self, new_rate: u64) -> Result<u64> {
        let old_rate = self.global_rate;
        require_gte!(old_rate, new_rate, LedgerError::RateIncreaseRejected);

        self.global_rate = new_rate;
        Ok(old_rate)
    }

    // ---------------------------------------------------------------------
    // Supply operators
    // ---------------------------------------------------------------------

    pub fn operators(&self) -> &[Pubkey] {
        &self.supply_operators[..self.supply_operator_count as usize]
    }

    pub fn is_supply_operator(&self, key: &Pubkey) -> bool {
        self.operators().iter().any(|operator| operator == key)
    }

    /// Returns `false` when the key already held the role.
    pub fn grant_supply_role(&mut self, grantee: Pubkey) -> Result<bool> {
        if self.is_supply_operator(&grantee) {
            return Ok(false);
        }

        let count = self.supply_operator_count as usize;
        require!(count < MAX_SUPPLY_OPERATORS, LedgerError::SupplyOperatorsFull);

        self.supply_operators[count] = grantee;
        self.supply_operator_count += 1;
        Ok(true)
    }

    /// Returns `false` when the key did not hold the role.
    pub fn revoke_supply_role(&mut self, grantee: &Pubkey) -> bool {
        let count = self.supply_operator_count as usize;
        let Some(index) = self.operators().iter().position(|operator| operator == grantee) else {
            return false;
        };

        // keep the occupied prefix dense
        self.supply_operators[index] = self.supply_operators[count - 1];
        self.supply_operators[count - 1] = Pubkey::default();
        self.supply_operator_count -= 1;
        true
    }
}
