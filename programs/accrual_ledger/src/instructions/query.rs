use super::*;

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct QueryHolder<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// Omitted for a holder that was never credited.
    #[account(
        seeds = [HOLDER_SEED, ledger.key().as_ref(), owner.as_ref()],
        bump = holder.bump,
    )]
    pub holder: Option<Account<'info, Holder>>,
}

impl QueryHolder<'_> {
    fn accrual(&self) -> Accrual {
        self.holder
            .as_ref()
            .map(|holder| holder.accrual)
            .unwrap_or_default()
    }

    /// Principal plus interest accrued since the last settlement.
    pub fn effective_balance_of(ctx: Context<QueryHolder>, _owner: Pubkey) -> Result<u64> {
        let now = Clock::get()?.unix_timestamp;
        ctx.accounts.accrual().effective_balance(now)
    }

    pub fn principal_balance_of(ctx: Context<QueryHolder>, _owner: Pubkey) -> Result<u64> {
        Ok(ctx.accounts.accrual().principal)
    }

    pub fn user_interest_rate(ctx: Context<QueryHolder>, _owner: Pubkey) -> Result<u64> {
        Ok(ctx.accounts.accrual().locked_rate)
    }
}

#[derive(Accounts)]
pub struct QueryLedger<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}
