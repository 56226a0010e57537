use super::*;

#[event_cpi]
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct BurnUnits<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
        constraint = ledger.may_mutate_supply(&operator.key()) @ LedgerError::Unauthorized,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), owner.as_ref()],
        bump = holder.bump,
    )]
    pub holder: Box<Account<'info, Holder>>,
}

impl BurnUnits<'_> {
    /// `amount == AMOUNT_ALL` burns the holder's entire settled balance.
    pub fn handler(ctx: Context<BurnUnits>, owner: Pubkey, amount: u64) -> Result<()> {
        let ledger_key = ctx.accounts.ledger.key();
        let now = Clock::get()?.unix_timestamp;

        let holder = &mut ctx.accounts.holder;
        let outcome = ctx.accounts.ledger.burn(holder, amount, now)?;

        emit_cpi!(BalanceDestroyedEvent {
            ledger: ledger_key,
            holder: owner,
            amount: outcome.amount,
            interest_settled: outcome.interest_settled,
            timestamp: now,
        });

        Ok(())
    }
}
