use super::*;

/// Anyone may settle any holder; settlement never changes the effective balance.
#[event_cpi]
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct SettleHolder<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), owner.as_ref()],
        bump = holder.bump,
    )]
    pub holder: Box<Account<'info, Holder>>,
}

impl SettleHolder<'_> {
    pub fn handler(ctx: Context<SettleHolder>, owner: Pubkey) -> Result<()> {
        let ledger_key = ctx.accounts.ledger.key();
        let now = Clock::get()?.unix_timestamp;

        let holder = &mut ctx.accounts.holder;
        let settlement = ctx.accounts.ledger.settle(holder, now)?;

        emit_cpi!(InterestSettledEvent {
            ledger: ledger_key,
            holder: owner,
            interest: settlement.interest,
            principal: settlement.principal,
            timestamp: now,
        });

        Ok(())
    }
}
