use super::*;

#[event_cpi]
#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct MintUnits<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
        constraint = ledger.may_mutate_supply(&operator.key()) @ LedgerError::Unauthorized,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        init_if_needed,
        payer = operator,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), recipient.as_ref()],
        bump
    )]
    pub holder: Box<Account<'info, Holder>>,

    pub system_program: Program<'info, System>,
}

impl MintUnits<'_> {
    pub fn handler(ctx: Context<MintUnits>, recipient: Pubkey, amount: u64) -> Result<()> {
        let ledger_key = ctx.accounts.ledger.key();
        let now = Clock::get()?.unix_timestamp;

        ctx.accounts.ledger.require_external_recipient(&recipient)?;

        let holder = &mut ctx.accounts.holder;
        holder.bind(ledger_key, recipient, ctx.bumps.holder)?;

        let outcome = ctx.accounts.ledger.mint(holder, amount, None, now)?;

        if outcome.rate_assigned {
            msg!("Locked rate {} for {}", outcome.locked_rate, recipient);
        }

        emit_cpi!(BalanceCreatedEvent {
            ledger: ledger_key,
            holder: recipient,
            amount,
            interest_settled: outcome.interest_settled,
            locked_rate: outcome.locked_rate,
            timestamp: now,
        });

        Ok(())
    }
}
