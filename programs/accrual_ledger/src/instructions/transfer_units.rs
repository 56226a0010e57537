use super::*;

#[event_cpi]
#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct TransferUnits<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), owner.key().as_ref()],
        bump = from_holder.bump,
    )]
    pub from_holder: Box<Account<'info, Holder>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), recipient.as_ref()],
        bump
    )]
    pub to_holder: Box<Account<'info, Holder>>,

    pub system_program: Program<'info, System>,
}

impl TransferUnits<'_> {
    /// `amount == AMOUNT_ALL` moves the sender's entire settled balance.
    pub fn handler(ctx: Context<TransferUnits>, recipient: Pubkey, amount: u64) -> Result<()> {
        let owner = ctx.accounts.owner.key();
        require_keys_neq!(owner, recipient, LedgerError::SelfTransfer);
        ctx.accounts.ledger.require_external_recipient(&recipient)?;

        let ledger_key = ctx.accounts.ledger.key();
        let now = Clock::get()?.unix_timestamp;

        let accounts = &mut ctx.accounts;
        accounts.to_holder.bind(ledger_key, recipient, ctx.bumps.to_holder)?;

        let outcome = accounts
            .ledger
            .transfer(&mut accounts.from_holder, &mut accounts.to_holder, amount, now)?;

        if outcome.rate_inherited {
            msg!("{} inherits rate {}", recipient, accounts.to_holder.locked_rate());
        }

        emit_cpi!(TransferEvent {
            ledger: ledger_key,
            from: owner,
            to: recipient,
            amount: outcome.amount,
            rate_inherited: outcome.rate_inherited,
            timestamp: now,
        });

        Ok(())
    }
}
