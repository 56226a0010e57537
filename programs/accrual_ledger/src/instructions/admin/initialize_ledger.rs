use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitializeLedgerArgs {
    pub symbol: String,
    pub global_rate: u64,
}

#[event_cpi]
#[derive(Accounts)]
#[instruction(args: InitializeLedgerArgs)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED, args.symbol.as_bytes()],
        bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    pub system_program: Program<'info, System>,
}

impl InitializeLedger<'_> {
    pub fn validate(args: &InitializeLedgerArgs) -> Result<()> {
        require!(!args.symbol.is_empty(), LedgerError::InvalidSymbol);
        require!(args.symbol.len() <= MAX_SYMBOL_LEN, LedgerError::SymbolTooLong);
        // zero bytes are the padding of the stored symbol
        require!(!args.symbol.as_bytes().contains(&0), LedgerError::InvalidSymbol);
        Ok(())
    }

    pub fn handler(ctx: Context<InitializeLedger>, args: InitializeLedgerArgs) -> Result<()> {
        Self::validate(&args)?;

        let authority = ctx.accounts.authority.key();
        let ledger = Ledger::new(authority, &args.symbol, args.global_rate, ctx.bumps.ledger)?;
        ctx.accounts.ledger.set_inner(ledger);

        msg!("Ledger {} initialized at rate {}", args.symbol, args.global_rate);

        emit_cpi!(LedgerInitializedEvent {
            authority,
            ledger: ctx.accounts.ledger.key(),
            symbol: args.symbol,
            global_rate: args.global_rate,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
