use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct SetGlobalRate<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
        constraint = ledger.may_govern_rate(&authority.key()) @ LedgerError::Unauthorized,
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}

pub fn handle_set_global_rate(ctx: Context<SetGlobalRate>, new_rate: u64) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let old_rate = ledger.set_global_rate(new_rate)?;
    let ledger_key = ledger.key();

    msg!("Global rate {} -> {}", old_rate, new_rate);

    emit_cpi!(GlobalRateChangedEvent {
        ledger: ledger_key,
        authority: ctx.accounts.authority.key(),
        old_rate,
        new_rate,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
