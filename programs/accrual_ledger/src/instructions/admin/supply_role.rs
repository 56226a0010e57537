use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct UpdateSupplyRole<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
        constraint = ledger.may_govern_rate(&authority.key()) @ LedgerError::Unauthorized,
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}

pub fn handle_grant_supply_role(ctx: Context<UpdateSupplyRole>, grantee: Pubkey) -> Result<()> {
    let granted = ctx.accounts.ledger.grant_supply_role(grantee)?;
    if !granted {
        msg!("{} already holds the supply role", grantee);
        return Ok(());
    }

    emit_cpi!(SupplyOperatorUpdatedEvent {
        ledger: ctx.accounts.ledger.key(),
        operator: grantee,
        granted: true,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn handle_revoke_supply_role(ctx: Context<UpdateSupplyRole>, grantee: Pubkey) -> Result<()> {
    let revoked = ctx.accounts.ledger.revoke_supply_role(&grantee);
    if !revoked {
        msg!("{} does not hold the supply role", grantee);
        return Ok(());
    }

    emit_cpi!(SupplyOperatorUpdatedEvent {
        ledger: ctx.accounts.ledger.key(),
        operator: grantee,
        granted: false,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
