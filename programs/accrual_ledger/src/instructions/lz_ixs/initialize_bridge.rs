use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitializeBridgeParams {
    pub endpoint_program: Option<Pubkey>,
    pub admin: Option<Pubkey>,
}

#[event_cpi]
#[derive(Accounts)]
pub struct InitializeBridge<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
        constraint = ledger.may_govern_rate(&authority.key()) @ LedgerError::LzUnauthorized,
        constraint = ledger.bridge_store.is_none() @ LedgerError::LzInvalidBridgeStore,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        init,
        payer = payer,
        space = 8 + BridgeStore::INIT_SPACE,
        seeds = [BRIDGE_SEED, ledger.key().as_ref()],
        bump
    )]
    pub bridge_store: Box<Account<'info, BridgeStore>>,

    #[account(
        init,
        payer = payer,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), bridge_store.key().as_ref()],
        bump
    )]
    pub custody: Box<Account<'info, Holder>>,

    #[account(
        init,
        payer = payer,
        space = 8 + LzReceiveTypesAccounts::INIT_SPACE,
        seeds = [LZ_RECEIVE_TYPES_SEED, bridge_store.key().as_ref()],
        bump
    )]
    pub lz_receive_types_accounts: Account<'info, LzReceiveTypesAccounts>,

    pub system_program: Program<'info, System>,
}

impl InitializeBridge<'_> {
    pub fn apply(ctx: &mut Context<InitializeBridge>, params: &InitializeBridgeParams) -> Result<()> {
        let ledger_key = ctx.accounts.ledger.key();
        let bridge_key = ctx.accounts.bridge_store.key();
        let admin = params.admin.unwrap_or(ctx.accounts.authority.key());

        let bridge_store = &mut ctx.accounts.bridge_store;
        bridge_store.ledger = ledger_key;
        bridge_store.custody = ctx.accounts.custody.key();
        bridge_store.endpoint_program = params.endpoint_program.unwrap_or(ENDPOINT_ID);
        bridge_store.admin = admin;
        bridge_store.bump = ctx.bumps.bridge_store;
        bridge_store.total_locked = 0;
        bridge_store.total_released = 0;

        ctx.accounts
            .custody
            .set_inner(Holder::new(ledger_key, bridge_key, ctx.bumps.custody));

        ctx.accounts.lz_receive_types_accounts.bridge_store = bridge_key;
        ctx.accounts.lz_receive_types_accounts.ledger = ledger_key;

        let ledger = &mut ctx.accounts.ledger;
        ledger.bridge_store = Some(bridge_key);
        ledger.grant_supply_role(bridge_key)?;

        let endpoint_program = ctx.accounts.bridge_store.endpoint_program;
        oapp::endpoint_cpi::register_oapp(
            endpoint_program,
            bridge_key,
            ctx.remaining_accounts,
            &[BRIDGE_SEED, ledger_key.as_ref(), &[ctx.bumps.bridge_store]],
            RegisterOAppParams { delegate: admin },
        )?;

        emit_cpi!(BridgeInitializedEvent {
            ledger: ledger_key,
            bridge_store: bridge_key,
            custody: ctx.accounts.custody.key(),
            endpoint_program,
            admin,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
