use super::*;

#[event_cpi]
#[derive(Accounts)]
#[instruction(params: LzReceiveParams)]
pub struct LzReceive<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        mut,
        seeds = [BRIDGE_SEED, ledger.key().as_ref()],
        bump = bridge_store.bump,
        address = ledger.bridge_store.unwrap_or_default() @ LedgerError::LzInvalidBridgeStore,
    )]
    pub bridge_store: Box<Account<'info, BridgeStore>>,

    #[account(
        mut,
        seeds = [PEER_SEED, bridge_store.key().as_ref(), &params.src_eid.to_be_bytes()],
        bump = peer.bump,
        constraint = peer.peer_address == params.sender @ LedgerError::LzInvalidSender
    )]
    pub peer: Account<'info, PeerConfig>,

    /// CHECK: the holder identity named by the message
    #[account(
        address = msg_codec::send_to(&params.message) @ LedgerError::InvalidReceiver
    )]
    pub to_address: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), to_address.key().as_ref()],
        bump
    )]
    pub receiver_holder: Box<Account<'info, Holder>>,

    pub system_program: Program<'info, System>,
}

impl LzReceive<'_> {
    pub fn apply(ctx: &mut Context<LzReceive>, params: &LzReceiveParams) -> Result<()> {
        let ledger_key = ctx.accounts.ledger.key();
        let bridge_key = ctx.accounts.bridge_store.key();
        let bump = [ctx.accounts.bridge_store.bump];
        let seeds: &[&[u8]] = &[BRIDGE_SEED, ledger_key.as_ref(), &bump];

        // single delivery: the endpoint rejects a payload that was already cleared
        let accounts_for_clear = ctx
            .remaining_accounts
            .get(..Clear::MIN_ACCOUNTS_LEN)
            .ok_or(LedgerError::LzInvalidSender)?;
        oapp::endpoint_cpi::clear(
            ctx.accounts.bridge_store.endpoint_program,
            bridge_key,
            accounts_for_clear,
            seeds,
            ClearParams {
                receiver: bridge_key,
                src_eid: params.src_eid,
                sender: params.sender,
                nonce: params.nonce,
                guid: params.guid,
                message: params.message.clone(),
            },
        )?;

        let now = Clock::get()?.unix_timestamp;
        let to_address = ctx.accounts.to_address.key();

        let accounts = &mut ctx.accounts;
        accounts
            .receiver_holder
            .bind(ledger_key, to_address, ctx.bumps.receiver_holder)?;

        let transfer = accounts.bridge_store.release(
            &bridge_key,
            &mut accounts.ledger,
            &mut accounts.receiver_holder,
            &params.message,
            now,
        )?;

        if let Some(rate_limiter) = accounts.peer.inbound_rate_limiter.as_mut() {
            rate_limiter.try_consume(transfer.amount, now)?;
        }
        if let Some(rate_limiter) = accounts.peer.outbound_rate_limiter.as_mut() {
            rate_limiter.refill(transfer.amount, now);
        }

        msg!("Released {} at rate {} from eid {}", transfer.amount, transfer.rate, params.src_eid);

        emit_cpi!(CrossLedgerReleasedEvent {
            guid: params.guid,
            ledger: ledger_key,
            src_eid: params.src_eid,
            to: to_address,
            amount: transfer.amount,
            rate: transfer.rate,
            timestamp: now,
        });

        Ok(())
    }
}

#[derive(Accounts)]
pub struct LzReceiveTypes<'info> {
    #[account(
        seeds = [BRIDGE_SEED, ledger.key().as_ref()],
        bump = bridge_store.bump,
        address = ledger.bridge_store.unwrap_or_default() @ LedgerError::LzInvalidBridgeStore,
    )]
    pub bridge_store: Box<Account<'info, BridgeStore>>,

    #[account(
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}

impl LzReceiveTypes<'_> {
    /// Accounts of `lz_receive`, in declaration order, followed by the
    /// endpoint accounts `clear` needs.
    pub fn apply(
        ctx: &Context<LzReceiveTypes>,
        params: &LzReceiveParams,
    ) -> Result<Vec<oapp::endpoint_cpi::LzAccount>> {
        let program_id = ctx.program_id;
        let ledger_key = ctx.accounts.ledger.key();
        let bridge_key = ctx.accounts.bridge_store.key();
        let to_address = msg_codec::send_to(&params.message);

        let (peer, _) = Pubkey::find_program_address(
            &[PEER_SEED, bridge_key.as_ref(), &params.src_eid.to_be_bytes()],
            program_id,
        );
        let (receiver_holder, _) = Pubkey::find_program_address(
            &[HOLDER_SEED, ledger_key.as_ref(), to_address.as_ref()],
            program_id,
        );
        let (event_authority, _) =
            Pubkey::find_program_address(&[EVENT_AUTHORITY_SEED], program_id);

        let mut accounts = vec![
            oapp::endpoint_cpi::LzAccount {
                pubkey: Pubkey::default(),
                is_signer: true,
                is_writable: true,
            }, // 0: payer
            oapp::endpoint_cpi::LzAccount {
                pubkey: ledger_key,
                is_signer: false,
                is_writable: true,
            }, // 1: ledger
            oapp::endpoint_cpi::LzAccount {
                pubkey: bridge_key,
                is_signer: false,
                is_writable: true,
            }, // 2: bridge_store
            oapp::endpoint_cpi::LzAccount {
                pubkey: peer,
                is_signer: false,
                is_writable: true,
            }, // 3: peer
            oapp::endpoint_cpi::LzAccount {
                pubkey: to_address,
                is_signer: false,
                is_writable: false,
            }, // 4: to_address
            oapp::endpoint_cpi::LzAccount {
                pubkey: receiver_holder,
                is_signer: false,
                is_writable: true,
            }, // 5: receiver_holder
            oapp::endpoint_cpi::LzAccount {
                pubkey: solana_program::system_program::ID,
                is_signer: false,
                is_writable: false,
            }, // 6: system_program
            oapp::endpoint_cpi::LzAccount {
                pubkey: event_authority,
                is_signer: false,
                is_writable: false,
            }, // 7: event_authority
            oapp::endpoint_cpi::LzAccount {
                pubkey: *program_id,
                is_signer: false,
                is_writable: false,
            }, // 8: program
        ];

        let accounts_for_clear = oapp::endpoint_cpi::get_accounts_for_clear(
            ctx.accounts.bridge_store.endpoint_program,
            &bridge_key,
            params.src_eid,
            &params.sender,
            params.nonce,
        );
        accounts.extend(accounts_for_clear);

        Ok(accounts)
    }
}
