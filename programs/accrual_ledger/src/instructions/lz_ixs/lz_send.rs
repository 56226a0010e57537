use super::*;

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct LzSendParams {
    pub dst_eid: u32,
    pub to: [u8; 32],
    pub amount: u64,
    pub options: Vec<u8>,
    pub native_fee: u64,
    pub lz_token_fee: u64,
}

#[event_cpi]
#[derive(Accounts)]
#[instruction(params: LzSendParams)]
pub struct LzSend<'info> {
    pub signer: Signer<'info>,

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
        seeds = [PEER_SEED, bridge_store.key().as_ref(), &params.dst_eid.to_be_bytes()],
        bump = peer.bump
    )]
    pub peer: Account<'info, PeerConfig>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger.key().as_ref(), signer.key().as_ref()],
        bump = sender_holder.bump,
    )]
    pub sender_holder: Box<Account<'info, Holder>>,

    #[account(
        mut,
        address = bridge_store.custody @ LedgerError::LzInvalidBridgeStore,
    )]
    pub custody: Box<Account<'info, Holder>>,
}

impl LzSend<'_> {
    /// Locks `params.amount` of the signer's balance (or all of it for
    /// `AMOUNT_ALL`) and sends it with the signer's locked rate.
    pub fn apply(ctx: &mut Context<LzSend>, params: &LzSendParams) -> Result<MessagingReceipt> {
        require!(params.amount > 0, LedgerError::InvalidAmount);
        require!(
            params.to != ctx.accounts.peer.peer_address,
            LedgerError::InvalidReceiver
        );
        require!(
            ctx.remaining_accounts.get(1).map(|account| account.key())
                == Some(ctx.accounts.bridge_store.key()),
            LedgerError::LzInvalidSender
        );

        let now = Clock::get()?.unix_timestamp;
        let ledger_key = ctx.accounts.ledger.key();
        let bridge_key = ctx.accounts.bridge_store.key();

        let accounts = &mut ctx.accounts;
        let transfer = accounts.bridge_store.lock(
            &bridge_key,
            &mut accounts.ledger,
            &mut accounts.sender_holder,
            &mut accounts.custody,
            params.to,
            params.amount,
            now,
        )?;

        if let Some(rate_limiter) = accounts.peer.outbound_rate_limiter.as_mut() {
            rate_limiter.try_consume(transfer.amount, now)?;
        }
        if let Some(rate_limiter) = accounts.peer.inbound_rate_limiter.as_mut() {
            rate_limiter.refill(transfer.amount, now);
        }

        msg!("Locked {} at rate {} for eid {}", transfer.amount, transfer.rate, params.dst_eid);

        let bump = [accounts.bridge_store.bump];
        let msg_receipt = oapp::endpoint_cpi::send(
            accounts.bridge_store.endpoint_program,
            bridge_key,
            ctx.remaining_accounts,
            &[BRIDGE_SEED, ledger_key.as_ref(), &bump],
            EndpointSendParams {
                dst_eid: params.dst_eid,
                receiver: accounts.peer.peer_address,
                message: msg_codec::encode(&transfer),
                options: accounts.peer.enforced_options.combine_options(&params.options)?,
                native_fee: params.native_fee,
                lz_token_fee: params.lz_token_fee,
            },
        )?;

        emit_cpi!(CrossLedgerLockedEvent {
            guid: msg_receipt.guid,
            ledger: ledger_key,
            dst_eid: params.dst_eid,
            from: ctx.accounts.signer.key(),
            to: params.to,
            amount: transfer.amount,
            rate: transfer.rate,
            timestamp: now,
        });

        Ok(msg_receipt)
    }
}
