use super::*;

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct SetPeerConfigParams {
    pub remote_eid: u32,
    pub config: PeerConfigParam,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub enum PeerConfigParam {
    PeerAddress([u8; 32]),
    EnforcedOptions { send: Vec<u8> },
    OutboundRateLimit(Option<RateLimitParams>),
    InboundRateLimit(Option<RateLimitParams>),
}

impl PeerConfigParam {
    fn name(&self) -> &'static str {
        match self {
            PeerConfigParam::PeerAddress(_) => "PeerAddress",
            PeerConfigParam::EnforcedOptions { .. } => "EnforcedOptions",
            PeerConfigParam::OutboundRateLimit(_) => "OutboundRateLimit",
            PeerConfigParam::InboundRateLimit(_) => "InboundRateLimit",
        }
    }
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct RateLimitParams {
    pub refill_per_second: Option<u64>,
    pub capacity: Option<u64>,
}

#[event_cpi]
#[derive(Accounts)]
#[instruction(params: SetPeerConfigParams)]
pub struct SetPeerConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED, ledger.symbol_seed()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        seeds = [BRIDGE_SEED, ledger.key().as_ref()],
        bump = bridge_store.bump,
        address = ledger.bridge_store.unwrap_or_default() @ LedgerError::LzInvalidBridgeStore,
        constraint = is_authorized_lz_admin(&admin.key(), &ledger, &bridge_store) @ LedgerError::LzUnauthorized
    )]
    pub bridge_store: Box<Account<'info, BridgeStore>>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + PeerConfig::INIT_SPACE,
        seeds = [PEER_SEED, bridge_store.key().as_ref(), &params.remote_eid.to_be_bytes()],
        bump
    )]
    pub peer: Account<'info, PeerConfig>,

    pub system_program: Program<'info, System>,
}

impl SetPeerConfig<'_> {
    pub fn apply(ctx: &mut Context<SetPeerConfig>, params: &SetPeerConfigParams) -> Result<()> {
        require!(params.remote_eid > 0, LedgerError::LzInvalidPeer);

        let now = Clock::get()?.unix_timestamp;
        let peer = &mut ctx.accounts.peer;
        match params.config.clone() {
            PeerConfigParam::PeerAddress(peer_address) => {
                require!(peer_address != [0u8; 32], LedgerError::LzInvalidPeer);
                peer.peer_address = peer_address;
            }
            PeerConfigParam::EnforcedOptions { send } => {
                oapp::options::assert_type_3(&send)?;
                peer.enforced_options.send = send;
            }
            PeerConfigParam::OutboundRateLimit(rate_limit_params) => {
                Self::update_rate_limiter(&mut peer.outbound_rate_limiter, &rate_limit_params, now)?;
            }
            PeerConfigParam::InboundRateLimit(rate_limit_params) => {
                Self::update_rate_limiter(&mut peer.inbound_rate_limiter, &rate_limit_params, now)?;
            }
        }
        peer.bump = ctx.bumps.peer;

        emit_cpi!(PeerConfigUpdatedEvent {
            ledger: ctx.accounts.ledger.key(),
            remote_eid: params.remote_eid,
            config_type: params.config.name().to_string(),
            admin: ctx.accounts.admin.key(),
            timestamp: now,
        });

        Ok(())
    }

    /// A limiter that did not exist before starts with a full bucket as of `now`.
    fn update_rate_limiter(
        rate_limiter: &mut Option<RateLimiter>,
        params: &Option<RateLimitParams>,
        now: i64,
    ) -> Result<()> {
        let Some(param) = params else {
            // no parameters lifts the limit
            *rate_limiter = None;
            return Ok(());
        };

        if let Some(capacity) = param.capacity {
            require!(capacity > 0, LedgerError::LzInvalidRateLimit);
        }

        let mut limiter = match rate_limiter.clone() {
            Some(limiter) => limiter,
            None => {
                let capacity = param.capacity.ok_or(LedgerError::LzInvalidRateLimit)?;
                RateLimiter::new(capacity, 0, now)
            }
        };
        if let Some(capacity) = param.capacity {
            limiter.set_capacity(capacity);
        }
        if let Some(refill_rate) = param.refill_per_second {
            limiter.set_rate(refill_rate);
        }

        *rate_limiter = Some(limiter);
        Ok(())
    }
}
