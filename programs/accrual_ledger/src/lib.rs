use anchor_lang::prelude::*;
use anchor_lang::solana_program::msg;
use oapp::{
    endpoint::{
        cpi::accounts::Clear,
        instructions::{ClearParams, RegisterOAppParams, SendParams as EndpointSendParams},
        ConstructCPIContext, MessagingReceipt, ID as ENDPOINT_ID,
    },
    LzReceiveParams,
};
use std::panic::Location;
use static_assertions::const_assert_eq;


pub mod error;
pub mod instructions;
pub mod state;
pub mod events;
pub mod constants;
pub mod math;
pub mod msg_codec;

pub use error::LedgerError;
pub use instructions::*;
pub use state::*;
pub use events::*;
pub use constants::*;
pub use math::*;
pub use msg_codec::CrossLedgerTransfer;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "accrual_ledger",
    project_url: "https://github.com/accrual-ledger/accrual-ledger",
    contacts: "email:security@accrual-ledger.dev",
    policy: "Please report vulnerabilities privately to the contact above.",
    source_code: "https://github.com/accrual-ledger/accrual-ledger",
    source_release: "v0.1.0"
}

declare_id!("7sQpGkJ3nYx4dRr9a2TJtYwVvTqKf8mC5bLhUe1xZpNa");

#[program]
pub mod accrual_ledger {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>, args: InitializeLedgerArgs) -> Result<()> {
        InitializeLedger::handler(ctx, args)
    }

    pub fn set_global_rate(ctx: Context<SetGlobalRate>, new_rate: u64) -> Result<()> {
        handle_set_global_rate(ctx, new_rate)
    }

    pub fn grant_supply_role(ctx: Context<UpdateSupplyRole>, grantee: Pubkey) -> Result<()> {
        handle_grant_supply_role(ctx, grantee)
    }

    pub fn revoke_supply_role(ctx: Context<UpdateSupplyRole>, grantee: Pubkey) -> Result<()> {
        handle_revoke_supply_role(ctx, grantee)
    }

    pub fn mint(ctx: Context<MintUnits>, recipient: Pubkey, amount: u64) -> Result<()> {
        MintUnits::handler(ctx, recipient, amount)
    }

    pub fn burn(ctx: Context<BurnUnits>, owner: Pubkey, amount: u64) -> Result<()> {
        BurnUnits::handler(ctx, owner, amount)
    }

    pub fn transfer(ctx: Context<TransferUnits>, recipient: Pubkey, amount: u64) -> Result<()> {
        TransferUnits::handler(ctx, recipient, amount)
    }

    pub fn settle(ctx: Context<SettleHolder>, owner: Pubkey) -> Result<()> {
        SettleHolder::handler(ctx, owner)
    }

    pub fn effective_balance_of(ctx: Context<QueryHolder>, owner: Pubkey) -> Result<u64> {
        QueryHolder::effective_balance_of(ctx, owner)
    }

    pub fn principal_balance_of(ctx: Context<QueryHolder>, owner: Pubkey) -> Result<u64> {
        QueryHolder::principal_balance_of(ctx, owner)
    }

    pub fn user_interest_rate(ctx: Context<QueryHolder>, owner: Pubkey) -> Result<u64> {
        QueryHolder::user_interest_rate(ctx, owner)
    }

    pub fn global_rate(ctx: Context<QueryLedger>) -> Result<u64> {
        Ok(ctx.accounts.ledger.global_rate)
    }

    pub fn total_principal(ctx: Context<QueryLedger>) -> Result<u64> {
        Ok(ctx.accounts.ledger.total_principal)
    }

    pub fn initialize_bridge(
        mut ctx: Context<InitializeBridge>,
        params: InitializeBridgeParams,
    ) -> Result<()> {
        InitializeBridge::apply(&mut ctx, &params)
    }

    pub fn set_peer_config(mut ctx: Context<SetPeerConfig>, params: SetPeerConfigParams) -> Result<()> {
        SetPeerConfig::apply(&mut ctx, &params)
    }

    pub fn lz_send(mut ctx: Context<LzSend>, params: LzSendParams) -> Result<MessagingReceipt> {
        LzSend::apply(&mut ctx, &params)
    }

    pub fn lz_receive(mut ctx: Context<LzReceive>, params: LzReceiveParams) -> Result<()> {
        LzReceive::apply(&mut ctx, &params)
    }

    pub fn lz_receive_types(
        ctx: Context<LzReceiveTypes>,
        params: LzReceiveParams,
    ) -> Result<Vec<oapp::endpoint_cpi::LzAccount>> {
        LzReceiveTypes::apply(&ctx, &params)
    }
}
