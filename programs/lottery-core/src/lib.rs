#![allow(unexpected_cfgs)]

//! Settlement engine for a numbers lottery: users buy tickets naming a
//! sorted combination, an authorized oracle publishes the official draw,
//! and ticket holders collect `stake * multiplier(match_count)` from a
//! pooled lamport vault. Every instruction runs atomically and is gated on
//! a role recorded in the configuration account.

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod numbers;
pub mod state;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod lottery_core {
    use super::*;

    /// Creates the singleton configuration and assigns the three roles.
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        ticket_price: u64,
        oracle: Pubkey,
        treasury: Pubkey,
    ) -> Result<()> {
        process_initialize_config(ctx, ticket_price, oracle, treasury)
    }

    /// Opens the next selling period; the previous one must be settled.
    pub fn open_period(ctx: Context<OpenPeriod>, period_id: u64) -> Result<()> {
        process_open_period(ctx, period_id)
    }

    /// Stops ticket sales for a selling period.
    pub fn close_period(ctx: Context<ClosePeriod>, period_id: u64) -> Result<()> {
        process_close_period(ctx, period_id)
    }

    /// Oracle-only: publishes the official draw for a closed period.
    pub fn submit_result(
        ctx: Context<SubmitResult>,
        period_id: u64,
        winning_numbers: [u8; constants::NUMBERS_PER_TICKET],
    ) -> Result<()> {
        process_submit_result(ctx, period_id, winning_numbers)
    }

    /// Marks a result-bearing period as settled.
    pub fn settle_period(ctx: Context<SettlePeriod>, period_id: u64) -> Result<()> {
        process_settle_period(ctx, period_id)
    }

    /// Buys one ticket in the current period for exactly the ticket price.
    pub fn buy_ticket(
        ctx: Context<BuyTicket>,
        numbers: [u8; constants::NUMBERS_PER_TICKET],
        payment: u64,
    ) -> Result<()> {
        process_buy_ticket(ctx, numbers, payment)
    }

    /// Pays out a winning, unclaimed ticket to its recorded owner.
    pub fn claim_prize(ctx: Context<ClaimPrize>, ticket_id: u64) -> Result<()> {
        process_claim_prize(ctx, ticket_id)
    }

    /// Operator-only: new price for subsequent purchases.
    pub fn set_ticket_price(ctx: Context<UpdateConfig>, new_price: u64) -> Result<()> {
        process_set_ticket_price(ctx, new_price)
    }

    /// Operator-only: new multiplier for one match-count tier, effective
    /// for subsequent purchases.
    pub fn set_prize_multiplier(
        ctx: Context<UpdateConfig>,
        matches: u8,
        multiplier: u64,
    ) -> Result<()> {
        process_set_prize_multiplier(ctx, matches, multiplier)
    }

    /// Treasury-only: moves pooled lamports out of the vault.
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
        process_withdraw_funds(ctx, amount)
    }
}
