use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{CONFIG_SEED, NUMBERS_PER_TICKET, PERIOD_SEED, TICKET_SEED, VAULT_SEED};
use crate::error::LotteryError;
use crate::events::TicketPurchased;
use crate::numbers;
use crate::state::{LotteryConfig, Period, PeriodStatus, Ticket};

/// Accounts required to buy a ticket in the current period.
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, LotteryConfig>,

    /// The period currently pointed at by the config.
    #[account(
        mut,
        seeds = [PERIOD_SEED, config.current_period_id.to_le_bytes().as_ref()],
        bump = period.bump,
    )]
    pub period: Account<'info, Period>,

    #[account(
        init,
        payer = buyer,
        space = 8 + Ticket::INIT_SPACE,
        seeds = [TICKET_SEED, config.next_ticket_id.to_le_bytes().as_ref()],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    /// CHECK: data-less PDA holding the pooled lamports; receives the stake.
    #[account(mut, seeds = [VAULT_SEED], bump)]
    pub vault: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Sells one ticket to the caller.
///
/// The payment must equal the configured price exactly, the stake moves into
/// the vault before the record is written, and the ticket snapshots the
/// prize table in force at purchase time.
pub fn process_buy_ticket(
    ctx: Context<BuyTicket>,
    numbers: [u8; NUMBERS_PER_TICKET],
    payment: u64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let period = &mut ctx.accounts.period;

    require!(
        period.status == PeriodStatus::Selling,
        LotteryError::PeriodNotSelling
    );
    require!(
        payment == config.ticket_price,
        LotteryError::IncorrectPayment
    );

    let number_mask = numbers::encode_numbers(&numbers)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        payment,
    )?;

    let ticket_id = config.next_ticket_id;
    let ticket = &mut ctx.accounts.ticket;
    ticket.bump = ctx.bumps.ticket;
    ticket.id = ticket_id;
    ticket.period_id = period.id;
    ticket.owner = ctx.accounts.buyer.key();
    ticket.numbers = numbers;
    ticket.number_mask = number_mask;
    ticket.stake = payment;
    ticket.prize_multipliers = config.prize_multipliers;
    ticket.claimed = false;

    period.ticket_count = period
        .ticket_count
        .checked_add(1)
        .ok_or(LotteryError::MathOverflow)?;
    period.total_sales = period
        .total_sales
        .checked_add(payment)
        .ok_or(LotteryError::MathOverflow)?;
    config.next_ticket_id = ticket_id
        .checked_add(1)
        .ok_or(LotteryError::MathOverflow)?;

    emit!(TicketPurchased {
        ticket_id,
        period_id: period.id,
        buyer: ctx.accounts.buyer.key(),
        numbers,
        stake: payment,
    });
    Ok(())
}
