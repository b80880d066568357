use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke_signed, system_instruction};

use crate::constants::{CONFIG_SEED, PERIOD_SEED, TICKET_SEED, VAULT_SEED};
use crate::error::LotteryError;
use crate::events::PrizeClaimed;
use crate::state::{LotteryConfig, Period, Ticket};

/// Accounts required to claim a ticket's prize.
#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct ClaimPrize<'info> {
    #[account(mut)]
    pub claimer: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, LotteryConfig>,

    #[account(
        mut,
        seeds = [TICKET_SEED, ticket_id.to_le_bytes().as_ref()],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,

    /// The period the ticket was purchased under.
    #[account(
        mut,
        seeds = [PERIOD_SEED, ticket.period_id.to_le_bytes().as_ref()],
        bump = period.bump,
    )]
    pub period: Account<'info, Period>,

    /// CHECK: data-less PDA holding the pooled lamports; pays the prize.
    #[account(mut, seeds = [VAULT_SEED], bump)]
    pub vault: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Pays out a winning ticket.
///
/// Check order: owner, unclaimed, result-bearing period, nonzero
/// entitlement, solvency. The claimed flag and the paid-out aggregate are
/// written before the lamports leave the vault, so a reentering claim
/// against the same ticket already observes `claimed = true`.
pub fn process_claim_prize(ctx: Context<ClaimPrize>, ticket_id: u64) -> Result<()> {
    let ticket = &mut ctx.accounts.ticket;
    let period = &mut ctx.accounts.period;

    require!(
        ticket.owner == ctx.accounts.claimer.key(),
        LotteryError::UnauthorizedClaimer
    );
    require!(!ticket.claimed, LotteryError::TicketAlreadyClaimed);
    require!(period.result_ready(), LotteryError::PeriodNotResultReady);

    let amount = ticket.entitlement(period)?;
    require!(amount > 0, LotteryError::TicketHasNoPrize);
    require!(
        ctx.accounts.vault.lamports() >= amount,
        LotteryError::InsufficientPrizePool
    );

    let match_count = ticket.match_count(period);

    // State writes strictly precede the transfer.
    ticket.claimed = true;
    period.paid_out = period
        .paid_out
        .checked_add(amount)
        .ok_or(LotteryError::MathOverflow)?;

    let vault_seeds: &[&[u8]] = &[VAULT_SEED, &[ctx.bumps.vault]];
    invoke_signed(
        &system_instruction::transfer(
            &ctx.accounts.vault.key(),
            &ctx.accounts.claimer.key(),
            amount,
        ),
        &[
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.claimer.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
        &[vault_seeds],
    )?;

    msg!(
        "Ticket {} matched {} numbers, paying {} lamports",
        ticket_id,
        match_count,
        amount
    );

    emit!(PrizeClaimed {
        ticket_id,
        period_id: ticket.period_id,
        claimer: ctx.accounts.claimer.key(),
        match_count,
        amount,
    });
    Ok(())
}
