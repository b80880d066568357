use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, NUMBERS_PER_TICKET, PERIOD_SEED};
use crate::error::LotteryError;
use crate::events::PeriodOpened;
use crate::state::{LotteryConfig, Period, PeriodStatus};

/// Accounts required to open the next selling period.
#[derive(Accounts)]
#[instruction(period_id: u64)]
pub struct OpenPeriod<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ LotteryError::NotAuthorized,
    )]
    pub config: Account<'info, LotteryConfig>,

    /// The most recent period, if any ever opened. Must be settled before a
    /// new one may start.
    #[account(
        seeds = [PERIOD_SEED, config.current_period_id.to_le_bytes().as_ref()],
        bump = previous_period.bump,
    )]
    pub previous_period: Option<Account<'info, Period>>,

    #[account(
        init,
        payer = authority,
        space = 8 + Period::INIT_SPACE,
        seeds = [PERIOD_SEED, period_id.to_le_bytes().as_ref()],
        bump
    )]
    pub period: Account<'info, Period>,

    pub system_program: Program<'info, System>,
}

/// Opens a fresh period with zeroed aggregates. The caller passes the id it
/// expects to open; anything other than the next sequential id is rejected,
/// which keeps period ids dense and never reused.
pub fn process_open_period(ctx: Context<OpenPeriod>, period_id: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let next_id = config
        .current_period_id
        .checked_add(1)
        .ok_or(LotteryError::MathOverflow)?;
    require!(period_id == next_id, LotteryError::InvalidPeriodId);

    if config.current_period_id > 0 {
        let previous = ctx
            .accounts
            .previous_period
            .as_ref()
            .ok_or(LotteryError::PeriodNotSettled)?;
        require!(
            previous.status == PeriodStatus::Settled,
            LotteryError::PeriodNotSettled
        );
    }

    let period = &mut ctx.accounts.period;
    period.bump = ctx.bumps.period;
    period.id = period_id;
    period.status = PeriodStatus::Selling;
    period.result_published = false;
    period.winning_numbers = [0; NUMBERS_PER_TICKET];
    period.winning_mask = 0;
    period.ticket_count = 0;
    period.total_sales = 0;
    period.paid_out = 0;

    config.current_period_id = period_id;

    emit!(PeriodOpened { period_id });
    Ok(())
}
