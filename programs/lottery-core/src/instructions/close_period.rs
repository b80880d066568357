use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, PERIOD_SEED};
use crate::error::LotteryError;
use crate::events::PeriodClosed;
use crate::state::{LotteryConfig, Period};

/// Accounts required to stop ticket sales for a period.
#[derive(Accounts)]
#[instruction(period_id: u64)]
pub struct ClosePeriod<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ LotteryError::NotAuthorized,
    )]
    pub config: Account<'info, LotteryConfig>,

    #[account(
        mut,
        seeds = [PERIOD_SEED, period_id.to_le_bytes().as_ref()],
        bump = period.bump,
    )]
    pub period: Account<'info, Period>,
}

/// Moves a period from `Selling` to `Closed`; no purchases are accepted
/// afterwards.
pub fn process_close_period(ctx: Context<ClosePeriod>, period_id: u64) -> Result<()> {
    let period = &mut ctx.accounts.period;
    (**period).close()?;

    emit!(PeriodClosed {
        period_id,
        ticket_count: period.ticket_count,
        total_sales: period.total_sales,
    });
    Ok(())
}
