use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, PERIOD_SEED};
use crate::error::LotteryError;
use crate::events::PeriodSettled;
use crate::state::{LotteryConfig, Period};

/// Accounts required to mark a result-bearing period as settled.
#[derive(Accounts)]
#[instruction(period_id: u64)]
pub struct SettlePeriod<'info> {
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

/// Moves a period from `ResultIn` to `Settled`. Bookkeeping only: claims
/// remain valid, and the settled marker is what allows the next period to
/// open.
pub fn process_settle_period(ctx: Context<SettlePeriod>, period_id: u64) -> Result<()> {
    let period = &mut ctx.accounts.period;
    period.settle()?;

    emit!(PeriodSettled {
        period_id,
        paid_out: period.paid_out,
    });
    Ok(())
}
