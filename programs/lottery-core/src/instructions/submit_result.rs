use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, NUMBERS_PER_TICKET, PERIOD_SEED};
use crate::error::LotteryError;
use crate::events::ResultSubmitted;
use crate::numbers;
use crate::state::{LotteryConfig, Period, PeriodStatus};

/// Accounts required for the oracle to publish the official draw.
#[derive(Accounts)]
#[instruction(period_id: u64)]
pub struct SubmitResult<'info> {
    pub oracle: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = oracle @ LotteryError::NotAuthorized,
    )]
    pub config: Account<'info, LotteryConfig>,

    #[account(
        mut,
        seeds = [PERIOD_SEED, period_id.to_le_bytes().as_ref()],
        bump = period.bump,
    )]
    pub period: Account<'info, Period>,
}

/// Publishes the draw for a closed period and moves it to `ResultIn`. The
/// draw goes through the same codec as ticket numbers; a second submission
/// for the same period fails on the status precondition.
pub fn process_submit_result(
    ctx: Context<SubmitResult>,
    period_id: u64,
    winning_numbers: [u8; NUMBERS_PER_TICKET],
) -> Result<()> {
    let period = &mut ctx.accounts.period;
    require!(
        period.status == PeriodStatus::Closed,
        LotteryError::PeriodNotClosed
    );

    let winning_mask = numbers::encode_numbers(&winning_numbers)?;
    period.record_result(winning_numbers, winning_mask)?;

    msg!("Result in for period {}: {:?}", period_id, winning_numbers);

    emit!(ResultSubmitted {
        period_id,
        winning_numbers,
        winning_mask,
    });
    Ok(())
}
