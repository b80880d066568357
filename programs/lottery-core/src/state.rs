use anchor_lang::prelude::*;

use crate::constants::{NUMBERS_PER_TICKET, PRIZE_TIERS};
use crate::error::LotteryError;
use crate::numbers;

/// Lifecycle of one draw cycle. Transitions only ever move forward and
/// never skip a state.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PeriodStatus {
    Selling,
    Closed,
    ResultIn,
    Settled,
}

/// Singleton program configuration and id allocator.
#[account]
#[derive(InitSpace)]
pub struct LotteryConfig {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Operator role: opens/closes/settles periods and edits configuration.
    pub authority: Pubkey,

    /// Oracle role: the only signer allowed to publish draw results.
    pub oracle: Pubkey,

    /// Treasury role: the only signer allowed to withdraw pooled funds.
    pub treasury: Pubkey,

    /// Price (in lamports) of a single ticket for subsequent purchases.
    pub ticket_price: u64,

    /// Payout multiplier per match count (index 0..=6). Unconfigured
    /// entries stay zero, meaning no prize for that tier.
    pub prize_multipliers: [u64; PRIZE_TIERS],

    /// Id of the most recently opened period; 0 before the first open.
    pub current_period_id: u64,

    /// Id assigned to the next purchased ticket. Starts at 1, never reused.
    pub next_ticket_id: u64,
}

/// One draw cycle and its running aggregates.
#[account]
#[derive(InitSpace)]
pub struct Period {
    pub bump: u8,

    /// Monotonically increasing id, assigned at creation, never reused.
    pub id: u64,

    pub status: PeriodStatus,

    /// True once the oracle has published a result for this period.
    pub result_published: bool,

    /// The official draw; valid only when `result_published`.
    pub winning_numbers: [u8; NUMBERS_PER_TICKET],

    /// Bit encoding of `winning_numbers`, computed once at submission.
    pub winning_mask: u64,

    /// Tickets sold under this period. Only grows while `Selling`.
    pub ticket_count: u64,

    /// Lamports taken in from ticket sales. Only grows while `Selling`.
    pub total_sales: u64,

    /// Lamports paid out to claimants so far.
    pub paid_out: u64,
}

impl Period {
    pub fn close(&mut self) -> Result<()> {
        require!(
            self.status == PeriodStatus::Selling,
            LotteryError::PeriodNotSelling
        );
        self.status = PeriodStatus::Closed;
        Ok(())
    }

    /// Stores the published draw. The status precondition also rejects a
    /// second submission for the same period.
    pub fn record_result(
        &mut self,
        winning_numbers: [u8; NUMBERS_PER_TICKET],
        winning_mask: u64,
    ) -> Result<()> {
        require!(
            self.status == PeriodStatus::Closed,
            LotteryError::PeriodNotClosed
        );
        self.winning_numbers = winning_numbers;
        self.winning_mask = winning_mask;
        self.result_published = true;
        self.status = PeriodStatus::ResultIn;
        Ok(())
    }

    /// Reconciliation marker; claims stay valid in `ResultIn` and `Settled`.
    pub fn settle(&mut self) -> Result<()> {
        require!(
            self.status == PeriodStatus::ResultIn,
            LotteryError::PeriodNotResultReady
        );
        self.status = PeriodStatus::Settled;
        Ok(())
    }

    pub fn result_ready(&self) -> bool {
        matches!(self.status, PeriodStatus::ResultIn | PeriodStatus::Settled)
    }
}

/// One purchased combination. Immutable after purchase apart from the
/// monotonic `claimed` flag.
#[account]
#[derive(InitSpace)]
pub struct Ticket {
    pub bump: u8,

    /// Unique id assigned at purchase.
    pub id: u64,

    /// The period this ticket was purchased under.
    pub period_id: u64,

    /// The purchaser; the only identity allowed to claim.
    pub owner: Pubkey,

    /// Validated ascending combination.
    pub numbers: [u8; NUMBERS_PER_TICKET],

    /// Bit encoding of `numbers`.
    pub number_mask: u64,

    /// Lamports paid at purchase.
    pub stake: u64,

    /// Multiplier table in force at purchase time. Later operator edits
    /// apply to subsequent tickets only, so claims settle against this
    /// snapshot.
    pub prize_multipliers: [u64; PRIZE_TIERS],

    /// False until a successful claim; never reset.
    pub claimed: bool,
}

impl Ticket {
    /// Numbers shared with the period's published draw; zero before a
    /// result exists.
    pub fn match_count(&self, period: &Period) -> u32 {
        if !period.result_published {
            return 0;
        }
        numbers::match_count(self.number_mask, period.winning_mask)
    }

    /// Prize owed to this ticket against the period's result. Zero is a
    /// legitimate no-prize outcome; the only error here is multiplication
    /// overflow.
    pub fn entitlement(&self, period: &Period) -> Result<u64> {
        if !period.result_published {
            return Ok(0);
        }
        let matches = numbers::match_count(self.number_mask, period.winning_mask) as usize;
        let multiplier = self.prize_multipliers.get(matches).copied().unwrap_or(0);
        self.stake
            .checked_mul(multiplier)
            .ok_or_else(|| error!(LotteryError::MathOverflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::encode_numbers;

    fn selling_period(id: u64) -> Period {
        Period {
            bump: 255,
            id,
            status: PeriodStatus::Selling,
            result_published: false,
            winning_numbers: [0; NUMBERS_PER_TICKET],
            winning_mask: 0,
            ticket_count: 0,
            total_sales: 0,
            paid_out: 0,
        }
    }

    fn ticket(numbers: [u8; NUMBERS_PER_TICKET], stake: u64, table: [u64; PRIZE_TIERS]) -> Ticket {
        Ticket {
            bump: 255,
            id: 1,
            period_id: 1,
            owner: Pubkey::new_unique(),
            number_mask: encode_numbers(&numbers).unwrap(),
            numbers,
            stake,
            prize_multipliers: table,
            claimed: false,
        }
    }

    #[test]
    fn lifecycle_moves_strictly_forward() {
        let mut period = selling_period(1);
        let draw = [1, 6, 12, 20, 28, 35];
        let mask = encode_numbers(&draw).unwrap();

        // Out-of-order transitions fail without mutating state.
        assert_eq!(
            period.record_result(draw, mask).unwrap_err(),
            LotteryError::PeriodNotClosed.into()
        );
        assert_eq!(
            period.settle().unwrap_err(),
            LotteryError::PeriodNotResultReady.into()
        );
        assert_eq!(period.status, PeriodStatus::Selling);
        assert!(!period.result_published);
        assert!(!period.result_ready());

        period.close().unwrap();
        assert_eq!(period.status, PeriodStatus::Closed);
        assert!(!period.result_ready());
        assert_eq!(
            period.close().unwrap_err(),
            LotteryError::PeriodNotSelling.into()
        );

        period.record_result(draw, mask).unwrap();
        assert_eq!(period.status, PeriodStatus::ResultIn);
        assert!(period.result_published);
        assert!(period.result_ready());

        // Duplicate submission is rejected by the status precondition.
        assert_eq!(
            period.record_result(draw, mask).unwrap_err(),
            LotteryError::PeriodNotClosed.into()
        );

        period.settle().unwrap();
        assert_eq!(period.status, PeriodStatus::Settled);
        assert!(period.result_ready());
        assert_eq!(
            period.settle().unwrap_err(),
            LotteryError::PeriodNotResultReady.into()
        );
    }

    #[test]
    fn full_match_pays_stake_times_multiplier() {
        let mut table = [0u64; PRIZE_TIERS];
        table[6] = 1_000;
        let ticket = ticket([1, 6, 12, 20, 28, 35], 100, table);

        let mut period = selling_period(1);
        period.close().unwrap();
        let draw = [1, 6, 12, 20, 28, 35];
        period
            .record_result(draw, encode_numbers(&draw).unwrap())
            .unwrap();

        assert_eq!(ticket.match_count(&period), 6);
        assert_eq!(ticket.entitlement(&period).unwrap(), 100_000);
    }

    #[test]
    fn closed_period_is_not_claim_eligible() {
        // Sales have ended but the draw has not been published, so the
        // period is not claimable and a ticket is owed nothing yet.
        let mut period = selling_period(1);
        period.close().unwrap();
        assert!(!period.result_ready());

        let mut table = [0u64; PRIZE_TIERS];
        table[6] = 1_000;
        let ticket = ticket([1, 6, 12, 20, 28, 35], 100, table);
        assert_eq!(ticket.match_count(&period), 0);
        assert_eq!(ticket.entitlement(&period).unwrap(), 0);
    }

    #[test]
    fn entitlement_is_zero_before_result() {
        let mut table = [0u64; PRIZE_TIERS];
        table[6] = 1_000;
        let ticket = ticket([1, 6, 12, 20, 28, 35], 100, table);
        let period = selling_period(1);

        assert_eq!(ticket.match_count(&period), 0);
        assert_eq!(ticket.entitlement(&period).unwrap(), 0);
    }

    #[test]
    fn unconfigured_tier_pays_nothing() {
        // Only the jackpot tier is configured; a partial match earns zero.
        let mut table = [0u64; PRIZE_TIERS];
        table[6] = 1_000;
        let ticket = ticket([1, 6, 12, 20, 28, 35], 100, table);

        let mut period = selling_period(1);
        period.close().unwrap();
        let draw = [1, 6, 12, 21, 29, 34];
        period
            .record_result(draw, encode_numbers(&draw).unwrap())
            .unwrap();

        assert_eq!(ticket.match_count(&period), 3);
        assert_eq!(ticket.entitlement(&period).unwrap(), 0);
    }

    #[test]
    fn snapshot_table_drives_entitlement() {
        let mut old_table = [0u64; PRIZE_TIERS];
        old_table[3] = 5;
        let ticket = ticket([1, 6, 12, 20, 28, 35], 200, old_table);

        let mut period = selling_period(1);
        period.close().unwrap();
        let draw = [1, 6, 12, 21, 29, 34];
        period
            .record_result(draw, encode_numbers(&draw).unwrap())
            .unwrap();

        // A later table edit lives in config; this ticket still settles
        // against the table it was bought under.
        assert_eq!(ticket.entitlement(&period).unwrap(), 1_000);
    }

    #[test]
    fn entitlement_overflow_is_an_error() {
        let mut table = [0u64; PRIZE_TIERS];
        table[6] = u64::MAX;
        let ticket = ticket([1, 6, 12, 20, 28, 35], 2, table);

        let mut period = selling_period(1);
        period.close().unwrap();
        let draw = [1, 6, 12, 20, 28, 35];
        period
            .record_result(draw, encode_numbers(&draw).unwrap())
            .unwrap();

        assert_eq!(
            ticket.entitlement(&period).unwrap_err(),
            LotteryError::MathOverflow.into()
        );
    }
}
