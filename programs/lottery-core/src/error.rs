use anchor_lang::prelude::*;

/// Errors surfaced by the settlement instructions. Every failure is a
/// deterministic function of current state and input; replaying the same
/// operation against unchanged state fails identically.
#[error_code]
pub enum LotteryError {
    #[msg("Signer does not hold the required role")]
    NotAuthorized,

    #[msg("Period is not accepting ticket purchases")]
    PeriodNotSelling,

    #[msg("Period is not closed; result cannot be submitted")]
    PeriodNotClosed,

    #[msg("Period has no published result yet")]
    PeriodNotResultReady,

    #[msg("Previous period has not been settled")]
    PeriodNotSettled,

    #[msg("Expected the next sequential period id")]
    InvalidPeriodId,

    #[msg("Chosen number is outside the valid range")]
    NumberOutOfRange,

    #[msg("Chosen numbers must be strictly ascending")]
    NumbersNotAscending,

    #[msg("Payment does not equal the ticket price")]
    IncorrectPayment,

    #[msg("Signer is not the recorded ticket owner")]
    UnauthorizedClaimer,

    #[msg("Ticket prize has already been claimed")]
    TicketAlreadyClaimed,

    #[msg("Ticket did not win a prize")]
    TicketHasNoPrize,

    #[msg("Pooled balance cannot cover this payout")]
    InsufficientPrizePool,

    #[msg("Match count exceeds the numbers on a ticket")]
    InvalidMatchCount,

    #[msg("Arithmetic overflow during settlement math")]
    MathOverflow,
}
