use anchor_lang::prelude::*;

use crate::constants::NUMBERS_PER_TICKET;

/// A new period started selling tickets.
#[event]
pub struct PeriodOpened {
    pub period_id: u64,
}

/// Ticket sales ended for a period.
#[event]
pub struct PeriodClosed {
    pub period_id: u64,
    pub ticket_count: u64,
    pub total_sales: u64,
}

/// The oracle published the official draw.
#[event]
pub struct ResultSubmitted {
    pub period_id: u64,
    pub winning_numbers: [u8; NUMBERS_PER_TICKET],
    pub winning_mask: u64,
}

/// A period was marked settled after its result was in.
#[event]
pub struct PeriodSettled {
    pub period_id: u64,
    pub paid_out: u64,
}

#[event]
pub struct TicketPurchased {
    pub ticket_id: u64,
    pub period_id: u64,
    pub buyer: Pubkey,
    pub numbers: [u8; NUMBERS_PER_TICKET],
    pub stake: u64,
}

#[event]
pub struct PrizeClaimed {
    pub ticket_id: u64,
    pub period_id: u64,
    pub claimer: Pubkey,
    pub match_count: u32,
    pub amount: u64,
}

#[event]
pub struct TicketPriceUpdated {
    pub old_price: u64,
    pub new_price: u64,
}

#[event]
pub struct PrizeMultiplierUpdated {
    pub matches: u8,
    pub multiplier: u64,
}

#[event]
pub struct FundsWithdrawn {
    pub to: Pubkey,
    pub amount: u64,
}
