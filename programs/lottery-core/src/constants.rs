/// Seed for the singleton configuration PDA.
pub const CONFIG_SEED: &[u8] = b"lottery_config";

/// Seed prefix for per-period PDAs, combined with the period id.
pub const PERIOD_SEED: &[u8] = b"period";

/// Seed prefix for per-ticket PDAs, combined with the ticket id.
pub const TICKET_SEED: &[u8] = b"ticket";

/// Seed for the data-less vault PDA holding the pooled prize lamports.
pub const VAULT_SEED: &[u8] = b"prize_vault";

/// How many numbers a ticket (and the official draw) carries.
pub const NUMBERS_PER_TICKET: usize = 6;

/// Lowest pickable number, inclusive.
pub const MIN_NUMBER: u8 = 1;

/// Highest pickable number, inclusive.
pub const MAX_NUMBER: u8 = 35;

/// One payout multiplier per possible match count (0..=NUMBERS_PER_TICKET).
pub const PRIZE_TIERS: usize = NUMBERS_PER_TICKET + 1;
