pub mod admin;
pub mod buy_ticket;
pub mod claim_prize;
pub mod close_period;
pub mod open_period;
pub mod settle_period;
pub mod submit_result;

pub use admin::*;
pub use buy_ticket::*;
pub use claim_prize::*;
pub use close_period::*;
pub use open_period::*;
pub use settle_period::*;
pub use submit_result::*;
