pub mod currency;
pub mod date;
pub mod time;

pub use currency::format_amount;
pub use date::DateFormat;
pub use time::{format_time, parse_time_or_default};
