pub mod amount;
pub mod date;

pub use amount::parse_amount_minor;
pub use date::parse_date;
