pub mod price_quote;
pub mod salt_result;
pub mod tick_range;

pub use price_quote::{PriceChange, PriceQuote, QuoteSource};
pub use salt_result::SaltResult;
pub use tick_range::TickRange;
