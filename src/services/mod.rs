pub mod errors;
pub mod market_data;
pub mod yahoo;

pub use errors::MarketDataError;
pub use market_data::MarketDataProvider;
pub use yahoo::YahooProvider;
