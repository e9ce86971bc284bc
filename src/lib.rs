pub mod config;
pub mod data;
pub mod error;
pub mod returns;
pub mod series;
pub mod util;

pub use config::CalculatorConfig;
pub use data::{ColumnData, DateValue, PriceFrame, PriceRecord, PriceRecordBuilder};
pub use error::ReturnsError;
pub use returns::ReturnsCalculator;
pub use series::{Series, SeriesSummary};
