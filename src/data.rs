pub mod date_index;
pub mod frame;
pub mod price_record;

pub use date_index::DateIndex;
pub use frame::{Column, ColumnData, PriceFrame};
pub use price_record::{DateValue, PriceRecord, PriceRecordBuilder};
