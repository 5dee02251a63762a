//! Collections module - dashboard aggregations over recorded payments.

mod collections_summary;


pub use collections_summary::{area_totals, daily_totals, CollectionSummary, DailyTotal};
