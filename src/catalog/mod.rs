pub mod entry;
pub mod filter;
pub mod store;
pub mod tags;

pub use entry::{Entry, StatsVector};
pub use filter::{filter, FilterOutcome, Query};
pub use store::Catalog;
pub use tags::{Tag, TagFilter};
