//! Cache module - Frame data model, ordered frame store, and temporal
//! queries.

mod frame;
mod query;
mod store;

pub use frame::*;
pub use query::*;
pub use store::*;
