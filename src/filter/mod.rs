//! Vehicle list filtering
//!
//! - `criteria`: what the user typed into the filter fields
//! - `engine`: the loaded collection and the derived view

pub mod criteria;
pub mod engine;

pub use criteria::{FilterCriteria, IdMatcher, Predicate};
pub use engine::{filter_records, FilterEngine, FilteredView};
