//! Domain model types (pure).
//!
//! All types in this module are pure data. The data layer owns the
//! series collection; UI code only borrows it for the duration of a
//! render cycle.

pub mod error;
pub mod filter;
pub mod identifiers;
pub mod key_action;
pub mod series;
pub mod sort;
pub mod stats;
pub mod view_mode;

// Re-export for convenience
pub use error::{AppError, InputError};
pub use filter::{FilterValue, SeriesFilter};
pub use identifiers::SeriesId;
pub use key_action::KeyAction;
pub use series::{Series, SeriesStatus};
pub use sort::{SortDirection, SortKey, SortSpec, SORT_TITLE_KEY};
pub use stats::LibraryStats;
pub use view_mode::ViewMode;
