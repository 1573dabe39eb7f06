//! UI state machine (pure).
//!
//! All state transitions and derived values are pure functions testable
//! without a terminal.

pub mod app_state;
pub mod collection;
pub mod jump_bar;
pub mod jump_dispatch;
pub mod list_scroll;
pub mod logs_route;
pub mod menu_handler;
pub mod page_state;
pub mod poster_options;

// Re-export for convenience
pub use app_state::{AppState, IndexFocus, Page};
pub use collection::{sort_series, visible_series};
pub use jump_bar::{bucket_of, build_jump_targets, BucketIndex, JumpBarCache, JumpTarget};
pub use jump_dispatch::{JumpDispatcher, Scrollable};
pub use list_scroll::{ListScroll, ScrollMove};
pub use logs_route::{route, LogsView, LOGS_ROOT};
pub use menu_handler::{apply_command, command_for_action, IndexCommand};
pub use page_state::PageState;
pub use poster_options::{PosterOptions, PosterOptionsModal, PosterSize};
