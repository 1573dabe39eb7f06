//! Jump navigation dispatch.
//!
//! Forwards a pressed jump-bar entry to whichever renderer is mounted.
//! The renderer is handed to the dispatcher explicitly; when nothing is
//! mounted the dispatch is a no-op.

use crate::state::jump_bar::JumpTarget;
use tracing::debug;

/// A renderer that can bring the first series of a bucket into view.
pub trait Scrollable {
    /// Scroll so the first item whose bucket equals `target` is visible.
    /// Unknown targets leave the viewport unchanged.
    fn scroll_to_first_character(&mut self, target: JumpTarget);
}

/// Forwards jump-bar presses to the mounted renderer.
pub struct JumpDispatcher<'a> {
    renderer: Option<&'a mut dyn Scrollable>,
}

impl<'a> JumpDispatcher<'a> {
    /// Create a dispatcher over the mounted renderer, or `None` when nothing is mounted.
    pub fn new(renderer: Option<&'a mut dyn Scrollable>) -> Self {
        Self { renderer }
    }

    /// Forward `target` unchanged. Returns `false` when nothing is mounted.
    pub fn dispatch(&mut self, target: JumpTarget) -> bool {
        match self.renderer.as_deref_mut() {
            Some(renderer) => {
                debug!(%target, "Dispatching jump");
                renderer.scroll_to_first_character(target);
                true
            }
            None => {
                debug!(%target, "Jump ignored, no renderer mounted");
                false
            }
        }
    }
}
