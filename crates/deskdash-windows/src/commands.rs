use deskdash_common::types::{WindowAction, WindowId};

/// A discrete user action reported by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCommand {
    MenuClick(WindowId),
    Action(WindowId, WindowAction),
    Restore(WindowId),
}
