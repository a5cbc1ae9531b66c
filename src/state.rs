// State module - sidebar and zoom values owned by the layout controller

mod persistence;
mod sidebar;
mod zoom;

#[cfg(test)]
pub use persistence::MemoryStore;
pub use persistence::{FileStore, KeyValueStore, ZOOM_LEVEL_KEY};
pub(crate) use sidebar::clamp_width;
pub use sidebar::{ResizeSession, SidebarState};
pub use zoom::ZoomState;
