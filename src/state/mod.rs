pub mod sidebar;
pub mod slideshow;
pub mod theme;

pub use sidebar::{SidebarAction, SidebarState};
pub use slideshow::{SlideAction, Slideshow};
pub use theme::Theme;
