pub mod app;
pub mod image_modal;
pub mod photo_collage;
pub mod sidebar;
pub mod slideshow;
pub mod theme_toggle;
