//! UIコンポーネント

pub mod header;
pub mod progress_bar;
pub mod sidebar;
pub mod upload_area;
