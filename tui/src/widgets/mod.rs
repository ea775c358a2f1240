//! Widgets drawn into compositor layers

pub mod bars;
pub mod controls;
pub mod status;
pub mod text_block;

pub use bars::{BarChart, BarGeometry};
pub use controls::{ControlBar, Hint};
pub use status::{Notice, NoticeLevel, StatusLine, NOTICE_TTL};
pub use text_block::TextBlock;
