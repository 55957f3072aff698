//! Page components: animated layers and static content sections.

pub mod cosmos;
pub mod cursor;
pub mod parallax;
pub mod sections;
pub mod theme;
