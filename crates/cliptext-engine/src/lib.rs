//! Cliptext engine crate.
//!
//! Geometry, paint model, fonts, the draw stream and the CPU renderer that
//! turns a draw stream into pixels. Higher layers (widgets, hosts) only talk
//! to the types re-exported here.

pub mod time;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
