//! Shape renderers.

pub mod line;
pub mod rect;
pub mod text;
