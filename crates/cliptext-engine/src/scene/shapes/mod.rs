mod line;
mod rect;
mod text;

pub use line::LineCmd;
pub use rect::RectCmd;
pub use text::TextCmd;
