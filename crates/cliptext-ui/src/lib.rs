//! Cliptext UI: widgets on top of `cliptext-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cliptext_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(include_bytes!("DejaVuSans.ttf")).unwrap();
//!
//! let mut label = ClipColorText::new("Loading", font)
//!     .text_size(32.0)
//!     .clip_color(Color::RED);
//!
//! // Per frame:
//! label.set_progress(animator_value);
//! if label.is_dirty() {
//!     let _ = scene.frame_ref(&mut label, viewport, Placement::default());
//!     renderer.render(&mut target, &mut scene.draw_list, &scene.font_system);
//! }
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type and hand it to
//! [`UiScene::frame_ref`](scene::UiScene::frame_ref).

pub mod animation;
pub mod attrs;
pub mod constraints;
pub mod debug;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build and host a widget.
pub mod prelude {
    pub use crate::animation::{Interpolator, ProgressAnimator, Repeat};
    pub use crate::attrs::{AttrError, ClipColorTextAttrs};
    pub use crate::constraints::{Constraints, Edges, LayoutCtx, MeasureMode, MeasureSpec, SizeHint};
    pub use crate::debug::{debug_overlay_enabled, init_debug_overlay};
    pub use crate::painter::Painter;
    pub use crate::scene::{Placement, UiScene};
    pub use crate::widget::Widget;
    pub use crate::widgets::clip_text::{ClipColorText, TextMetrics, TextStyle};

    // Engine primitives everyone needs.
    pub use cliptext_engine::coords::{Rect, Vec2};
    pub use cliptext_engine::paint::{Color, ColorStop, LinearGradient, Paint, SpreadMode};
    pub use cliptext_engine::text::FontId;
}
