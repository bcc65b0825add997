use cliptext_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
///
/// A frame runs `measure` once, then `paint` with the rect the host placed
/// the widget in, then `clear_dirty`.
///
/// ```rust,ignore
/// use cliptext_ui::prelude::*;
///
/// pub struct Swatch { color: Color, size: f32 }
///
/// impl Widget for Swatch {
///     fn measure(&mut self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
///         constraints.constrain(Vec2::new(self.size, self.size))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_rect(rect, self.color);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic for the same arguments and state. Widgets may
    /// cache layout results here for the following `paint`.
    fn measure(&mut self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    ///
    /// Painting must not change observable state: painting the same state
    /// twice records the same commands.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// `true` when state changed since the last frame and a repaint is due.
    ///
    /// The default never requests a repaint.
    fn is_dirty(&self) -> bool {
        false
    }

    /// Called by the host after a frame has been painted.
    fn clear_dirty(&mut self) {}
}
