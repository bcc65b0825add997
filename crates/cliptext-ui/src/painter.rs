use cliptext_engine::coords::{Rect, Vec2};
use cliptext_engine::paint::{Color, Paint};
use cliptext_engine::scene::{DrawList, ZIndex};
use cliptext_engine::text::{FontId, FontSystem};

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a widget-level API. Every call gets the
/// next z-index, so later calls paint on top of earlier ones.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    z: i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem) -> Self {
        Self { draw_list, font_system, z: 0 }
    }

    /// Returns a [`LayoutCtx`] borrowing this painter's font system.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'_> {
        LayoutCtx { fonts: self.font_system }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint.into());
    }

    /// Straight line segment.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, width, color);
    }

    /// Rectangle outline built from four lines.
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        let (min, max) = (rect.min(), rect.max());
        self.line(min, Vec2::new(max.x, min.y), width, color);
        self.line(Vec2::new(max.x, min.y), max, width, color);
        self.line(max, Vec2::new(min.x, max.y), width, color);
        self.line(Vec2::new(min.x, max.y), min, width, color);
    }

    /// Single line of text whose line box has its top-left at `origin`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        paint: impl Into<Paint>,
        origin: Vec2,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, paint.into(), origin);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a clip region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent clip region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
