use cliptext_engine::coords::{Rect, Vec2};
use cliptext_engine::scene::DrawList;
use cliptext_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx, SizeHint};
use crate::painter::Painter;
use crate::widget::Widget;

// ── Placement ─────────────────────────────────────────────────────────────

/// How the root widget is sized inside the viewport. The measured widget is
/// always centered.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Placement {
    pub width: SizeHint,
    pub height: SizeHint,
}

impl Placement {
    /// Constraints for a root widget in a `viewport`-sized window.
    pub fn constraints(self, viewport: Vec2) -> Constraints {
        let (min_w, max_w) = self.width.range(viewport.x);
        let (min_h, max_h) = self.height.range(viewport.y);
        Constraints::between(Vec2::new(min_w, min_h), Vec2::new(max_w, max_h))
    }

    /// Rect of a `size` widget centered in `viewport`.
    pub fn centered(viewport: Vec2, size: Vec2) -> Rect {
        Rect::from_origin_size((viewport - size).half(), size)
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` and the `DrawList` that is populated each frame by
/// [`frame_ref`](Self::frame_ref).
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let font  = ui.load_font(include_bytes!("DejaVuSans.ttf")).unwrap();
///
/// let _ = ui.frame_ref(&mut widget, viewport, Placement::default());
/// renderer.render(&mut target, &mut ui.draw_list, &ui.font_system);
/// ```
pub struct UiScene {
    /// Public so the host can pass `&ui.font_system` to the renderer.
    pub font_system: FontSystem,
    /// Draw list populated by the most recent frame.
    ///
    /// Public so callers can split-borrow it alongside `font_system`.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Measures, places and paints `root`, then clears its dirty flag.
    ///
    /// The widget is borrowed so its state (progress, cached metrics)
    /// persists across frames. The returned list is valid until the next
    /// call.
    #[must_use]
    pub fn frame_ref(
        &mut self,
        root: &mut dyn Widget,
        viewport: Vec2,
        placement: Placement,
    ) -> &mut DrawList {
        self.draw_list.clear();

        // ── measure ───────────────────────────────────────────────────────
        let ctx = LayoutCtx { fonts: &self.font_system };
        let size = root.measure(placement.constraints(viewport), &ctx);
        let rect = Placement::centered(viewport, size);
        log::trace!("frame: viewport {viewport:?}, root at {rect:?}");

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list, &self.font_system);
            painter.push_clip(Rect::from_origin_size(Vec2::zero(), viewport));
            root.paint(&mut painter, rect);
            painter.pop_clip();
        }

        root.clear_dirty();
        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
