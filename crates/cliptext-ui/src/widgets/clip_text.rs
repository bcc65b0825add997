use cliptext_engine::coords::{Rect, Vec2};
use cliptext_engine::paint::{Color, ColorStop, LinearGradient, Paint, SpreadMode};
use cliptext_engine::text::{FontId, FontSystem};

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::debug::debug_overlay_enabled;
use crate::painter::Painter;
use crate::widget::Widget;

/// Text used when neither markup nor the caller supplies one.
pub const DEFAULT_TEXT: &str = "Google ?!";
/// Default font size in pixels.
pub const DEFAULT_TEXT_SIZE: f32 = 18.0;

/// The three-color gradient hosts use for the `--gradient` look.
pub const DEFAULT_GRADIENT: [Color; 3] = [Color::RED, Color::BLUE, Color::GREEN];

// ── TextStyle ─────────────────────────────────────────────────────────────

/// Fill and size of one text pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub paint: Paint,
    pub size: f32,
}

impl TextStyle {
    fn solid(color: Color, size: f32) -> Self {
        Self { paint: Paint::Solid(color), size }
    }
}

// ── TextMetrics ───────────────────────────────────────────────────────────

/// Measured text box and its placement inside the widget, in widget-local
/// pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the whole string.
    pub width: f32,
    /// Ascent-to-descent span of the font.
    pub height: f32,
    /// Left edge of the centered text box.
    pub start_x: f32,
    /// Top edge of the centered text box.
    pub start_y: f32,
    /// Font ascent magnitude.
    pub ascent: f32,
    /// Font descent magnitude.
    pub descent: f32,
}

impl TextMetrics {
    /// Measures `text` as a single line. Placement is left at zero until
    /// [`centered_in`](Self::centered_in) runs.
    pub fn measure(fonts: &FontSystem, text: &str, font: FontId, size: f32) -> Self {
        let lm = fonts.line_metrics(font, size);
        let box_size = fonts.measure_text(text, font, size);
        Self {
            width: box_size.x,
            height: lm.height(),
            start_x: 0.0,
            start_y: 0.0,
            ascent: lm.ascent,
            descent: lm.descent,
        }
    }

    /// Centers the text box in a widget of `size`.
    #[must_use]
    pub fn centered_in(self, size: Vec2) -> Self {
        Self {
            start_x: size.x / 2.0 - self.width / 2.0,
            start_y: size.y / 2.0 - self.height / 2.0,
            ..self
        }
    }

    /// Horizontal position of the color boundary. `progress` is clamped.
    #[inline]
    pub fn split_x(&self, progress: f32) -> f32 {
        self.start_x + clamp_progress(progress) * self.width
    }

    /// Baseline of a line vertically centered in a widget `height` tall.
    #[inline]
    pub fn baseline(&self, height: f32) -> f32 {
        height / 2.0 + (self.ascent - self.descent) / 2.0
    }
}

fn clamp_progress(p: f32) -> f32 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

// ── ClipColorText ─────────────────────────────────────────────────────────

/// Single-line text that wipes from a base color to a clip color.
///
/// The string is painted twice. Left of `start_x + progress * width` it is
/// drawn with the clip style (a solid color or a linear gradient across the
/// text box); right of it with the base color. The text box is centered in
/// the widget, so the split tracks the text, not the widget edges.
///
/// # Example
/// ```rust,ignore
/// let mut label = ClipColorText::new("Downloading", font)
///     .text_size(32.0)
///     .text_color(Color::BLACK)
///     .clip_color(Color::BLUE);
/// label.set_progress(0.4);
/// ```
pub struct ClipColorText {
    text: String,
    font: FontId,
    text_color: Color,
    clip_color: Color,
    progress: f32,
    gradient_colors: Option<Vec<Color>>,
    gradient_stops: Option<Vec<f32>>,
    padding: Edges,
    debug_overlay: Option<bool>,
    dirty: bool,
    warned_stops: bool,
    base_style: TextStyle,
    clip_style: TextStyle,
    metrics: Option<TextMetrics>,
}

impl ClipColorText {
    pub fn new(text: impl Into<String>, font: FontId) -> Self {
        Self {
            text: text.into(),
            font,
            text_color: Color::BLACK,
            clip_color: Color::BLUE,
            progress: 0.0,
            gradient_colors: None,
            gradient_stops: None,
            padding: Edges::default(),
            debug_overlay: None,
            dirty: true,
            warned_stops: false,
            base_style: TextStyle::solid(Color::BLACK, DEFAULT_TEXT_SIZE),
            clip_style: TextStyle::solid(Color::BLUE, DEFAULT_TEXT_SIZE),
            metrics: None,
        }
    }

    // ── builders ──────────────────────────────────────────────────────────

    pub fn text_size(mut self, v: f32) -> Self { self.set_text_size(v); self }
    pub fn text_color(mut self, v: Color) -> Self { self.set_text_color(v); self }
    pub fn clip_color(mut self, v: Color) -> Self { self.set_clip_color(v); self }
    pub fn with_progress(mut self, v: f32) -> Self { self.set_progress(v); self }
    pub fn padding(mut self, v: Edges) -> Self { self.set_padding(v); self }
    pub fn gradient_colors(mut self, v: Option<Vec<Color>>) -> Self { self.set_gradient_colors(v); self }
    pub fn gradient_stops(mut self, v: Option<Vec<f32>>) -> Self { self.set_gradient_stops(v); self }

    /// Per-instance override of the process-wide debug overlay flag.
    pub fn debug_overlay(mut self, v: Option<bool>) -> Self { self.debug_overlay = v; self }

    // ── runtime setters ───────────────────────────────────────────────────

    /// Sets the wipe position. Values outside `[0, 1]` are clamped and NaN
    /// becomes `0`. Always marks the widget dirty.
    pub fn set_progress(&mut self, v: f32) {
        self.progress = clamp_progress(v);
        self.dirty = true;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalidate_layout();
    }

    pub fn set_text_size(&mut self, size: f32) {
        let size = size.max(0.0);
        self.base_style.size = size;
        self.clip_style.size = size;
        self.invalidate_layout();
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        self.base_style.paint = Paint::Solid(color);
        self.dirty = true;
    }

    pub fn set_clip_color(&mut self, color: Color) {
        self.clip_color = color;
        self.clip_style.paint = Paint::Solid(color);
        self.dirty = true;
    }

    pub fn set_padding(&mut self, padding: Edges) {
        self.padding = padding;
        self.invalidate_layout();
    }

    /// Replaces the clip color with a gradient across the text box. `None`
    /// (or an empty list) goes back to the solid clip color.
    pub fn set_gradient_colors(&mut self, colors: Option<Vec<Color>>) {
        self.gradient_colors = colors.filter(|c| !c.is_empty());
        self.check_stops();
        self.dirty = true;
    }

    /// Explicit stop positions for the gradient colors. Ignored (colors are
    /// spaced evenly) unless there is exactly one stop per color.
    pub fn set_gradient_stops(&mut self, stops: Option<Vec<f32>>) {
        self.gradient_stops = stops;
        self.check_stops();
        self.dirty = true;
    }

    // ── getters ───────────────────────────────────────────────────────────

    pub fn text(&self) -> &str { &self.text }
    pub fn font(&self) -> FontId { self.font }
    pub fn progress(&self) -> f32 { self.progress }
    pub fn size(&self) -> f32 { self.base_style.size }
    pub fn padding_edges(&self) -> Edges { self.padding }
    pub fn base_style(&self) -> &TextStyle { &self.base_style }
    pub fn clip_style(&self) -> &TextStyle { &self.clip_style }
    pub fn gradient(&self) -> Option<&[Color]> { self.gradient_colors.as_deref() }

    /// Metrics from the last measure pass, placed in the measured size.
    pub fn metrics(&self) -> Option<TextMetrics> { self.metrics }

    /// Color boundary from the last measure pass.
    pub fn split_x(&self) -> Option<f32> {
        self.metrics.map(|m| m.split_x(self.progress))
    }

    /// Whether this instance draws the debug overlay.
    pub fn debug_enabled(&self) -> bool {
        self.debug_overlay.unwrap_or_else(debug_overlay_enabled)
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn invalidate_layout(&mut self) {
        self.metrics = None;
        self.dirty = true;
    }

    /// Warns once per widget about stops that will be ignored.
    fn check_stops(&mut self) {
        if self.warned_stops {
            return;
        }
        if let (Some(colors), Some(stops)) = (&self.gradient_colors, &self.gradient_stops) {
            if colors.len() != stops.len() {
                self.warned_stops = true;
                log::warn!(
                    "ClipColorText: {} gradient stops for {} colors, spacing colors evenly",
                    stops.len(),
                    colors.len()
                );
            }
        }
    }

    /// Paint for the clip pass. A gradient runs from the text box's top-left
    /// to its bottom-right corner, offset by `origin`.
    pub(crate) fn clip_paint(&self, m: &TextMetrics, origin: Vec2) -> Paint {
        let Some(colors) = self.gradient_colors.as_deref() else {
            return self.clip_style.paint.clone();
        };
        if let [only] = colors {
            return Paint::Solid(*only);
        }

        let start = origin + Vec2::new(m.start_x, m.start_y);
        let end = start + Vec2::new(m.width, m.height);
        let gradient = match self.gradient_stops.as_deref() {
            Some(stops) if stops.len() == colors.len() => LinearGradient::new(
                start,
                end,
                stops.iter().zip(colors).map(|(&t, &c)| ColorStop::new(t, c)).collect(),
                SpreadMode::Pad,
            ),
            _ => LinearGradient::evenly_spaced(start, end, colors, SpreadMode::Pad),
        };
        Paint::LinearGradient(gradient)
    }

    fn paint_debug(&self, painter: &mut Painter, rect: Rect, m: &TextMetrics) {
        let o = rect.origin;
        let (w, h) = (rect.size.x, rect.size.y);
        let hline = |y: f32| (o + Vec2::new(0.0, y), o + Vec2::new(w, y));

        // widget center lines
        let (a, b) = hline(h / 2.0);
        painter.line(a, b, 1.0, Color::GRAY);
        painter.line(o + Vec2::new(w / 2.0, 0.0), o + Vec2::new(w / 2.0, h), 1.0, Color::GRAY);

        // measured text box at the widget origin
        painter.stroke_rect(Rect::from_origin_size(o, Vec2::new(m.width, m.height)), 1.0, Color::GRAY);

        // font guides
        for (y, color) in [
            (m.ascent + m.descent, Color::GREEN),
            (m.ascent, Color::RED),
            (m.descent, Color::BLUE),
        ] {
            let (a, b) = hline(y);
            painter.line(a, b, 1.0, color);
        }
        log::debug!(
            "ClipColorText {:?}: ascent {:.2}, descent {:.2}",
            self.text,
            m.ascent,
            m.descent
        );
    }
}

impl Widget for ClipColorText {
    fn measure(&mut self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let m = TextMetrics::measure(ctx.fonts, &self.text, self.font, self.base_style.size);
        let (ws, hs) = constraints.specs();
        let size = Vec2::new(
            ws.resolve(m.width + self.padding.h()),
            hs.resolve(m.height + self.padding.v()),
        );
        self.metrics = Some(m.centered_in(size));

        if self.debug_enabled() {
            let ink = ctx.fonts.ink_bounds(&self.text, self.font, self.base_style.size);
            log::debug!("ClipColorText {:?}: view size ({}, {})", self.text, size.x, size.y);
            log::debug!("ClipColorText {:?}: text size ({:.2}, {:.2})", self.text, m.width, m.height);
            log::debug!("ClipColorText {:?}: ink size ({:.2}, {:.2})", self.text, ink.size.x, ink.size.y);
        }
        size
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let m = self
            .metrics
            .unwrap_or_else(|| {
                TextMetrics::measure(painter.layout_ctx().fonts, &self.text, self.font, self.base_style.size)
            })
            .centered_in(rect.size);

        if self.debug_enabled() {
            self.paint_debug(painter, rect, &m);
        }

        let o = rect.origin;
        let h = rect.size.y;
        let split_x = m.split_x(self.progress);
        let text_origin = o + Vec2::new(m.start_x, m.baseline(h) - m.ascent);
        let size = self.base_style.size;

        painter.push_clip(rect);

        // clip color, left of the split
        painter.push_clip(Rect::from_ltrb(
            o.x + m.start_x.trunc(),
            o.y,
            o.x + split_x.trunc(),
            o.y + h,
        ));
        painter.text(self.text.as_str(), self.font, size, self.clip_paint(&m, o), text_origin);
        painter.pop_clip();

        // base color, right of the split
        painter.push_clip(Rect::from_ltrb(
            o.x + split_x.trunc(),
            o.y,
            o.x + (m.start_x + m.width).trunc(),
            o.y + h,
        ));
        painter.text(self.text.as_str(), self.font, size, self.base_style.paint.clone(), text_origin);
        painter.pop_clip();

        painter.pop_clip();
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{MeasureSpec, SizeHint};
    use crate::scene::{Placement, UiScene};
    use crate::test_support::{fonts, DEJAVU};
    use cliptext_engine::render::{RenderTarget, Renderer};
    use cliptext_engine::scene::{DrawCmd, DrawItem};

    const BLOCKS: &str = "\u{2588}\u{2588}\u{2588}";
    const FILL: Placement = Placement { width: SizeHint::MatchParent, height: SizeHint::MatchParent };

    fn scene() -> (UiScene, FontId) {
        let mut scene = UiScene::new();
        let font = scene.load_font(DEJAVU).unwrap();
        (scene, font)
    }

    fn blocks(font: FontId) -> ClipColorText {
        ClipColorText::new(BLOCKS, font)
            .text_size(40.0)
            .text_color(Color::RED)
            .clip_color(Color::BLUE)
            .debug_overlay(Some(false))
    }

    fn draw(scene: &mut UiScene, w: &mut ClipColorText, viewport: Vec2) -> Vec<DrawItem> {
        scene.frame_ref(w, viewport, FILL).items().to_vec()
    }

    /// Renders into a 200x60 target and samples the centers of the three
    /// blocks on the widget's middle row.
    fn sample(scene: &mut UiScene, w: &mut ClipColorText) -> [[u8; 4]; 3] {
        let viewport = Vec2::new(200.0, 60.0);
        let mut target = RenderTarget::new(200, 60).unwrap();
        let _ = scene.frame_ref(w, viewport, FILL);
        Renderer::new().render(&mut target, &mut scene.draw_list, &scene.font_system);

        let m = w.metrics().unwrap();
        let at = |f: f32| {
            let x = (m.start_x + m.width * f) as u32;
            target.pixel(x, 30).unwrap()
        };
        [at(1.0 / 6.0), at(0.5), at(5.0 / 6.0)]
    }

    fn near(px: [u8; 4], rgb: [u8; 3]) -> bool {
        px[3] > 245 && px.iter().zip(rgb).all(|(&a, b)| a.abs_diff(b) <= 10)
    }

    fn clips(items: &[DrawItem]) -> Vec<Rect> {
        items
            .iter()
            .filter(|i| matches!(i.cmd, DrawCmd::Text(_)))
            .map(|i| i.clip_rect.unwrap())
            .collect()
    }

    // ── measurement ───────────────────────────────────────────────────────

    #[test]
    fn measure_is_deterministic() {
        let (fs, font) = fonts();
        let ctx = LayoutCtx { fonts: &fs };
        let mut w = ClipColorText::new("Google ?!", font).text_size(24.0);
        let a = w.measure(Constraints::unbounded(), &ctx);
        let b = w.measure(Constraints::unbounded(), &ctx);
        assert_eq!(a, b);
    }

    #[test]
    fn exact_spec_ignores_text() {
        let (fs, font) = fonts();
        let ctx = LayoutCtx { fonts: &fs };
        let mut w = ClipColorText::new("a rather long piece of text", font);
        let size = w.measure(Constraints::tight(Vec2::new(200.0, 60.0)), &ctx);
        assert_eq!(size, Vec2::new(200.0, 60.0));
    }

    #[test]
    fn at_most_spec_caps_width() {
        let (fs, font) = fonts();
        let ctx = LayoutCtx { fonts: &fs };
        let mut w = ClipColorText::new("wide enough to pass fifty", font).text_size(30.0);
        let size = w.measure(Constraints::loose(Vec2::new(50.0, 500.0)), &ctx);
        assert_eq!(size.x, 50.0);
        assert_eq!(size.y, (w.metrics().unwrap().height + 0.5).round());
    }

    #[test]
    fn unspecified_spec_rounds_and_adds_padding() {
        let (fs, font) = fonts();
        let ctx = LayoutCtx { fonts: &fs };
        let mut w = ClipColorText::new("Google ?!", font).padding(Edges::symmetric(2.0, 5.0));
        let size = w.measure(Constraints::unbounded(), &ctx);
        let m = w.metrics().unwrap();
        assert_eq!(size.x, MeasureSpec::unspecified().resolve(m.width + 10.0));
        assert_eq!(size.x, (m.width + 10.5).round());
        assert_eq!(size.y, (m.height + 4.5).round());
    }

    #[test]
    fn text_box_is_centered() {
        let m = TextMetrics { width: 80.0, height: 20.0, ..TextMetrics::default() };
        let placed = m.centered_in(Vec2::new(200.0, 60.0));
        assert_eq!(placed.start_x, 60.0);
        assert_eq!(placed.start_y, 20.0);
    }

    #[test]
    fn height_uses_font_metrics() {
        let (fs, font) = fonts();
        let low = TextMetrics::measure(&fs, "ace", font, 20.0);
        let tall = TextMetrics::measure(&fs, "Ågj|", font, 20.0);
        assert_eq!(low.height, tall.height);
        assert_eq!(low.height, low.ascent + low.descent);
    }

    #[test]
    fn text_change_invalidates_metrics() {
        let (fs, font) = fonts();
        let ctx = LayoutCtx { fonts: &fs };
        let mut w = ClipColorText::new("a", font);
        w.measure(Constraints::unbounded(), &ctx);
        w.set_text("abc");
        assert!(w.metrics().is_none());
    }

    // ── progress ──────────────────────────────────────────────────────────

    #[test]
    fn progress_is_clamped() {
        let mut w = ClipColorText::new("x", FontId::default());
        w.set_progress(1.7);
        assert_eq!(w.progress(), 1.0);
        w.set_progress(-0.2);
        assert_eq!(w.progress(), 0.0);
        w.set_progress(f32::NAN);
        assert_eq!(w.progress(), 0.0);
    }

    #[test]
    fn split_stays_inside_text_box() {
        let m = TextMetrics { width: 80.0, start_x: 60.0, ..TextMetrics::default() };
        for p in [-1.0, 0.0, 0.25, 0.5, 1.0, 3.0] {
            let s = m.split_x(p);
            assert!((60.0..=140.0).contains(&s), "progress {p} split {s}");
        }
        assert_eq!(m.split_x(0.5), 100.0);
    }

    #[test]
    fn set_progress_marks_dirty() {
        let (mut scene, font) = scene();
        let mut w = blocks(font);
        assert!(w.is_dirty());
        draw(&mut scene, &mut w, Vec2::new(200.0, 60.0));
        assert!(!w.is_dirty());
        w.set_progress(0.3);
        assert!(w.is_dirty());
        w.set_progress(0.3);
        assert!(w.is_dirty());
    }

    // ── draw list ─────────────────────────────────────────────────────────

    #[test]
    fn paint_is_idempotent() {
        let (mut scene, font) = scene();
        let mut w = blocks(font).with_progress(0.4);
        let a = draw(&mut scene, &mut w, Vec2::new(200.0, 60.0));
        let b = draw(&mut scene, &mut w, Vec2::new(200.0, 60.0));
        assert_eq!(a, b);
    }

    #[test]
    fn passes_meet_at_truncated_split() {
        let (mut scene, font) = scene();
        let mut w = blocks(font).with_progress(0.5);
        let items = draw(&mut scene, &mut w, Vec2::new(200.0, 60.0));
        let m = w.metrics().unwrap();
        let split = m.split_x(0.5).trunc();

        let c = clips(&items);
        assert_eq!(c.len(), 2);
        assert_eq!(c[0], Rect::from_ltrb(m.start_x.trunc(), 0.0, split, 60.0));
        assert_eq!(c[1], Rect::from_ltrb(split, 0.0, (m.start_x + m.width).trunc(), 60.0));
    }

    #[test]
    fn zero_progress_has_empty_clip_pass() {
        let (mut scene, font) = scene();
        let mut w = blocks(font);
        let items = draw(&mut scene, &mut w, Vec2::new(200.0, 60.0));
        assert!(clips(&items)[0].is_empty());
    }

    #[test]
    fn both_passes_share_origin_on_baseline() {
        let (mut scene, font) = scene();
        let mut w = blocks(font).with_progress(0.5);
        let items = draw(&mut scene, &mut w, Vec2::new(200.0, 60.0));
        let m = w.metrics().unwrap();
        let origins: Vec<Vec2> = items
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t.origin),
                _ => None,
            })
            .collect();
        assert_eq!(origins[0], origins[1]);
        assert_eq!(origins[0].x, m.start_x);
        assert!((origins[0].y + m.ascent - m.baseline(60.0)).abs() < 1e-4);
    }

    #[test]
    fn clips_stay_inside_a_widget_narrower_than_its_text() {
        let (mut scene, font) = scene();
        let mut w = ClipColorText::new("Google ?!", font)
            .text_size(40.0)
            .with_progress(0.5)
            .debug_overlay(Some(false));
        let viewport = Vec2::new(200.0, 60.0);
        let narrow = Placement { width: SizeHint::Px(50.0), height: SizeHint::MatchParent };
        let items = scene.frame_ref(&mut w, viewport, narrow).items().to_vec();

        let m = w.metrics().unwrap();
        assert!(m.start_x < 0.0);
        let bounds = Placement::centered(viewport, Vec2::new(50.0, 60.0));
        let text_clips = clips(&items);
        assert_eq!(text_clips.len(), 2);
        for clip in text_clips.iter().filter(|c| !c.is_empty()) {
            assert!(clip.min().x >= bounds.min().x && clip.min().y >= bounds.min().y, "{clip:?}");
            assert!(clip.max().x <= bounds.max().x && clip.max().y <= bounds.max().y, "{clip:?}");
        }
    }

    #[test]
    fn debug_overlay_adds_guides() {
        let (mut scene, font) = scene();
        let mut plain = blocks(font);
        let mut debug = blocks(font).debug_overlay(Some(true));
        let a = draw(&mut scene, &mut plain, Vec2::new(200.0, 60.0));
        let b = draw(&mut scene, &mut debug, Vec2::new(200.0, 60.0));
        let lines = b.iter().filter(|i| matches!(i.cmd, DrawCmd::Line(_))).count();
        assert_eq!(lines, 9);
        assert_eq!(b.len() - a.len(), 9);
    }

    // ── gradient ──────────────────────────────────────────────────────────

    #[test]
    fn three_colors_get_even_stops_across_text_box() {
        let w = ClipColorText::new("x", FontId::default())
            .gradient_colors(Some(vec![Color::RED, Color::GREEN, Color::BLUE]));
        let m = TextMetrics { width: 80.0, height: 20.0, start_x: 60.0, start_y: 20.0, ..Default::default() };
        let Paint::LinearGradient(g) = w.clip_paint(&m, Vec2::new(5.0, 0.0)) else {
            panic!("expected a gradient");
        };
        let ts: Vec<f32> = g.stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.5, 1.0]);
        assert_eq!(g.start, Vec2::new(65.0, 20.0));
        assert_eq!(g.end, Vec2::new(145.0, 40.0));
    }

    #[test]
    fn mismatched_stops_are_ignored() {
        let w = ClipColorText::new("x", FontId::default())
            .gradient_colors(Some(vec![Color::RED, Color::GREEN, Color::BLUE]))
            .gradient_stops(Some(vec![0.0, 0.1]));
        let m = TextMetrics { width: 80.0, height: 20.0, ..Default::default() };
        let Paint::LinearGradient(g) = w.clip_paint(&m, Vec2::zero()) else {
            panic!("expected a gradient");
        };
        assert_eq!(g.stops[1].t, 0.5);
    }

    #[test]
    fn stop_mismatch_warning_is_latched() {
        let mut w = ClipColorText::new("x", FontId::default());
        w.set_gradient_stops(Some(vec![0.0, 1.0]));
        assert!(!w.warned_stops);
        w.set_gradient_colors(Some(vec![Color::RED, Color::GREEN, Color::BLUE]));
        assert!(w.warned_stops);
        w.set_gradient_stops(Some(vec![0.0, 0.3]));
        w.set_gradient_colors(Some(vec![Color::RED]));
        assert!(w.warned_stops);
    }

    #[test]
    fn matching_stops_are_used() {
        let w = ClipColorText::new("x", FontId::default())
            .gradient_colors(Some(vec![Color::RED, Color::BLUE]))
            .gradient_stops(Some(vec![0.2, 0.9]));
        let m = TextMetrics { width: 80.0, height: 20.0, ..Default::default() };
        let Paint::LinearGradient(g) = w.clip_paint(&m, Vec2::zero()) else {
            panic!("expected a gradient");
        };
        assert_eq!(g.stops.iter().map(|s| s.t).collect::<Vec<_>>(), vec![0.2, 0.9]);
    }

    #[test]
    fn empty_gradient_falls_back_to_clip_color() {
        let w = ClipColorText::new("x", FontId::default())
            .clip_color(Color::GREEN)
            .gradient_colors(Some(Vec::new()));
        assert_eq!(w.clip_paint(&TextMetrics::default(), Vec2::zero()), Paint::Solid(Color::GREEN));
    }

    // ── pixels ────────────────────────────────────────────────────────────

    #[test]
    fn zero_progress_is_all_base_color() {
        let (mut scene, font) = scene();
        let mut w = blocks(font);
        let [l, mid, r] = sample(&mut scene, &mut w);
        assert!(near(l, [255, 0, 0]), "{l:?}");
        assert!(near(mid, [255, 0, 0]), "{mid:?}");
        assert!(near(r, [255, 0, 0]), "{r:?}");
    }

    #[test]
    fn full_progress_is_all_clip_color() {
        let (mut scene, font) = scene();
        let mut w = blocks(font).with_progress(1.0);
        let [l, mid, r] = sample(&mut scene, &mut w);
        assert!(near(l, [0, 0, 255]), "{l:?}");
        assert!(near(mid, [0, 0, 255]), "{mid:?}");
        assert!(near(r, [0, 0, 255]), "{r:?}");
    }

    #[test]
    fn half_progress_splits_colors() {
        let (mut scene, font) = scene();
        let mut w = blocks(font).with_progress(0.5);
        let [l, _, r] = sample(&mut scene, &mut w);
        assert!(near(l, [0, 0, 255]), "{l:?}");
        assert!(near(r, [255, 0, 0]), "{r:?}");
    }

    #[test]
    fn identical_state_renders_identical_pixels() {
        let (mut scene, font) = scene();
        let mut w = blocks(font).with_progress(0.37);
        let a = sample(&mut scene, &mut w);
        let b = sample(&mut scene, &mut w);
        assert_eq!(a, b);
    }

    #[test]
    fn gradient_pixels_follow_the_ramp() {
        let (mut scene, font) = scene();
        let mut w = blocks(font)
            .with_progress(1.0)
            .gradient_colors(Some(vec![Color::RED, Color::GREEN, Color::BLUE]));
        let [l, mid, r] = sample(&mut scene, &mut w);
        assert!(l[0] as i32 > l[2] as i32 + 50, "left {l:?}");
        assert!(mid[1] > mid[0] && mid[1] > mid[2], "middle {mid:?}");
        assert!(r[2] as i32 > r[0] as i32 + 50, "right {r:?}");
    }
}
