use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::{Rect, Vec2};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// The default handle names the first font loaded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Vertical font metrics at one pixel size.
///
/// Both values are positive distances from the baseline. They describe the
/// font's design extents, not the ink bounds of any particular string, so
/// two strings at the same size always report the same metrics.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineMetrics {
    /// Distance from the baseline up to the font's ascender line.
    pub ascent: f32,
    /// Distance from the baseline down to the font's descender line.
    pub descent: f32,
}

impl LineMetrics {
    /// Ascent-to-descent span.
    #[inline]
    pub fn height(self) -> f32 {
        self.ascent + self.descent
    }

    /// Stand-in used when a font carries no horizontal metrics table.
    #[inline]
    pub fn approximate(size: f32) -> Self {
        Self { ascent: size * 0.8, descent: size * 0.2 }
    }
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the scene and
/// lent to the renderer each frame so glyphs can be rasterized on demand.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} glyphs)", id, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    /// Returns a reference to the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Vertical metrics of `id` at `size` pixels.
    ///
    /// Unknown fonts and fonts without a horizontal metrics table fall back
    /// to [`LineMetrics::approximate`].
    #[must_use]
    pub fn line_metrics(&self, id: FontId, size: f32) -> LineMetrics {
        self.get(id)
            .and_then(|font| font.horizontal_line_metrics(size))
            .map(|m| LineMetrics { ascent: m.ascent, descent: -m.descent })
            .unwrap_or_else(|| LineMetrics::approximate(size))
    }

    /// Measures `text` as a single unwrapped line.
    ///
    /// `x` is the advance width of the whole string (pen position after the
    /// last glyph, trailing spaces included). `y` is the font's
    /// ascent-to-descent span from [`line_metrics`](Self::line_metrics),
    /// independent of which glyphs the string contains.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let height = self.line_metrics(id, size).height();

        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, height);
        };

        let layout = Self::layout_line(font, text, size, Vec2::zero());

        // Pen position *after* each glyph (= g.x - xmin + advance_width), not
        // the bitmap right edge, so trailing whitespace and side bearings count.
        let w = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        Vec2::new(w, height)
    }

    /// Tight bounding box of the rasterized glyphs, relative to the line's
    /// top-left corner.
    ///
    /// This is usually narrower and shorter than [`measure_text`](Self::measure_text);
    /// it is reported for diagnostics only and never drives layout.
    #[must_use]
    pub fn ink_bounds(&self, text: &str, id: FontId, size: f32) -> Rect {
        let Some(font) = self.get(id) else {
            return Rect::default();
        };

        let layout = Self::layout_line(font, text, size, Vec2::zero());
        let mut bounds: Option<(f32, f32, f32, f32)> = None;
        for g in layout.glyphs().iter().filter(|g| g.width > 0 && g.height > 0) {
            let (l, t, r, b) = (g.x, g.y, g.x + g.width as f32, g.y + g.height as f32);
            bounds = Some(match bounds {
                None => (l, t, r, b),
                Some((l0, t0, r0, b0)) => (l0.min(l), t0.min(t), r0.max(r), b0.max(b)),
            });
        }
        bounds.map_or(Rect::default(), |(l, t, r, b)| Rect::from_ltrb(l, t, r, b))
    }

    /// Lays `text` out as one line whose top-left corner is `origin`.
    ///
    /// The baseline lands at exactly `origin.y + ascent`. fontdue rounds the
    /// ascent up when it places the first line, so the layout is shifted up
    /// by that fraction.
    pub(crate) fn layout_line(
        font: &fontdue::Font,
        text: &str,
        size: f32,
        origin: Vec2,
    ) -> Layout<()> {
        let snap = font
            .horizontal_line_metrics(size)
            .map_or(0.0, |m| m.ascent.ceil() - m.ascent);
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: origin.x,
            y: origin.y - snap,
            ..LayoutSettings::default()
        });
        layout.append(&[font], &TextStyle::new(text, size, 0));
        layout
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
