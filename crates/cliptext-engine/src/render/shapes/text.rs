use std::collections::HashMap;

use fontdue::layout::GlyphRasterConfig;

use crate::render::common::PixelBounds;
use crate::render::RenderTarget;
use crate::scene::TextCmd;
use crate::text::FontSystem;

/// Glyph cache entries beyond this count flush the cache.
const MAX_CACHED_GLYPHS: usize = 4096;

struct CachedGlyph {
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

/// Rasterizer for `DrawCmd::Text`.
///
/// Glyphs are rasterized on first use via fontdue and cached by
/// `GlyphRasterConfig` (font, glyph index, pixel size), so the two passes of
/// a clipped text widget rasterize each glyph once.
///
/// Drawing works in two steps: glyph coverage is accumulated into an 8-bit
/// mask limited to the clip bounds, then the command's paint is filled
/// through that mask. Solid colors and gradients therefore share one path.
#[derive(Default)]
pub struct TextRenderer {
    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct glyph rasters currently cached.
    pub fn cached_glyphs(&self) -> usize {
        self.glyph_cache.len()
    }

    pub(crate) fn draw(
        &mut self,
        target: &mut RenderTarget,
        cmd: &TextCmd,
        paint: &tiny_skia::Paint<'_>,
        clip: PixelBounds,
        font_system: &FontSystem,
    ) {
        let Some(font) = font_system.get(cmd.font) else {
            log::warn!("TextRenderer: unknown FontId {:?}, skipping", cmd.font);
            return;
        };

        if self.glyph_cache.len() > MAX_CACHED_GLYPHS {
            log::debug!("TextRenderer: glyph cache over {MAX_CACHED_GLYPHS} entries, flushing");
            self.glyph_cache.clear();
        }

        let (tw, th) = (target.width(), target.height());
        let Some(mut mask) = tiny_skia::Mask::new(tw, th) else {
            return;
        };
        let stride = tw as usize;
        let (cx0, cy0, cx1, cy1) = clip;

        let layout = FontSystem::layout_line(font, &cmd.text, cmd.size, cmd.origin);
        let mut covered = false;

        for g in layout.glyphs() {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }

            let glyph = self.glyph_cache.entry(g.key).or_insert_with(|| {
                let (metrics, coverage) = font.rasterize_config(g.key);
                CachedGlyph { width: metrics.width, height: metrics.height, coverage }
            });

            let gx = g.x.round() as i64;
            let gy = g.y.round() as i64;
            let data = mask.data_mut();

            for row in 0..glyph.height {
                let y = gy + row as i64;
                if y < cy0 as i64 || y >= cy1 as i64 {
                    continue;
                }
                for col in 0..glyph.width {
                    let x = gx + col as i64;
                    if x < cx0 as i64 || x >= cx1 as i64 {
                        continue;
                    }
                    let cov = glyph.coverage[row * glyph.width + col];
                    if cov == 0 {
                        continue;
                    }
                    let dst = &mut data[y as usize * stride + x as usize];
                    *dst = dst.saturating_add(cov);
                    covered = true;
                }
            }
        }

        if !covered {
            return;
        }

        let Some(full) = tiny_skia::Rect::from_xywh(0.0, 0.0, tw as f32, th as f32) else {
            return;
        };
        target
            .pixmap
            .fill_rect(full, paint, tiny_skia::Transform::identity(), Some(&mask));
    }
}
