//! CPU rendering subsystem.
//!
//! The [`Renderer`] consumes a `scene` draw stream in paint order and
//! rasterizes it into a [`RenderTarget`] with tiny-skia.
//!
//! Convention:
//! - draw-list geometry is in logical pixels, mapped 1:1 to target pixels
//! - every command is masked by its item's clip rect

mod common;
mod target;

pub mod shapes;

pub use target::{RenderError, RenderTarget};

use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use common::{clip_to_pixels, resolve_paint};
use shapes::text::TextRenderer;

/// Rasterizes draw lists. Owns the glyph cache, so keep one per output.
#[derive(Default)]
pub struct Renderer {
    text: TextRenderer,
    warned_degenerate_gradient: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyph rasters currently cached by the text renderer.
    pub fn cached_glyphs(&self) -> usize {
        self.text.cached_glyphs()
    }

    /// Draws every item of `draw_list` into `target`, back to front.
    ///
    /// Items whose clip rect has no area inside the target are skipped.
    pub fn render(
        &mut self,
        target: &mut RenderTarget,
        draw_list: &mut DrawList,
        font_system: &FontSystem,
    ) {
        let (w, h) = (target.width(), target.height());
        let mut drawn = 0usize;

        for item in draw_list.iter_in_paint_order() {
            let Some(clip) = clip_to_pixels(item.clip_rect, w, h) else {
                continue;
            };

            match &item.cmd {
                DrawCmd::Rect(cmd) => {
                    let paint = resolve_paint(&cmd.paint, &mut self.warned_degenerate_gradient);
                    shapes::rect::fill_rect(target, cmd, &paint, clip);
                }
                DrawCmd::Line(cmd) => {
                    let paint = resolve_paint(&cmd.color.into(), &mut self.warned_degenerate_gradient);
                    shapes::line::stroke_line(target, cmd, &paint, clip);
                }
                DrawCmd::Text(cmd) => {
                    let paint = resolve_paint(&cmd.paint, &mut self.warned_degenerate_gradient);
                    self.text.draw(target, cmd, &paint, clip, font_system);
                }
            }
            drawn += 1;
        }

        log::trace!("rendered {drawn} of {} draw items", draw_list.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::{Color, LinearGradient, Paint, SpreadMode};
    use crate::scene::ZIndex;
    use crate::test_support::DEJAVU;

    const Z: ZIndex = ZIndex::new(0);

    fn render(list: &mut DrawList, fonts: &FontSystem, w: u32, h: u32) -> RenderTarget {
        let mut target = RenderTarget::new(w, h).unwrap();
        Renderer::new().render(&mut target, list, fonts);
        target
    }

    #[test]
    fn rect_respects_clip() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 20.0));
        list.push_solid_rect(Z, Rect::new(0.0, 0.0, 20.0, 20.0), Color::RED);
        list.pop_clip();

        let t = render(&mut list, &FontSystem::new(), 20, 20);
        assert_eq!(t.pixel(5, 10), Some([255, 0, 0, 255]));
        assert_eq!(t.pixel(15, 10), Some([0, 0, 0, 0]));
    }

    #[test]
    fn zero_area_clip_draws_nothing() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(10.0, 0.0, 0.0, 20.0));
        list.push_solid_rect(Z, Rect::new(0.0, 0.0, 20.0, 20.0), Color::RED);
        list.pop_clip();

        let t = render(&mut list, &FontSystem::new(), 20, 20);
        assert!(t.to_rgba8().iter().all(|&b| b == 0));
    }

    #[test]
    fn gradient_rect_ramps_between_stops() {
        let mut list = DrawList::new();
        let g = LinearGradient::evenly_spaced(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            &[Color::RED, Color::BLUE],
            SpreadMode::Pad,
        );
        list.push_rect(Z, Rect::new(0.0, 0.0, 100.0, 4.0), Paint::LinearGradient(g));

        let t = render(&mut list, &FontSystem::new(), 100, 4);
        let left = t.pixel(1, 2).unwrap();
        let right = t.pixel(98, 2).unwrap();
        assert!(left[0] > 240 && left[2] < 15, "left {left:?}");
        assert!(right[2] > 240 && right[0] < 15, "right {right:?}");
    }

    #[test]
    fn later_items_paint_over_earlier_ones() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::new(1), Rect::new(0.0, 0.0, 4.0, 4.0), Color::BLUE);
        list.push_solid_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 4.0, 4.0), Color::RED);

        let t = render(&mut list, &FontSystem::new(), 4, 4);
        assert_eq!(t.pixel(2, 2), Some([0, 0, 255, 255]));
    }

    #[test]
    fn text_fills_glyph_coverage_inside_clip_only() {
        let mut fonts = FontSystem::new();
        let font = fonts.load_font(DEJAVU).unwrap();
        let size = 40.0;
        let advance = fonts.measure_text("\u{2588}", font, size).x;
        let m = fonts.line_metrics(font, size);

        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, (advance / 2.0).trunc(), 60.0));
        list.push_text(Z, "\u{2588}", font, size, Color::GREEN.into(), Vec2::new(0.0, 5.0));
        list.pop_clip();

        let t = render(&mut list, &fonts, 60, 60);
        let mid_y = (5.0 + m.height() / 2.0) as u32;
        assert_eq!(t.pixel((advance * 0.25) as u32, mid_y), Some([0, 255, 0, 255]));
        assert_eq!(t.pixel((advance * 0.75) as u32, mid_y), Some([0, 0, 0, 0]));
    }

    #[test]
    fn glyphs_are_cached_across_passes() {
        let mut fonts = FontSystem::new();
        let font = fonts.load_font(DEJAVU).unwrap();

        let mut list = DrawList::new();
        list.push_text(Z, "aab", font, 20.0, Color::BLACK.into(), Vec2::zero());
        list.push_text(Z, "ba", font, 20.0, Color::BLACK.into(), Vec2::zero());

        let mut target = RenderTarget::new(80, 30).unwrap();
        let mut renderer = Renderer::new();
        renderer.render(&mut target, &mut list, &fonts);
        assert_eq!(renderer.cached_glyphs(), 2);
    }
}
