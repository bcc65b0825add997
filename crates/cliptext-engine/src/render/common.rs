//! Conversions shared by all shape renderers.

use crate::coords::Rect;
use crate::paint::{Color, Paint, SpreadMode};

// ── color ─────────────────────────────────────────────────────────────────

pub(crate) fn to_skia_color(c: Color) -> tiny_skia::Color {
    let (r, g, b, a) = c.to_straight();
    tiny_skia::Color::from_rgba(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0), a.clamp(0.0, 1.0))
        .unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn to_skia_spread(s: SpreadMode) -> tiny_skia::SpreadMode {
    match s {
        SpreadMode::Pad => tiny_skia::SpreadMode::Pad,
        SpreadMode::Repeat => tiny_skia::SpreadMode::Repeat,
        SpreadMode::Reflect => tiny_skia::SpreadMode::Reflect,
    }
}

// ── clip rect ─────────────────────────────────────────────────────────────

/// Pixel-space clip bounds `(x0, y0, x1, y1)`, half-open.
pub(crate) type PixelBounds = (u32, u32, u32, u32);

/// Converts a logical clip rect to pixel bounds clamped to the target.
///
/// Returns `None` if the clip is zero-area (renderer should skip the command).
/// `clip = None` means "no clip" and returns the full target.
pub(crate) fn clip_to_pixels(clip: Option<Rect>, width: u32, height: u32) -> Option<PixelBounds> {
    let (x0, y0, x1, y1) = match clip {
        None => (0, 0, width, height),
        Some(r) => {
            let r = r.normalized();
            let px = |v: f32, max: u32| (v.round().max(0.0) as u32).min(max);
            (
                px(r.origin.x, width),
                px(r.origin.y, height),
                px(r.origin.x + r.size.x, width),
                px(r.origin.y + r.size.y, height),
            )
        }
    };

    if x1 <= x0 || y1 <= y0 { None } else { Some((x0, y0, x1, y1)) }
}

/// Builds a coverage mask that is opaque inside `bounds` and empty elsewhere.
///
/// Returns `None` when `bounds` already covers the whole target, so callers
/// can skip masking entirely.
pub(crate) fn clip_mask(bounds: PixelBounds, width: u32, height: u32) -> Option<tiny_skia::Mask> {
    let (x0, y0, x1, y1) = bounds;
    if (x0, y0, x1, y1) == (0, 0, width, height) {
        return None;
    }
    let mut mask = tiny_skia::Mask::new(width, height)?;
    let stride = width as usize;
    let data = mask.data_mut();
    for y in y0..y1 {
        let row = y as usize * stride;
        data[row + x0 as usize..row + x1 as usize].fill(255);
    }
    Some(mask)
}

// ── paint resolution ──────────────────────────────────────────────────────

/// Converts a [`Paint`] to a tiny-skia paint with anti-aliasing enabled.
///
/// Linear gradients keep every stop. Stops are clamped to `[0, 1]` and
/// sorted. A gradient the rasterizer cannot build (fewer than two stops or a
/// zero-length axis) falls back to its first stop as a solid fill and logs
/// once through `warned_degenerate`.
pub(crate) fn resolve_paint(
    paint: &Paint,
    warned_degenerate: &mut bool,
) -> tiny_skia::Paint<'static> {
    let mut out = tiny_skia::Paint::default();
    out.anti_alias = true;

    match paint {
        Paint::Solid(c) => out.set_color(to_skia_color(*c)),
        Paint::LinearGradient(g) => {
            let fallback = g.stops.first().map_or(Color::TRANSPARENT, |s| s.color);

            let mut pairs: Vec<(f32, Color)> =
                g.stops.iter().map(|s| (s.t.clamp(0.0, 1.0), s.color)).collect();
            pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
            let stops = pairs
                .into_iter()
                .map(|(t, c)| tiny_skia::GradientStop::new(t, to_skia_color(c)))
                .collect();

            let shader = if g.is_valid() {
                tiny_skia::LinearGradient::new(
                    tiny_skia::Point::from_xy(g.start.x, g.start.y),
                    tiny_skia::Point::from_xy(g.end.x, g.end.y),
                    stops,
                    to_skia_spread(g.spread),
                    tiny_skia::Transform::identity(),
                )
            } else {
                None
            };

            match shader {
                Some(shader) => out.shader = shader,
                None => {
                    if !*warned_degenerate {
                        log::warn!("degenerate gradient ({} stops); painting its first stop", g.stops.len());
                        *warned_degenerate = true;
                    }
                    out.set_color(to_skia_color(fallback));
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_clip_covers_target() {
        assert_eq!(clip_to_pixels(None, 20, 10), Some((0, 0, 20, 10)));
    }

    #[test]
    fn clip_is_clamped_to_target() {
        let clip = Rect::new(-5.0, 2.0, 100.0, 4.0);
        assert_eq!(clip_to_pixels(Some(clip), 20, 10), Some((0, 2, 20, 6)));
    }

    #[test]
    fn zero_area_clip_is_skipped() {
        assert_eq!(clip_to_pixels(Some(Rect::new(5.0, 0.0, 0.0, 10.0)), 20, 10), None);
        assert_eq!(clip_to_pixels(Some(Rect::new(30.0, 0.0, 5.0, 10.0)), 20, 10), None);
    }

    #[test]
    fn full_bounds_need_no_mask() {
        assert!(clip_mask((0, 0, 8, 8), 8, 8).is_none());
    }

    #[test]
    fn mask_covers_only_bounds() {
        let mask = clip_mask((2, 1, 4, 3), 8, 4).unwrap();
        let data = mask.data();
        assert_eq!(data[8 + 2], 255);
        assert_eq!(data[8 + 4], 0);
        assert_eq!(data[2], 0);
        assert_eq!(data[2 * 8 + 3], 255);
    }
}
