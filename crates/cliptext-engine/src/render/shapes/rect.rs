use crate::render::common::{clip_mask, PixelBounds};
use crate::render::RenderTarget;
use crate::scene::RectCmd;

/// Fills `cmd.rect` inside `clip`.
pub(crate) fn fill_rect(
    target: &mut RenderTarget,
    cmd: &RectCmd,
    paint: &tiny_skia::Paint<'_>,
    clip: PixelBounds,
) {
    let r = cmd.rect.normalized();
    let Some(rect) = tiny_skia::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y) else {
        return;
    };
    let (w, h) = (target.width(), target.height());
    let mask = clip_mask(clip, w, h);
    target
        .pixmap
        .fill_rect(rect, paint, tiny_skia::Transform::identity(), mask.as_ref());
}
