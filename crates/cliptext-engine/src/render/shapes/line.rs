use crate::render::common::{clip_mask, PixelBounds};
use crate::render::RenderTarget;
use crate::scene::LineCmd;

/// Strokes a single segment inside `clip`.
pub(crate) fn stroke_line(
    target: &mut RenderTarget,
    cmd: &LineCmd,
    paint: &tiny_skia::Paint<'_>,
    clip: PixelBounds,
) {
    let mut pb = tiny_skia::PathBuilder::new();
    pb.move_to(cmd.from.x, cmd.from.y);
    pb.line_to(cmd.to.x, cmd.to.y);
    let Some(path) = pb.finish() else {
        return;
    };
    let stroke = tiny_skia::Stroke { width: cmd.width.max(0.0), ..tiny_skia::Stroke::default() };
    let (w, h) = (target.width(), target.height());
    let mask = clip_mask(clip, w, h);
    target
        .pixmap
        .stroke_path(&path, paint, &stroke, tiny_skia::Transform::identity(), mask.as_ref());
}
