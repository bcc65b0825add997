use crate::coords::Rect;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Clip rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// draw commands to a rect. Clips are intersected with the current parent, so
/// a widget's inner clips never reach outside its own bounds.
///
/// ```
/// use cliptext_engine::coords::Rect;
/// use cliptext_engine::scene::DrawList;
///
/// let mut draw_list = DrawList::new();
/// draw_list.push_clip(Rect::new(0.0, 0.0, 100.0, 40.0));
/// // ... push commands ...
/// draw_list.pop_clip();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active clip rects. The top is the effective clip, already
    /// intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of clip scopes currently open.
    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip rect from the clip stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a clip region. All draw commands pushed until [`pop_clip`](Self::pop_clip)
    /// are clipped to `rect` intersected with any parent clip.
    ///
    /// An empty intersection (or an empty `rect`) produces a zero-area clip
    /// and the renderer skips those commands.
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let rect = rect.normalized();
        let effective = match self.clip_stack.last() {
            None => rect,
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent clip region started by [`push_clip`](Self::push_clip).
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn line(list: &mut DrawList, z: i32) {
        list.push_line(ZIndex::new(z), Vec2::zero(), Vec2::new(1.0, 0.0), 1.0, Color::BLACK);
    }

    #[test]
    fn items_inherit_current_clip() {
        let mut list = DrawList::new();
        line(&mut list, 0);
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        line(&mut list, 0);
        list.pop_clip();
        line(&mut list, 0);

        let clips: Vec<_> = list.items().iter().map(|i| i.clip_rect).collect();
        assert_eq!(clips, vec![None, Some(Rect::new(0.0, 0.0, 10.0, 10.0)), None]);
    }

    #[test]
    fn nested_clip_is_intersected_with_parent() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 40.0));
        list.push_clip(Rect::new(80.0, -10.0, 50.0, 100.0));
        line(&mut list, 0);
        assert_eq!(list.items()[0].clip_rect, Some(Rect::new(80.0, 0.0, 20.0, 40.0)));
    }

    #[test]
    fn disjoint_nested_clip_is_zero_area() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(50.0, 50.0, 10.0, 10.0));
        line(&mut list, 0);
        let clip = list.items()[0].clip_rect.unwrap();
        assert!(clip.is_empty());
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        line(&mut list, 2);
        line(&mut list, 1);
        line(&mut list, 2);
        let order: Vec<_> = list.iter_in_paint_order().map(|i| (i.key.z.0, i.key.order)).collect();
        assert_eq!(order, vec![(1, 1), (2, 0), (2, 2)]);
    }

    #[test]
    fn clear_resets_clip_stack() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        line(&mut list, 0);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.clip_depth(), 0);
    }
}
