use crate::coords::Viewport;

use super::{DrawCmd, SortKey, Layer};

/// One recorded command with its sort key and the blur it was recorded under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Gaussian blur radius in logical pixels. `None` = unfiltered.
    pub blur: Option<f32>,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Filters
///
/// [`set_blur`](Self::set_blur) / [`clear_blur`](Self::clear_blur) bracket a
/// run of commands; every command pushed in between carries the blur radius.
///
/// ```ignore
/// list.set_blur(2.0);
/// // ... push gradient circles ...
/// list.clear_blur();
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    viewport: Viewport,
    items: Vec<DrawItem>,
    next_seq: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    blur: Option<f32>,
    next_layer: Layer,
}

impl DrawList {
    #[inline]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, ..Self::default() }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Clears recorded items and the filter state. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_seq = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.blur = None;
        self.next_layer = Layer::default();
    }

    /// Layer for the next command recorded through [`DrawSurface`](crate::surface::DrawSurface).
    #[inline]
    pub(crate) fn next_layer(&mut self) -> Layer {
        self.next_layer.advance()
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

    /// Pushes a draw command on `layer`.
    ///
    /// The item inherits the currently active blur.
    #[inline]
    pub fn push(&mut self, layer: Layer, cmd: DrawCmd) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey { layer, seq },
            cmd,
            blur: self.blur,
        });

        self.sorted_dirty = true;
    }

    /// Applies a Gaussian blur to every command pushed until [`clear_blur`](Self::clear_blur).
    ///
    /// A radius of zero (or below) is recorded as "no blur".
    #[inline]
    pub fn set_blur(&mut self, radius: f32) {
        self.blur = (radius > 0.0).then_some(radius);
    }

    #[inline]
    pub fn clear_blur(&mut self) {
        self.blur = None;
    }

    #[inline]
    pub fn active_blur(&self) -> Option<f32> {
        self.blur
    }

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::{Color, Paint};

    #[test]
    fn blur_is_captured_per_item() {
        let mut list = DrawList::new(Viewport::square(10.0));
        list.push_circle(Layer(0), Vec2::default(), 1.0, Paint::Solid(Color::WHITE));
        list.set_blur(3.0);
        list.push_circle(Layer(0), Vec2::default(), 1.0, Paint::Solid(Color::WHITE));
        list.clear_blur();
        list.push_circle(Layer(0), Vec2::default(), 1.0, Paint::Solid(Color::WHITE));

        let blurs: Vec<_> = list.items().iter().map(|i| i.blur).collect();
        assert_eq!(blurs, vec![None, Some(3.0), None]);
    }

    #[test]
    fn zero_blur_means_unfiltered() {
        let mut list = DrawList::new(Viewport::square(10.0));
        list.set_blur(0.0);
        assert_eq!(list.active_blur(), None);
    }

    #[test]
    fn paint_order_sorts_by_layer_then_sequence() {
        let mut list = DrawList::new(Viewport::square(10.0));
        list.push_solid_rect(Layer(2), Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.push_circle(Layer(1), Vec2::default(), 1.0, Paint::Solid(Color::WHITE));
        list.push_circle(Layer(1), Vec2::default(), 2.0, Paint::Solid(Color::WHITE));

        let order: Vec<_> = list.iter_in_paint_order().map(|i| i.key.seq).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn clear_resets_items_and_filter() {
        let mut list = DrawList::new(Viewport::square(10.0));
        list.set_blur(1.0);
        list.push_circle(Layer(0), Vec2::default(), 1.0, Paint::Solid(Color::WHITE));
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.active_blur(), None);
    }
}
