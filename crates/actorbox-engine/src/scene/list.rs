use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
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

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
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

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;

    fn red() -> Color { Color::from_premul(1.0, 0.0, 0.0, 1.0) }
    fn blue() -> Color { Color::from_premul(0.0, 0.0, 1.0, 1.0) }

    fn colors_in_paint_order(list: &mut DrawList) -> Vec<Color> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Rect(cmd) => cmd.color,
            })
            .collect()
    }

    #[test]
    fn equal_z_paints_in_insertion_order() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 10.0, 10.0), red());
        list.push_solid_rect(ZIndex::new(0), Rect::new(5.0, 5.0, 10.0, 10.0), blue());
        assert_eq!(colors_in_paint_order(&mut list), vec![red(), blue()]);
    }

    #[test]
    fn lower_z_paints_first_regardless_of_insertion() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::new(1), Rect::new(0.0, 0.0, 10.0, 10.0), red());
        list.push_solid_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 10.0, 10.0), blue());
        assert_eq!(colors_in_paint_order(&mut list), vec![blue(), red()]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 1.0, 1.0), red());
        list.clear();
        assert!(list.is_empty());

        list.push_solid_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 1.0, 1.0), blue());
        assert_eq!(list.items()[0].key.order, 0);
        assert_eq!(colors_in_paint_order(&mut list), vec![blue()]);
    }
}
