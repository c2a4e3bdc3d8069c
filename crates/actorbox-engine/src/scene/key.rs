use super::ZIndex;

/// Stable sort key for draw items.
///
/// Field order is the ordering: `z` ascending (back-to-front), then `order`
/// (insertion index) for equal z.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    /// Z-layer. Lower values are drawn first (further back).
    pub z: ZIndex,
    /// Insertion index within the draw list.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_dominates_order() {
        assert!(SortKey::new(ZIndex(0), 9) < SortKey::new(ZIndex(1), 0));
        assert!(SortKey::new(ZIndex(2), 0) < SortKey::new(ZIndex(2), 1));
    }

    #[test]
    fn above_saturates() {
        assert_eq!(ZIndex::new(3).above(), ZIndex(4));
        assert_eq!(ZIndex::new(i32::MAX).above(), ZIndex(i32::MAX));
    }
}
