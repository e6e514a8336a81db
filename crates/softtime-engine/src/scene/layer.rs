/// Paint layer of a recorded command; higher layers cover lower ones.
///
/// Surfaces hand out consecutive layers, one per call, so a frame paints in
/// the order its renderer issued the calls.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Layer(pub u32);

impl Layer {
    /// Current layer; `self` moves on to the one above it.
    #[inline]
    pub fn advance(&mut self) -> Layer {
        let current = *self;
        self.0 = self.0.saturating_add(1);
        current
    }
}

/// Sort key: layer first, then recording sequence within the layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub layer: Layer,
    pub seq: u32,
}
