/// Objects a leaf tolerates before it attempts to split.
pub const MAX_OBJECTS: usize = 10;
/// Deepest level at which a node may still split. Nodes at this level never do.
pub const MAX_LEVELS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexExtent {
    #[default]
    Rect,
    /// `rect.x + bounds.width` and `rect.y + bounds.height`, where `bounds` is
    /// the node being indexed. Kept for trees that must place rectangles
    /// exactly as older builds did.
    NodeBounds,
}

#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub max_objects: usize,
    pub max_levels: usize,
    pub index_extent: IndexExtent,
}

impl Config {
    // A node always holds at least one object before splitting.
    pub(crate) fn split_threshold(&self) -> usize {
        self.max_objects.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_objects: MAX_OBJECTS,
            max_levels: MAX_LEVELS,
            index_extent: IndexExtent::Rect,
        }
    }
}
