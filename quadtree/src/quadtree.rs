use crate::collision_detection;
use crate::error::QuadtreeResult;
use common::shapes::Rectangle;
use fxhash::FxHashSet;
use log::{debug, trace};

mod config;
mod dump;
mod index;
mod types;

pub use config::{Config, IndexExtent, MAX_LEVELS, MAX_OBJECTS};
pub use index::quadrants_for;
pub use types::{validate_rect, Quadrant, QuadrantIndices};

/// Bounded-depth quadtree over axis-aligned rectangles.
///
/// Every node is itself a `QuadTree`: a leaf holding rectangles, or an
/// internal node owning exactly four children and holding nothing itself.
/// Rectangles crossing a quadrant midpoint are stored in every child they
/// touch, so [`retrieve`](Self::retrieve) never misses a candidate but may
/// return the same rectangle more than once.
#[derive(Debug, Clone)]
pub struct QuadTree {
    level: usize,
    bounds: Rectangle,
    objects: Vec<Rectangle>,
    children: Option<Box<[QuadTree; 4]>>,
    config: Config,
}

impl QuadTree {
    pub fn new(bounds: Rectangle, level: usize) -> Self {
        Self::new_with_config(bounds, level, Config::default())
    }

    pub fn new_with_config(bounds: Rectangle, level: usize, config: Config) -> Self {
        QuadTree {
            level,
            bounds,
            objects: Vec::new(),
            children: None,
            config,
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn objects(&self) -> &[Rectangle] {
        &self.objects
    }

    // Empty, or the four quadrants in `Quadrant` order.
    pub fn children(&self) -> &[QuadTree] {
        match &self.children {
            Some(children) => children.as_slice(),
            None => &[],
        }
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadTree> {
        self.children
            .as_ref()
            .map(|children| &children[quadrant.index()])
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Splits this node into four children one level deeper and moves every
    /// held object down into the children it maps to.
    ///
    /// Does nothing if the node is already split or sits at the deepest
    /// permitted level.
    pub fn split(&mut self) {
        if self.children.is_some() || self.level >= self.config.max_levels {
            return;
        }
        let next_level = self.level + 1;
        let bounds = self.bounds;
        let config = self.config;
        self.children = Some(Box::new(Quadrant::ALL.map(|quadrant| {
            QuadTree::new_with_config(quadrant.child_bounds(&bounds), next_level, config)
        })));

        let objects = std::mem::take(&mut self.objects);
        trace!(
            "quadtree split at level {} (bounds: {:?}), redistributing {} objects",
            self.level,
            self.bounds,
            objects.len()
        );
        for object in objects {
            self.insert(object);
        }
    }

    pub fn get_index(&self, rect: &Rectangle) -> QuadrantIndices {
        index::quadrants_for(&self.bounds, rect, self.config.index_extent)
    }

    /// Adds `rect` to the tree.
    ///
    /// Accepts any input: rectangles outside the bounds are filed by the
    /// midpoint comparison alone. Use [`try_insert`](Self::try_insert) to
    /// reject them instead.
    pub fn insert(&mut self, rect: Rectangle) {
        if let Some(children) = self.children.as_deref_mut() {
            let quadrants = index::quadrants_for(&self.bounds, &rect, self.config.index_extent);
            if quadrants.is_empty() {
                // Non-finite input matches no midpoint test, keep it everywhere.
                debug!("quadtree filing {:?} under all quadrants", rect);
                for child in children.iter_mut() {
                    child.insert(rect);
                }
            }
            for quadrant in quadrants {
                children[quadrant.index()].insert(rect);
            }
            return;
        }

        self.objects.push(rect);
        let threshold = self.config.split_threshold();
        if self.objects.len() <= threshold {
            return;
        }
        if self.level < self.config.max_levels {
            self.split();
        } else if self.objects.len() == threshold + 1 {
            debug!(
                "quadtree leaf at max level {} exceeded {} objects (bounds: {:?})",
                self.level, threshold, self.bounds
            );
        }
    }

    pub fn try_insert(&mut self, rect: Rectangle) -> QuadtreeResult<()> {
        validate_rect(&rect, &self.bounds)?;
        self.insert(rect);
        Ok(())
    }

    /// Candidates that may overlap `rect`.
    ///
    /// Returns this node's objects followed by the candidates of every child
    /// `rect` maps to. No overlap filtering and no deduplication.
    pub fn retrieve(&self, rect: &Rectangle) -> Vec<Rectangle> {
        let mut candidates = Vec::new();
        self.retrieve_into(rect, &mut candidates);
        candidates
    }

    pub fn retrieve_into(&self, rect: &Rectangle, candidates: &mut Vec<Rectangle>) {
        candidates.extend_from_slice(&self.objects);
        if let Some(children) = self.children.as_deref() {
            for quadrant in self.get_index(rect) {
                children[quadrant.index()].retrieve_into(rect, candidates);
            }
        }
    }

    /// Like [`retrieve`](Self::retrieve) with geometric duplicates removed,
    /// keeping the first occurrence.
    pub fn retrieve_unique(&self, rect: &Rectangle) -> Vec<Rectangle> {
        let mut candidates = self.retrieve(rect);
        let mut seen = FxHashSet::default();
        candidates.retain(|candidate| seen.insert(candidate.bits()));
        candidates
    }

    pub fn retrieve_overlapping(&self, rect: &Rectangle) -> Vec<Rectangle> {
        let mut candidates = self.retrieve_unique(rect);
        candidates.retain(|candidate| collision_detection::rectangle_rectangle(candidate, rect));
        candidates
    }

    /// Drops every object and child, returning the node to its freshly
    /// constructed state. Bounds, level and config are kept.
    pub fn clear(&mut self) {
        if log::log_enabled!(log::Level::Debug) {
            let discarded = self.count_all_items();
            if discarded > 0 {
                debug!(
                    "quadtree cleared at level {}, discarded {} stored entries",
                    self.level, discarded
                );
            }
        }
        self.clear_subtree();
    }

    fn clear_subtree(&mut self) {
        self.objects.clear();
        if let Some(children) = self.children.as_deref_mut() {
            for child in children.iter_mut() {
                child.clear_subtree();
            }
        }
        self.children = None;
    }

    /// Stored entries in this subtree. A rectangle filed under several
    /// quadrants is counted once per quadrant.
    pub fn count_all_items(&self) -> usize {
        self.objects.len()
            + self
                .children()
                .iter()
                .map(QuadTree::count_all_items)
                .sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(QuadTree::depth)
            .max()
            .unwrap_or(self.level)
    }

    // Pre-order, this node first.
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        bounding_boxes.push(self.bounds);
        for child in self.children() {
            child.all_node_bounding_boxes(bounding_boxes);
        }
    }

    pub fn all_objects(&self, objects: &mut Vec<Rectangle>) {
        objects.extend_from_slice(&self.objects);
        for child in self.children() {
            child.all_objects(objects);
        }
    }
}
