use super::config::IndexExtent;
use super::types::{Quadrant, QuadrantIndices};
use common::shapes::Rectangle;

// Rectangles starting exactly on a midpoint count as east (or south) of it,
// so zero-sized rectangles never map nowhere. Non-finite input does.
#[inline]
pub fn quadrants_for(bounds: &Rectangle, rect: &Rectangle, extent: IndexExtent) -> QuadrantIndices {
    let vertical_midpoint = bounds.x + bounds.width / 2.0;
    let horizontal_midpoint = bounds.y + bounds.height / 2.0;

    let start_is_north = rect.y < horizontal_midpoint;
    let start_is_west = rect.x < vertical_midpoint;
    let (end_is_east, end_is_south) = match extent {
        IndexExtent::Rect => (
            rect.right() > vertical_midpoint || rect.x >= vertical_midpoint,
            rect.bottom() > horizontal_midpoint || rect.y >= horizontal_midpoint,
        ),
        IndexExtent::NodeBounds => (
            rect.x + bounds.width > vertical_midpoint,
            rect.y + bounds.height > horizontal_midpoint,
        ),
    };

    let mut quadrants = QuadrantIndices::new();
    if start_is_north && end_is_east {
        quadrants.push(Quadrant::NorthEast);
    }
    if start_is_west && start_is_north {
        quadrants.push(Quadrant::NorthWest);
    }
    if start_is_west && end_is_south {
        quadrants.push(Quadrant::SouthWest);
    }
    if end_is_east && end_is_south {
        quadrants.push(Quadrant::SouthEast);
    }
    quadrants
}
