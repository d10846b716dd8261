use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;
use smallvec::SmallVec;

/// Child slot of an internal node. The discriminant is the position of the
/// child in [`QuadTree::children`](super::QuadTree::children).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Quadrant {
    NorthEast = 0,
    NorthWest = 1,
    SouthWest = 2,
    SouthEast = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Quadrant> {
        Quadrant::ALL.get(index).copied()
    }

    pub fn child_bounds(self, bounds: &Rectangle) -> Rectangle {
        let sub_width = bounds.width / 2.0;
        let sub_height = bounds.height / 2.0;
        let (x, y) = (bounds.x, bounds.y);
        match self {
            Quadrant::NorthEast => Rectangle::new(x + sub_width, y, sub_width, sub_height),
            Quadrant::NorthWest => Rectangle::new(x, y, sub_width, sub_height),
            Quadrant::SouthWest => Rectangle::new(x, y + sub_height, sub_width, sub_height),
            Quadrant::SouthEast => {
                Rectangle::new(x + sub_width, y + sub_height, sub_width, sub_height)
            }
        }
    }
}

/// Quadrants a rectangle maps to, in ascending index order without repeats.
pub type QuadrantIndices = SmallVec<[Quadrant; 4]>;

#[inline(always)]
pub(crate) fn validate_rect_dims(width: f32, height: f32) -> QuadtreeResult<()> {
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        return Err(QuadtreeError::InvalidRectangleDims { width, height });
    }
    Ok(())
}

#[inline(always)]
pub(crate) fn validate_rect_position(x: f32, y: f32) -> QuadtreeResult<()> {
    if !(x.is_finite() && y.is_finite()) {
        return Err(QuadtreeError::InvalidRectanglePosition { x, y });
    }
    Ok(())
}

/// Checks that `rect` is finite, has non-negative dimensions and touches
/// `bounds`.
pub fn validate_rect(rect: &Rectangle, bounds: &Rectangle) -> QuadtreeResult<()> {
    validate_rect_position(rect.x, rect.y)?;
    validate_rect_dims(rect.width, rect.height)?;
    if rect.right() < bounds.left()
        || rect.left() > bounds.right()
        || rect.bottom() < bounds.top()
        || rect.top() > bounds.bottom()
    {
        return Err(QuadtreeError::RectOutOfBounds {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            bounds_x: bounds.x,
            bounds_y: bounds.y,
            bounds_width: bounds.width,
            bounds_height: bounds.height,
        });
    }
    Ok(())
}
