use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidRectangleDims { width: f32, height: f32 },
    InvalidRectanglePosition { x: f32, y: f32 },
    RectOutOfBounds {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        bounds_x: f32,
        bounds_y: f32,
        bounds_width: f32,
        bounds_height: f32,
    },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidRectangleDims { width, height } => {
                write!(
                    f,
                    "rectangle width/height must be finite and non-negative (width: {}, height: {})",
                    width, height
                )
            }
            QuadtreeError::InvalidRectanglePosition { x, y } => {
                write!(f, "rectangle origin must be finite (x: {}, y: {})", x, y)
            }
            QuadtreeError::RectOutOfBounds {
                x,
                y,
                width,
                height,
                bounds_x,
                bounds_y,
                bounds_width,
                bounds_height,
            } => {
                write!(
                    f,
                    "rectangle must intersect quadtree bounds (x: {}, y: {}, width: {}, height: {}, bounds_x: {}, bounds_y: {}, bounds_width: {}, bounds_height: {})",
                    x, y, width, height, bounds_x, bounds_y, bounds_width, bounds_height
                )
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
