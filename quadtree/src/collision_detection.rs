use common::shapes::Rectangle;

// Strict overlap, rectangles sharing only an edge do not collide.
pub fn rectangle_rectangle(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
