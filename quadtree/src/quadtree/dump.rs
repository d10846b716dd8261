use super::QuadTree;
use log::debug;
use std::fmt::Write;

impl QuadTree {
    /// Indented listing of every non-empty node, one line per node:
    /// `===`, the node's width and height, then its stored rectangles.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out);
        out
    }

    pub fn log_dump(&self) {
        for line in self.dump().lines() {
            debug!("{}", line);
        }
    }

    fn dump_into(&self, out: &mut String) {
        if self.objects.is_empty() && self.children.is_none() {
            return;
        }
        for _ in 0..self.level {
            out.push_str("   ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "=== {:.3}:{:.3} ", self.bounds.width, self.bounds.height);
        for object in &self.objects {
            let _ = write!(
                out,
                "{},{},{}x{} / ",
                object.x, object.y, object.width, object.height
            );
        }
        out.push('\n');
        for child in self.children() {
            child.dump_into(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::shapes::Rectangle;

    #[test]
    fn empty_tree_dumps_nothing() {
        let qt = QuadTree::new(Rectangle::new(0.0, 0.0, 640.0, 480.0), 0);
        assert_eq!(qt.dump(), "");
    }

    #[test]
    fn leaf_lists_objects() {
        let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 640.0, 480.0), 0);
        qt.insert(Rectangle::new(1.0, 2.0, 3.0, 4.0));
        qt.insert(Rectangle::new(5.5, 6.0, 7.0, 8.0));
        assert_eq!(qt.dump(), "=== 640.000:480.000 1,2,3x4 / 5.5,6,7x8 / \n");
        qt.log_dump();
    }

    #[test]
    fn split_tree_indents_children() {
        let mut qt = QuadTree::new(Rectangle::new(0.0, 0.0, 640.0, 480.0), 0);
        for _ in 0..11 {
            qt.insert(Rectangle::new(10.0, 10.0, 1.0, 1.0));
        }
        let dump = qt.dump();
        let lines: Vec<&str> = dump.lines().collect();
        // Root plus the north-west leaf at level 1 and its own split below.
        assert_eq!(lines[0], "=== 640.000:480.000 ");
        assert!(lines[1].starts_with("   === 320.000:240.000 "));
        assert!(lines.iter().all(|line| line.trim_start().starts_with("===")));
    }
}
