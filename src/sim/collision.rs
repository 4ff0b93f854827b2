//! Axis-aligned collision detection
//!
//! The only physics the game has: rectangle overlap between the player ship
//! and each obstacle. The tick scans obstacles in spawn order and the first
//! hit is authoritative.

use super::state::Rect;

/// Standard separating-axis test on two axis-aligned rectangles.
///
/// Touching edges do not count as overlap (strict inequalities), so an
/// obstacle resting exactly on the ship's top edge is still a miss.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects() {
        let player = Rect::new(280.0, 740.0, 40.0, 40.0);
        let obstacle = Rect::new(280.0, 760.0, 30.0, 30.0);
        assert!(overlaps(&player, &obstacle));
    }

    #[test]
    fn test_separated_horizontally() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let b = Rect::new(100.0, 0.0, 30.0, 30.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_separated_vertically() {
        let a = Rect::new(0.0, 200.0, 40.0, 40.0);
        let b = Rect::new(0.0, 0.0, 30.0, 30.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        // b starts exactly where a ends
        let b = Rect::new(40.0, 0.0, 30.0, 30.0);
        assert!(!overlaps(&a, &b));
        let c = Rect::new(0.0, 40.0, 30.0, 30.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(30.0, 30.0, 10.0, 10.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_symmetry() {
        let a = Rect::new(5.0, 7.0, 40.0, 40.0);
        let b = Rect::new(20.0, 30.0, 30.0, 30.0);
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a));

        let far = Rect::new(500.0, 500.0, 30.0, 30.0);
        assert_eq!(overlaps(&a, &far), overlaps(&far, &a));
    }
}
