//! Scalar helpers and axis-aligned rectangle overlap

use glam::Vec2;

/// Absolute value: `-a` when `a < 0`, otherwise `a` unchanged
pub fn abs(a: f32) -> f32 {
    if a < 0.0 {
        -a
    } else {
        a
    }
}

/// `-1.0` when `a < 0`, otherwise `1.0` (zero counts as positive)
pub fn sign(a: f32) -> f32 {
    if a < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Overlap test for two rectangles given as top-left corner plus size.
///
/// Compares the distance between the centers against the half-extents of
/// the Minkowski sum on each axis. Touching edges do not count as overlap.
#[allow(clippy::too_many_arguments)]
pub fn rect_overlap(
    ax: f32,
    ay: f32,
    aw: f32,
    ah: f32,
    bx: f32,
    by: f32,
    bw: f32,
    bh: f32,
) -> bool {
    let (acx, acy) = (ax + aw / 2.0, ay + ah / 2.0);
    let (bcx, bcy) = (bx + bw / 2.0, by + bh / 2.0);

    let dx = abs(acx - bcx) - (aw + bw) / 2.0;
    let dy = abs(acy - bcy) - (ah + bh) / 2.0;

    dx < 0.0 && dy < 0.0
}

/// Axis-aligned bounding box, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        rect_overlap(
            self.pos.x,
            self.pos.y,
            self.size.x,
            self.size.y,
            other.pos.x,
            other.pos.y,
            other.size.x,
            other.size.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs() {
        assert_eq!(abs(-2.5), 2.5);
        assert_eq!(abs(2.5), 2.5);
        assert_eq!(abs(0.0), 0.0);
    }

    #[test]
    fn test_sign_treats_zero_as_positive() {
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 1.0);
        assert_eq!(sign(-0.0), 1.0);
        assert_eq!(sign(42.0), 1.0);
    }

    #[test]
    fn test_overlapping_rects() {
        assert!(rect_overlap(0.0, 0.0, 2.0, 2.0, 1.0, 1.0, 2.0, 2.0));
        // Fully contained
        assert!(rect_overlap(0.0, 0.0, 10.0, 10.0, 4.0, 4.0, 0.5, 0.5));
    }

    #[test]
    fn test_separated_rects() {
        assert!(!rect_overlap(0.0, 0.0, 1.0, 1.0, 5.0, 0.0, 1.0, 1.0));
        assert!(!rect_overlap(0.0, 0.0, 1.0, 1.0, 0.0, 5.0, 1.0, 1.0));
        // Overlapping on one axis only
        assert!(!rect_overlap(0.0, 0.0, 1.0, 10.0, 3.0, 2.0, 1.0, 1.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        assert!(!rect_overlap(0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0));
        assert!(!rect_overlap(0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let rects = [
            (0.0, 0.0, 1.0, 1.0),
            (0.5, 0.5, 1.0, 1.0),
            (1.0, 0.0, 1.0, 1.0),
            (1.0, 10.0, 0.5, 3.0),
            (1.2, 11.3, 0.4, 0.4),
            (-3.0, -3.0, 0.4, 0.4),
            (9.9, 0.1, 0.4, 0.4),
            (0.0, 0.0, 20.0, 20.0),
        ];
        for a in rects {
            for b in rects {
                assert_eq!(
                    rect_overlap(a.0, a.1, a.2, a.3, b.0, b.1, b.2, b.3),
                    rect_overlap(b.0, b.1, b.2, b.3, a.0, a.1, a.2, a.3),
                    "overlap({:?}, {:?}) should be symmetric",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_aabb_center_and_overlap() {
        let paddle = Aabb::new(Vec2::new(1.0, 10.0), Vec2::new(0.5, 3.0));
        let ball = Aabb::new(Vec2::new(1.3, 11.0), Vec2::new(0.4, 0.4));
        assert_eq!(paddle.center(), Vec2::new(1.25, 11.5));
        assert!(paddle.overlaps(&ball));
        assert!(ball.overlaps(&paddle));
    }
}
