pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;
pub type Transform = euclid::Transform2D<f64, Unit, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Running min/max bounds over a set of points.
///
/// Starts empty; `extend` grows the box to include each point. An accumulator
/// that never saw a point converts to the zero rect rather than an inverted
/// `[+inf, -inf]` span.
#[derive(Debug, Clone, Copy)]
pub struct BoundsAccumulator {
    min: Point,
    max: Point,
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self {
            min: point(f64::INFINITY, f64::INFINITY),
            max: point(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn extend(&mut self, p: Point) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn merge(&mut self, other: &BoundsAccumulator) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn to_rect(&self) -> Rect {
        if self.is_empty() {
            return Rect::zero();
        }
        Rect::new(
            self.min,
            Size::new(self.max.x - self.min.x, self.max.y - self.min.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator_is_zero_rect() {
        let acc = BoundsAccumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.to_rect(), Rect::zero());
    }

    #[test]
    fn extend_tracks_min_and_max() {
        let mut acc = BoundsAccumulator::new();
        acc.extend(point(3.0, -1.0));
        acc.extend(point(-2.0, 4.0));
        let rect = acc.to_rect();
        assert_eq!(rect.origin, point(-2.0, -1.0));
        assert_eq!(rect.size, Size::new(5.0, 5.0));
    }

    #[test]
    fn single_point_yields_zero_size_at_point() {
        let mut acc = BoundsAccumulator::new();
        acc.extend(point(5.0, 7.0));
        let rect = acc.to_rect();
        assert_eq!(rect.origin, point(5.0, 7.0));
        assert_eq!(rect.size, Size::zero());
    }

    #[test]
    fn merge_unions_boxes() {
        let mut a = BoundsAccumulator::new();
        a.extend(point(0.0, 0.0));
        a.extend(point(1.0, 1.0));
        let mut b = BoundsAccumulator::new();
        b.extend(point(10.0, -5.0));
        a.merge(&b);
        let rect = a.to_rect();
        assert_eq!(rect.origin, point(0.0, -5.0));
        assert_eq!(rect.size, Size::new(10.0, 6.0));
    }
}
