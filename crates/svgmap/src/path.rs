//! Path element extraction: the `d` command-string state machine and the
//! per-element shape model it produces.

use crate::document::ElementAttributes;
use crate::geom::{BoundsAccumulator, Point, Rect, Transform, point};
use crate::scan::scan_number_list;
use crate::transform::parse_transform;

/// One drawing operation in a shape's outline, in document coordinate space
/// once the owning walker has applied the active transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicCurveTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    QuadCurveTo {
        control: Point,
        to: Point,
    },
    Close,
}

/// One `<path>`'s extracted shape.
#[derive(Debug, Clone)]
pub struct PathElement {
    pub id: Option<String>,
    pub title: Option<String>,
    pub class_name: Option<String>,
    /// Transform declared on the element itself, if any. Segments already
    /// have it applied; this is kept for callers that need to invert it.
    pub transform: Option<Transform>,
    pub segments: Vec<PathSegment>,
    /// True iff the path was explicitly closed (`Z`/`z`).
    pub filled: bool,
    /// Bounding box of on-path anchor points only. Curve control points are
    /// not included, so this is not a tight bound for convex curves.
    pub bounds: Rect,
}

impl PathElement {
    pub(crate) fn from_attrs(attrs: &ElementAttributes<'_>) -> Self {
        let mut builder = PathBuilder::new();
        if let Some(d) = attrs.d {
            builder.run(d);
        }
        PathElement {
            id: attrs.id.map(str::to_owned),
            title: attrs.title.map(str::to_owned),
            class_name: attrs.class_name.map(str::to_owned),
            transform: attrs.transform.map(parse_transform),
            segments: builder.segments,
            filled: builder.filled,
            bounds: builder.bounds.to_rect(),
        }
    }

    /// Maps every segment point through `transform` and recomputes the
    /// anchor-point bounds. Returns the accumulator so the walker can union
    /// it into the document bounds without re-walking the segments.
    pub(crate) fn apply_transform(&mut self, transform: &Transform) -> BoundsAccumulator {
        let mut bounds = BoundsAccumulator::new();
        for segment in &mut self.segments {
            match segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                    *p = transform.transform_point(*p);
                    bounds.extend(*p);
                }
                PathSegment::CubicCurveTo {
                    control1,
                    control2,
                    to,
                } => {
                    *control1 = transform.transform_point(*control1);
                    *control2 = transform.transform_point(*control2);
                    *to = transform.transform_point(*to);
                    bounds.extend(*to);
                }
                PathSegment::QuadCurveTo { control, to } => {
                    *control = transform.transform_point(*control);
                    *to = transform.transform_point(*to);
                    bounds.extend(*to);
                }
                PathSegment::Close => {}
            }
        }
        self.bounds = bounds.to_rect();
        bounds
    }

    /// Center of the bounding box; the host view anchors the element's label
    /// here.
    pub fn mid_point(&self) -> Point {
        self.bounds.center()
    }
}

/// Decodes a `d` string into segments, tracking the pen position and the
/// running anchor bounds.
#[derive(Debug)]
struct PathBuilder {
    segments: Vec<PathSegment>,
    filled: bool,
    pen: Point,
    bounds: BoundsAccumulator,
}

impl PathBuilder {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            filled: false,
            pen: Point::zero(),
            bounds: BoundsAccumulator::new(),
        }
    }

    /// Tokenizes the command string: any letter except the exponent marker
    /// `e` starts a new command and flushes the arguments accumulated for the
    /// previous one. The final pending command is flushed at end of input.
    fn run(&mut self, d: &str) {
        let mut command = '\0';
        let mut value = String::new();

        for ch in d.chars() {
            if ch.is_alphabetic() && ch != 'e' {
                if !value.is_empty() {
                    self.execute(command, &value);
                }
                value.clear();
                command = ch;
                continue;
            }
            value.push(ch);
        }
        self.execute(command, &value);
    }

    fn execute(&mut self, command: char, value: &str) {
        let coordinates = scan_number_list(value);

        if coordinates.is_empty() && command != 'z' && command != 'Z' {
            return;
        }

        match command {
            'M' => self.move_or_line(&coordinates, true, false),
            'm' => self.move_or_line(&coordinates, false, false),
            'L' => self.move_or_line(&coordinates, true, true),
            'l' => self.move_or_line(&coordinates, false, true),

            'H' => self.horizontal_line(&coordinates, true),
            'h' => self.horizontal_line(&coordinates, false),
            'V' => self.vertical_line(&coordinates, true),
            'v' => self.vertical_line(&coordinates, false),

            'C' => self.cubic_curve(&coordinates, true),
            'c' => self.cubic_curve(&coordinates, false),

            'S' => self.quad_curve(&coordinates, true),
            's' => self.quad_curve(&coordinates, false),

            'Z' | 'z' => {
                self.segments.push(PathSegment::Close);
                self.filled = true;
            }

            // Unknown commands (arcs included) are dropped with their
            // arguments; one bad command must not sink the element.
            _ => {}
        }
    }

    fn set_pen(&mut self, p: Point) {
        self.pen = p;
        self.bounds.extend(p);
    }

    fn move_or_line(&mut self, coordinates: &[f64], absolute: bool, line: bool) {
        for pair in coordinates.chunks_exact(2) {
            let p = point(pair[0], pair[1]);
            let next = if absolute { p } else { p + self.pen.to_vector() };
            self.set_pen(next);
            self.segments.push(if line {
                PathSegment::LineTo(next)
            } else {
                PathSegment::MoveTo(next)
            });
        }
    }

    fn horizontal_line(&mut self, coordinates: &[f64], absolute: bool) {
        for &x in coordinates {
            let nx = if absolute { x } else { self.pen.x + x };
            let next = point(nx, self.pen.y);
            self.set_pen(next);
            self.segments.push(PathSegment::LineTo(next));
        }
    }

    fn vertical_line(&mut self, coordinates: &[f64], absolute: bool) {
        for &y in coordinates {
            let ny = if absolute { y } else { self.pen.y + y };
            let next = point(self.pen.x, ny);
            self.set_pen(next);
            self.segments.push(PathSegment::LineTo(next));
        }
    }

    fn cubic_curve(&mut self, coordinates: &[f64], absolute: bool) {
        for c in coordinates.chunks_exact(6) {
            let control1 = point(c[0], c[1]);
            let control2 = point(c[2], c[3]);
            let p = point(c[4], c[5]);

            if absolute {
                self.set_pen(p);
                self.segments.push(PathSegment::CubicCurveTo {
                    control1,
                    control2,
                    to: p,
                });
            } else {
                let offset = self.pen.to_vector();
                self.segments.push(PathSegment::CubicCurveTo {
                    control1: control1 + offset,
                    control2: control2 + offset,
                    to: p + offset,
                });
                self.set_pen(p + offset);
            }
        }
    }

    /// Quirk: the iteration count is derived from groups of 8 numbers while
    /// each segment consumes 4, so at most `floor(n/8)` segments are emitted
    /// and an odd trailing group is dropped. Kept intentionally; changing it
    /// would shift rendered geometry for map files authored against this
    /// behavior.
    fn quad_curve(&mut self, coordinates: &[f64], absolute: bool) {
        for i in 0..coordinates.len() / 8 {
            let control = point(coordinates[i * 4], coordinates[i * 4 + 1]);
            let p = point(coordinates[i * 4 + 2], coordinates[i * 4 + 3]);

            if absolute {
                self.set_pen(p);
                self.segments.push(PathSegment::QuadCurveTo { control, to: p });
            } else {
                let offset = self.pen.to_vector();
                self.segments.push(PathSegment::QuadCurveTo {
                    control: control + offset,
                    to: p + offset,
                });
                self.set_pen(p + offset);
            }
        }
    }
}
