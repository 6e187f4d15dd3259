use egui::Pos2;

/// A pointer sample in surface-local coordinates
pub type Point = Pos2;

/// One piece of the in-progress stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Origin of the stroke
    MoveTo(Point),
    /// Quadratic curve from the previous end point through `ctrl` to `to`
    QuadTo { ctrl: Point, to: Point },
}

impl PathSegment {
    /// The point the pen rests on after this segment
    pub fn end(&self) -> Point {
        match *self {
            PathSegment::MoveTo(p) => p,
            PathSegment::QuadTo { to, .. } => to,
        }
    }
}

/// The not-yet-committed curve of the current stroke.
///
/// A path in use always begins with a single `MoveTo` followed by any number
/// of `QuadTo` segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LivePath {
    segments: Vec<PathSegment>,
}

impl LivePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every segment
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    /// Start the path over at `origin`
    pub fn move_to(&mut self, origin: Point) {
        self.segments.clear();
        self.segments.push(PathSegment::MoveTo(origin));
    }

    /// Append a quadratic curve ending at `to`
    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        // A curve needs somewhere to start from
        if self.segments.is_empty() {
            self.segments.push(PathSegment::MoveTo(ctrl));
        }
        self.segments.push(PathSegment::QuadTo { ctrl, to });
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments, including the origin
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn origin(&self) -> Option<Point> {
        match self.segments.first() {
            Some(PathSegment::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// True when at least one curve segment exists, i.e. stroking the path
    /// would produce ink
    pub fn has_curves(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, PathSegment::QuadTo { .. }))
    }

    /// Yields every curve as `[start, ctrl, end]`
    pub fn quads(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        let mut pen = self.origin().unwrap_or(Point::ZERO);
        self.segments.iter().filter_map(move |segment| match *segment {
            PathSegment::MoveTo(p) => {
                pen = p;
                None
            }
            PathSegment::QuadTo { ctrl, to } => {
                let start = pen;
                pen = to;
                Some([start, ctrl, to])
            }
        })
    }
}

/// Midpoint of two samples, used as the end point of each smoothing curve
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_to_resets_path() {
        let mut path = LivePath::new();
        path.move_to(Point::new(1.0, 1.0));
        path.quad_to(Point::new(1.0, 1.0), Point::new(3.0, 3.0));
        path.move_to(Point::new(10.0, 10.0));

        assert_eq!(path.len(), 1);
        assert_eq!(path.origin(), Some(Point::new(10.0, 10.0)));
        assert!(!path.has_curves());
    }

    #[test]
    fn test_quads_chain_end_points() {
        let mut path = LivePath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.quad_to(Point::new(0.0, 0.0), Point::new(5.0, 0.0));
        path.quad_to(Point::new(10.0, 0.0), Point::new(10.0, 5.0));

        let quads: Vec<_> = path.quads().collect();
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0][0], Point::new(0.0, 0.0));
        assert_eq!(quads[1][0], Point::new(5.0, 0.0));
        assert_eq!(quads[1][2], Point::new(10.0, 5.0));
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(Point::new(2.0, 4.0), Point::new(6.0, 10.0));
        assert_eq!(m, Point::new(4.0, 7.0));
    }
}
