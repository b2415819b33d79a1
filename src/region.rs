use std::fmt;

use crate::constraint::Constraint;

/// Head-room factor applied to the axis extents when scaling boundary lines
/// for plotting.
pub const MARGIN: f64 = 1.2;

/// A point in the decision plane. Value equality only, no identity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Drawable geometry of the feasible set: the polygon vertices in boundary
/// order, and one line segment per constraint for plotting.
///
/// An empty or single-point feasible set yields an empty/degenerate polygon
/// and empty boundary entries; neither is an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    pub vertices: Vec<Point>,
    pub boundaries: Vec<Vec<Point>>,
}

pub struct FeasibleRegion {}

impl FeasibleRegion {
    pub fn new() -> Self {
        Self {}
    }

    /// Compute the feasible polygon and per-constraint boundary segments.
    ///
    /// Candidate vertices are the axis intercepts of each constraint line
    /// plus all pairwise line intersections; candidates violating
    /// non-negativity or any constraint are discarded, and the survivors are
    /// ordered by polar angle around their centroid.
    pub fn compute(&self, constraints: &[Constraint]) -> Region {
        let mut candidates = Vec::new();

        for con in constraints {
            if con.a() != 0.0_f64 {
                candidates.push(Point::new(con.rhs() / con.a(), 0.0_f64));
            }
            if con.b() != 0.0_f64 {
                candidates.push(Point::new(0.0_f64, con.rhs() / con.b()));
            }
        }

        for (i, c1) in constraints.iter().enumerate() {
            for c2 in &constraints[i + 1..] {
                if let Some(point) = intersection(c1, c2) {
                    candidates.push(point);
                }
            }
        }

        let mut vertices = candidates
            .into_iter()
            .filter(|p| {
                p.x >= 0.0_f64
                    && p.y >= 0.0_f64
                    && constraints.iter().all(|con| con.is_satisfied(p))
            })
            .collect::<Vec<Point>>();

        sort_polygon(&mut vertices);

        let boundaries = constraints
            .iter()
            .map(|con| boundary_line(con, &vertices))
            .collect();

        Region {
            vertices,
            boundaries,
        }
    }
}

impl Default for FeasibleRegion {
    fn default() -> Self {
        Self::new()
    }
}

/// Intersection of two constraint boundary lines by Cramer's rule. Parallel
/// lines (zero determinant) contribute no point.
pub fn intersection(c1: &Constraint, c2: &Constraint) -> Option<Point> {
    let det = c1.a() * c2.b() - c2.a() * c1.b();
    if det == 0.0_f64 {
        return None;
    }

    let x = (c1.rhs() * c2.b() - c2.rhs() * c1.b()) / det;
    let y = (c1.a() * c2.rhs() - c2.a() * c1.rhs()) / det;

    Some(Point::new(x, y))
}

fn centroid(points: &[Point]) -> Point {
    let sum = points.iter().fold(Point::default(), |acc, p| {
        Point::new(acc.x + p.x, acc.y + p.y)
    });
    Point::new(sum.x / points.len() as f64, sum.y / points.len() as f64)
}

/// Order `points` counter-clockwise by polar angle around their centroid.
/// For a convex point set this traces a non-self-intersecting polygon.
fn sort_polygon(points: &mut [Point]) {
    if points.is_empty() {
        return;
    }
    let c = centroid(points);
    points.sort_by(|p, q| {
        (p.y - c.y)
            .atan2(p.x - c.x)
            .partial_cmp(&(q.y - c.y).atan2(q.x - c.x))
            .expect("Nan encountered")
    });
}

/// Segment of a constraint's boundary line, clipped to the plot extents
/// ([`MARGIN`] times the extreme feasible coordinates). Without feasible
/// points there is nothing to scale against, so the segment is empty.
fn boundary_line(con: &Constraint, feasible: &[Point]) -> Vec<Point> {
    if feasible.is_empty() {
        return Vec::new();
    }

    let max_x = feasible.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max) * MARGIN;
    let max_y = feasible.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max) * MARGIN;

    let mut points = Vec::with_capacity(2);
    if con.b() == 0.0_f64 {
        // vertical line
        let x = con.rhs() / con.a();
        points.push(Point::new(x, 0.0_f64));
        points.push(Point::new(x, max_y));
    } else {
        points.push(Point::new(0.0_f64, con.rhs() / con.b()));
        if con.a() != 0.0_f64 {
            points.push(Point::new(con.rhs() / con.a(), 0.0_f64));
        } else {
            points.push(Point::new(max_x, con.rhs() / con.b()));
        }
    }
    points
}
