//! Planar convex hull computation for the bag contours
//!
//! Andrew's monotone chain over `DVec2` input projected onto z = 0.
//! Deterministic: ties are resolved by total ordering on coordinates, so
//! identical input always yields an identical hull.

use glam::DVec2;
use serde::{Deserialize, Serialize};

const EPS: f64 = 1e-9;

/// Cross product of (a - o) and (b - o); positive for a left turn
fn cross(o: DVec2, a: DVec2, b: DVec2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Counter-clockwise convex hull of a planar point set
///
/// Collinear points on an edge are dropped, so an all-collinear set reduces
/// to its two extreme endpoints and a set of identical points to a single
/// point. The result carries no closure point; see [`HullContour`] for the
/// closed-loop convention.
pub fn convex_hull_ccw(points: &[DVec2]) -> Vec<DVec2> {
    let mut pts: Vec<DVec2> = points.to_vec();
    pts.sort_unstable_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut hull: Vec<DVec2> = Vec::with_capacity(2 * pts.len());
    for &p in &pts {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}

/// A hull boundary as an ordered point loop
///
/// Closure convention: with three or more hull vertices the first vertex is
/// repeated at the end, so `len() == vertex_count + 1`. One- and two-point
/// contours stay open (a point or a segment cannot be closed meaningfully).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HullContour {
    points: Vec<DVec2>,
}

impl HullContour {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the contour for a point set, applying the size policy:
    /// 0 points → empty; 1-2 points → passed through in collection order;
    /// 3+ points → CCW convex hull with an explicit closure point.
    pub fn from_points(points: &[DVec2]) -> Self {
        if points.len() < 3 {
            return Self {
                points: points.to_vec(),
            };
        }
        let mut hull = convex_hull_ccw(points);
        if hull.len() >= 3 {
            let first = hull[0];
            hull.push(first);
        }
        Self { points: hull }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the contour is a closed polygon loop
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 4 && self.points.first() == self.points.last()
    }

    /// Boundary vertices without the closure point
    pub fn ring(&self) -> &[DVec2] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// True when `p` lies inside or on the contour
    ///
    /// Degenerate contours test point/segment membership instead.
    pub fn contains(&self, p: DVec2) -> bool {
        let ring = self.ring();
        match ring.len() {
            0 => false,
            1 => (ring[0] - p).length() <= EPS,
            2 => point_on_segment(ring[0], ring[1], p),
            _ => {
                for i in 0..ring.len() {
                    let a = ring[i];
                    let b = ring[(i + 1) % ring.len()];
                    if cross(a, b, p) < -EPS {
                        return false;
                    }
                }
                true
            }
        }
    }
}

fn point_on_segment(a: DVec2, b: DVec2, p: DVec2) -> bool {
    if cross(a, b, p).abs() > EPS {
        return false;
    }
    let t = (p - a).dot(b - a);
    t >= -EPS && t <= (b - a).length_squared() + EPS
}
