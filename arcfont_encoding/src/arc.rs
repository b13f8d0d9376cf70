// Copyright 2026 the Arcfont Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular arcs and signed distances to them.
//!
//! Outlines are oriented so that the glyph interior lies to the right of the
//! direction of travel, which is how TrueType outer contours are wound in
//! y-up design space. Signed distances are positive inside the glyph.

use peniko::kurbo::{Point, Vec2};

/// Curvature magnitudes below this are treated as straight segments.
const STRAIGHT_EPSILON: f64 = 1e-5;

/// A circular arc from `p0` to `p1`, or a straight segment when `d` is zero.
///
/// `d` is `tan(θ / 4)` where `θ` is the signed angle swept by the arc;
/// positive values sweep counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    /// Start point.
    pub p0: Point,
    /// End point.
    pub p1: Point,
    /// Signed curvature parameter.
    pub d: f64,
}

/// A displacement from a query point to an arc, or to its extension along
/// the tangent at the nearer endpoint, tagged with the side of the outline
/// the query point lies on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignedVector {
    /// Displacement from the query point.
    pub vector: Vec2,
    /// Whether the query point lies on the interior side.
    pub inside: bool,
}

impl SignedVector {
    /// Length of the displacement.
    pub fn length(&self) -> f64 {
        self.vector.hypot()
    }

    /// `1.0` for interior points and `-1.0` otherwise.
    pub fn sign(&self) -> f64 {
        sign(self.inside)
    }
}

impl Arc {
    pub fn new(p0: Point, p1: Point, d: f64) -> Self {
        Self { p0, p1, d }
    }

    /// A straight segment.
    pub fn line(p0: Point, p1: Point) -> Self {
        Self::new(p0, p1, 0.0)
    }

    /// Whether the arc is flat enough to be treated as a segment.
    pub fn is_straight(&self) -> bool {
        self.d.abs() < STRAIGHT_EPSILON
    }

    /// Center of the supporting circle.
    ///
    /// Not meaningful for straight arcs.
    pub fn center(&self) -> Point {
        self.p0.midpoint(self.p1) + ortho(self.p1 - self.p0) / (2.0 * tan2atan(self.d))
    }

    /// Radius of the supporting circle.
    pub fn radius(&self) -> f64 {
        (self.p1 - self.p0).hypot() / (2.0 * sin2atan(self.d)).abs()
    }

    /// Tangent directions at `p0` and `p1`, both along the direction of travel.
    pub fn tangents(&self) -> (Vec2, Vec2) {
        let half = (self.p1 - self.p0) * 0.5;
        let normal = ortho(half) * -sin2atan(self.d);
        let along = half * cos2atan(self.d);
        (along + normal, along - normal)
    }

    /// Whether `p` lies in the angular sector spanned by the arc.
    pub fn wedge_contains_point(&self, p: Point) -> bool {
        let (t0, t1) = self.tangents();
        let past_start = (p - self.p0).dot(t0) >= 0.0;
        let before_end = (p - self.p1).dot(t1) <= 0.0;
        if self.d.abs() <= 1.0 {
            past_start && before_end
        } else {
            past_start || before_end
        }
    }

    pub fn leftmost(&self) -> Point {
        self.extreme(Vec2::new(-1.0, 0.0))
    }

    pub fn rightmost(&self) -> Point {
        self.extreme(Vec2::new(1.0, 0.0))
    }

    pub fn lowest(&self) -> Point {
        self.extreme(Vec2::new(0.0, -1.0))
    }

    pub fn highest(&self) -> Point {
        self.extreme(Vec2::new(0.0, 1.0))
    }

    /// The point of the arc farthest along the unit direction `dir`.
    fn extreme(&self, dir: Vec2) -> Point {
        let endpoint = if self.p0.to_vec2().dot(dir) >= self.p1.to_vec2().dot(dir) {
            self.p0
        } else {
            self.p1
        };
        if self.is_straight() {
            return endpoint;
        }
        let candidate = self.center() + dir * self.radius();
        if self.wedge_contains_point(candidate) {
            candidate
        } else {
            endpoint
        }
    }

    /// The displacement from `p` to this arc, extended along its end tangents.
    ///
    /// Inside the arc's wedge this points at the supporting circle. Outside it
    /// points at the tangent line through the nearer endpoint. Straight arcs
    /// use their supporting line throughout.
    pub fn signed_vector_to(&self, p: Point) -> SignedVector {
        if self.is_straight() {
            let dir = self.p1 - self.p0;
            return SignedVector {
                vector: foot_on_line(self.p0, dir, p) - p,
                inside: is_right_of(self.p0, dir, p),
            };
        }
        if self.wedge_contains_point(p) {
            let to_center = self.center() - p;
            let dist = to_center.hypot();
            let radius = self.radius();
            let vector = if dist > 0.0 {
                to_center * ((dist - radius) / dist)
            } else {
                self.p0 - p
            };
            return SignedVector {
                vector,
                inside: self.inside_circle_side(dist, radius),
            };
        }
        let (t0, t1) = self.tangents();
        let (endpoint, tangent) = if (p - self.p0).hypot2() < (p - self.p1).hypot2() {
            (self.p0, t0)
        } else {
            (self.p1, t1)
        };
        SignedVector {
            vector: foot_on_line(endpoint, tangent, p) - p,
            inside: is_right_of(endpoint, tangent, p),
        }
    }

    /// Signed distance from `p` to the arc, positive on the interior side.
    pub fn signed_distance(&self, p: Point) -> f64 {
        if self.is_straight() {
            let dir = self.p1 - self.p0;
            let dist = (p - self.closest_on_segment(p)).hypot();
            return dist * sign(is_right_of(self.p0, dir, p));
        }
        if self.wedge_contains_point(p) {
            let dist = (p - self.center()).hypot();
            let radius = self.radius();
            return (dist - radius).abs() * sign(self.inside_circle_side(dist, radius));
        }
        let dist = (p - self.p0).hypot().min((p - self.p1).hypot());
        dist * self.signed_vector_to(p).sign()
    }

    /// Squared unsigned distance from `p` to the arc.
    pub fn squared_distance(&self, p: Point) -> f64 {
        if self.is_straight() {
            return (p - self.closest_on_segment(p)).hypot2();
        }
        if self.wedge_contains_point(p) {
            let dist = (p - self.center()).hypot() - self.radius();
            return dist * dist;
        }
        (p - self.p0).hypot2().min((p - self.p1).hypot2())
    }

    fn closest_on_segment(&self, p: Point) -> Point {
        let dir = self.p1 - self.p0;
        let len2 = dir.hypot2();
        if len2 == 0.0 {
            return self.p0;
        }
        let t = ((p - self.p0).dot(dir) / len2).clamp(0.0, 1.0);
        self.p0 + dir * t
    }

    /// For a point in the wedge at `dist` from the center: counter-clockwise
    /// arcs have the interior outside their circle, clockwise ones inside.
    fn inside_circle_side(&self, dist: f64, radius: f64) -> bool {
        (dist < radius) == (self.d < 0.0)
    }
}

fn sign(inside: bool) -> f64 {
    if inside {
        1.0
    } else {
        -1.0
    }
}

/// `v` rotated a quarter turn counter-clockwise.
fn ortho(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

fn tan2atan(d: f64) -> f64 {
    2.0 * d / (1.0 - d * d)
}

fn sin2atan(d: f64) -> f64 {
    2.0 * d / (1.0 + d * d)
}

fn cos2atan(d: f64) -> f64 {
    (1.0 - d * d) / (1.0 + d * d)
}

fn is_right_of(origin: Point, dir: Vec2, p: Point) -> bool {
    dir.cross(p - origin) < 0.0
}

fn foot_on_line(origin: Point, dir: Vec2, p: Point) -> Point {
    let len2 = dir.hypot2();
    if len2 == 0.0 {
        return origin;
    }
    origin + dir * ((p - origin).dot(dir) / len2)
}
