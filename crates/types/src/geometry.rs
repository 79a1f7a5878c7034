/// Tolerance used when comparing coordinates produced by repeated scaling.
pub const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A square with its top-left corner at `(x, y)`.
    pub const fn square(x: f64, y: f64, side: f64) -> Self {
        Self::new(x, y, side, side)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when the interiors intersect. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right() - EPSILON
            && other.x < self.right() - EPSILON
            && self.y < other.bottom() - EPSILON
            && other.y < self.bottom() - EPSILON
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x - EPSILON
            && other.y >= self.y - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.bottom() <= self.bottom() + EPSILON
    }

    pub fn approx_eq(&self, other: &Rect) -> bool {
        (self.x - other.x).abs() < EPSILON
            && (self.y - other.y).abs() < EPSILON
            && (self.width - other.width).abs() < EPSILON
            && (self.height - other.height).abs() < EPSILON
    }
}

/// A translate-then-scale transform with a uniform scale factor.
///
/// Maps a local point `p` to `p * scale + (tx, ty)`, which is what the SVG
/// attribute `translate(tx ty) scale(s)` does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub tx: f64,
    pub ty: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform { tx: 0.0, ty: 0.0, scale: 1.0 };

    pub const fn new(tx: f64, ty: f64, scale: f64) -> Self {
        Self { tx, ty, scale }
    }

    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self { tx, ty, scale: 1.0 }
    }

    pub fn is_identity(&self) -> bool {
        self.tx == 0.0 && self.ty == 0.0 && self.scale == 1.0
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.tx, p.y * self.scale + self.ty)
    }

    pub fn apply_rect(&self, r: Rect) -> Rect {
        let origin = self.apply(Point::new(r.x, r.y));
        Rect::new(origin.x, origin.y, r.width * self.scale, r.height * self.scale)
    }

    /// Composes `self` (outer) with `inner`: the result applies `inner` first.
    pub fn then(&self, inner: &Transform) -> Transform {
        Transform {
            tx: self.tx + inner.tx * self.scale,
            ty: self.ty + inner.ty * self.scale,
            scale: self.scale * inner.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_composition_matches_nested_application() {
        let outer = Transform::new(10.0, 20.0, 0.5);
        let inner = Transform::new(4.0, 8.0, 0.25);
        let p = Point::new(3.0, 7.0);

        let nested = outer.apply(inner.apply(p));
        let composed = outer.then(&inner).apply(p);

        assert!((nested.x - composed.x).abs() < EPSILON);
        assert!((nested.y - composed.y).abs() < EPSILON);
    }

    #[test]
    fn test_rect_overlap_ignores_shared_edges() {
        let a = Rect::square(0.0, 0.0, 10.0);
        let b = Rect::square(10.0, 0.0, 10.0);
        let c = Rect::square(5.0, 5.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_identity() {
        assert!(Transform::default().is_identity());
        assert!(!Transform::translate(1.0, 0.0).is_identity());
    }
}
