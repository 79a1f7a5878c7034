use mosaic_types::{Color, Point, Rect, Transform};

/// Fill and stroke settings for a primitive. `None` leaves the SVG default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
}

impl Paint {
    /// A solid fill with the outline disabled.
    pub fn solid(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            stroke_width: Some(0.0),
        }
    }

    /// Fill and outline in the same color.
    pub fn filled_and_stroked(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: Some(color),
            stroke_width: None,
        }
    }

    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Circle,
    Polygon,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { rect: Rect, paint: Paint },
    Circle { center: Point, radius: f64, paint: Paint },
    Polygon { points: Vec<Point>, paint: Paint },
}

impl Shape {
    pub fn rect(rect: Rect, paint: Paint) -> Self {
        Shape::Rect { rect, paint }
    }

    pub fn circle(center: Point, radius: f64, paint: Paint) -> Self {
        Shape::Circle { center, radius, paint }
    }

    pub fn polygon(points: Vec<Point>, paint: Paint) -> Self {
        Shape::Polygon { points, paint }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    pub fn paint(&self) -> &Paint {
        match self {
            Shape::Rect { paint, .. } | Shape::Circle { paint, .. } | Shape::Polygon { paint, .. } => {
                paint
            }
        }
    }

    pub fn fill(&self) -> Option<Color> {
        self.paint().fill
    }

    /// Axis-aligned bounding box in the shape's own coordinate space.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rect { rect, .. } => *rect,
            Shape::Circle { center, radius, .. } => Rect::square(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
            ),
            Shape::Polygon { points, .. } => {
                let Some(first) = points.first() else {
                    return Rect::default();
                };
                let (mut min_x, mut min_y, mut max_x, mut max_y) =
                    (first.x, first.y, first.x, first.y);
                for p in &points[1..] {
                    min_x = min_x.min(p.x);
                    min_y = min_y.min(p.y);
                    max_x = max_x.max(p.x);
                    max_y = max_y.max(p.y);
                }
                Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
            }
        }
    }

    /// Returns this shape with its geometry mapped through `transform`.
    /// Paint is kept as-is, stroke widths are not rescaled.
    pub fn transformed(&self, transform: &Transform) -> Shape {
        match self {
            Shape::Rect { rect, paint } => Shape::Rect {
                rect: transform.apply_rect(*rect),
                paint: *paint,
            },
            Shape::Circle { center, radius, paint } => Shape::Circle {
                center: transform.apply(*center),
                radius: radius * transform.scale,
                paint: *paint,
            },
            Shape::Polygon { points, paint } => Shape::Polygon {
                points: points.iter().map(|p| transform.apply(*p)).collect(),
                paint: *paint,
            },
        }
    }
}
