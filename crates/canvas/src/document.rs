use crate::error::CanvasError;
use crate::shape::{Paint, Shape};
use crate::surface::{GroupId, Surface};
use mosaic_types::Transform;
use std::io::Write;
use svg::node::element::{Circle, Group, Polygon, Rectangle};

const ROOT: usize = 0;

#[derive(Debug, Clone)]
enum Node {
    Group { transform: Transform, children: Vec<usize> },
    Shape(Shape),
}

/// A shape resolved into document coordinates, as produced by
/// [`SvgDocument::placed_shapes`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape {
    /// The shape with every enclosing group transform applied.
    pub shape: Shape,
    /// Number of groups between the shape and the document root.
    pub depth: usize,
}

/// An in-memory SVG scene.
///
/// Nodes live in a flat arena and refer to their children by index, so the
/// document can hand out cheap `GroupId`s while a caller keeps drawing into
/// different groups. The arena only grows.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    nodes: Vec<Node>,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Result<Self, CanvasError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CanvasError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            nodes: vec![Node::Group {
                transform: Transform::IDENTITY,
                children: Vec::new(),
            }],
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn shape_count(&self) -> usize {
        self.nodes.iter().filter(|n| matches!(n, Node::Shape(_))).count()
    }

    /// Number of groups, not counting the root.
    pub fn group_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Group { .. }))
            .count()
            - 1
    }

    pub fn is_blank(&self) -> bool {
        self.shape_count() == 0
    }

    /// Every shape in the document, in drawing order, mapped to document coordinates.
    pub fn placed_shapes(&self) -> Vec<PlacedShape> {
        let mut out = Vec::new();
        self.collect_shapes(ROOT, Transform::IDENTITY, 0, &mut out);
        out
    }

    /// The shapes drawn anywhere beneath `group`, mapped to document coordinates.
    pub fn placed_shapes_under(&self, group: GroupId) -> Result<Vec<PlacedShape>, CanvasError> {
        self.group_children(group)?;
        let (transform, depth) = self.locate(group).ok_or(CanvasError::UnknownGroup(group))?;
        let mut out = Vec::new();
        self.collect_shapes(group.0, transform, depth, &mut out);
        Ok(out)
    }

    /// Builds the `svg` crate's document tree for this scene.
    pub fn to_svg(&self) -> svg::Document {
        let view_box = format!("0 0 {} {}", self.width, self.height);
        svg::Document::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", view_box)
            .add(self.build_group(ROOT))
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), CanvasError> {
        svg::write(writer, &self.to_svg())?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CanvasError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        log::debug!(
            "Serialized document with {} shapes in {} groups ({} bytes)",
            self.shape_count(),
            self.group_count(),
            buf.len()
        );
        Ok(buf)
    }

    fn group_children(&self, group: GroupId) -> Result<&Vec<usize>, CanvasError> {
        match self.nodes.get(group.0) {
            Some(Node::Group { children, .. }) => Ok(children),
            Some(Node::Shape(_)) => Err(CanvasError::NotAGroup(group)),
            None => Err(CanvasError::UnknownGroup(group)),
        }
    }

    fn group_children_mut(&mut self, group: GroupId) -> Result<&mut Vec<usize>, CanvasError> {
        match self.nodes.get_mut(group.0) {
            Some(Node::Group { children, .. }) => Ok(children),
            Some(Node::Shape(_)) => Err(CanvasError::NotAGroup(group)),
            None => Err(CanvasError::UnknownGroup(group)),
        }
    }

    /// Transform accumulated above `group` (excluding its own) and its depth.
    fn locate(&self, group: GroupId) -> Option<(Transform, usize)> {
        let mut stack = vec![(ROOT, Transform::IDENTITY, 0usize)];
        while let Some((index, parent, depth)) = stack.pop() {
            if let Node::Group { transform, children } = &self.nodes[index] {
                if index == group.0 {
                    return Some((parent, depth));
                }
                let current = parent.then(transform);
                for &child in children {
                    stack.push((child, current, depth + 1));
                }
            }
        }
        None
    }

    fn collect_shapes(
        &self,
        index: usize,
        parent: Transform,
        depth: usize,
        out: &mut Vec<PlacedShape>,
    ) {
        match &self.nodes[index] {
            Node::Group { transform, children } => {
                let current = parent.then(transform);
                for &child in children {
                    let child_depth = match self.nodes[child] {
                        Node::Group { .. } => depth + 1,
                        Node::Shape(_) => depth,
                    };
                    self.collect_shapes(child, current, child_depth, out);
                }
            }
            Node::Shape(shape) => out.push(PlacedShape {
                shape: shape.transformed(&parent),
                depth,
            }),
        }
    }

    fn build_group(&self, index: usize) -> Group {
        let mut group = Group::new();
        let Node::Group { transform, children } = &self.nodes[index] else {
            return group;
        };
        if !transform.is_identity() {
            group = group.set(
                "transform",
                format!(
                    "translate({} {}) scale({})",
                    transform.tx, transform.ty, transform.scale
                ),
            );
        }
        for &child in children {
            group = match &self.nodes[child] {
                Node::Group { .. } => group.add(self.build_group(child)),
                Node::Shape(shape) => group.add(shape_element(shape)),
            };
        }
        group
    }
}

impl Surface for SvgDocument {
    fn root(&self) -> GroupId {
        GroupId(ROOT)
    }

    fn push_group(
        &mut self,
        parent: GroupId,
        transform: Transform,
    ) -> Result<GroupId, CanvasError> {
        let id = self.nodes.len();
        self.group_children_mut(parent)?.push(id);
        self.nodes.push(Node::Group {
            transform,
            children: Vec::new(),
        });
        Ok(GroupId(id))
    }

    fn draw(&mut self, parent: GroupId, shape: Shape) -> Result<(), CanvasError> {
        let id = self.nodes.len();
        self.group_children_mut(parent)?.push(id);
        self.nodes.push(Node::Shape(shape));
        Ok(())
    }
}

fn shape_element(shape: &Shape) -> Box<dyn svg::Node> {
    match shape {
        Shape::Rect { rect, paint } => Box::new(with_paint(
            Rectangle::new()
                .set("x", rect.x)
                .set("y", rect.y)
                .set("width", rect.width)
                .set("height", rect.height),
            paint,
        )),
        Shape::Circle { center, radius, paint } => Box::new(with_paint(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", *radius),
            paint,
        )),
        Shape::Polygon { points, paint } => {
            let points = points
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            Box::new(with_paint(Polygon::new().set("points", points), paint))
        }
    }
}

fn with_paint<N: svg::Node>(mut node: N, paint: &Paint) -> N {
    if let Some(fill) = paint.fill {
        node.assign("fill", fill.to_string());
    }
    if let Some(stroke) = paint.stroke {
        node.assign("stroke", stroke.to_string());
    }
    if let Some(width) = paint.stroke_width {
        node.assign("stroke-width", width);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_types::{Color, Point, Rect};

    fn parse(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_size() {
        assert!(SvgDocument::new(0.0, 10.0).is_err());
        assert!(SvgDocument::new(10.0, -1.0).is_err());
        assert!(SvgDocument::new(f64::NAN, 10.0).is_err());
        assert!(SvgDocument::new(10.0, 10.0).is_ok());
    }

    #[test]
    fn test_nested_groups_compose_transforms() {
        let mut doc = SvgDocument::new(100.0, 100.0).unwrap();
        let root = doc.root();
        let outer = doc.push_group(root, Transform::new(50.0, 0.0, 0.5)).unwrap();
        let inner = doc.push_group(outer, Transform::new(0.0, 50.0, 0.5)).unwrap();
        doc.draw(
            inner,
            Shape::rect(Rect::square(0.0, 0.0, 100.0), Paint::solid(Color::BLACK)),
        )
        .unwrap();

        let placed = doc.placed_shapes();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].depth, 2);
        assert!(placed[0].shape.bounds().approx_eq(&Rect::square(50.0, 25.0, 25.0)));
        assert_eq!(doc.group_count(), 2);
    }

    #[test]
    fn test_placed_shapes_under_group() {
        let mut doc = SvgDocument::new(10.0, 10.0).unwrap();
        let root = doc.root();
        let a = doc.push_group(root, Transform::IDENTITY).unwrap();
        let b = doc.push_group(root, Transform::translate(5.0, 0.0)).unwrap();
        let dot = Shape::circle(Point::new(1.0, 1.0), 1.0, Paint::solid(Color::RED));
        doc.draw(a, dot.clone()).unwrap();
        doc.draw(b, dot.clone()).unwrap();
        doc.draw(b, dot).unwrap();

        assert_eq!(doc.placed_shapes_under(a).unwrap().len(), 1);
        let under_b = doc.placed_shapes_under(b).unwrap();
        assert_eq!(under_b.len(), 2);
        assert_eq!(under_b[0].shape.bounds(), Rect::square(5.0, 0.0, 2.0));
    }

    #[test]
    fn test_unknown_and_shape_ids_are_rejected() {
        let mut doc = SvgDocument::new(10.0, 10.0).unwrap();
        let bogus = GroupId(42);
        assert!(matches!(
            doc.push_group(bogus, Transform::IDENTITY),
            Err(CanvasError::UnknownGroup(_))
        ));

        let root = doc.root();
        doc.draw(root, Shape::rect(Rect::square(0.0, 0.0, 1.0), Paint::default()))
            .unwrap();
        let shape_id = GroupId(1);
        assert!(matches!(
            doc.draw(shape_id, Shape::rect(Rect::default(), Paint::default())),
            Err(CanvasError::NotAGroup(_))
        ));
    }

    #[test]
    fn test_serializes_well_formed_svg() {
        let mut doc = SvgDocument::new(96.0, 96.0).unwrap();
        let root = doc.root();
        let g = doc.push_group(root, Transform::new(48.0, 0.0, 0.5)).unwrap();
        doc.draw(
            g,
            Shape::circle(Point::new(48.0, 48.0), 24.0, Paint::filled_and_stroked(Color::RED)),
        )
        .unwrap();
        doc.draw(
            root,
            Shape::polygon(
                vec![Point::new(0.0, 1.0), Point::new(1.0, 0.0), Point::new(2.0, 1.0)],
                Paint::solid(Color::BLACK),
            ),
        )
        .unwrap();

        let text = parse(&doc.to_bytes().unwrap());
        let xml = roxmltree::Document::parse(&text).unwrap();
        let svg = xml.root_element();
        assert_eq!(svg.tag_name().name(), "svg");
        assert_eq!(svg.attribute("viewBox"), Some("0 0 96 96"));

        let circle = xml
            .descendants()
            .find(|n| n.has_tag_name("circle"))
            .unwrap();
        assert_eq!(circle.attribute("fill"), Some("#ff0000"));
        assert_eq!(circle.attribute("stroke"), Some("#ff0000"));
        assert_eq!(circle.attribute("r"), Some("24"));
        let group = circle.parent_element().unwrap();
        assert_eq!(group.attribute("transform"), Some("translate(48 0) scale(0.5)"));

        let polygon = xml
            .descendants()
            .find(|n| n.has_tag_name("polygon"))
            .unwrap();
        assert_eq!(polygon.attribute("points"), Some("0,1 1,0 2,1"));
    }
}
