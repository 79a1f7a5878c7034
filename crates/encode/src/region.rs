use crate::error::EncodeError;
use mosaic_canvas::{GroupId, Shape, Surface};
use mosaic_types::Transform;

/// A square area of the canvas that one encoding step owns.
///
/// Coordinates inside a region are local: `(0, 0)` is its top-left corner and
/// `side` its extent on both axes. The group the region draws into carries the
/// transform mapping those coordinates onto the document.
pub struct Region<'a> {
    surface: &'a mut dyn Surface,
    group: GroupId,
    side: f64,
    depth: usize,
}

impl<'a> Region<'a> {
    /// The document-sized region drawing straight into the surface's root group.
    pub fn root(surface: &'a mut dyn Surface, side: f64) -> Self {
        let group = surface.root();
        Self {
            surface,
            group,
            side,
            depth: 0,
        }
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    /// Number of subdivisions and indirections between this region and the document root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Attaches a new group to this region and returns it as a child region.
    ///
    /// The child keeps the same local side; `transform` is expected to shrink it
    /// into its slot. The group stays attached whatever happens to the child.
    pub fn child(&mut self, transform: Transform) -> Result<Region<'_>, EncodeError> {
        let group = self.surface.push_group(self.group, transform)?;
        Ok(Region {
            surface: &mut *self.surface,
            group,
            side: self.side,
            depth: self.depth + 1,
        })
    }

    /// The same area one level deeper, drawing into the same group.
    pub fn descend(&mut self) -> Region<'_> {
        Region {
            surface: &mut *self.surface,
            group: self.group,
            side: self.side,
            depth: self.depth + 1,
        }
    }

    pub fn draw(&mut self, shape: Shape) -> Result<(), EncodeError> {
        self.surface.draw(self.group, shape)?;
        Ok(())
    }
}
