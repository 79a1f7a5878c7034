use crate::error::CanvasError;
use crate::shape::Shape;
use mosaic_types::Transform;

/// Handle to a group node inside a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub(crate) usize);

impl GroupId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A trait for drawing surfaces, abstracting the vector primitives.
///
/// Drawing is append-only: groups and shapes are attached to their parent the
/// moment they are created and there is no way to remove them. Every group
/// carries its own transform, so a caller drawing into a group works in that
/// group's local coordinates.
pub trait Surface {
    /// The top-level group, in document coordinates.
    fn root(&self) -> GroupId;

    /// Creates a new group under `parent` whose content is mapped through `transform`.
    fn push_group(&mut self, parent: GroupId, transform: Transform)
    -> Result<GroupId, CanvasError>;

    /// Draws `shape` into `parent`, in the parent's local coordinates.
    fn draw(&mut self, parent: GroupId, shape: Shape) -> Result<(), CanvasError>;
}
