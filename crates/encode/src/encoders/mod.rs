//! One module per encoding strategy.
//!
//! Leaf encoders draw directly into their region. Composite encoders lay their
//! children out on a [`Grid`] and hand every child back to the walker.

pub mod boolean;
pub mod byte;
pub mod float;
pub mod indirection;
pub mod integer;
pub mod mapping;
pub mod record;
pub mod sequence;
pub mod text;

use crate::error::EncodeError;
use crate::layout::Grid;
use crate::region::Region;
use crate::walker::Walker;
use mosaic_value::Value;

/// Encodes `children` into the cells of a grid covering `region`.
///
/// Each cell's group is attached before its child is encoded, so a failing
/// child leaves its earlier siblings and its own partial drawing in place.
pub(crate) fn encode_grid<'v, I>(
    walker: &Walker,
    children: I,
    region: &mut Region<'_>,
) -> Result<(), EncodeError>
where
    I: ExactSizeIterator<Item = &'v Value>,
{
    let grid = Grid::new(children.len(), region.side());
    for (index, child) in children.enumerate() {
        let mut cell = region.child(grid.cell_transform(index))?;
        walker.encode(child, &mut cell)?;
    }
    Ok(())
}
