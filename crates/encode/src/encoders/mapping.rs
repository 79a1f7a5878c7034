use crate::encoders::encode_grid;
use crate::error::EncodeError;
use crate::layout::Grid;
use crate::region::Region;
use crate::walker::Walker;
use mosaic_value::Value;

/// Folds entries two at a time into `key1, value1, key2, value2` pairs and lays
/// the pairs out like a sequence of four-field records.
///
/// When the entry count is odd, the last pair's second key and value are left unset.
pub fn encode(
    walker: &Walker,
    entries: &[(Value, Value)],
    region: &mut Region<'_>,
) -> Result<(), EncodeError> {
    let unset = Value::none();
    let grid = Grid::new(entries.len().div_ceil(2), region.side());

    for (index, chunk) in entries.chunks(2).enumerate() {
        let mut pair = region.child(grid.cell_transform(index))?;
        walker.check_depth(&pair)?;

        let (key1, value1) = &chunk[0];
        let (key2, value2) = match chunk.get(1) {
            Some((key, value)) => (key, value),
            None => (&unset, &unset),
        };
        encode_grid(walker, [key1, value1, key2, value2].into_iter(), &mut pair)?;
    }
    Ok(())
}
