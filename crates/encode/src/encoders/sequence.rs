use crate::encoders::encode_grid;
use crate::error::EncodeError;
use crate::region::Region;
use crate::walker::Walker;
use mosaic_value::Value;

pub fn encode(walker: &Walker, items: &[Value], region: &mut Region<'_>) -> Result<(), EncodeError> {
    encode_grid(walker, items.iter(), region)
}
