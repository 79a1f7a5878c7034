use crate::error::EncodeError;
use crate::region::Region;
use crate::walker::Walker;
use mosaic_value::Value;

/// Text is drawn as the sequence of its UTF-8 bytes.
pub fn encode(walker: &Walker, text: &str, region: &mut Region<'_>) -> Result<(), EncodeError> {
    let bytes = Value::Sequence(text.bytes().map(Value::Byte).collect());
    walker.encode(&bytes, region)
}
