use crate::encoders::encode_grid;
use crate::error::EncodeError;
use crate::region::Region;
use crate::walker::Walker;
use mosaic_value::Record;

/// Public fields in declaration order, one grid cell each. Private fields take no cell.
pub fn encode(walker: &Walker, record: &Record, region: &mut Region<'_>) -> Result<(), EncodeError> {
    let fields: Vec<_> = record.public_fields().map(|field| &field.value).collect();
    log::trace!(
        "Record '{}': {} of {} fields are public",
        record.name,
        fields.len(),
        record.len()
    );
    encode_grid(walker, fields.into_iter(), region)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::render;
    use mosaic_value::{Record, Value};

    #[test]
    fn test_private_fields_are_skipped() {
        let with_private = Record::new("Sample")
            .with_field("x", -1234i32)
            .with_field("y", 0.73f64)
            .with_field("z", true)
            .with_field("_s", 11235813i32);
        let public_only = Record::new("Sample")
            .with_field("x", -1234i32)
            .with_field("y", 0.73f64)
            .with_field("z", true);

        let a = render(&Value::Record(with_private), 90.0);
        let b = render(&Value::Record(public_only), 90.0);
        assert_eq!(a.group_count(), 3);
        assert_eq!(a.placed_shapes(), b.placed_shapes());
    }

    #[test]
    fn test_explicitly_private_field() {
        let record = Record::new("Hidden").with_private_field("secret", 7i32);
        let doc = render(&Value::Record(record), 90.0);
        assert!(doc.is_blank());
        assert_eq!(doc.group_count(), 0);
    }
}
