use crate::error::EncodeError;
use crate::region::Region;
use crate::walker::Walker;
use mosaic_value::Value;

/// Draws the target in the same area, one level deeper. An unset indirection draws nothing.
pub fn encode(
    walker: &Walker,
    target: Option<&Value>,
    region: &mut Region<'_>,
) -> Result<(), EncodeError> {
    match target {
        Some(value) => walker.encode(value, &mut region.descend()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::render;
    use mosaic_value::Value;

    #[test]
    fn test_none_draws_nothing() {
        assert!(render(&Value::none(), 50.0).is_blank());
    }

    #[test]
    fn test_some_draws_as_target() {
        let direct = render(&Value::from(-5i32), 50.0);
        let wrapped = render(&Value::some(Value::some(-5i32)), 50.0);
        assert_eq!(direct.placed_shapes(), wrapped.placed_shapes());
        assert_eq!(wrapped.group_count(), 0);
    }
}
