mod common;

use common::{GeneratedSvg, TestResult};
use mosaic::{EncodeError, EncoderConfig, MarshalError, Marshaller, Value};

fn nested(levels: usize) -> Value {
    (0..levels).fold(Value::from(1.0f64), |inner, _| Value::Sequence(vec![inner]))
}

#[test]
fn test_default_depth_allows_deep_values() -> TestResult {
    let svg = GeneratedSvg::from_bytes(Marshaller::new().marshal_value(&nested(64), 100.0)?)?;
    assert_eq!(svg.count("circle"), 1);
    assert_eq!(svg.count("g"), 65);
    Ok(())
}

#[test]
fn test_configured_depth_limit() {
    let marshaller = Marshaller::new().with_config(EncoderConfig {
        max_depth: 4,
        ..EncoderConfig::default()
    });
    assert!(marshaller.marshal_value(&nested(4), 100.0).is_ok());
    let err = marshaller.marshal_value(&nested(5), 100.0).unwrap_err();
    assert!(matches!(err, MarshalError::Encode(EncodeError::DepthExceeded(4))));
}

#[test]
fn test_custom_gap_changes_geometry() -> TestResult {
    let tight = Marshaller::new().with_config(EncoderConfig {
        cell_gap: 0.0,
        ..EncoderConfig::default()
    });
    let svg = GeneratedSvg::from_bytes(tight.marshal(&1u8, 80.0)?)?;
    assert!(svg.text.contains(r#"height="10""#));
    assert!(svg.text.contains(r#"width="80""#));
    Ok(())
}
