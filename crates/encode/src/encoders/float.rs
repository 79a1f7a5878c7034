use crate::config::EncoderConfig;
use crate::error::EncodeError;
use crate::region::Region;
use mosaic_canvas::{Paint, Shape};
use mosaic_types::Point;

/// A centred circle whose radius is `|value|` times half the side.
///
/// Magnitudes above one overflow the region; nothing clamps them.
pub fn encode(value: f64, region: &mut Region<'_>, config: &EncoderConfig) -> Result<(), EncodeError> {
    let half = region.side() / 2.0;
    let color = if value >= 0.0 {
        config.positive_ink
    } else {
        config.negative_ink
    };
    region.draw(Shape::circle(
        Point::new(half, half),
        value.abs() * half,
        Paint::filled_and_stroked(color),
    ))
}
