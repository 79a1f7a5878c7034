use crate::config::EncoderConfig;
use crate::error::EncodeError;
use crate::region::Region;
use mosaic_canvas::{Paint, Shape};
use mosaic_types::{Color, Rect};

const MATRIX: usize = 8;

pub fn encode_signed(
    value: i64,
    region: &mut Region<'_>,
    config: &EncoderConfig,
) -> Result<(), EncodeError> {
    let color = if value >= 0 {
        config.positive_ink
    } else {
        config.negative_ink
    };
    encode_magnitude(value.unsigned_abs(), color, region, config)
}

pub fn encode_unsigned(
    value: u64,
    region: &mut Region<'_>,
    config: &EncoderConfig,
) -> Result<(), EncodeError> {
    encode_magnitude(value, config.positive_ink, region, config)
}

/// Draws the 64-bit `magnitude` as an 8×8 matrix, most significant bit top-left.
fn encode_magnitude(
    magnitude: u64,
    color: Color,
    region: &mut Region<'_>,
    config: &EncoderConfig,
) -> Result<(), EncodeError> {
    let pitch = region.side() / MATRIX as f64;
    let gap = config.cell_gap.clamp(0.0, pitch / 2.0);
    let mut remaining = magnitude;
    let mut bit = 0;

    while remaining != 0 {
        if remaining & 1 == 1 {
            let cell = MATRIX * MATRIX - 1 - bit;
            let (row, col) = (cell / MATRIX, cell % MATRIX);
            let square = Rect::square(
                col as f64 * pitch + gap / 2.0,
                row as f64 * pitch + gap / 2.0,
                pitch - gap,
            );
            region.draw(Shape::rect(square, Paint::solid(color)))?;
        }
        remaining >>= 1;
        bit += 1;
    }
    Ok(())
}
