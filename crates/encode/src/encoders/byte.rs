use crate::config::EncoderConfig;
use crate::error::EncodeError;
use crate::region::Region;
use mosaic_canvas::{Paint, Shape};
use mosaic_types::Rect;

const BARS: usize = 8;

/// One horizontal bar per set bit, least significant bit on the top row.
pub fn encode(byte: u8, region: &mut Region<'_>, config: &EncoderConfig) -> Result<(), EncodeError> {
    let side = region.side();
    let pitch = side / BARS as f64;
    let gap = config.cell_gap.clamp(0.0, pitch / 2.0);
    let mut remaining = byte;
    let mut row = 0;

    while remaining != 0 {
        if remaining & 1 == 1 {
            let bar = Rect::new(gap / 2.0, row as f64 * pitch + gap / 2.0, side - gap, pitch - gap);
            region.draw(Shape::rect(bar, Paint::solid(config.positive_ink)))?;
        }
        remaining >>= 1;
        row += 1;
    }
    Ok(())
}
