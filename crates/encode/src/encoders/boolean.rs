use crate::config::EncoderConfig;
use crate::error::EncodeError;
use crate::region::Region;
use mosaic_canvas::{Paint, Shape};
use mosaic_types::Point;

/// Height of an equilateral triangle per unit of side, rounded.
const HEIGHT_RATIO: f64 = 0.866;

/// An equilateral triangle, vertically centred: apex up for `true`, down for `false`.
pub fn encode(flag: bool, region: &mut Region<'_>, config: &EncoderConfig) -> Result<(), EncodeError> {
    let side = region.side();
    // Keeps at least half the side for the triangle on small regions.
    let inset = config.triangle_inset.clamp(0.0, side / 4.0);
    let height = HEIGHT_RATIO * (side - 2.0 * inset);
    let top = (side - height) / 2.0;
    let bottom = top + height;

    let (apex_y, base_y, color) = if flag {
        (top, bottom, config.positive_ink)
    } else {
        (bottom, top, config.negative_ink)
    };
    let points = vec![
        Point::new(side / 2.0, apex_y),
        Point::new(inset, base_y),
        Point::new(side - inset, base_y),
    ];
    region.draw(Shape::polygon(points, Paint::solid(color)))
}
