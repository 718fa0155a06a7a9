//! Geometry for the hexagon that makes up a single cell. All polygons here are
//! centered on the origin until they're translated with [offset_polygon].

use crate::{error::HexGridError, hex::Orientation, util::unit::Point2};
use std::ops::Add;

/// Number of corners on a hexagon. Shocking, I know.
pub const CORNER_COUNT: usize = 6;

/// Get the position of one corner of a hexagon centered on the origin. Corner
/// `i` sits at `60° * i` (plus 30° for pointy-topped hexagons), `size` away
/// from the center. Returns an error if the index isn't in `[0, 5]`.
pub fn hex_corner(
    size: f64,
    corner: i32,
    orientation: Orientation,
) -> Result<Point2, HexGridError> {
    match usize::try_from(corner) {
        Ok(index) if index < CORNER_COUNT => {
            Ok(corner_unchecked(size, index, orientation))
        }
        _ => Err(HexGridError::invalid_argument(
            "corner",
            format!("corner index must be in [0, 5], but was {corner}"),
        )),
    }
}

fn corner_unchecked(
    size: f64,
    index: usize,
    orientation: Orientation,
) -> Point2 {
    let angle = (60.0 * index as f64 + orientation.corner_angle_offset())
        .to_radians();
    Point2::new(size * angle.cos(), size * angle.sin())
}

/// Get all 6 corners of a hexagon centered on the origin, in increasing
/// corner index order. The winding direction is consistent for a given
/// orientation, but don't rely on it being clockwise or counter-clockwise.
pub fn hex_polygon(size: f64, orientation: Orientation) -> [Point2; 6] {
    std::array::from_fn(|i| corner_unchecked(size, i, orientation))
}

/// Translate every point in a polygon by the same amount. Works for any point
/// type that can have a vector added to it, e.g. [Point2] with
/// [Vector2](crate::Vector2), or [IntPoint2](crate::IntPoint2) with
/// [IntVector2](crate::IntVector2).
pub fn offset_polygon<P, V>(polygon: &[P], translation: V) -> Vec<P>
where
    P: Copy + Add<V, Output = P>,
    V: Copy,
{
    polygon.iter().map(|point| *point + translation).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::unit::{IntPoint2, IntVector2, Vector2};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_hex_corner_bounds() {
        for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
            for corner in 0..6 {
                assert!(hex_corner(10.0, corner, orientation).is_ok());
            }
            for corner in [-1, 6, 100, i32::MIN] {
                assert!(
                    matches!(
                        hex_corner(10.0, corner, orientation),
                        Err(HexGridError::InvalidArgument {
                            name: "corner",
                            ..
                        })
                    ),
                    "corner {corner} should be rejected"
                );
            }
        }
    }

    #[test]
    fn test_hex_corner_pointy() {
        // Corner 0 is 30° below the positive x axis (y grows downward)
        let corner = hex_corner(10.0, 0, Orientation::PointyTop).unwrap();
        assert_approx_eq!(corner.x, 10.0 * 30f64.to_radians().cos());
        assert_approx_eq!(corner.y, 5.0);
        // Corner 4 points straight up
        let corner = hex_corner(10.0, 4, Orientation::PointyTop).unwrap();
        assert_approx_eq!(corner.x, 0.0);
        assert_approx_eq!(corner.y, -10.0);
    }

    #[test]
    fn test_hex_corner_flat() {
        let corner = hex_corner(10.0, 0, Orientation::FlatTop).unwrap();
        assert_approx_eq!(corner.x, 10.0);
        assert_approx_eq!(corner.y, 0.0);
        let corner = hex_corner(10.0, 3, Orientation::FlatTop).unwrap();
        assert_approx_eq!(corner.x, -10.0);
        assert_approx_eq!(corner.y, 0.0);
    }

    #[test]
    fn test_hex_polygon() {
        for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
            let polygon = hex_polygon(7.0, orientation);
            for (i, point) in polygon.iter().enumerate() {
                assert_eq!(
                    *point,
                    hex_corner(7.0, i as i32, orientation).unwrap()
                );
                assert_approx_eq!(point.distance_to(Point2::ORIGIN), 7.0);
                // Every side of a regular hexagon is as long as the radius
                let next = polygon[(i + 1) % CORNER_COUNT];
                assert_approx_eq!(point.distance_to(next), 7.0);
            }
        }
    }

    #[test]
    fn test_offset_polygon() {
        let polygon = hex_polygon(3.0, Orientation::PointyTop);
        assert_eq!(offset_polygon(&polygon, Vector2::ZERO), polygon.to_vec());

        let shifted = offset_polygon(&polygon, Vector2::new(1.5, -2.0));
        for (original, moved) in polygon.iter().zip(&shifted) {
            assert_approx_eq!(moved.x, original.x + 1.5);
            assert_approx_eq!(moved.y, original.y - 2.0);
        }

        let empty: [Point2; 0] = [];
        assert!(offset_polygon(&empty, Vector2::new(1.0, 1.0)).is_empty());
    }

    #[test]
    fn test_offset_polygon_int() {
        let polygon = [IntPoint2::new(0, 0), IntPoint2::new(4, -2)];
        assert_eq!(
            offset_polygon(&polygon, IntVector2::new(0, 0)),
            polygon.to_vec()
        );
        assert_eq!(
            offset_polygon(&polygon, IntVector2::new(1, 2)),
            vec![IntPoint2::new(1, 2), IntPoint2::new(5, 0)]
        );
    }
}
