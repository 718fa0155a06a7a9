//! Pure conversions between the coordinate systems. Everything in here is
//! deterministic and stateless. Conversions that depend on a grid's cell size
//! take it as a parameter; [crate::HexagonGrid] wraps those with its own size
//! and orientation.

use crate::{
    hex::{
        AxialCoordinate, CubeCoordinate, FractionalCube, OffsetCoordinate,
        OffsetEncoding,
    },
    util::unit::Point2,
};

/// √3, which shows up all over hexagon geometry
const SQRT_3: f64 = 1.732_050_807_568_877_2;

pub fn cube_to_axial(cube: CubeCoordinate) -> AxialCoordinate {
    AxialCoordinate::new(cube.x(), cube.z())
}

pub fn axial_to_cube(axial: AxialCoordinate) -> CubeCoordinate {
    CubeCoordinate::new_xz(axial.q, axial.r)
}

/// Half-step shift applied to the minor axis of an offset coordinate. The
/// numerator is always even, so the division is exact for negatives too.
fn even_shift(major: i32) -> i32 {
    (major + (major & 1)) / 2
}

/// Cube to offset, for flat-topped grids. Even columns are shoved down.
pub fn cube_to_offset_even_q(cube: CubeCoordinate) -> OffsetCoordinate {
    let col = cube.x();
    let row = cube.z() + even_shift(col);
    OffsetCoordinate::new(col, row)
}

/// Inverse of [cube_to_offset_even_q]
pub fn offset_even_q_to_cube(offset: OffsetCoordinate) -> CubeCoordinate {
    let x = offset.col;
    let z = offset.row - even_shift(offset.col);
    CubeCoordinate::new_xz(x, z)
}

/// Cube to offset, for pointy-topped grids. Even rows are shoved right.
pub fn cube_to_offset_even_r(cube: CubeCoordinate) -> OffsetCoordinate {
    let row = cube.z();
    let col = cube.x() + even_shift(row);
    OffsetCoordinate::new(col, row)
}

/// Inverse of [cube_to_offset_even_r]
pub fn offset_even_r_to_cube(offset: OffsetCoordinate) -> CubeCoordinate {
    let z = offset.row;
    let x = offset.col - even_shift(offset.row);
    CubeCoordinate::new_xz(x, z)
}

pub fn cube_to_offset(
    cube: CubeCoordinate,
    encoding: OffsetEncoding,
) -> OffsetCoordinate {
    match encoding {
        OffsetEncoding::EvenQ => cube_to_offset_even_q(cube),
        OffsetEncoding::EvenR => cube_to_offset_even_r(cube),
    }
}

pub fn offset_to_cube(
    offset: OffsetCoordinate,
    encoding: OffsetEncoding,
) -> CubeCoordinate {
    match encoding {
        OffsetEncoding::EvenQ => offset_even_q_to_cube(offset),
        OffsetEncoding::EvenR => offset_even_r_to_cube(offset),
    }
}

/// Snap a fractional cube coordinate to the nearest valid cube coordinate.
/// Each component is rounded on its own, which can knock the sum off zero.
/// To fix that, the component that moved the most during rounding is thrown
/// out and recomputed from the other two. On a tie, x is only recomputed if
/// it beats both others outright, then y if it beats z, otherwise z.
///
/// https://www.redblobgames.com/grids/hexagons/#rounding
pub fn round_cube(cube: FractionalCube) -> CubeCoordinate {
    let rx = cube.x.round();
    let ry = cube.y.round();
    let rz = cube.z.round();

    let dx = (rx - cube.x).abs();
    let dy = (ry - cube.y).abs();
    let dz = (rz - cube.z).abs();

    if dx > dy && dx > dz {
        CubeCoordinate::new_yz(ry as i32, rz as i32)
    } else if dy > dz {
        CubeCoordinate::new_xz(rx as i32, rz as i32)
    } else {
        CubeCoordinate::new_xy(rx as i32, ry as i32)
    }
}

/// Hex distance between two cells: the number of steps between them. Always
/// non-negative, and symmetric.
///
/// https://www.redblobgames.com/grids/hexagons/#distances
pub fn distance(a: CubeCoordinate, b: CubeCoordinate) -> usize {
    let delta = |p: i32, q: i32| (i64::from(p) - i64::from(q)).unsigned_abs();
    let sum = delta(a.x(), b.x()) + delta(a.y(), b.y()) + delta(a.z(), b.z());
    // Two adjacent cell centers are always separated by two cube edges
    usize::try_from(sum / 2).unwrap_or(usize::MAX)
}

/// Position of a cell's center on the plane, for pointy-topped cells with the
/// given side length
pub fn cube_to_cartesian_pointy(cube: CubeCoordinate, size: f64) -> Point2 {
    let x = f64::from(cube.x());
    let z = f64::from(cube.z());
    Point2::new(SQRT_3 * size * (z / 2.0 + x), 1.5 * size * z)
}

/// Inverse of [cube_to_cartesian_pointy], without rounding. The result lands
/// on the plane `x + y + z = 0` but generally isn't on a cell center.
pub fn cartesian_to_fractional_pointy(
    point: Point2,
    size: f64,
) -> FractionalCube {
    FractionalCube::new(
        (SQRT_3 / 3.0 * point.x - point.y / 3.0) / size,
        -(SQRT_3 / 3.0 * point.x + point.y / 3.0) / size,
        (2.0 / 3.0) * point.y / size,
    )
}

/// Find the cell that contains a point on the plane, for pointy-topped cells
/// with the given side length
pub fn cartesian_to_cube_pointy(point: Point2, size: f64) -> CubeCoordinate {
    round_cube(cartesian_to_fractional_pointy(point, size))
}
