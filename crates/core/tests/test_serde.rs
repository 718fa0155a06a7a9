use hexgrid::{
    CubeCoordinate, HexDirection, HexagonGrid, OffsetCoordinate, Orientation,
    Point2,
};
use serde_test::{assert_ser_tokens, assert_tokens, Token};

#[test]
fn test_cube_coordinate_tokens() {
    // Only the stored components go over the wire, z is derived
    assert_tokens(
        &CubeCoordinate::new_xy(2, -5),
        &[
            Token::Struct {
                name: "CubeCoordinate",
                len: 2,
            },
            Token::Str("x"),
            Token::I32(2),
            Token::Str("y"),
            Token::I32(-5),
            Token::StructEnd,
        ],
    );
}

#[test]
fn test_offset_coordinate_tokens() {
    assert_tokens(
        &OffsetCoordinate::new(4, 1),
        &[
            Token::Struct {
                name: "OffsetCoordinate",
                len: 2,
            },
            Token::Str("col"),
            Token::I32(4),
            Token::Str("row"),
            Token::I32(1),
            Token::StructEnd,
        ],
    );
}

#[test]
fn test_enum_tokens() {
    assert_tokens(
        &Orientation::PointyTop,
        &[Token::UnitVariant {
            name: "Orientation",
            variant: "pointy_top",
        }],
    );
    assert_tokens(
        &Orientation::FlatTop,
        &[Token::UnitVariant {
            name: "Orientation",
            variant: "flat_top",
        }],
    );
    assert_tokens(
        &HexDirection::SE,
        &[Token::UnitVariant {
            name: "HexDirection",
            variant: "se",
        }],
    );
}

#[test]
fn test_point_tokens() {
    assert_tokens(
        &Point2::new(1.5, -2.0),
        &[
            Token::Struct {
                name: "Point2",
                len: 2,
            },
            Token::Str("x"),
            Token::F64(1.5),
            Token::Str("y"),
            Token::F64(-2.0),
            Token::StructEnd,
        ],
    );
}

#[test]
fn test_cell_tokens() {
    let grid =
        HexagonGrid::new_rectangular(10, Orientation::PointyTop, 1, 1).unwrap();
    let cell = grid.cell_by_cube(CubeCoordinate::ORIGIN).unwrap();
    assert_ser_tokens(
        cell,
        &[
            Token::Struct {
                name: "Cell",
                len: 3,
            },
            Token::Str("coordinate"),
            Token::Struct {
                name: "CubeCoordinate",
                len: 2,
            },
            Token::Str("x"),
            Token::I32(0),
            Token::Str("y"),
            Token::I32(0),
            Token::StructEnd,
            Token::Str("cost"),
            Token::F64(1.0),
            Token::Str("impassable"),
            Token::Bool(false),
            Token::StructEnd,
        ],
    );
}

#[test]
fn test_grid_axes_json() {
    let grid =
        HexagonGrid::new_rectangular(10, Orientation::PointyTop, 1, 1).unwrap();
    let value = serde_json::to_value(grid.axes()).unwrap();
    for key in [
        "r",
        "g",
        "b",
        "r_normal",
        "g_normal",
        "b_normal",
        "r_perpendicular",
        "b_perpendicular",
    ] {
        assert!(value[key]["x"].is_f64(), "missing axis {}", key);
        assert!(value[key]["y"].is_f64(), "missing axis {}", key);
    }
}
