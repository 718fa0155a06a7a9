use hexgrid::{
    Capability, GridConfig, GridShape, HexGridError, HexagonGrid, Orientation,
};
use validator::ValidationErrors;

#[test]
fn test_grid_config_validation() {
    let config = GridConfig {
        size: 0, // invalid (too small)
        orientation: Orientation::FlatTop,
        shape: GridShape::Rectangular {
            width: 10001, // invalid (too big)
            height: 0,    // invalid (too small)
        },
    };

    // This is a bit of a lazy check but it works well enough
    let err = HexagonGrid::from_config(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["shape", "size"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_valid_config_builds() {
    let config = GridConfig {
        size: 12,
        orientation: Orientation::FlatTop,
        shape: GridShape::Rectangular {
            width: 7,
            height: 3,
        },
    };
    let grid = HexagonGrid::from_config(config).unwrap();
    assert_eq!(grid.size(), 12);
    assert_eq!(grid.orientation(), Orientation::FlatTop);
    assert_eq!(grid.len(), 21);
}

#[test]
fn test_circular_config_not_supported() {
    // Passes validation, but can't be built
    let config = GridConfig {
        shape: GridShape::Circular { radius: 4 },
        ..GridConfig::default()
    };
    let err = HexagonGrid::from_config(config).unwrap_err();
    assert_eq!(
        err.downcast::<HexGridError>().unwrap(),
        HexGridError::NotSupported(Capability::CircularPopulation)
    );
}

#[test]
fn test_config_from_json() {
    let config: GridConfig = serde_json::from_str(
        r#"{
            "size": 20,
            "orientation": "flat_top",
            "shape": {"type": "rectangular", "width": 4, "height": 6}
        }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        GridConfig {
            size: 20,
            orientation: Orientation::FlatTop,
            shape: GridShape::Rectangular {
                width: 4,
                height: 6
            },
        }
    );

    // Missing fields fall back to the defaults
    let config: GridConfig =
        serde_json::from_str(r#"{"orientation": "flat_top"}"#).unwrap();
    assert_eq!(
        config,
        GridConfig {
            orientation: Orientation::FlatTop,
            ..GridConfig::default()
        }
    );

    let config: GridConfig = serde_json::from_str(
        r#"{"shape": {"type": "circular", "radius": 3}}"#,
    )
    .unwrap();
    assert_eq!(config.shape, GridShape::Circular { radius: 3 });

    // Unknown orientation
    assert!(
        serde_json::from_str::<GridConfig>(r#"{"orientation": "sideways"}"#)
            .is_err()
    );
}
