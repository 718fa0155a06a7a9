use crate::hex::Orientation;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Largest allowed value for any single grid dimension, and for cell size
const MAX_DIMENSION: u32 = 10000;

/// Configuration that defines a grid. Two grids built from the same config
/// will always be identical. Pass this to
/// [HexagonGrid::from_config](crate::HexagonGrid::from_config), which will
/// validate it before building anything.
///
/// Any field left out while deserializing falls back to its value in
/// [GridConfig::default].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Side length of each hexagon. Also the distance from a cell's center to
    /// any of its corners.
    #[validate(range(min = 1, max = 10000))]
    pub size: u32,

    /// Whether the cells have a pointy or flat top. This also decides the
    /// offset encoding: even-r for pointy-topped, even-q for flat-topped.
    pub orientation: Orientation,

    /// Layout of the cells in the grid
    #[validate(custom = "validate_shape")]
    pub shape: GridShape,
}

/// The overall layout of cells in a grid
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridShape {
    /// `width` columns by `height` rows, in offset coordinates
    Rectangular { width: u32, height: u32 },
    /// Every cell within `radius` steps of the origin. Grids of this shape
    /// can't actually be built yet, see
    /// [Capability::CircularPopulation](crate::Capability::CircularPopulation).
    Circular { radius: u32 },
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 32,
            orientation: Orientation::PointyTop,
            shape: GridShape::Rectangular {
                width: 10,
                height: 10,
            },
        }
    }
}

/// Validation for [GridShape]. The derive macro can't reach into enum
/// variants, so the dimension checks are done by hand here.
fn validate_shape(shape: &GridShape) -> Result<(), ValidationError> {
    fn check_dimension(
        name: &'static str,
        value: u32,
    ) -> Result<(), ValidationError> {
        if (1..=MAX_DIMENSION).contains(&value) {
            Ok(())
        } else {
            let mut error = ValidationError::new("range");
            error.add_param("field".into(), &name);
            error.add_param("value".into(), &value);
            error.add_param("min".into(), &1);
            error.add_param("max".into(), &MAX_DIMENSION);
            Err(error)
        }
    }

    match *shape {
        GridShape::Rectangular { width, height } => {
            check_dimension("width", width)?;
            check_dimension("height", height)
        }
        // Unsupported anyway, but a radius of 0 is still a valid circle
        GridShape::Circular { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangular(width: u32, height: u32) -> GridConfig {
        GridConfig {
            shape: GridShape::Rectangular { width, height },
            ..GridConfig::default()
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_size() {
        for size in [1, 500, MAX_DIMENSION] {
            let config = GridConfig {
                size,
                ..GridConfig::default()
            };
            assert!(config.validate().is_ok(), "size {} should be valid", size);
        }
        for size in [0, MAX_DIMENSION + 1] {
            let config = GridConfig {
                size,
                ..GridConfig::default()
            };
            let errors = config.validate().unwrap_err();
            assert!(errors.errors().contains_key("size"));
        }
    }

    #[test]
    fn test_validate_shape() {
        assert!(rectangular(1, 1).validate().is_ok());
        assert!(rectangular(MAX_DIMENSION, MAX_DIMENSION).validate().is_ok());

        for (width, height) in
            [(0, 5), (5, 0), (MAX_DIMENSION + 1, 5), (5, MAX_DIMENSION + 1)]
        {
            let errors = rectangular(width, height).validate().unwrap_err();
            assert!(
                errors.errors().contains_key("shape"),
                "{}x{} should be invalid",
                width,
                height
            );
        }

        let circular = GridConfig {
            shape: GridShape::Circular { radius: 0 },
            ..GridConfig::default()
        };
        assert!(circular.validate().is_ok());
    }
}
