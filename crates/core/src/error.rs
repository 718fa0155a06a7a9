use crate::hex::{CubeCoordinate, OffsetCoordinate};
use derive_more::Display;
use thiserror::Error;

/// Errors that can occur while building or querying a hex grid. All of these
/// are a deterministic function of their input, so retrying an operation with
/// the same arguments will always produce the same error.
///
/// Looking up a cell that isn't in the grid is **not** an error. Lookups
/// return `None` instead, since probing past the edge of a grid is expected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum HexGridError {
    /// Out-of-domain input to an otherwise pure operation
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The requested operation isn't implemented for this configuration. This
    /// is a permanent capability gap, see [Capability].
    #[error("not supported: {0}")]
    NotSupported(Capability),

    /// A cell was inserted twice into the same grid. This indicates a bug in
    /// grid population rather than bad input.
    #[error("grid already contains a cell at cube {cube} / offset {offset}")]
    DuplicateCell {
        cube: CubeCoordinate,
        offset: OffsetCoordinate,
    },
}

impl HexGridError {
    pub(crate) fn invalid_argument(
        name: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Capabilities that are declared in the grid's interface but aren't
/// implemented. Use [crate::Orientation::supports] or
/// [crate::HexagonGrid::supports] to check for these before calling into
/// something that would fail.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum Capability {
    #[display(fmt = "cartesian conversion on flat-topped grids")]
    CartesianConversion,
    #[display(fmt = "circular grid population")]
    CircularPopulation,
}
