use super::{InvalidGeometry, LocalIjError};
use core::fmt;

/// Errors occurring while plotting lines onto the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlotterError {
    /// The input line's geometry is invalid.
    Geometry(InvalidGeometry),
    /// The requested path could not be resolved to a sequence of cells.
    Path(LocalIjError),
}

impl fmt::Display for PlotterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(err) => write!(f, "{err}"),
            Self::Path(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlotterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            Self::Path(err) => Some(err),
        }
    }
}

impl From<InvalidGeometry> for PlotterError {
    fn from(value: InvalidGeometry) -> Self {
        Self::Geometry(value)
    }
}

impl From<LocalIjError> for PlotterError {
    fn from(value: LocalIjError) -> Self {
        Self::Path(value)
    }
}
