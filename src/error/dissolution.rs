use core::fmt;

/// Errors occurring while dissolving a set of cell indices into a
/// [`MultiPolygon`](geo::MultiPolygon).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DissolutionError {
    /// Input set contains duplicate indices.
    DuplicateInput,
    /// Input contains a cell whose resolution can't be handled by the
    /// current dissolution mode (e.g. finer than the configured
    /// heterogeneous-set resolution).
    UnsupportedResolution,
}

impl fmt::Display for DissolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::DuplicateInput => write!(f, "duplicate indices"),
            Self::UnsupportedResolution => {
                write!(f, "unsupported resolution")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DissolutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
