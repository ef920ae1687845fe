//! Error types.

mod compaction;
mod hex_grid;
mod invalid_value;
mod localij;
mod resolution_mismatch;

#[cfg(feature = "geo")]
mod dissolution;
#[cfg(feature = "geo")]
mod invalid_geometry;
#[cfg(feature = "geo")]
mod outliner;
#[cfg(feature = "geo")]
mod plotter;

#[cfg(test)]
mod tests;

pub use compaction::CompactionError;
pub use hex_grid::HexGridError;
pub use invalid_value::{
    InvalidBaseCell, InvalidCellIndex, InvalidDirectedEdgeIndex,
    InvalidDirection, InvalidEdge, InvalidFace, InvalidLatLng,
    InvalidResolution, InvalidVertex, InvalidVertexIndex,
};
pub use localij::LocalIjError;
pub use resolution_mismatch::ResolutionMismatch;

#[cfg(feature = "geo")]
pub use dissolution::DissolutionError;
#[cfg(feature = "geo")]
pub use invalid_geometry::InvalidGeometry;
#[cfg(feature = "geo")]
pub use outliner::OutlinerError;
#[cfg(feature = "geo")]
pub use plotter::PlotterError;
