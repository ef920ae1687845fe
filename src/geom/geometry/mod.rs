mod bbox;
mod geometrycollection;
mod line;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
mod rect;
mod ring;
mod triangle;

use ring::{CellBoundary, Ring};

pub use geometrycollection::GeometryCollection;
pub use line::Line;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use rect::Rect;
pub use triangle::Triangle;

use crate::{
    error::InvalidGeometry,
    geom::{PolyfillConfig, ToCells},
    CellIndex,
};
use std::boxed::Box;

// ----------------------------------------------------------------------------

// Check that the coordinate are finite and in a legit range.
fn coord_is_valid(coord: geo::Coord) -> bool {
    use crate::TWO_PI;
    use core::f64::consts::PI;

    coord.x.is_finite()
        && coord.y.is_finite()
        && coord.x >= -TWO_PI
        && coord.x <= TWO_PI
        && coord.y >= -PI
        && coord.y <= PI
}

// ----------------------------------------------------------------------------

/// A single geometry, owning its own coordinates.
///
/// Mirrors [`geo::Geometry`], minus the recursive `GeometryCollection`
/// flattening: every variant carries the crate's own checked wrapper type.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Geometry {
    /// A single point.
    Point(Point),
    /// A line segment made of exactly two coordinates.
    Line(Line),
    /// A path of two or more coordinates.
    LineString(LineString),
    /// A bounded area.
    Polygon(Polygon),
    /// A collection of points.
    MultiPoint(MultiPoint),
    /// A collection of line strings.
    MultiLineString(MultiLineString),
    /// A collection of polygons.
    MultiPolygon(MultiPolygon),
    /// A heterogeneous collection of geometries.
    GeometryCollection(GeometryCollection),
    /// An axis-aligned bounded rectangle.
    Rect(Rect),
    /// A bounded area defined by three vertices.
    Triangle(Triangle),
}

impl Geometry {
    /// Initializes a new geometry from a geometry whose coordinates are in
    /// radians.
    ///
    /// # Errors
    ///
    /// [`InvalidGeometry`] if the geometry is invalid (e.g. contains
    /// non-finite coordinates).
    pub fn from_radians(
        geometry: geo::Geometry<f64>,
    ) -> Result<Self, InvalidGeometry> {
        match geometry {
            geo::Geometry::Point(geom) => {
                Point::from_radians(geom).map(Self::Point)
            }
            geo::Geometry::Line(geom) => {
                Line::from_radians(geom).map(Self::Line)
            }
            geo::Geometry::LineString(geom) => {
                LineString::from_radians(geom).map(Self::LineString)
            }
            geo::Geometry::Polygon(geom) => {
                Polygon::from_radians(geom).map(Self::Polygon)
            }
            geo::Geometry::MultiPoint(geom) => {
                MultiPoint::from_radians(geom).map(Self::MultiPoint)
            }
            geo::Geometry::MultiLineString(geom) => {
                MultiLineString::from_radians(geom).map(Self::MultiLineString)
            }
            geo::Geometry::MultiPolygon(geom) => {
                MultiPolygon::from_radians(geom).map(Self::MultiPolygon)
            }
            geo::Geometry::GeometryCollection(geom) => {
                GeometryCollection::from_radians(geom)
                    .map(Self::GeometryCollection)
            }
            geo::Geometry::Rect(geom) => {
                Rect::from_radians(geom).map(Self::Rect)
            }
            geo::Geometry::Triangle(geom) => {
                Triangle::from_radians(geom).map(Self::Triangle)
            }
        }
    }

    /// Initializes a new geometry from a geometry whose coordinates are in
    /// degrees.
    ///
    /// # Errors
    ///
    /// [`InvalidGeometry`] if the geometry is invalid (e.g. contains
    /// non-finite coordinates).
    pub fn from_degrees(
        geometry: geo::Geometry<f64>,
    ) -> Result<Self, InvalidGeometry> {
        match geometry {
            geo::Geometry::Point(geom) => {
                Point::from_degrees(geom).map(Self::Point)
            }
            geo::Geometry::Line(geom) => {
                Line::from_degrees(geom).map(Self::Line)
            }
            geo::Geometry::LineString(geom) => {
                LineString::from_degrees(geom).map(Self::LineString)
            }
            geo::Geometry::Polygon(geom) => {
                Polygon::from_degrees(geom).map(Self::Polygon)
            }
            geo::Geometry::MultiPoint(geom) => {
                MultiPoint::from_degrees(geom).map(Self::MultiPoint)
            }
            geo::Geometry::MultiLineString(geom) => {
                MultiLineString::from_degrees(geom).map(Self::MultiLineString)
            }
            geo::Geometry::MultiPolygon(geom) => {
                MultiPolygon::from_degrees(geom).map(Self::MultiPolygon)
            }
            geo::Geometry::GeometryCollection(geom) => {
                GeometryCollection::from_degrees(geom)
                    .map(Self::GeometryCollection)
            }
            geo::Geometry::Rect(geom) => {
                Rect::from_degrees(geom).map(Self::Rect)
            }
            geo::Geometry::Triangle(geom) => {
                Triangle::from_degrees(geom).map(Self::Triangle)
            }
        }
    }
}

impl From<Geometry> for geo::Geometry<f64> {
    fn from(value: Geometry) -> Self {
        match value {
            Geometry::Point(geom) => Self::Point(geom.into()),
            Geometry::Line(geom) => Self::Line(geom.into()),
            Geometry::LineString(geom) => Self::LineString(geom.into()),
            Geometry::Polygon(geom) => {
                Self::Polygon(polygon_into_geo(geom))
            }
            Geometry::MultiPoint(geom) => Self::MultiPoint(geom.into()),
            Geometry::MultiLineString(geom) => {
                Self::MultiLineString(geom.into())
            }
            Geometry::MultiPolygon(geom) => Self::MultiPolygon(geom.into()),
            Geometry::GeometryCollection(geom) => {
                Self::GeometryCollection(geom.into())
            }
            Geometry::Rect(geom) => Self::Rect(geom.into()),
            Geometry::Triangle(geom) => Self::Triangle(geom.into()),
        }
    }
}

// `Polygon` doesn't implement `Into<geo::Polygon>` directly since its
// boundary is split between an exterior and interior `Ring`s; go through the
// public accessors instead.
fn polygon_into_geo(polygon: Polygon) -> geo::Polygon<f64> {
    geo::Polygon::new(polygon.exterior().clone(), polygon.interiors_vec())
}

impl TryFrom<Geometry> for Polygon {
    type Error = InvalidGeometry;

    fn try_from(value: Geometry) -> Result<Self, Self::Error> {
        match value {
            Geometry::Polygon(geom) => Ok(geom),
            _ => Err(InvalidGeometry::new("not a polygon")),
        }
    }
}

impl ToCells for Geometry {
    fn max_cells_count(&self, config: PolyfillConfig) -> usize {
        match self {
            Self::Point(geom) => geom.max_cells_count(config),
            Self::Line(geom) => geom.max_cells_count(config),
            Self::LineString(geom) => geom.max_cells_count(config),
            Self::Polygon(geom) => geom.max_cells_count(config),
            Self::MultiPoint(geom) => geom.max_cells_count(config),
            Self::MultiLineString(geom) => geom.max_cells_count(config),
            Self::MultiPolygon(geom) => geom.max_cells_count(config),
            Self::GeometryCollection(geom) => geom.max_cells_count(config),
            Self::Rect(geom) => geom.max_cells_count(config),
            Self::Triangle(geom) => geom.max_cells_count(config),
        }
    }

    fn to_cells(
        &self,
        config: PolyfillConfig,
    ) -> Box<dyn Iterator<Item = CellIndex> + '_> {
        match self {
            Self::Point(geom) => geom.to_cells(config),
            Self::Line(geom) => geom.to_cells(config),
            Self::LineString(geom) => geom.to_cells(config),
            Self::Polygon(geom) => geom.to_cells(config),
            Self::MultiPoint(geom) => geom.to_cells(config),
            Self::MultiLineString(geom) => geom.to_cells(config),
            Self::MultiPolygon(geom) => geom.to_cells(config),
            Self::GeometryCollection(geom) => geom.to_cells(config),
            Self::Rect(geom) => geom.to_cells(config),
            Self::Triangle(geom) => geom.to_cells(config),
        }
    }
}
