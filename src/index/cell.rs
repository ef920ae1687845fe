use super::{
    Children, Compact, DirectedEdgeIndex, GridPathCells, IndexMode, Triangle,
    Vertex, VertexIndex,
};
use crate::{
    coord::{CoordIJ, CoordIJK, FaceIJK},
    error::{CompactionError, InvalidCellIndex, LocalIjError},
    grid,
    index::bits,
    resolution, BaseCell, Boundary, Direction, FaceSet, LocalIJ, LocalIJK,
    Resolution, CCW, CW, DIRECTION_BITSIZE, EARTH_RADIUS_KM, NUM_HEX_VERTS,
    NUM_PENT_VERTS,
};
use std::{cmp::Ordering, fmt, num::NonZeroU64, str::FromStr};

/// Lookup table for number of children for hexagonal cells.
// 7.pow(resolution_delta)
const HEXAGON_CHILDREN_COUNTS: [u64; 16] = [
    1,
    7,
    49,
    343,
    2401,
    16_807,
    117_649,
    823_543,
    5_764_801,
    40_353_607,
    282_475_249,
    1_977_326_743,
    13_841_287_201,
    96_889_010_407,
    678_223_072_849,
    4_747_561_509_943,
];

/// Lookup table for number of children for pentagonal cells.
// 1 + 5 * (7.pow(resolution delta) - 1) / 6
const PENTAGON_CHILDREN_COUNTS: [u64; 16] = [
    1,
    6,
    41,
    286,
    2001,
    14_006,
    98_041,
    686_286,
    4_804_001,
    33_628_006,
    235_396_041,
    1_647_772_286,
    11_534_406_001,
    80_740_842_006,
    565_185_894_041,
    3_956_301_258_286,
];

// -----------------------------------------------------------------------------

/// Represents a cell (hexagon or pentagon) in the hexring grid system at a
/// particular resolution.
///
/// The index is encoded on 64-bit with the following bit layout:
///
/// ```text
///  ┏━┳━━━┳━━━━┳━━━━┳━━━━━━━┳━━━┳━━━┳━┈┈┈┈┈┈┈┈━┳━━━┳━━━┓
///  ┃U┃ M ┃ U  ┃ R  ┃ B     ┃C₀ ┃C₁ ┃          ┃C₁₄┃C₁₅┃
///  ┗━┻━━━┻━━━━┻━━━━┻━━━━━━━┻━━━┻━━━┻━┈┈┈┈┈┈┈┈━┻━━━┻━━━┛
/// 64 63 59   56   52      45  42  39          6   3   0
/// ```
///
/// Where:
/// - `U` are unused reserved bit, always set to 0 (bit 63 and bits 56-58).
/// - `M` is the index mode, always set to 1, coded on 4 bits (59-62).
/// - `R` is the cell resolution, in [0; 15], coded on 4 bits (52-55).
/// - `B` is the base cell, in [0; 121], coded on 7 bits (45-51)
/// - `C` are cells, coded on 3 bits each, with either a value in [0; 6] or the
///   pattern `0b111` if unused.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct CellIndex(NonZeroU64);

impl CellIndex {
    /// Returns the resolution of the index.
    ///
    /// # Example
    ///
    /// ```
    /// let index = hexring::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.resolution(), hexring::Resolution::Ten);
    /// # Ok::<(), hexring::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub const fn resolution(self) -> Resolution {
        bits::get_resolution(self.0.get())
    }

    /// Returns the base cell of the index.
    ///
    /// # Example
    ///
    /// ```
    /// let index = hexring::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.base_cell(), hexring::BaseCell::try_from(15)?);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub const fn base_cell(self) -> BaseCell {
        let value = bits::get_base_cell(self.0.get());
        // SAFETY: `CellIndex` only contains valid base cell (invariant).
        BaseCell::new_unchecked(value)
    }

    /// Returns true if this index represents a pentagonal cell.
    ///
    /// # Example
    ///
    /// ```
    /// let index = hexring::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert!(!index.is_pentagon());
    /// # Ok::<(), hexring::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub fn is_pentagon(self) -> bool {
        let bits = self.0.get();
        let base = self.base_cell();

        let resolution = usize::from(bits::get_resolution(bits));
        let unused_count = usize::from(resolution::MAX) - resolution;
        let unused_bitsize = unused_count * DIRECTION_BITSIZE;
        let dirs_mask = (1 << (resolution * DIRECTION_BITSIZE)) - 1;
        let dirs = (bits >> unused_bitsize) & dirs_mask;

        // Pentagonal cells always have all directions but the base one set to
        // 0.
        base.is_pentagon() && dirs == 0
    }

    /// Returns the maximum number of icosahedron faces the index may intersect.
    ///
    /// # Example
    ///
    /// ```
    /// let index = hexring::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.max_face_count(), 2);
    /// # Ok::<(), hexring::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub fn max_face_count(self) -> usize {
        // A pentagon always intersects 5 faces.
        if self.is_pentagon() {
            5
        // An hexagon never intersects more than 2 (but may only intersect 1).
        } else {
            2
        }
    }

    /// Returns the cell at the given resolution in the index, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use hexring::{CellIndex, Direction, Resolution};
    ///
    /// let index = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.direction_at(Resolution::Five), Some(Direction::K));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn direction_at(self, resolution: Resolution) -> Option<Direction> {
        (resolution != Resolution::Zero && resolution <= self.resolution())
            .then(|| {
                let value = bits::get_direction(self.0.get(), resolution);
                Direction::new_unchecked(value)
            })
    }

    /// Returns the parent, at the specified resolution, of the cell.
    ///
    /// # Example
    ///
    /// ```
    /// use hexring::{CellIndex, Resolution};
    ///
    /// let index = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(
    ///     index.parent(Resolution::Five),
    ///     CellIndex::try_from(0x851fb467fffffff).ok()
    /// );
    /// # Ok::<(), hexring::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub fn parent(self, resolution: Resolution) -> Option<Self> {
        (resolution <= self.resolution()).then(|| {
            let bits = bits::set_resolution(self.0.get(), resolution);
            Self::new_unchecked(bits::set_unused(bits, resolution))
        })
    }

    /// Returns the center child index at the specified resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use hexring::{CellIndex, Resolution};
    ///
    /// let index = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(
    ///     index.center_child(Resolution::Fifteen),
    ///     CellIndex::try_from(0x8f1fb46622d8000).ok()
    /// );
    /// # Ok::<(), hexring::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub fn center_child(self, resolution: Resolution) -> Option<Self> {
        (resolution >= self.resolution()).then(|| {
            let start = self.resolution().direction_offset();
            let stop = resolution.direction_offset();
            let mask = (1 << (start - stop)) - 1;

            let bits = bits::set_resolution(self.0.get(), resolution);
            Self::new_unchecked(bits & !(mask << stop))
        })
    }

    /// Returns the exact number of children for a cell at a given resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use hexring::{CellIndex, Resolution};
    ///
    /// let index = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.children_count(Resolution::Fifteen), 16_807);
    /// # Ok::<(), hexring::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    // In this case, `mut-let-if` is faster than the idiomatic `let-if-else`.
    // Actually 12.5% faster for hexagons and 3.5% slower for pentagons.
    // Given that hexagons are way more common than pentagons, worth it.
    #[allow(clippy::useless_let_if_seq)]
    pub fn children_count(self, resolution: Resolution) -> u64 {
        let resolution = usize::from(resolution);
        let curr_resolution = usize::from(bits::get_resolution(self.0.get()));
        if curr_resolution > resolution {
            return 0;
        }
        if curr_resolution == resolution {
            return 1;
        }

        let n = resolution - curr_resolution;
        let mut res = HEXAGON_CHILDREN_COUNTS[n];
        if self.is_pentagon() {
            res = PENTAGON_CHILDREN_COUNTS[n];
        }
        res
    }

    /// Returns all the base cell indexes.
    ///
    /// # Example
    ///
    /// ```
    /// let cells = hexring::CellIndex::base_cells().collect::<Vec<_>>();
    /// ```
    pub fn base_cells() -> impl Iterator<Item = Self> {
        // Template for a resolution 0 index
        // mode = CELL, resolution = 0, all children unset.
        const TEMPLATE: u64 = 0x0800_1fff_ffff_ffff;

        (0..BaseCell::count()).map(|base_cell| {
            Self::new_unchecked(bits::set_base_cell(TEMPLATE, base_cell))
        })
    }

    pub(crate) fn new_unchecked(value: u64) -> Self {
        debug_assert!(Self::try_from(value).is_ok(), "invalid cell index");
        Self(NonZeroU64::new(value).expect("valid cell index"))
    }

    /// Returns an iterator over the children of this cell, at the given
    /// resolution.
    ///
    /// Yields nothing if `resolution` is coarser than the cell itself.
    pub fn children(self, resolution: Resolution) -> impl Iterator<Item = Self> {
        Children::new(self, resolution)
    }

    /// Returns the number of 60° counterclockwise rotations to apply to any of
    /// this cell's vertex numbers to convert into the rotation system of the
    /// base cell.
    pub(crate) fn vertex_rotations(self) -> u8 {
        let fijk = FaceIJK::from(self);
        let base_cell = self.base_cell();
        let mut rotations = u8::from(base_cell.is_cw_offset(fijk.face));

        if base_cell.is_pentagon() {
            let jk = Direction::JK.axe();
            let ik = Direction::IK.axe();
            let leading = bits::first_axe(self.into());

            if leading == jk {
                rotations += 1;
            } else if leading == ik {
                rotations += 5;
            }
        }

        rotations += 3 * (u8::from(self.resolution()) % 2);

        rotations % 6
    }

    /// Returns the index of the requested vertex of this cell, if it exists.
    ///
    /// # Example
    ///
    /// ```
    /// use hexring::{CellIndex, Vertex};
    ///
    /// let index = CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert!(index.vertex(Vertex::try_from(0)?).is_some());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn vertex(self, vertex: Vertex) -> Option<VertexIndex> {
        let vertex_num = u8::from(vertex);
        let max_vertex = if self.is_pentagon() {
            NUM_PENT_VERTS
        } else {
            NUM_HEX_VERTS
        };

        if vertex_num >= max_vertex {
            return None;
        }

        let bits = bits::set_vertex(
            bits::set_mode(self.0.get(), IndexMode::Vertex),
            vertex_num,
        );

        Some(VertexIndex::new_unchecked(bits))
    }

    /// Returns an iterator over every topological vertex of this cell.
    ///
    /// # Example
    ///
    /// ```
    /// let index = hexring::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.vertexes().count(), 6);
    /// # Ok::<(), hexring::error::InvalidCellIndex>(())
    /// ```
    pub fn vertexes(self) -> impl Iterator<Item = VertexIndex> {
        let count = if self.is_pentagon() {
            NUM_PENT_VERTS
        } else {
            NUM_HEX_VERTS
        };

        (0..count).map(move |v| {
            self.vertex(Vertex::new_unchecked(v))
                .expect("valid vertex number")
        })
    }

    /// Returns the set of icosahedron faces this cell intersects.
    ///
    /// # Example
    ///
    /// ```
    /// let index = hexring::CellIndex::try_from(0x089283470803ffff)?;
    /// assert_eq!(index.icosahedron_faces().len(), 1);
    /// # Ok::<(), hexring::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub fn icosahedron_faces(self) -> FaceSet {
        let mut faces = FaceSet::new();
        let resolution = self.resolution();
        let is_pentagon = self.is_pentagon();
        let vertex_count = if is_pentagon {
            NUM_PENT_VERTS
        } else {
            NUM_HEX_VERTS
        };

        let mut center = FaceIJK::from(self);
        faces.insert(center.face);

        // Pentagon or not, most cells only intersect a single face: we can
        // stop as soon as the budget is exhausted.
        if self.max_face_count() == 1 {
            return faces;
        }

        let mut vertices = [FaceIJK::default(); NUM_HEX_VERTS as usize];
        let adjusted_resolution = center.vertices(resolution, &mut vertices);

        for vertex in &mut vertices[..usize::from(vertex_count)] {
            if is_pentagon {
                vertex.adjust_pentagon_vertex_overage(adjusted_resolution);
            } else {
                vertex.adjust_overage_class2::<true>(adjusted_resolution, false);
            }
            faces.insert(vertex.face);

            if faces.len() == self.max_face_count() {
                break;
            }
        }

        faces
    }

    /// Returns the cell boundary, in latitude/longitude coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// let index = hexring::CellIndex::try_from(0x8a1fb46622dffff)?;
    /// assert_eq!(index.boundary().len(), 6);
    /// # Ok::<(), hexring::error::InvalidCellIndex>(())
    /// ```
    #[must_use]
    pub fn boundary(self) -> Boundary {
        let fijk = FaceIJK::from(self);
        let resolution = self.resolution();

        if self.is_pentagon() {
            fijk.pentagon_boundary(
                resolution,
                Vertex::new_unchecked(0),
                NUM_PENT_VERTS,
            )
        } else {
            fijk.hexagon_boundary(
                resolution,
                Vertex::new_unchecked(0),
                NUM_HEX_VERTS,
            )
        }
    }

    /// Returns the exact area of the cell, in radians².
    #[must_use]
    pub fn area_rads2(self) -> f64 {
        let boundary = self.boundary();

        (1..boundary.len() - 1)
            .map(|i| {
                Triangle::new(boundary[0], boundary[i], boundary[i + 1]).area()
            })
            .sum()
    }

    /// Returns the exact area of the cell, in km².
    #[must_use]
    pub fn area_km2(self) -> f64 {
        self.area_rads2() * EARTH_RADIUS_KM * EARTH_RADIUS_KM
    }

    /// Returns the exact area of the cell, in m².
    #[must_use]
    pub fn area_m2(self) -> f64 {
        self.area_km2() * 1_000_000.
    }

    /// Returns all the directed edges emanating from this cell.
    pub fn edges(self) -> impl Iterator<Item = DirectedEdgeIndex> {
        let min_edge = 1 + u8::from(self.is_pentagon());

        (min_edge..=6).map(move |edge| {
            DirectedEdgeIndex::new_unchecked(bits::set_edge(
                bits::set_mode(self.0.get(), IndexMode::DirectedEdge),
                edge,
            ))
        })
    }

    /// Returns the directed edge from this cell to `destination`, if the two
    /// cells are neighbors.
    #[must_use]
    pub fn directed_edge_to(self, destination: Self) -> Option<DirectedEdgeIndex> {
        let direction = grid::direction_for_neighbor(self, destination)?;
        let bits = bits::set_edge(
            bits::set_mode(self.0.get(), IndexMode::DirectedEdge),
            u8::from(direction),
        );

        Some(DirectedEdgeIndex::new_unchecked(bits))
    }

    /// Returns whether this cell and `other` are neighbors.
    #[must_use]
    pub fn is_neighbor_with(self, other: Self) -> bool {
        self.resolution() == other.resolution()
            && self != other
            && grid::direction_for_neighbor(self, other).is_some()
    }

    /// Returns the position of this cell within an ordered traversal of all
    /// the children of `parent` at this cell's resolution.
    ///
    /// The reverse operation of [`CellIndex::child_at`].
    #[must_use]
    pub fn child_position(self, parent_resolution: Resolution) -> Option<u64> {
        let parent = self.parent(parent_resolution)?;

        parent
            .children(self.resolution())
            .position(|cell| cell == self)
            .map(|position| position as u64)
    }

    /// Returns the child cell at `position` within an ordered traversal of
    /// all the children of this cell at `child_resolution`.
    ///
    /// The reverse operation of [`CellIndex::child_position`].
    #[must_use]
    pub fn child_at(self, position: u64, child_resolution: Resolution) -> Option<Self> {
        if child_resolution < self.resolution() {
            return None;
        }
        let position = usize::try_from(position).ok()?;

        self.children(child_resolution).nth(position)
    }

    /// Returns the distance, in number of grid cells, between this cell and
    /// `other`.
    ///
    /// Returns an error if the two cells are too far apart for local
    /// coordinates to be meaningful, or if pentagon distortion makes the
    /// computation impossible.
    pub fn grid_distance(self, other: Self) -> Result<i32, LocalIjError> {
        let src = self.to_local_ijk(self)?;
        let dst = other.to_local_ijk(self)?;

        Ok(src.coord().distance(dst.coord()))
    }

    /// Returns the cells within grid distance `k` of this cell, paired with
    /// their distance.
    ///
    /// This is the safe (allocating) version: it always succeeds, even in the
    /// presence of pentagonal distortion.
    pub fn grid_disk_distances(self, k: u32) -> impl Iterator<Item = (Self, u32)> {
        grid::DiskDistancesSafe::new(self, k)
    }

    /// Returns the cells within grid distance `k` of this cell.
    ///
    /// This is the safe (allocating) version: it always succeeds, even in the
    /// presence of pentagonal distortion.
    pub fn grid_disk_safe(self, k: u32) -> impl Iterator<Item = Self> {
        self.grid_disk_distances(k).map(|(cell, _)| cell)
    }

    /// Returns the cells within grid distance `k` of this cell, paired with
    /// their distance.
    ///
    /// This is the fast (non-allocating) version: each item is `None` if
    /// pentagonal distortion was encountered, in which case the caller should
    /// fall back on [`CellIndex::grid_disk_distances`].
    pub fn grid_disk_fast(
        self,
        k: u32,
    ) -> impl Iterator<Item = Option<Self>> {
        grid::DiskDistancesUnsafe::new(self, k)
            .map(|item| item.map(|(cell, _)| cell))
    }

    /// Returns the cells at exactly grid distance `k` of this cell.
    ///
    /// Returns `None` upfront if this cell is a pentagon. Yields `None` items
    /// if pentagonal distortion is encountered while walking the ring.
    pub fn grid_ring_fast(
        self,
        k: u32,
    ) -> Option<impl Iterator<Item = Option<Self>>> {
        grid::RingUnsafe::new(self, k)
    }

    /// Returns the cells making up a grid path from this cell to `other`,
    /// both included.
    pub fn grid_path_cells(
        self,
        other: Self,
    ) -> Result<impl Iterator<Item = Result<Self, LocalIjError>>, LocalIjError>
    {
        GridPathCells::new(self, other)
    }

    /// Returns the exact number of cells in the grid path from this cell to
    /// `other`, both included.
    pub fn grid_path_cells_size(self, other: Self) -> Result<i64, LocalIjError> {
        Ok(i64::from(self.grid_distance(other)?) + 1)
    }

    /// Returns the `IJK` coordinates of this cell in the local coordinate
    /// system anchored at `origin`.
    ///
    /// Local coordinates are only meaningful in the neighborhood of the
    /// anchor: both cells must share the same resolution, and be close enough
    /// (typically within a couple of base cells) of one another.
    pub fn to_local_ijk(self, origin: Self) -> Result<LocalIJK, LocalIjError> {
        if self.resolution() != origin.resolution() {
            return Err(LocalIjError::ResolutionMismatch);
        }

        let origin_base_cell = origin.base_cell();
        let base_cell = self.base_cell();
        let origin_coord = cell_to_base_coord(origin);
        let cell_coord = cell_to_base_coord(self);

        if origin_base_cell == base_cell {
            let coord = (cell_coord - origin_coord).normalize();
            return Ok(LocalIJK { anchor: origin, coord });
        }

        // Local coordinates are only defined up to 2 grid steps away from the
        // anchor's base cell: find a path of at most 2 base cell neighbor
        // hops, or bail out.
        let (direction, rotations) = origin_base_cell
            .direction(base_cell)
            .map(|direction| {
                (direction, origin_base_cell.neighbor_rotation(direction))
            })
            .or_else(|| {
                Direction::iter()
                    .filter(|&d| d != Direction::Center)
                    .find_map(|d1| {
                        let mid = origin_base_cell.neighbor(d1)?;
                        let d2 = mid.direction(base_cell)?;
                        let rotations = (origin_base_cell.neighbor_rotation(d1)
                            + mid.neighbor_rotation(d2))
                            % 6;

                        Some((d1, rotations))
                    })
            })
            .ok_or_else(|| {
                LocalIjError::from(crate::error::HexGridError::new(
                    "base cells too far apart",
                ))
            })?;

        // Project the hop between the two base cells into the substrate units
        // of this cell's resolution, exactly as each indexing digit is scaled
        // when going down the aperture 7 hierarchy.
        let mut offset = direction.coordinate();
        for res in Resolution::range(Resolution::One, self.resolution()) {
            offset = if res.is_class3() {
                offset.down_aperture7::<{ CCW }>()
            } else {
                offset.down_aperture7::<{ CW }>()
            };
        }

        let rotated = (0..rotations)
            .fold(cell_coord, |acc, _| acc.rotate60::<{ CCW }>());
        let coord = (rotated + offset - origin_coord).normalize();

        Ok(LocalIJK { anchor: origin, coord })
    }

    /// Returns the `IJ` coordinates of this cell in the local coordinate
    /// system anchored at `origin`.
    pub fn to_local_ij(self, origin: Self) -> Result<LocalIJ, LocalIjError> {
        let ijk = self.to_local_ijk(origin)?;

        Ok(LocalIJ {
            anchor: origin,
            coord: CoordIJ::from(ijk.coord()),
        })
    }

    /// Compacts a set of cell indexes, all at the same resolution, into the
    /// smallest equivalent mixed-resolution set.
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains duplicate indexes or indexes of
    /// heterogeneous resolutions.
    pub fn compact(
        cells: impl IntoIterator<Item = Self>,
    ) -> Result<Compact, CompactionError> {
        let mut frontier: Vec<Self> = cells.into_iter().collect();
        if frontier.is_empty() {
            return Ok(Compact::new(frontier));
        }

        frontier.sort_unstable();

        let resolution = frontier[0].resolution();
        for pair in frontier.windows(2) {
            if pair[0] == pair[1] {
                return Err(CompactionError::DuplicateInput);
            }
        }
        if frontier.iter().any(|cell| cell.resolution() != resolution) {
            return Err(CompactionError::HeterogeneousResolution);
        }

        let mut current_resolution = resolution;
        let mut output = Vec::new();

        while let Some(parent_resolution) = current_resolution.pred() {
            let mut next_frontier = Vec::with_capacity(frontier.len());
            let mut grouped_any = false;
            let mut i = 0;

            while i < frontier.len() {
                let parent = frontier[i]
                    .parent(parent_resolution)
                    .expect("parent cell");
                let count = usize::try_from(
                    parent.children_count(current_resolution),
                )
                .expect("reasonable children count");

                if i + count <= frontier.len()
                    && frontier[i..i + count]
                        .iter()
                        .all(|cell| cell.parent(parent_resolution) == Some(parent))
                {
                    next_frontier.push(parent);
                    grouped_any = true;
                    i += count;
                } else {
                    next_frontier.push(frontier[i]);
                    i += 1;
                }
            }

            if !grouped_any {
                break;
            }

            next_frontier.sort_unstable();
            frontier = next_frontier;
            current_resolution = parent_resolution;
        }

        output.extend(frontier);
        output.sort_unstable();

        Ok(Compact::new(output))
    }

    /// Expands a (possibly mixed-resolution) set of cell indexes into the set
    /// of cells it represents at `resolution`.
    ///
    /// Cells already finer than `resolution` yield nothing.
    pub fn uncompact(
        cells: impl IntoIterator<Item = Self>,
        resolution: Resolution,
    ) -> impl Iterator<Item = Self> {
        cells
            .into_iter()
            .flat_map(move |cell| cell.children(resolution))
    }
}

/// Returns the `IJK` coordinates of `cell` within its own base cell's
/// coordinate system, anchored on the base cell center.
fn cell_to_base_coord(cell: CellIndex) -> CoordIJK {
    let resolution = cell.resolution();
    let mut coord = CoordIJK::new(0, 0, 0);

    for res in Resolution::range(Resolution::One, resolution) {
        let digit = Direction::new_unchecked(bits::get_direction(cell.into(), res));
        coord = if res.is_class3() {
            coord.down_aperture7::<{ CCW }>()
        } else {
            coord.down_aperture7::<{ CW }>()
        };
        coord = coord.neighbor(digit);
    }

    coord
}

impl Ord for CellIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare while ignoring the resolution to get the right ordering.
        // This is useful when building hierarchical tree of hexring cells.
        //
        // To understand why, let's take an example with these two cells:
        // - Cell A: 0x89194e69d4fffff (resolution  9, 12-5-1-6-3-2-3-5-2-3)
        // - Cell B: 0x8a194e699ab7fff (resolution 10, 12-5-1-6-3-2-3-1-5-2-6)
        //
        // If we don't ignore the resolution, cell A comes BEFORE cell B
        // (because the resolution is lower AND resolution comes before the
        // cells in the bit layout, thus has more weight).
        //
        // By ignoring the resolution bits we get the right ordering.
        (bits::clr_resolution(self.0.get()))
            .cmp(&bits::clr_resolution(other.0.get()))
    }
}

impl PartialOrd for CellIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<CellIndex> for u64 {
    fn from(value: CellIndex) -> Self {
        value.0.get()
    }
}

impl TryFrom<u64> for CellIndex {
    type Error = InvalidCellIndex;

    // Basically a simpler/faster version of full index validation.
    //
    // Simpler because here we focus only on the trailing 56-bit part.
    // Faster because no loops, just plain ol' bitwise operationss :)
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if (value >> 56) & 0b1000_0111 != 0 {
            return Err(Self::Error::new(Some(value), "tainted reserved bits"));
        }
        if bits::get_mode(value) != u8::from(IndexMode::Cell) {
            return Err(Self::Error::new(Some(value), "invalid index mode"));
        }

        let base = BaseCell::try_from(bits::get_base_cell(value))
            .map_err(|_| Self::Error::new(Some(value), "invalid base cell"))?;

        // Resolution is always valid: coded on 4 bits, valid range is [0; 15].
        let resolution = usize::from(bits::get_resolution(value));

        // Check that we have a tail of unused cells  after `resolution` cells.
        //
        // We expect every bit to be 1 in the tail (because unused cells are
        // represented by `0b111`), i.e. every bit set to 0 after a NOT.
        let unused_count = usize::from(resolution::MAX) - resolution;
        let unused_bitsize = unused_count * DIRECTION_BITSIZE;
        let unused_mask = (1 << unused_bitsize) - 1;
        if (!value) & unused_mask != 0 {
            return Err(Self::Error::new(
                Some(value),
                "invalid unused direction pattern",
            ));
        }

        // Check that we have `resolution` valid cells (no unused ones).
        let dirs_mask = (1 << (resolution * DIRECTION_BITSIZE)) - 1;
        let dirs = (value >> unused_bitsize) & dirs_mask;
        if has_unused_direction(dirs) {
            return Err(Self::Error::new(
                Some(value),
                "unexpected unused direction",
            ));
        }

        // Check for pentagons with deleted subsequence.
        if base.is_pentagon() && resolution != 0 {
            // Move directions to the front, so that we can count leading
            // zeroes.
            let offset = 64 - (resolution * DIRECTION_BITSIZE);

            // Find the position of the first bit set, if it's a multiple of 3
            // that means we have a K axe as the first non-center direction,
            // which is forbidden.
            if ((dirs << offset).leading_zeros() + 1) % 3 == 0 {
                return Err(Self::Error::new(
                    Some(value),
                    "pentagonal cell index with a deleted subsequence",
                ));
            }
        }

        // XXX: 0 is rejected by the mode check (mode cannot be 0).
        Ok(Self(NonZeroU64::new(value).expect("non-zero cell index")))
    }
}

impl FromStr for CellIndex {
    type Err = InvalidCellIndex;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16)
            .map_err(|_| Self::Err {
                value: None,
                reason: "invalid 64-bit hex number",
            })
            .and_then(Self::try_from)
    }
}

impl fmt::Debug for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:015o} ({})",
            self.base_cell(),
            u64::from(*self) & bits::DIRECTIONS_MASK,
            self
        )
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self)
    }
}

impl fmt::Binary for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::Octal for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

// -----------------------------------------------------------------------------

/// Checks if there is at least one unused direction in the given directions.
#[inline(always)]
#[rustfmt::skip] // Keep constants aligned for readability.
#[allow(clippy::unusual_byte_groupings)] // Grouping by 3-bit is better here.
const fn has_unused_direction(dirs: u64) -> bool {
    // Unused directions are represented by `0b111`, so we actually want to
    // check the absence of this pattern.
    // This is akin to splitting the data into chunks of 3 bits and looking for
    // the presence of a three-1 triplet.
    //
    // Now, looking for `0b111` is clearly not a common task, but we can twist
    // the problem a bit to find back our footing ;)
    // If we apply a NOT on our data we're now looking for `0b000` which is
    // awfully similar to the research of a nul byte, a well-known task in
    // C-land thanks to null-terminated strings.
    //
    // STOP, Archeology time!
    //
    // Let's dive into the annals of the Old Gods, a.k.a. comp.lang.c, and
    // extract this golden nugget: Alan Mycroft's null-byte detection algorithm,
    // posted in 1987
    // See: https://groups.google.com/forum/#!original/comp.lang.c/2HtQXvg7iKc/xOJeipH6KLMJ
    //
    // The spell is: (value - lo_magic) & (!value & hi_magic)
    //
    // Here's a quick rundown on how it works:
    //
    // - The first part, `value - lo_magic`, will make sure that the MSB (most
    //   significant bit) of each chunk is set if:
    //   * the chunk is null (`0b000 - 0b001` wraps around to `0b111`).
    //   * the MSB + another bit are already set, e.g. `0b101`. That's because
    //     the lowest bit absorb the subtraction and the highest one is left
    //     untouched (e.g. `0b101 - 0b001 = 0b100`)
    // - The second part, `!value & hi_magic`, will set the MSB of each chunk
    //   only if the MSB was unset in the original value.
    //
    // By ANDing both parts, we get a non-zero value if there was at least one
    // null chunk: the first part selects null chunks and the ones with the MSB
    // already set whereas the second part filter out the latter, thus leaving
    // only null chunk with a bit set.
    //
    // A little example:
    //
    //     dirs   = 001 010 111 011 110 110 000
    //     !dirs  = 110 101 000 100 001 001 111 // negate to convert 111 to 000.
    //     part 1 = 101 011 111 011 000 000 110
    //     part 2 = 000 000 100 000 100 100 000
    //     result = 000 000 100 000 000 000 000
    //
    // By tweaking this a bit to works on 64-bit AND on triplet instead of
    // bytes, the magic occurs :)
    const LO_MAGIC: u64 = 0b001_001_001_001_001_001_001_001_001_001_001_001_001_001_001;
    const HI_MAGIC: u64 = 0b100_100_100_100_100_100_100_100_100_100_100_100_100_100_100;

    ((!dirs - LO_MAGIC) & (dirs & HI_MAGIC)) != 0
}

#[cfg(test)]
#[path = "./cell_tests.rs"]
mod tests;
