use std::fmt;

/// hexring index modes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(u8)]
#[non_exhaustive]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
pub enum IndexMode {
    /// A hexring Cell (Hexagon/Pentagon) index.
    Cell = 1,
    /// A hexring directed edge (Cell A -> Cell B) index.
    DirectedEdge = 2,
    /// A hexring undirected edge (Cell A <-> Cell B) index.
    UndirectedEdge = 3,
    /// A hexring Vertex (i.e. a single vertex of a hexring Cell).
    Vertex = 4,
}

impl From<IndexMode> for u8 {
    fn from(value: IndexMode) -> Self {
        value as Self
    }
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                Self::Cell => "Cell",
                Self::DirectedEdge => "DirectedEdge",
                Self::UndirectedEdge => "UndirectedEdge",
                Self::Vertex => "Vertex",
            }
        )
    }
}
