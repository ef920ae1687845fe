mod algo;
mod iterator;

pub use algo::{direction_for_neighbor, neighbor_rotations};
pub use iterator::{DiskDistancesSafe, DiskDistancesUnsafe, RingUnsafe};
