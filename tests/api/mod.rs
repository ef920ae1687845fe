mod avg_edge_len;
mod base_cell;
mod directed_edge_index;
mod direction;
mod face;
mod face_set;
#[cfg(feature = "geo")]
mod geom;
mod latlng;
mod vertex_index;

#[test]
fn max_grid_disk_size_overflow() {
    assert_eq!(hexring::max_grid_disk_size(4294967295), 569_707_381_193_162);
}
