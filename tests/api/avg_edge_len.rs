use hexring::Resolution;

#[test]
fn km_decreases_with_resolution() {
    let mut prev = Resolution::Zero.edge_length_km();

    for res in 1..=15 {
        let resolution = Resolution::try_from(res).expect("valid resolution");
        let curr = resolution.edge_length_km();

        assert!(curr < prev, "resolution {res} should shrink the average edge");
        prev = curr;
    }
}

#[test]
fn m_is_km_times_a_thousand() {
    for res in 0..=15 {
        let resolution = Resolution::try_from(res).expect("valid resolution");

        assert!(
            (resolution.edge_length_m() - resolution.edge_length_km() * 1000.)
                .abs()
                < 1e-6
        );
    }
}
