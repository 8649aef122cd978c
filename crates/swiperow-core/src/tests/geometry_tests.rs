use super::*;

#[test]
fn derives_anchor_width_and_threshold_from_container() {
    let geometry = SwipeGeometry::new(300.0, 50.0);
    assert_eq!(geometry.anchor_width(), 100.0);
    assert_eq!(geometry.swipe_threshold(), 20.0);
    assert_eq!(geometry.container_width(), 300.0);
    assert_eq!(geometry.item_height(), 50.0);
}

#[test]
fn threshold_is_always_smaller_than_anchor_width() {
    for width in [1.0, 50.0, 320.0, 1920.0, 1e6] {
        let geometry = SwipeGeometry::new(width, 50.0);
        assert!(geometry.swipe_threshold() < geometry.anchor_width());
        assert!(geometry.anchor_width() > 0.0);
    }
}

#[test]
fn non_positive_width_zeroes_derived_values() {
    for width in [0.0, -1.0, -300.0] {
        let geometry = SwipeGeometry::new(width, 50.0);
        assert_eq!(geometry.anchor_width(), 0.0);
        assert_eq!(geometry.swipe_threshold(), 0.0);
        assert_eq!(geometry.container_width(), 0.0);
    }
}

#[test]
fn resize_recomputes_in_place() {
    let mut geometry = SwipeGeometry::new(300.0, 50.0);
    geometry.resize(600.0);
    assert_eq!(geometry.anchor_width(), 200.0);
    assert_eq!(geometry.swipe_threshold(), 40.0);

    // Shrinking to an invalid width degrades to the pre-layout defaults.
    geometry.resize(0.0);
    assert_eq!(geometry.anchor_width(), 0.0);
    assert_eq!(geometry.swipe_threshold(), 0.0);
    assert_eq!(geometry.item_height(), 50.0);
}
