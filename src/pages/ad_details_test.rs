use super::*;

#[test]
fn next_image_index_advances_and_wraps() {
    assert_eq!(next_image_index(0, 3), 1);
    assert_eq!(next_image_index(1, 3), 2);
    assert_eq!(next_image_index(2, 3), 0);
}

#[test]
fn prev_image_index_retreats_and_wraps() {
    assert_eq!(prev_image_index(2, 3), 1);
    assert_eq!(prev_image_index(1, 3), 0);
    assert_eq!(prev_image_index(0, 3), 2);
}

#[test]
fn single_image_carousel_stays_put() {
    assert_eq!(next_image_index(0, 1), 0);
    assert_eq!(prev_image_index(0, 1), 0);
}

#[test]
fn empty_carousel_indices_stay_zero() {
    assert_eq!(next_image_index(0, 0), 0);
    assert_eq!(prev_image_index(0, 0), 0);
}
