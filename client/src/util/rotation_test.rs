use super::*;

#[test]
fn next_index_wraps_around() {
    assert_eq!(next_index(0, 3), 1);
    assert_eq!(next_index(2, 3), 0);
}

#[test]
fn next_index_handles_empty_ring() {
    assert_eq!(next_index(5, 0), 0);
}

#[test]
fn follower_runs_one_ahead_of_leader() {
    assert_eq!(follower_index(0, 6), 1);
    assert_eq!(follower_index(5, 6), 0);
}

#[test]
fn visible_slides_skips_first_when_narrow() {
    let slides = ["wide", "a", "b"];
    assert_eq!(visible_slides(&slides, true), &["a", "b"]);
    assert_eq!(visible_slides(&slides, false), &slides);
}

#[test]
fn visible_slides_keeps_single_slide() {
    let slides = ["only"];
    assert_eq!(visible_slides(&slides, true), &["only"]);
}

#[test]
fn clamp_index_bounds() {
    assert_eq!(clamp_index(7, 5), 4);
    assert_eq!(clamp_index(2, 5), 2);
    assert_eq!(clamp_index(3, 0), 0);
}
