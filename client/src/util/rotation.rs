//! Index arithmetic for the decorative banner rotations.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

/// Index after `current` in a ring of `len` slides. Empty rings stay at 0.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index a follower rotation shows when the leader is at `leader`: one ahead.
pub fn follower_index(leader: usize, len: usize) -> usize {
    next_index(leader, len)
}

/// Slides shown by the feed banner: narrow viewports skip the first (wide)
/// image unless it is the only one.
pub fn visible_slides<T>(slides: &[T], narrow: bool) -> &[T] {
    if narrow && slides.len() > 1 { &slides[1..] } else { slides }
}

/// Clamp an index into `0..len`, e.g. after the slide set shrinks.
pub fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index.min(len - 1) }
}
