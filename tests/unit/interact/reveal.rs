use super::*;

#[test]
fn fires_once_at_the_threshold() {
    let mut latch = RevealOnce::new(0.3);
    assert!(!latch.observe(0.0));
    assert!(!latch.observe(0.29));
    assert!(!latch.is_revealed());

    assert!(latch.observe(0.3));
    assert!(latch.is_revealed());

    assert!(!latch.observe(1.0));
    assert!(!latch.observe(0.0));
    assert!(latch.is_revealed());
}

#[test]
fn stays_revealed_after_the_target_leaves_view() {
    let mut latch = RevealOnce::new(0.3);
    latch.observe(0.9);
    latch.observe(0.0);
    assert!(latch.is_revealed());
}

#[test]
fn non_finite_observations_never_fire() {
    let mut latch = RevealOnce::new(0.3);
    assert!(!latch.observe(f64::NAN));
    assert!(!latch.observe(f64::INFINITY));
    assert!(!latch.is_revealed());
}
