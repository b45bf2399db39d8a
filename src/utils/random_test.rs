use super::random::next_random;
use super::random::next_random_between;

#[test]
fn next_random_stays_below_max() {
    for _ in 0..1000 {
        assert!(next_random(10) < 10);
    }
}

#[test]
fn next_random_with_max_one_is_zero() {
    for _ in 0..100 {
        assert_eq!(next_random(1), 0);
    }
}

#[test]
fn next_random_between_stays_in_range() {
    for _ in 0..1000 {
        let key = next_random_between(5, 10);
        assert!((5..10).contains(&key));
    }
}

#[test]
fn next_random_between_covers_the_range() {
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1000 {
        seen.insert(next_random_between(0, 4));
    }
    assert_eq!(seen.len(), 4);
}
