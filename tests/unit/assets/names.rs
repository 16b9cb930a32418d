use rand::{SeedableRng, rngs::StdRng};

use super::*;

#[test]
fn from_lines_keeps_last_token_and_skips_blanks() {
    let pool = NamePool::from_lines("1 Barsik\n\n2 Murka\n   \nTom\n");
    let mut names = pool.names.clone();
    names.sort();
    assert_eq!(names, ["Barsik", "Murka", "Tom"]);
}

#[test]
fn names_are_not_reused() {
    let mut pool = NamePool::new(vec!["A".into(), "B".into(), "C".into()]);
    let mut rng = StdRng::seed_from_u64(1);
    let mut drawn: Vec<String> = (0..3).map(|_| pool.next_name(&mut rng, None)).collect();
    drawn.sort();
    assert_eq!(drawn, ["A", "B", "C"]);
    assert_eq!(pool.remaining(), 0);
    assert_eq!(pool.fallbacks_issued(), 0);
}

#[test]
fn exhausted_pool_synthesizes_unique_names() {
    let mut pool = NamePool::new(vec!["Only".into()]);
    let mut rng = StdRng::seed_from_u64(2);
    assert_eq!(pool.next_name(&mut rng, None), "Only");
    assert_eq!(pool.next_name(&mut rng, None), "Cat_1");
    assert_eq!(pool.next_name(&mut rng, Some("GrandKitten ")), "GrandKitten Cat_2");
    assert_eq!(pool.fallbacks_issued(), 2);
}

#[test]
fn prefix_applies_to_real_names() {
    let mut pool = NamePool::new(vec!["Luna".into()]);
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(pool.next_name(&mut rng, Some("Little ")), "Little Luna");
}

#[test]
fn missing_file_is_a_missing_resource() {
    let err = NamePool::from_file(Path::new("target/no/such/names.txt")).unwrap_err();
    assert!(err.is_missing_resource());
}

#[test]
fn synthetic_names_skip_names_already_drawn() {
    let mut pool = NamePool::from_lines("1 Cat_1\n2 Cat_3\n");
    let mut rng = StdRng::seed_from_u64(4);
    let drawn: Vec<String> = (0..4).map(|_| pool.next_name(&mut rng, None)).collect();

    let unique: HashSet<&String> = drawn.iter().collect();
    assert_eq!(unique.len(), drawn.len(), "{drawn:?}");
    assert_eq!(&drawn[2..], ["Cat_2", "Cat_4"]);
    assert_eq!(pool.fallbacks_issued(), 2);
}

#[test]
fn duplicate_file_entries_are_drawn_once() {
    let mut pool = NamePool::from_lines("1 Tom\n2 Tom\n");
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(pool.remaining(), 1);
    assert_eq!(pool.next_name(&mut rng, None), "Tom");
    assert_eq!(pool.next_name(&mut rng, None), "Cat_1");
}
