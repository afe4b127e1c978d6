use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use switchable::item::ItemRange;
use switchable::splitter::{Resolution, Splitter};
use switchable::SplitError;
use test_env_log::test;

fn assert_range(expected: (f64, f64), actual: ItemRange) {
    assert!((expected.0 - actual.low).abs() < 1e-9, "low: expected {}, got {}", expected.0, actual.low);
    assert!((expected.1 - actual.high).abs() < 1e-9, "high: expected {}, got {}", expected.1, actual.high);
}

#[test]
fn test_fifty_thirty_twenty() {
    let mut s: Splitter<&str> = Splitter::new();
    s.add_item("C", 20, None);
    s.add_item("A", 50, None);
    s.add_item("B", 30, None);

    let table = s.ranges();
    let order: Vec<&str> = table.iter().map(|e| *s.items()[e.index].payload()).collect();
    assert_eq!(vec!["A", "B", "C"], order);

    assert_range((0.0, 50.0), table.range_of(1).unwrap());
    assert_range((50.01, 80.0), table.range_of(2).unwrap());
    assert_range((80.01, 100.0), table.range_of(0).unwrap());

    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(&"B", s.pick_with_draw(75.0, &mut rng).unwrap().payload());
    assert_eq!(&"A", s.pick_with_draw(0.0, &mut rng).unwrap().payload());
    assert_eq!(&"C", s.pick_with_draw(100.0, &mut rng).unwrap().payload());
    assert_eq!(&"C", s.last_selected().unwrap().payload());
}

#[test]
fn test_whole_scale_single_item() {
    let mut s: Splitter<&str> = Splitter::new();
    s.add_item("A", 100, None);
    let mut rng = StdRng::seed_from_u64(5);

    assert_range((0.0, 100.0), s.ranges().range_of(0).unwrap());
    for hundredths in (0..=10_000).step_by(250) {
        let sel = s.pick_with_draw(hundredths as f64 / 100.0, &mut rng).unwrap();
        assert_eq!(&"A", sel.payload());
        assert!(matches!(sel.resolution(), Resolution::Matched(_)));
    }
}

#[test]
fn test_empty_splitter() {
    let mut s: Splitter<&str> = Splitter::new();

    assert!(!s.has_items());
    assert_eq!(Err(SplitError::NoItems), s.pick_random().map(|sel| *sel.payload()));
}

/// Tests the thirds split, which only reaches 100 through the snap.
#[test]
fn test_thirds() {
    let s: Splitter<&str> = [("x", 33.33, None), ("y", 33.33, None), ("z", 33.33, None)]
        .into_iter()
        .collect();

    let table = s.ranges();
    assert_range((0.0, 33.33), table.range_of(0).unwrap());
    assert_range((33.34, 66.66), table.range_of(1).unwrap());
    assert_range((66.67, 100.0), table.range_of(2).unwrap());
}

/// Tests that weights short of 100 leave a tail served by the fallback.
#[test]
fn test_short_weights_fall_back() {
    let mut s: Splitter<&str> = Splitter::new();
    s.add_item("A", 40, None);
    s.add_item("B", 40, None);
    let mut rng = StdRng::seed_from_u64(99);

    let sel = s.pick_with_draw(90.0, &mut rng).unwrap();
    assert_eq!(Resolution::Fallback, sel.resolution());
    assert!(["A", "B"].contains(sel.payload()));
    assert_eq!(90.0, sel.draw());
}

#[test]
fn test_json_configuration() {
    let mut s = Splitter::from_json(&json!([
        {"object": " control ", "split": "50"},
        {"object": "treatment", "split": 50, "params": {"copy": "Buy now"}},
        {"split": 0}
    ]).to_string()).unwrap();

    assert!(s.has_items());
    assert_eq!(3, s.len());

    let mut rng = StdRng::seed_from_u64(0);
    let sel = s.pick_with_draw(75.0, &mut rng).unwrap();
    assert_eq!("treatment", sel.payload().as_str());
    assert_eq!(Some(&json!({"copy": "Buy now"})), sel.item().params());

    let sel = s.pick_with_draw(10.0, &mut rng).unwrap();
    assert_eq!("control", sel.payload().as_str());
}
