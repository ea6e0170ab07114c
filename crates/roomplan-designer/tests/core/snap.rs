use proptest::prelude::*;
use roomplan_designer::{snap, Point};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn snap_is_idempotent(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
        cell in 0.01f64..5.0,
    ) {
        let once = snap(Point::new(x, y), cell);
        let twice = snap(once, cell);
        prop_assert!(approx(once.x, twice.x));
        prop_assert!(approx(once.y, twice.y));
    }

    #[test]
    fn snap_moves_at_most_half_a_cell(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
        cell in 0.01f64..5.0,
    ) {
        let snapped = snap(Point::new(x, y), cell);
        prop_assert!((snapped.x - x).abs() <= cell / 2.0 + 1e-9);
        prop_assert!((snapped.y - y).abs() <= cell / 2.0 + 1e-9);
    }
}

#[test]
fn test_snap_examples() {
    assert_eq!(snap(Point::new(0.74, 0.76), 0.5), Point::new(0.5, 1.0));
    assert_eq!(snap(Point::new(2.0, 3.5), 0.5), Point::new(2.0, 3.5));
}
