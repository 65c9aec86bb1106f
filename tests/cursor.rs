// tests/cursor.rs
use practo_scrape::{Cursor, EmptyStateError, Record};

fn records(n: usize) -> Vec<Record> {
    (1..=n).map(|i| Record::new(format!("Dr. {i}"), "Dentist", "N/A")).collect()
}

#[test]
fn starts_empty() {
    let c = Cursor::new();
    assert!(c.is_empty());
    assert_eq!(c.current(), Err(EmptyStateError));
    assert_eq!(c.position(), None);
}

#[test]
fn previous_at_start_is_a_no_op() {
    let mut c = Cursor::new();
    c.reset("3 doctors", records(3));
    c.move_previous();
    assert_eq!(c.position(), Some((1, 3)));
    assert_eq!(c.current().unwrap().name, "Dr. 1");
}

#[test]
fn next_at_end_is_a_no_op() {
    let mut c = Cursor::new();
    c.reset("3 doctors", records(3));
    for _ in 0..10 {
        c.move_next();
    }
    assert_eq!(c.position(), Some((3, 3)));
    assert_eq!(c.current().unwrap().name, "Dr. 3");
    assert!(!c.has_next());
    assert!(c.has_previous());
}

#[test]
fn position_stays_in_range_under_any_walk() {
    let mut c = Cursor::new();
    c.reset("5", records(5));
    let walk = [1, 1, -1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, 1];
    for step in walk {
        if step > 0 { c.move_next() } else { c.move_previous() }
        let (pos, n) = c.position().unwrap();
        assert!((1..=n).contains(&pos), "pos {pos} out of 1..={n}");
    }
}

#[test]
fn single_record_cannot_move() {
    let mut c = Cursor::new();
    c.reset("1", records(1));
    assert!(!c.has_next());
    assert!(!c.has_previous());
    c.move_next();
    c.move_previous();
    assert_eq!(c.position(), Some((1, 1)));
}

#[test]
fn reset_replaces_and_rewinds() {
    let mut c = Cursor::new();
    c.reset("4", records(4));
    c.move_next();
    c.move_next();
    assert_eq!(c.position(), Some((3, 4)));

    c.reset("2 doctors", records(2));
    assert_eq!(c.position(), Some((1, 2)));
    assert_eq!(c.total_count_label(), "2 doctors");
    assert_eq!(c.records().len(), 2);
}

#[test]
fn reset_to_empty_then_current_fails() {
    let mut c = Cursor::new();
    c.reset("4", records(4));
    c.move_next();

    c.reset("No data found", Vec::new());

    assert!(c.is_empty());
    assert_eq!(c.current(), Err(EmptyStateError));
    assert_eq!(c.position(), None);
    // navigating an empty cursor is harmless
    c.move_next();
    c.move_previous();
    assert_eq!(c.position(), None);
}
