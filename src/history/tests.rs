use super::*;
use crate::draw::{BLACK, Point, Segment};
use std::cell::RefCell;
use std::rc::Rc;

fn stroke(n: usize) -> HistoryEntry {
    let segments = (0..n)
        .map(|i| {
            let x = i as f64;
            Segment::new(Point::new(x, 0.0), Point::new(x + 1.0, 0.0), BLACK, 2.0)
        })
        .collect::<Vec<_>>();
    HistoryEntry::Stroke(StrokeEntry::from(segments))
}

fn noop_step(label: &str) -> HistoryEntry {
    HistoryEntry::External(ExternalStep::new(label, |_| Ok(())))
}

#[test]
fn insert_moves_to_tip() {
    let mut history = History::new();
    history.insert(stroke(1));
    history.insert(noop_step("image"));
    assert_eq!(history.len(), 2);
    assert_eq!(history.current_step(), 2);
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn insert_behind_tip_discards_redo_future() {
    let mut history = History::new();
    for _ in 0..5 {
        history.insert(stroke(2));
    }
    history.set_current_step(2);
    assert!(history.can_redo());

    history.insert(stroke(7));
    assert_eq!(history.len(), 3);
    assert_eq!(history.current_step(), 3);
    assert_eq!(
        history.entries()[2].summary(),
        EntrySummary::Stroke { segments: 7 }
    );
}

#[test]
fn clamp_limits_to_log_length() {
    let mut history = History::new();
    history.insert(stroke(1));
    assert_eq!(history.clamp(0), 0);
    assert_eq!(history.clamp(1), 1);
    assert_eq!(history.clamp(9), 1);

    history.set_current_step(42);
    assert_eq!(history.current_step(), 1);
}

#[test]
fn clear_resets_everything() {
    let mut history = History::new();
    history.insert(stroke(3));
    history.current_entry_mut().push(Segment::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        BLACK,
        1.0,
    ));
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.current_step(), 0);
    assert!(history.current_entry().is_empty());
}

#[test]
fn take_current_entry_leaves_empty_buffer() {
    let mut history = History::new();
    let p = Point::new(1.0, 1.0);
    history.current_entry_mut().push(Segment::new(p, p, BLACK, 1.0));
    let taken = history.take_current_entry();
    assert_eq!(taken.len(), 1);
    assert!(history.current_entry().is_empty());
}

#[test]
fn snapshot_describes_entries_and_position() {
    let mut history = History::new();
    history.insert(stroke(4));
    history.insert(noop_step("image 10x20"));
    history.set_current_step(1);

    let snapshot = history.snapshot();
    assert_eq!(
        snapshot.entries,
        vec![
            EntrySummary::Stroke { segments: 4 },
            EntrySummary::External {
                label: "image 10x20".to_string()
            },
        ]
    );
    assert_eq!(snapshot.current_step, 1);
    assert!(snapshot.can_undo());
    assert!(snapshot.can_redo());
}

#[test]
fn external_step_replays_through_target() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&calls);
    let entry = HistoryEntry::External(ExternalStep::new("probe", move |target| {
        seen.borrow_mut().push((target.width(), target.height()));
        Ok(())
    }));

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 4, 3).unwrap();
    let ctx = cairo::Context::new(&surface).unwrap();
    let target = StepTarget::new(&ctx, 4, 3);
    entry.replay(&target).unwrap();
    entry.replay(&target).unwrap();

    assert_eq!(*calls.borrow(), vec![(4, 3), (4, 3)]);
}

#[test]
fn listeners_fire_in_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut listeners = Listeners::new();
    let first = Rc::clone(&order);
    listeners.subscribe(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&order);
    let id = listeners.subscribe(move |_| second.borrow_mut().push("second"));

    let event = HistoryEvent::Step(History::new().snapshot());
    listeners.emit(&event);
    assert!(listeners.unsubscribe(id));
    assert!(!listeners.unsubscribe(id));
    listeners.emit(&event);

    assert_eq!(*order.borrow(), vec!["first", "second", "first"]);
}
