// Copyright 2025 Cowboy AI, LLC.

//! Ordinary calls on `Absent` and `Failure` branch on the variant and never
//! report a wrong-variant access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cim_fp::{absent, failure, present, success, Either, Fallback, Maybe};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Counts events emitted from the error module
struct WrongVariantCounter {
    events: Arc<AtomicUsize>,
}

impl Subscriber for WrongVariantCounter {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        if event.metadata().target() == "cim_fp::errors" {
            self.events.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn count_wrong_variant_events(f: impl FnOnce()) -> usize {
    let events = Arc::new(AtomicUsize::new(0));
    let subscriber = WrongVariantCounter {
        events: Arc::clone(&events),
    };
    tracing::subscriber::with_default(subscriber, f);
    events.load(Ordering::SeqCst)
}

#[test]
fn maybe_queries_on_absent_are_silent() {
    let events = count_wrong_variant_events(|| {
        let none: Maybe<i32> = absent();
        assert!(!none.contains(&1));
        assert!(!none.exists(|_| true));
        assert!(none.forall(|_| false));
        none.foreach(|_| panic!("foreach ran on Absent"));
        assert_eq!(none.iter().count(), 0);
        assert_eq!((&none).into_iter().count(), 0);
        assert_eq!(none.on_present(|_| panic!("hook ran on Absent")), absent());
        assert_eq!(none.get_or_else_with(|| 3), 3);
    });

    assert_eq!(events, 0);
}

#[test]
fn either_queries_on_wrong_side_are_silent() {
    let events = count_wrong_variant_events(|| {
        let left: Either<i32, i32> = failure(1);
        let right: Either<i32, i32> = success(2);

        assert!(!left.contains(&1));
        assert!(!left.exists(|_| true));
        assert!(!right.contains_left(&2));
        assert!(!right.exists_left(|_| true));
        assert_eq!(left.iter().count(), 0);
        assert_eq!(left.foreach(|_| panic!("foreach ran on Failure")), left);
        assert_eq!(right.foreach_left(|_| panic!("foreach_left ran on Success")), right);
        assert_eq!(left.get_or_else(Fallback::lazy(|| 9)), 9);
    });

    assert_eq!(events, 0);
}

#[test]
fn present_and_success_queries_are_silent() {
    let events = count_wrong_variant_events(|| {
        assert!(present(1).contains(&1));
        assert!(success::<i32, i32>(1).contains(&1));
        assert_eq!(present(1).iter().count(), 1);
    });

    assert_eq!(events, 0);
}
