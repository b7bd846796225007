use chrono::NaiveDate;
use dwriter::core::add::AddEvent;
use dwriter::core::observable::Observable;
use dwriter::core::store::Addressing;
use dwriter::errors::AppError;
use dwriter::utils::time::DEFAULT_TIMESTAMP_FORMAT;
use std::cell::RefCell;
use std::rc::Rc;

mod common;
use common::temp_store;

const ISO: &str = "%Y-%m-%d %H:%M:%S";

#[test]
fn test_commit_appends_moment_and_text() {
    let (_dir, store) = temp_store(Addressing::IdOffset);

    let mut draft = AddEvent::from_input("2013-02-14 10:00:00", ISO);
    draft.set_text("lunch");

    assert_eq!(draft.current_time(), "2013-02-14 10:00:00");
    let id = draft.commit(&store).unwrap();

    assert_eq!(id, 1);
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.summary_at(0), "2013-02-14 10:00:00, lunch");
}

#[test]
fn test_default_format_matches_locale_free_long_form() {
    let moment = NaiveDate::from_ymd_opt(2013, 2, 14)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let draft = AddEvent::with_moment(Some(moment), DEFAULT_TIMESTAMP_FORMAT);

    assert_eq!(draft.current_time(), "Thu Feb 14 10:00:00 2013");
}

#[test]
fn test_new_draft_is_stamped_now() {
    let (_dir, store) = temp_store(Addressing::IdOffset);

    let mut draft = AddEvent::new(DEFAULT_TIMESTAMP_FORMAT);
    assert!(draft.is_valid());
    assert_ne!(draft.current_time(), "n/a");

    draft.set_text("coffee");
    draft.commit(&store).unwrap();

    let rec = store.fetch_by_position(0).unwrap();
    assert_eq!(rec.timestamp, draft.current_time());
    assert_eq!(rec.text, "coffee");
}

#[test]
fn test_invalid_moment_shows_na_and_refuses_commit() {
    let (_dir, store) = temp_store(Addressing::IdOffset);

    let mut draft = AddEvent::from_input("yesterday-ish", ISO);
    draft.set_text("???");

    assert!(!draft.is_valid());
    assert_eq!(draft.current_time(), "n/a");
    match draft.commit(&store) {
        Err(AppError::InvalidTimestamp(raw)) => assert_eq!(raw, "yesterday-ish"),
        other => panic!("expected InvalidTimestamp, got {:?}", other.map(|_| ())),
    }
    assert_eq!(store.count().unwrap(), 0);

    let no_moment = AddEvent::with_moment(None, ISO);
    assert_eq!(no_moment.current_time(), "n/a");
}

#[test]
fn test_unusable_format_shows_na() {
    let moment = NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let draft = AddEvent::with_moment(Some(moment), "%Y-%!");

    assert!(!draft.is_valid());
    assert_eq!(draft.current_time(), "n/a");
}

#[test]
fn test_text_changes_notify_subscribers() {
    let mut draft = AddEvent::with_moment(None, ISO);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    draft
        .text
        .subscribe(move |t: &String| sink.borrow_mut().push(t.clone()));

    assert!(draft.set_text("a"));
    assert!(!draft.set_text("a"));
    assert!(draft.set_text("ab"));

    assert_eq!(*seen.borrow(), vec!["a".to_string(), "ab".to_string()]);
    assert_eq!(draft.text(), "ab");
}

#[test]
fn test_observable_unsubscribe_stops_delivery() {
    let mut value = Observable::new(0u32);
    let calls = Rc::new(RefCell::new(0));

    let c1 = Rc::clone(&calls);
    let first = value.subscribe(move |_| *c1.borrow_mut() += 1);
    let c2 = Rc::clone(&calls);
    value.subscribe(move |_| *c2.borrow_mut() += 10);
    assert_eq!(value.subscriber_count(), 2);

    value.set(1);
    assert_eq!(*calls.borrow(), 11);

    assert!(value.unsubscribe(first));
    assert!(!value.unsubscribe(first));
    value.set(2);
    assert_eq!(*calls.borrow(), 21);
    assert_eq!(*value.get(), 2);
}
