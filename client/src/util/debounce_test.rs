use std::cell::RefCell;
use std::rc::Rc;

use super::manual::ManualScheduler;
use super::*;

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Box<dyn FnOnce()>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let make = move |value: &str| {
        let sink = Rc::clone(&sink);
        let value = value.to_owned();
        Box::new(move || sink.borrow_mut().push(value)) as Box<dyn FnOnce()>
    };
    (calls, make)
}

#[test]
fn single_call_fires_after_delay() {
    let scheduler = ManualScheduler::default();
    let mut debouncer = Debouncer::new(scheduler.clone(), 400);
    let (calls, make) = recorder();

    debouncer.call(make("amazon"));
    scheduler.advance(399);
    assert!(calls.borrow().is_empty());
    scheduler.advance(1);
    assert_eq!(*calls.borrow(), vec!["amazon".to_owned()]);
}

#[test]
fn rapid_calls_collapse_to_last_value() {
    let scheduler = ManualScheduler::default();
    let mut debouncer = Debouncer::new(scheduler.clone(), 400);
    let (calls, make) = recorder();

    for title in ["a", "am", "ama", "amaz", "amazon"] {
        debouncer.call(make(title));
        scheduler.advance(100);
    }
    assert!(calls.borrow().is_empty());
    assert_eq!(scheduler.live_tasks(), 1);

    scheduler.advance(400);
    assert_eq!(*calls.borrow(), vec!["amazon".to_owned()]);
}

#[test]
fn calls_in_separate_windows_each_fire() {
    let scheduler = ManualScheduler::default();
    let mut debouncer = Debouncer::new(scheduler.clone(), 400);
    let (calls, make) = recorder();

    debouncer.call(make("nike"));
    scheduler.advance(500);
    debouncer.call(make("nykaa"));
    scheduler.advance(500);
    assert_eq!(*calls.borrow(), vec!["nike".to_owned(), "nykaa".to_owned()]);
}

#[test]
fn cancel_prevents_pending_action() {
    let scheduler = ManualScheduler::default();
    let mut debouncer = Debouncer::new(scheduler.clone(), 400);
    let (calls, make) = recorder();

    debouncer.call(make("zomato"));
    debouncer.cancel();
    scheduler.advance(1_000);
    assert!(calls.borrow().is_empty());
    assert_eq!(scheduler.live_tasks(), 0);
}

#[test]
fn dropping_debouncer_cancels_pending_action() {
    let scheduler = ManualScheduler::default();
    let (calls, make) = recorder();
    {
        let mut debouncer = Debouncer::new(scheduler.clone(), 400);
        debouncer.call(make("ajio"));
    }
    scheduler.advance(1_000);
    assert!(calls.borrow().is_empty());
}

#[test]
fn delay_is_reported() {
    let debouncer = Debouncer::new(BrowserScheduler, 450);
    assert_eq!(debouncer.delay_ms(), 450);
}
