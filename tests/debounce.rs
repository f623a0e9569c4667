//! Debounce scheduler tests under paused tokio time.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use form_validator::debounce::{DebounceError, DebouncedPassword, Debouncer, PASSWORD_DEBOUNCE};
use tokio::time;

#[tokio::test(start_paused = true)]
async fn burst_of_calls_evaluates_only_the_last_input() {
    let mut debouncer = Debouncer::new(Duration::from_millis(500));
    let evaluations = Arc::new(AtomicUsize::new(0));

    // Ten keystrokes, 100 ms apart: every call but the last lands inside
    // the previous call's window.
    let mut futures = Vec::new();
    for i in 0..10 {
        let evaluations = Arc::clone(&evaluations);
        futures.push(debouncer.call(
            move |input: String| {
                evaluations.fetch_add(1, Ordering::SeqCst);
                input
            },
            format!("input-{i}"),
        ));
        if i < 9 {
            time::advance(Duration::from_millis(100)).await;
        }
    }

    let last = futures.pop().unwrap();
    for superseded in futures {
        assert_eq!(superseded.await, Err(DebounceError::Superseded));
    }
    assert_eq!(last.await, Ok("input-9".to_string()));
    assert_eq!(evaluations.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn spaced_calls_each_evaluate() {
    let mut debouncer = Debouncer::new(Duration::from_millis(500));

    let first = debouncer.call(|x: u32| x + 1, 1);
    assert_eq!(first.await, Ok(2));

    time::advance(Duration::from_millis(600)).await;

    let second = debouncer.call(|x: u32| x + 1, 10);
    assert_eq!(second.await, Ok(11));
}

#[tokio::test(start_paused = true)]
async fn evaluation_waits_for_the_full_delay() {
    let mut debouncer = Debouncer::new(Duration::from_millis(500));
    let fired = Arc::new(AtomicUsize::new(0));

    let fired_clone = Arc::clone(&fired);
    let call = debouncer.call(
        move |()| {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        },
        (),
    );

    time::advance(Duration::from_millis(499)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    time::advance(Duration::from_millis(1)).await;
    assert_eq!(call.await, Ok(()));
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_debouncer_supersedes_the_pending_call() {
    let mut debouncer = Debouncer::new(Duration::from_millis(500));
    let pending = debouncer.call(|x: i32| x, 5);
    drop(debouncer);
    assert_eq!(pending.await, Err(DebounceError::Superseded));
}

#[tokio::test(start_paused = true)]
async fn debounced_password_uses_the_fixed_delay() {
    assert_eq!(PASSWORD_DEBOUNCE, Duration::from_millis(500));

    let mut debounced = DebouncedPassword::new();

    // Keystrokes toward a strong password; only the final text counts.
    let partial = debounced.submit("Abcdef1");
    time::advance(Duration::from_millis(100)).await;
    let complete = debounced.submit("Abcdef1!");

    assert_eq!(partial.await, Err(DebounceError::Superseded));
    let verdict = complete.await.expect("final call must run");
    assert!(verdict.is_ok());
}

#[tokio::test(start_paused = true)]
async fn debounced_password_preserves_the_failure_message() {
    let mut debounced = DebouncedPassword::new();
    let verdict = debounced.submit("weak").await.expect("call must run");
    assert_eq!(
        verdict.unwrap_err().to_string(),
        "Password must be at least 8 characters, with uppercase, lowercase, number, and special characters."
    );
}

#[tokio::test(start_paused = true)]
async fn cancel_clears_pending_state() {
    let mut debounced = DebouncedPassword::new();
    let pending = debounced.submit("Abcdef1!");
    debounced.cancel();
    assert_eq!(pending.await, Err(DebounceError::Superseded));
}
