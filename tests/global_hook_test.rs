// Integration tests for the process-wide accessors and their shared hook.
// The hook is global state, so every test holds HOOK_LOCK while it runs.

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Duration;
use common::RecordingHook;
use typenv::{global, EnvError};

static HOOK_LOCK: Mutex<()> = Mutex::new(());

fn lock_hook() -> MutexGuard<'static, ()> {
    HOOK_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

#[test]
fn test_global_accessors_read_process_environment() {
    let _guard = lock_hook();
    let recorder = RecordingHook::new();
    global::set_error_hook(recorder.hook());

    temp_env::with_vars(
        [
            ("TYPENV_GL_NAME", Some("svc")),
            ("TYPENV_GL_FLAG", Some("0")),
            ("TYPENV_GL_COUNT", Some("42")),
            ("TYPENV_GL_RATIO", Some("3.5")),
            ("TYPENV_GL_TIMEOUT", Some("500ms")),
            ("TYPENV_GL_PORT", Some("8080")),
        ],
        || {
            assert_eq!(global::string("TYPENV_GL_NAME", ""), "svc");
            assert!(!global::bool("TYPENV_GL_FLAG", true));
            assert_eq!(global::int("TYPENV_GL_COUNT", 0), 42);
            assert!((global::float64("TYPENV_GL_RATIO", 0.0) - 3.5).abs() < f64::EPSILON);
            assert_eq!(
                global::duration("TYPENV_GL_TIMEOUT", Duration::zero()),
                Duration::milliseconds(500)
            );
            assert_eq!(global::parsed::<u16>("TYPENV_GL_PORT", 80), 8080);
        },
    );

    global::reset_error_hook();
    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_replaced_hook_receives_reports() {
    let _guard = lock_hook();
    let recorder = RecordingHook::new();
    global::set_error_hook(recorder.hook());

    temp_env::with_var("TYPENV_GL_BAD", Some("yes"), || {
        assert!(global::bool("TYPENV_GL_BAD", true));
    });
    global::reset_error_hook();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "TYPENV_GL_BAD");
    assert_eq!(
        calls[0].1,
        EnvError::UnknownBool {
            value: "yes".to_string()
        }
    );
}

#[test]
fn test_reset_restores_logging_hook() {
    let _guard = lock_hook();
    let recorder = RecordingHook::new();
    global::set_error_hook(recorder.hook());
    global::reset_error_hook();

    temp_env::with_var("TYPENV_GL_RESET", Some("x"), || {
        assert_eq!(global::int("TYPENV_GL_RESET", 3), 3);
    });

    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_hook_may_replace_itself() {
    let _guard = lock_hook();
    let recorder = RecordingHook::new();
    let next = recorder.hook();
    let replaced = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&replaced);

    global::set_error_hook(Arc::new(move |_: &str, _: &EnvError| {
        flag.store(true, Ordering::SeqCst);
        global::set_error_hook(Arc::clone(&next));
    }));

    temp_env::with_var("TYPENV_GL_SWAP", Some("bad"), || {
        assert_eq!(global::int("TYPENV_GL_SWAP", 1), 1);
        assert_eq!(global::int("TYPENV_GL_SWAP", 1), 1);
    });
    global::reset_error_hook();

    assert!(replaced.load(Ordering::SeqCst));
    assert_eq!(recorder.count(), 1);
}
