//! Trap counting tests
//!
//! On x86 Linux `INT3` leaves the instruction pointer after the trap, so a
//! `SIGTRAP` handler can count hits and let execution continue. That lets us
//! check the gating properties in-process instead of from a child's exit code.

#![cfg(all(
    target_os = "linux",
    any(target_arch = "x86", target_arch = "x86_64"),
    haltpoint_gate = "armed"
))]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Once, PoisonError};
use std::thread;
use std::time::Duration;

use haltpoint_core::flag;

static TRAPS: AtomicUsize = AtomicUsize::new(0);

extern "C" fn on_sigtrap(_signal: libc::c_int)
{
    TRAPS.fetch_add(1, Ordering::SeqCst);
}

/// Install the counting handler once and serialize tests sharing the flag.
fn setup() -> MutexGuard<'static, ()>
{
    static INSTALL: Once = Once::new();
    static LOCK: Mutex<()> = Mutex::new(());

    INSTALL.call_once(|| unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        action.sa_sigaction = on_sigtrap as extern "C" fn(libc::c_int) as libc::sighandler_t;
        libc::sigemptyset(&mut action.sa_mask);
        action.sa_flags = libc::SA_RESTART;
        let rc = libc::sigaction(libc::SIGTRAP, &action, std::ptr::null_mut());
        assert_eq!(rc, 0, "failed to install SIGTRAP handler");
    });

    let guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    flag::disarm();
    guard
}

fn traps() -> usize
{
    TRAPS.load(Ordering::SeqCst)
}

#[test]
fn test_gate_traps_iff_armed()
{
    let _lock = setup();

    let before = traps();
    haltpoint_core::haltpoint!();
    assert_eq!(traps(), before);

    flag::arm();
    haltpoint_core::haltpoint!();
    assert_eq!(traps(), before + 1);

    flag::disarm();
    haltpoint_core::haltpoint!();
    assert_eq!(traps(), before + 1);
}

#[test]
fn test_each_armed_invocation_traps_once()
{
    let _lock = setup();
    let _guard = flag::ArmGuard::new();

    let before = traps();
    for _ in 0..25 {
        haltpoint_core::haltpoint!();
    }
    assert_eq!(traps(), before + 25);
}

#[test]
fn test_disarmed_gate_never_traps()
{
    let _lock = setup();

    let before = traps();
    for _ in 0..50_000 {
        haltpoint_core::haltpoint!();
    }
    assert_eq!(traps(), before);
}

#[test]
fn test_concurrent_toggle_bounds_trap_count()
{
    let _lock = setup();

    let before = traps();
    let stop = Arc::new(AtomicBool::new(false));
    let invocations = Arc::new(AtomicUsize::new(0));

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let stop = Arc::clone(&stop);
            let invocations = Arc::clone(&invocations);
            thread::spawn(move || {
                while !stop.load(Ordering::SeqCst) {
                    haltpoint_core::haltpoint!();
                    invocations.fetch_add(1, Ordering::SeqCst);
                    thread::yield_now();
                }
            })
        })
        .collect();

    thread::sleep(Duration::from_millis(5));
    flag::arm();
    thread::sleep(Duration::from_millis(5));
    flag::disarm();

    // Let in-flight invocations drain, then measure a disarmed window.
    thread::sleep(Duration::from_millis(50));
    let settled = traps();
    thread::sleep(Duration::from_millis(10));

    stop.store(true, Ordering::SeqCst);
    for worker in workers {
        worker.join().expect("worker thread panicked");
    }

    let fired = traps() - before;
    assert!(fired <= invocations.load(Ordering::SeqCst));
    assert_eq!(traps(), settled, "gate trapped after the flag was disarmed");
}
