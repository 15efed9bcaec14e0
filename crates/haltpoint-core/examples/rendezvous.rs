//! Target program for trying haltpoint under a debugger
//!
//! Run it, attach a debugger to the printed PID, then either:
//! - press Ctrl+C once to arm the flag from the signal handler, or
//! - set the flag from the debugger: `set var haltpoint_via_gdb = 1`
//!
//! The next loop iteration stops inside `process_value` and disarms. Pressing
//! Ctrl+C while the flag is still armed exits. Set `HALTPOINT_ARM=1` to start
//! armed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use haltpoint_core::{flag, GATE_MODE};
use haltpoint_utils::init_logging;

static RUNNING: AtomicBool = AtomicBool::new(true);

fn main()
{
    init_logging().expect("Failed to initialize logging");

    tracing::info!(pid = std::process::id(), mode = %GATE_MODE, "rendezvous target starting");

    match flag::arm_from_env() {
        Ok(Some(armed)) => tracing::info!(armed, "flag set from environment"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "ignoring bad environment setting"),
    }

    ctrlc::set_handler(|| {
        if flag::is_armed() {
            RUNNING.store(false, Ordering::Relaxed);
        } else {
            flag::arm();
        }
    })
    .expect("Error setting signal handler");

    let mut counter = 0u64;
    let mut accumulator = 0i64;

    while RUNNING.load(Ordering::Relaxed) {
        counter += 1;
        accumulator = process_value(counter, accumulator);

        if counter % 10 == 0 {
            tracing::info!(counter, accumulator, armed = flag::is_armed(), "tick");
        }

        thread::sleep(Duration::from_millis(100));
    }

    tracing::info!(counter, accumulator, "rendezvous target exiting");
}

/// Stop here once per arming, so continuing in the debugger doesn't stop again
/// on the next tick.
fn rendezvous()
{
    haltpoint_core::if_gate! {
        if flag::is_armed() {
            haltpoint_core::haltpoint!();
            flag::disarm();
        }
    }
}

fn process_value(value: u64, acc: i64) -> i64
{
    rendezvous();

    if value % 2 == 0 {
        acc + value as i64
    } else {
        acc - value as i64
    }
}
