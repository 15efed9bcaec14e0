//! Tests for the trap gate that never arm the flag
//!
//! Nothing in this binary arms the flag while the gate can trap, so a failure
//! shows up as the whole test process dying from a trap signal.

use haltpoint_core::{flag, GateMode, GATE_MODE};

#[cfg(haltpoint_gate = "armed")]
#[test]
fn test_debug_build_is_armed_mode()
{
    assert_eq!(GATE_MODE, GateMode::Armed);
    assert!(GATE_MODE.can_trap());
}

#[cfg(haltpoint_gate = "inert")]
#[test]
fn test_inert_build_is_inert_mode()
{
    assert_eq!(GATE_MODE, GateMode::Inert);
    assert!(!GATE_MODE.can_trap());
}

#[cfg(not(any(haltpoint_gate = "armed", haltpoint_gate = "inert")))]
#[test]
fn test_release_build_is_absent_mode()
{
    assert_eq!(GATE_MODE, GateMode::Absent);
    assert!(!GATE_MODE.is_available());
}

#[test]
fn test_guarded_call_site_builds_in_every_mode()
{
    #[allow(unused_mut)]
    let mut kept = 0;
    for _ in 0..3 {
        haltpoint_core::if_gate! {
            haltpoint_core::haltpoint!();
            kept += 1;
        }
    }

    let expected = if GATE_MODE.is_available() { 3 } else { 0 };
    assert_eq!(kept, expected);
    assert!(!flag::is_armed());
}

haltpoint_core::if_gate! {
    fn gated_helper() -> GateMode
    {
        haltpoint_core::haltpoint!();
        GATE_MODE
    }

    #[test]
    fn test_guarded_items_exist_only_with_gate()
    {
        assert!(gated_helper().is_available());
    }
}

#[test]
fn test_flag_starts_disarmed()
{
    assert!(!flag::is_armed());
}

#[cfg(any(haltpoint_gate = "armed", haltpoint_gate = "inert"))]
#[test]
fn test_disarmed_gate_is_idempotent()
{
    for _ in 0..100_000 {
        haltpoint_core::haltpoint!();
    }
    assert!(!flag::is_armed());
}

#[cfg(any(haltpoint_gate = "armed", haltpoint_gate = "inert"))]
#[test]
fn test_disarmed_gate_across_threads()
{
    let workers: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                for _ in 0..10_000 {
                    haltpoint_core::haltpoint!();
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker thread panicked");
    }
    assert!(!flag::is_armed());
}

#[cfg(any(haltpoint_gate = "armed", haltpoint_gate = "inert"))]
#[test]
fn test_gate_is_usable_as_expression()
{
    let unit: () = haltpoint_core::haltpoint!();
    assert_eq!(unit, ());
}
