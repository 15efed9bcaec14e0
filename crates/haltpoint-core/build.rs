//! Build script for haltpoint-core
//!
//! This script does two things before compilation:
//! - Checks the toolchain is new enough (Rust 1.65.0+, for inline asm and let-else)
//! - Resolves which form of `haltpoint!()` gets compiled in
//!
//! ## Gate Modes
//!
//! | Inputs | Mode |
//! |---|---|
//! | debug indicator set, `ndebug` not set | `armed` (conditional trap) |
//! | otherwise, `allow-inert` set | `inert` (no-op) |
//! | otherwise | `absent` (macro undefined) |
//!
//! The debug indicator has two spellings: the `debug` cargo feature and the
//! `debug_assertions` cfg that cargo enables for dev profiles. Every input can
//! also be supplied through a `HALTPOINT_*` environment variable at build time.

use std::env;

const MODE_CFG: &str = "haltpoint_gate";

fn main()
{
    // Inline asm needs 1.59.0, let-else needs 1.65.0
    if let Ok(rustc_version) = rustc_version::version() {
        let min_rust_version = rustc_version::Version::new(1, 65, 0);

        if rustc_version < min_rust_version {
            panic!(
                "haltpoint-core requires Rust {} or newer, found {}",
                min_rust_version, rustc_version
            );
        }
    } else {
        println!("cargo:warning=could not verify Rust version");
    }

    for var in ["HALTPOINT_DEBUG", "HALTPOINT_NDEBUG", "HALTPOINT_ALLOW_INERT"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg({MODE_CFG}, values(\"armed\", \"inert\"))");

    let debug = feature("DEBUG") || env::var_os("CARGO_CFG_DEBUG_ASSERTIONS").is_some() || flag("HALTPOINT_DEBUG");
    let ndebug = feature("NDEBUG") || flag("HALTPOINT_NDEBUG");
    let allow_inert = feature("ALLOW_INERT") || flag("HALTPOINT_ALLOW_INERT");

    let mode = if debug && !ndebug {
        "armed"
    } else if allow_inert {
        "inert"
    } else {
        "absent"
    };

    if mode != "absent" {
        println!("cargo:rustc-cfg={MODE_CFG}=\"{mode}\"");
    }
    println!("cargo:rustc-env=HALTPOINT_GATE_MODE={mode}");
}

fn feature(name: &str) -> bool
{
    env::var_os(format!("CARGO_FEATURE_{name}")).is_some()
}

/// Read a boolean build setting from the environment.
///
/// Unrecognized values produce a cargo warning and count as unset.
fn flag(name: &str) -> bool
{
    let raw = match env::var(name) {
        Ok(raw) => raw,
        Err(_) => return false,
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "" | "0" | "false" | "no" | "off" => false,
        other => {
            println!("cargo:warning={name}={other:?} is not a boolean, ignoring");
            false
        }
    }
}
