//! Fatal-error plumbing.
//!
//! Per the core's error model, allocation failure, size-computation
//! overflow, and invalid arguments are not recoverable: the caller is
//! expected to have validated its inputs before calling in, and the
//! container's job is to crash loudly rather than propagate a `Result`
//! nobody upstream can usefully inspect. This mirrors the teacher's own
//! "allocation failure aborts" contract, but gives tests a seam to
//! observe that a fatal path was *about* to be taken without the
//! process actually dying mid test run (callers build with
//! `panic = "abort"` in release for the real process-terminating
//! behaviour; the test profile panics and unwinds instead).

use core::sync::atomic::{AtomicBool, Ordering};

/// Tripped by [`fatal`] so tests can assert a fatal path was reached
/// even when they catch the resulting panic instead of letting it abort.
static FATAL_TRIPPED: AtomicBool = AtomicBool::new(false);

/// Report a fatal, unrecoverable condition (allocation failure, size
/// overflow, an invariant a caller was required to uphold).
///
/// Panics unconditionally. Built with `panic = "abort"` this terminates
/// the process, matching §7's "process-terminating" error rows; built
/// with unwinding (the default for `#[test]`) it lets a harness observe
/// the failure via [`fatal_was_tripped`] or `catch_unwind`.
#[cold]
#[inline(never)]
pub fn fatal(msg: &str) -> ! {
    FATAL_TRIPPED.store(true, Ordering::SeqCst);
    #[cfg(feature = "log")]
    log::error!("fatal core error: {msg}");
    panic!("fatal core error: {msg}")
}

/// Returns true if [`fatal`] has ever been reached in this process.
/// Test-only observation hook.
pub fn fatal_was_tripped() -> bool {
    FATAL_TRIPPED.load(Ordering::SeqCst)
}

/// Checked multiplication used for the `num * size` computations the base
/// spec calls out as an overflow-fatal path (§7).
#[inline]
pub fn checked_mul(count: usize, size: usize) -> usize {
    match count.checked_mul(size) {
        Some(v) => v,
        None => fatal("size computation overflow"),
    }
}
