//! Stack growth for deeply nested type expressions.
//!
//! `parse_type_expr` recurses once per nesting level (bodies, payloads,
//! generic arguments, function returns). Each level checks the remaining
//! stack and moves to a fresh segment when it runs low.

/// Headroom one nesting level may use before the next check.
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT: usize = 2 * 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

/// `stacker` cannot switch stacks on wasm32.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
