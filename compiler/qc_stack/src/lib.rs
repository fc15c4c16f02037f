//! Recursion guards for the parser.
//!
//! [`ensure_sufficient_stack`] grows the native stack (through `stacker`)
//! before a recursive call; on wasm32 it calls straight through.
//! [`DepthCounter`] caps how deeply statements and expressions may nest.

use std::fmt;

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Default nesting limit for parser recursion.
pub const DEFAULT_MAX_DEPTH: u32 = 256;

/// Returned by [`DepthCounter::enter`] when the limit would be exceeded.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DepthExceeded {
    pub limit: u32,
}

impl fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nesting exceeds the limit of {} levels", self.limit)
    }
}

impl std::error::Error for DepthExceeded {}

/// Tracks the current recursion depth against a fixed maximum.
///
/// Every successful [`enter`](Self::enter) must be paired with an
/// [`exit`](Self::exit).
#[derive(Clone, Debug)]
pub struct DepthCounter {
    depth: u32,
    max: u32,
}

impl DepthCounter {
    pub fn new(max: u32) -> Self {
        DepthCounter { depth: 0, max }
    }

    /// Descend one level.
    #[inline]
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if self.depth >= self.max {
            return Err(DepthExceeded { limit: self.max });
        }
        self.depth += 1;
        Ok(())
    }

    /// Return from one level.
    #[inline]
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl Default for DepthCounter {
    fn default() -> Self {
        DepthCounter::new(DEFAULT_MAX_DEPTH)
    }
}
