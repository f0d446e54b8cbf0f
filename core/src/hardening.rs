//! Precondition checks ("hardening").
//!
//! Out-of-bounds accesses through a checked cursor are programming errors, not
//! recoverable conditions. When the active [`Mode`] enables the category of a
//! check, a failed check calls [`trap`], which logs the [`Violation`] and panics.
//! When the category is disabled the condition is not even evaluated.
//!
//! The mode is chosen at compile time through Cargo features:
//!
//! | Feature               | Mode                  |
//! |-----------------------|-----------------------|
//! | `hardening-debug`     | [`Mode::Debug`]       |
//! | `hardening-extensive` | [`Mode::Extensive`]   |
//! | `hardening-fast`      | [`Mode::Fast`]        |
//! | `hardening-none`      | [`Mode::None`]        |
//! | (none of the above)   | `Debug` with `debug_assertions`, `None` otherwise |
//!
//! If several features are enabled the strongest one wins.

use thiserror::Error;

/// Kind of precondition a check guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Dereferencing, indexing or moving a cursor outside its valid window.
    ValidElementAccess,
    /// Consistency of values the library builds itself.
    Internal,
}

/// Which checks are compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    None,
    Fast,
    Extensive,
    Debug,
}

impl Mode {
    pub const fn checks(self, category: Category) -> bool {
        match (self, category) {
            (Mode::None, _) => false,
            (_, Category::ValidElementAccess) => true,
            (Mode::Debug, Category::Internal) => true,
            (_, Category::Internal) => false,
        }
    }
}

pub const MODE: Mode = if cfg!(feature = "hardening-debug") {
    Mode::Debug
} else if cfg!(feature = "hardening-extensive") {
    Mode::Extensive
} else if cfg!(feature = "hardening-fast") {
    Mode::Fast
} else if cfg!(feature = "hardening-none") {
    Mode::None
} else if cfg!(debug_assertions) {
    Mode::Debug
} else {
    Mode::None
};

/// Whether checks of `category` are active in this build.
#[inline(always)]
pub const fn enabled(category: Category) -> bool {
    MODE.checks(category)
}

/// A failed precondition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    #[error("bounded iterator: current and begin are inconsistent")]
    InconsistentBegin,

    #[error("bounded iterator: current and begin + size are inconsistent")]
    InconsistentEnd,

    #[error("bounded iterator: attempt to dereference an iterator at the end")]
    DereferenceAtEnd,

    #[error("bounded iterator: attempt to index an iterator past the start")]
    IndexBeforeBegin,

    #[error("bounded iterator: attempt to index an iterator at or past the end")]
    IndexAtOrPastEnd,

    #[error("bounded iterator: attempt to advance an iterator past the end")]
    AdvancePastEnd,

    #[error("bounded iterator: attempt to rewind an iterator past the start")]
    RewindPastBegin,
}

impl Violation {
    pub const fn category(self) -> Category {
        match self {
            Violation::InconsistentBegin | Violation::InconsistentEnd => Category::Internal,
            Violation::DereferenceAtEnd
            | Violation::IndexBeforeBegin
            | Violation::IndexAtOrPastEnd
            | Violation::AdvancePastEnd
            | Violation::RewindPastBegin => Category::ValidElementAccess,
        }
    }
}

/// Reports `violation` and aborts the current operation. Never returns.
#[cold]
#[inline(never)]
#[track_caller]
pub fn trap(violation: Violation) -> ! {
    tracing::error!(category = ?violation.category(), %violation, "hardening assertion failed");
    panic!("{violation}")
}

/// Checks `cond` if the category of `violation` is enabled, trapping on failure.
///
/// ```should_panic
/// use boundview_core::{hardening::{self, Violation}, hardening_assert};
///
/// if !hardening::enabled(Violation::DereferenceAtEnd.category()) {
///     panic!("checks are compiled out in this build");
/// }
/// let (current, end) = (3, 3);
/// hardening_assert!(current != end, Violation::DereferenceAtEnd);
/// ```
#[macro_export]
macro_rules! hardening_assert {
    ($cond:expr, $violation:expr $(,)?) => {{
        let violation: $crate::hardening::Violation = $violation;
        if $crate::hardening::enabled(violation.category()) && !($cond) {
            $crate::hardening::trap(violation);
        }
    }};
}
