//! Iterator categories.
//!
//! Categories form a total order: every category supports all the operations of
//! the ones below it. Adaptors compute their own category from the category of
//! the cursor they wrap, usually by capping it with [`IteratorCategory::min`].

use core::fmt;

/// Traversal capability of a cursor, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IteratorCategory {
    /// Single pass. Dereferencing may produce a temporary.
    Input,
    /// Multi pass. Dereferencing produces a stable reference.
    Forward,
    /// Forward, plus stepping backwards.
    Bidirectional,
    /// Bidirectional, plus constant time jumps and distances.
    RandomAccess,
    /// Random access over elements laid out contiguously in memory.
    Contiguous,
}

impl IteratorCategory {
    /// The weaker of the two categories.
    pub const fn min(self, other: Self) -> Self {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    /// Whether `self` supports everything `other` supports.
    pub const fn at_least(self, other: Self) -> bool {
        (self as u8) >= (other as u8)
    }

    pub const fn name(self) -> &'static str {
        match self {
            IteratorCategory::Input => "input",
            IteratorCategory::Forward => "forward",
            IteratorCategory::Bidirectional => "bidirectional",
            IteratorCategory::RandomAccess => "random access",
            IteratorCategory::Contiguous => "contiguous",
        }
    }
}

impl fmt::Display for IteratorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
