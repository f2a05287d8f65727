//! Shared constructors for tests. Panicking on a bad literal is fine
//! here: it means the test itself is wrong.

use crate::TimeOfDay;

/// Parses a `HH:MM` literal into a [`TimeOfDay`]
pub(crate) fn time(s: &str) -> TimeOfDay {
    s.parse()
        .unwrap_or_else(|_| panic!("test time literal {s:?} should parse"))
}
