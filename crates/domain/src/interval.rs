// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dedication intervals and the overlap rule.
//!
//! An interval is the pair `(start, effective end)` of an assignment or a
//! query window. A missing end date means the interval is open-ended; for
//! arithmetic it is replaced by [`OPEN_END`].
//!
//! ## Overlap
//!
//! Two intervals overlap when any of these holds, all bounds inclusive:
//!
//! 1. this interval starts inside the other
//! 2. this interval ends inside the other
//! 3. this interval contains the other
//! 4. the other contains this interval
//!
//! The four conditions are evaluated separately and never collapsed into a
//! single range comparison, so boundary-date results stay identical to the
//! stored-query form used by existing data.

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::date;

/// Far-future sentinel standing in for an absent end date.
pub const OPEN_END: Date = date!(9999 - 12 - 31);

/// A closed date interval, optionally open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DedicationInterval {
    start: Date,
    end: Option<Date>,
}

impl DedicationInterval {
    /// Creates a new interval.
    ///
    /// Date ordering is not checked here; callers validate it first.
    #[must_use]
    pub const fn new(start: Date, end: Option<Date>) -> Self {
        Self { start, end }
    }

    /// Returns the first day.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the declared last day, if any.
    #[must_use]
    pub const fn end(&self) -> Option<Date> {
        self.end
    }

    /// Returns the last day, substituting [`OPEN_END`] when open-ended.
    #[must_use]
    pub fn effective_end(&self) -> Date {
        self.end.unwrap_or(OPEN_END)
    }

    /// Returns whether this interval has no end date.
    #[must_use]
    pub const fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }

    /// Returns whether `day` falls within this interval, bounds included.
    #[must_use]
    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.effective_end()
    }

    /// Returns whether the two intervals share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let (start, end) = (self.start, self.effective_end());
        let (other_start, other_end) = (other.start, other.effective_end());

        let starts_inside: bool = other_start <= start && start <= other_end;
        let ends_inside: bool = other_start <= end && end <= other_end;
        let contains_other: bool = start <= other_start && end >= other_end;
        let contained_by_other: bool = start >= other_start && end <= other_end;

        starts_inside || ends_inside || contains_other || contained_by_other
    }
}

impl std::fmt::Display for DedicationInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_open_ended() {
            write!(f, "{} onward", self.start())
        } else {
            write!(f, "{} to {}", self.start(), self.effective_end())
        }
    }
}
