// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::store::AssignmentStore;
use staffing_domain::{Assignment, DedicationInterval};
use time::Date;
use tracing::debug;

/// Returns the dedication a consultant has committed over a window.
///
/// Sums the dedication of every assignment of the consultant whose interval
/// overlaps `[window_start, window_end]`. An absent `window_end` is an
/// unbounded upper limit; an absent dedication counts as 0.
///
/// # Arguments
///
/// * `store` - The assignment store
/// * `consultant_id` - The consultant
/// * `window_start` - First day of the window
/// * `window_end` - Last day of the window, `None` for open-ended
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn cumulative_dedication<S>(
    store: &mut S,
    consultant_id: i64,
    window_start: Date,
    window_end: Option<Date>,
) -> Result<u32, CoreError>
where
    S: AssignmentStore + ?Sized,
{
    let window: DedicationInterval = DedicationInterval::new(window_start, window_end);
    let assignments: Vec<Assignment> = store.assignments_by_consultant(consultant_id)?;

    let total: u32 = assignments
        .iter()
        .filter(|assignment| assignment.interval().overlaps(&window))
        .map(Assignment::dedication_or_zero)
        .fold(0_u32, u32::saturating_add);

    debug!(consultant_id, %window, total, "Computed cumulative dedication");

    Ok(total)
}
