// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DedicationInterval, OPEN_END};
use time::Date;
use time::macros::date;

fn closed(start: Date, end: Date) -> DedicationInterval {
    DedicationInterval::new(start, Some(end))
}

fn sample_intervals() -> Vec<DedicationInterval> {
    vec![
        closed(date!(2025 - 01 - 01), date!(2025 - 06 - 30)),
        closed(date!(2025 - 04 - 01), date!(2025 - 09 - 30)),
        closed(date!(2025 - 07 - 01), date!(2025 - 07 - 01)),
        closed(date!(2025 - 06 - 30), date!(2025 - 07 - 15)),
        closed(date!(2024 - 01 - 01), date!(2026 - 12 - 31)),
        closed(date!(2025 - 10 - 01), date!(2025 - 12 - 31)),
        DedicationInterval::new(date!(2025 - 05 - 01), None),
        DedicationInterval::new(date!(2030 - 01 - 01), None),
    ]
}

#[test]
fn test_effective_end_of_open_interval_is_sentinel() {
    let interval: DedicationInterval = DedicationInterval::new(date!(2025 - 01 - 01), None);
    assert!(interval.is_open_ended());
    assert_eq!(interval.effective_end(), OPEN_END);
}

#[test]
fn test_partial_overlap() {
    let first: DedicationInterval = closed(date!(2025 - 01 - 01), date!(2025 - 06 - 30));
    let second: DedicationInterval = closed(date!(2025 - 04 - 01), date!(2025 - 09 - 30));
    assert!(first.overlaps(&second));
}

#[test]
fn test_shared_boundary_day_overlaps() {
    let first: DedicationInterval = closed(date!(2025 - 01 - 01), date!(2025 - 06 - 30));
    let second: DedicationInterval = closed(date!(2025 - 06 - 30), date!(2025 - 07 - 15));
    assert!(first.overlaps(&second));
}

#[test]
fn test_adjacent_intervals_do_not_overlap() {
    let first: DedicationInterval = closed(date!(2025 - 01 - 01), date!(2025 - 06 - 30));
    let second: DedicationInterval = closed(date!(2025 - 07 - 01), date!(2025 - 07 - 01));
    assert!(!first.overlaps(&second));
}

#[test]
fn test_containment_overlaps_both_ways() {
    let outer: DedicationInterval = closed(date!(2024 - 01 - 01), date!(2026 - 12 - 31));
    let inner: DedicationInterval = closed(date!(2025 - 07 - 01), date!(2025 - 07 - 01));
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn test_overlap_is_symmetric() {
    let intervals: Vec<DedicationInterval> = sample_intervals();
    for a in &intervals {
        for b in &intervals {
            assert_eq!(a.overlaps(b), b.overlaps(a), "{a} vs {b}");
        }
    }
}

#[test]
fn test_interval_overlaps_itself() {
    for interval in sample_intervals() {
        assert!(interval.overlaps(&interval), "{interval}");
    }
}

#[test]
fn test_open_interval_overlaps_anything_reaching_its_start() {
    let open: DedicationInterval = DedicationInterval::new(date!(2025 - 05 - 01), None);

    assert!(open.overlaps(&closed(date!(2025 - 01 - 01), date!(2025 - 05 - 01))));
    assert!(open.overlaps(&closed(date!(2040 - 01 - 01), date!(2040 - 01 - 02))));
    assert!(open.overlaps(&DedicationInterval::new(date!(2099 - 01 - 01), None)));
    assert!(!open.overlaps(&closed(date!(2025 - 01 - 01), date!(2025 - 04 - 30))));
}

#[test]
fn test_contains_is_inclusive() {
    let interval: DedicationInterval = closed(date!(2025 - 01 - 10), date!(2025 - 01 - 20));
    assert!(interval.contains(date!(2025 - 01 - 10)));
    assert!(interval.contains(date!(2025 - 01 - 15)));
    assert!(interval.contains(date!(2025 - 01 - 20)));
    assert!(!interval.contains(date!(2025 - 01 - 09)));
    assert!(!interval.contains(date!(2025 - 01 - 25)));
}

#[test]
fn test_display() {
    assert_eq!(
        closed(date!(2025 - 01 - 10), date!(2025 - 01 - 20)).to_string(),
        "2025-01-10 to 2025-01-20"
    );
    assert_eq!(
        DedicationInterval::new(date!(2025 - 01 - 10), None).to_string(),
        "2025-01-10 onward"
    );
}
