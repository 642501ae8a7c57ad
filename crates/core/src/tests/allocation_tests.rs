// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the cumulative dedication query.

use crate::cumulative_dedication;
use staffing_domain::{Availability, ProjectState};
use time::macros::date;

use super::helpers::{InMemoryStore, create_test_draft, create_test_store};

#[test]
fn test_no_assignments_means_zero() {
    let (mut store, consultant_id, _) = create_test_store();
    let total: u32 =
        cumulative_dedication(&mut store, consultant_id, date!(2025 - 01 - 01), None).unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_sums_only_overlapping_assignments() {
    let (mut store, consultant_id, project_id) = create_test_store();
    store.seed_assignment(create_test_draft(
        consultant_id,
        project_id,
        Some(30),
        date!(2025 - 01 - 01),
        Some(date!(2025 - 03 - 31)),
    ));
    store.seed_assignment(create_test_draft(
        consultant_id,
        project_id,
        Some(20),
        date!(2025 - 03 - 01),
        Some(date!(2025 - 06 - 30)),
    ));
    store.seed_assignment(create_test_draft(
        consultant_id,
        project_id,
        Some(40),
        date!(2025 - 07 - 01),
        Some(date!(2025 - 12 - 31)),
    ));

    let total: u32 = cumulative_dedication(
        &mut store,
        consultant_id,
        date!(2025 - 03 - 15),
        Some(date!(2025 - 04 - 15)),
    )
    .unwrap();
    assert_eq!(total, 50);
}

#[test]
fn test_open_window_reaches_future_assignments() {
    let (mut store, consultant_id, project_id) = create_test_store();
    store.seed_assignment(create_test_draft(
        consultant_id,
        project_id,
        Some(25),
        date!(2030 - 01 - 01),
        Some(date!(2030 - 02 - 01)),
    ));
    store.seed_assignment(create_test_draft(
        consultant_id,
        project_id,
        Some(35),
        date!(2028 - 01 - 01),
        None,
    ));

    let total: u32 =
        cumulative_dedication(&mut store, consultant_id, date!(2025 - 01 - 01), None).unwrap();
    assert_eq!(total, 60);
}

#[test]
fn test_absent_dedication_counts_as_zero() {
    let (mut store, consultant_id, project_id) = create_test_store();
    store.seed_assignment(create_test_draft(
        consultant_id,
        project_id,
        None,
        date!(2025 - 01 - 01),
        None,
    ));
    store.seed_assignment(create_test_draft(
        consultant_id,
        project_id,
        Some(10),
        date!(2025 - 01 - 01),
        None,
    ));

    let total: u32 =
        cumulative_dedication(&mut store, consultant_id, date!(2025 - 06 - 01), None).unwrap();
    assert_eq!(total, 10);
}

#[test]
fn test_other_consultants_are_ignored() {
    let mut store: InMemoryStore = InMemoryStore::default();
    let first: i64 = store.add_consultant("Ada", Availability::Available);
    let second: i64 = store.add_consultant("Grace", Availability::Available);
    let project_id: i64 = store.add_project(ProjectState::Pending, None, None);
    store.seed_assignment(create_test_draft(
        second,
        project_id,
        Some(80),
        date!(2025 - 01 - 01),
        None,
    ));

    let total: u32 = cumulative_dedication(&mut store, first, date!(2025 - 01 - 01), None).unwrap();
    assert_eq!(total, 0);
}
