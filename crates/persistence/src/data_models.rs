// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use staffing_domain::{Availability, ProjectState};
use time::Date;

/// Fields for registering a consultant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConsultant {
    pub name: String,
    pub specialty: String,
    pub availability: Availability,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Fields for registering a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub state: ProjectState,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}
