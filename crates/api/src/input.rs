// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of raw request fields into domain values.

use staffing_domain::{
    AssignmentDraft, Availability, MAX_DEDICATION, ProjectState, parse_calendar_day,
};
use time::Date;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::AssignmentRequest;

/// Rejects an empty or whitespace-only string.
pub fn require_text(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} must not be empty"),
        });
    }
    Ok(trimmed.to_string())
}

pub fn parse_date(field: &str, value: &str) -> Result<Date, ApiError> {
    parse_calendar_day(value).map_err(|err| ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    })
}

pub fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<Date>, ApiError> {
    value.map(|value| parse_date(field, value)).transpose()
}

pub fn parse_availability(value: Option<&str>) -> Result<Availability, ApiError> {
    value.map_or(Ok(Availability::default()), |value| {
        value.trim().parse().map_err(translate_domain_error)
    })
}

pub fn parse_project_state(value: Option<&str>) -> Result<ProjectState, ApiError> {
    value.map_or(Ok(ProjectState::default()), |value| {
        value.trim().parse().map_err(translate_domain_error)
    })
}

pub fn parse_dedication(value: Option<i64>) -> Result<Option<u8>, ApiError> {
    value
        .map(|value| {
            u8::try_from(value)
                .ok()
                .filter(|dedication| u32::from(*dedication) <= MAX_DEDICATION)
                .ok_or_else(|| ApiError::InvalidInput {
                    field: String::from("dedication"),
                    message: format!("Dedication must be between 0 and 100, got {value}"),
                })
        })
        .transpose()
}

/// Parses assignment request fields into a draft.
///
/// An empty role is treated as no role.
pub fn parse_assignment_request(request: &AssignmentRequest) -> Result<AssignmentDraft, ApiError> {
    let role: Option<String> = request
        .role
        .as_deref()
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(str::to_string);

    Ok(AssignmentDraft {
        consultant_id: request.consultant_id,
        project_id: request.project_id,
        role,
        dedication: parse_dedication(request.dedication)?,
        start_date: parse_date("start_date", &request.start_date)?,
        end_date: parse_optional_date("end_date", request.end_date.as_deref())?,
    })
}
