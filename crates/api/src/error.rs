// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use staffing::CoreError;
use staffing_domain::{DomainError, ErrorKind};
use staffing_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A business rule rejected an otherwise well-formed request.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The request collides with existing state.
    Conflict {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the collision.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::Conflict { rule, message } => {
                write!(f, "Conflict ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Names what an error is about: the resource for a missing entity, the
/// rule for a violation or conflict, and the field for malformed input.
const fn error_label(err: &DomainError) -> &'static str {
    match err {
        DomainError::ConsultantNotFound(_) => "Consultant",
        DomainError::ProjectNotFound(_) => "Project",
        DomainError::AssignmentNotFound(_) => "Assignment",
        DomainError::HourLogNotFound(_) => "Hour log",
        DomainError::DuplicateAssignment { .. } => "unique_assignment",
        DomainError::ProjectFinished { .. } => "project_open",
        DomainError::ConsultantUnavailable { .. } => "consultant_available",
        DomainError::DuplicateHourLog { .. } => "unique_hour_log",
        DomainError::EndBeforeStart { .. } => "date_order",
        DomainError::ProjectWithoutStartDate { .. }
        | DomainError::StartsBeforeProject { .. }
        | DomainError::EndsAfterProject { .. } => "within_project_dates",
        DomainError::DedicationExceeded { .. } => "dedication_ceiling",
        DomainError::HoursNotPositive | DomainError::HoursExceedDay => "hours_range",
        DomainError::NotAssigned { .. } => "assigned_to_project",
        DomainError::OutsideAssignmentRange { .. } => "within_assignment_dates",
        DomainError::DateParseError { .. } => "date",
        DomainError::InvalidAvailability(_) => "availability",
        DomainError::InvalidProjectState(_) => "state",
    }
}

/// Translates a domain error into an API error.
///
/// The category follows [`DomainError::kind`]; the variant only picks the
/// label. The engine's message text is kept verbatim.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let label: String = error_label(&err).to_string();
    let message: String = err.to_string();

    match err.kind() {
        ErrorKind::NotFound => ApiError::ResourceNotFound {
            resource_type: label,
            message,
        },
        ErrorKind::Conflict => ApiError::Conflict {
            rule: label,
            message,
        },
        ErrorKind::Validation => ApiError::DomainRuleViolation {
            rule: label,
            message,
        },
        ErrorKind::InvalidInput => ApiError::InvalidInput {
            field: label,
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Store(store_err) => ApiError::Internal {
            message: store_err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}
