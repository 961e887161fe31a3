//! Table record (mesa) field rules.
//!
//! Presence checks for create and update payloads, plus the default status
//! applied when a create omits one. Shared by the API handlers and the
//! client so both reject the same input.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Entity name used in not-found errors.
pub const ENTITY: &str = "Mesa";

/// Status assigned on create when the payload omits it.
pub const DEFAULT_STATUS: &str = "available";

const CREATE_REQUIRED_MSG: &str = "Name and capacity are required";
const UPDATE_REQUIRED_MSG: &str = "Name, capacity and status are required";
const CAPACITY_POSITIVE_MSG: &str = "Capacity must be a positive integer";

/// A validated set of mutable mesa fields, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MesaFields {
    pub name: String,
    pub capacity: i32,
    pub status: String,
}

/// Validate a create payload.
///
/// `name` and `capacity` must be present and non-empty / non-zero. An
/// absent or empty `status` falls back to [`DEFAULT_STATUS`].
pub fn validate_create(
    name: Option<&str>,
    capacity: Option<i32>,
    status: Option<&str>,
) -> Result<MesaFields, CoreError> {
    let (name, capacity) = match (present(name), capacity.filter(|c| *c != 0)) {
        (Some(name), Some(capacity)) => (name, capacity),
        _ => return Err(CoreError::Validation(CREATE_REQUIRED_MSG.to_string())),
    };
    validate_capacity(capacity)?;

    Ok(MesaFields {
        name: name.to_string(),
        capacity,
        status: present(status).unwrap_or(DEFAULT_STATUS).to_string(),
    })
}

/// Validate an update payload. All three fields are required.
pub fn validate_update(
    name: Option<&str>,
    capacity: Option<i32>,
    status: Option<&str>,
) -> Result<MesaFields, CoreError> {
    let (name, capacity, status) =
        match (present(name), capacity.filter(|c| *c != 0), present(status)) {
            (Some(name), Some(capacity), Some(status)) => (name, capacity, status),
            _ => return Err(CoreError::Validation(UPDATE_REQUIRED_MSG.to_string())),
        };
    validate_capacity(capacity)?;

    Ok(MesaFields {
        name: name.to_string(),
        capacity,
        status: status.to_string(),
    })
}

/// Capacity counts seats, so it must be strictly positive.
pub fn validate_capacity(capacity: i32) -> Result<(), CoreError> {
    if capacity > 0 {
        Ok(())
    } else {
        Err(CoreError::Validation(CAPACITY_POSITIVE_MSG.to_string()))
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
