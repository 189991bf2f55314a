//! Input checks shared by every mutating endpoint. Handlers turn raw request
//! fields into typed values here and never re-implement a check.

use chrono::NaiveDate;

use crate::{
    auth::Role,
    db::entities::enums::{TaskPriority, TaskStatus},
    error::AppError,
};

pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Trimmed value when present and non-blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

/// Trimmed text, or `BadRequest(message)` when missing or blank.
pub fn required_text(value: Option<&str>, message: &str) -> Result<String, AppError> {
    non_blank(value)
        .map(str::to_string)
        .ok_or_else(|| AppError::bad_request(message))
}

/// A positive integer id taken from a request body.
pub fn positive_id(value: Option<i64>) -> Option<i32> {
    value
        .filter(|id| *id > 0)
        .and_then(|id| i32::try_from(id).ok())
}

pub fn parse_task_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request("Invalid task ID"))
}

pub fn parse_status(raw: Option<&str>) -> Result<TaskStatus, AppError> {
    non_blank(raw)
        .and_then(|value| TaskStatus::try_from(value).ok())
        .ok_or_else(|| AppError::bad_request("Invalid status value"))
}

pub fn parse_priority(raw: Option<&str>) -> Result<TaskPriority, AppError> {
    non_blank(raw)
        .and_then(|value| TaskPriority::try_from(value).ok())
        .ok_or_else(|| AppError::bad_request("Invalid priority value"))
}

pub fn parse_deadline(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), DEADLINE_FORMAT)
        .map_err(|_| AppError::bad_request("Invalid deadline"))
}

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn parse_role(raw: &str) -> Result<Role, AppError> {
    Role::try_from(raw.trim()).map_err(|_| AppError::bad_request("Invalid account type"))
}
