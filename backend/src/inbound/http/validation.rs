//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper rejects before any domain call runs and tags the error with
//! `{field, code}` details so clients can highlight the offending input.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::domain::{Error, MovementType};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    InvalidDate,
    InvalidAmount,
    InvalidMovementType,
    InvalidNumber,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidAmount => "invalid_amount",
            ErrorCode::InvalidMovementType => "invalid_movement_type",
            ErrorCode::InvalidNumber => "invalid_number",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn invalid_value_error(
    field: FieldName,
    message: impl Into<String>,
    code: ErrorCode,
    value: &str,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| {
        let name = field.as_str();
        invalid_value_error(
            field,
            format!("{name} debe ser un UUID válido"),
            ErrorCode::InvalidUuid,
            value,
        )
    })
}

pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let name = field.as_str();
        invalid_value_error(
            field,
            format!("{name} debe ser una fecha válida (YYYY-MM-DD)"),
            ErrorCode::InvalidDate,
            value,
        )
    })
}

pub(crate) fn parse_movement_type(value: &str, field: FieldName) -> Result<MovementType, Error> {
    MovementType::from_str(value).map_err(|_| {
        let name = field.as_str();
        invalid_value_error(
            field,
            format!("{name} debe ser CREDITO o DEBITO"),
            ErrorCode::InvalidMovementType,
            value,
        )
    })
}

/// Parse a JSON number into an exact decimal.
///
/// Parsing goes through the number's textual form, so amounts written with
/// two decimal places stay exact instead of picking up binary float noise.
pub(crate) fn parse_amount(value: &serde_json::Number, field: FieldName) -> Result<Decimal, Error> {
    let rendered = value.to_string();
    Decimal::from_str(&rendered).map_err(|_| {
        let name = field.as_str();
        invalid_value_error(
            field,
            format!("{name} debe ser un número válido"),
            ErrorCode::InvalidAmount,
            &rendered,
        )
    })
}

pub(crate) fn parse_query_int(value: &str, field: FieldName) -> Result<i32, Error> {
    value.trim().parse::<i32>().map_err(|_| {
        invalid_value_error(
            field,
            "Year y month deben ser números válidos",
            ErrorCode::InvalidNumber,
            value,
        )
    })
}
