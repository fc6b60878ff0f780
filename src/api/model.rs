//! Backend response types
//!
//! Parsing is done on raw JSON text so the same functions serve live
//! responses and tests.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use crate::features::ScanResult;

/// Fallback for error responses without a usable `message`
pub const REQUEST_FAILED: &str = "Request failed";

fn get_val_chain<'a, T>(v: &'a Value, names: &[&str]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let v = names.iter().try_fold(v, |v, n| {
        v.get(n)
            .ok_or_else(|| anyhow!("key '{}' not found, in chain {:?}", n, names))
    })?;
    Ok(T::deserialize(v)?)
}

macro_rules! get_val {
    ($v:expr, $($n:expr),+) => {
        get_val_chain($v, &[$($n),+]).context(format!("at {}:{}", file!(), line!()))
    };
}

/// Successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub reg_num: String,
}

/// Successful check-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    pub message: String,
    pub name: String,
    pub reg_num: String,
}

impl From<CheckIn> for ScanResult {
    fn from(c: CheckIn) -> Self {
        ScanResult::Success {
            message: c.message,
            name: c.name,
            reg_num: c.reg_num,
        }
    }
}

/// Backend call failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response; `message` is the body's message or the fallback
    Status { code: u16, message: String },
    /// Connection, timeout or body read failure
    Transport(String),
    /// 2xx response that does not have the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Status { message, .. } => write!(f, "{}", message),
            ApiError::Transport(e) => write!(f, "Network error: {}", e),
            ApiError::Decode(_) => write!(f, "Unexpected response from server"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for ScanResult {
    fn from(e: ApiError) -> Self {
        ScanResult::error(e.to_string())
    }
}

/// Message carried by an error body, or the generic fallback
pub fn to_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| REQUEST_FAILED.to_string())
}

/// `POST /api/registers` → `{register: {regNum}}`
pub fn to_registration(json: &str) -> Result<Registration> {
    let value = &serde_json::from_str::<Value>(json)?;
    let reg_num: String = get_val!(value, "register", "regNum")?;
    Ok(Registration { reg_num })
}

/// `POST /api/registers/{day}` → `{message, data: {name, regNum}}`
pub fn to_check_in(json: &str) -> Result<CheckIn> {
    let value = &serde_json::from_str::<Value>(json)?;
    Ok(CheckIn {
        message: get_val!(value, "message")?,
        name: get_val!(value, "data", "name")?,
        reg_num: get_val!(value, "data", "regNum")?,
    })
}

/// `GET /api/registers/{day}` → `{count}`; absent count reads as zero
pub fn to_count(json: &str) -> Result<u64> {
    let value = &serde_json::from_str::<Value>(json)?;
    Ok(value.get("count").and_then(Value::as_u64).unwrap_or(0))
}
