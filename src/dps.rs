// src/dps.rs - Raw data-point values as exchanged with the device
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single raw data-point (DP) value.
///
/// Tuya devices report state as a flat map of short decimal string ids to
/// primitive values. Only the three shapes this device uses are modelled:
/// booleans, integers, and string-valued enumerations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DpValue {
    Bool(bool),
    Integer(i64),
    Enum(String),
}

impl DpValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DpValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            DpValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&str> {
        match self {
            DpValue::Enum(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl From<bool> for DpValue {
    fn from(value: bool) -> Self {
        DpValue::Bool(value)
    }
}

impl From<i64> for DpValue {
    fn from(value: i64) -> Self {
        DpValue::Integer(value)
    }
}

impl From<&str> for DpValue {
    fn from(value: &str) -> Self {
        DpValue::Enum(value.to_string())
    }
}

impl From<String> for DpValue {
    fn from(value: String) -> Self {
        DpValue::Enum(value)
    }
}

/// Flat map of DP id to value, keyed by the device's short decimal ids.
pub type DpMap = HashMap<String, DpValue>;

/// Build a [`DpMap`] from (id, value) pairs.
pub fn dp_map<const N: usize>(entries: [(&str, DpValue); N]) -> DpMap {
    entries
        .into_iter()
        .map(|(id, value)| (id.to_string(), value))
        .collect()
}
