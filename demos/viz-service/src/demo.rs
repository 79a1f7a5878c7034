//! Demonstration values served by `/viz`, `/struct` and `/slice`.

use crate::error::{Result, ServiceError};
use mosaic::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// A small record with one field of each leaf kind and one private field.
#[derive(Debug, Serialize)]
pub struct Sample {
    #[serde(rename = "X")]
    pub x: i64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: bool,
    pub _s: i64,
}

pub fn sample() -> Sample {
    Sample {
        x: -1234,
        y: 0.73,
        z: true,
        _s: 11235813,
    }
}

#[derive(Debug, Serialize)]
pub struct Inner {
    #[serde(rename = "Bs")]
    pub bools: Vec<bool>,
    #[serde(rename = "Strs")]
    pub strings: Vec<String>,
    #[serde(rename = "F")]
    pub f: f64,
}

#[derive(Debug, Serialize)]
pub struct Item {
    #[serde(rename = "X")]
    pub x: i64,
    #[serde(rename = "F")]
    pub f: f64,
    #[serde(rename = "W")]
    pub w: String,
    #[serde(rename = "I")]
    pub inner: Inner,
    #[serde(rename = "M")]
    pub m: BTreeMap<i64, Vec<i64>>,
}

/// Sixteen records whose boolean rows spell the 4-bit Gray code.
pub fn slice() -> Vec<Item> {
    (0..16i64)
        .map(|i| {
            let gray = i ^ (i >> 1);
            let bools: Vec<bool> = (0..8).map(|bit| (gray >> bit) & 1 == 0).collect();
            let strings = bools.iter().map(|b| b.to_string()).collect();
            let m = (0..i).map(|j| (j, (0..j).collect())).collect();

            Item {
                x: i,
                f: (i as f64 / 4.0).sin(),
                w: i.to_string(),
                inner: Inner {
                    bools,
                    strings,
                    f: (i as f64 / 2.0).cos(),
                },
                m,
            }
        })
        .collect()
}

/// Parses a `/viz` literal of the given scalar type.
pub fn parse_literal(kind: &str, literal: &str) -> Result<Value> {
    let invalid = || ServiceError::InvalidRequest(format!("'{}' is not a valid {}", literal, kind));
    match kind {
        "int" => literal.parse::<i64>().map(Value::from).map_err(|_| invalid()),
        "float" => literal.parse::<f64>().map(Value::from).map_err(|_| invalid()),
        "bool" => parse_bool(literal).map(Value::from).ok_or_else(invalid),
        "byte" => literal.parse::<u8>().map(Value::from).map_err(|_| invalid()),
        "string" => Ok(Value::from(literal)),
        other => Err(ServiceError::InvalidRequest(format!(
            "unknown type '{}', expected one of int, float, bool, byte, string",
            other
        ))),
    }
}

fn parse_bool(literal: &str) -> Option<bool> {
    match literal {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
