//! Bond and angle constraint type tables loaded from TOML.
//!
//! A table lists one entry per type, in type-id order:
//!
//! ```toml
//! [[bond_types]]
//! r0 = 1.0
//! k = 10.0
//!
//! [[angle_cst_types]]
//! t0 = 3.141592653589793
//! k = 1.0
//! ```
//!
//! Parsing only checks the shape of the document. Parameter values are
//! checked when the rows are registered into a matrix with
//! [`ExtraCellularMatrix::with_type_tables`](crate::ExtraCellularMatrix::with_type_tables).

use crate::error::Error;
use serde::Deserialize;
use std::sync::OnceLock;

const DEFAULT_TYPES_TOML: &str = include_str!("../resources/default.types.toml");

static DEFAULT_TYPES: OnceLock<TypeTableParams> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TypeTableParams {
    #[serde(default)]
    pub bond_types: Vec<BondTypeParams>,
    #[serde(default)]
    pub angle_cst_types: Vec<AngleCstTypeParams>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BondTypeParams {
    pub r0: f64,
    pub k: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AngleCstTypeParams {
    pub t0: f64,
    pub k: f64,
}

/// Parses `custom_toml`, or returns the built-in tables when `None`.
pub fn load_type_tables(custom_toml: Option<&str>) -> Result<TypeTableParams, Error> {
    match custom_toml {
        Some(toml) => {
            let params: TypeTableParams = toml::from_str(toml)?;
            Ok(params)
        }
        None => Ok(default_type_tables().clone()),
    }
}

pub fn default_type_tables() -> &'static TypeTableParams {
    DEFAULT_TYPES.get_or_init(|| {
        toml::from_str(DEFAULT_TYPES_TOML)
            .expect("Failed to parse embedded default type tables. This is a library bug.")
    })
}
