//! External-interface input types (spec §6): one raw row per vendor
//! record, already resolved to canonical field names by the ingest
//! collaborator, plus one run wrapper carrying the inspection year.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw field value as it may arrive from the column-name resolver:
/// clock position can be a string ("2:15") or a bare number (degrees or
/// decimal hours), per spec §4.1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClockValue {
    Text(String),
    Number(f64),
}

/// One canonical-column-mapped input row, as produced by the (external)
/// column-name resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub feature_id: Option<String>,
    pub distance: Option<f64>,
    pub odometer: Option<f64>,
    pub joint_number: Option<i64>,
    pub clock_position: Option<ClockValue>,
    pub feature_type: Option<String>,
    pub depth_percent: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub wall_thickness: Option<f64>,
    pub weld_type: Option<String>,
    pub relative_position: Option<String>,
    /// Vendor columns the engine does not read, kept for downstream
    /// collaborators (GPS interpolation, reporting) per the Design Note
    /// "Dynamic row records".
    #[serde(default)]
    pub extras: BTreeMap<String, Value>,
}

/// One inspection run's raw rows plus its inspection year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunInput {
    pub rows: Vec<RawRow>,
    pub year: i32,
}
