//! Canonical anomaly feature types and the vendor-string mapping table.

use serde::{Deserialize, Serialize};

/// The closed set of feature types the engine understands.
///
/// Reference features (used to anchor coordinate alignment) are
/// `GirthWeld`, `Valve`, and `Fitting` — see [`CanonicalType::is_reference_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalType {
    ExternalMetalLoss,
    InternalMetalLoss,
    MetalLoss,
    Dent,
    Crack,
    Gouge,
    Lamination,
    ManufacturingDefect,
    GirthWeld,
    SeamWeld,
    Valve,
    Fitting,
    Casing,
    Unknown,
}

impl CanonicalType {
    /// Whether this type anchors coordinate alignment (girth weld, valve, fitting).
    pub fn is_reference_point(self) -> bool {
        matches!(self, Self::GirthWeld | Self::Valve | Self::Fitting)
    }

    /// Map a raw vendor feature-type string to the canonical enum.
    ///
    /// The string is lower-cased and trimmed, then matched against a
    /// substring-containment table. Unknown or empty input maps to
    /// [`CanonicalType::Unknown`]; normalization never fails.
    pub fn from_raw(raw: &str) -> Self {
        let s = raw.trim().to_lowercase();
        if s.is_empty() {
            return Self::Unknown;
        }

        // Welds are checked before generic "weld" substrings so that
        // "girth weld" and "seam weld" resolve to their specific variant.
        if s.contains("girth") {
            return Self::GirthWeld;
        }
        if s.contains("seam") {
            return Self::SeamWeld;
        }
        if s.contains("weld") {
            // Unqualified weld mentions default to girth welds, the far
            // more common reference feature in ILI data.
            return Self::GirthWeld;
        }
        if s.contains("valve") {
            return Self::Valve;
        }
        if s.contains("fitting") || s.contains("flange") || s.contains("tee") {
            return Self::Fitting;
        }
        if s.contains("casing") {
            return Self::Casing;
        }
        if s.contains("manufactur") {
            return Self::ManufacturingDefect;
        }
        if s.contains("lamination") {
            return Self::Lamination;
        }
        if s.contains("gouge") {
            return Self::Gouge;
        }
        if s.contains("crack") {
            return Self::Crack;
        }
        if s.contains("dent") {
            return Self::Dent;
        }
        if s.contains("external") && (s.contains("corrosion") || s.contains("metal loss")) {
            return Self::ExternalMetalLoss;
        }
        if s.contains("internal") && (s.contains("corrosion") || s.contains("metal loss")) {
            return Self::InternalMetalLoss;
        }
        if s.contains("corrosion") || s.contains("metal loss") || s.contains("pitting") {
            return Self::MetalLoss;
        }

        Self::Unknown
    }

    /// Whether two feature types are "compatible" under the similarity
    /// scorer's feature-type component (spec §4.7).
    pub fn compatible(self, other: Self) -> bool {
        use CanonicalType::{
            Crack, ExternalMetalLoss, GirthWeld, Gouge, InternalMetalLoss, MetalLoss, SeamWeld,
        };
        matches!(
            (self, other),
            (ExternalMetalLoss, MetalLoss)
                | (MetalLoss, ExternalMetalLoss)
                | (InternalMetalLoss, MetalLoss)
                | (MetalLoss, InternalMetalLoss)
                | (ExternalMetalLoss, InternalMetalLoss)
                | (InternalMetalLoss, ExternalMetalLoss)
                | (Crack, Gouge)
                | (Gouge, Crack)
                | (GirthWeld, SeamWeld)
                | (SeamWeld, GirthWeld)
        )
    }
}
