//! Error types for log data extraction.
//!
//! A marker that is simply absent from a document is *not* an error:
//! scalar extractors return `Ok(None)` and series extractors return an
//! empty `Vec`. The variants here cover genuinely broken input (I/O
//! failures, marker lines whose fixed-column layout does not hold, and
//! geometry tables cut off mid-block) plus out-of-range frame requests.

use std::fmt;

use thiserror::Error;

/// The log field a parse failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AtomCount,
    ScfEnergy,
    Enthalpy,
    EnthalpyCorrection,
    Frequency,
    ReducedMass,
    ForceConstant,
    IrIntensity,
    RamanActivity,
    NmrShielding,
    Geometry,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::AtomCount => "atom count",
            Field::ScfEnergy => "SCF energy",
            Field::Enthalpy => "enthalpy",
            Field::EnthalpyCorrection => "enthalpy correction",
            Field::Frequency => "frequency",
            Field::ReducedMass => "reduced mass",
            Field::ForceConstant => "force constant",
            Field::IrIntensity => "IR intensity",
            Field::RamanActivity => "Raman activity",
            Field::NmrShielding => "NMR shielding",
            Field::Geometry => "geometry",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A marker line matched but its fixed-position token was missing or
    /// failed numeric parsing.
    #[error("malformed {field} line: {details} (at line ~{line})")]
    Malformed {
        field: Field,
        line: usize,
        details: String,
    },

    /// A geometry block opened but the document ended before its
    /// separator/row structure completed. Distinct from "not found": this
    /// indicates a truncated or corrupted file, not an absent calculation
    /// type.
    #[error("truncated geometry block: {details} (block starts at line ~{line})")]
    TruncatedBlock { line: usize, details: String },

    /// A frame was requested at an index the frame sequence does not hold.
    #[error("geometry frame {index} out of range: document holds {count} frame(s)")]
    FrameOutOfRange { index: usize, count: usize },
}

impl Error {
    pub fn malformed(field: Field, line: usize, details: impl Into<String>) -> Self {
        Self::Malformed {
            field,
            line,
            details: details.into(),
        }
    }

    pub fn truncated_block(line: usize, details: impl Into<String>) -> Self {
        Self::TruncatedBlock {
            line,
            details: details.into(),
        }
    }
}
