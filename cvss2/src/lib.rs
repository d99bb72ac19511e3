//! CVSS v2 metric factors.
//!
//! Every metric of the v2 base, temporal and environmental groups is a closed
//! enumeration implementing [`Factor`]. Values coming from untrusted input
//! (e.g. a vector string) are wrapped in a [`Metric`], which accepts any code
//! and defers the validity check to the point of use.

#[macro_use]
mod factor;

pub mod base;
pub mod environmental;
pub mod error;
pub mod schema;
pub mod temporal;


pub use base::{AccessComplexity, AccessVector, Authentication, Impact};
pub use environmental::{CollateralDamagePotential, Requirement, TargetDistribution};
pub use error::Error;
pub use temporal::{Exploitability, RemediationLevel, ReportConfidence};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use strum::VariantArray;

/// Code and label shared by all "not defined" values.
pub const NOT_DEFINED_CODE: &str = "ND";
pub const NOT_DEFINED_LABEL: &str = "Not Defined";

/// The metric group a factor belongs to.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MetricGroup {
    /// Always required, no "not defined" state.
    Base,
    Temporal,
    Environmental,
}

/// Uniform view on a metric, independent of its family.
///
/// Consumers like a score aggregator hold `&dyn MetricFactor` and never need
/// to know the concrete family.
pub trait MetricFactor {
    /// `true` if the value belongs to the family, including "not defined".
    fn is_valid(&self) -> bool;

    /// `true` if the value is valid and not the "not defined" state.
    fn is_defined(&self) -> bool;

    /// The standardized weight of the value.
    fn score(&self) -> Result<f64, Error>;

    /// Human readable label, e.g. "Adjacent Network". Empty if invalid.
    fn long_form(&self) -> &str;

    /// Code as used in a vector string, e.g. "A". Empty if invalid.
    fn short_form(&self) -> &str;

    /// Like [`Self::score`], but uses `NaN` for invalid values.
    fn score_or_nan(&self) -> f64 {
        self.score().unwrap_or(f64::NAN)
    }
}

/// A closed set of metric values, backed by a static table.
///
/// Implemented through the `factor!` macro, never by hand.
pub trait Factor: Copy + Eq + fmt::Debug + fmt::Display + VariantArray {
    /// Name of the metric, e.g. "Access Vector".
    const NAME: &'static str;
    const GROUP: MetricGroup;
    /// The "not defined" value, if the metric is optional.
    const NOT_DEFINED: Option<Self>;

    fn code(self) -> &'static str;

    fn label(self) -> &'static str;

    fn weight(self) -> f64;

    /// Look up a value by its code.
    ///
    /// The empty code is an alias of "ND" for optional metrics.
    fn from_code(code: &str) -> Option<Self> {
        if code.is_empty() {
            return Self::NOT_DEFINED;
        }

        Self::VARIANTS.iter().copied().find(|v| v.code() == code)
    }

    fn is_not_defined(self) -> bool {
        Self::NOT_DEFINED == Some(self)
    }
}

/// A metric value parsed from possibly malformed input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Metric<F> {
    Value(F),
    /// The code was not part of the family, kept as it was provided.
    Invalid(String),
}

impl<F: Factor> Metric<F> {
    /// Parse a code, never failing.
    pub fn parse(code: &str) -> Self {
        match F::from_code(code) {
            Some(value) => Self::Value(value),
            None => {
                log::debug!("invalid {} code: {code:?}", F::NAME);
                Self::Invalid(code.to_string())
            }
        }
    }

    pub fn value(&self) -> Option<F> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Invalid(_) => None,
        }
    }

    /// Turn into the strict value, failing for invalid codes.
    pub fn into_value(self) -> Result<F, Error> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Invalid(code) => Err(Error::invalid_code(F::NAME, code)),
        }
    }
}

impl<F: Factor> MetricFactor for Metric<F> {
    fn is_valid(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    fn is_defined(&self) -> bool {
        self.value().is_some_and(|v| !v.is_not_defined())
    }

    fn score(&self) -> Result<f64, Error> {
        match self {
            Self::Value(value) => Ok(value.weight()),
            Self::Invalid(code) => Err(Error::invalid_code(F::NAME, code.as_str())),
        }
    }

    fn long_form(&self) -> &str {
        self.value().map(F::label).unwrap_or_default()
    }

    fn short_form(&self) -> &str {
        self.value().map(F::code).unwrap_or_default()
    }
}

impl<F: Factor> From<F> for Metric<F> {
    fn from(value: F) -> Self {
        Self::Value(value)
    }
}

impl<F: Factor> From<&str> for Metric<F> {
    fn from(code: &str) -> Self {
        Self::parse(code)
    }
}

impl<F: Factor> fmt::Display for Metric<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_form())
    }
}

impl<F: Factor> Serialize for Metric<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => serializer.serialize_str(value.code()),
            Self::Invalid(code) => serializer.serialize_str(code),
        }
    }
}

impl<'de, F: Factor> Deserialize<'de> for Metric<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::parse(&code))
    }
}
