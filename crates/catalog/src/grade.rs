//! Product grade: a closed set of quality/condition tags.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, ValueObject};

/// Product quality/condition grade.
///
/// The five tags come from the upstream catalog feed and are carried through
/// verbatim on the wire; no other tag is valid. The abbreviations are opaque
/// feed labels, not a taxonomy this crate interprets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeType {
    Hg,
    Mg,
    Sd,
    Pg,
    Rg,
}

impl GradeType {
    /// Every grade, in feed tag order.
    pub const ALL: [GradeType; 5] = [
        GradeType::Hg,
        GradeType::Mg,
        GradeType::Sd,
        GradeType::Pg,
        GradeType::Rg,
    ];

    /// Wire tag for this grade.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeType::Hg => "hg",
            GradeType::Mg => "mg",
            GradeType::Sd => "sd",
            GradeType::Pg => "pg",
            GradeType::Rg => "rg",
        }
    }
}

impl ValueObject for GradeType {}

impl core::fmt::Display for GradeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hg" => Ok(GradeType::Hg),
            "mg" => Ok(GradeType::Mg),
            "sd" => Ok(GradeType::Sd),
            "pg" => Ok(GradeType::Pg),
            "rg" => Ok(GradeType::Rg),
            other => Err(DomainError::validation(format!(
                "unknown grade tag: {other} (expected one of hg, mg, sd, pg, rg)"
            ))),
        }
    }
}
