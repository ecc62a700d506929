use serde::{Deserialize, Serialize};

/// How [`ZipValues`](super::ZipValues) treats a positions slice the host
/// reports as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsentPositions {
    /// Fail the evaluation with
    /// [`ZipValuesError::AbsentPositions`](super::ZipValuesError::AbsentPositions).
    #[default]
    Reject,
    /// Zip the slice as if it were empty, leaving only the index.
    Empty,
}

/// Configuration for [`ZipValues`](super::ZipValues).
///
/// Every field has a default, so an empty table is a valid config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZipValuesConfig {
    pub absent_positions: AbsentPositions,
}

impl ZipValuesConfig {
    /// Returns `self` with the given absent-slice policy.
    #[must_use]
    pub fn with_absent_positions(self, absent_positions: AbsentPositions) -> Self {
        Self { absent_positions }
    }
}
