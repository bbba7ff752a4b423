//! Motion tokens

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Motion tokens: transition durations and easing curves.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTokens {
    pub duration: IndexMap<String, String>,
    pub easing: IndexMap<String, String>,
}

impl MotionTokens {
    /// Number of CSS variables this record projects to.
    pub fn leaf_count(&self) -> usize {
        self.duration.len() + self.easing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaf_count() == 0
    }
}
