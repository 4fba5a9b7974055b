use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level destination of a tax dollar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Federal,
    StateLocal,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "federal",
            Self::StateLocal => "state_local",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "federal" => Some(Self::Federal),
            "state_local" => Some(Self::StateLocal),
            _ => None,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Federal => write!(f, "Federal"),
            Self::StateLocal => write!(f, "State & Local"),
        }
    }
}

/// Fixed share of a bucket that goes to one spending category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryWeight {
    pub category_name: String,
    pub share_of_bucket: Decimal,
    /// Presentation token, e.g. `bg-blue-500`.
    pub display_color: String,
}

impl CategoryWeight {
    pub fn new(
        category_name: &str,
        share_of_bucket: Decimal,
        display_color: &str,
    ) -> Self {
        Self {
            category_name: category_name.to_string(),
            share_of_bucket,
            display_color: display_color.to_string(),
        }
    }
}
