use std::fmt;

use serde::{Deserialize, Serialize};

/// The cheaper of the two housing options for a set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    CityCenter,
    Suburbs,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CityCenter => "city_center",
            Self::Suburbs => "suburbs",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "city_center" => Some(Self::CityCenter),
            "suburbs" => Some(Self::Suburbs),
            _ => None,
        }
    }

    /// Human readable option name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CityCenter => "City Center",
            Self::Suburbs => "Suburbs",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
