//! 商品适用性别

use std::fmt;
use std::str::FromStr;

use catalog_errors::AppError;
use serde::{Deserialize, Serialize};

/// 适用性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
            Gender::Unisex => "unisex",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "men" => Ok(Gender::Men),
            "women" => Ok(Gender::Women),
            "unisex" => Ok(Gender::Unisex),
            other => Err(AppError::validation(format!(
                "gender must be one of: men, women, unisex (got \"{}\")",
                other
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
