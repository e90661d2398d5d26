//! Notification dialect selector.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which flavour of NGSI a notification body is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// NGSI v2: an object with a `data` array of flat entities.
    V2,
    /// NGSI-LD: a top-level array of (temporal or instantaneous) entities.
    Ld,
}

impl Dialect {
    /// The canonical lower-case version tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::Ld => "ld",
        }
    }

    /// Returns true for NGSI-LD.
    #[must_use]
    pub const fn is_linked_data(&self) -> bool {
        matches!(self, Self::Ld)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    /// Parses a version tag, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("v2") {
            Ok(Self::V2)
        } else if s.eq_ignore_ascii_case("ld") {
            Ok(Self::Ld)
        } else {
            Err(Error::UnknownDialect(s.to_string()))
        }
    }
}
