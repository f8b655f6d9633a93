use oms::OmsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of protocol revisions the factory can build for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolVersion {
    Fix40,
    Fix41,
    Fix42,
    Fix43,
    Fix44,
    /// FIX 5.0 application messages over the FIXT.1.1 session layer.
    Fixt11,
}

impl ProtocolVersion {
    pub const ALL: [ProtocolVersion; 6] = [
        Self::Fix40,
        Self::Fix41,
        Self::Fix42,
        Self::Fix43,
        Self::Fix44,
        Self::Fixt11,
    ];

    pub fn begin_string(&self) -> &'static str {
        match self {
            Self::Fix40 => "FIX.4.0",
            Self::Fix41 => "FIX.4.1",
            Self::Fix42 => "FIX.4.2",
            Self::Fix43 => "FIX.4.3",
            Self::Fix44 => "FIX.4.4",
            Self::Fixt11 => "FIXT.1.1",
        }
    }

    /// Resolves a session's BeginString.
    ///
    /// # Arguments
    ///
    /// * `operation` - Name of the build being attempted, for the error.
    /// * `begin_string` - The session's version tag.
    pub fn resolve(operation: &'static str, begin_string: &str) -> Result<Self, OmsError> {
        Self::ALL
            .into_iter()
            .find(|v| v.begin_string() == begin_string)
            .ok_or_else(|| OmsError::unsupported(operation, begin_string))
    }

    /// ApplVerID carried in the header, for session layers that need one.
    pub fn appl_ver_id(&self) -> Option<&'static str> {
        match self {
            Self::Fixt11 => Some("7"),
            _ => None,
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.begin_string())
    }
}
