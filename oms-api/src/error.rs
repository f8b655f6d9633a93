use thiserror::Error;

/// Rejections raised while normalizing raw user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Qty: {0:?}")]
    InvalidQuantity(String),

    #[error("Invalid Price: {0:?}")]
    InvalidPrice(String),

    #[error("Invalid StopPrice: {0:?}")]
    InvalidStopPrice(String),

    #[error("Invalid StrikePrice: {0:?}")]
    InvalidStrikePrice(String),

    #[error("Missing {0}")]
    MissingField(&'static str),

    /// Both legs of a cross were given the same client order id.
    #[error("Buy and sell legs share ClOrdID {0}")]
    DuplicateLegClOrdId(String),

    /// The ticket names a session nobody configured.
    #[error("Unknown session {0:?}")]
    UnknownSession(String),
}

/// Error type shared by every order-state component.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OmsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup missed. `kind` names the index, `key` the value looked up.
    #[error("could not find {kind} with {key}")]
    NotFound { kind: &'static str, key: String },

    /// No builder exists for this operation on this protocol version.
    #[error("{operation} is not supported for BeginString {version:?}")]
    UnsupportedVersion {
        operation: &'static str,
        version: String,
    },

    #[error("{0} is not implemented")]
    Unimplemented(&'static str),

    /// The generator produced an id that is already indexed.
    #[error("ClOrdID {0} is already in use")]
    DuplicateClOrdId(String),

    /// A built message lacks a field its version makes mandatory.
    #[error("MsgType {msg_type} is missing required tag {tag}")]
    MissingRequiredField { msg_type: &'static str, tag: u32 },
}

impl OmsError {
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        OmsError::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn unsupported(operation: &'static str, version: impl Into<String>) -> Self {
        OmsError::UnsupportedVersion {
            operation,
            version: version.into(),
        }
    }
}

/// A specialized Result type for order-state operations.
pub type Result<T> = std::result::Result<T, OmsError>;
