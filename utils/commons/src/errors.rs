use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Mutating call while the contract is paused (Error code: -4).
    Paused,
    /// Event id was never issued (Error code: -5).
    EventNotFound,
    /// Recipient already holds a token for this event (Error code: -6).
    AlreadyAssigned,
    /// Sender lacks the ownership, role or admin rights required (Error code: -7).
    NoAccess,
    /// Positional index is past the end of the enumeration (Error code: -8).
    OutOfRange,
    /// Batch lists do not line up, a batch is too large or a URI is too long
    /// (Error code: -9).
    InvalidParams,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
