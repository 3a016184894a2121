use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Token ids are issued from a monotonic counter starting at 1.
pub type ContractTokenId = TokenIdU64;

/// Contract token amount type. Every token is unique, so the amount is either
/// 0 or 1.
pub type ContractTokenAmount = TokenAmountU8;

/// Identifier of an event. Issued from a monotonic counter starting at 1.
pub type EventId = u64;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

/// Tagged CIS2 event specialized to the token types of this contract.
pub type ContractEvent = Cis2Event<ContractTokenId, ContractTokenAmount>;
