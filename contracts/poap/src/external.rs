use commons::{ContractTokenId, EventId};
use concordium_std::*;

/// Collection configuration supplied on initialization.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    /// Collection name.
    pub name: String,
    /// Collection symbol.
    pub symbol: String,
    /// Prefix of every token metadata URL.
    pub base_uri: String,
    /// Admins in addition to the account deploying the contract.
    pub admins: Vec<Address>,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct CreateEventParams {
    /// Display metadata of the event.
    pub metadata_uri: String,
}

#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct CreateEventResult {
    pub event_id: EventId,
    /// Creator badge minted to the sender.
    pub token_id: ContractTokenId,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct MintTokenParams {
    pub event_id: EventId,
    /// Appended to the base URI to build the token metadata URL.
    pub uri_suffix: Option<String>,
    pub to: Address,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct MintEventToManyUsersParams {
    pub event_id: EventId,
    /// Either empty or one suffix per recipient.
    pub uri_suffixes: Vec<String>,
    pub to: Vec<Address>,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct MintUserToManyEventsParams {
    pub event_ids: Vec<EventId>,
    /// Either empty or one suffix per event.
    pub uri_suffixes: Vec<String>,
    pub to: Address,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct TokenParams {
    pub token_id: ContractTokenId,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct TransferFromParams {
    pub from: Address,
    pub to: Address,
    pub token_id: ContractTokenId,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct EventParams {
    pub event_id: EventId,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct EventAccountParams {
    pub event_id: EventId,
    pub account: Address,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct EventIndexParams {
    pub event_id: EventId,
    pub index: u32,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct OwnerIndexParams {
    pub owner: Address,
    pub index: u32,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct AddressParams {
    pub address: Address,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct SetBaseUriParams {
    pub base_uri: String,
}

#[derive(Debug, Serialize, SchemaType, PartialEq, Eq, Clone, Copy)]
pub struct TokenDetails {
    pub token_id: ContractTokenId,
    pub event_id: EventId,
}
