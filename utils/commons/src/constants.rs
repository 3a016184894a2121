// Tags 251..=255 are reserved for the CIS-2 standard events.

/// Tag for the Custom Event Created event.
pub const EVENT_CREATED_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Event Minter update event.
pub const EVENT_MINTER_TAG: u8 = u8::MAX - 6;

/// Tag for the Custom Event Creator Renounced event.
pub const EVENT_CREATOR_RENOUNCED_TAG: u8 = u8::MAX - 7;

/// Tag for the Custom Event Authorization event.
pub const EVENT_AUTHORIZATION_TAG: u8 = u8::MAX - 8;

/// Tag for the Manage Admin event.
pub const ADMIN_TAG: u8 = u8::MAX - 9;

/// Tag for the Pause/Unpause event.
pub const PAUSE_TAG: u8 = u8::MAX - 10;

/// Tag for the Update Base URI event.
pub const BASE_URI_TAG: u8 = u8::MAX - 11;

/// Tag for the Role Migration event, emitted when event roles follow a
/// transferred token.
pub const ROLE_MIGRATION_TAG: u8 = u8::MAX - 12;

/// Longest token metadata URL the contract accepts. A `TokenMetadata` log
/// entry adds 13 bytes around the URL and must fit in the 512 byte log limit.
pub const MAX_TOKEN_URL_LENGTH: usize = 480;

/// Longest base URI the contract accepts, leaving room for a suffix or the
/// decimal token id.
pub const MAX_BASE_URI_LENGTH: usize = 256;

/// Most tokens minted by a single batch call. Every mint logs two entries and
/// a call may log at most 64.
pub const MAX_BATCH_SIZE: usize = 30;
