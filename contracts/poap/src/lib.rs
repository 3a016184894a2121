//! A POAP (proof of attendance) smart contract issuing tokens bound to events.
//! Token activity is logged as CIS2 events and operators follow the CIS2
//! `updateOperator` / `operatorOf` interface.
//!
//! # Description
//! Every token belongs to exactly one event and an address holds at most one
//! token per event. Creating an event mints a creator badge to the sender, and
//! the creator and minter roles of an event live with the token their holder
//! owns for it: transferring the token moves the roles to the new owner.
//!
//! Admins can mint for every event, toggle the event certification flag,
//! update the base URI and pause the contract. While paused, events cannot be
//! created and tokens cannot be minted, burnt or transferred.
//!
//! Every call must fit in the host event log, so token metadata URLs are
//! capped at `MAX_TOKEN_URL_LENGTH` bytes and batch mints at `MAX_BATCH_SIZE`
//! tokens.
//!
//! The contract keeps enumeration indices for the tokens and events of every
//! owner and for the holders of every event.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.

#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod helper;
mod roles;
mod state;
