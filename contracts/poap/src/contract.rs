use crate::events::*;
use crate::external::*;
use crate::helper::*;
use crate::roles::EventRoles;
use crate::state::State;
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

/// Initialize contract instance with no events and no tokens.
#[init(contract = "Poap", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;
    ensure!(
        params.base_uri.len() <= MAX_BASE_URI_LENGTH,
        CustomContractError::InvalidParams.into()
    );

    // Construct the initial contract state.
    let state = State::new(state_builder, params, ctx.init_origin());
    Ok(state)
}

/// Logs a `Mint` and a `TokenMetadata` event for a freshly minted token.
fn log_mint<S: HasStateApi>(
    state: &State<S>,
    logger: &mut impl HasLogger,
    token_id: ContractTokenId,
    owner: Address,
) -> ContractResult<()> {
    logger.log(&mint_event(token_id, owner))?;
    logger.log(&token_metadata_event(token_id, state.token_uri(&token_id)?))?;
    Ok(())
}

/// Create a new event and mint the creator badge to the sender.
/// The sender becomes the creator of the event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The contract is paused.
/// - The token metadata URL of the badge would be too long.
/// - Fails to log `EventCreated`, `Mint` or `TokenMetadata` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "createEvent",
    parameter = "CreateEventParams",
    return_value = "CreateEventResult",
    enable_logger
)]
fn create_event<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<CreateEventResult> {
    let params = CreateEventParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = ctx.sender();
    let state = host.state_mut();

    let (event_id, token_id) = state.create_event(&sender, params.metadata_uri)?;

    logger.log(&CustomEvent::EventCreated(EventCreatedEvent {
        event_id,
        creator: sender,
    }))?;
    log_mint(state, logger, token_id, sender)?;

    Ok(CreateEventResult { event_id, token_id })
}

/// Mint a token of an event to the given address.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The contract is paused.
/// - The event does not exist.
/// - The sender is not a minter of the event.
/// - The receiver already holds a token of the event.
/// - The token metadata URL would be longer than `MAX_TOKEN_URL_LENGTH`.
/// - Fails to log `Mint` or `TokenMetadata` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "mintToken",
    parameter = "MintTokenParams",
    return_value = "ContractTokenId",
    enable_logger
)]
fn mint_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    let params = MintTokenParams::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state_mut();

    let token_id = state.mint_token(&ctx.sender(), params.event_id, params.uri_suffix, params.to)?;
    log_mint(state, logger, token_id, params.to)?;

    Ok(token_id)
}

/// Mint a token of one event to each of the given addresses.
///
/// It rejects if any single mint would, in which case nothing is minted:
/// - Fails to parse parameter.
/// - The contract is paused.
/// - The event does not exist.
/// - The sender is not a minter of the event.
/// - There are more than `MAX_BATCH_SIZE` receivers.
/// - The number of URI suffixes is neither zero nor the number of receivers.
/// - A token metadata URL would be longer than `MAX_TOKEN_URL_LENGTH`.
/// - A receiver already holds a token of the event or appears twice.
/// - Fails to log `Mint` or `TokenMetadata` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "mintEventToManyUsers",
    parameter = "MintEventToManyUsersParams",
    return_value = "Vec<ContractTokenId>",
    enable_logger
)]
fn mint_event_to_many_users<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<Vec<ContractTokenId>> {
    let params = MintEventToManyUsersParams::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state_mut();

    let receivers = params.to.clone();
    let minted = state.mint_event_to_many_users(
        &ctx.sender(),
        params.event_id,
        params.uri_suffixes,
        params.to,
    )?;

    for (token_id, owner) in minted.iter().zip(receivers) {
        log_mint(state, logger, *token_id, owner)?;
    }

    Ok(minted)
}

/// Mint a token of each of the given events to one address.
///
/// It rejects if any single mint would, in which case nothing is minted:
/// - Fails to parse parameter.
/// - The contract is paused.
/// - An event does not exist.
/// - The sender is not a minter of every event.
/// - There are more than `MAX_BATCH_SIZE` events.
/// - The number of URI suffixes is neither zero nor the number of events.
/// - A token metadata URL would be longer than `MAX_TOKEN_URL_LENGTH`.
/// - The receiver already holds a token of an event or an event appears twice.
/// - Fails to log `Mint` or `TokenMetadata` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "mintUserToManyEvents",
    parameter = "MintUserToManyEventsParams",
    return_value = "Vec<ContractTokenId>",
    enable_logger
)]
fn mint_user_to_many_events<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<Vec<ContractTokenId>> {
    let params = MintUserToManyEventsParams::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state_mut();

    let minted = state.mint_user_to_many_events(
        &ctx.sender(),
        params.event_ids,
        params.uri_suffixes,
        params.to,
    )?;

    for token_id in minted.iter() {
        log_mint(state, logger, *token_id, params.to)?;
    }

    Ok(minted)
}

/// Burn a token owned by the sender.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The contract is paused.
/// - The token does not exist.
/// - The sender does not own the token.
/// - Fails to log `Burn` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "burn",
    parameter = "TokenParams",
    enable_logger
)]
fn burn<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = TokenParams::deserial(&mut ctx.parameter_cursor())?;

    let token = host.state_mut().burn(&ctx.sender(), &params.token_id)?;

    logger.log(&burn_event(params.token_id, token.owner))?;

    Ok(())
}

/// Transfer a token. The event roles of `from` move along with it.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The contract is paused.
/// - The token does not exist.
/// - The sender is neither `from` nor an operator of `from`.
/// - The token is not owned by `from`.
/// - `to` already holds a token of the same event.
/// - Fails to log `Transfer` or `RoleMigration` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "transferFrom",
    parameter = "TransferFromParams",
    enable_logger
)]
fn transfer_from<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = TransferFromParams::deserial(&mut ctx.parameter_cursor())?;

    let outcome = host.state_mut().transfer_from(
        &ctx.sender(),
        params.from,
        params.to,
        params.token_id,
    )?;

    logger.log(&transfer_event(params.token_id, params.from, params.to))?;

    if let Some(roles) = outcome.migrated_roles {
        logger.log(&CustomEvent::RoleMigration(RoleMigrationEvent {
            event_id: outcome.event_id,
            from: params.from,
            to: params.to,
            roles,
        }))?;
    }

    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
/// Logs an `UpdateOperator` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Fails to log event.
#[receive(
    mutable,
    contract = "Poap",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let UpdateOperatorParams(params) = UpdateOperatorParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = ctx.sender();
    let (state, state_builder) = host.state_and_builder();

    for param in params {
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        logger.log(&ContractEvent::UpdateOperator(UpdateOperatorEvent {
            owner: sender,
            operator: param.operator,
            update: param.update,
        }))?;
    }
    Ok(())
}

/// Takes a list of queries. Each query is an owner address and some address to
/// check as an operator of the owner address.
#[receive(
    contract = "Poap",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    let params = OperatorOfQueryParams::deserial(&mut ctx.parameter_cursor())?;
    let state = host.state();

    let response = params
        .queries
        .iter()
        .map(|query| state.is_operator(&query.owner, &query.address))
        .collect();

    Ok(OperatorOfQueryResponse(response))
}

/// Pause minting, burning, transfers and event creation.
/// Pausing a paused contract does nothing.
///
/// It rejects if:
/// - The sender is not an admin.
/// - Fails to log `Pause` event.
#[receive(mutable, contract = "Poap", name = "pause", enable_logger)]
fn pause<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    set_paused(ctx, host, logger, true)
}

/// Lift the pause. Unpausing an active contract does nothing.
///
/// It rejects if:
/// - The sender is not an admin.
/// - Fails to log `Pause` event.
#[receive(mutable, contract = "Poap", name = "unpause", enable_logger)]
fn unpause<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    set_paused(ctx, host, logger, false)
}

fn set_paused<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    paused: bool,
) -> ContractResult<()> {
    let sender = ctx.sender();

    if host.state_mut().set_paused(&sender, paused)? {
        logger.log(&CustomEvent::Pause(PauseEvent { paused, sender }))?;
    }

    Ok(())
}

/// Replace the base URI of every token metadata URL.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender is not an admin.
/// - The base URI is longer than `MAX_BASE_URI_LENGTH`.
/// - Fails to log `BaseUri` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "setBaseURI",
    parameter = "SetBaseUriParams",
    enable_logger
)]
fn set_base_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = SetBaseUriParams::deserial(&mut ctx.parameter_cursor())?;

    host.state_mut()
        .set_base_uri(&ctx.sender(), params.base_uri.clone())?;

    logger.log(&CustomEvent::BaseUri(params.base_uri))?;

    Ok(())
}

fn update_admin<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    kind: AuthorityUpdateKind,
) -> ContractResult<()> {
    let params = AddressParams::deserial(&mut ctx.parameter_cursor())?;
    let update = AuthorityUpdateParams {
        kind,
        address: params.address,
    };

    if host
        .state_mut()
        .authority
        .handle_update(ctx.sender(), update)?
    {
        logger.log(&CustomEvent::Admin(AdminEvent {
            address: params.address,
            update: kind,
        }))?;
    }

    Ok(())
}

/// Grant admin rights. Adding an existing admin does nothing.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender is not an admin.
/// - Fails to log `Admin` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "addAdmin",
    parameter = "AddressParams",
    enable_logger
)]
fn add_admin<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    update_admin(ctx, host, logger, AuthorityUpdateKind::Add)
}

/// Revoke admin rights. Removing a non admin does nothing.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender is not an admin.
/// - Fails to log `Admin` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "removeAdmin",
    parameter = "AddressParams",
    enable_logger
)]
fn remove_admin<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    update_admin(ctx, host, logger, AuthorityUpdateKind::Remove)
}

/// Give up the admin rights of the sender. The last admin may leave as well.
#[receive(mutable, contract = "Poap", name = "renounceAdmin", enable_logger)]
fn renounce_admin<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let sender = ctx.sender();

    if host.state_mut().authority.renounce(&sender) {
        logger.log(&CustomEvent::Admin(AdminEvent {
            address: sender,
            update: AuthorityUpdateKind::Remove,
        }))?;
    }

    Ok(())
}

#[receive(
    contract = "Poap",
    name = "viewAdmins",
    parameter = "AuthorityViewParams",
    return_value = "Vec<Address>"
)]
fn view_admins<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Vec<Address>> {
    let params = AuthorityViewParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().authority.handle_view(params))
}

#[receive(
    contract = "Poap",
    name = "isAdmin",
    parameter = "AddressParams",
    return_value = "bool"
)]
fn is_admin<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let params = AddressParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().is_admin(&params.address))
}

fn update_event_minter<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    update: RoleUpdate,
) -> ContractResult<()> {
    let params = EventAccountParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = ctx.sender();
    let state = host.state_mut();

    let changed = match update {
        RoleUpdate::Add => state.add_event_minter(&sender, params.event_id, params.account)?,
        RoleUpdate::Remove => state.remove_event_minter(&sender, params.event_id, params.account)?,
    };

    if changed {
        logger.log(&CustomEvent::EventMinter(EventMinterEvent {
            event_id: params.event_id,
            account: params.account,
            update,
        }))?;
    }

    Ok(())
}

/// Grant minting rights for one event. The account does not need to hold a
/// token of the event. Nothing is logged if the account already had them.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The event does not exist.
/// - The sender is not a minter of the event.
/// - Fails to log `EventMinter` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "addEventMinter",
    parameter = "EventAccountParams",
    enable_logger
)]
fn add_event_minter<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    update_event_minter(ctx, host, logger, RoleUpdate::Add)
}

/// Revoke explicitly granted minting rights for one event. Nothing is logged
/// if the account did not have them.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The event does not exist.
/// - The sender is not a minter of the event.
/// - Fails to log `EventMinter` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "removeEventMinter",
    parameter = "EventAccountParams",
    enable_logger
)]
fn remove_event_minter<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    update_event_minter(ctx, host, logger, RoleUpdate::Remove)
}

/// Give up the explicitly granted minting rights of the sender. Nothing is
/// logged if the sender did not have them.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The event does not exist.
/// - Fails to log `EventMinter` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "renounceEventMinter",
    parameter = "EventParams",
    enable_logger
)]
fn renounce_event_minter<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = EventParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = ctx.sender();

    if host
        .state_mut()
        .renounce_event_minter(&sender, params.event_id)?
    {
        logger.log(&CustomEvent::EventMinter(EventMinterEvent {
            event_id: params.event_id,
            account: sender,
            update: RoleUpdate::Remove,
        }))?;
    }

    Ok(())
}

/// Give up creatorship of an event, together with the minter flag.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The event does not exist.
/// - Fails to log `EventCreatorRenounced` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "renounceEventCreator",
    parameter = "EventParams",
    enable_logger
)]
fn renounce_event_creator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = EventParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = ctx.sender();

    host.state_mut()
        .renounce_event_creator(&sender, params.event_id)?;

    logger.log(&CustomEvent::EventCreatorRenounced(
        EventCreatorRenouncedEvent {
            event_id: params.event_id,
            account: sender,
        },
    ))?;

    Ok(())
}

#[receive(
    contract = "Poap",
    name = "isEventCreator",
    parameter = "EventAccountParams",
    return_value = "bool"
)]
fn is_event_creator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let params = EventAccountParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(host
        .state()
        .is_event_creator(params.event_id, &params.account))
}

#[receive(
    contract = "Poap",
    name = "isEventMinter",
    parameter = "EventAccountParams",
    return_value = "bool"
)]
fn is_event_minter<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let params = EventAccountParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(host
        .state()
        .is_event_minter(params.event_id, &params.account))
}

#[receive(
    contract = "Poap",
    name = "eventRoles",
    parameter = "EventAccountParams",
    return_value = "EventRoles"
)]
fn event_roles<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<EventRoles> {
    let params = EventAccountParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().event_roles(params.event_id, &params.account))
}

fn set_authorized<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
    authorized: bool,
) -> ContractResult<()> {
    let params = EventParams::deserial(&mut ctx.parameter_cursor())?;

    host.state_mut()
        .set_authorized(&ctx.sender(), params.event_id, authorized)?;

    logger.log(&CustomEvent::EventAuthorization(EventAuthorizationEvent {
        event_id: params.event_id,
        authorized,
    }))?;

    Ok(())
}

/// Certify an event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender is not an admin.
/// - The event does not exist.
/// - Fails to log `EventAuthorization` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "authorize",
    parameter = "EventParams",
    enable_logger
)]
fn authorize<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    set_authorized(ctx, host, logger, true)
}

/// Withdraw the certification of an event.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender is not an admin.
/// - The event does not exist.
/// - Fails to log `EventAuthorization` event.
#[receive(
    mutable,
    contract = "Poap",
    name = "unauthorize",
    parameter = "EventParams",
    enable_logger
)]
fn unauthorize<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    set_authorized(ctx, host, logger, false)
}

#[receive(
    contract = "Poap",
    name = "authorized",
    parameter = "EventParams",
    return_value = "bool"
)]
fn view_authorized<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let params = EventParams::deserial(&mut ctx.parameter_cursor())?;
    host.state().is_authorized(params.event_id)
}

#[receive(
    contract = "Poap",
    name = "eventMetaURI",
    parameter = "EventParams",
    return_value = "String"
)]
fn event_meta_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let params = EventParams::deserial(&mut ctx.parameter_cursor())?;
    host.state().event_meta_uri(params.event_id)
}

#[receive(
    contract = "Poap",
    name = "balanceOfEvent",
    parameter = "EventParams",
    return_value = "u64"
)]
fn balance_of_event<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    let params = EventParams::deserial(&mut ctx.parameter_cursor())?;
    host.state().balance_of_event(params.event_id)
}

#[receive(
    contract = "Poap",
    name = "userOfEventByIndex",
    parameter = "EventIndexParams",
    return_value = "Address"
)]
fn user_of_event_by_index<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let params = EventIndexParams::deserial(&mut ctx.parameter_cursor())?;
    host.state()
        .user_of_event_by_index(params.event_id, params.index)
}

#[receive(
    contract = "Poap",
    name = "eventHasUser",
    parameter = "EventAccountParams",
    return_value = "bool"
)]
fn event_has_user<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let params = EventAccountParams::deserial(&mut ctx.parameter_cursor())?;
    host.state()
        .event_has_user(params.event_id, &params.account)
}

#[receive(contract = "Poap", name = "eventCount", return_value = "u64")]
fn event_count<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().event_count())
}

#[receive(
    contract = "Poap",
    name = "tokenURI",
    parameter = "TokenParams",
    return_value = "String"
)]
fn token_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let params = TokenParams::deserial(&mut ctx.parameter_cursor())?;
    host.state().token_uri(&params.token_id)
}

#[receive(
    contract = "Poap",
    name = "tokenEvent",
    parameter = "TokenParams",
    return_value = "EventId"
)]
fn token_event<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<EventId> {
    let params = TokenParams::deserial(&mut ctx.parameter_cursor())?;
    host.state().token_event(&params.token_id)
}

#[receive(
    contract = "Poap",
    name = "ownerOf",
    parameter = "TokenParams",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let params = TokenParams::deserial(&mut ctx.parameter_cursor())?;
    host.state().owner_of(&params.token_id)
}

#[receive(
    contract = "Poap",
    name = "balanceOfOwner",
    parameter = "AddressParams",
    return_value = "u64"
)]
fn balance_of_owner<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    let params = AddressParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().balance_of(&params.address))
}

#[receive(
    contract = "Poap",
    name = "tokenOfOwnerByIndex",
    parameter = "OwnerIndexParams",
    return_value = "ContractTokenId"
)]
fn token_of_owner_by_index<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractTokenId> {
    let params = OwnerIndexParams::deserial(&mut ctx.parameter_cursor())?;
    host.state()
        .token_of_owner_by_index(&params.owner, params.index)
}

#[receive(
    contract = "Poap",
    name = "tokenDetailsOfOwnerByIndex",
    parameter = "OwnerIndexParams",
    return_value = "TokenDetails"
)]
fn token_details_of_owner_by_index<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenDetails> {
    let params = OwnerIndexParams::deserial(&mut ctx.parameter_cursor())?;
    host.state()
        .token_details_of_owner_by_index(&params.owner, params.index)
}

#[receive(
    contract = "Poap",
    name = "eventOfOwnerByIndex",
    parameter = "OwnerIndexParams",
    return_value = "EventId"
)]
fn event_of_owner_by_index<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<EventId> {
    let params = OwnerIndexParams::deserial(&mut ctx.parameter_cursor())?;
    host.state()
        .event_of_owner_by_index(&params.owner, params.index)
}

#[receive(contract = "Poap", name = "totalSupply", return_value = "u64")]
fn total_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().total_supply())
}

#[receive(contract = "Poap", name = "name", return_value = "String")]
fn view_name<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().name.clone())
}

#[receive(contract = "Poap", name = "symbol", return_value = "String")]
fn view_symbol<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().symbol.clone())
}

#[receive(contract = "Poap", name = "baseURI", return_value = "String")]
fn view_base_uri<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().base_uri.clone())
}

#[receive(contract = "Poap", name = "paused", return_value = "bool")]
fn view_paused<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    Ok(host.state().paused)
}

#[concordium_cfg_test]
mod tests {
    use concordium_std::*;
    use test_infrastructure::*;

    use super::*;

    const ADMIN: AccountAddress = AccountAddress([0; 32]);
    const ADDR_1: Address = Address::Account(AccountAddress([1; 32]));
    const ADDR_2: Address = Address::Account(AccountAddress([2; 32]));
    const ADDR_3: Address = Address::Account(AccountAddress([3; 32]));
    const BASE_URI: &str = "https://poap.test/token/";

    fn new_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            name: String::from("Event Badges"),
            symbol: String::from("BADGE"),
            base_uri: String::from(BASE_URI),
            admins: vec![ADDR_1],
        };
        let bytes = to_bytes(&params);
        ctx.set_init_origin(ADMIN).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_Poap");

        TestHost::new(state, state_builder)
    }

    fn receive_ctx(sender: Address, bytes: &[u8]) -> TestReceiveContext<'_> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender).set_parameter(bytes);
        ctx
    }

    fn call_create_event(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
    ) -> ContractResult<CreateEventResult> {
        let bytes = to_bytes(&CreateEventParams {
            metadata_uri: String::from("ipfs://event"),
        });
        let ctx = receive_ctx(sender, &bytes);
        let mut logger = TestLogger::init();
        create_event(&ctx, host, &mut logger)
    }

    fn call_mint_token(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        event_id: EventId,
        to: Address,
    ) -> ContractResult<ContractTokenId> {
        let bytes = to_bytes(&MintTokenParams {
            event_id,
            uri_suffix: None,
            to,
        });
        let ctx = receive_ctx(sender, &bytes);
        let mut logger = TestLogger::init();
        mint_token(&ctx, host, &mut logger)
    }

    fn query_is_event_minter(
        host: &TestHost<State<TestStateApi>>,
        event_id: EventId,
        account: Address,
    ) -> bool {
        let bytes = to_bytes(&EventAccountParams { event_id, account });
        let ctx = receive_ctx(ADDR_3, &bytes);
        is_event_minter(&ctx, host).expect_report("Failed to call isEventMinter")
    }

    fn query_balance_of_event(host: &TestHost<State<TestStateApi>>, event_id: EventId) -> u64 {
        let bytes = to_bytes(&EventParams { event_id });
        let ctx = receive_ctx(ADDR_3, &bytes);
        balance_of_event(&ctx, host).expect_report("Failed to call balanceOfEvent")
    }

    #[concordium_test]
    fn test_init() {
        let host = new_host();
        let ctx = TestReceiveContext::empty();

        claim_eq!(view_name(&ctx, &host), Ok(String::from("Event Badges")));
        claim_eq!(view_symbol(&ctx, &host), Ok(String::from("BADGE")));
        claim_eq!(view_base_uri(&ctx, &host), Ok(String::from(BASE_URI)));
        claim_eq!(view_paused(&ctx, &host), Ok(false));
        claim_eq!(event_count(&ctx, &host), Ok(0));
        claim_eq!(total_supply(&ctx, &host), Ok(0));

        let bytes = to_bytes(&AuthorityViewParams { skip: 0, show: 10 });
        let ctx = receive_ctx(ADDR_3, &bytes);
        let admins = view_admins(&ctx, &host).expect_report("Failed to call viewAdmins");
        claim_eq!(admins.len(), 2);
        claim!(admins.contains(&Address::Account(ADMIN)));
        claim!(admins.contains(&ADDR_1));
    }

    #[concordium_test]
    fn test_create_event_logs() {
        let mut host = new_host();
        let bytes = to_bytes(&CreateEventParams {
            metadata_uri: String::from("ipfs://meetup"),
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();

        let result = create_event(&ctx, &mut host, &mut logger);
        claim_eq!(
            result,
            Ok(CreateEventResult {
                event_id: 1,
                token_id: TokenIdU64(1)
            })
        );

        claim_eq!(logger.logs.len(), 3);
        claim_eq!(
            logger.logs[0],
            to_bytes(&CustomEvent::EventCreated(EventCreatedEvent {
                event_id: 1,
                creator: ADDR_1,
            }))
        );
        claim_eq!(logger.logs[1], to_bytes(&mint_event(TokenIdU64(1), ADDR_1)));
        claim_eq!(
            logger.logs[2],
            to_bytes(&token_metadata_event(
                TokenIdU64(1),
                String::from("https://poap.test/token/1")
            ))
        );

        claim!(query_is_event_minter(&host, 1, ADDR_1));
        claim!(!query_is_event_minter(&host, 1, ADDR_2));
    }

    #[concordium_test]
    fn test_duplicate_mint_rejected() {
        let mut host = new_host();
        call_create_event(&mut host, ADDR_1).expect_report("Failed to create event");

        claim_eq!(call_mint_token(&mut host, ADDR_1, 1, ADDR_2), Ok(TokenIdU64(2)));
        claim_eq!(
            call_mint_token(&mut host, ADDR_1, 1, ADDR_2),
            Err(ContractError::from(CustomContractError::AlreadyAssigned))
        );
        claim_eq!(query_balance_of_event(&host, 1), 2);
    }

    #[concordium_test]
    fn test_batch_mint_logs_every_token() {
        let mut host = new_host();
        call_create_event(&mut host, ADDR_1).expect_report("Failed to create event");

        let bytes = to_bytes(&MintEventToManyUsersParams {
            event_id: 1,
            uri_suffixes: vec![String::from("a.json"), String::from("b.json")],
            to: vec![ADDR_2, ADDR_3],
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();

        let result = mint_event_to_many_users(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(vec![TokenIdU64(2), TokenIdU64(3)]));
        claim_eq!(logger.logs.len(), 4);
        claim_eq!(logger.logs[2], to_bytes(&mint_event(TokenIdU64(3), ADDR_3)));
        claim_eq!(
            logger.logs[3],
            to_bytes(&token_metadata_event(
                TokenIdU64(3),
                String::from("https://poap.test/token/b.json")
            ))
        );
    }

    #[concordium_test]
    fn test_burn_then_enumerate() {
        let mut host = new_host();
        call_create_event(&mut host, ADDR_1).expect_report("Failed to create event");
        call_mint_token(&mut host, ADDR_1, 1, ADDR_2).expect_report("Failed to mint");

        let bytes = to_bytes(&TokenParams {
            token_id: TokenIdU64(2),
        });
        let ctx = receive_ctx(ADDR_2, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(burn(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(logger.logs, vec![to_bytes(&burn_event(TokenIdU64(2), ADDR_2))]);

        claim_eq!(query_balance_of_event(&host, 1), 1);

        let bytes = to_bytes(&AddressParams { address: ADDR_2 });
        let ctx = receive_ctx(ADDR_3, &bytes);
        claim_eq!(balance_of_owner(&ctx, &host), Ok(0));

        let bytes = to_bytes(&OwnerIndexParams {
            owner: ADDR_2,
            index: 0,
        });
        let ctx = receive_ctx(ADDR_3, &bytes);
        claim_eq!(
            token_of_owner_by_index(&ctx, &host),
            Err(ContractError::from(CustomContractError::OutOfRange))
        );
    }

    #[concordium_test]
    fn test_transfer_migrates_roles() {
        let mut host = new_host();
        call_create_event(&mut host, ADDR_2).expect_report("Failed to create event");

        let bytes = to_bytes(&TransferFromParams {
            from: ADDR_2,
            to: ADDR_3,
            token_id: TokenIdU64(1),
        });
        let ctx = receive_ctx(ADDR_2, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(transfer_from(&ctx, &mut host, &mut logger), Ok(()));

        claim_eq!(
            logger.logs,
            vec![
                to_bytes(&transfer_event(TokenIdU64(1), ADDR_2, ADDR_3)),
                to_bytes(&CustomEvent::RoleMigration(RoleMigrationEvent {
                    event_id: 1,
                    from: ADDR_2,
                    to: ADDR_3,
                    roles: EventRoles {
                        is_creator: true,
                        is_minter: false
                    },
                })),
            ]
        );

        claim!(query_is_event_minter(&host, 1, ADDR_3));
        claim!(!query_is_event_minter(&host, 1, ADDR_2));

        let bytes = to_bytes(&EventAccountParams {
            event_id: 1,
            account: ADDR_3,
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        claim_eq!(is_event_creator(&ctx, &host), Ok(true));

        claim!(call_mint_token(&mut host, ADDR_3, 1, ADDR_2).is_ok());
    }

    #[concordium_test]
    fn test_operator_transfer() {
        let mut host = new_host();
        call_create_event(&mut host, ADDR_2).expect_report("Failed to create event");

        let bytes = to_bytes(&UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: ADDR_1,
        }]));
        let ctx = receive_ctx(ADDR_2, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(update_operator(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&ContractEvent::UpdateOperator(UpdateOperatorEvent {
                owner: ADDR_2,
                operator: ADDR_1,
                update: OperatorUpdate::Add,
            }))]
        );

        let bytes = to_bytes(&OperatorOfQueryParams {
            queries: vec![
                OperatorOfQuery {
                    owner: ADDR_2,
                    address: ADDR_1,
                },
                OperatorOfQuery {
                    owner: ADDR_2,
                    address: ADDR_3,
                },
            ],
        });
        let ctx = receive_ctx(ADDR_3, &bytes);
        let response = operator_of(&ctx, &host).expect_report("Failed to call operatorOf");
        claim_eq!(response.0, vec![true, false]);

        let bytes = to_bytes(&TransferFromParams {
            from: ADDR_2,
            to: ADDR_3,
            token_id: TokenIdU64(1),
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(transfer_from(&ctx, &mut host, &mut logger), Ok(()));

        let bytes = to_bytes(&TokenParams {
            token_id: TokenIdU64(1),
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        claim_eq!(owner_of(&ctx, &host), Ok(ADDR_3));
    }

    #[concordium_test]
    fn test_pause_and_unpause() {
        let mut host = new_host();
        call_create_event(&mut host, ADDR_2).expect_report("Failed to create event");

        let ctx = receive_ctx(ADDR_2, &[]);
        let mut logger = TestLogger::init();
        claim_eq!(
            pause(&ctx, &mut host, &mut logger),
            Err(ContractError::from(CustomContractError::NoAccess))
        );

        let ctx = receive_ctx(ADDR_1, &[]);
        let mut logger = TestLogger::init();
        claim_eq!(pause(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(pause(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::Pause(PauseEvent {
                paused: true,
                sender: ADDR_1,
            }))]
        );

        claim_eq!(
            call_mint_token(&mut host, ADDR_2, 1, ADDR_3),
            Err(ContractError::from(CustomContractError::Paused))
        );
        claim_eq!(
            call_create_event(&mut host, ADDR_3),
            Err(ContractError::from(CustomContractError::Paused))
        );
        claim_eq!(query_balance_of_event(&host, 1), 1);

        let mut logger = TestLogger::init();
        claim_eq!(unpause(&ctx, &mut host, &mut logger), Ok(()));
        claim!(call_mint_token(&mut host, ADDR_2, 1, ADDR_3).is_ok());
    }

    #[concordium_test]
    fn test_admin_management() {
        let mut host = new_host();

        let bytes = to_bytes(&AddressParams { address: ADDR_3 });
        let ctx = receive_ctx(ADDR_2, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            add_admin(&ctx, &mut host, &mut logger),
            Err(ContractError::from(CustomContractError::NoAccess))
        );

        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(add_admin(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::Admin(AdminEvent {
                address: ADDR_3,
                update: AuthorityUpdateKind::Add,
            }))]
        );
        claim_eq!(is_admin(&ctx, &host), Ok(true));

        // Admins mint for events they did not create.
        call_create_event(&mut host, ADDR_2).expect_report("Failed to create event");
        claim!(query_is_event_minter(&host, 1, ADDR_3));
        claim!(call_mint_token(&mut host, ADDR_3, 1, ADDR_1).is_ok());

        let ctx = receive_ctx(ADDR_3, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(remove_admin(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(is_admin(&ctx, &host), Ok(false));
        claim!(!query_is_event_minter(&host, 1, ADDR_3));

        let ctx = receive_ctx(ADDR_1, &[]);
        let mut logger = TestLogger::init();
        claim_eq!(renounce_admin(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(logger.logs.len(), 1);
        claim!(!host.state().is_admin(&ADDR_1));
    }

    #[concordium_test]
    fn test_event_minter_management() {
        let mut host = new_host();
        call_create_event(&mut host, ADDR_2).expect_report("Failed to create event");

        let bytes = to_bytes(&EventAccountParams {
            event_id: 1,
            account: ADDR_3,
        });
        let ctx = receive_ctx(ADDR_3, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            add_event_minter(&ctx, &mut host, &mut logger),
            Err(ContractError::from(CustomContractError::NoAccess))
        );

        let ctx = receive_ctx(ADDR_2, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(add_event_minter(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::EventMinter(EventMinterEvent {
                event_id: 1,
                account: ADDR_3,
                update: RoleUpdate::Add,
            }))]
        );

        // Granting again changes nothing and logs nothing.
        let mut logger = TestLogger::init();
        claim_eq!(add_event_minter(&ctx, &mut host, &mut logger), Ok(()));
        claim!(logger.logs.is_empty());

        claim_eq!(
            event_roles(&ctx, &host),
            Ok(EventRoles {
                is_creator: false,
                is_minter: true
            })
        );

        let bytes = to_bytes(&EventParams { event_id: 1 });
        let ctx = receive_ctx(ADDR_3, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(renounce_event_minter(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(logger.logs.len(), 1);
        claim!(!query_is_event_minter(&host, 1, ADDR_3));

        let mut logger = TestLogger::init();
        claim_eq!(renounce_event_minter(&ctx, &mut host, &mut logger), Ok(()));
        claim!(logger.logs.is_empty());

        let bytes = to_bytes(&EventAccountParams {
            event_id: 1,
            account: ADDR_1,
        });
        let ctx = receive_ctx(ADDR_2, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(remove_event_minter(&ctx, &mut host, &mut logger), Ok(()));
        claim!(logger.logs.is_empty());

        let bytes = to_bytes(&EventParams { event_id: 1 });

        let ctx = receive_ctx(ADDR_2, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(renounce_event_creator(&ctx, &mut host, &mut logger), Ok(()));
        claim!(!query_is_event_minter(&host, 1, ADDR_2));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::EventCreatorRenounced(
                EventCreatorRenouncedEvent {
                    event_id: 1,
                    account: ADDR_2,
                }
            ))]
        );
    }

    #[concordium_test]
    fn test_event_directory_queries() {
        let mut host = new_host();
        call_create_event(&mut host, ADDR_2).expect_report("Failed to create event");
        call_mint_token(&mut host, ADDR_2, 1, ADDR_3).expect_report("Failed to mint");

        let bytes = to_bytes(&EventParams { event_id: 1 });
        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(authorize(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(view_authorized(&ctx, &host), Ok(true));
        claim_eq!(event_meta_uri(&ctx, &host), Ok(String::from("ipfs://event")));

        let ctx = receive_ctx(ADDR_2, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            unauthorize(&ctx, &mut host, &mut logger),
            Err(ContractError::from(CustomContractError::NoAccess))
        );

        let bytes = to_bytes(&EventIndexParams {
            event_id: 1,
            index: 1,
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        claim_eq!(user_of_event_by_index(&ctx, &host), Ok(ADDR_3));

        let bytes = to_bytes(&EventAccountParams {
            event_id: 1,
            account: ADDR_3,
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        claim_eq!(event_has_user(&ctx, &host), Ok(true));

        let bytes = to_bytes(&EventAccountParams {
            event_id: 9,
            account: ADDR_3,
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        claim_eq!(
            event_has_user(&ctx, &host),
            Err(ContractError::from(CustomContractError::EventNotFound))
        );

        let bytes = to_bytes(&OwnerIndexParams {
            owner: ADDR_3,
            index: 0,
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        claim_eq!(event_of_owner_by_index(&ctx, &host), Ok(1));
        claim_eq!(
            token_details_of_owner_by_index(&ctx, &host),
            Ok(TokenDetails {
                token_id: TokenIdU64(2),
                event_id: 1
            })
        );
    }

    #[concordium_test]
    fn test_set_base_uri() {
        let mut host = new_host();
        call_create_event(&mut host, ADDR_2).expect_report("Failed to create event");

        let bytes = to_bytes(&SetBaseUriParams {
            base_uri: String::from("https://cdn.test/"),
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(set_base_uri(&ctx, &mut host, &mut logger), Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::BaseUri(String::from(
                "https://cdn.test/"
            )))]
        );

        let bytes = to_bytes(&TokenParams {
            token_id: TokenIdU64(1),
        });
        let ctx = receive_ctx(ADDR_3, &bytes);
        claim_eq!(token_uri(&ctx, &host), Ok(String::from("https://cdn.test/1")));
        claim_eq!(token_event(&ctx, &host), Ok(1));
    }

    #[concordium_test]
    fn test_long_metadata_uri_fits_log() {
        let mut host = new_host();
        let metadata_uri = "x".repeat(600);
        let bytes = to_bytes(&CreateEventParams {
            metadata_uri: metadata_uri.clone(),
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();

        claim!(create_event(&ctx, &mut host, &mut logger).is_ok());
        claim_eq!(logger.logs.len(), 3);
        claim!(logger.logs.iter().all(|entry| entry.len() <= 512));

        let bytes = to_bytes(&EventParams { event_id: 1 });
        let ctx = receive_ctx(ADDR_3, &bytes);
        claim_eq!(event_meta_uri(&ctx, &host), Ok(metadata_uri));
    }

    #[concordium_test]
    fn test_long_token_url_rejected() {
        let mut host = new_host();
        call_create_event(&mut host, ADDR_1).expect_report("Failed to create event");

        let bytes = to_bytes(&MintTokenParams {
            event_id: 1,
            uri_suffix: Some("x".repeat(600)),
            to: ADDR_2,
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            mint_token(&ctx, &mut host, &mut logger),
            Err(ContractError::from(CustomContractError::InvalidParams))
        );
        claim!(logger.logs.is_empty());
        claim_eq!(query_balance_of_event(&host, 1), 1);

        // The longest accepted URL still fits a single log entry.
        let suffix_len = MAX_TOKEN_URL_LENGTH - BASE_URI.len();
        let bytes = to_bytes(&MintTokenParams {
            event_id: 1,
            uri_suffix: Some("x".repeat(suffix_len)),
            to: ADDR_2,
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();
        claim!(mint_token(&ctx, &mut host, &mut logger).is_ok());
        claim!(logger.logs.iter().all(|entry| entry.len() <= 512));

        let bytes = to_bytes(&SetBaseUriParams {
            base_uri: "x".repeat(MAX_BASE_URI_LENGTH + 1),
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            set_base_uri(&ctx, &mut host, &mut logger),
            Err(ContractError::from(CustomContractError::InvalidParams))
        );
    }

    #[concordium_test]
    fn test_batch_size_limit() {
        let mut host = new_host();
        call_create_event(&mut host, ADDR_1).expect_report("Failed to create event");

        let receivers = |count: u8| -> Vec<Address> {
            (0..count)
                .map(|i| Address::Account(AccountAddress([100 + i; 32])))
                .collect()
        };

        let bytes = to_bytes(&MintEventToManyUsersParams {
            event_id: 1,
            uri_suffixes: Vec::new(),
            to: receivers(40),
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();
        claim_eq!(
            mint_event_to_many_users(&ctx, &mut host, &mut logger),
            Err(ContractError::from(CustomContractError::InvalidParams))
        );
        claim_eq!(query_balance_of_event(&host, 1), 1);

        let bytes = to_bytes(&MintEventToManyUsersParams {
            event_id: 1,
            uri_suffixes: Vec::new(),
            to: receivers(MAX_BATCH_SIZE as u8),
        });
        let ctx = receive_ctx(ADDR_1, &bytes);
        let mut logger = TestLogger::init();
        let minted = mint_event_to_many_users(&ctx, &mut host, &mut logger)
            .expect_report("Failed to mint a full batch");
        claim_eq!(minted.len(), MAX_BATCH_SIZE);
        claim_eq!(logger.logs.len(), 2 * MAX_BATCH_SIZE);
        claim_eq!(query_balance_of_event(&host, 1), 1 + MAX_BATCH_SIZE as u64);
    }
}
