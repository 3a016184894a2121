use crate::external::{InitParams, TokenDetails};
use crate::helper::build_token_uri;
use crate::roles::{EventRoleStore, EventRoles};
use commons::*;
use concordium_cis2::TokenIdU64;
use concordium_std::*;
use core::ops::DerefMut;

/// Directory entry of a single event.
#[derive(Debug, Clone, Serialize)]
pub struct EventState {
    /// Display metadata, set once on creation.
    pub metadata_uri: String,
    /// Certification flag toggled by admins. Has no effect on minting.
    pub authorized: bool,
    /// Current holders in the order they acquired their token.
    pub holders: Vec<Address>,
}

/// A live token. Only `owner` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenState {
    pub owner: Address,
    pub event_id: EventId,
    pub uri_suffix: Option<String>,
}

/// What a successful transfer changed besides ownership.
#[derive(Debug, PartialEq, Eq)]
pub struct TransferOutcome {
    pub event_id: EventId,
    /// Roles that followed the token to the new owner.
    pub migrated_roles: Option<EventRoles>,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Addresses with admin rights over every event and the contract lifecycle.
    pub authority: Authority<S>,
    /// Per event creator and minter flags.
    pub roles: EventRoleStore<S>,
    pub name: String,
    pub symbol: String,
    /// Prefix of every token metadata URL.
    pub base_uri: String,
    /// Mints, burns and transfers are rejected while set.
    pub paused: bool,
    next_event_id: EventId,
    next_token_id: u64,
    total_supply: u64,
    events: StateMap<EventId, EventState, S>,
    tokens: StateMap<ContractTokenId, TokenState, S>,
    /// Tokens of each owner in acquisition order.
    owned_tokens: StateMap<Address, Vec<ContractTokenId>, S>,
    /// Events of each owner in acquisition order.
    owned_events: StateMap<Address, Vec<EventId>, S>,
    /// Operators for each address.
    operators: StateMap<Address, StateSet<Address, S>, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no events and no tokens.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        params: InitParams,
        origin: AccountAddress,
    ) -> Self {
        Self {
            authority: Authority::new(state_builder, Address::Account(origin), params.admins),
            roles: EventRoleStore::new(state_builder),
            name: params.name,
            symbol: params.symbol,
            base_uri: params.base_uri,
            paused: false,
            next_event_id: 1,
            next_token_id: 1,
            total_supply: 0,
            events: state_builder.new_map(),
            tokens: state_builder.new_map(),
            owned_tokens: state_builder.new_map(),
            owned_events: state_builder.new_map(),
            operators: state_builder.new_map(),
        }
    }

    pub fn ensure_active(&self) -> ContractResult<()> {
        ensure!(!self.paused, CustomContractError::Paused.into());
        Ok(())
    }

    pub fn ensure_admin(&self, sender: &Address) -> ContractResult<()> {
        ensure!(
            self.authority.has_admin_rights(sender),
            CustomContractError::NoAccess.into()
        );
        Ok(())
    }

    /// Switches the pause flag. Returns whether it changed, setting the
    /// current value again is a no-op.
    pub fn set_paused(&mut self, sender: &Address, paused: bool) -> ContractResult<bool> {
        self.ensure_admin(sender)?;
        if self.paused == paused {
            return Ok(false);
        }
        self.paused = paused;
        Ok(true)
    }

    pub fn set_base_uri(&mut self, sender: &Address, base_uri: String) -> ContractResult<()> {
        self.ensure_admin(sender)?;
        ensure!(
            base_uri.len() <= MAX_BASE_URI_LENGTH,
            CustomContractError::InvalidParams.into()
        );
        self.base_uri = base_uri;
        Ok(())
    }

    pub fn is_admin(&self, address: &Address) -> bool {
        self.authority.has_admin_rights(address)
    }

    pub fn event_roles(&self, event_id: EventId, address: &Address) -> EventRoles {
        self.roles.get(event_id, address)
    }

    pub fn is_event_creator(&self, event_id: EventId, address: &Address) -> bool {
        self.roles.get(event_id, address).is_creator
    }

    /// Admins mint for every event, creators and granted minters for their own.
    pub fn is_event_minter(&self, event_id: EventId, address: &Address) -> bool {
        self.is_admin(address) || self.roles.get(event_id, address).can_mint()
    }

    fn ensure_event_minter(&self, event_id: EventId, sender: &Address) -> ContractResult<()> {
        self.event(event_id)?;
        ensure!(
            self.is_event_minter(event_id, sender),
            CustomContractError::NoAccess.into()
        );
        Ok(())
    }

    /// Grants the minter flag. Returns whether it changed.
    pub fn add_event_minter(
        &mut self,
        sender: &Address,
        event_id: EventId,
        account: Address,
    ) -> ContractResult<bool> {
        self.ensure_event_minter(event_id, sender)?;
        Ok(self.roles.set_minter(event_id, account, true))
    }

    /// Clears the minter flag. Returns whether it changed.
    pub fn remove_event_minter(
        &mut self,
        sender: &Address,
        event_id: EventId,
        account: Address,
    ) -> ContractResult<bool> {
        self.ensure_event_minter(event_id, sender)?;
        Ok(self.roles.set_minter(event_id, account, false))
    }

    pub fn renounce_event_minter(&mut self, sender: &Address, event_id: EventId) -> ContractResult<bool> {
        self.event(event_id)?;
        Ok(self.roles.set_minter(event_id, *sender, false))
    }

    /// Drops creatorship together with the minter flag of `sender` for one event.
    pub fn renounce_event_creator(&mut self, sender: &Address, event_id: EventId) -> ContractResult<()> {
        self.event(event_id)?;
        self.roles.clear(event_id, *sender);
        Ok(())
    }

    /// Registers a new event and mints the creator badge to `sender`.
    pub fn create_event(
        &mut self,
        sender: &Address,
        metadata_uri: String,
    ) -> ContractResult<(EventId, ContractTokenId)> {
        self.ensure_active()?;
        self.ensure_token_url_fits(None)?;

        let event_id = self.next_event_id;
        self.next_event_id += 1;
        self.events.insert(
            event_id,
            EventState {
                metadata_uri,
                authorized: false,
                holders: Vec::new(),
            },
        );
        self.roles.set_creator(event_id, *sender, true);
        let token_id = self.mint_unchecked(event_id, *sender, None)?;

        Ok((event_id, token_id))
    }

    pub fn set_authorized(
        &mut self,
        sender: &Address,
        event_id: EventId,
        authorized: bool,
    ) -> ContractResult<()> {
        self.ensure_admin(sender)?;
        self.update_event(event_id, |event| event.authorized = authorized)
    }

    pub fn mint_token(
        &mut self,
        sender: &Address,
        event_id: EventId,
        uri_suffix: Option<String>,
        to: Address,
    ) -> ContractResult<ContractTokenId> {
        self.ensure_active()?;
        self.ensure_event_minter(event_id, sender)?;
        ensure!(
            !self.holds_event(&to, event_id),
            CustomContractError::AlreadyAssigned.into()
        );
        self.ensure_token_url_fits(uri_suffix.as_deref())?;

        self.mint_unchecked(event_id, to, uri_suffix)
    }

    /// Mints one token of `event_id` to every address in `to`.
    ///
    /// Nothing is minted unless every recipient can receive a token.
    pub fn mint_event_to_many_users(
        &mut self,
        sender: &Address,
        event_id: EventId,
        uri_suffixes: Vec<String>,
        to: Vec<Address>,
    ) -> ContractResult<Vec<ContractTokenId>> {
        self.ensure_active()?;
        self.ensure_event_minter(event_id, sender)?;
        let uri_suffixes = expand_suffixes(uri_suffixes, to.len())?;

        for (i, recipient) in to.iter().enumerate() {
            ensure!(
                !self.holds_event(recipient, event_id) && !to[..i].contains(recipient),
                CustomContractError::AlreadyAssigned.into()
            );
            self.ensure_token_url_fits(uri_suffixes[i].as_deref())?;
        }

        let mut minted = Vec::with_capacity(to.len());
        for (recipient, uri_suffix) in to.into_iter().zip(uri_suffixes) {
            minted.push(self.mint_unchecked(event_id, recipient, uri_suffix)?);
        }
        Ok(minted)
    }

    /// Mints one token of every event in `event_ids` to `to`.
    ///
    /// Minting rights are checked per event. Nothing is minted unless every
    /// event passes.
    pub fn mint_user_to_many_events(
        &mut self,
        sender: &Address,
        event_ids: Vec<EventId>,
        uri_suffixes: Vec<String>,
        to: Address,
    ) -> ContractResult<Vec<ContractTokenId>> {
        self.ensure_active()?;
        let uri_suffixes = expand_suffixes(uri_suffixes, event_ids.len())?;

        for (i, event_id) in event_ids.iter().enumerate() {
            self.ensure_event_minter(*event_id, sender)?;
            ensure!(
                !self.holds_event(&to, *event_id) && !event_ids[..i].contains(event_id),
                CustomContractError::AlreadyAssigned.into()
            );
            self.ensure_token_url_fits(uri_suffixes[i].as_deref())?;
        }

        let mut minted = Vec::with_capacity(event_ids.len());
        for (event_id, uri_suffix) in event_ids.into_iter().zip(uri_suffixes) {
            minted.push(self.mint_unchecked(event_id, to, uri_suffix)?);
        }
        Ok(minted)
    }

    /// Every token metadata URL ends up in a `TokenMetadata` log entry, which
    /// must stay within the host log limit. Ids have at most 20 decimal digits.
    fn ensure_token_url_fits(&self, uri_suffix: Option<&str>) -> ContractResult<()> {
        let tail = uri_suffix.map_or(20, str::len);
        ensure!(
            self.base_uri.len() + tail <= MAX_TOKEN_URL_LENGTH,
            CustomContractError::InvalidParams.into()
        );
        Ok(())
    }

    /// Must only be called once the event is known to exist and `to` holds no
    /// token for it.
    fn mint_unchecked(
        &mut self,
        event_id: EventId,
        to: Address,
        uri_suffix: Option<String>,
    ) -> ContractResult<ContractTokenId> {
        self.update_event(event_id, |event| event.holders.push(to))?;

        let token_id = TokenIdU64(self.next_token_id);
        self.next_token_id += 1;
        self.tokens.insert(
            token_id,
            TokenState {
                owner: to,
                event_id,
                uri_suffix,
            },
        );
        self.push_owned(to, token_id, event_id);
        self.total_supply += 1;

        Ok(token_id)
    }

    /// Destroys a token owned by `sender`. Returns the removed token.
    ///
    /// The owner loses creatorship of the event, an explicitly granted minter
    /// flag stays in place.
    pub fn burn(&mut self, sender: &Address, token_id: &ContractTokenId) -> ContractResult<TokenState> {
        self.ensure_active()?;
        let token = self.token(token_id)?;
        ensure_eq!(token.owner, *sender, CustomContractError::NoAccess.into());

        self.update_event(token.event_id, |event| {
            remove_item(&mut event.holders, &token.owner);
        })?;
        self.tokens.remove(token_id);
        self.remove_owned(&token.owner, token_id, token.event_id);
        self.roles.set_creator(token.event_id, token.owner, false);
        self.total_supply -= 1;

        Ok(token)
    }

    /// Moves a token from `from` to `to` on behalf of `sender`, taking the event
    /// roles of `from` along with it.
    pub fn transfer_from(
        &mut self,
        sender: &Address,
        from: Address,
        to: Address,
        token_id: ContractTokenId,
    ) -> ContractResult<TransferOutcome> {
        self.ensure_active()?;
        let mut token = self.token(&token_id)?;
        ensure!(
            self.is_operator(&from, sender),
            CustomContractError::NoAccess.into()
        );
        ensure_eq!(token.owner, from, ContractError::InsufficientFunds);
        let event_id = token.event_id;
        ensure!(
            !self.holds_event(&to, event_id),
            CustomContractError::AlreadyAssigned.into()
        );

        self.update_event(event_id, |event| {
            remove_item(&mut event.holders, &from);
            event.holders.push(to);
        })?;
        token.owner = to;
        self.tokens.insert(token_id, token);
        self.remove_owned(&from, &token_id, event_id);
        self.push_owned(to, token_id, event_id);
        let migrated_roles = self.roles.migrate(event_id, from, to);

        Ok(TransferOutcome {
            event_id,
            migrated_roles,
        })
    }

    fn event(&self, event_id: EventId) -> ContractResult<EventState> {
        self.events
            .get(&event_id)
            .map(|event| event.clone())
            .ok_or_else(|| CustomContractError::EventNotFound.into())
    }

    fn update_event<F>(&mut self, event_id: EventId, f: F) -> ContractResult<()>
    where
        F: FnOnce(&mut EventState),
    {
        let mut event = self.event(event_id)?;
        f(&mut event);
        self.events.insert(event_id, event);
        Ok(())
    }

    fn token(&self, token_id: &ContractTokenId) -> ContractResult<TokenState> {
        self.tokens
            .get(token_id)
            .map(|token| token.clone())
            .ok_or(ContractError::InvalidTokenId)
    }

    fn tokens_of(&self, owner: &Address) -> Vec<ContractTokenId> {
        self.owned_tokens
            .get(owner)
            .map(|tokens| tokens.clone())
            .unwrap_or_default()
    }

    fn events_of(&self, owner: &Address) -> Vec<EventId> {
        self.owned_events
            .get(owner)
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn holds_event(&self, owner: &Address, event_id: EventId) -> bool {
        self.events_of(owner).contains(&event_id)
    }

    fn push_owned(&mut self, owner: Address, token_id: ContractTokenId, event_id: EventId) {
        let mut tokens = self.tokens_of(&owner);
        tokens.push(token_id);
        self.owned_tokens.insert(owner, tokens);

        let mut events = self.events_of(&owner);
        if !events.contains(&event_id) {
            events.push(event_id);
        }
        self.owned_events.insert(owner, events);
    }

    // An owner holds at most one token per event, so the event goes with the token.
    fn remove_owned(&mut self, owner: &Address, token_id: &ContractTokenId, event_id: EventId) {
        let mut tokens = self.tokens_of(owner);
        remove_item(&mut tokens, token_id);
        if tokens.is_empty() {
            self.owned_tokens.remove(owner);
        } else {
            self.owned_tokens.insert(*owner, tokens);
        }

        let mut events = self.events_of(owner);
        remove_item(&mut events, &event_id);
        if events.is_empty() {
            self.owned_events.remove(owner);
        } else {
            self.owned_events.insert(*owner, events);
        }
    }

    pub fn event_count(&self) -> u64 {
        self.next_event_id - 1
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    pub fn event_meta_uri(&self, event_id: EventId) -> ContractResult<String> {
        self.event(event_id).map(|event| event.metadata_uri)
    }

    pub fn is_authorized(&self, event_id: EventId) -> ContractResult<bool> {
        self.event(event_id).map(|event| event.authorized)
    }

    pub fn balance_of_event(&self, event_id: EventId) -> ContractResult<u64> {
        self.event(event_id).map(|event| event.holders.len() as u64)
    }

    pub fn user_of_event_by_index(&self, event_id: EventId, index: u32) -> ContractResult<Address> {
        self.event(event_id)?
            .holders
            .get(index as usize)
            .copied()
            .ok_or_else(|| CustomContractError::OutOfRange.into())
    }

    pub fn event_has_user(&self, event_id: EventId, address: &Address) -> ContractResult<bool> {
        self.event(event_id)?;
        Ok(self.holds_event(address, event_id))
    }

    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.token(token_id).map(|token| token.owner)
    }

    pub fn token_event(&self, token_id: &ContractTokenId) -> ContractResult<EventId> {
        self.token(token_id).map(|token| token.event_id)
    }

    pub fn token_uri(&self, token_id: &ContractTokenId) -> ContractResult<String> {
        let token = self.token(token_id)?;
        Ok(build_token_uri(
            &self.base_uri,
            token_id,
            token.uri_suffix.as_deref(),
        ))
    }

    pub fn balance_of(&self, owner: &Address) -> u64 {
        self.tokens_of(owner).len() as u64
    }

    pub fn token_of_owner_by_index(&self, owner: &Address, index: u32) -> ContractResult<ContractTokenId> {
        self.tokens_of(owner)
            .get(index as usize)
            .copied()
            .ok_or_else(|| CustomContractError::OutOfRange.into())
    }

    pub fn token_details_of_owner_by_index(
        &self,
        owner: &Address,
        index: u32,
    ) -> ContractResult<TokenDetails> {
        let token_id = self.token_of_owner_by_index(owner, index)?;
        Ok(TokenDetails {
            token_id,
            event_id: self.token_event(&token_id)?,
        })
    }

    pub fn event_of_owner_by_index(&self, owner: &Address, index: u32) -> ContractResult<EventId> {
        self.events_of(owner)
            .get(index as usize)
            .copied()
            .ok_or_else(|| CustomContractError::OutOfRange.into())
    }

    /// Add a new operator for the given address.
    ///
    /// Succeeds even if the `operator` is already an operator for the `owner`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.operators
            .get_mut(owner)
            .map(|mut operators| operators.remove(operator));
    }

    /// Check if `address` is an operator for `owner`. Every owner operates
    /// its own tokens.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        owner == address
            || self
                .operators
                .get(owner)
                .map(|operators| operators.contains(address))
                .unwrap_or(false)
    }
}

/// An empty suffix list means no suffix for any token. Batches larger than
/// `MAX_BATCH_SIZE` are rejected.
fn expand_suffixes(uri_suffixes: Vec<String>, count: usize) -> ContractResult<Vec<Option<String>>> {
    ensure!(
        count <= MAX_BATCH_SIZE,
        CustomContractError::InvalidParams.into()
    );
    if uri_suffixes.is_empty() {
        return Ok(vec![None; count]);
    }
    ensure_eq!(
        uri_suffixes.len(),
        count,
        CustomContractError::InvalidParams.into()
    );
    Ok(uri_suffixes.into_iter().map(Some).collect())
}

/// Removes the first occurrence of `item`, shifting later entries down.
fn remove_item<T: PartialEq>(list: &mut Vec<T>, item: &T) -> bool {
    match list.iter().position(|x| x == item) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const ADMIN: Address = Address::Account(AccountAddress([0u8; 32]));
    const ALICE: Address = Address::Account(AccountAddress([1u8; 32]));
    const BOB: Address = Address::Account(AccountAddress([2u8; 32]));
    const CAROL: Address = Address::Account(AccountAddress([3u8; 32]));

    fn new_state(state_builder: &mut TestStateBuilder) -> State<TestStateApi> {
        let params = InitParams {
            name: String::from("Badges"),
            symbol: String::from("BDG"),
            base_uri: String::from("https://poap.test/token/"),
            admins: Vec::new(),
        };
        State::new(state_builder, params, AccountAddress([0u8; 32]))
    }

    fn custom(err: CustomContractError) -> ContractError {
        err.into()
    }

    /// Holder list, owner indexes and token records must agree.
    fn claim_consistent(state: &State<TestStateApi>, event_id: EventId, holders: &[Address]) {
        claim_eq!(state.balance_of_event(event_id), Ok(holders.len() as u64));
        for (i, holder) in holders.iter().enumerate() {
            claim_eq!(state.user_of_event_by_index(event_id, i as u32), Ok(*holder));
            claim_eq!(state.event_has_user(event_id, holder), Ok(true));
        }
        claim_eq!(
            state.user_of_event_by_index(event_id, holders.len() as u32),
            Err(custom(CustomContractError::OutOfRange))
        );
    }

    #[concordium_test]
    fn test_create_event_mints_creator_badge() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);

        let (event_id, token_id) = state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");

        claim_eq!(event_id, 1);
        claim_eq!(token_id, TokenIdU64(1));
        claim_eq!(state.event_count(), 1);
        claim_eq!(state.total_supply(), 1);
        claim_eq!(state.owner_of(&token_id), Ok(ALICE));
        claim_eq!(state.token_event(&token_id), Ok(1));
        claim_eq!(state.event_meta_uri(1), Ok(String::from("ipfs://event-1")));
        claim_eq!(state.is_authorized(1), Ok(false));
        claim!(state.is_event_creator(1, &ALICE));
        claim!(state.is_event_minter(1, &ALICE));
        claim!(!state.is_event_minter(1, &BOB));
        claim_consistent(&state, 1, &[ALICE]);
    }

    #[concordium_test]
    fn test_mint_one_token_per_event() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");

        let token_id = state
            .mint_token(&ALICE, 1, None, BOB)
            .expect_report("Failed to mint");
        claim_eq!(token_id, TokenIdU64(2));

        claim_eq!(
            state.mint_token(&ALICE, 1, None, BOB),
            Err(custom(CustomContractError::AlreadyAssigned))
        );
        claim_eq!(
            state.mint_token(&BOB, 1, None, CAROL),
            Err(custom(CustomContractError::NoAccess))
        );
        claim_eq!(
            state.mint_token(&ALICE, 7, None, CAROL),
            Err(custom(CustomContractError::EventNotFound))
        );
        claim_consistent(&state, 1, &[ALICE, BOB]);
        claim_eq!(state.total_supply(), 2);
    }

    #[concordium_test]
    fn test_admin_mints_for_any_event() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");

        claim!(state.is_event_minter(1, &ADMIN));
        claim!(!state.is_event_creator(1, &ADMIN));
        claim!(state.mint_token(&ADMIN, 1, None, CAROL).is_ok());
        claim!(state.add_event_minter(&ADMIN, 1, BOB).is_ok());
        claim!(state.is_event_minter(1, &BOB));
    }

    #[concordium_test]
    fn test_burn_keeps_ids_unique_and_indexes_consistent() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");
        state
            .mint_event_to_many_users(&ALICE, 1, Vec::new(), vec![BOB, CAROL])
            .expect_report("Failed to mint");

        claim_eq!(
            state.burn(&ALICE, &TokenIdU64(2)),
            Err(custom(CustomContractError::NoAccess))
        );
        claim_eq!(
            state.burn(&BOB, &TokenIdU64(9)),
            Err(ContractError::InvalidTokenId)
        );

        let burnt = state
            .burn(&BOB, &TokenIdU64(2))
            .expect_report("Failed to burn");
        claim_eq!(burnt.owner, BOB);
        claim_eq!(burnt.event_id, 1);

        claim_consistent(&state, 1, &[ALICE, CAROL]);
        claim_eq!(state.balance_of(&BOB), 0);
        claim_eq!(
            state.token_of_owner_by_index(&BOB, 0),
            Err(custom(CustomContractError::OutOfRange))
        );
        claim_eq!(state.owner_of(&TokenIdU64(2)), Err(ContractError::InvalidTokenId));
        claim_eq!(state.total_supply(), 2);

        // Burnt ids are never handed out again.
        let token_id = state
            .mint_token(&ALICE, 1, None, BOB)
            .expect_report("Failed to mint again");
        claim_eq!(token_id, TokenIdU64(4));
        claim_consistent(&state, 1, &[ALICE, CAROL, BOB]);
    }

    #[concordium_test]
    fn test_burn_drops_creator_but_keeps_minter() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");
        state
            .add_event_minter(&ALICE, 1, ALICE)
            .expect_report("Failed to add minter");

        state
            .burn(&ALICE, &TokenIdU64(1))
            .expect_report("Failed to burn");

        claim_eq!(
            state.event_roles(1, &ALICE),
            EventRoles {
                is_creator: false,
                is_minter: true
            }
        );
        claim!(state.is_event_minter(1, &ALICE));
    }

    #[concordium_test]
    fn test_transfer_moves_roles_and_holder_position() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");
        state
            .create_event(&ALICE, String::from("ipfs://event-2"))
            .expect_report("Failed to create event");
        state
            .mint_token(&ALICE, 1, None, CAROL)
            .expect_report("Failed to mint");

        let outcome = state
            .transfer_from(&ALICE, ALICE, BOB, TokenIdU64(1))
            .expect_report("Failed to transfer");
        claim_eq!(
            outcome,
            TransferOutcome {
                event_id: 1,
                migrated_roles: Some(EventRoles {
                    is_creator: true,
                    is_minter: false
                }),
            }
        );

        claim_eq!(state.owner_of(&TokenIdU64(1)), Ok(BOB));
        claim!(state.is_event_creator(1, &BOB));
        claim!(!state.is_event_creator(1, &ALICE));
        claim!(!state.is_event_minter(1, &ALICE));
        // Roles for other events stay where they were.
        claim!(state.is_event_creator(2, &ALICE));
        claim!(!state.is_event_minter(2, &BOB));

        claim_consistent(&state, 1, &[CAROL, BOB]);
        claim_eq!(state.balance_of(&ALICE), 1);
        claim_eq!(state.event_of_owner_by_index(&ALICE, 0), Ok(2));
        claim_eq!(
            state.token_details_of_owner_by_index(&BOB, 0),
            Ok(TokenDetails {
                token_id: TokenIdU64(1),
                event_id: 1
            })
        );

        claim!(state.mint_token(&BOB, 1, None, ALICE).is_ok());
    }

    #[concordium_test]
    fn test_transfer_rejections() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");
        state
            .mint_token(&ALICE, 1, None, BOB)
            .expect_report("Failed to mint");

        claim_eq!(
            state.transfer_from(&CAROL, ALICE, CAROL, TokenIdU64(1)),
            Err(custom(CustomContractError::NoAccess))
        );
        claim_eq!(
            state.transfer_from(&ALICE, ALICE, BOB, TokenIdU64(1)),
            Err(custom(CustomContractError::AlreadyAssigned))
        );
        claim_eq!(
            state.transfer_from(&ALICE, ALICE, ALICE, TokenIdU64(1)),
            Err(custom(CustomContractError::AlreadyAssigned))
        );
        claim_eq!(
            state.transfer_from(&ALICE, ALICE, CAROL, TokenIdU64(2)),
            Err(ContractError::InsufficientFunds)
        );
        claim_eq!(
            state.transfer_from(&ALICE, ALICE, CAROL, TokenIdU64(5)),
            Err(ContractError::InvalidTokenId)
        );
        claim_consistent(&state, 1, &[ALICE, BOB]);
    }

    #[concordium_test]
    fn test_operator_transfers_on_behalf_of_owner() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");

        state.add_operator(&ALICE, &CAROL, &mut state_builder);
        claim!(state.is_operator(&ALICE, &CAROL));
        claim!(!state.is_operator(&CAROL, &ALICE));

        claim!(state.transfer_from(&CAROL, ALICE, BOB, TokenIdU64(1)).is_ok());
        claim_eq!(state.owner_of(&TokenIdU64(1)), Ok(BOB));

        state.remove_operator(&ALICE, &CAROL);
        claim!(!state.is_operator(&ALICE, &CAROL));
    }

    #[concordium_test]
    fn test_pause_blocks_mutations() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");

        claim_eq!(
            state.set_paused(&ALICE, true),
            Err(custom(CustomContractError::NoAccess))
        );
        claim_eq!(state.set_paused(&ADMIN, true), Ok(true));
        claim_eq!(state.set_paused(&ADMIN, true), Ok(false));

        let paused = || -> ContractResult<()> { Err(custom(CustomContractError::Paused)) };
        claim_eq!(state.create_event(&ALICE, String::from("ipfs://x")).map(|_| ()), paused());
        claim_eq!(state.mint_token(&ALICE, 1, None, BOB).map(|_| ()), paused());
        claim_eq!(
            state.mint_event_to_many_users(&ADMIN, 1, Vec::new(), vec![BOB]).map(|_| ()),
            paused()
        );
        claim_eq!(
            state.mint_user_to_many_events(&ADMIN, vec![1], Vec::new(), BOB).map(|_| ()),
            paused()
        );
        claim_eq!(state.burn(&ALICE, &TokenIdU64(1)).map(|_| ()), paused());
        claim_eq!(
            state.transfer_from(&ALICE, ALICE, BOB, TokenIdU64(1)).map(|_| ()),
            paused()
        );

        claim_eq!(state.event_count(), 1);
        claim_eq!(state.total_supply(), 1);
        claim_consistent(&state, 1, &[ALICE]);

        // Role management stays available.
        claim!(state.add_event_minter(&ALICE, 1, BOB).is_ok());

        claim_eq!(state.set_paused(&ADMIN, false), Ok(true));
        claim!(state.mint_token(&BOB, 1, None, BOB).is_ok());
    }

    #[concordium_test]
    fn test_batch_mint_is_atomic() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");
        state
            .create_event(&BOB, String::from("ipfs://event-2"))
            .expect_report("Failed to create event");

        // ALICE already holds a token of event 1.
        claim_eq!(
            state.mint_event_to_many_users(&ALICE, 1, Vec::new(), vec![BOB, ALICE]),
            Err(custom(CustomContractError::AlreadyAssigned))
        );
        claim_eq!(
            state.mint_event_to_many_users(&ALICE, 1, Vec::new(), vec![CAROL, CAROL]),
            Err(custom(CustomContractError::AlreadyAssigned))
        );
        claim_eq!(
            state.mint_event_to_many_users(&ALICE, 1, vec![String::from("a")], vec![BOB, CAROL]),
            Err(custom(CustomContractError::InvalidParams))
        );
        // ALICE may mint event 1 but not event 2.
        claim_eq!(
            state.mint_user_to_many_events(&ALICE, vec![1, 2], Vec::new(), CAROL),
            Err(custom(CustomContractError::NoAccess))
        );
        claim_eq!(
            state.mint_user_to_many_events(&ADMIN, vec![1, 1], Vec::new(), CAROL),
            Err(custom(CustomContractError::AlreadyAssigned))
        );

        claim_eq!(state.total_supply(), 2);
        claim_eq!(state.balance_of(&CAROL), 0);
        claim_consistent(&state, 1, &[ALICE]);
        claim_consistent(&state, 2, &[BOB]);

        let minted = state
            .mint_user_to_many_events(
                &ADMIN,
                vec![2, 1],
                vec![String::from("x.json"), String::from("y.json")],
                CAROL,
            )
            .expect_report("Failed to mint batch");
        claim_eq!(minted, vec![TokenIdU64(3), TokenIdU64(4)]);
        claim_eq!(state.event_of_owner_by_index(&CAROL, 0), Ok(2));
        claim_eq!(state.event_of_owner_by_index(&CAROL, 1), Ok(1));
        claim_eq!(
            state.token_uri(&TokenIdU64(4)),
            Ok(String::from("https://poap.test/token/y.json"))
        );
    }

    #[concordium_test]
    fn test_minter_role_management() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");

        claim_eq!(
            state.add_event_minter(&BOB, 1, BOB),
            Err(custom(CustomContractError::NoAccess))
        );
        claim_eq!(
            state.add_event_minter(&ALICE, 3, BOB),
            Err(custom(CustomContractError::EventNotFound))
        );

        // A minter does not need to hold a token of the event.
        claim!(state.add_event_minter(&ALICE, 1, BOB).is_ok());
        claim!(state.mint_token(&BOB, 1, None, CAROL).is_ok());
        claim!(!state.is_event_creator(1, &BOB));

        claim!(state.remove_event_minter(&ALICE, 1, BOB).is_ok());
        claim!(!state.is_event_minter(1, &BOB));

        claim!(state.add_event_minter(&ALICE, 1, CAROL).is_ok());
        claim!(state.renounce_event_minter(&CAROL, 1).is_ok());
        claim!(!state.is_event_minter(1, &CAROL));

        claim!(state.add_event_minter(&ALICE, 1, ALICE).is_ok());
        claim!(state.renounce_event_creator(&ALICE, 1).is_ok());
        claim!(state.event_roles(1, &ALICE).is_empty());
        // The badge itself is untouched.
        claim_eq!(state.owner_of(&TokenIdU64(1)), Ok(ALICE));
    }

    #[concordium_test]
    fn test_authorization_and_base_uri_are_admin_only() {
        let mut state_builder = TestStateBuilder::new();
        let mut state = new_state(&mut state_builder);
        state
            .create_event(&ALICE, String::from("ipfs://event-1"))
            .expect_report("Failed to create event");

        claim_eq!(
            state.set_authorized(&ALICE, 1, true),
            Err(custom(CustomContractError::NoAccess))
        );
        claim_eq!(
            state.set_authorized(&ADMIN, 2, true),
            Err(custom(CustomContractError::EventNotFound))
        );
        claim!(state.set_authorized(&ADMIN, 1, true).is_ok());
        claim_eq!(state.is_authorized(1), Ok(true));
        claim!(state.set_authorized(&ADMIN, 1, false).is_ok());
        claim_eq!(state.is_authorized(1), Ok(false));

        claim_eq!(
            state.token_uri(&TokenIdU64(1)),
            Ok(String::from("https://poap.test/token/1"))
        );
        claim_eq!(
            state.set_base_uri(&ALICE, String::from("https://other.test/")),
            Err(custom(CustomContractError::NoAccess))
        );
        claim!(state
            .set_base_uri(&ADMIN, String::from("https://other.test/"))
            .is_ok());
        claim_eq!(
            state.token_uri(&TokenIdU64(1)),
            Ok(String::from("https://other.test/1"))
        );
    }

    #[concordium_test]
    fn test_unknown_event_queries() {
        let mut state_builder = TestStateBuilder::new();
        let state = new_state(&mut state_builder);

        claim_eq!(state.event_count(), 0);
        claim_eq!(
            state.balance_of_event(1),
            Err(custom(CustomContractError::EventNotFound))
        );
        claim_eq!(
            state.event_has_user(1, &ALICE),
            Err(custom(CustomContractError::EventNotFound))
        );
        claim_eq!(
            state.event_meta_uri(1),
            Err(custom(CustomContractError::EventNotFound))
        );
        claim!(!state.is_event_creator(1, &ALICE));
        claim!(!state.is_event_minter(1, &ALICE));
        claim_eq!(state.balance_of(&ALICE), 0);
        claim_eq!(
            state.event_of_owner_by_index(&ALICE, 0),
            Err(custom(CustomContractError::OutOfRange))
        );
    }
}
