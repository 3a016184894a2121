use commons::EventId;
use concordium_std::*;

/// Capabilities a single address holds for a single event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, SchemaType)]
pub struct EventRoles {
    /// Created the event, or received the creator badge by transfer.
    pub is_creator: bool,
    /// Explicitly granted minting rights.
    pub is_minter: bool,
}

impl EventRoles {
    pub fn is_empty(&self) -> bool {
        !self.is_creator && !self.is_minter
    }

    /// A creator is implicitly a minter.
    pub fn can_mint(&self) -> bool {
        self.is_creator || self.is_minter
    }

    fn merge(self, other: Self) -> Self {
        Self {
            is_creator: self.is_creator || other.is_creator,
            is_minter: self.is_minter || other.is_minter,
        }
    }
}

/// Role records keyed by `(event, address)`. Empty records are never stored.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct EventRoleStore<S: HasStateApi> {
    records: StateMap<(EventId, Address), EventRoles, S>,
}

impl<S: HasStateApi> EventRoleStore<S> {
    pub fn new(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            records: state_builder.new_map(),
        }
    }

    pub fn get(&self, event_id: EventId, address: &Address) -> EventRoles {
        self.records
            .get(&(event_id, *address))
            .map(|roles| *roles)
            .unwrap_or_default()
    }

    fn put(&mut self, event_id: EventId, address: Address, roles: EventRoles) {
        if roles.is_empty() {
            self.records.remove(&(event_id, address));
        } else {
            self.records.insert((event_id, address), roles);
        }
    }

    pub fn set_creator(&mut self, event_id: EventId, address: Address, is_creator: bool) {
        let mut roles = self.get(event_id, &address);
        roles.is_creator = is_creator;
        self.put(event_id, address, roles);
    }

    /// Returns whether the flag changed.
    pub fn set_minter(&mut self, event_id: EventId, address: Address, is_minter: bool) -> bool {
        let mut roles = self.get(event_id, &address);
        if roles.is_minter == is_minter {
            return false;
        }
        roles.is_minter = is_minter;
        self.put(event_id, address, roles);
        true
    }

    pub fn clear(&mut self, event_id: EventId, address: Address) {
        self.put(event_id, address, EventRoles::default());
    }

    /// Moves the record of `from` onto `to` for one event.
    ///
    /// The destination keeps any flag it already had. Returns the moved roles,
    /// or `None` when `from` had nothing to move.
    pub fn migrate(&mut self, event_id: EventId, from: Address, to: Address) -> Option<EventRoles> {
        let moved = self.get(event_id, &from);
        if moved.is_empty() {
            return None;
        }

        let merged = self.get(event_id, &to).merge(moved);
        self.clear(event_id, from);
        self.put(event_id, to, merged);

        Some(moved)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const ACCOUNT_0: Address = Address::Account(AccountAddress([0u8; 32]));
    const ACCOUNT_1: Address = Address::Account(AccountAddress([1u8; 32]));

    #[concordium_test]
    fn test_flags_are_independent_per_event() {
        let mut state_builder = TestStateBuilder::new();
        let mut store = EventRoleStore::new(&mut state_builder);

        store.set_creator(1, ACCOUNT_0, true);
        store.set_minter(2, ACCOUNT_0, true);

        claim_eq!(
            store.get(1, &ACCOUNT_0),
            EventRoles {
                is_creator: true,
                is_minter: false
            }
        );
        claim!(store.get(2, &ACCOUNT_0).can_mint());
        claim!(!store.get(2, &ACCOUNT_0).is_creator);
        claim!(store.get(3, &ACCOUNT_0).is_empty());

        claim!(!store.set_minter(2, ACCOUNT_0, true));
        claim!(store.set_minter(2, ACCOUNT_0, false));
        claim!(store.get(2, &ACCOUNT_0).is_empty());
        claim!(!store.set_minter(2, ACCOUNT_0, false));
        claim!(store.get(1, &ACCOUNT_0).is_creator);
    }

    #[concordium_test]
    fn test_migrate_moves_record() {
        let mut state_builder = TestStateBuilder::new();
        let mut store = EventRoleStore::new(&mut state_builder);

        store.set_creator(1, ACCOUNT_0, true);
        store.set_minter(1, ACCOUNT_0, true);

        let moved = store.migrate(1, ACCOUNT_0, ACCOUNT_1);
        claim_eq!(
            moved,
            Some(EventRoles {
                is_creator: true,
                is_minter: true
            })
        );
        claim!(store.get(1, &ACCOUNT_0).is_empty());
        claim!(store.get(1, &ACCOUNT_1).is_creator);
        claim!(store.get(1, &ACCOUNT_1).is_minter);

        // Nothing left to move
        claim_eq!(store.migrate(1, ACCOUNT_0, ACCOUNT_1), None);
    }

    #[concordium_test]
    fn test_migrate_keeps_destination_flags() {
        let mut state_builder = TestStateBuilder::new();
        let mut store = EventRoleStore::new(&mut state_builder);

        store.set_creator(1, ACCOUNT_0, true);
        store.set_minter(1, ACCOUNT_1, true);

        store.migrate(1, ACCOUNT_0, ACCOUNT_1);
        claim_eq!(
            store.get(1, &ACCOUNT_1),
            EventRoles {
                is_creator: true,
                is_minter: true
            }
        );
    }
}
