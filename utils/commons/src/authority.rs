use crate::CustomContractError;
use concordium_std::*;

#[derive(Debug, Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct Authority<S: HasStateApi> {
    /// Trusted addresses with blanket rights over every event and the contract lifecycle
    admins: StateSet<Address, S>,
}

impl<S: HasStateApi> Authority<S> {
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        origin: Address,
        extra_admins: impl IntoIterator<Item = Address>,
    ) -> Self {
        let mut admins = state_builder.new_set();
        admins.insert(origin);
        for admin in extra_admins {
            admins.insert(admin);
        }
        Self { admins }
    }

    pub fn has_admin_rights(&self, address: &Address) -> bool {
        self.admins.contains(address)
    }

    /// Adds or removes an admin on behalf of `sender`.
    ///
    /// Returns whether the admin list changed. Adding an existing admin or
    /// removing a missing one is not an error.
    pub fn handle_update(
        &mut self,
        sender: Address,
        update: AuthorityUpdateParams,
    ) -> Result<bool, CustomContractError> {
        ensure!(
            self.has_admin_rights(&sender),
            CustomContractError::NoAccess
        );

        let changed = match update.kind {
            AuthorityUpdateKind::Remove => self.admins.remove(&update.address),
            AuthorityUpdateKind::Add => self.admins.insert(update.address),
        };

        Ok(changed)
    }

    /// Removes `sender` from the admin list. Nothing stops the last admin from
    /// leaving.
    pub fn renounce(&mut self, sender: &Address) -> bool {
        self.admins.remove(sender)
    }

    pub fn handle_view(&self, view: AuthorityViewParams) -> Vec<Address> {
        self.admins
            .iter()
            .skip(view.skip as usize)
            .take(view.show as usize)
            .map(|a| *a)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, SchemaType, Serialize)]
pub enum AuthorityUpdateKind {
    Remove,
    Add,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityUpdateParams {
    pub kind: AuthorityUpdateKind,
    pub address: Address,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityViewParams {
    pub skip: u32,
    pub show: u32,
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const ADMIN_ACCOUNT: AccountAddress = AccountAddress([1; 32]);
    const ADMIN_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 1,
    };

    const USER_1: AccountAddress = AccountAddress([16; 32]);
    const USER_2: AccountAddress = AccountAddress([17; 32]);
    const CONTRACT_1: ContractAddress = ContractAddress {
        index: 16,
        subindex: 16,
    };

    fn default_authority() -> Authority<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();

        Authority::new(
            &mut state_builder,
            Address::Account(ADMIN_ACCOUNT),
            [Address::Contract(ADMIN_CONTRACT)],
        )
    }

    #[concordium_test]
    fn test_new_authority_includes_origin_and_extras() {
        let authority = default_authority();

        claim!(authority.has_admin_rights(&Address::Account(ADMIN_ACCOUNT)));
        claim!(authority.has_admin_rights(&Address::Contract(ADMIN_CONTRACT)));
        claim!(!authority.has_admin_rights(&Address::Account(USER_1)));
    }

    #[concordium_test]
    fn test_update_authority_add_new_admin() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            Address::Account(ADMIN_ACCOUNT),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Add,
                address: Address::Account(USER_1),
            },
        );
        claim_eq!(result, Ok(true));
        claim!(authority.has_admin_rights(&Address::Account(USER_1)));

        let result = authority.handle_update(
            Address::Contract(ADMIN_CONTRACT),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Add,
                address: Address::Contract(CONTRACT_1),
            },
        );
        claim_eq!(result, Ok(true));
        claim!(authority.has_admin_rights(&Address::Contract(CONTRACT_1)));

        let result = authority.handle_update(
            Address::Account(USER_2),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Add,
                address: Address::Account(USER_2),
            },
        );
        claim_eq!(result, Err(CustomContractError::NoAccess));
        claim!(!authority.has_admin_rights(&Address::Account(USER_2)));
    }

    #[concordium_test]
    fn test_update_authority_add_existing_admin() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            Address::Account(ADMIN_ACCOUNT),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Add,
                address: Address::Contract(ADMIN_CONTRACT),
            },
        );
        // No change or error expected
        claim_eq!(result, Ok(false));
        claim!(authority.has_admin_rights(&Address::Contract(ADMIN_CONTRACT)));
    }

    #[concordium_test]
    fn test_update_authority_remove_admin() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            Address::Account(ADMIN_ACCOUNT),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Remove,
                address: Address::Contract(ADMIN_CONTRACT),
            },
        );
        claim_eq!(result, Ok(true));
        claim!(!authority.has_admin_rights(&Address::Contract(ADMIN_CONTRACT)));

        // Removed admin lost its rights to update the list
        let result = authority.handle_update(
            Address::Contract(ADMIN_CONTRACT),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Remove,
                address: Address::Account(ADMIN_ACCOUNT),
            },
        );
        claim_eq!(result, Err(CustomContractError::NoAccess));
        claim!(authority.has_admin_rights(&Address::Account(ADMIN_ACCOUNT)));

        // No change or error expected
        let result = authority.handle_update(
            Address::Account(ADMIN_ACCOUNT),
            AuthorityUpdateParams {
                kind: AuthorityUpdateKind::Remove,
                address: Address::Account(USER_1),
            },
        );
        claim_eq!(result, Ok(false));
    }

    #[concordium_test]
    fn test_renounce_can_empty_admin_list() {
        let mut authority = default_authority();

        claim!(authority.renounce(&Address::Account(ADMIN_ACCOUNT)));
        claim!(authority.renounce(&Address::Contract(ADMIN_CONTRACT)));
        claim!(!authority.renounce(&Address::Contract(ADMIN_CONTRACT)));

        claim!(authority
            .handle_view(AuthorityViewParams { skip: 0, show: 10 })
            .is_empty());
    }

    #[concordium_test]
    fn test_view_authority_admins() {
        let mut authority = default_authority();

        let mut admin_set = (16u8..=255u8)
            .map(|n| {
                if n % 2 == 0 {
                    Address::Contract(ContractAddress {
                        index: n as u64,
                        subindex: 0,
                    })
                } else {
                    Address::Account(AccountAddress([n; 32]))
                }
            })
            .chain([
                Address::Account(ADMIN_ACCOUNT),
                Address::Contract(ADMIN_CONTRACT),
            ])
            .collect::<HashSet<_>>();

        for admin in admin_set.iter() {
            authority.admins.insert(*admin);
        }

        let mut num_seen = 0;
        let increment = 30;
        loop {
            let returned_addresses = authority.handle_view(AuthorityViewParams {
                skip: num_seen,
                show: increment,
            });

            for addr in returned_addresses.iter() {
                claim!(admin_set.remove(addr));
            }

            if returned_addresses.len() != increment as usize {
                break;
            }
            num_seen += increment;
        }

        claim!(admin_set.is_empty());
    }
}
