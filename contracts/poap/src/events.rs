use crate::roles::EventRoles;
use commons::*;
use concordium_std::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub enum RoleUpdate {
    Remove,
    Add,
}

#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct EventCreatedEvent {
    pub event_id: EventId,
    pub creator: Address,
}

#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct EventMinterEvent {
    pub event_id: EventId,
    pub account: Address,
    pub update: RoleUpdate,
}

#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct EventCreatorRenouncedEvent {
    pub event_id: EventId,
    pub account: Address,
}

#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct EventAuthorizationEvent {
    pub event_id: EventId,
    pub authorized: bool,
}

#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct AdminEvent {
    pub address: Address,
    pub update: AuthorityUpdateKind,
}

#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct PauseEvent {
    pub paused: bool,
    pub sender: Address,
}

#[derive(Debug, PartialEq, Eq, Serialize, SchemaType)]
pub struct RoleMigrationEvent {
    pub event_id: EventId,
    pub from: Address,
    pub to: Address,
    pub roles: EventRoles,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum CustomEvent {
    EventCreated(EventCreatedEvent),
    EventMinter(EventMinterEvent),
    EventCreatorRenounced(EventCreatorRenouncedEvent),
    EventAuthorization(EventAuthorizationEvent),
    Admin(AdminEvent),
    Pause(PauseEvent),
    BaseUri(String),
    /// Event roles followed a transferred token
    RoleMigration(RoleMigrationEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::EventCreated(event) => {
                out.write_u8(EVENT_CREATED_TAG)?;
                event.serial(out)
            }
            CustomEvent::EventMinter(event) => {
                out.write_u8(EVENT_MINTER_TAG)?;
                event.serial(out)
            }
            CustomEvent::EventCreatorRenounced(event) => {
                out.write_u8(EVENT_CREATOR_RENOUNCED_TAG)?;
                event.serial(out)
            }
            CustomEvent::EventAuthorization(event) => {
                out.write_u8(EVENT_AUTHORIZATION_TAG)?;
                event.serial(out)
            }
            CustomEvent::Admin(event) => {
                out.write_u8(ADMIN_TAG)?;
                event.serial(out)
            }
            CustomEvent::Pause(event) => {
                out.write_u8(PAUSE_TAG)?;
                event.serial(out)
            }
            CustomEvent::BaseUri(base_uri) => {
                out.write_u8(BASE_URI_TAG)?;
                base_uri.serial(out)
            }
            CustomEvent::RoleMigration(event) => {
                out.write_u8(ROLE_MIGRATION_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            EVENT_CREATED_TAG => EventCreatedEvent::deserial(source).map(CustomEvent::EventCreated),
            EVENT_MINTER_TAG => EventMinterEvent::deserial(source).map(CustomEvent::EventMinter),
            EVENT_CREATOR_RENOUNCED_TAG => {
                EventCreatorRenouncedEvent::deserial(source).map(CustomEvent::EventCreatorRenounced)
            }
            EVENT_AUTHORIZATION_TAG => {
                EventAuthorizationEvent::deserial(source).map(CustomEvent::EventAuthorization)
            }
            ADMIN_TAG => AdminEvent::deserial(source).map(CustomEvent::Admin),
            PAUSE_TAG => PauseEvent::deserial(source).map(CustomEvent::Pause),
            BASE_URI_TAG => String::deserial(source).map(CustomEvent::BaseUri),
            ROLE_MIGRATION_TAG => RoleMigrationEvent::deserial(source).map(CustomEvent::RoleMigration),
            _ => Err(ParseError::default()),
        }
    }
}
