use eventadmin_core::OrganizerId;

/// Organizer context for a request.
///
/// Identity is validated upstream; this only carries it to the handlers. It is
/// immutable and must be present for all event routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerContext {
    organizer_id: OrganizerId,
}

impl OrganizerContext {
    pub fn new(organizer_id: OrganizerId) -> Self {
        Self { organizer_id }
    }

    pub fn organizer_id(&self) -> &OrganizerId {
        &self.organizer_id
    }
}
