//! Generic entity slice: a list, a selected record, an error and one lifecycle per operation.

use crate::{
    client::store::lifecycle::{Lifecycle, Ticket},
    model::{
        account::AccountDto,
        document::DocumentDto,
        ship::{ShipDetailsDto, ShipDto},
    },
};

/// Records addressable by their backend id
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for AccountDto {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ShipDto {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ShipDetailsDto {
    fn id(&self) -> &str {
        &self.ship.id
    }
}

impl Identified for DocumentDto {
    fn id(&self) -> &str {
        &self.id
    }
}

/// State of one entity family.
///
/// `items` is only ever replaced by a list fetch and `selected` only by a details fetch.
/// A rejected fetch records `error` and leaves both untouched. Creating a record never
/// appends to `items`; the caller re-fetches the list. Update and remove results are
/// applied even when a newer mutation has been dispatched since, as each carries the
/// backend's record; only the pending flag follows the latest ticket.
#[derive(Clone, Debug, PartialEq)]
pub struct EntitySlice<T, D = T> {
    pub items: Vec<T>,
    pub selected: Option<D>,
    pub error: Option<String>,
    list: Lifecycle,
    details: Lifecycle,
    create: Lifecycle,
    update: Lifecycle,
    remove: Lifecycle,
}

impl<T, D> Default for EntitySlice<T, D> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            error: None,
            list: Lifecycle::default(),
            details: Lifecycle::default(),
            create: Lifecycle::default(),
            update: Lifecycle::default(),
            remove: Lifecycle::default(),
        }
    }
}

impl<T: Identified, D: Identified> EntitySlice<T, D> {
    pub fn loading(&self) -> bool {
        self.list.is_pending()
    }

    pub fn details_loading(&self) -> bool {
        self.details.is_pending()
    }

    pub fn create_loading(&self) -> bool {
        self.create.is_pending()
    }

    pub fn update_loading(&self) -> bool {
        self.update.is_pending()
    }

    pub fn remove_loading(&self) -> bool {
        self.remove.is_pending()
    }

    pub fn begin_list(&mut self) -> Ticket {
        self.error = None;
        self.list.begin()
    }

    pub fn fulfill_list(&mut self, ticket: Ticket, items: Vec<T>) -> bool {
        if !self.list.fulfill(ticket) {
            return false;
        }

        self.items = items;
        true
    }

    pub fn reject_list(&mut self, ticket: Ticket, message: String) -> bool {
        if !self.list.reject(ticket) {
            return false;
        }

        self.error = Some(message);
        true
    }

    pub fn begin_details(&mut self) -> Ticket {
        self.error = None;
        self.details.begin()
    }

    pub fn fulfill_details(&mut self, ticket: Ticket, record: D) -> bool {
        if !self.details.fulfill(ticket) {
            return false;
        }

        self.selected = Some(record);
        true
    }

    pub fn reject_details(&mut self, ticket: Ticket, message: String) -> bool {
        if !self.details.reject(ticket) {
            return false;
        }

        self.error = Some(message);
        true
    }

    pub fn begin_create(&mut self) -> Ticket {
        self.create.begin()
    }

    pub fn fulfill_create(&mut self, ticket: Ticket) -> bool {
        self.create.fulfill(ticket)
    }

    pub fn reject_create(&mut self, ticket: Ticket, message: String) -> bool {
        self.error = Some(message);
        self.create.reject(ticket)
    }

    pub fn begin_update(&mut self) -> Ticket {
        self.update.begin()
    }

    /// Replace the matching list entry with the updated record
    pub fn fulfill_update(&mut self, ticket: Ticket, record: T) -> bool {
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == record.id()) {
            *item = record;
        }

        self.update.fulfill(ticket)
    }

    pub fn reject_update(&mut self, ticket: Ticket, message: String) -> bool {
        self.error = Some(message);
        self.update.reject(ticket)
    }

    pub fn begin_remove(&mut self) -> Ticket {
        self.remove.begin()
    }

    /// Drop the record from the list and clear the selection if it was selected
    pub fn fulfill_remove(&mut self, ticket: Ticket, id: &str) -> bool {
        self.items.retain(|item| item.id() != id);
        if self.selected.as_ref().is_some_and(|selected| selected.id() == id) {
            self.selected = None;
        }

        self.remove.fulfill(ticket)
    }

    pub fn reject_remove(&mut self, ticket: Ticket, message: String) -> bool {
        self.error = Some(message);
        self.remove.reject(ticket)
    }

    /// Mutate the selected record if it is the one with `id`
    pub fn update_selected(&mut self, id: &str, f: impl FnOnce(&mut D)) -> bool {
        match self.selected.as_mut() {
            Some(selected) if selected.id() == id => {
                f(selected);
                true
            }
            _ => false,
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Drop the selected record; a details fetch still in flight is ignored when it lands
    pub fn clear_selected(&mut self) {
        self.selected = None;
        self.details.invalidate();
    }
}
