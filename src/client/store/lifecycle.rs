//! Request lifecycle shared by every store operation.
//!
//! An operation moves `Idle -> Pending -> Fulfilled | Rejected` and may be started again at
//! any time. Starting it hands out a [`Ticket`] stamped with a new generation; only the
//! holder of the latest ticket may settle the lifecycle, so a slow response to an older
//! dispatch can no longer overwrite the result of a newer one.

use dioxus_logger::tracing;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// Proof of which dispatch of an operation a response belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lifecycle {
    status: RequestStatus,
    generation: u64,
}

impl Lifecycle {
    /// Enter `Pending`, invalidating every ticket handed out before
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.status = RequestStatus::Pending;

        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Settle as fulfilled, returns false for a stale ticket
    pub fn fulfill(&mut self, ticket: Ticket) -> bool {
        self.settle(ticket, RequestStatus::Fulfilled)
    }

    /// Settle as rejected, returns false for a stale ticket
    pub fn reject(&mut self, ticket: Ticket) -> bool {
        self.settle(ticket, RequestStatus::Rejected)
    }

    fn settle(&mut self, ticket: Ticket, status: RequestStatus) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "Ignoring response for superseded request"
            );

            return false;
        }

        self.status = status;
        true
    }

    /// Back to `Idle`, every ticket handed out so far goes stale
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.status = RequestStatus::Idle;
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}
