use crate::{client::store::SliceHandle, error::Error};

/// Most toasts shown at once, older ones are dropped first
pub const MAX_NOTIFICATIONS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Transient toasts shown over the current screen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            kind,
            message: message.into(),
        });

        if self.items.len() > MAX_NOTIFICATIONS {
            let overflow = self.items.len() - MAX_NOTIFICATIONS;
            self.items.drain(..overflow);
        }

        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notification| notification.id != id);
    }
}

pub fn notify_success<N: SliceHandle<NotificationState>>(notifications: &mut N, message: &str) {
    notifications.apply(|state| state.push(NotificationKind::Success, message));
}

pub fn notify_error<N: SliceHandle<NotificationState>>(notifications: &mut N, err: &Error) {
    let message = err.user_message();
    notifications.apply(|state| state.push(NotificationKind::Error, message));
}
