/// An action waiting for the user to confirm it in a dialog.
///
/// The dialog is open while an action is pending; confirming hands the action out exactly
/// once and closes the dialog, cancelling just closes it.
#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation<A> {
    pending: Option<A>,
}

impl<A> Default for Confirmation<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A> Confirmation<A> {
    /// Open the dialog for `action`, replacing any action already waiting
    pub fn request(&mut self, action: A) {
        self.pending = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&A> {
        self.pending.as_ref()
    }

    pub fn confirm(&mut self) -> Option<A> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Flip of an entity's active flag awaiting confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusChange {
    pub id: String,
    pub name: String,
    pub is_active: bool,
}

impl StatusChange {
    /// Change that inverts `currently_active`
    pub fn toggle(id: &str, name: &str, currently_active: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            is_active: !currently_active,
        }
    }

    pub fn prompt(&self) -> String {
        let verb = if self.is_active { "activate" } else { "deactivate" };
        format!("Are you sure you want to {} {}?", verb, self.name)
    }
}
