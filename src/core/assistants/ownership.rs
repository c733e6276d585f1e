//! Ownership rules used when listing only the user's own assistants.

use super::types::{Assistant, User};

/// Decides whether `user` owns `assistant`. Incomplete records must answer `false`.
pub trait Ownership {
    fn owns(&self, user: &User, assistant: &Assistant) -> bool;
}

/// Default rule: the assistant's owner id is the user's id, and it is not a built-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerMatch;

impl Ownership for OwnerMatch {
    fn owns(&self, user: &User, assistant: &Assistant) -> bool {
        !assistant.default_persona
            && !user.id.is_empty()
            && assistant
                .owner
                .as_ref()
                .is_some_and(|owner| owner.id == user.id)
    }
}

impl<F> Ownership for F
where
    F: Fn(&User, &Assistant) -> bool,
{
    fn owns(&self, user: &User, assistant: &Assistant) -> bool {
        self(user, assistant)
    }
}
