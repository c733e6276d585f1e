//! Assistant listing: records, ownership, and preference ordering.

mod order;
mod ownership;
mod types;

pub use order::order_assistants;
pub use ownership::{OwnerMatch, Ownership};
pub use types::{Assistant, AssistantOwner, User, UserPreferences};

/// Order assistants for `user` using the default ownership rule.
pub fn order_assistants_for_user<'a>(
    assistants: &'a [Assistant],
    user: Option<&User>,
    owned_by_user: bool,
) -> Vec<&'a Assistant> {
    order_assistants(assistants, user, owned_by_user, &OwnerMatch)
}
