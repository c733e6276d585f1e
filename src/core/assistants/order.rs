//! Order assistants by the user's chosen-assistants preference.

use std::collections::HashMap;

use super::ownership::Ownership;
use super::types::{Assistant, User};

/// Reorder `assistants` by the user's preference list.
///
/// Keeps only preferred assistants (and, with `owned_by_user`, only those the
/// user owns), sorted by their position in the list. Returns the input as-is when
/// there is no preference or nothing in the input matches it.
pub fn order_assistants<'a, O>(
    assistants: &'a [Assistant],
    user: Option<&User>,
    owned_by_user: bool,
    ownership: &O,
) -> Vec<&'a Assistant>
where
    O: Ownership + ?Sized,
{
    let unchanged = || assistants.iter().collect::<Vec<_>>();
    let Some(user) = user else {
        return unchanged();
    };
    let Some(chosen) = user.chosen_assistants() else {
        return unchanged();
    };

    // Later duplicates override earlier positions.
    let priority: HashMap<i64, usize> = chosen
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, index))
        .collect();

    let mut filtered: Vec<&Assistant> = assistants
        .iter()
        .filter(|a| priority.contains_key(&a.id))
        .filter(|a| !owned_by_user || ownership.owns(user, a))
        .collect();

    if filtered.is_empty() {
        log::debug!(
            "No assistant matches the {} preferred id(s), keeping original order",
            chosen.len()
        );
        return unchanged();
    }

    filtered.sort_by_key(|a| priority.get(&a.id).copied().unwrap_or(usize::MAX));
    filtered
}
