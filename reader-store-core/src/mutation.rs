//! Mutation trait for tagged state changes

use std::fmt::Debug;

/// One row of a mutation table: the public action name and the mutation
/// identifier it commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    /// Public entry-point name, e.g. `setProgress`
    pub action: &'static str,
    /// Mutation identifier, e.g. `SET_PROGRESS`
    pub mutation: &'static str,
}

impl Binding {
    pub const fn new(action: &'static str, mutation: &'static str) -> Self {
        Self { action, mutation }
    }
}

/// Trait for mutations that can be committed to a store
///
/// A mutation is a tagged payload: the tag (`id`) names the state field it
/// writes, the payload is carried by the enum variant itself. Every variant
/// is also reachable through a public action name.
///
/// Mutations should be:
/// - Clone: Mutations may be logged, recorded, or replayed
/// - Debug: For logging
/// - Send + 'static: So they can cross a channel to the task owning the store
///
/// Use `#[derive(Mutation)]` from `reader-store-macros` to auto-implement this trait.
pub trait Mutation: Clone + Debug + Send + 'static {
    /// Static action name to mutation identifier table, one row per variant
    const BINDINGS: &'static [Binding];

    /// Mutation identifier, e.g. `SET_FILE_NAME`
    fn id(&self) -> &'static str;

    /// Action name that commits this mutation, e.g. `setFileName`
    fn action_name(&self) -> &'static str;
}

/// Look up the mutation identifier bound to an action name.
pub fn mutation_for_action<M: Mutation>(action: &str) -> Option<&'static str> {
    M::BINDINGS
        .iter()
        .find(|b| b.action == action)
        .map(|b| b.mutation)
}

/// Look up the action name bound to a mutation identifier.
pub fn action_for_mutation<M: Mutation>(mutation: &str) -> Option<&'static str> {
    M::BINDINGS
        .iter()
        .find(|b| b.mutation == mutation)
        .map(|b| b.action)
}
