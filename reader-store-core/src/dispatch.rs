//! Dispatch by action name with a JSON payload
//!
//! Typed dispatchers are the primary entry point. This module covers the
//! dynamic case, where the caller only has an action name string and an
//! untyped payload (a bridge from a scripting layer, a replay file, a
//! message from another process).
//!
//! The mutation type must deserialize from the adjacently tagged layout
//! `{"type": "<MUTATION_ID>", "payload": <value>}`, which is what
//! `#[serde(tag = "type", content = "payload")]` with per-variant
//! `rename = "<MUTATION_ID>"` produces.

use crate::{mutation_for_action, Commit, Mutation};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while resolving a named dispatch
///
/// Failures of the commit channel itself are never wrapped here; they come
/// back inside the `Ok` value exactly as the channel produced them.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("invalid payload for action '{action}': {source}")]
    InvalidPayload {
        action: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode `payload` into the mutation bound to `action`.
pub fn decode_named<M>(action: &str, payload: Value) -> Result<M, DispatchError>
where
    M: Mutation + DeserializeOwned,
{
    let id = mutation_for_action::<M>(action)
        .ok_or_else(|| DispatchError::UnknownAction(action.to_string()))?;

    let mut tagged = serde_json::Map::with_capacity(2);
    tagged.insert("type".to_string(), Value::String(id.to_string()));
    tagged.insert("payload".to_string(), payload);

    serde_json::from_value(Value::Object(tagged)).map_err(|source| DispatchError::InvalidPayload {
        action: action.to_string(),
        source,
    })
}

/// Resolve `action` to its mutation, decode `payload`, and commit it once.
///
/// Nothing is committed when the name is unknown or the payload does not
/// fit the mutation's type.
///
/// # Example
/// ```ignore
/// let changed = dispatch_named(&mut store, "setProgress", json!(42))?;
/// ```
pub fn dispatch_named<M, C>(
    ctx: &mut C,
    action: &str,
    payload: Value,
) -> Result<C::Output, DispatchError>
where
    M: Mutation + DeserializeOwned,
    C: Commit<M> + ?Sized,
{
    let mutation = decode_named::<M>(action, payload)?;
    Ok(ctx.commit(mutation))
}
