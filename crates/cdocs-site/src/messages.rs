//! Messages sent and received by a domain's services.

use std::sync::Arc;

use cdocs_content::{
    ContentIndex, Entry, Reference, collections, find_by_id_and_version_or_latest,
};
use serde::Serialize;

use crate::domains::Domain;
use crate::error::SiteError;

/// Collections holding messages.
const MESSAGE_COLLECTIONS: [&str; 3] = [
    collections::EVENTS,
    collections::COMMANDS,
    collections::QUERIES,
];

/// Messages of a domain, resolved against events, commands and queries.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DomainMessages {
    /// Messages sent by the domain's services, in service order.
    pub sends: Vec<Arc<Entry>>,
    /// Messages received by the domain's services, in service order.
    pub receives: Vec<Arc<Entry>>,
    /// References that matched no message.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<Reference>,
}

/// Resolve the `sends` and `receives` references of a domain's services.
///
/// # Errors
///
/// Returns [`SiteError::Index`] if a message collection can't be read.
pub fn messages_for_domain(
    index: &dyn ContentIndex,
    domain: &Domain,
) -> Result<DomainMessages, SiteError> {
    let mut messages = Vec::new();
    for collection in MESSAGE_COLLECTIONS {
        messages.extend(index.get_collection(collection)?);
    }

    let mut result = DomainMessages::default();
    let sends = domain.services.iter().flat_map(|s| &s.data.sends);
    let receives = domain.services.iter().flat_map(|s| &s.data.receives);
    result.sends = resolve_all(&messages, sends, &mut result.unresolved);
    result.receives = resolve_all(&messages, receives, &mut result.unresolved);

    if !result.unresolved.is_empty() {
        tracing::debug!(
            domain = domain.id(),
            count = result.unresolved.len(),
            "Unresolved message references"
        );
    }
    Ok(result)
}

fn resolve_all<'a>(
    messages: &[Arc<Entry>],
    references: impl Iterator<Item = &'a Reference>,
    unresolved: &mut Vec<Reference>,
) -> Vec<Arc<Entry>> {
    let mut resolved = Vec::new();
    for reference in references {
        let found =
            find_by_id_and_version_or_latest(messages, &reference.id, reference.version.as_deref());
        if found.is_empty() {
            unresolved.push(reference.clone());
        }
        resolved.extend(found);
    }
    resolved
}
