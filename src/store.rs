use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::types::{Paste, Property, DEFAULT_CONTENT, DEFAULT_TITLE};

/// Answer to a property lookup on a paste that has no such field.
pub const PROPERTY_NOT_FOUND: &str = "Property not found.";

/// In-memory, append-only list of pastes.
///
/// Ids are positions in the list, so nothing may ever be removed from it.
#[derive(Clone, Default)]
pub struct PasteStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    pastes: Vec<Paste>,
    next_id: i64,
}

impl PasteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paste and return its id. Missing or empty fields get defaults.
    pub async fn create(&self, title: Option<String>, content: Option<String>) -> i64 {
        let title = title
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_owned());
        let content = content
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT.to_owned());

        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        debug_assert_eq!(id as usize, inner.pastes.len());

        info!(
            "new paste: id={id}, title='{title}', size={size}",
            size = content.len()
        );

        inner.pastes.push(Paste::new(id, title, content));
        inner.next_id += 1;
        id
    }

    /// Get a paste by id, or [`Paste::not_found`] if there is none.
    pub async fn get_by_index(&self, id: i64) -> Paste {
        self.get(id).await.unwrap_or_else(Paste::not_found)
    }

    /// Get the text of one field of a paste.
    ///
    /// Unknown property names are not an error and yield
    /// [`PROPERTY_NOT_FOUND`].
    pub async fn get_property(&self, id: i64, property: &str) -> crate::ApiResult<String> {
        let paste = self.get(id).await.ok_or(crate::ApiError::NotFound)?;
        Ok(match Property::parse(property) {
            Some(property) => {
                debug!("reading {property} of paste {id}");
                paste.property(property)
            }
            None => {
                debug!("paste {id} has no property '{property}'");
                PROPERTY_NOT_FOUND.to_owned()
            }
        })
    }

    /// All pastes whose content followed by title contains `query`, ignoring
    /// case, in creation order.
    pub async fn search(&self, query: &str) -> Vec<Paste> {
        let needle = query.to_lowercase();
        let inner = self.inner.read().await;
        inner
            .pastes
            .iter()
            .filter(|paste| paste.matches(&needle))
            .cloned()
            .collect()
    }

    /// A snapshot of every paste in creation order.
    pub async fn list_all(&self) -> Vec<Paste> {
        self.inner.read().await.pastes.clone()
    }

    async fn get(&self, id: i64) -> Option<Paste> {
        let index = usize::try_from(id).ok()?;
        self.inner.read().await.pastes.get(index).cloned()
    }
}
