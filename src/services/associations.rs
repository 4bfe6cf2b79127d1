//! Relationship mutations: bulk replace of link sets and the delete cascade.
//!
//! The store applies each operation in one transaction; this layer turns a
//! missing owner into [`CatalogError::NotFound`] and reports what changed.

use crate::db::Store;
use crate::domain::relations::ReplacePlan;
use crate::domain::{CatalogError, EntityKind};
use tracing::{Span, debug, info};

/// What a bulk replace did to the link set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// The full link set after the replace, ascending.
    pub linked: Vec<i32>,
    pub attached: Vec<i32>,
    pub detached: Vec<i32>,
    /// Requested ids that did not resolve and were skipped.
    pub ignored: Vec<i32>,
}

impl From<ReplacePlan> for ReplaceOutcome {
    fn from(plan: ReplacePlan) -> Self {
        Self {
            linked: plan.linked(),
            attached: plan.attach,
            detached: plan.detach,
            ignored: plan.ignored,
        }
    }
}

#[derive(Clone)]
pub struct AssociationManager {
    store: Store,
}

impl AssociationManager {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Makes the existing subset of `movie_ids` the franchise's full movie set.
    pub async fn replace_franchise_movies(
        &self,
        franchise_id: i32,
        movie_ids: &[i32],
    ) -> Result<ReplaceOutcome, CatalogError> {
        let plan = self
            .store
            .replace_franchise_movies(franchise_id, movie_ids)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Franchise, franchise_id))?;

        let outcome = ReplaceOutcome::from(plan);
        record_replacement("franchise_movies", franchise_id, &outcome);
        Ok(outcome)
    }

    /// Makes the existing subset of `character_ids` the movie's full cast.
    pub async fn replace_movie_characters(
        &self,
        movie_id: i32,
        character_ids: &[i32],
    ) -> Result<ReplaceOutcome, CatalogError> {
        let plan = self
            .store
            .replace_movie_characters(movie_id, character_ids)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Movie, movie_id))?;

        let outcome = ReplaceOutcome::from(plan);
        record_replacement("movie_characters", movie_id, &outcome);
        Ok(outcome)
    }

    /// Deletes the franchise; its movies remain with no franchise.
    pub async fn delete_franchise(&self, id: i32) -> Result<(), CatalogError> {
        if !self.store.delete_franchise(id).await? {
            return Err(CatalogError::not_found(EntityKind::Franchise, id));
        }
        info!(franchise_id = id, "Deleted franchise, member movies detached");
        Ok(())
    }

    /// Deletes the movie and every character link it had.
    pub async fn delete_movie(&self, id: i32) -> Result<(), CatalogError> {
        if !self.store.delete_movie(id).await? {
            return Err(CatalogError::not_found(EntityKind::Movie, id));
        }
        info!(movie_id = id, "Deleted movie and its cast links");
        Ok(())
    }

    /// Deletes the character and removes it from every movie's cast.
    pub async fn delete_character(&self, id: i32) -> Result<(), CatalogError> {
        if !self.store.delete_character(id).await? {
            return Err(CatalogError::not_found(EntityKind::Character, id));
        }
        info!(character_id = id, "Deleted character and its appearances");
        Ok(())
    }
}

fn record_replacement(kind: &'static str, owner_id: i32, outcome: &ReplaceOutcome) {
    metrics::counter!("association_replacements_total", "kind" => kind).increment(1);

    // No-op outside an HTTP request span
    let span = Span::current();
    span.record("replace.linked", outcome.linked.len());
    span.record("replace.detached", outcome.detached.len());
    span.record("replace.ignored", outcome.ignored.len());

    if !outcome.ignored.is_empty() {
        debug!(kind, owner_id, ignored = ?outcome.ignored, "Skipped unknown ids");
    }

    info!(
        kind,
        owner_id,
        linked = outcome.linked.len(),
        attached = outcome.attached.len(),
        detached = outcome.detached.len(),
        ignored = outcome.ignored.len(),
        "Replaced association set"
    );
}
