//! Item carry use case.
//!
//! Keeps character-item links and carried bulk in step: every quantity
//! change moves the bulk total by `unit bulk * change`.

use std::sync::Arc;

use kingdom_domain::{
    BulkOutcome, CharacterId, CharacterItem, DomainError, Item, ItemId, QuantityChange,
};

use crate::infrastructure::locks::{CharacterGuard, CharacterLocks};
use crate::infrastructure::ports::{CharacterItemRepo, TemplateRepo};

use super::apply_bulk_delta::ApplyBulkDelta;
use super::error::ItemCarryError;
use super::types::ItemCarryResult;

/// Item carry use case.
///
/// Orchestrates: item lookup, link update, bulk delta. The bulk step runs
/// first; the link is only written once the bulk change is stored.
pub struct ItemCarry {
    templates: Arc<dyn TemplateRepo>,
    items: Arc<dyn CharacterItemRepo>,
    bulk: Arc<ApplyBulkDelta>,
    locks: Arc<CharacterLocks>,
}

impl ItemCarry {
    pub fn new(
        templates: Arc<dyn TemplateRepo>,
        items: Arc<dyn CharacterItemRepo>,
        bulk: Arc<ApplyBulkDelta>,
        locks: Arc<CharacterLocks>,
    ) -> Self {
        Self {
            templates,
            items,
            bulk,
            locks,
        }
    }

    /// Add `quantity` units on top of whatever the character already carries.
    pub async fn add_item(
        &self,
        character_id: CharacterId,
        item_id: ItemId,
        quantity: u32,
    ) -> Result<ItemCarryResult, ItemCarryError> {
        if quantity == 0 {
            return Err(ItemCarryError::InvalidQuantity);
        }
        let item = self.resolve_item(item_id).await?;

        let guard = self.locks.lock(character_id).await;
        let existing = self.items.get(character_id, item_id).await?;
        let current = existing.map(|l| l.quantity()).unwrap_or(0);
        let change =
            QuantityChange::add(current, quantity).ok_or(ItemCarryError::InvalidQuantity)?;

        self.apply_change(&guard, character_id, &item, existing, change)
            .await
    }

    /// Set the carried quantity outright. Zero drops the link.
    pub async fn set_item_quantity(
        &self,
        character_id: CharacterId,
        item_id: ItemId,
        quantity: u32,
    ) -> Result<ItemCarryResult, ItemCarryError> {
        let item = self.resolve_item(item_id).await?;

        let guard = self.locks.lock(character_id).await;
        let existing = self.items.get(character_id, item_id).await?;
        let current = existing.map(|l| l.quantity()).unwrap_or(0);
        let change = QuantityChange::new(current, quantity);

        self.apply_change(&guard, character_id, &item, existing, change)
            .await
    }

    /// Drop every unit of an item.
    pub async fn remove_item(
        &self,
        character_id: CharacterId,
        item_id: ItemId,
    ) -> Result<ItemCarryResult, ItemCarryError> {
        let item = self.resolve_item(item_id).await?;

        let guard = self.locks.lock(character_id).await;
        let existing = self
            .items
            .get(character_id, item_id)
            .await?
            .ok_or(ItemCarryError::ItemNotCarried {
                character_id,
                item_id,
            })?;
        let change = QuantityChange::remove_all(existing.quantity());

        self.apply_change(&guard, character_id, &item, Some(existing), change)
            .await
    }

    pub async fn list_items(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<CharacterItem>, ItemCarryError> {
        Ok(self.items.list_for_character(character_id).await?)
    }

    async fn resolve_item(&self, item_id: ItemId) -> Result<Item, ItemCarryError> {
        self.templates
            .get_item(item_id)
            .await?
            .ok_or(ItemCarryError::ItemNotFound(item_id))
    }

    async fn apply_change(
        &self,
        guard: &CharacterGuard,
        character_id: CharacterId,
        item: &Item,
        existing: Option<CharacterItem>,
        change: QuantityChange,
    ) -> Result<ItemCarryResult, ItemCarryError> {
        item.check_bulk()?;
        let delta = change.bulk_delta(item.bulk).ok_or_else(|| {
            DomainError::validation(format!(
                "Bulk overflow for {} x {}",
                change.after, item.name
            ))
        })?;

        let outcome = self
            .bulk
            .apply_locked(guard, character_id, delta)
            .await?;

        if let Err(e) = self.write_link(character_id, item.id, existing, change).await {
            // Put the bulk total back so it keeps matching the stored links.
            self.revert_bulk(guard, character_id, outcome, &e).await;
            return Err(e);
        }

        tracing::info!(
            character_id = %character_id,
            item_id = %item.id,
            before = change.before,
            after = change.after,
            bulk = %outcome.bulk,
            "Carried item quantity changed"
        );

        Ok(ItemCarryResult {
            item_id: item.id,
            quantity: change.after,
            bulk: outcome,
        })
    }

    async fn write_link(
        &self,
        character_id: CharacterId,
        item_id: ItemId,
        existing: Option<CharacterItem>,
        change: QuantityChange,
    ) -> Result<(), ItemCarryError> {
        if change.should_remove() {
            if existing.is_some() {
                self.items.delete(character_id, item_id).await?;
            }
            return Ok(());
        }
        if change.is_noop() {
            return Ok(());
        }

        let link = match existing {
            Some(mut link) => {
                link.set_quantity(change.after);
                link
            }
            None => CharacterItem::new(character_id, item_id, change.after)?,
        };
        self.items.save(&link).await?;
        Ok(())
    }

    async fn revert_bulk(
        &self,
        guard: &CharacterGuard,
        character_id: CharacterId,
        outcome: BulkOutcome,
        cause: &ItemCarryError,
    ) {
        let undo = outcome.previous - outcome.bulk;
        if let Err(revert_err) = self.bulk.apply_locked(guard, character_id, undo).await {
            tracing::error!(
                character_id = %character_id,
                error = %revert_err,
                cause = %cause,
                "Failed to restore bulk after item link write failed"
            );
        }
    }
}
