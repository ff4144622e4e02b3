//! The Chaffer operation layer.
//!
//! [`OfferEngine`] wraps any [`chaffer_core::store::OfferStore`] and exposes
//! the four offer operations: create (with admission), get, list, and cancel.
//! Transport, auth, and durability concerns are the caller's responsibility.
//!
//! Every operation takes an optional `as_of` instant, defaulting to now.
//! Stored statuses are resolved at `as_of` on every path before anything is
//! returned or decided, and a changed status is written back immediately, so
//! storage can lag the clock between writes but an observer never sees the
//! stale value.

pub mod error;

mod locks;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use chaffer_core::{
  admission, lifecycle,
  lifecycle::OfferStatus,
  offer::{NewOffer, Offer},
  store::OfferStore,
};

use crate::locks::ItemLocks;

pub use error::{Error, Result};

/// The offer lifecycle & admission engine over a store backend `S`.
pub struct OfferEngine<S> {
  store: Arc<S>,
  locks: ItemLocks,
}

impl<S> OfferEngine<S>
where
  S: OfferStore,
{
  pub fn new(store: Arc<S>) -> Self {
    Self {
      store,
      locks: ItemLocks::new(),
    }
  }

  /// Create a new offer for an item.
  ///
  /// The window is validated, then admission runs against the item's
  /// `Created` and `Active` records with their statuses resolved at `as_of`,
  /// so a record whose window already elapsed never blocks. The whole
  /// read-decide-write sequence holds the item's lock; at most one creation
  /// per item is in flight at a time.
  pub async fn create_offer(
    &self,
    input: NewOffer,
    as_of: Option<DateTime<Utc>>,
  ) -> Result<Offer> {
    let at = as_of.unwrap_or_else(Utc::now);
    input.window.validate()?;

    let _guard = self.locks.acquire(input.item_id).await;

    let mut existing = Vec::new();
    for status in [OfferStatus::Created, OfferStatus::Active] {
      let batch = self
        .store
        .list_by_item_and_status(input.item_id, status)
        .await
        .map_err(|e| Error::Store(Box::new(e)))?;
      existing.extend(batch);
    }

    let mut in_force = Vec::with_capacity(existing.len());
    for offer in existing {
      in_force.push(self.refresh(offer, at).await?);
    }
    admission::admit(&input, &in_force)?;

    let offer = self
      .store
      .insert(input)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    tracing::info!(
      offer_id = %offer.offer_id,
      item_id = %offer.item_id,
      "offer created"
    );
    Ok(offer)
  }

  /// Fetch one offer with its status resolved at `as_of`.
  pub async fn get_offer(
    &self,
    id: Uuid,
    as_of: Option<DateTime<Utc>>,
  ) -> Result<Offer> {
    let at = as_of.unwrap_or_else(Utc::now);
    let offer = self
      .store
      .get(id)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?
      .ok_or(Error::NotFound(id))?;
    self.refresh(offer, at).await
  }

  /// List every offer, each resolved at `as_of`.
  pub async fn list_offers(
    &self,
    as_of: Option<DateTime<Utc>>,
  ) -> Result<Vec<Offer>> {
    let at = as_of.unwrap_or_else(Utc::now);
    let offers = self
      .store
      .list_all()
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;

    let mut resolved = Vec::with_capacity(offers.len());
    for offer in offers {
      resolved.push(self.refresh(offer, at).await?);
    }
    Ok(resolved)
  }

  /// Cancel an offer.
  ///
  /// The record is refreshed first, so a stale `Created` whose window already
  /// elapsed is persisted as `Expired` even though the cancellation is then
  /// rejected with that resolved status. A successful cancellation stamps
  /// `cancelled_at = as_of` and is terminal.
  pub async fn cancel_offer(
    &self,
    id: Uuid,
    as_of: Option<DateTime<Utc>>,
  ) -> Result<Offer> {
    let at = as_of.unwrap_or_else(Utc::now);
    let offer = self
      .store
      .get(id)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?
      .ok_or(Error::NotFound(id))?;

    let offer = self.refresh(offer, at).await?;
    let cancelled = match lifecycle::cancel(offer, at) {
      Ok(offer) => offer,
      Err(e) => {
        tracing::debug!(offer_id = %id, "cancellation rejected");
        return Err(e.into());
      }
    };

    let saved = self
      .store
      .update(cancelled)
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
    tracing::info!(offer_id = %saved.offer_id, "offer cancelled");
    Ok(saved)
  }

  /// Resolve `offer` at `at`, persisting the new status when it changed.
  async fn refresh(&self, offer: Offer, at: DateTime<Utc>) -> Result<Offer> {
    let resolution = lifecycle::resolve(offer, at);
    if !resolution.changed {
      return Ok(resolution.offer);
    }
    tracing::debug!(
      offer_id = %resolution.offer.offer_id,
      status = %resolution.offer.status,
      "status refreshed"
    );
    self
      .store
      .update(resolution.offer)
      .await
      .map_err(|e| Error::Store(Box::new(e)))
  }
}
