//! [`MemoryStore`] — the in-memory implementation of [`OfferStore`].

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use chaffer_core::{
  lifecycle::OfferStatus,
  offer::{NewOffer, Offer},
  store::OfferStore,
};

use crate::{Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An offer store backed by a map in process memory.
///
/// Cloning is cheap — the inner map is reference-counted, so clones observe
/// the same offers.
#[derive(Clone, Default)]
pub struct MemoryStore {
  offers: Arc<RwLock<HashMap<Uuid, Offer>>>,
}

impl MemoryStore {
  /// Open an empty store.
  pub fn new() -> Self { Self::default() }
}

impl OfferStore for MemoryStore {
  type Error = Error;

  async fn get(&self, id: Uuid) -> Result<Option<Offer>> {
    let offers = self.offers.read().await;
    Ok(offers.get(&id).cloned())
  }

  async fn list_all(&self) -> Result<Vec<Offer>> {
    let offers = self.offers.read().await;
    Ok(offers.values().cloned().collect())
  }

  async fn list_by_item_and_status(
    &self,
    item_id: Uuid,
    status: OfferStatus,
  ) -> Result<Vec<Offer>> {
    let offers = self.offers.read().await;
    Ok(
      offers
        .values()
        .filter(|o| o.item_id == item_id && o.status == status)
        .cloned()
        .collect(),
    )
  }

  async fn insert(&self, input: NewOffer) -> Result<Offer> {
    let offer = Offer {
      offer_id:     Uuid::new_v4(),
      item_id:      input.item_id,
      description:  input.description,
      price:        input.price,
      created_at:   Utc::now(),
      window:       input.window,
      status:       OfferStatus::Created,
      cancelled_at: None,
    };

    let mut offers = self.offers.write().await;
    offers.insert(offer.offer_id, offer.clone());
    Ok(offer)
  }

  async fn update(&self, offer: Offer) -> Result<Offer> {
    let mut offers = self.offers.write().await;
    if !offers.contains_key(&offer.offer_id) {
      return Err(Error::OfferNotFound(offer.offer_id));
    }
    offers.insert(offer.offer_id, offer.clone());
    Ok(offer)
  }
}
