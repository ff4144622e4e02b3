//! Offer — a time-bounded discounted price for one catalogue item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{lifecycle, lifecycle::OfferStatus, window::OfferWindow};

/// A promotional price reduction attached to a catalogue item.
///
/// `status` is a cache of [`lifecycle::status_at`] at the last write; callers
/// observe it through resolution, never raw. There is no deletion; every
/// state change is a field update on the same identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
  /// Store-assigned on first persist; immutable thereafter.
  pub offer_id:     Uuid,
  /// The catalogue item the offer discounts.
  pub item_id:      Uuid,
  pub description:  Option<String>,
  /// Flat price in force during the window. No currency or sign checks are
  /// performed.
  pub price:        f64,
  /// Store-assigned on first persist; never updated.
  pub created_at:   DateTime<Utc>,
  pub window:       OfferWindow,
  pub status:       OfferStatus,
  /// Set on the transition into `Cancelled`; `None` otherwise.
  pub cancelled_at: Option<DateTime<Utc>>,
}

impl Offer {
  /// The status that should be observed at `at`.
  pub fn status_at(&self, at: DateTime<Utc>) -> OfferStatus {
    lifecycle::status_at(self.status, &self.window, at)
  }
}

/// The insert shape: everything the caller supplies. The store assigns
/// `offer_id` and `created_at` and starts the record in `Created`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOffer {
  pub item_id:     Uuid,
  pub description: Option<String>,
  pub price:       f64,
  pub window:      OfferWindow,
}

impl NewOffer {
  pub fn new(item_id: Uuid, price: f64, window: OfferWindow) -> Self {
    Self {
      item_id,
      description: None,
      price,
      window,
    }
  }
}
