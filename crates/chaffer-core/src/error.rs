//! Error types for `chaffer-core`.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::lifecycle::OfferStatus;

#[derive(Debug, Error)]
pub enum Error {
  /// The proposed window is inverted. Rejected at the creation boundary;
  /// the resolver never sees one.
  #[error("offer window is inverted: start {start} is after end {end}")]
  WindowInverted {
    start: DateTime<Utc>,
    end:   DateTime<Utc>,
  },

  /// The proposed window overlaps an in-force offer for the same item.
  #[error("there is already an active offer for item {item_id}")]
  ExistingActiveOffer { item_id: Uuid },

  /// The target offer's resolved status is already terminal.
  #[error("cancellation is not allowed for offer {offer_id} with status {status}")]
  CancelNotAllowed {
    offer_id: Uuid,
    status:   OfferStatus,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
