//! Error type for `chaffer-store-mem`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Attempted to update an offer that was never inserted.
  #[error("offer not found: {0}")]
  OfferNotFound(uuid::Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
