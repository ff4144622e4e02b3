//! Engine error type.

use thiserror::Error;
use uuid::Uuid;

/// An error returned by an engine operation.
///
/// Every variant is a per-request outcome; nothing here is fatal to the
/// process, and nothing is retried internally.
#[derive(Debug, Error)]
pub enum Error {
  /// The requested offer id has no record.
  #[error("could not find offer {0}")]
  NotFound(Uuid),

  /// A domain-rule rejection: admission conflict, cancellation guard, or a
  /// malformed window.
  #[error(transparent)]
  Offer(#[from] chaffer_core::Error),

  /// The store backend failed.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
