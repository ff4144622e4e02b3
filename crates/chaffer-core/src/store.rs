//! The `OfferStore` trait and the persistence boundary.
//!
//! The trait is implemented by storage backends (e.g. `chaffer-store-mem`).
//! The engine depends on this abstraction, not on any concrete backend. All
//! suspension and blocking in the system happens behind these methods; the
//! decision layer on top of them is pure.

use std::future::Future;

use uuid::Uuid;

use crate::{
  lifecycle::OfferStatus,
  offer::{NewOffer, Offer},
};

/// Abstraction over an offer store backend.
///
/// Stored statuses may be stale between writes; readers resolve them before
/// acting (see [`crate::lifecycle`]). All methods return `Send` futures so
/// the trait can be used in multi-threaded async runtimes.
pub trait OfferStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve an offer by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Offer>, Self::Error>> + Send + '_;

  /// List every stored offer, whatever its status.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Offer>, Self::Error>> + Send + '_;

  /// List the offers for one item whose *stored* status is `status`.
  fn list_by_item_and_status(
    &self,
    item_id: Uuid,
    status: OfferStatus,
  ) -> impl Future<Output = Result<Vec<Offer>, Self::Error>> + Send + '_;

  /// Persist a new offer. The store assigns `offer_id` and `created_at` and
  /// starts the record in `Created`.
  fn insert(
    &self,
    input: NewOffer,
  ) -> impl Future<Output = Result<Offer, Self::Error>> + Send + '_;

  /// Persist a status refresh or a cancellation for an existing offer.
  /// Returns an error if `offer.offer_id` is unknown.
  fn update(
    &self,
    offer: Offer,
  ) -> impl Future<Output = Result<Offer, Self::Error>> + Send + '_;
}
