//! Admission — may a proposed offer be persisted?

use crate::{
  Error, Result,
  offer::{NewOffer, Offer},
};

/// Decide whether `proposed` may be admitted given `offers`, the existing
/// records for the same item.
///
/// Only entries whose status is in force count: a record already resolved to
/// `Expired` or `Cancelled` never blocks a new offer. Callers resolve
/// statuses first (see [`crate::lifecycle`]); stored statuses may be stale.
/// Overlap uses closed-interval semantics, so two windows that merely touch
/// at a bound conflict; any number of pairwise-disjoint offers per item is
/// legal.
///
/// Queried, never mutates. Persisting on `Ok` is the caller's job, under the
/// per-item serialization the engine provides.
pub fn admit(proposed: &NewOffer, offers: &[Offer]) -> Result<()> {
  let conflict = offers
    .iter()
    .filter(|existing| existing.status.is_in_force())
    .any(|existing| existing.window.overlaps(&proposed.window));

  if conflict {
    return Err(Error::ExistingActiveOffer {
      item_id: proposed.item_id,
    });
  }
  Ok(())
}
