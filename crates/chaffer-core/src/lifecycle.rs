//! Status resolution — the offer lifecycle state machine.
//!
//! An offer's stored status is a cache, not ground truth. The status that
//! should be observed at an instant is recomputed from the stored status and
//! the applicability window on every read, and written back only when it
//! changed. `Cancelled` and `Expired` are sticky: once stored, no clock
//! reading moves an offer out of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, offer::Offer, window::OfferWindow};

// ─── Status ──────────────────────────────────────────────────────────────────

/// The lifecycle status of an offer.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE")]
pub enum OfferStatus {
  /// Persisted, start bound not yet reached.
  Created,
  /// Inside the applicability window and not cancelled.
  Active,
  /// Withdrawn by the user; terminal.
  Cancelled,
  /// End bound passed; terminal.
  Expired,
}

impl OfferStatus {
  /// An in-force offer blocks admission of overlapping offers for its item.
  pub fn is_in_force(&self) -> bool {
    matches!(self, Self::Created | Self::Active)
  }

  /// Terminal statuses are never re-derived.
  pub fn is_terminal(&self) -> bool {
    matches!(self, Self::Cancelled | Self::Expired)
  }
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// The status that should be observed at `at`, given the stored status.
///
/// In `Created`, "passed end" dominates "reached start": a window that fully
/// elapsed before ever being observed resolves straight to `Expired`, never
/// `Active`.
pub fn status_at(
  stored: OfferStatus,
  window: &OfferWindow,
  at: DateTime<Utc>,
) -> OfferStatus {
  if stored.is_terminal() {
    return stored;
  }
  if window.ended_before(at) {
    return OfferStatus::Expired;
  }
  if stored == OfferStatus::Created && window.starts_by(at) {
    return OfferStatus::Active;
  }
  stored
}

/// An offer together with whether resolution changed its stored status.
#[derive(Debug, Clone)]
pub struct Resolution {
  pub offer:   Offer,
  /// True when the resolved status differs from the stored one and the record
  /// should be written back.
  pub changed: bool,
}

/// Resolve `offer`'s status at `at`.
///
/// Idempotent: resolving an already-resolved offer at the same instant
/// reports no change.
pub fn resolve(mut offer: Offer, at: DateTime<Utc>) -> Resolution {
  let resolved = status_at(offer.status, &offer.window, at);
  let changed = resolved != offer.status;
  offer.status = resolved;
  Resolution { offer, changed }
}

// ─── Cancellation ────────────────────────────────────────────────────────────

/// Cancel `offer` at `at`.
///
/// The status is resolved first, so the guard sees what the clock says rather
/// than what storage last cached: an offer whose window has already elapsed
/// is rejected with the resolved `Expired` even if it was stored as
/// `Created`.
pub fn cancel(offer: Offer, at: DateTime<Utc>) -> Result<Offer> {
  let Resolution { mut offer, .. } = resolve(offer, at);
  if !offer.status.is_in_force() {
    return Err(Error::CancelNotAllowed {
      offer_id: offer.offer_id,
      status:   offer.status,
    });
  }
  offer.status = OfferStatus::Cancelled;
  offer.cancelled_at = Some(at);
  Ok(offer)
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;
  use uuid::Uuid;

  use super::*;

  fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, d, 0, 0, 0).unwrap()
  }

  fn offer(status: OfferStatus, start: u32, end: u32) -> Offer {
    Offer {
      offer_id:     Uuid::new_v4(),
      item_id:      Uuid::new_v4(),
      description:  None,
      price:        9.99,
      created_at:   day(1),
      window:       OfferWindow {
        start: day(start),
        end:   day(end),
      },
      status,
      cancelled_at: None,
    }
  }

  // ── status_at ──────────────────────────────────────────────────────────

  #[test]
  fn created_before_start_stays_created() {
    let o = offer(OfferStatus::Created, 5, 9);
    assert_eq!(o.status_at(day(3)), OfferStatus::Created);
  }

  #[test]
  fn created_activates_at_start_instant() {
    let o = offer(OfferStatus::Created, 5, 9);
    assert_eq!(o.status_at(day(5)), OfferStatus::Active);
  }

  #[test]
  fn created_inside_window_is_active() {
    let o = offer(OfferStatus::Created, 5, 9);
    assert_eq!(o.status_at(day(7)), OfferStatus::Active);
  }

  #[test]
  fn created_still_active_at_end_instant() {
    let o = offer(OfferStatus::Created, 5, 9);
    assert_eq!(o.status_at(day(9)), OfferStatus::Active);
  }

  #[test]
  fn created_expires_once_end_passed() {
    let o = offer(OfferStatus::Created, 5, 9);
    assert_eq!(o.status_at(day(10)), OfferStatus::Expired);
  }

  #[test]
  fn elapsed_window_expires_without_passing_through_active() {
    // Both triggers hold; "passed end" must win.
    let o = offer(OfferStatus::Created, 2, 3);
    assert_eq!(o.status_at(day(8)), OfferStatus::Expired);
  }

  #[test]
  fn active_inside_window_stays_active() {
    let o = offer(OfferStatus::Active, 2, 9);
    assert_eq!(o.status_at(day(5)), OfferStatus::Active);
  }

  #[test]
  fn active_expires_once_end_passed() {
    let o = offer(OfferStatus::Active, 2, 9);
    assert_eq!(o.status_at(day(10)), OfferStatus::Expired);
  }

  #[test]
  fn cancelled_is_sticky() {
    let o = offer(OfferStatus::Cancelled, 2, 9);
    assert_eq!(o.status_at(day(5)), OfferStatus::Cancelled);
    assert_eq!(o.status_at(day(12)), OfferStatus::Cancelled);
  }

  #[test]
  fn expired_is_sticky() {
    // Even if the clock is read back inside the window.
    let o = offer(OfferStatus::Expired, 2, 9);
    assert_eq!(o.status_at(day(5)), OfferStatus::Expired);
  }

  // ── resolve ────────────────────────────────────────────────────────────

  #[test]
  fn resolve_reports_change() {
    let r = resolve(offer(OfferStatus::Created, 2, 9), day(5));
    assert!(r.changed);
    assert_eq!(r.offer.status, OfferStatus::Active);
  }

  #[test]
  fn resolve_reports_no_change_when_status_holds() {
    let r = resolve(offer(OfferStatus::Created, 5, 9), day(3));
    assert!(!r.changed);
    assert_eq!(r.offer.status, OfferStatus::Created);
  }

  #[test]
  fn resolve_is_idempotent() {
    let once = resolve(offer(OfferStatus::Created, 2, 9), day(5));
    let twice = resolve(once.offer.clone(), day(5));
    assert!(!twice.changed);
    assert_eq!(twice.offer.status, once.offer.status);
  }

  // ── cancel ─────────────────────────────────────────────────────────────

  #[test]
  fn cancel_in_force_offer_stamps_cancelled_at() {
    let cancelled = cancel(offer(OfferStatus::Active, 2, 9), day(5)).unwrap();
    assert_eq!(cancelled.status, OfferStatus::Cancelled);
    assert_eq!(cancelled.cancelled_at, Some(day(5)));
  }

  #[test]
  fn cancel_before_start_is_allowed() {
    let cancelled = cancel(offer(OfferStatus::Created, 5, 9), day(3)).unwrap();
    assert_eq!(cancelled.status, OfferStatus::Cancelled);
    assert_eq!(cancelled.cancelled_at, Some(day(3)));
  }

  #[test]
  fn cancel_twice_is_rejected_with_cancelled() {
    let cancelled = cancel(offer(OfferStatus::Active, 2, 9), day(5)).unwrap();
    let err = cancel(cancelled, day(6)).unwrap_err();
    assert!(matches!(
      err,
      Error::CancelNotAllowed {
        status: OfferStatus::Cancelled,
        ..
      }
    ));
  }

  #[test]
  fn cancel_elapsed_offer_is_rejected_with_resolved_expired() {
    // Stored Created, window long gone: the guard must see Expired.
    let err = cancel(offer(OfferStatus::Created, 2, 3), day(8)).unwrap_err();
    assert!(matches!(
      err,
      Error::CancelNotAllowed {
        status: OfferStatus::Expired,
        ..
      }
    ));
  }

  // ── serde / display ────────────────────────────────────────────────────

  #[test]
  fn status_serde_tags_are_lowercase() {
    let json = serde_json::to_string(&OfferStatus::Cancelled).unwrap();
    assert_eq!(json, "\"cancelled\"");
  }

  #[test]
  fn status_display_is_uppercase() {
    assert_eq!(OfferStatus::Expired.to_string(), "EXPIRED");
  }
}
