//! The closed applicability interval of an offer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The closed date interval `[start, end]` during which an offer applies.
///
/// Both bounds are inclusive: an offer is applicable at its start instant and
/// still applicable at its end instant. `start <= end` is checked by
/// [`OfferWindow::new`] and re-checked at the engine's creation boundary; the
/// resolver assumes it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferWindow {
  pub start: DateTime<Utc>,
  pub end:   DateTime<Utc>,
}

impl OfferWindow {
  /// Build a window, rejecting `start > end`.
  pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
    let window = Self { start, end };
    window.validate()?;
    Ok(window)
  }

  /// Re-check the `start <= end` invariant on a hand-built value.
  pub fn validate(&self) -> Result<()> {
    if self.start > self.end {
      return Err(Error::WindowInverted {
        start: self.start,
        end:   self.end,
      });
    }
    Ok(())
  }

  /// True once `at` has reached or passed the start bound.
  pub fn starts_by(&self, at: DateTime<Utc>) -> bool { self.start <= at }

  /// True once `at` has passed the end bound.
  pub fn ended_before(&self, at: DateTime<Utc>) -> bool { self.end < at }

  /// Closed-interval overlap: the windows share at least one instant.
  pub fn overlaps(&self, other: &OfferWindow) -> bool {
    self.start <= other.end && other.start <= self.end
  }
}
