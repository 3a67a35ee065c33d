//! [`Command`] definition.

pub mod open_booking;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::open_booking::OpenBooking;
