//! Booking assistant wizard sequencing and carrier tariff lookup.
//!
//! The [`wizard`] module decides which step of the parcel booking assistant
//! is shown and where it goes next; [`tariffs`] loads carrier tariffs for the
//! transport company admin page.

pub mod config;
pub mod error;
pub mod messaging;
pub mod tariffs;
pub mod validation;
pub mod wizard;
