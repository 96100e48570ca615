#![no_std]
//! Static PPI, EGU, and RTC resource map for an nRF52 IEEE 802.15.4 radio
//! driver.
//!
//! The radio core sequences TX/RX ramp-up, frame-reception abort, and frame
//! timestamping with PPI connections instead of interrupts, so a small fixed
//! pool of channels, channel groups, one EGU instance, and one RTC instance
//! has to be split among many wiring roles. Two roles may alias one channel
//! only when their uses are temporally disjoint and the channel is rewired in
//! between; every such pair carries an explicit sequenced-reuse annotation
//! and everything else sharing an identifier is a finalization error.
//!
//! The map is resolved exactly once: a [`MapBuilder`] collects board
//! overrides and collaborator reservations, [`MapBuilder::finalize`]
//! validates the result against the family limits and derives the per-class
//! usage masks, and the returned [`PeripheralMap`] is immutable from then on.

mod error;
mod family;
mod ids;
mod registry;
mod role;

pub use error::ConfigError;
pub use ids::{EguInstance, PpiChannel, PpiGroup, ResourceClass, RtcInstance};
pub use registry::{ExternalReservations, MapBuilder, PeripheralMap};
pub use role::{ChannelRole, EguRole, Features, GroupRole, RtcRole};
