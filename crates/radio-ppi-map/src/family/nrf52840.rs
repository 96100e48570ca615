//! Resource assignment table for the nRF52840.

use crate::role::{ChannelRole, GroupRole};

/// Highest programmable PPI channel. Channels 20..=31 are pre-programmed and
/// not assignable here.
pub(crate) const PPI_CHANNEL_MAX: u8 = 19;
pub(crate) const PPI_GROUP_MAX: u8 = 5;
pub(crate) const EGU_INSTANCE_MAX: u8 = 5;
pub(crate) const RTC_INSTANCE_MAX: u8 = 2;

/// Default channel for each channel role.
///
/// Channel 6 is aliased by the ramp-up pair and channel 9 by the
/// abort/CCA/TX-enable trio; see
/// [`ChannelRole::sequenced_partners`](crate::ChannelRole::sequenced_partners).
pub(crate) const fn default_channel(role: ChannelRole) -> u8 {
    match role {
        ChannelRole::RampUpTrigger => 6,
        ChannelRole::DisabledToEgu => 6,
        ChannelRole::EguToRampUp => 7,
        ChannelRole::EguToTimerStart => 8,
        ChannelRole::CrcErrorToTimerClear => 9,
        ChannelRole::CcaIdleToFemGpiote => 9,
        ChannelRole::TimerCompareToTxEn => 9,
        ChannelRole::CrcOkToGroupDisable => 10,
        ChannelRole::RadioSyncToEguSync => 11,
        ChannelRole::RtcCompareToTimerCapture => 13,
        ChannelRole::TimestampEventToTimerCapture => 14,
    }
}

pub(crate) const fn default_group(role: GroupRole) -> u8 {
    match role {
        GroupRole::Core => 0,
        GroupRole::Abort => 1,
    }
}

/// EGU instance synchronizing the PPIs and carrying SWI requests and
/// notifications.
pub(crate) const DEFAULT_EGU_INSTANCE: u8 = 3;

/// RTC instance used by the standalone low-power timer.
pub(crate) const DEFAULT_RTC_INSTANCE: u8 = 2;
