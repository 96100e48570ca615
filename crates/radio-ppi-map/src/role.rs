use bitflags::bitflags;

use crate::family;
use crate::ids::{EguInstance, PpiChannel, PpiGroup, RtcInstance};

bitflags! {
    /// Driver features that decide which roles consume hardware resources.
    ///
    /// Evaluated exactly once, when the map is finalized, so the derived
    /// usage masks are reproducible for a given feature set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct Features: u8 {
        /// Hardware-assisted frame timestamping.
        const FRAME_TIMESTAMPING = 1 << 0;
        /// Debug tracing module; its channel reservations are raw mask
        /// fragments, not roles.
        const DEBUG_TRACE = 1 << 1;
        /// Reception without BCC matching, synchronized via the RADIO SYNC
        /// event.
        const DISABLE_BCC_MATCHING = 1 << 2;
    }
}

/// Channel-class synchronization roles of the radio driver.
///
/// Each role is one event-to-task connection the driver wires up. The
/// assignment table lives in the family module; only the activity predicate
/// and the sequenced-reuse annotations live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelRole {
    /// Ramp-up triggering event to the EGU task, armed on an RX/TX request.
    RampUpTrigger,
    /// RADIO DISABLED event to the EGU task.
    DisabledToEgu,
    /// EGU event to the RADIO TXEN or RXEN task.
    EguToRampUp,
    /// EGU event to the TIMER START task.
    EguToTimerStart,
    /// RADIO CRCERROR event to the TIMER CLEAR task.
    CrcErrorToTimerClear,
    /// RADIO CCAIDLE event to the GPIOTE tasks driving the front-end module.
    CcaIdleToFemGpiote,
    /// TIMER COMPARE event to the RADIO TXEN task.
    TimerCompareToTxEn,
    /// RADIO CRCOK event to the task disabling the core PPI group.
    CrcOkToGroupDisable,
    /// RADIO SYNC event to the EGU SYNC task.
    RadioSyncToEguSync,
    /// LP timer COMPARE event to the HP timer CAPTURE task.
    RtcCompareToTimerCapture,
    /// Collaborator-provided event to the HP timer CAPTURE task.
    TimestampEventToTimerCapture,
}

impl ChannelRole {
    pub const COUNT: usize = 11;

    /// Every channel role, in declaration order.
    pub const ALL: [ChannelRole; Self::COUNT] = [
        ChannelRole::RampUpTrigger,
        ChannelRole::DisabledToEgu,
        ChannelRole::EguToRampUp,
        ChannelRole::EguToTimerStart,
        ChannelRole::CrcErrorToTimerClear,
        ChannelRole::CcaIdleToFemGpiote,
        ChannelRole::TimerCompareToTxEn,
        ChannelRole::CrcOkToGroupDisable,
        ChannelRole::RadioSyncToEguSync,
        ChannelRole::RtcCompareToTimerCapture,
        ChannelRole::TimestampEventToTimerCapture,
    ];

    /// Hardware-family default channel for this role.
    pub const fn default_channel(self) -> PpiChannel {
        PpiChannel::new(family::default_channel(self))
    }

    /// Whether this role consumes its channel under the given feature set.
    pub const fn is_active(self, features: Features) -> bool {
        match self {
            ChannelRole::RadioSyncToEguSync => {
                features.contains(Features::DISABLE_BCC_MATCHING)
            }
            ChannelRole::RtcCompareToTimerCapture
            | ChannelRole::TimestampEventToTimerCapture => {
                features.contains(Features::FRAME_TIMESTAMPING)
            }
            _ => true,
        }
    }

    /// Roles allowed to alias this role's channel.
    ///
    /// Aliasing is safe only because the uses are temporally disjoint and the
    /// channel is reconfigured between them:
    ///
    /// - `RampUpTrigger` / `DisabledToEgu`: an RX/TX request configures the
    ///   channel for ramp-up triggering; the RADIO READY interrupt rewires it
    ///   to DISABLED->EGU before the second use can fire.
    /// - `CrcErrorToTimerClear` / `CcaIdleToFemGpiote` /
    ///   `TimerCompareToTxEn`: the radio core wires at most one of the three
    ///   per operation phase.
    pub const fn sequenced_partners(self) -> &'static [ChannelRole] {
        match self {
            ChannelRole::RampUpTrigger => &[ChannelRole::DisabledToEgu],
            ChannelRole::DisabledToEgu => &[ChannelRole::RampUpTrigger],
            ChannelRole::CrcErrorToTimerClear => {
                &[ChannelRole::CcaIdleToFemGpiote, ChannelRole::TimerCompareToTxEn]
            }
            ChannelRole::CcaIdleToFemGpiote => {
                &[ChannelRole::CrcErrorToTimerClear, ChannelRole::TimerCompareToTxEn]
            }
            ChannelRole::TimerCompareToTxEn => {
                &[ChannelRole::CrcErrorToTimerClear, ChannelRole::CcaIdleToFemGpiote]
            }
            _ => &[],
        }
    }

    pub(crate) const fn shares_by_design(self, other: ChannelRole) -> bool {
        let partners = self.sequenced_partners();
        let mut i = 0;
        while i < partners.len() {
            if partners[i] as u8 == other as u8 {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Stable diagnostic name.
    pub const fn name(self) -> &'static str {
        match self {
            ChannelRole::RampUpTrigger => "RampUpTrigger",
            ChannelRole::DisabledToEgu => "DisabledToEgu",
            ChannelRole::EguToRampUp => "EguToRampUp",
            ChannelRole::EguToTimerStart => "EguToTimerStart",
            ChannelRole::CrcErrorToTimerClear => "CrcErrorToTimerClear",
            ChannelRole::CcaIdleToFemGpiote => "CcaIdleToFemGpiote",
            ChannelRole::TimerCompareToTxEn => "TimerCompareToTxEn",
            ChannelRole::CrcOkToGroupDisable => "CrcOkToGroupDisable",
            ChannelRole::RadioSyncToEguSync => "RadioSyncToEguSync",
            ChannelRole::RtcCompareToTimerCapture => "RtcCompareToTimerCapture",
            ChannelRole::TimestampEventToTimerCapture => {
                "TimestampEventToTimerCapture"
            }
        }
    }
}

/// Channel-group-class roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GroupRole {
    /// Group collecting the self-disabling PPIs of the radio core.
    Core,
    /// Group breaking the front-end module connections on abort.
    Abort,
}

impl GroupRole {
    pub const COUNT: usize = 2;

    pub const ALL: [GroupRole; Self::COUNT] = [GroupRole::Core, GroupRole::Abort];

    /// Hardware-family default group for this role.
    pub const fn default_group(self) -> PpiGroup {
        PpiGroup::new(family::default_group(self))
    }

    /// Stable diagnostic name.
    pub const fn name(self) -> &'static str {
        match self {
            GroupRole::Core => "Core",
            GroupRole::Abort => "Abort",
        }
    }
}

/// EGU-instance-class roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EguRole {
    /// Instance synchronizing the PPI wiring; also carries SWI requests and
    /// notifications, so the consumer owns the matching SWIn_EGUn interrupt.
    RadioSync,
}

impl EguRole {
    /// Hardware-family default EGU instance for this role.
    pub const fn default_instance(self) -> EguInstance {
        match self {
            EguRole::RadioSync => EguInstance::new(family::DEFAULT_EGU_INSTANCE),
        }
    }

    /// Stable diagnostic name.
    pub const fn name(self) -> &'static str {
        match self {
            EguRole::RadioSync => "RadioSync",
        }
    }
}

/// RTC-instance-class roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RtcRole {
    /// Instance backing the standalone low-power timer.
    LpTimer,
}

impl RtcRole {
    /// Hardware-family default RTC instance for this role.
    pub const fn default_instance(self) -> RtcInstance {
        match self {
            RtcRole::LpTimer => RtcInstance::new(family::DEFAULT_RTC_INSTANCE),
        }
    }

    /// Stable diagnostic name.
    pub const fn name(self) -> &'static str {
        match self {
            RtcRole::LpTimer => "LpTimer",
        }
    }
}
