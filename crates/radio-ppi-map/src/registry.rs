use heapless::Vec;

use crate::error::ConfigError;
use crate::ids::{EguInstance, PpiChannel, PpiGroup, ResourceClass, RtcInstance};
use crate::role::{ChannelRole, EguRole, Features, GroupRole, RtcRole};

/// Raw per-class mask fragments reserved by the debug tracing module.
///
/// These are not roles: the collaborator resolves its own identifiers and
/// hands over the finished masks. They are folded into the aggregate masks
/// only while [`Features::DEBUG_TRACE`] is enabled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExternalReservations {
    pub channels: u32,
    pub groups: u32,
    pub egu: u32,
}

/// Builder collecting board overrides before the map is finalized.
///
/// The family defaults cover the common case; an integration overrides a role
/// only when a board peripheral already claims its default identifier. Every
/// setter may be called any number of times up to [`finalize`], which consumes
/// the builder. Once a [`PeripheralMap`] exists, no further override can
/// reach it.
///
/// [`finalize`]: MapBuilder::finalize
#[derive(Debug)]
pub struct MapBuilder {
    channels: [Option<u8>; ChannelRole::COUNT],
    groups: [Option<u8>; GroupRole::COUNT],
    egu: Option<u8>,
    rtc: Option<u8>,
    external: ExternalReservations,
}

impl MapBuilder {
    pub const fn new() -> Self {
        Self {
            channels: [None; ChannelRole::COUNT],
            groups: [None; GroupRole::COUNT],
            egu: None,
            rtc: None,
            external: ExternalReservations { channels: 0, groups: 0, egu: 0 },
        }
    }

    /// Replaces the default channel for `role`.
    pub fn set_channel(&mut self, role: ChannelRole, channel: PpiChannel) {
        self.channels[role as usize] = Some(channel.number());
    }

    /// Replaces the default group for `role`.
    pub fn set_group(&mut self, role: GroupRole, group: PpiGroup) {
        self.groups[role as usize] = Some(group.number());
    }

    /// Replaces the default EGU instance for `role`.
    pub fn set_egu(&mut self, role: EguRole, instance: EguInstance) {
        match role {
            EguRole::RadioSync => self.egu = Some(instance.number()),
        }
    }

    /// Replaces the default RTC instance for `role`.
    pub fn set_rtc(&mut self, role: RtcRole, instance: RtcInstance) {
        match role {
            RtcRole::LpTimer => self.rtc = Some(instance.number()),
        }
    }

    /// Accumulates collaborator mask fragments. Repeated calls union.
    pub fn reserve_external(&mut self, external: ExternalReservations) {
        self.external.channels |= external.channels;
        self.external.groups |= external.groups;
        self.external.egu |= external.egu;
    }

    /// Resolves every role, validates the result against the family limits,
    /// and derives the per-class usage masks.
    ///
    /// Two roles may share a channel only when both carry a sequenced-reuse
    /// annotation for each other or when at most one of them is active under
    /// `features`; anything else is a [`ConfigError::Conflict`]. On any error
    /// no map is produced.
    pub fn finalize(self, features: Features) -> Result<PeripheralMap, ConfigError> {
        let mut channels = [0u8; ChannelRole::COUNT];
        for role in ChannelRole::ALL {
            let id = match self.channels[role as usize] {
                Some(id) => id,
                None => role.default_channel().number(),
            };
            if !ResourceClass::PpiChannel.is_valid(id) {
                return Err(ConfigError::OutOfRange {
                    class: ResourceClass::PpiChannel,
                    role: role.name(),
                    id,
                });
            }
            channels[role as usize] = id;
        }

        let mut groups = [0u8; GroupRole::COUNT];
        for role in GroupRole::ALL {
            let id = match self.groups[role as usize] {
                Some(id) => id,
                None => role.default_group().number(),
            };
            if !ResourceClass::PpiGroup.is_valid(id) {
                return Err(ConfigError::OutOfRange {
                    class: ResourceClass::PpiGroup,
                    role: role.name(),
                    id,
                });
            }
            groups[role as usize] = id;
        }

        let egu = self
            .egu
            .unwrap_or(EguRole::RadioSync.default_instance().number());
        if !ResourceClass::EguInstance.is_valid(egu) {
            return Err(ConfigError::OutOfRange {
                class: ResourceClass::EguInstance,
                role: EguRole::RadioSync.name(),
                id: egu,
            });
        }

        let rtc = self
            .rtc
            .unwrap_or(RtcRole::LpTimer.default_instance().number());
        if !ResourceClass::RtcInstance.is_valid(rtc) {
            return Err(ConfigError::OutOfRange {
                class: ResourceClass::RtcInstance,
                role: RtcRole::LpTimer.name(),
                id: rtc,
            });
        }

        // Collision scan covers only the roles live under this feature set.
        // An inactive role keeps its assignment but consumes nothing.
        let mut live: Vec<(ChannelRole, u8), { ChannelRole::COUNT }> = Vec::new();
        for role in ChannelRole::ALL {
            if role.is_active(features) {
                let _ = live.push((role, channels[role as usize]));
            }
        }
        let live: &[(ChannelRole, u8)] = &live;
        for (i, &(first, id)) in live.iter().enumerate() {
            for &(second, other) in &live[i + 1..] {
                if id == other && !first.shares_by_design(second) {
                    return Err(ConfigError::Conflict {
                        class: ResourceClass::PpiChannel,
                        id,
                        first: first.name(),
                        second: second.name(),
                    });
                }
            }
        }

        // Both groups are always live and carry no reuse annotation.
        if groups[GroupRole::Core as usize] == groups[GroupRole::Abort as usize] {
            return Err(ConfigError::Conflict {
                class: ResourceClass::PpiGroup,
                id: groups[GroupRole::Core as usize],
                first: GroupRole::Core.name(),
                second: GroupRole::Abort.name(),
            });
        }

        let mut channels_used = 0u32;
        for &(_, id) in live.iter() {
            channels_used |= 1 << id;
        }
        let mut groups_used = (1u32 << groups[GroupRole::Core as usize])
            | (1 << groups[GroupRole::Abort as usize]);
        let mut egu_used = 1u32 << egu;
        if features.contains(Features::DEBUG_TRACE) {
            channels_used |= self.external.channels;
            groups_used |= self.external.groups;
            egu_used |= self.external.egu;
        }
        let rtc_used = 1u32 << rtc;

        Ok(PeripheralMap {
            features,
            channels,
            groups,
            egu,
            rtc,
            channels_used,
            groups_used,
            egu_used,
            rtc_used,
        })
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The finalized, immutable resource map.
///
/// Resolved once during bring-up and read everywhere afterwards, typically
/// parked in a `StaticCell` and passed around as `&'static PeripheralMap`.
/// Individual assignments feed the wiring code; the per-class usage masks
/// feed bulk enable/disable writes and let collaborators detect overlap with
/// resources they manage on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeripheralMap {
    features: Features,
    channels: [u8; ChannelRole::COUNT],
    groups: [u8; GroupRole::COUNT],
    egu: u8,
    rtc: u8,
    channels_used: u32,
    groups_used: u32,
    egu_used: u32,
    rtc_used: u32,
}

impl PeripheralMap {
    /// Channel resolved for `role`.
    ///
    /// The assignment exists even while the role's feature is disabled; only
    /// the usage masks depend on the feature set.
    pub const fn channel(&self, role: ChannelRole) -> PpiChannel {
        PpiChannel::new(self.channels[role as usize])
    }

    /// Group resolved for `role`.
    pub const fn group(&self, role: GroupRole) -> PpiGroup {
        PpiGroup::new(self.groups[role as usize])
    }

    /// EGU instance resolved for `role`.
    pub const fn egu_instance(&self, role: EguRole) -> EguInstance {
        match role {
            EguRole::RadioSync => EguInstance::new(self.egu),
        }
    }

    /// RTC instance resolved for `role`.
    pub const fn rtc_instance(&self, role: RtcRole) -> RtcInstance {
        match role {
            RtcRole::LpTimer => RtcInstance::new(self.rtc),
        }
    }

    /// Feature set the masks were derived for.
    pub const fn features(&self) -> Features {
        self.features
    }

    /// Whether `role` consumes its channel under the finalized feature set.
    pub const fn channel_is_active(&self, role: ChannelRole) -> bool {
        role.is_active(self.features)
    }

    /// Union of every PPI channel in use, for bulk enable/disable.
    pub const fn channels_used(&self) -> u32 {
        self.channels_used
    }

    /// Union of every PPI group in use.
    pub const fn groups_used(&self) -> u32 {
        self.groups_used
    }

    /// Union of every EGU instance in use.
    pub const fn egu_used(&self) -> u32 {
        self.egu_used
    }

    /// Union of every RTC instance in use.
    pub const fn rtc_used(&self) -> u32 {
        self.rtc_used
    }

    /// Usage mask for `class`.
    pub const fn used(&self, class: ResourceClass) -> u32 {
        match class {
            ResourceClass::PpiChannel => self.channels_used,
            ResourceClass::PpiGroup => self.groups_used,
            ResourceClass::EguInstance => self.egu_used,
            ResourceClass::RtcInstance => self.rtc_used,
        }
    }
}
