use crate::family;

/// Classes of shared synchronization resources covered by the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceClass {
    /// Programmable PPI channels.
    PpiChannel,
    /// PPI channel groups.
    PpiGroup,
    /// EGU (software event generator) instances.
    EguInstance,
    /// RTC instances.
    RtcInstance,
}

impl ResourceClass {
    /// Lowest valid hardware identifier for this class.
    pub const fn min_id(self) -> u8 {
        0
    }

    /// Highest valid hardware identifier for this class on the selected
    /// family.
    pub const fn max_id(self) -> u8 {
        match self {
            ResourceClass::PpiChannel => family::PPI_CHANNEL_MAX,
            ResourceClass::PpiGroup => family::PPI_GROUP_MAX,
            ResourceClass::EguInstance => family::EGU_INSTANCE_MAX,
            ResourceClass::RtcInstance => family::RTC_INSTANCE_MAX,
        }
    }

    /// Whether `id` names an existing resource of this class.
    pub const fn is_valid(self, id: u8) -> bool {
        id >= self.min_id() && id <= self.max_id()
    }
}

/// A programmable PPI channel number.
///
/// Identifiers are opaque hardware numbers, not indices: the map leaves gaps
/// in the channel space and that is expected. Range checking happens when the
/// map is finalized, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PpiChannel(u8);

impl PpiChannel {
    pub const fn new(n: u8) -> Self {
        Self(n)
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

/// A PPI channel group number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PpiGroup(u8);

impl PpiGroup {
    pub const fn new(n: u8) -> Self {
        Self(n)
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

/// An EGU instance number. EGUn shares its interrupt line with SWIn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EguInstance(u8);

impl EguInstance {
    pub const fn new(n: u8) -> Self {
        Self(n)
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}

/// An RTC instance number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RtcInstance(u8);

impl RtcInstance {
    pub const fn new(n: u8) -> Self {
        Self(n)
    }

    pub const fn number(self) -> u8 {
        self.0
    }
}
