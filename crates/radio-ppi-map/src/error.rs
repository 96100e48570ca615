use crate::ids::ResourceClass;

/// Errors detected during the one-time finalization pass.
///
/// There is no variant for overriding after finalization:
/// [`MapBuilder::finalize`](crate::MapBuilder::finalize) consumes the builder,
/// so that mistake is rejected by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A resolved identifier lies outside the family's range for its class.
    OutOfRange {
        class: ResourceClass,
        role: &'static str,
        id: u8,
    },
    /// Two simultaneously active roles resolved to one identifier without a
    /// sequenced-reuse annotation.
    Conflict {
        class: ResourceClass,
        id: u8,
        first: &'static str,
        second: &'static str,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::OutOfRange { class, role, id } => {
                write!(f, "{:?} {} assigned to {} is out of range", class, id, role)
            }
            ConfigError::Conflict { class, id, first, second } => {
                write!(
                    f,
                    "{} and {} both resolved to {:?} {}",
                    first, second, class, id
                )
            }
        }
    }
}
