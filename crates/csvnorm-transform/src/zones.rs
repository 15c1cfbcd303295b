//! Time zone configuration.

use chrono_tz::Tz;
use tracing::debug;

use crate::error::ZoneError;

/// Zone in which input timestamps are read.
pub const SOURCE_ZONE: &str = "US/Pacific";

/// Zone in which output timestamps are rendered.
pub const TARGET_ZONE: &str = "US/Eastern";

/// Source and target zones for timestamp conversion.
///
/// Loaded once at startup and passed to the
/// [`Normalizer`](crate::Normalizer). Loading fails loudly instead of
/// falling back to a placeholder zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneConfig {
    pub source: Tz,
    pub target: Tz,
}

impl ZoneConfig {
    pub fn new(source: Tz, target: Tz) -> Self {
        Self { source, target }
    }

    /// Load both zones by IANA name.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::UnknownZone`] if either name is not in the time
    /// zone database.
    pub fn from_names(source: &str, target: &str) -> Result<Self, ZoneError> {
        let config = Self::new(load_zone(source)?, load_zone(target)?);
        debug!(
            source = config.source.name(),
            target = config.target.name(),
            "loaded time zones"
        );
        Ok(config)
    }

    /// Load [`SOURCE_ZONE`] and [`TARGET_ZONE`].
    pub fn load_default() -> Result<Self, ZoneError> {
        Self::from_names(SOURCE_ZONE, TARGET_ZONE)
    }
}

fn load_zone(name: &str) -> Result<Tz, ZoneError> {
    name.parse::<Tz>().map_err(|e| ZoneError::UnknownZone {
        name: name.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default() {
        let zones = ZoneConfig::load_default().unwrap();
        assert_eq!(zones.source, chrono_tz::US::Pacific);
        assert_eq!(zones.target, chrono_tz::US::Eastern);
    }

    #[test]
    fn test_unknown_zone() {
        let err = ZoneConfig::from_names("US/Pacific", "Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(
            &err,
            ZoneError::UnknownZone { name, .. } if name == "Mars/Olympus_Mons"
        ));
        assert!(err.to_string().starts_with("unknown time zone 'Mars/Olympus_Mons'"));
    }
}
