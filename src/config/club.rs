//! Club policy configuration

use serde::Deserialize;

use crate::config::ValidationError;
use crate::domain::membership::EXPIRY_WARNING_DAYS;
use crate::domain::reminder::REMINDER_LEAD_DAYS;
use crate::ports::StatisticsWindows;

/// Operational policy knobs for the club.
#[derive(Debug, Clone, Deserialize)]
pub struct ClubConfig {
    /// How many days before a period ends the expiry reminder goes out.
    #[serde(default = "default_reminder_lead_days")]
    pub reminder_lead_days: u32,

    /// Window for the "expiring soon" dashboard count.
    #[serde(default = "default_expiring_soon_window_days")]
    pub expiring_soon_window_days: u32,

    /// Window for the "new memberships" dashboard count.
    #[serde(default = "default_new_membership_window_days")]
    pub new_membership_window_days: u32,
}

fn default_reminder_lead_days() -> u32 {
    REMINDER_LEAD_DAYS
}

fn default_expiring_soon_window_days() -> u32 {
    EXPIRY_WARNING_DAYS
}

fn default_new_membership_window_days() -> u32 {
    30
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self {
            reminder_lead_days: default_reminder_lead_days(),
            expiring_soon_window_days: default_expiring_soon_window_days(),
            new_membership_window_days: default_new_membership_window_days(),
        }
    }
}

impl ClubConfig {
    /// Validate the configured values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reminder_lead_days == 0 {
            return Err(ValidationError::InvalidReminderLead);
        }
        if self.expiring_soon_window_days == 0 || self.new_membership_window_days == 0 {
            return Err(ValidationError::InvalidStatisticsWindow);
        }
        Ok(())
    }

    /// The statistics windows these settings describe.
    pub fn statistics_windows(&self) -> StatisticsWindows {
        StatisticsWindows {
            expiring_soon_days: self.expiring_soon_window_days,
            new_membership_days: self.new_membership_window_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_domain_constants() {
        let config = ClubConfig::default();
        assert_eq!(config.reminder_lead_days, 7);
        assert_eq!(config.expiring_soon_window_days, 7);
        assert_eq!(config.new_membership_window_days, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_lead_days_fails_validation() {
        let config = ClubConfig {
            reminder_lead_days: 0,
            ..ClubConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidReminderLead)
        ));
    }

    #[test]
    fn zero_window_fails_validation() {
        let config = ClubConfig {
            expiring_soon_window_days: 0,
            ..ClubConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidStatisticsWindow)
        ));
    }

    #[test]
    fn statistics_windows_carry_configured_values() {
        let config = ClubConfig {
            reminder_lead_days: 5,
            expiring_soon_window_days: 10,
            new_membership_window_days: 14,
        };
        let windows = config.statistics_windows();
        assert_eq!(windows.expiring_soon_days, 10);
        assert_eq!(windows.new_membership_days, 14);
    }

    #[test]
    fn partial_deserialization_fills_defaults() {
        let json = r#"{ "reminder_lead_days": 3 }"#;
        let config: ClubConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.reminder_lead_days, 3);
        assert_eq!(config.expiring_soon_window_days, 7);
        assert_eq!(config.new_membership_window_days, 30);
    }
}
