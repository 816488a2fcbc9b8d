//! Push schedule configuration.

use std::time::Duration;

use chrono::{FixedOffset, NaiveTime};
use serde::Deserialize;

use crate::domain::time::{offset_from_hours, taipei, DEFAULT_UTC_OFFSET_HOURS};
use crate::error::ConfigError;

/// When the scheduled jobs run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Local wall-clock times (`HH:MM`) of the daily push attempts.
    pub daily_times: Vec<String>,
    /// Seconds between change checks (default: 7200).
    pub change_check_interval_secs: u64,
    /// Fixed UTC offset, in hours, for all schedule and date math.
    pub utc_offset_hours: i32,
}

impl ScheduleConfig {
    /// Parsed daily times, sorted and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unparsable entry or an
    /// empty list.
    pub fn parsed_daily_times(&self) -> Result<Vec<NaiveTime>, ConfigError> {
        let mut times = self
            .daily_times
            .iter()
            .map(|raw| {
                NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|e| {
                    ConfigError::InvalidValue {
                        field: "schedule.daily_times",
                        reason: format!("'{raw}': {e}"),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if times.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "schedule.daily_times",
                reason: "must list at least one time".into(),
            });
        }

        times.sort_unstable();
        times.dedup();
        Ok(times)
    }

    /// The configured offset; validated configs always have one.
    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        offset_from_hours(self.utc_offset_hours).unwrap_or_else(taipei)
    }

    #[must_use]
    pub fn change_check_interval(&self) -> Duration {
        Duration::from_secs(self.change_check_interval_secs)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            daily_times: vec!["01:00".into(), "09:00".into(), "17:00".into()],
            change_check_interval_secs: 2 * 60 * 60,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_times_parse_in_order() {
        let times = ScheduleConfig::default().parsed_daily_times().unwrap();
        let rendered: Vec<_> = times.iter().map(|t| t.format("%H:%M").to_string()).collect();
        assert_eq!(rendered, vec!["01:00", "09:00", "17:00"]);
    }

    #[test]
    fn sorts_and_dedups_times() {
        let config = ScheduleConfig {
            daily_times: vec!["17:00".into(), "09:00".into(), "17:00".into()],
            ..Default::default()
        };
        assert_eq!(config.parsed_daily_times().unwrap().len(), 2);
    }

    #[test]
    fn rejects_bad_time() {
        let config = ScheduleConfig {
            daily_times: vec!["25:00".into()],
            ..Default::default()
        };
        assert!(matches!(
            config.parsed_daily_times(),
            Err(ConfigError::InvalidValue {
                field: "schedule.daily_times",
                ..
            })
        ));
    }

    #[test]
    fn default_offset_is_utc_plus_eight() {
        assert_eq!(ScheduleConfig::default().offset().local_minus_utc(), 8 * 3600);
        assert_eq!(
            ScheduleConfig::default().change_check_interval(),
            Duration::from_secs(7200)
        );
    }
}
