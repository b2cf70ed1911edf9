//! Theme-of-the-day rotation and the session override.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use super::registry::{ThemeRecord, find_theme, list_themes, theme_index};

/// Zero-based ordinal day of the calendar year. 1 January is day 0.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal0()
}

/// The palette scheduled for a calendar date.
///
/// Depends on nothing but the date, so every call on the same day (and
/// every restart) yields the same palette.
pub fn daily_theme(date: NaiveDate) -> &'static ThemeRecord {
    let themes = list_themes();
    let index = day_of_year(date) as usize % themes.len();
    &themes[index]
}

/// The palette scheduled for the UTC calendar day containing `instant`.
pub fn daily_theme_at(instant: DateTime<Utc>) -> &'static ThemeRecord {
    daily_theme(instant.date_naive())
}

/// Resolve the palette to display.
///
/// Unknown override ids fall back to `daily` without surfacing an error.
pub fn active_theme(daily: &'static ThemeRecord, override_id: Option<&str>) -> &'static ThemeRecord {
    let Some(id) = override_id else {
        return daily;
    };
    find_theme(id).unwrap_or_else(|| {
        tracing::debug!(id, fallback = daily.id, "unknown theme override");
        daily
    })
}

/// Direction for stepping through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Next,
    Previous,
}

/// The user's palette choice for this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ThemeSelection {
    /// Follow the daily rotation.
    #[default]
    Daily,
    /// Hold a specific palette id until reset.
    Locked(String),
}

impl ThemeSelection {
    /// Lock the selection to `id`.
    pub fn pick(&mut self, id: impl Into<String>) {
        *self = Self::Locked(id.into());
    }

    /// Return to the daily rotation.
    pub fn reset(&mut self) {
        *self = Self::Daily;
    }

    pub fn override_id(&self) -> Option<&str> {
        match self {
            Self::Daily => None,
            Self::Locked(id) => Some(id),
        }
    }

    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }

    pub fn resolve(&self, daily: &'static ThemeRecord) -> &'static ThemeRecord {
        active_theme(daily, self.override_id())
    }

    /// Lock onto the registry neighbour of the currently active palette.
    pub fn cycle(&mut self, direction: Cycle, daily: &'static ThemeRecord) {
        let themes = list_themes();
        let current = theme_index(self.resolve(daily).id).unwrap_or(0);
        let next = match direction {
            Cycle::Next => (current + 1) % themes.len(),
            Cycle::Previous => (current + themes.len() - 1) % themes.len(),
        };
        self.pick(themes[next].id);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, TimeZone};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_of_year_starts_at_zero_on_january_first() {
        assert_eq!(day_of_year(date(2026, 1, 1)), 0);
        assert_eq!(day_of_year(date(2026, 1, 2)), 1);
        assert_eq!(day_of_year(date(2026, 12, 31)), 364);
        assert_eq!(day_of_year(date(2024, 12, 31)), 365);
    }

    #[test]
    fn test_daily_theme_on_january_first_is_first_theme() {
        for year in [1999, 2000, 2024, 2025, 2026, 2100] {
            assert_eq!(daily_theme(date(year, 1, 1)).id, list_themes()[0].id);
        }
    }

    #[test]
    fn test_daily_theme_rotates_through_registry() {
        let count = list_themes().len();
        for offset in 0..count {
            let day = date(2026, 1, 1) + chrono::Days::new(offset as u64);
            assert_eq!(daily_theme(day).id, list_themes()[offset].id);
        }
        let wrapped = date(2026, 1, 1) + chrono::Days::new(count as u64);
        assert_eq!(daily_theme(wrapped).id, list_themes()[0].id);
    }

    #[test]
    fn test_daily_theme_ignores_time_of_day() {
        let day = date(2026, 10, 18);
        let morning = Utc.from_utc_datetime(&day.and_time(NaiveTime::from_hms_opt(0, 0, 1).unwrap()));
        let night = Utc.from_utc_datetime(&day.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap()));
        assert_eq!(daily_theme_at(morning), daily_theme_at(night));
        assert_eq!(daily_theme_at(morning), daily_theme(day));
    }

    #[test]
    fn test_active_theme_without_override_is_daily() {
        let daily = daily_theme(date(2026, 3, 9));
        assert_eq!(active_theme(daily, None), daily);
    }

    #[test]
    fn test_active_theme_with_known_override() {
        let daily = daily_theme(date(2026, 1, 1));
        assert_eq!(active_theme(daily, Some("oxide-coral")).name, "Oxide Blue");
    }

    #[test]
    fn test_active_theme_unknown_override_degrades_to_daily() {
        let daily = daily_theme(date(2026, 5, 20));
        assert_eq!(active_theme(daily, Some("quantum-blue")), active_theme(daily, None));
        assert_eq!(active_theme(daily, Some("")), daily);
    }

    #[test]
    fn test_selection_pick_and_reset_transitions() {
        let daily = daily_theme(date(2026, 1, 1));
        let mut selection = ThemeSelection::default();
        assert!(!selection.is_locked());

        selection.pick("ion-sky");
        assert_eq!(selection.override_id(), Some("ion-sky"));
        assert_eq!(selection.resolve(daily).id, "ion-sky");

        selection.pick("circuit-mint");
        assert_eq!(selection.resolve(daily).id, "circuit-mint");

        selection.reset();
        assert_eq!(selection, ThemeSelection::Daily);
        assert_eq!(selection.resolve(daily), daily);
    }

    #[test]
    fn test_cycle_wraps_in_both_directions() {
        let themes = list_themes();
        let daily = &themes[0];
        let mut selection = ThemeSelection::Daily;

        selection.cycle(Cycle::Previous, daily);
        assert_eq!(selection.override_id(), Some(themes[themes.len() - 1].id));

        selection.cycle(Cycle::Next, daily);
        assert_eq!(selection.override_id(), Some(themes[0].id));
    }

    #[test]
    fn test_cycle_from_unknown_lock_starts_from_daily() {
        let themes = list_themes();
        let daily = &themes[2];
        let mut selection = ThemeSelection::Locked("missing".to_string());
        selection.cycle(Cycle::Next, daily);
        assert_eq!(selection.override_id(), Some(themes[3].id));
    }
}
