//! Filters over loaded fuel events.
//!
//! Every filter is a pure function of a slice: it never touches the store and
//! keeps the input order. Filters look at disjoint fields, so they can be
//! applied in any order and applying one twice changes nothing.

use std::{collections::BTreeSet, fmt, str::FromStr};

use chrono::NaiveDate;
use serde::Serialize;

use crate::{FuelEvent, Responsible, YearMonth};

/// A dashboard selector value: everything, or one specific value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> Selection<T> {
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Selection<&T> {
        match self {
            Self::All => Selection::All,
            Self::Only(value) => Selection::Only(value),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    /// `"All"` (any case) selects everything, anything else is parsed as `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        T::from_str(s.trim()).map(Self::Only)
    }
}

pub fn filter_by_month(events: &[FuelEvent], month: Selection<&YearMonth>) -> Vec<FuelEvent> {
    match month {
        Selection::All => events.to_vec(),
        Selection::Only(month) => events
            .iter()
            .filter(|event| event.month() == *month)
            .cloned()
            .collect(),
    }
}

pub fn filter_by_responsible(
    events: &[FuelEvent],
    responsible: Selection<&Responsible>,
) -> Vec<FuelEvent> {
    match responsible {
        Selection::All => events.to_vec(),
        Selection::Only(responsible) => events
            .iter()
            .filter(|event| event.vehicle.responsible == *responsible)
            .cloned()
            .collect(),
    }
}

/// Matches on the vehicle name captured by each event.
pub fn filter_by_vehicle(events: &[FuelEvent], vehicle: Selection<&str>) -> Vec<FuelEvent> {
    match vehicle {
        Selection::All => events.to_vec(),
        Selection::Only(name) => events
            .iter()
            .filter(|event| event.vehicle.name == name)
            .cloned()
            .collect(),
    }
}

/// Events dated within `[start, end]`, both ends inclusive.
///
/// An inverted range (`start > end`) selects nothing.
pub fn filter_by_date_range(events: &[FuelEvent], start: NaiveDate, end: NaiveDate) -> Vec<FuelEvent> {
    if start > end {
        return Vec::new();
    }
    events
        .iter()
        .filter(|event| (start..=end).contains(&event.date))
        .cloned()
        .collect()
}

/// The three dashboard selectors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardFilter {
    pub month: Selection<YearMonth>,
    pub responsible: Selection<Responsible>,
    pub vehicle: Selection<String>,
}

impl DashboardFilter {
    #[must_use]
    pub fn month(mut self, month: YearMonth) -> Self {
        self.month = Selection::Only(month);
        self
    }

    #[must_use]
    pub fn responsible(mut self, responsible: Responsible) -> Self {
        self.responsible = Selection::Only(responsible);
        self
    }

    #[must_use]
    pub fn vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle = Selection::Only(vehicle.into());
        self
    }

    /// Applies month, responsible and vehicle filters.
    #[must_use]
    pub fn apply(&self, events: &[FuelEvent]) -> Vec<FuelEvent> {
        let events = filter_by_month(events, self.month.as_ref());
        let events = filter_by_responsible(&events, self.responsible.as_ref());
        let vehicle = match &self.vehicle {
            Selection::All => Selection::All,
            Selection::Only(name) => Selection::Only(name.as_str()),
        };
        filter_by_vehicle(&events, vehicle)
    }
}

/// Values present in the data, offered as dashboard selector choices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub months: Vec<YearMonth>,
    pub responsibles: Vec<Responsible>,
    pub vehicles: Vec<String>,
}

impl FilterOptions {
    /// De-duplicated choices. Months ascend; responsibles and vehicles are
    /// sorted alphabetically by their displayed label.
    #[must_use]
    pub fn from_events(events: &[FuelEvent]) -> Self {
        let months: BTreeSet<YearMonth> = events.iter().map(FuelEvent::month).collect();
        let responsibles: BTreeSet<Responsible> =
            events.iter().map(|event| event.vehicle.responsible).collect();
        let vehicles: BTreeSet<&str> = events.iter().map(|event| event.vehicle.name.as_str()).collect();

        let mut responsibles: Vec<Responsible> = responsibles.into_iter().collect();
        responsibles.sort_by_key(|responsible| responsible.label());

        Self {
            months: months.into_iter().collect(),
            responsibles,
            vehicles: vehicles.into_iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FuelType, testing::event};

    fn sample() -> Vec<FuelEvent> {
        vec![
            event(1, "2024-01-15", "Strada", Responsible::Store, FuelType::Gasoline, 100_00, 20_000),
            event(2, "2024-02-03", "Hilux", Responsible::Workshop, FuelType::Diesel, 250_00, 40_000),
            event(3, "2024-02-20", "Strada", Responsible::Store, FuelType::Ethanol, 50_00, 12_000),
            event(4, "2024-03-01", "Toro", Responsible::TestDrive, FuelType::DieselS10, 180_00, 30_000),
            event(5, "2024-03-10", "Hilux", Responsible::Workshop, FuelType::Diesel, 300_00, 50_000),
        ]
    }

    fn ids(events: &[FuelEvent]) -> Vec<i32> {
        events.iter().map(|e| e.id).collect()
    }

    #[test]
    fn all_is_identity() {
        let events = sample();
        assert_eq!(filter_by_month(&events, Selection::All), events);
        assert_eq!(filter_by_responsible(&events, Selection::All), events);
        assert_eq!(filter_by_vehicle(&events, Selection::All), events);
        assert_eq!(DashboardFilter::default().apply(&events), events);
    }

    #[test]
    fn month_filter_uses_year_month_key() {
        let feb = YearMonth::new(2024, 2).unwrap();
        assert_eq!(ids(&filter_by_month(&sample(), Selection::Only(&feb))), vec![2, 3]);
    }

    #[test]
    fn responsible_and_vehicle_filters() {
        let events = sample();
        assert_eq!(
            ids(&filter_by_responsible(&events, Selection::Only(&Responsible::Workshop))),
            vec![2, 5]
        );
        assert_eq!(ids(&filter_by_vehicle(&events, Selection::Only("Strada"))), vec![1, 3]);
        assert!(filter_by_vehicle(&events, Selection::Only("Uno")).is_empty());
    }

    #[test]
    fn date_range_is_inclusive() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(ids(&filter_by_date_range(&sample(), start, end)), vec![2, 3, 4]);
    }

    #[test]
    fn inverted_date_range_is_empty() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(filter_by_date_range(&sample(), start, end).is_empty());
    }

    #[test]
    fn filters_are_idempotent() {
        let events = sample();
        let once = filter_by_vehicle(&events, Selection::Only("Hilux"));
        let twice = filter_by_vehicle(&once, Selection::Only("Hilux"));
        assert_eq!(once, twice);
    }

    #[test]
    fn filters_commute() {
        let events = sample();
        let feb = YearMonth::new(2024, 2).unwrap();
        for name in ["Strada", "Hilux", "Toro"] {
            let month_first = filter_by_vehicle(
                &filter_by_month(&events, Selection::Only(&feb)),
                Selection::Only(name),
            );
            let vehicle_first = filter_by_month(
                &filter_by_vehicle(&events, Selection::Only(name)),
                Selection::Only(&feb),
            );
            assert_eq!(month_first, vehicle_first);
        }
    }

    #[test]
    fn dashboard_filter_combines_selectors() {
        let filter = DashboardFilter::default()
            .month(YearMonth::new(2024, 3).unwrap())
            .responsible(Responsible::Workshop);
        assert_eq!(ids(&filter.apply(&sample())), vec![5]);

        let filter = DashboardFilter::default().vehicle("Strada").responsible(Responsible::Workshop);
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn selection_parses_all() {
        assert_eq!("All".parse::<Selection<YearMonth>>().unwrap(), Selection::All);
        assert_eq!("all".parse::<Selection<String>>().unwrap(), Selection::All);
        assert_eq!(
            "2024-02".parse::<Selection<YearMonth>>().unwrap(),
            Selection::Only(YearMonth::new(2024, 2).unwrap())
        );
        assert!("Feb".parse::<Selection<YearMonth>>().is_err());
    }

    #[test]
    fn options_are_sorted_and_unique() {
        let options = FilterOptions::from_events(&sample());
        let months: Vec<String> = options.months.iter().map(ToString::to_string).collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(
            options.responsibles,
            vec![Responsible::Store, Responsible::TestDrive, Responsible::Workshop]
        );
        let everyone: Vec<FuelEvent> = Responsible::ALL
            .into_iter()
            .zip(1..)
            .map(|(responsible, id)| {
                event(id, "2024-01-01", "Strada", responsible, FuelType::Gasoline, 10_00, 1_000)
            })
            .collect();
        let labels: Vec<&str> = FilterOptions::from_events(&everyone)
            .responsibles
            .into_iter()
            .map(Responsible::label)
            .collect();
        assert_eq!(labels, vec!["Other", "Store", "Test Drive", "Test Ride", "Workshop"]);
        assert_eq!(options.vehicles, vec!["Hilux", "Strada", "Toro"]);
        assert_eq!(FilterOptions::from_events(&[]), FilterOptions::default());
    }
}
