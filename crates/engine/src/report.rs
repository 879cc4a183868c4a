//! Aggregations over fuel events for the dashboard.
//!
//! All functions accept any slice, including an empty one: the dashboard is
//! shown before any data exists, so an empty input yields zero-valued
//! metrics and empty groupings.
//!
//! Values are kept exact. Rounding for display happens only through
//! [`round_for_display`], at the presentation boundary.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::{DashboardFilter, FilterOptions, FuelEvent, FuelType, Money, Volume, YearMonth};

pub fn total_amount(events: &[FuelEvent]) -> Money {
    events.iter().map(|event| event.amount).sum()
}

pub fn total_volume(events: &[FuelEvent]) -> Volume {
    events.iter().map(|event| event.volume).sum()
}

/// Price per liter over all events, `0` when no volume was recorded.
pub fn average_price_per_volume(events: &[FuelEvent]) -> Decimal {
    price_per_liter(total_amount(events), total_volume(events))
}

pub fn count(events: &[FuelEvent]) -> usize {
    events.len()
}

fn price_per_liter(amount: Money, volume: Volume) -> Decimal {
    if volume.is_zero() {
        return Decimal::ZERO;
    }
    amount
        .to_decimal()
        .checked_div(volume.to_liters())
        .unwrap_or(Decimal::ZERO)
}

/// Spend per month, iterated in ascending month order.
pub fn group_by_month(events: &[FuelEvent]) -> BTreeMap<YearMonth, Money> {
    let mut out = BTreeMap::new();
    for event in events {
        *out.entry(event.month()).or_insert(Money::ZERO) += event.amount;
    }
    out
}

pub fn group_by_fuel_type(events: &[FuelEvent]) -> BTreeMap<FuelType, Money> {
    let mut out = BTreeMap::new();
    for event in events {
        *out.entry(event.fuel_type).or_insert(Money::ZERO) += event.amount;
    }
    out
}

/// One slice of the fuel type composition view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FuelShare {
    pub fuel_type: FuelType,
    pub amount: Money,
    /// Percentage of the total spend, `0..=100`.
    pub share: Decimal,
}

/// Fuel type spend with its share of the total, largest first.
pub fn fuel_type_shares(events: &[FuelEvent]) -> Vec<FuelShare> {
    let total = total_amount(events).to_decimal();
    let mut shares: Vec<FuelShare> = group_by_fuel_type(events)
        .into_iter()
        .map(|(fuel_type, amount)| FuelShare {
            fuel_type,
            amount,
            share: if total.is_zero() {
                Decimal::ZERO
            } else {
                (amount.to_decimal() * Decimal::ONE_HUNDRED)
                    .checked_div(total)
                    .unwrap_or(Decimal::ZERO)
            },
        })
        .collect();
    shares.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.fuel_type.cmp(&b.fuel_type)));
    shares
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VehicleTotals {
    pub total_amount: Money,
    pub total_volume: Volume,
    pub average_price_per_volume: Decimal,
}

/// Totals per vehicle name, sorted by name.
pub fn group_by_vehicle(events: &[FuelEvent]) -> BTreeMap<String, VehicleTotals> {
    let mut out: BTreeMap<String, VehicleTotals> = BTreeMap::new();
    for event in events {
        let totals = out.entry(event.vehicle.name.clone()).or_default();
        totals.total_amount += event.amount;
        totals.total_volume += event.volume;
    }
    for totals in out.values_mut() {
        totals.average_price_per_volume = price_per_liter(totals.total_amount, totals.total_volume);
    }
    out
}

/// Round half-up (away from zero on a tie) to two decimal places.
///
/// The result always carries exactly two decimals, so `5` prints as `5.00`.
#[must_use]
pub fn round_for_display(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Top-level dashboard metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_amount: Money,
    pub total_volume: Volume,
    pub average_price_per_volume: Decimal,
    pub count: usize,
}

impl Summary {
    #[must_use]
    pub fn from_events(events: &[FuelEvent]) -> Self {
        Self {
            total_amount: total_amount(events),
            total_volume: total_volume(events),
            average_price_per_volume: average_price_per_volume(events),
            count: count(events),
        }
    }
}

/// Everything the dashboard renders for one filter selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub filter: DashboardFilter,
    /// Selector choices, computed over all events rather than the filtered set.
    pub options: FilterOptions,
    pub summary: Summary,
    pub by_month: BTreeMap<YearMonth, Money>,
    pub by_fuel_type: Vec<FuelShare>,
    pub by_vehicle: BTreeMap<String, VehicleTotals>,
}

impl Dashboard {
    #[must_use]
    pub fn build(events: &[FuelEvent], filter: &DashboardFilter) -> Self {
        let filtered = filter.apply(events);
        Self {
            filter: filter.clone(),
            options: FilterOptions::from_events(events),
            summary: Summary::from_events(&filtered),
            by_month: group_by_month(&filtered),
            by_fuel_type: fuel_type_shares(&filtered),
            by_vehicle: group_by_vehicle(&filtered),
        }
    }

    /// `true` when nothing was ever recorded, not merely filtered out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.months.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Responsible, testing::event};

    fn two_events() -> Vec<FuelEvent> {
        vec![
            event(1, "2024-03-01", "Strada", Responsible::Store, FuelType::Gasoline, 100_00, 20_000),
            event(2, "2024-03-05", "Strada", Responsible::Store, FuelType::Gasoline, 50_00, 10_000),
        ]
    }

    #[test]
    fn totals_and_average() {
        let events = two_events();
        assert_eq!(total_amount(&events), Money::new(150_00));
        assert_eq!(total_volume(&events), Volume::new(30_000));
        assert_eq!(average_price_per_volume(&events), Decimal::new(500, 2));
        assert_eq!(round_for_display(average_price_per_volume(&events)).to_string(), "5.00");
        assert_eq!(count(&events), 2);
    }

    #[test]
    fn empty_input_yields_zero_metrics() {
        let summary = Summary::from_events(&[]);
        assert_eq!(summary.total_amount, Money::ZERO);
        assert_eq!(summary.total_volume, Volume::ZERO);
        assert_eq!(summary.average_price_per_volume, Decimal::ZERO);
        assert_eq!(summary.count, 0);
        assert!(group_by_month(&[]).is_empty());
        assert!(group_by_fuel_type(&[]).is_empty());
        assert!(fuel_type_shares(&[]).is_empty());
        assert!(group_by_vehicle(&[]).is_empty());
    }

    #[test]
    fn huge_amounts_never_overflow_the_aggregates() {
        assert!("50000000000000000".parse::<Money>().is_err());

        let half = i64::MAX / 2 + 1;
        let events = vec![
            event(1, "2024-03-01", "Strada", Responsible::Store, FuelType::Diesel, half, half),
            event(2, "2024-03-02", "Strada", Responsible::Store, FuelType::Diesel, half, half),
        ];
        assert_eq!(total_amount(&events), Money::new(i64::MAX));
        assert_eq!(total_volume(&events), Volume::new(i64::MAX));
        assert_eq!(group_by_month(&events)[&YearMonth::new(2024, 3).unwrap()], Money::new(i64::MAX));
        assert_eq!(group_by_fuel_type(&events)[&FuelType::Diesel], Money::new(i64::MAX));
        assert_eq!(group_by_vehicle(&events)["Strada"].total_amount, Money::new(i64::MAX));
    }

    #[test]
    fn zero_volume_average_is_zero() {
        let events = vec![event(1, "2024-03-01", "Strada", Responsible::Store, FuelType::Ethanol, 10_00, 0)];
        assert_eq!(average_price_per_volume(&events), Decimal::ZERO);
        assert_eq!(group_by_vehicle(&events)["Strada"].average_price_per_volume, Decimal::ZERO);
    }

    #[test]
    fn average_is_exact_ratio() {
        let events = vec![
            event(1, "2024-03-01", "Strada", Responsible::Store, FuelType::Ethanol, 100_00, 30_000),
        ];
        let expected = Decimal::new(100_00, 2) / Decimal::new(30_000, 3);
        assert_eq!(average_price_per_volume(&events), expected);
        assert_eq!(round_for_display(expected).to_string(), "3.33");
    }

    #[test]
    fn month_keys_ascend() {
        let events = vec![
            event(1, "2024-03-01", "Strada", Responsible::Store, FuelType::Gasoline, 10_00, 1_000),
            event(2, "2023-12-24", "Strada", Responsible::Store, FuelType::Gasoline, 20_00, 1_000),
            event(3, "2024-01-10", "Hilux", Responsible::Workshop, FuelType::Diesel, 30_00, 1_000),
            event(4, "2024-03-20", "Hilux", Responsible::Workshop, FuelType::Diesel, 40_00, 1_000),
        ];
        let by_month = group_by_month(&events);
        let keys: Vec<YearMonth> = by_month.keys().copied().collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(by_month[&YearMonth::new(2024, 3).unwrap()], Money::new(50_00));
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn fuel_type_grouping_and_shares() {
        let events = vec![
            event(1, "2024-03-01", "Hilux", Responsible::Workshop, FuelType::Ethanol, 50_00, 10_000),
            event(2, "2024-03-02", "Hilux", Responsible::Workshop, FuelType::Diesel, 100_00, 20_000),
        ];
        let grouped = group_by_fuel_type(&events);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&FuelType::Diesel], Money::new(100_00));
        assert_eq!(grouped[&FuelType::Ethanol], Money::new(50_00));

        let shares = fuel_type_shares(&events);
        assert_eq!(shares[0].fuel_type, FuelType::Diesel);
        assert_eq!(round_for_display(shares[0].share).to_string(), "66.67");
        assert_eq!(round_for_display(shares[1].share).to_string(), "33.33");
    }

    #[test]
    fn vehicle_grouping_keeps_exact_values() {
        let events = vec![
            event(1, "2024-03-01", "Strada", Responsible::Store, FuelType::Gasoline, 100_00, 30_000),
            event(2, "2024-03-02", "Hilux", Responsible::Workshop, FuelType::Diesel, 300_00, 50_000),
            event(3, "2024-03-03", "Strada", Responsible::Store, FuelType::Gasoline, 20_00, 3_000),
        ];
        let grouped = group_by_vehicle(&events);
        let strada = &grouped["Strada"];
        assert_eq!(strada.total_amount, Money::new(120_00));
        assert_eq!(strada.total_volume, Volume::new(33_000));
        assert_eq!(strada.average_price_per_volume, Decimal::new(120_00, 2) / Decimal::new(33_000, 3));
        assert_eq!(grouped["Hilux"].average_price_per_volume, Decimal::new(6, 0));
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["Hilux", "Strada"]);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_for_display(Decimal::new(2345, 3)).to_string(), "2.35");
        assert_eq!(round_for_display(Decimal::new(2344, 3)).to_string(), "2.34");
        assert_eq!(round_for_display(Decimal::new(-2345, 3)).to_string(), "-2.35");
        assert_eq!(round_for_display(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn dashboard_options_ignore_the_filter() {
        let events = vec![
            event(1, "2024-02-01", "Strada", Responsible::Store, FuelType::Gasoline, 10_00, 1_000),
            event(2, "2024-03-01", "Hilux", Responsible::Workshop, FuelType::Diesel, 20_00, 1_000),
        ];
        let filter = DashboardFilter::default().vehicle("Hilux");
        let dashboard = Dashboard::build(&events, &filter);
        assert_eq!(dashboard.options.vehicles, vec!["Hilux", "Strada"]);
        assert_eq!(dashboard.summary.count, 1);
        assert_eq!(dashboard.summary.total_amount, Money::new(20_00));
        assert!(!dashboard.is_empty());
        assert!(Dashboard::build(&[], &DashboardFilter::default()).is_empty());
    }
}
