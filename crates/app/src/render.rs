//! Plain text rendering of vehicles, fuel events and the dashboard.
//!
//! Decimal values are rounded here, and only here.

use engine::{CURRENCY_SYMBOL, Dashboard, FuelEvent, Money, Vehicle, Volume, round_for_display};
use rust_decimal::Decimal;

const BAR_WIDTH: usize = 30;

fn price(value: Decimal) -> String {
    format!("{CURRENCY_SYMBOL} {}", round_for_display(value))
}

fn liters(volume: Volume, decimals: u32) -> String {
    volume.format_liters(decimals)
}

fn bar(value: Money, max: Money) -> String {
    if !max.is_positive() || !value.is_positive() {
        return String::new();
    }
    let len = (value.cents() as u128 * BAR_WIDTH as u128 / max.cents() as u128).max(1) as usize;
    "█".repeat(len)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn vehicles(vehicles: &[Vehicle]) -> String {
    if vehicles.is_empty() {
        return "No vehicles registered.\n".to_string();
    }
    let mut lines = vec![format!(
        "{:>4}  {:<20} {:<10} {:<12} {}",
        "ID", "Vehicle", "Plate", "Responsible", "Status"
    )];
    lines.extend(vehicles.iter().map(|vehicle| {
        format!(
            "{:>4}  {:<20} {:<10} {:<12} {}",
            vehicle.id, vehicle.name, vehicle.plate, vehicle.responsible, vehicle.status
        )
    }));
    finish(lines)
}

pub fn fuel_events(events: &[FuelEvent]) -> String {
    if events.is_empty() {
        return "No fuel events recorded.\n".to_string();
    }
    let mut lines = vec![format!(
        "{:>4}  {:<10}  {:<20} {:<10} {:<12} {:>14} {:>14}  {:<10}  {}",
        "ID", "Date", "Vehicle", "Plate", "Responsible", "Amount", "Volume", "Fuel", "Note"
    )];
    lines.extend(events.iter().map(|event| {
        format!(
            "{:>4}  {:<10}  {:<20} {:<10} {:<12} {:>14} {:>14}  {:<10}  {}",
            event.id,
            event.date.to_string(),
            event.vehicle.name,
            event.vehicle.plate,
            event.vehicle.responsible,
            event.amount.to_string(),
            liters(event.volume, 3),
            event.fuel_type,
            event.note.as_deref().unwrap_or("")
        )
    }));
    finish(lines)
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    let filter = &dashboard.filter;
    let summary = &dashboard.summary;

    let mut lines = vec![format!(
        "Month: {}  Responsible: {}  Vehicle: {}",
        filter.month, filter.responsible, filter.vehicle
    )];
    if dashboard.is_empty() {
        lines.push("No fuel events recorded yet.".to_string());
    }
    lines.push(String::new());

    lines.push(format!("Total spent:             {}", summary.total_amount));
    lines.push(format!("Total volume:            {}", liters(summary.total_volume, 1)));
    lines.push(format!(
        "Average price per liter: {}",
        price(summary.average_price_per_volume)
    ));
    lines.push(format!("Fuel events:             {}", summary.count));

    lines.push(String::new());
    lines.push("Spend by month".to_string());
    let max = dashboard.by_month.values().copied().max().unwrap_or(Money::ZERO);
    lines.extend(dashboard.by_month.iter().map(|(month, amount)| {
        format!("  {month}  {:>16}  {}", amount.to_string(), bar(*amount, max))
    }));

    lines.push(String::new());
    lines.push("Spend by fuel type".to_string());
    lines.extend(dashboard.by_fuel_type.iter().map(|share| {
        format!(
            "  {:<10}  {:>16}  {:>6}%",
            share.fuel_type.label(),
            share.amount.to_string(),
            round_for_display(share.share).to_string()
        )
    }));

    lines.push(String::new());
    lines.push("Spend by vehicle".to_string());
    if !dashboard.by_vehicle.is_empty() {
        lines.push(format!(
            "  {:<20} {:>16} {:>16} {:>14}",
            "Vehicle", "Total", "Volume", "Price/L"
        ));
    }
    lines.extend(dashboard.by_vehicle.iter().map(|(name, totals)| {
        format!(
            "  {:<20} {:>16} {:>16} {:>14}",
            name,
            totals.total_amount.to_string(),
            liters(totals.total_volume, 2),
            price(totals.average_price_per_volume)
        )
    }));
    finish(lines)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use engine::{DashboardFilter, FuelType, Responsible, VehicleSnapshot, VehicleStatus};

    use super::*;

    fn event(id: i32, date: &str, name: &str, fuel_type: FuelType, cents: i64, ml: i64) -> FuelEvent {
        FuelEvent {
            id,
            date: date.parse::<NaiveDate>().unwrap(),
            vehicle: VehicleSnapshot {
                name: name.to_string(),
                plate: String::new(),
                responsible: Responsible::Store,
            },
            amount: Money::new(cents),
            volume: Volume::new(ml),
            fuel_type,
            note: None,
        }
    }

    #[test]
    fn empty_dashboard_shows_zero_metrics() {
        let text = dashboard(&Dashboard::build(&[], &DashboardFilter::default()));
        assert!(text.contains("No fuel events recorded yet."));
        assert!(text.contains("Total spent:             R$ 0.00"));
        assert!(text.contains("Total volume:            0.0 L"));
        assert!(text.contains("Average price per liter: R$ 0.00"));
        assert!(text.contains("Fuel events:             0"));
    }

    #[test]
    fn dashboard_rounds_only_for_display() {
        let events = vec![
            event(1, "2024-03-01", "Strada", FuelType::Gasoline, 100_00, 30_000),
            event(2, "2024-04-01", "Strada", FuelType::Ethanol, 50_00, 10_000),
        ];
        let built = Dashboard::build(&events, &DashboardFilter::default());
        let text = dashboard(&built);

        assert!(text.contains("Average price per liter: R$ 3.75"));
        assert!(text.contains("Total volume:            40.0 L"));
        assert!(text.contains("R$ 100.00"));
        assert!(text.contains("66.67%"));
        assert!(text.contains("R$ 3.75"));
        // Aggregates themselves stay exact.
        assert_eq!(built.summary.average_price_per_volume, Decimal::new(375, 2));
        assert!(text.find("2024-03").unwrap() < text.find("2024-04").unwrap());
    }

    #[test]
    fn vehicle_table_lists_each_vehicle() {
        let list = vehicles(&[Vehicle {
            id: 3,
            name: "Toro".to_string(),
            plate: "TOR0A00".to_string(),
            responsible: Responsible::TestDrive,
            status: VehicleStatus::Active,
        }]);
        assert!(list.contains("Toro"));
        assert!(list.contains("Test Drive"));
        assert_eq!(vehicles(&[]), "No vehicles registered.\n");
    }

    #[test]
    fn fuel_event_table_shows_liters() {
        let table = fuel_events(&[event(1, "2024-03-01", "Strada", FuelType::DieselS10, 180_50, 30_250)]);
        assert!(table.contains("R$ 180.50"));
        assert!(table.contains("30.250 L"));
        assert!(table.contains("Diesel S10"));
        assert!(table.ends_with('\n'));
    }

    #[test]
    fn large_volumes_are_grouped() {
        let events = vec![event(1, "2024-03-01", "Hilux", FuelType::Diesel, 9_000_000_00, 1_234_550)];
        let text = dashboard(&Dashboard::build(&events, &DashboardFilter::default()));
        assert!(text.contains("Total volume:            1,234.6 L"));
        assert!(text.contains("1,234.55 L"));
        assert!(text.contains("R$ 9,000,000.00"));
    }

    #[test]
    fn bars_scale_to_the_largest_month() {
        assert_eq!(bar(Money::new(100), Money::new(100)).chars().count(), BAR_WIDTH);
        assert_eq!(bar(Money::new(1), Money::new(1_000_000)).chars().count(), 1);
        assert_eq!(bar(Money::ZERO, Money::ZERO), "");
    }
}
