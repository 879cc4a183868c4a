//! CSV export of fuel events.
//!
//! The format is one header row followed by one row per event:
//!
//! ```text
//! id,date,vehicle_name,plate,responsible,amount,volume,fuel_type,note
//! 1,2024-03-01,Strada,ABC1D23,store,100.00,20.000,gasoline,
//! ```
//!
//! Amounts are written in reais with two decimals, volumes in liters with
//! three decimals, tags as their storage codes. A missing note is an empty
//! field.

use std::io;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{FuelEvent, FuelType, Responsible, ResultEngine, VehicleSnapshot};

pub const CSV_HEADER: [&str; 9] = [
    "id",
    "date",
    "vehicle_name",
    "plate",
    "responsible",
    "amount",
    "volume",
    "fuel_type",
    "note",
];

#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    id: i32,
    date: NaiveDate,
    vehicle_name: String,
    plate: String,
    responsible: Responsible,
    amount: String,
    volume: String,
    fuel_type: FuelType,
    note: Option<String>,
}

impl From<&FuelEvent> for CsvRow {
    fn from(event: &FuelEvent) -> Self {
        Self {
            id: event.id,
            date: event.date,
            vehicle_name: event.vehicle.name.clone(),
            plate: event.vehicle.plate.clone(),
            responsible: event.vehicle.responsible,
            amount: event.amount.to_decimal().to_string(),
            volume: event.volume.to_liters().to_string(),
            fuel_type: event.fuel_type,
            note: event.note.clone(),
        }
    }
}

impl TryFrom<CsvRow> for FuelEvent {
    type Error = crate::EngineError;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            date: row.date,
            vehicle: VehicleSnapshot {
                name: row.vehicle_name,
                plate: row.plate,
                responsible: row.responsible,
            },
            amount: row.amount.parse()?,
            volume: row.volume.parse()?,
            fuel_type: row.fuel_type,
            note: row.note,
        })
    }
}

/// Write `events` as CSV. The header is written even when `events` is empty.
pub fn write_csv<W: io::Write>(events: &[FuelEvent], writer: W) -> ResultEngine<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(CSV_HEADER)?;
    for event in events {
        writer.serialize(CsvRow::from(event))?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse CSV produced by [`write_csv`] back into events.
pub fn read_csv<R: io::Read>(reader: R) -> ResultEngine<Vec<FuelEvent>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut out = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        out.push(FuelEvent::try_from(row?)?);
    }
    Ok(out)
}

/// `abastecimentos_<start>_<end>.csv`, dates in ISO format.
#[must_use]
pub fn export_file_name(start: NaiveDate, end: NaiveDate) -> String {
    format!("abastecimentos_{start}_{end}.csv")
}

/// A CSV export ready to be saved or offered for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub rows: usize,
    pub data: Vec<u8>,
}

impl ExportArtifact {
    /// Serialize the events dated within `[start, end]`.
    pub fn build(events: &[FuelEvent], start: NaiveDate, end: NaiveDate) -> ResultEngine<Self> {
        let selected = crate::filter_by_date_range(events, start, end);
        let mut data = Vec::new();
        write_csv(&selected, &mut data)?;
        Ok(Self {
            file_name: export_file_name(start, end),
            rows: selected.len(),
            data,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}
