//! Cash-book file reader
//!
//! Reads the first row of the requested sheet as headers, locates the
//! configured columns and converts every following row into a [`Transaction`].
//! Spreadsheets go through calamine, `.csv` files through the csv crate.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Days, NaiveDate, NaiveDateTime};
use log::{debug, info, warn};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Cashbook, LoadError, Transaction};
use crate::constants::{
    DEFAULT_CLIENT_COLUMN, DEFAULT_COMMISSION_COLUMN, DEFAULT_DATE_COLUMN,
    DEFAULT_QUANTITY_COLUMN, DEFAULT_VALUE_COLUMN,
};

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xls", "xlsb", "ods"];

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y"];

/// Header names of the columns read from the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    pub order_date: String,
    pub total_value: String,
    pub commission: String,
    pub quantity: String,
    /// Optional column; rows are ranked under a sentinel when it is absent
    pub client: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            order_date: DEFAULT_DATE_COLUMN.to_string(),
            total_value: DEFAULT_VALUE_COLUMN.to_string(),
            commission: DEFAULT_COMMISSION_COLUMN.to_string(),
            quantity: DEFAULT_QUANTITY_COLUMN.to_string(),
            client: DEFAULT_CLIENT_COLUMN.to_string(),
        }
    }
}

/// Cell value normalized across spreadsheet and CSV sources
#[derive(Debug, Clone, PartialEq)]
enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl RawCell {
    fn is_empty(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndexes {
    order_date: usize,
    total_value: usize,
    commission: usize,
    quantity: usize,
    client: Option<usize>,
}

/// Load the cash book using the default Portuguese column headers
pub fn load(path: impl AsRef<Path>, sheet: &str) -> Result<Cashbook, LoadError> {
    load_with_mapping(path, sheet, &ColumnMapping::default())
}

pub fn load_with_mapping(
    path: impl AsRef<Path>,
    sheet: &str,
    mapping: &ColumnMapping,
) -> Result<Cashbook, LoadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let rows = if extension == "csv" {
        read_csv_rows(path)?
    } else if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        read_sheet_rows(path, sheet)?
    } else {
        return Err(LoadError::UnsupportedFormat(extension));
    };

    let cashbook = rows_to_cashbook(rows, mapping)?;
    info!(
        "Loaded {} cash book rows from {} ({} months, {} rows without a valid date)",
        cashbook.len(),
        path.display(),
        cashbook.available_months().len(),
        cashbook.undated_count()
    );
    Ok(cashbook)
}

fn read_sheet_rows(path: &Path, sheet: &str) -> Result<Vec<Vec<RawCell>>, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_owned();
    if !sheet_names.iter().any(|name| name == sheet) {
        return Err(LoadError::SheetNotFound {
            sheet: sheet.to_string(),
            available: sheet_names,
        });
    }

    let range = workbook.worksheet_range(sheet)?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect())
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<RawCell>>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        RawCell::Empty
                    } else {
                        RawCell::Text(decode_field(field))
                    }
                })
                .collect(),
        );
    }
    Ok(rows)
}

/// UTF-8 when valid, otherwise Latin-1 (the usual encoding of spreadsheet CSV exports)
fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

fn cell_from_data(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Float(n) => RawCell::Number(*n),
        Data::Int(n) => RawCell::Number(*n as f64),
        Data::Bool(b) => RawCell::Text(b.to_string()),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64())
            .map(RawCell::Date)
            .unwrap_or(RawCell::Empty),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(e) => {
            debug!("Spreadsheet cell error: {:?}", e);
            RawCell::Empty
        }
    }
}

fn rows_to_cashbook(
    rows: Vec<Vec<RawCell>>,
    mapping: &ColumnMapping,
) -> Result<Cashbook, LoadError> {
    let mut rows = rows.into_iter();
    let headers: Vec<String> = rows
        .next()
        .unwrap_or_default()
        .iter()
        .map(|cell| match cell {
            RawCell::Text(s) => s.trim().to_string(),
            _ => String::new(),
        })
        .collect();

    let columns = resolve_columns(&headers, mapping)?;
    let mut transactions = Vec::new();

    for (offset, row) in rows.enumerate() {
        if row.iter().all(RawCell::is_empty) {
            continue;
        }
        // 1-based spreadsheet row number, header included
        let line = offset + 2;
        let cell = |idx: usize| row.get(idx).unwrap_or(&RawCell::Empty);

        let order_date = parse_date_cell(cell(columns.order_date));
        if order_date.is_none() {
            debug!("Row {}: unparseable order date {:?}", line, cell(columns.order_date));
        }

        let client = columns.client.and_then(|idx| match cell(idx) {
            RawCell::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            RawCell::Number(n) => Some(n.to_string()),
            _ => None,
        });

        transactions.push(Transaction::new(
            order_date,
            parse_amount_cell(cell(columns.total_value), line, &mapping.total_value),
            parse_amount_cell(cell(columns.commission), line, &mapping.commission),
            parse_amount_cell(cell(columns.quantity), line, &mapping.quantity),
            client,
        ));
    }

    Ok(Cashbook::new(transactions, columns.client.is_some()))
}

fn resolve_columns(headers: &[String], mapping: &ColumnMapping) -> Result<ColumnIndexes, LoadError> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name.trim()))
    };
    let required = |name: &str| find(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()));

    let client = find(&mapping.client);
    if client.is_none() {
        warn!(
            "Column '{}' not found, client ranking will fall back to a single placeholder",
            mapping.client
        );
    }

    Ok(ColumnIndexes {
        order_date: required(&mapping.order_date)?,
        total_value: required(&mapping.total_value)?,
        commission: required(&mapping.commission)?,
        quantity: required(&mapping.quantity)?,
        client,
    })
}

/// Convert an Excel serial day number (1900 date system) to a date
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let days = serial.floor() as u64;
    // Serials below 60 predate Excel's phantom 1900-02-29
    let epoch = if days < 60 {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    epoch.checked_add_days(Days::new(days))
}

fn parse_date_cell(cell: &RawCell) -> Option<NaiveDate> {
    match cell {
        RawCell::Date(d) => Some(*d),
        RawCell::Number(n) => excel_serial_to_date(*n),
        RawCell::Text(s) => parse_date_text(s),
        RawCell::Empty => None,
    }
}

pub(crate) fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    // Fractional seconds and timezone suffixes are irrelevant for bucketing
    let s = s.split('.').next().unwrap_or(s).trim_end_matches('Z');

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok().map(|dt| dt.date()))
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        })
}

fn parse_amount_cell(cell: &RawCell, line: usize, column: &str) -> Decimal {
    match cell {
        RawCell::Empty => Decimal::ZERO,
        RawCell::Number(n) => Decimal::from_f64(*n).unwrap_or_default(),
        RawCell::Date(_) => {
            warn!("Row {}: date found in numeric column '{}', counted as 0", line, column);
            Decimal::ZERO
        }
        RawCell::Text(s) => parse_amount_text(s).unwrap_or_else(|| {
            warn!("Row {}: cannot read '{}' in column '{}', counted as 0", line, s, column);
            Decimal::ZERO
        }),
    }
}

/// Parse amounts written as `1.234,56`, `1,234.56`, `R$ 10` or `-5,5`.
/// The right-most separator is taken as the decimal point.
pub(crate) fn parse_amount_text(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Some(Decimal::ZERO);
    }

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) => cleaned.replace(',', "."),
        _ => cleaned,
    };

    normalized.parse::<Decimal>().ok()
}
