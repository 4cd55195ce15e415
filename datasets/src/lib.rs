//! Loaders for the credit Default dataset.
//!
//! The raw CSV carries an unnamed leading index column, two Yes/No columns
//! (`default`, `student`), the continuous `balance`, and the regression
//! target `income`. Loading encodes the Yes/No columns to {0, 1}, drops rows
//! with missing cells, and fails loudly on anything else: absent headers,
//! unparseable numerics, or an empty result.
//!
//! Enable the `credit` cargo feature to pull the loaders in.

#[cfg(feature = "credit")]
use std::fs::File;
#[cfg(feature = "credit")]
use std::io::Read;
#[cfg(feature = "credit")]
use std::path::Path;

#[cfg(feature = "credit")]
use flate2::read::GzDecoder;
#[cfg(feature = "credit")]
use ndarray::{Array1, Array2};

#[cfg(feature = "credit")]
use shrinkage::{Dataset, Error, Result};

/// Where the study originally fetched the table from.
pub const CREDIT_URL: &str =
    "https://raw.githubusercontent.com/selva86/datasets/master/Default.csv";

#[cfg(feature = "credit")]
const FEATURES: [&str; 3] = ["default", "student", "balance"];
#[cfg(feature = "credit")]
const TARGET: &str = "income";

/// Parse the credit Default CSV from any reader.
#[cfg(feature = "credit")]
pub fn credit_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| Error::Csv(e.to_string()))?
        .clone();
    let position = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    };
    let default_col = position("default")?;
    let student_col = position("student")?;
    let balance_col = position("balance")?;
    let income_col = position(TARGET)?;

    let mut rows: Vec<[f64; 3]> = Vec::new();
    let mut incomes: Vec<f64> = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| Error::Csv(e.to_string()))?;
        let cells = [
            record.get(default_col),
            record.get(student_col),
            record.get(balance_col),
            record.get(income_col),
        ];
        // Rows with any missing cell are dropped before scaling.
        if cells.iter().any(|c| c.map_or(true, is_missing)) {
            continue;
        }
        let balance = parse_number(&record, balance_col, "balance", row)?;
        let income = parse_number(&record, income_col, TARGET, row)?;
        rows.push([
            encode_yes_no(cells[0].unwrap_or("")),
            encode_yes_no(cells[1].unwrap_or("")),
            balance,
        ]);
        incomes.push(income);
    }

    if rows.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let n = rows.len();
    let mut records = Array2::<f64>::zeros((n, FEATURES.len()));
    for (i, row) in rows.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            records[[i, j]] = *v;
        }
    }
    Dataset::new(
        records,
        Array1::from(incomes),
        FEATURES.iter().map(|s| s.to_string()).collect(),
    )
}

/// Load the credit Default CSV from disk; `.gz` files are decompressed
/// transparently, as the bundled copies are stored gzipped.
#[cfg(feature = "credit")]
pub fn credit_from_path<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if path.extension().map_or(false, |e| e == "gz") {
        credit_from_reader(GzDecoder::new(file))
    } else {
        credit_from_reader(file)
    }
}

/// One-shot blocking fetch of the credit Default CSV. No retries; a transport
/// error or non-success status aborts the pipeline.
#[cfg(feature = "credit")]
pub fn fetch_credit(url: &str) -> Result<Dataset> {
    let response = reqwest::blocking::get(url).map_err(|e| Error::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if !response.status().is_success() {
        return Err(Error::Fetch {
            url: url.to_string(),
            reason: format!("http status {}", response.status()),
        });
    }
    let body = response.text().map_err(|e| Error::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    credit_from_reader(body.as_bytes())
}

#[cfg(feature = "credit")]
fn encode_yes_no(cell: &str) -> f64 {
    if cell.trim() == "Yes" {
        1.0
    } else {
        0.0
    }
}

#[cfg(feature = "credit")]
fn is_missing(cell: &str) -> bool {
    let c = cell.trim();
    c.is_empty() || c.eq_ignore_ascii_case("na") || c.eq_ignore_ascii_case("nan")
}

#[cfg(feature = "credit")]
fn parse_number(
    record: &csv::StringRecord,
    col: usize,
    name: &str,
    row: usize,
) -> Result<f64> {
    let raw = record.get(col).unwrap_or("");
    raw.trim().parse::<f64>().map_err(|_| Error::MalformedNumber {
        row,
        column: name.to_string(),
        value: raw.to_string(),
    })
}
