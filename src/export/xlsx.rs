//! Excel (`.xlsx`) export functionality.
//!
//! Builds a single-sheet workbook: header row first, then one row per record.
//! The workbook is assembled in memory and written to the sink once complete.

use std::sync::LazyLock;

use futures::{Stream, TryStreamExt};
use regex::Regex;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error_handling::ExportError;

use super::types::{Header, Row, Value};

static DECIMAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap());

/// Largest magnitude below which every integer has an exact `f64` value (2^53).
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// How a text value is stored in a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TextCell {
    /// Explicit string cell
    Text,
    /// Numeric cell
    Number(f64),
}

/// Whether `value` consists only of ASCII digits.
///
/// Such values are codes (equipment codes, postcodes) and are always stored as
/// text so the reader does not turn `"007"` into `7`.
pub fn is_digit_code(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Default type inference for text values.
///
/// Plain decimal numbers (`-3`, `12.5`, `1e3`) become numbers unless their
/// integer part has a leading zero; everything else stays text. Integers too
/// large for an exact `f64` also stay text.
fn classify_text(value: &str) -> TextCell {
    if is_digit_code(value) || !DECIMAL_NUMBER.is_match(value) {
        return TextCell::Text;
    }
    let unsigned = value.trim_start_matches(['+', '-']);
    let mut chars = unsigned.chars();
    if chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit()) {
        return TextCell::Text;
    }
    if !value.contains(['.', 'e', 'E']) {
        return match value.parse::<i128>() {
            Ok(n) if n.unsigned_abs() <= u128::from(MAX_EXACT_INTEGER) => {
                TextCell::Number(n as f64)
            }
            _ => TextCell::Text,
        };
    }
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => TextCell::Number(number),
        _ => TextCell::Text,
    }
}

fn write_value(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<&Value>,
) -> Result<(), XlsxError> {
    match value {
        None | Some(Value::Null) => {}
        Some(Value::Integer(i)) if i.unsigned_abs() <= MAX_EXACT_INTEGER => {
            sheet.write_number(row, col, *i as f64)?;
        }
        Some(Value::Integer(i)) => {
            sheet.write_string(row, col, &i.to_string())?;
        }
        Some(Value::Real(f)) if f.is_finite() => {
            sheet.write_number(row, col, *f)?;
        }
        Some(Value::Real(f)) => {
            sheet.write_string(row, col, &f.to_string())?;
        }
        Some(Value::Text(s)) => match classify_text(s) {
            TextCell::Number(number) => {
                sheet.write_number(row, col, number)?;
            }
            TextCell::Text => {
                sheet.write_string(row, col, s)?;
            }
        },
    }
    Ok(())
}

/// Writes `rows` to `sink` as a single-sheet workbook.
///
/// Header names go into row 1 and every column is auto-fitted. When there are
/// no rows, cell A1 holds `empty_notice` instead of a header.
///
/// # Returns
///
/// The number of data rows written.
///
/// # Errors
///
/// Returns the first row-source, encoder or sink error. Nothing reaches the
/// sink unless the workbook was completed.
pub async fn write_xlsx<S, W>(
    mut rows: S,
    sink: &mut W,
    empty_notice: &str,
) -> Result<usize, ExportError>
where
    S: Stream<Item = Result<Row, ExportError>> + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let mut header: Option<Header> = None;
    let mut next_row: u32 = 1;

    while let Some(row) = rows.try_next().await? {
        let first_row = header.is_none();
        let header = header.get_or_insert_with(|| Header::from_row(&row));
        if first_row {
            for (col, name) in header.names().iter().enumerate() {
                let col = u16::try_from(col).map_err(|_| ExportError::TooManyColumns(header.len()))?;
                sheet.write_string(0, col, name)?;
            }
        }

        for (col, value) in header.values(&row).enumerate() {
            let col = u16::try_from(col).map_err(|_| ExportError::TooManyColumns(header.len()))?;
            write_value(sheet, next_row, col, value)?;
        }
        next_row += 1;
    }

    if header.is_some() {
        sheet.autofit();
    } else {
        sheet.write_string(0, 0, empty_notice)?;
    }

    let buffer = workbook.save_to_buffer()?;
    sink.write_all(&buffer).await?;
    sink.flush().await?;

    Ok((next_row - 1) as usize)
}
