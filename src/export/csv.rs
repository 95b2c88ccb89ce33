//! CSV export functionality.
//!
//! Streams rows as comma separated records, UTF-8 with a byte-order mark so
//! spreadsheet tools pick the right encoding. Each record is handed to the sink
//! as soon as it is encoded.

use csv::{Terminator, Writer, WriterBuilder};
use futures::{Stream, TryStreamExt};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::config::UTF8_BOM;
use crate::error_handling::ExportError;

use super::types::{Header, Row};

/// Writes `rows` to `sink` as CSV.
///
/// The header line comes from the first row's keys. An empty sequence leaves
/// only the byte-order mark in the sink.
///
/// # Returns
///
/// The number of data rows written (the header line is not counted).
///
/// # Errors
///
/// Returns the first row-source, encoder or sink error. Whatever was written
/// before the error stays in the sink.
pub async fn write_csv<S, W>(mut rows: S, sink: &mut W) -> Result<usize, ExportError>
where
    S: Stream<Item = Result<Row, ExportError>> + Unpin,
    W: AsyncWrite + Unpin,
{
    sink.write_all(UTF8_BOM).await?;

    let mut encoder = new_encoder();
    let mut header: Option<Header> = None;
    let mut record_count = 0;

    while let Some(row) = rows.try_next().await? {
        let first_row = header.is_none();
        let header = header.get_or_insert_with(|| Header::from_row(&row));
        if first_row {
            encoder.write_record(header.names())?;
        }

        let fields: Vec<_> = header
            .values(&row)
            .map(|value| value.map(|v| v.as_field()).unwrap_or_default())
            .collect();
        encoder.write_record(fields.iter().map(|field| field.as_bytes()))?;
        drain_into(&mut encoder, sink).await?;

        record_count += 1;
    }

    sink.flush().await?;
    Ok(record_count)
}

fn new_encoder() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new())
}

/// Moves everything the encoder has produced so far into the sink, leaving a
/// fresh encoder behind.
async fn drain_into<W>(encoder: &mut Writer<Vec<u8>>, sink: &mut W) -> Result<(), ExportError>
where
    W: AsyncWrite + Unpin,
{
    let encoded = std::mem::replace(encoder, new_encoder())
        .into_inner()
        .map_err(|e| e.into_error())?;
    if !encoded.is_empty() {
        sink.write_all(&encoded).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Value;
    use futures::stream;

    fn rows(rows: Vec<Row>) -> impl Stream<Item = Result<Row, ExportError>> + Unpin {
        stream::iter(rows.into_iter().map(Ok))
    }

    fn text_row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[tokio::test]
    async fn test_write_csv_scenario() {
        let input = vec![
            text_row(&[("id", "1"), ("code", "007"), ("name", "Alpha")]),
            text_row(&[("id", "2"), ("code", "12"), ("name", "Beta")]),
        ];
        let mut sink = Vec::new();

        let count = write_csv(rows(input), &mut sink).await.unwrap();

        assert_eq!(count, 2);
        let mut expected = UTF8_BOM.to_vec();
        expected.extend_from_slice(b"id,code,name\r\n1,007,Alpha\r\n2,12,Beta\r\n");
        assert_eq!(sink, expected);
    }

    #[tokio::test]
    async fn test_write_csv_empty_is_bom_only() {
        let mut sink = Vec::new();
        let count = write_csv(rows(Vec::new()), &mut sink).await.unwrap();

        assert_eq!(count, 0);
        assert_eq!(sink, UTF8_BOM);
    }

    #[tokio::test]
    async fn test_write_csv_quotes_special_characters() {
        let input = vec![text_row(&[
            ("name", "Pavelló \"Nou\""),
            ("address", "Carrer Major, 1"),
            ("notes", "line one\nline two"),
        ])];
        let mut sink = Vec::new();
        write_csv(rows(input), &mut sink).await.unwrap();

        let text = String::from_utf8(sink[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "name,address,notes\r\n\"Pavelló \"\"Nou\"\"\",\"Carrer Major, 1\",\"line one\nline two\"\r\n"
        );
    }

    #[tokio::test]
    async fn test_write_csv_missing_columns_and_nulls_are_empty() {
        let first: Row = [
            ("id", Value::Integer(1)),
            ("ratio", Value::Real(0.25)),
            ("note", Value::Null),
        ]
        .into_iter()
        .collect();
        let second: Row = [("id", Value::Integer(2))].into_iter().collect();
        let mut sink = Vec::new();

        write_csv(rows(vec![first, second]), &mut sink).await.unwrap();

        let text = String::from_utf8(sink[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text, "id,ratio,note\r\n1,0.25,\r\n2,,\r\n");
    }

    #[tokio::test]
    async fn test_write_csv_keeps_partial_output_on_source_error() {
        let input = stream::iter(vec![
            Ok(text_row(&[("id", "1")])),
            Err(ExportError::DataAccess(sqlx::Error::RowNotFound)),
            Ok(text_row(&[("id", "3")])),
        ]);
        let mut sink = Vec::new();

        let result = write_csv(input, &mut sink).await;

        assert!(matches!(result, Err(ExportError::DataAccess(_))));
        let text = String::from_utf8(sink[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text, "id\r\n1\r\n");
    }

    #[tokio::test]
    async fn test_write_csv_hands_each_record_to_the_sink() {
        let (mut writer, mut reader) = tokio::io::duplex(1024);
        let (tx, rx) = futures::channel::mpsc::unbounded::<Result<Row, ExportError>>();

        let export = tokio::spawn(async move { write_csv(rx, &mut writer).await });

        tx.unbounded_send(Ok(text_row(&[("id", "1")]))).unwrap();
        let mut expected = UTF8_BOM.to_vec();
        expected.extend_from_slice(b"id\r\n1\r\n");
        let mut received = vec![0u8; expected.len()];
        tokio::io::AsyncReadExt::read_exact(&mut reader, &mut received)
            .await
            .expect("first record should arrive before the stream ends");
        assert_eq!(received, expected);

        drop(tx);
        assert_eq!(export.await.unwrap().unwrap(), 1);
    }
}
