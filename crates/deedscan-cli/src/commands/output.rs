//! Record output formatting.

use std::fmt::Write as _;

use deedscan_core::StoredRecord;
use serde::Serialize;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn format_records(
    records: &[StoredRecord],
    summary: &serde_json::Value,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = summary.clone();
            if let Some(obj) = json.as_object_mut() {
                obj.insert("transactions".to_string(), serde_json::to_value(records)?);
            }
            Ok(serde_json::to_string(&json)?)
        }
        OutputFormat::Csv => format_csv(records),
        OutputFormat::Text => Ok(format_text(records)),
    }
}

/// Serialized name of a unit enum variant, as it appears in JSON output.
fn label<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

fn format_csv(records: &[StoredRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "id",
        "document_number",
        "survey_number",
        "house_number",
        "buyer_name",
        "buyer_name_translated",
        "seller_name",
        "seller_name_translated",
        "district",
        "transaction_date",
        "date_status",
        "transaction_value",
        "value_status",
        "translation_status",
    ])?;

    for stored in records {
        let record = &stored.record;
        let fields = &record.fields;
        let id = stored.id.to_string();
        let date = record.transaction_date.to_string();
        let value = record
            .transaction_value
            .map(|v| v.to_string())
            .unwrap_or_default();
        let date_status = label(&record.date_status);
        let value_status = label(&record.value_status);
        let translation_status = label(&record.translation_status);
        let row: [&str; 14] = [
            &id,
            &fields.document_number,
            &fields.survey_number,
            fields.house_number.as_deref().unwrap_or_default(),
            &fields.buyer_name,
            &record.buyer_name_translated,
            &fields.seller_name,
            &record.seller_name_translated,
            fields.district.as_deref().unwrap_or_default(),
            &date,
            &date_status,
            &value,
            &value_status,
            &translation_status,
        ];
        wtr.write_record(row)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(records: &[StoredRecord]) -> String {
    let mut output = String::new();

    for stored in records {
        let record = &stored.record;
        let fields = &record.fields;

        let _ = writeln!(output, "#{} Document {}", stored.id, fields.document_number);
        let _ = writeln!(
            output,
            "  Date:    {} ({})",
            record.transaction_date,
            label(&record.date_status)
        );
        let _ = writeln!(output, "  Survey:  {}", fields.survey_number);
        if let Some(house) = &fields.house_number {
            let _ = writeln!(output, "  House:   {}", house);
        }
        let _ = writeln!(
            output,
            "  Buyer:   {} / {}",
            fields.buyer_name, record.buyer_name_translated
        );
        let _ = writeln!(
            output,
            "  Seller:  {} / {}",
            fields.seller_name, record.seller_name_translated
        );
        if let Some(value) = record.transaction_value {
            let _ = writeln!(output, "  Value:   Rs. {}", value);
        }
        if let Some(district) = &fields.district {
            let _ = writeln!(output, "  District: {}", district);
        }
        output.push('\n');
    }

    let _ = writeln!(output, "{} transactions", records.len());
    output
}
