//! Decoding of the research dataset.

use serde_json::Value;
use thiserror::Error;

use crate::components::network_graph::Record;

/// Why a dataset could not be decoded.
#[derive(Debug, Error)]
pub enum DataError {
	/// Malformed JSON.
	#[error("dataset is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
	/// Top level is not an array.
	#[error("dataset must be a JSON array of records")]
	NotAnArray,
	/// An array element is not an object.
	#[error("record {index} is not a JSON object")]
	NotAnObject {
		/// Position in the array.
		index: usize,
	},
}

/// Parses a JSON array of flat objects. Scalars become strings and `null`
/// becomes empty.
pub fn parse_records(raw: &str) -> Result<Vec<Record>, DataError> {
	let parsed: Value = serde_json::from_str(raw)?;
	let rows = parsed.as_array().ok_or(DataError::NotAnArray)?;

	let records = rows
		.iter()
		.enumerate()
		.map(|(index, row)| {
			let object = row.as_object().ok_or(DataError::NotAnObject { index })?;
			Ok(object
				.iter()
				.map(|(column, value)| (column.clone(), cell_text(value)))
				.collect::<Record>())
		})
		.collect::<Result<Vec<_>, DataError>>()?;

	log::info!("loaded {} records", records.len());
	Ok(records)
}

fn cell_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

/// The dataset bundled with the app.
pub fn bundled_records() -> Result<Vec<Record>, DataError> {
	parse_records(include_str!("../assets/research.json"))
}
