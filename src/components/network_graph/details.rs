//! Detail panel for the hovered or clicked node.

use leptos::prelude::*;

use super::attributes::{HARM_FIELDS, RESEARCH_FIELDS, column_for_label};
use super::types::Record;

/// Label/value pairs shown for one node, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeDetails {
	/// What the work is and how it was done.
	pub research: Vec<(String, String)>,
	/// Category, determinants and harm.
	pub harm: Vec<(String, String)>,
}

impl NodeDetails {
	/// Missing values become empty strings.
	pub fn from_record(record: &Record) -> Self {
		let fields = |labels: &[&str]| {
			labels
				.iter()
				.map(|label| {
					let value = column_for_label(label)
						.and_then(|column| record.column(column))
						.unwrap_or_default();
					((*label).to_owned(), value.to_owned())
				})
				.collect::<Vec<_>>()
		};
		Self {
			research: fields(&RESEARCH_FIELDS),
			harm: fields(&HARM_FIELDS),
		}
	}
}

fn field_rows(fields: Vec<(String, String)>) -> impl IntoView {
	fields
		.into_iter()
		.map(|(label, value)| {
			view! {
				<div class="datatable-info-col">
					<div class="widget-content">
						<div class="widget-heading">{label}</div>
						<div class="widget-subheading">{value}</div>
					</div>
				</div>
			}
		})
		.collect_view()
}

/// Research and harm metadata of the hovered (or clicked) node.
#[component]
pub fn DetailPanel(
	/// Hidden while `None`.
	#[prop(into)]
	details: Signal<Option<NodeDetails>>,
) -> impl IntoView {
	move || {
		details.get().map(|details| {
			view! {
				<div class="research-metadata-container">
					<div class="datatable-info-row">{field_rows(details.research)}</div>
				</div>
				<div class="racial-harm-metadata-container">
					<div class="datatable-info-row">{field_rows(details.harm)}</div>
				</div>
			}
		})
	}
}
