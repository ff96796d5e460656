use leptos::prelude::*;

use crate::components::network_graph::attributes::SECONDARY_LINK_COLUMNS;
use crate::components::network_graph::{NetworkGraphCanvas, Selection, SizeAttribute};
use crate::data::bundled_records;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let defaults = Selection::default();
	let (size_column, set_size_column) = signal(defaults.size_column.clone());
	let (secondary_column, set_secondary_column) = signal(defaults.secondary_column.clone());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="graph-overlay">
				<h1>"Social Determinants Research Network"</h1>
				<label>
					"Node size "
					<select on:change=move |ev| set_size_column.set(event_target_value(&ev))>
						{SizeAttribute::ALL
							.into_iter()
							.map(|attribute| {
								let name = attribute.column().name();
								view! {
									<option value=name selected=name == defaults.size_column>
										{attribute.label()}
									</option>
								}
							})
							.collect_view()}
					</select>
				</label>
				<label>
					"Secondary links "
					<select on:change=move |ev| set_secondary_column.set(event_target_value(&ev))>
						{SECONDARY_LINK_COLUMNS
							.into_iter()
							.map(|column| {
								let name = column.name();
								view! {
									<option value=name selected=name == defaults.secondary_column>
										{name}
									</option>
								}
							})
							.collect_view()}
					</select>
				</label>
			</div>
			{bundled_records()
				.map(|rows| {
					let data = Signal::derive(move || rows.clone());
					view! {
						<div class="fullscreen-graph">
							<NetworkGraphCanvas
								data=data
								size_column=size_column
								secondary_column=secondary_column
								fullscreen=true
							/>
						</div>
					}
				})}
		</ErrorBoundary>
	}
}
