use leptos::prelude::*;

use super::palette::LegendEntry;

const ROW_HEIGHT: f64 = 25.0;
const SWATCH: f64 = 15.0;

/// Category swatches, largest category first.
#[component]
pub fn Legend(#[prop(into)] entries: Signal<Vec<LegendEntry>>) -> impl IntoView {
	let height = move || entries.with(|entries| (entries.len() as f64 * ROW_HEIGHT).to_string());

	view! {
		<div id="legends-container">
			<svg width="220" height=height>
				<g class="legend-wrapper" transform="translate(2,2)">
					{move || {
						entries
							.get()
							.into_iter()
							.enumerate()
							.map(|(i, entry)| {
								let y = i as f64 * ROW_HEIGHT;
								view! {
									<g
										class="highlight-legend-group"
										transform=format!("translate(0,{y})")
										style="cursor: pointer"
									>
										<rect
											width=SWATCH.to_string()
											height=SWATCH.to_string()
											rx="8"
											fill=entry.color.clone()
											stroke=entry.color
											stroke-width="2"
										/>
										<text
											x=(SWATCH + 5.0).to_string()
											y="8"
											dy="0.32em"
											font-family="Lato"
											font-size="12px"
											fill="currentColor"
											pointer-events="none"
										>
											{entry.label}
										</text>
									</g>
								}
							})
							.collect_view()
					}}
				</g>
			</svg>
		</div>
	}
}
