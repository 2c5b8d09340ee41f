use leptos::prelude::*;

use crate::api::ChangeKind;

const CHART_WIDTH: f64 = 420.0;
const CHART_HEIGHT: f64 = 160.0;
const AXIS_HEIGHT: f64 = 18.0;

/// One stacked bar of the weekly chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
	pub label: &'static str,
	pub x: f64,
	pub width: f64,
	/// `(kind, y, height)` from the bottom segment up.
	pub segments: Vec<(ChangeKind, f64, f64)>,
}

/// Lay out stacked bars for per-day counts ordered as [`ChangeKind::ALL`].
pub fn stacked_bars(days: &[(&'static str, [u32; 3])]) -> Vec<Bar> {
	let tallest = days
		.iter()
		.map(|(_, counts)| counts.iter().sum::<u32>())
		.max()
		.unwrap_or(0)
		.max(1);
	let plot_height = CHART_HEIGHT - AXIS_HEIGHT;
	let slot = CHART_WIDTH / days.len().max(1) as f64;

	days.iter()
		.enumerate()
		.map(|(i, &(label, counts))| {
			let mut top = plot_height;
			let segments = ChangeKind::ALL
				.iter()
				.zip(counts)
				.map(|(&kind, count)| {
					let h = plot_height * f64::from(count) / f64::from(tallest);
					top -= h;
					(kind, top, h)
				})
				.collect();
			Bar {
				label,
				x: slot * i as f64 + slot * 0.2,
				width: slot * 0.6,
				segments,
			}
		})
		.collect()
}

/// Weekly activity as an SVG stacked bar chart.
#[component]
pub fn ActivityChart(days: &'static [(&'static str, [u32; 3])]) -> impl IntoView {
	let bars = stacked_bars(days);

	view! {
		<svg
			class="activity-chart"
			viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
			preserveAspectRatio="none"
		>
			{bars
				.into_iter()
				.map(|bar| {
					let center = bar.x + bar.width / 2.0;
					view! {
						<g>
							{bar
								.segments
								.into_iter()
								.map(|(kind, y, h)| {
									view! {
										<rect
											class=kind.class()
											x=bar.x
											y=y
											width=bar.width
											height=h
											rx=2
										/>
									}
								})
								.collect_view()}
							<text x=center y={CHART_HEIGHT - 4.0} text-anchor="middle">
								{bar.label}
							</text>
						</g>
					}
				})
				.collect_view()}
		</svg>
		<div class="chart-legend">
			{ChangeKind::ALL
				.iter()
				.map(|kind| view! { <span class=kind.class()>{kind.plural_label()}</span> })
				.collect_view()}
		</div>
	}
}
