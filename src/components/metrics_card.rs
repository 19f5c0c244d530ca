//! Stateless metrics display card.
//!
//! Renders a titled value with an optional caption, an optional trend
//! glyph and a colored icon badge. No state, no contract beyond "render
//! the given fields".

#[cfg(test)]
#[path = "metrics_card_test.rs"]
mod metrics_card_test;

use leptos::prelude::*;

/// Direction glyph shown next to the card title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
	/// Value is improving or growing.
	Up,
	/// Value is declining.
	Down,
	/// Value is flat.
	Neutral,
}

/// Accent color for the value text and the icon badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardColor {
	/// Default accent.
	#[default]
	Blue,
	/// Positive/healthy accent.
	Green,
	/// Alerting accent.
	Red,
	/// Secondary accent.
	Purple,
	/// Warning accent.
	Orange,
	/// Muted accent.
	Gray,
}

/// Class modifier for the value text.
fn value_class(color: CardColor) -> &'static str {
	match color {
		CardColor::Blue => "metrics-card-value metrics-card-value--blue",
		CardColor::Green => "metrics-card-value metrics-card-value--green",
		CardColor::Red => "metrics-card-value metrics-card-value--red",
		CardColor::Purple => "metrics-card-value metrics-card-value--purple",
		CardColor::Orange => "metrics-card-value metrics-card-value--orange",
		CardColor::Gray => "metrics-card-value metrics-card-value--gray",
	}
}

/// Class modifier for the icon badge.
fn badge_class(color: CardColor) -> &'static str {
	match color {
		CardColor::Blue => "metrics-card-badge metrics-card-badge--blue",
		CardColor::Green => "metrics-card-badge metrics-card-badge--green",
		CardColor::Red => "metrics-card-badge metrics-card-badge--red",
		CardColor::Purple => "metrics-card-badge metrics-card-badge--purple",
		CardColor::Orange => "metrics-card-badge metrics-card-badge--orange",
		CardColor::Gray => "metrics-card-badge metrics-card-badge--gray",
	}
}

/// Path data and class for the trend glyph.
fn trend_glyph(trend: Trend) -> (&'static str, &'static str) {
	match trend {
		Trend::Up => ("M7 17l9.2-9.2M17 17V7H7", "metrics-card-trend metrics-card-trend--up"),
		Trend::Down => (
			"M17 7l-9.2 9.2M7 7v10h10",
			"metrics-card-trend metrics-card-trend--down",
		),
		Trend::Neutral => ("M8 12h8", "metrics-card-trend metrics-card-trend--neutral"),
	}
}

const DEFAULT_ICON_PATH: &str = "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z";

/// Metrics display card.
#[component]
pub fn MetricsCard(
	/// Small heading above the value.
	#[prop(into)]
	title: String,
	/// The headline figure, preformatted by the caller.
	#[prop(into)]
	value: String,
	/// Optional caption under the value.
	#[prop(optional, into)]
	description: Option<String>,
	/// Optional trend glyph next to the title.
	#[prop(optional, into)]
	trend: Option<Trend>,
	/// Accent color, blue unless set.
	#[prop(optional)]
	color: CardColor,
	/// Makes the card clickable.
	#[prop(optional, into)]
	on_click: Option<Callback<()>>,
) -> impl IntoView {
	let card_class = if on_click.is_some() {
		"metrics-card metrics-card--clickable"
	} else {
		"metrics-card"
	};

	view! {
		<div
			class=card_class
			on:click=move |_| {
				if let Some(callback) = on_click {
					callback.run(());
				}
			}
		>
			<div class="metrics-card-body">
				<div class="metrics-card-header">
					<p class="metrics-card-title">{title}</p>
					{trend
						.map(|trend| {
							let (path, class) = trend_glyph(trend);
							view! {
								<svg class=class fill="none" stroke="currentColor" viewBox="0 0 24 24">
									<path
										stroke-linecap="round"
										stroke-linejoin="round"
										stroke-width="2"
										d=path
									></path>
								</svg>
							}
						})}
				</div>
				<p class=value_class(color)>{value}</p>
				{description.map(|text| view! { <p class="metrics-card-description">{text}</p> })}
			</div>
			<div class=badge_class(color)>
				<svg class="metrics-card-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
					<path
						stroke-linecap="round"
						stroke-linejoin="round"
						stroke-width="2"
						d=DEFAULT_ICON_PATH
					></path>
				</svg>
			</div>
		</div>
	}
}
