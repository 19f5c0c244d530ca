use std::collections::HashMap;

use leptos::prelude::*;
use log::info;

use crate::components::animated_svg::{AnimatedSvg, AnimationStep};
use crate::components::interactive_svg::{InteractionRule, InteractionSet, InteractiveSvg};
use crate::components::metrics_card::{CardColor, MetricsCard, Trend};

/// Interaction rules for the ingestion-pipeline diagram.
fn pipeline_interactions() -> InteractionSet {
	let active_style = HashMap::from([
		("opacity".to_owned(), "1".to_owned()),
		(
			"filter".to_owned(),
			"drop-shadow(0 0 6px rgba(37, 99, 235, 0.5))".to_owned(),
		),
	]);
	let inactive_style = HashMap::from([("opacity".to_owned(), "0.55".to_owned())]);

	InteractionSet {
		rules: vec![
			InteractionRule {
				trigger_id: "stage-ingest".to_owned(),
				show_elements: vec!["detail-ingest".to_owned()],
				hide_elements: vec!["hint-overlay".to_owned()],
				is_default: true,
				active_style: active_style.clone(),
				inactive_style: inactive_style.clone(),
			},
			InteractionRule {
				trigger_id: "stage-enrich".to_owned(),
				show_elements: vec![
					"detail-enrich".to_owned(),
					"detail-enrich-legend".to_owned(),
				],
				hide_elements: vec!["hint-overlay".to_owned()],
				active_style: active_style.clone(),
				inactive_style: inactive_style.clone(),
				..Default::default()
			},
			InteractionRule {
				trigger_id: "stage-publish".to_owned(),
				show_elements: vec!["detail-publish".to_owned()],
				hide_elements: vec!["hint-overlay".to_owned()],
				active_style,
				inactive_style,
				..Default::default()
			},
		],
	}
}

/// Stages of the extraction walkthrough diagram.
fn extraction_steps() -> Vec<AnimationStep> {
	vec![
		AnimationStep {
			id: "sources".to_owned(),
			elements: vec!["box-sources".to_owned()],
			description: "Documents arrive from the configured sources.".to_owned(),
		},
		AnimationStep {
			id: "extract".to_owned(),
			elements: vec!["arrow-extract".to_owned(), "box-extract".to_owned()],
			description: "Entities and relations are extracted from each document.".to_owned(),
		},
		AnimationStep {
			id: "resolve".to_owned(),
			elements: vec!["arrow-resolve".to_owned(), "box-resolve".to_owned()],
			description: "Duplicate entities are resolved against the catalog.".to_owned(),
		},
		AnimationStep {
			id: "publish".to_owned(),
			elements: vec!["arrow-publish".to_owned(), "box-publish".to_owned()],
			description: "The consolidated graph is published for querying.".to_owned(),
		},
	]
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let interactions = Signal::derive(pipeline_interactions);
	let steps = Signal::derive(extraction_steps);

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

			<div class="home-page">
				<div class="metrics-row">
					<MetricsCard
						title="Active pipelines"
						value="12"
						trend=Trend::Up
						color=CardColor::Green
						description="Three added this quarter.".to_string()
					/>
					<MetricsCard
						title="Documents indexed"
						value="48,210"
						trend=Trend::Up
						description="Across all connected sources.".to_string()
					/>
					<MetricsCard
						title="Extraction failures"
						value="7"
						trend=Trend::Down
						color=CardColor::Red
					/>
					<MetricsCard
						title="Avg. latency"
						value="340ms"
						trend=Trend::Neutral
						color=CardColor::Gray
					/>
				</div>

				<InteractiveSvg
					svg_path="/assets/diagrams/ingestion-pipeline.svg".to_string()
					interactions=interactions
					title="Ingestion pipeline".to_string()
					description="Click a stage to see what it contributes.".to_string()
					on_interaction=Callback::new(|trigger: String| info!("stage selected: {trigger}"))
				/>

				<AnimatedSvg
					svg_path="/assets/diagrams/extraction-flow.svg".to_string()
					steps=steps
					title="Extraction walkthrough".to_string()
				/>
			</div>
		</ErrorBoundary>
	}
}
