use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};
use web_sys::Element;

use super::steps::{self, AnimationStep};
use crate::components::svg_host;

/// Staged diagram walkthrough.
///
/// Loads the document at `svg_path` once, then reveals the elements of each
/// step as the user walks forward. Elements keep their layout; only opacity
/// is driven, so the 0.5s transition can ease between states.
#[component]
pub fn AnimatedSvg(
	/// Location of the SVG document, fetched once per mount.
	#[prop(into)]
	svg_path: Signal<String>,
	/// Ordered walkthrough stages; a new value remounts the diagram.
	#[prop(into)]
	steps: Signal<Vec<AnimationStep>>,
	/// Optional heading above the diagram.
	#[prop(optional, into)]
	title: Option<String>,
	/// Labels for the per-step jump buttons; defaults to "Step n".
	#[prop(optional, into)]
	step_labels: Option<Vec<String>>,
	/// Render the per-step jump buttons.
	#[prop(default = true)]
	show_step_buttons: bool,
	/// Render the progress bar.
	#[prop(default = true)]
	show_progress: bool,
	/// Render the current step's caption.
	#[prop(default = true)]
	show_description: bool,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let svg_loaded = RwSignal::new(false);
	let current_step = RwSignal::new(0usize);
	let svg_el: Rc<RefCell<Option<Element>>> = Rc::new(RefCell::new(None));

	let svg_mount = svg_el.clone();
	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let container: Element = container.into();
		let path = svg_path.get();
		let stages = steps.get();

		*svg_mount.borrow_mut() = None;
		container.set_inner_html("");
		svg_loaded.set(false);
		current_step.set(0);

		let svg_load = svg_mount.clone();
		spawn_local(async move {
			let markup = match svg_host::fetch_svg(&path).await {
				Ok(markup) => markup,
				Err(err) => {
					error!("failed to load diagram source {path}: {err}");
					return;
				}
			};
			let Some(svg) = svg_host::inject(&container, &markup) else {
				error!("diagram source {path} contains no svg element");
				return;
			};

			prepare_elements(&svg, &stages);
			*svg_load.borrow_mut() = Some(svg);
			svg_loaded.set(true);
			info!("walkthrough source {path} mounted");
		});
	});

	let svg_step = svg_el.clone();
	Effect::new(move |_| {
		let current = current_step.get();
		if !svg_loaded.get() {
			return;
		}
		let guard = svg_step.borrow();
		let Some(svg) = guard.as_ref() else {
			return;
		};
		apply_step(svg, &steps.get_untracked(), current);
	});

	let at_start = move || current_step.get() == 0;
	let at_end = move || {
		let len = steps.get().len();
		len == 0 || current_step.get() + 1 >= len
	};
	let go_previous = move |_| current_step.update(|step| *step = step.saturating_sub(1));
	let go_next = move |_| {
		let len = steps.get().len();
		current_step.update(|step| *step = steps::clamp_step(len, *step + 1));
	};
	let go_reset = move |_| current_step.set(0);

	view! {
		<div class="animated-svg">
			{title.map(|title| view! { <h3 class="animated-svg-title">{title}</h3> })}
			<div class="animated-svg-stage">
				<div node_ref=container_ref class="animated-svg-host"></div>
				{move || {
					(!svg_loaded.get())
						.then(|| {
							view! { <div class="animated-svg-loading">"Loading visualization..."</div> }
						})
				}}
			</div>
			<div class="animated-svg-controls">
				<button class="step-nav" on:click=go_previous prop:disabled=at_start>
					"Previous"
				</button>
				<div class="step-counter">
					{move || format!("Step {} of {}", current_step.get() + 1, steps.get().len())}
				</div>
				<button class="step-nav" on:click=go_next prop:disabled=at_end>
					"Next"
				</button>
				<button class="step-nav step-nav--reset" on:click=go_reset>
					"Reset"
				</button>
			</div>
			{show_progress
				.then(|| {
					view! {
						<div class="step-progress">
							<div
								class="step-progress-fill"
								style=move || {
									format!(
										"width: {}%",
										steps::progress_percent(steps.get().len(), current_step.get()),
									)
								}
							></div>
						</div>
					}
				})}
			{show_description
				.then(|| {
					view! {
						<p class="step-description">
							{move || {
								steps
									.get()
									.get(current_step.get())
									.map(|step| step.description.clone())
									.unwrap_or_default()
							}}
						</p>
					}
				})}
			{show_step_buttons
				.then(move || {
					view! {
						<div class="step-buttons">
							{move || {
								let labels = step_labels.clone();
								steps
									.get()
									.into_iter()
									.enumerate()
									.map(|(index, step)| {
										let label = labels
											.as_ref()
											.and_then(|labels| labels.get(index).cloned())
											.unwrap_or_else(|| format!("Step {}", index + 1));
										view! {
											<button
												class=move || step_button_class(index, current_step.get())
												title=step.description.clone()
												on:click=move |_| current_step.set(index)
											>
												{label}
											</button>
										}
									})
									.collect_view()
							}}
						</div>
					}
				})}
		</div>
	}
}

fn step_button_class(index: usize, current: usize) -> &'static str {
	if index == current {
		"step-button step-button--current"
	} else if index < current {
		"step-button step-button--visited"
	} else {
		"step-button"
	}
}

/// Gives every animated element its transition and hides all but the first
/// step before anything is revealed.
fn prepare_elements(svg: &Element, stages: &[AnimationStep]) {
	for (index, stage) in stages.iter().enumerate() {
		for id in &stage.elements {
			let Some(element) = svg_host::element_by_id(svg, id) else {
				continue;
			};
			if let Some(style) = svg_host::style_of(&element) {
				let _ = style.set_property("transition", "opacity 0.5s ease-in-out");
				let _ = style.set_property("opacity", if index == 0 { "1" } else { "0" });
			}
		}
	}
}

fn apply_step(svg: &Element, stages: &[AnimationStep], current: usize) {
	for id in steps::revealed_ids(stages, current) {
		svg_host::set_opacity(svg, id, "1");
	}
	for id in steps::concealed_ids(stages, current) {
		svg_host::set_opacity(svg, id, "0");
	}
}
