use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use super::render;
use super::resolver::InteractionResolver;
use super::types::InteractionSet;
use crate::components::svg_host;

/// Listener closures kept alive for the lifetime of the current mount.
type TriggerClosures = Rc<RefCell<Vec<Closure<dyn FnMut(MouseEvent)>>>>;
type SharedResolver = Rc<RefCell<Option<InteractionResolver>>>;

/// Interactive SVG diagram viewer.
///
/// Loads the document at `svg_path` into a container div the component owns
/// exclusively, then toggles visibility and styling of named sub-elements as
/// the rules in `interactions` are triggered by clicks. The surrounding view
/// tree renders only the container and its siblings, never the injected
/// subtree itself.
#[component]
pub fn InteractiveSvg(
	/// Location of the SVG document, fetched once per mount.
	#[prop(into)]
	svg_path: Signal<String>,
	/// Ordered rule set; a new value remounts the diagram from scratch.
	#[prop(into)]
	interactions: Signal<InteractionSet>,
	/// Optional heading above the diagram.
	#[prop(optional, into)]
	title: Option<String>,
	/// Optional paragraph under the heading.
	#[prop(optional, into)]
	description: Option<String>,
	/// Minimum height of the diagram stage.
	#[prop(default = "600px".to_string(), into)]
	height: String,
	/// Invoked with the trigger id on every selection, fire-and-forget.
	#[prop(optional, into)]
	on_interaction: Option<Callback<String>>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let svg_loaded = RwSignal::new(false);
	let resolver: SharedResolver = Rc::new(RefCell::new(None));
	let closures: TriggerClosures = Rc::new(RefCell::new(Vec::new()));

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let container: Element = container.into();
		let path = svg_path.get();
		let set = interactions.get();

		// A replaced source is fully torn down before the next one mounts,
		// so no elements or listeners survive across sources.
		closures.borrow_mut().clear();
		*resolver.borrow_mut() = None;
		container.set_inner_html("");
		svg_loaded.set(false);

		let (resolver_load, closures_load) = (resolver.clone(), closures.clone());
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

			let mut res = InteractionResolver::new(set);
			render::apply(&svg, &res.initialize());
			*resolver_load.borrow_mut() = Some(res);
			wire_triggers(&svg, &resolver_load, &closures_load, on_interaction);

			svg_loaded.set(true);
			info!("diagram source {path} mounted");
		});
	});

	view! {
		<div class="interactive-svg">
			{title.map(|title| view! { <h3 class="interactive-svg-title">{title}</h3> })}
			{description.map(|text| view! { <p class="interactive-svg-description">{text}</p> })}
			<div class="interactive-svg-stage" style=format!("min-height: {height};")>
				<div node_ref=container_ref class="interactive-svg-host"></div>
				{move || {
					(!svg_loaded.get())
						.then(|| {
							view! {
								<div class="interactive-svg-loading">"Loading visualization..."</div>
							}
						})
				}}
			</div>
		</div>
	}
}

/// Attaches click and hover handlers to every rule's trigger element.
/// A trigger id the document cannot resolve gets no handler.
fn wire_triggers(
	svg: &Element,
	resolver: &SharedResolver,
	closures: &TriggerClosures,
	on_interaction: Option<Callback<String>>,
) {
	let triggers: Vec<(String, String)> = {
		let guard = resolver.borrow();
		let Some(res) = guard.as_ref() else {
			return;
		};
		res.rules()
			.iter()
			.map(|rule| {
				let rest_opacity = rule
					.inactive_style
					.get("opacity")
					.cloned()
					.unwrap_or_else(|| "1".to_owned());
				(rule.trigger_id.clone(), rest_opacity)
			})
			.collect()
	};

	for (trigger_id, rest_opacity) in triggers {
		let Some(element) = svg_host::element_by_id(svg, &trigger_id) else {
			debug!("no trigger {trigger_id} in diagram, no handler attached");
			continue;
		};
		if let Some(style) = svg_host::style_of(&element) {
			let _ = style.set_property("cursor", "pointer");
			let _ = style.set_property("transition", "all 0.3s ease");
		}

		let (resolver_click, svg_click, id_click) =
			(resolver.clone(), svg.clone(), trigger_id.clone());
		let click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
			event.stop_propagation();
			let ops = {
				let mut guard = resolver_click.borrow_mut();
				let Some(res) = guard.as_mut() else {
					return;
				};
				res.select(&id_click)
			};
			render::apply(&svg_click, &ops);
			if let Some(callback) = on_interaction {
				callback.run(id_click.clone());
			}
		});
		let _ = element.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());

		// Hover feedback only while the trigger is not the active one.
		let (resolver_enter, element_enter, id_enter) =
			(resolver.clone(), element.clone(), trigger_id.clone());
		let enter = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
			if !is_active(&resolver_enter, &id_enter) {
				if let Some(style) = svg_host::style_of(&element_enter) {
					let _ = style.set_property("opacity", "0.8");
				}
			}
		});
		let _ =
			element.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());

		let (resolver_leave, element_leave, id_leave) =
			(resolver.clone(), element.clone(), trigger_id.clone());
		let leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
			if !is_active(&resolver_leave, &id_leave) {
				if let Some(style) = svg_host::style_of(&element_leave) {
					let _ = style.set_property("opacity", &rest_opacity);
				}
			}
		});
		let _ =
			element.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());

		let mut held = closures.borrow_mut();
		held.push(click);
		held.push(enter);
		held.push(leave);
	}
}

fn is_active(resolver: &SharedResolver, trigger_id: &str) -> bool {
	resolver
		.borrow()
		.as_ref()
		.and_then(InteractionResolver::active_trigger)
		.is_some_and(|active| active == trigger_id)
}
