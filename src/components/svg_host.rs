//! DOM-side helpers for components that own an injected SVG subtree.
//!
//! Everything here is a thin effect edge: fetch the document, put it in the
//! container, look elements up by id and write style properties. Decisions
//! about *what* to show or hide live with the callers.

use std::collections::HashMap;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element};

/// Fetches an SVG document as text.
pub async fn fetch_svg(path: &str) -> Result<String, String> {
	let response = gloo_net::http::Request::get(path)
		.send()
		.await
		.map_err(|err| err.to_string())?;
	if !response.ok() {
		return Err(format!("request failed with status {}", response.status()));
	}
	response.text().await.map_err(|err| err.to_string())
}

/// Replaces the container's content with the fetched markup and returns the
/// root `<svg>` element, sized to fill the container.
pub fn inject(container: &Element, markup: &str) -> Option<Element> {
	container.set_inner_html(markup);
	let svg = container.query_selector("svg").ok().flatten()?;
	let _ = svg.set_attribute("width", "100%");
	let _ = svg.set_attribute("height", "100%");
	Some(svg)
}

/// Looks an element up by id, scoped to the mounted subtree.
pub fn element_by_id(root: &Element, id: &str) -> Option<Element> {
	root.query_selector(&format!("#{id}")).ok().flatten()
}

/// Inline style handle for either an SVG or an HTML element.
pub fn style_of(element: &Element) -> Option<CssStyleDeclaration> {
	if let Some(svg) = element.dyn_ref::<web_sys::SvgElement>() {
		return Some(svg.style());
	}
	element
		.dyn_ref::<web_sys::HtmlElement>()
		.map(|html| html.style())
}

/// Makes an element visible. Display, visibility and opacity are always set
/// together so the three properties never disagree across renderers.
pub fn set_shown(element: &Element) {
	if let Some(style) = style_of(element) {
		let _ = style.set_property("display", "block");
		let _ = style.set_property("visibility", "visible");
		let _ = style.set_property("opacity", "1");
	}
}

/// Hides an element, counterpart of [`set_shown`].
pub fn set_hidden(element: &Element) {
	if let Some(style) = style_of(element) {
		let _ = style.set_property("display", "none");
		let _ = style.set_property("visibility", "hidden");
		let _ = style.set_property("opacity", "0");
	}
}

/// Propagates the shown state through a subtree, clearing any hidden state
/// descendants may carry. The inline `display` override is removed rather
/// than forced so each descendant falls back to its own default.
pub fn show_descendants(element: &Element) {
	let Ok(descendants) = element.query_selector_all("*") else {
		return;
	};
	for index in 0..descendants.length() {
		let Some(node) = descendants.item(index) else {
			continue;
		};
		let Some(child) = node.dyn_ref::<Element>() else {
			continue;
		};
		if let Some(style) = style_of(child) {
			let _ = style.remove_property("display");
			let _ = style.set_property("visibility", "visible");
			let _ = style.set_property("opacity", "1");
		}
	}
}

/// Sets only the opacity of the element with `id`, if present.
pub fn set_opacity(root: &Element, id: &str, value: &str) {
	let Some(element) = element_by_id(root, id) else {
		debug!("no element {id} in diagram, skipping opacity update");
		return;
	};
	if let Some(style) = style_of(&element) {
		let _ = style.set_property("opacity", value);
	}
}

/// Applies a map of style properties to an element.
pub fn apply_style(element: &Element, props: &HashMap<String, String>) {
	if let Some(style) = style_of(element) {
		for (key, value) in props {
			let _ = style.set_property(key, value);
		}
	}
}
