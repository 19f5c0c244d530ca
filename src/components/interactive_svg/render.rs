use log::debug;
use web_sys::Element;

use super::resolver::ElementOp;
use crate::components::svg_host;

/// Applies a resolved plan to the mounted SVG subtree, in plan order.
///
/// Ids that do not exist in the subtree are skipped; a reference the
/// document cannot satisfy is not an error.
pub fn apply(svg: &Element, ops: &[ElementOp]) {
	for op in ops {
		match op {
			ElementOp::Show {
				id,
				with_descendants,
			} => {
				let Some(element) = svg_host::element_by_id(svg, id) else {
					debug!("no element {id} in diagram, skipping show");
					continue;
				};
				svg_host::set_shown(&element);
				if *with_descendants {
					svg_host::show_descendants(&element);
				}
			}
			ElementOp::Hide { id } => {
				let Some(element) = svg_host::element_by_id(svg, id) else {
					debug!("no element {id} in diagram, skipping hide");
					continue;
				};
				svg_host::set_hidden(&element);
			}
			ElementOp::Style { id, props } => {
				let Some(element) = svg_host::element_by_id(svg, id) else {
					debug!("no element {id} in diagram, skipping style update");
					continue;
				};
				svg_host::apply_style(&element, props);
			}
		}
	}
}
