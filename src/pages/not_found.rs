use leptos::prelude::*;

/// 404 page rendered by the router fallback.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p>"This page does not exist."</p>
			<a href="/">"Back to the diagrams"</a>
		</div>
	}
}
