use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{Footer, Header};

/// 404 fallback with a route back home.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<Header />
		<main class="page">
			<div class="container center missing-lesson">
				<h1>"404"</h1>
				<p>"Oops! The page you're looking for doesn't exist."</p>
				<div class="cta-action">
					<A href="/">"Return to Home"</A>
				</div>
			</div>
		</main>
		<Footer />
	}
}
