use leptos::prelude::*;
use leptos_router::components::A;

/// Fixed top navigation shared by every page.
#[component]
pub fn Header() -> impl IntoView {
	view! {
		<header class="site-header">
			<div class="container header-inner">
				<div class="brand">
					<A href="/">
						<span class="brand-mark">"V"</span>
						<span class="brand-name">"Visualify"</span>
					</A>
				</div>
				<nav class="site-nav">
					<A href="/">"Home"</A>
					<A href="/concepts">"Concepts"</A>
					<A href="/learn">"Learn"</A>
					<A href="/about">"About"</A>
				</nav>
			</div>
		</header>
	}
}
