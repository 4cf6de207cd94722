use leptos::prelude::*;
use leptos_router::components::A;

/// Site-wide footer with explore links and the current year.
#[component]
pub fn Footer() -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();

	view! {
		<footer class="site-footer">
			<div class="container footer-grid">
				<div class="footer-brand">
					<span class="brand-name">"Visualify"</span>
					<p>
						"Learn any topic through interactive and intuitive visual representations. One picture is worth a thousand words."
					</p>
				</div>
				<div class="footer-col">
					<h3>"Explore"</h3>
					<ul>
						<li>
							<A href="/">"Home"</A>
						</li>
						<li>
							<A href="/concepts">"Concepts"</A>
						</li>
						<li>
							<A href="/learn">"Learn"</A>
						</li>
						<li>
							<A href="/about">"About"</A>
						</li>
					</ul>
				</div>
				<div class="footer-col">
					<h3>"Resources"</h3>
					<ul>
						<li>
							<a href="https://github.com" target="_blank" rel="noopener noreferrer">
								"GitHub"
							</a>
						</li>
						<li>
							<a href="https://twitter.com" target="_blank" rel="noopener noreferrer">
								"Twitter"
							</a>
						</li>
					</ul>
				</div>
			</div>
			<div class="container footer-bottom">
				<p>{format!("© {year} Visualify. All rights reserved.")}</p>
			</div>
		</footer>
	}
}
