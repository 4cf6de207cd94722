use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::{Footer, Header};
use crate::content::CURRICULUM;

/// Simulated document-analysis delay before the curriculum appears.
const PROCESSING_DELAY_MS: i32 = 2000;

/// Upload-and-curriculum flow.
///
/// The upload never leaves the browser: processing is a timer, and the
/// curriculum it "produces" is the canned one from `content`.
#[component]
pub fn Learn() -> impl IntoView {
	let file_name = RwSignal::new(None::<String>);
	let processing = RwSignal::new(false);
	let ready = RwSignal::new(false);
	let selected_plan = RwSignal::new(None::<&'static str>);
	let status = RwSignal::new(None::<String>);

	let on_file_change = move |ev: web_sys::Event| {
		let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
			return;
		};
		let name = input.files().and_then(|files| files.get(0)).map(|file| file.name());
		file_name.set(name);
		status.set(None);
	};

	let process = move |_| {
		if file_name.get().is_none() {
			status.set(Some("Please select a file to upload".into()));
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		processing.set(true);
		status.set(None);
		// The page may be gone by the time the timer fires.
		let done = Closure::once_into_js(move || {
			processing.try_set(false);
			ready.try_set(true);
		});
		let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
			done.unchecked_ref(),
			PROCESSING_DELAY_MS,
		);
	};

	view! {
		<Header />
		<main class="page">
			<section class="page-hero">
				<div class="container center">
					<h1>"Learn with Visual AI"</h1>
					<p>
						"Upload your materials and let our AI create a personalized visual learning experience."
					</p>
					<p class="tagline">"\u{201c}One picture is worth a thousand words\u{201d}"</p>
				</div>
			</section>

			<section class="section">
				<div class="container narrow">
					{move || status.get().map(|message| view! { <p class="status-line">{message}</p> })}
					<Show
						when=move || ready.get()
						fallback=move || {
							view! {
								<div class="upload-box">
									<h2>"Upload Your PDF"</h2>
									<p>
										"Start by uploading a PDF document. Our AI will analyze the content and create a personalized learning experience for you."
									</p>
									<label class="button secondary">
										"Choose File"
										<input
											class="hidden-input"
											type="file"
											accept=".pdf"
											on:change=on_file_change
										/>
									</label>
									{move || {
										file_name.get().map(|name| view! { <p class="file-name">{name}</p> })
									}}
									<button
										class="button primary"
										prop:disabled=move || {
											file_name.get().is_none() || processing.get()
										}
										on:click=process
									>
										{move || {
											if processing.get() { "Processing..." } else { "Process Document" }
										}}
									</button>
								</div>
							}
						}
					>
						<h2>{CURRICULUM.title}</h2>
						<p>
							"Your document has been processed. Choose a learning plan that fits your schedule:"
						</p>
						<div class="card-grid three">
							{CURRICULUM
								.plans
								.iter()
								.map(|plan| {
									let id = plan.id;
									view! {
										<div
											class="plan-card"
											class:selected=move || selected_plan.get() == Some(id)
											on:click=move |_| {
												selected_plan.set(Some(id));
												status.set(None);
											}
										>
											<h3>{plan.name}</h3>
											<p>{plan.description}</p>
											<p class="plan-duration">{format!("Duration: {}", plan.duration)}</p>
										</div>
									}
								})
								.collect_view()}
						</div>
						<h3 class="subsection-title">"Chapter Overview"</h3>
						<ol class="chapter-list">
							{CURRICULUM
								.chapters
								.iter()
								.map(|chapter| {
									view! {
										<li class="chapter-row">
											<span>{chapter.title}</span>
											<span class="chapter-duration">{chapter.duration}</span>
										</li>
									}
								})
								.collect_view()}
						</ol>
						<div class="center start-action">
							<Show
								when=move || selected_plan.get().is_some()
								fallback=move || {
									view! {
										<button
											class="button primary"
											on:click=move |_| {
												status
													.set(Some("Please select a learning plan first".into()))
											}
										>
											"Start Learning"
										</button>
									}
								}
							>
								<A href=format!("/learn/{}", CURRICULUM.chapters[0].id)>
									"Start Learning"
								</A>
							</Show>
						</div>
					</Show>
				</div>
			</section>
		</main>
		<Footer />
	}
}
