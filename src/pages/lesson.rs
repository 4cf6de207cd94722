use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::visualizer::VisualizerCanvas;
use crate::components::{Footer, Header};
use crate::content::{self, Lesson as LessonData};

/// One chapter of the curriculum, with its companion canvas.
#[component]
pub fn Lesson() -> impl IntoView {
	let params = use_params_map();
	let lesson = Memo::new(move |_| {
		params
			.get()
			.get("chapter")
			.and_then(|id| content::lesson(&id))
	});

	view! {
		<Header />
		<main class="page">
			<div class="container">
				<div class="back-link">
					<A href="/learn">"\u{2190} Back to Curriculum"</A>
				</div>
				{move || match lesson.get() {
					Some(lesson) => lesson_view(lesson).into_any(),
					None => missing_view().into_any(),
				}}
			</div>
		</main>
		<Footer />
	}
}

fn lesson_view(lesson: &'static LessonData) -> impl IntoView {
	view! {
		<article class="lesson-grid">
			<div class="lesson-body">
				<h1>{lesson.title}</h1>
				<div class="prose" inner_html=lesson.body></div>
			</div>
			<aside class="lesson-aside">
				<div class="viz-frame">
					<VisualizerCanvas variant=lesson.visualizer />
				</div>
				<p class="tagline center">"\u{201c}One picture is worth a thousand words\u{201d}"</p>
			</aside>
		</article>
		<nav class="lesson-nav">
			<div class="nav-prev">
				{lesson
					.prev
					.map(|prev| view! { <A href=format!("/learn/{prev}")>"\u{2190} Previous Chapter"</A> })}
			</div>
			<div class="nav-next">
				{match lesson.next {
					Some(next) => {
						view! { <A href=format!("/learn/{next}")>"Next Chapter \u{2192}"</A> }.into_any()
					}
					None => view! { <A href="/learn">"Complete Course"</A> }.into_any(),
				}}
			</div>
		</nav>
	}
}

fn missing_view() -> impl IntoView {
	view! {
		<div class="center missing-lesson">
			<h2>"Lesson not found"</h2>
			<p>"Head back to the curriculum to pick a chapter."</p>
		</div>
	}
}
