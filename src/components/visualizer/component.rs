use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::state::VisualizerState;
use super::types::Variant;

/// Match the backing buffer to the canvas's layout size at the current
/// device pixel ratio, and scale the context so drawing stays in logical
/// units. Returns the logical size.
fn fit_backing_buffer(
	window: &Window,
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
) -> (f64, f64) {
	let dpr = window.device_pixel_ratio().max(1.0);
	let (w, h) = (
		f64::from(canvas.client_width()),
		f64::from(canvas.client_height()),
	);
	canvas.set_width((w * dpr) as u32);
	canvas.set_height((h * dpr) as u32);
	let _ = ctx.scale(dpr, dpr);
	(w, h)
}

/// Fold an epoch-milliseconds timestamp into a seed. Milliseconds since
/// 1970 exceed `u32::MAX` and a direct float cast saturates to the same
/// constant on every call, so the cast goes through `u64` and keeps the
/// low bits, which change every millisecond.
fn seed_from_clock(now_ms: f64) -> u32 {
	now_ms as u64 as u32
}

/// Class list for the `<canvas>`; skips the separator when the caller
/// adds no class of its own.
fn canvas_class(extra: &str) -> String {
	if extra.is_empty() {
		"visualizer-canvas".to_string()
	} else {
		format!("visualizer-canvas {extra}")
	}
}

/// Decorative animated graph bound to a `<canvas>`.
///
/// Every canvas runs its own state and animation loop. Rendering is best
/// effort: when the 2d context is unavailable the component leaves the
/// canvas blank and never schedules a frame.
#[component]
pub fn VisualizerCanvas(
	/// Scene to run; changing it rebuilds the graph in place.
	#[prop(into)]
	variant: Signal<Variant>,
	/// Extra classes for the `<canvas>` element.
	#[prop(optional, into)]
	class: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<VisualizerState>>> = Rc::new(RefCell::new(None));
	let state_init = state.clone();

	// Arena slots so the cleanup closure stays free of Rc captures. The
	// wasm closures are not Send; local storage keeps them reachable from
	// cleanup, which detaches and drops them at unmount.
	let frame_handle: StoredValue<Option<i32>> = StoredValue::new(None);
	let alive: StoredValue<bool> = StoredValue::new(true);
	let animate: StoredValue<Option<Closure<dyn FnMut(f64)>>, LocalStorage> =
		StoredValue::new_local(None);
	let resize_cb: StoredValue<Option<Closure<dyn FnMut()>>, LocalStorage> =
		StoredValue::new_local(None);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		// One loop and one listener per component instance.
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => return,
			},
			_ => {
				warn!("2d context unavailable, visualizer canvas stays blank");
				return;
			}
		};

		let (w, h) = fit_backing_buffer(&window, &canvas, &ctx);
		let seed = seed_from_clock(js_sys::Date::now());
		*state_init.borrow_mut() =
			Some(VisualizerState::new(variant.get_untracked(), w, h, seed));

		// Window resize refits the buffer and updates the bounds. The graph
		// itself is kept; regenerating on every resize tick would reshuffle
		// the scene while a drag is still in progress.
		let (state_resize, canvas_resize, ctx_resize) =
			(state_init.clone(), canvas.clone(), ctx.clone());
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = fit_backing_buffer(&win, &canvas_resize, &ctx_resize);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		});
		let _ = window
			.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
		resize_cb.set_value(Some(on_resize));

		// Self-rescheduling frame loop. The closure reads its own slot to
		// hand itself back to requestAnimationFrame; the JS handle is
		// cloned out first so the slot is not borrowed during the call.
		let state_anim = state_init.clone();
		let mut ctx_anim = ctx.clone();
		let frame = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
			if !alive.try_get_value().unwrap_or(false) {
				// A frame that slipped past the cancel must not draw again.
				if let Some(ref mut s) = *state_anim.borrow_mut() {
					s.stop();
				}
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.frame(&mut ctx_anim, now);
			}
			let Some(win) = web_sys::window() else {
				return;
			};
			let frame_fn = animate
				.try_with_value(|slot| slot.as_ref().map(|cb| cb.as_ref().clone()))
				.flatten();
			if let Some(frame_fn) = frame_fn {
				if let Ok(handle) = win.request_animation_frame(frame_fn.unchecked_ref()) {
					frame_handle.try_set_value(Some(handle));
				}
			}
		});
		if let Ok(handle) = window.request_animation_frame(frame.as_ref().unchecked_ref()) {
			frame_handle.set_value(Some(handle));
		}
		animate.set_value(Some(frame));
	});

	// Variant switches rebuild the graph inside the running loop.
	let state_variant = state.clone();
	Effect::new(move |_| {
		let variant = variant.get();
		if let Some(ref mut s) = *state_variant.borrow_mut() {
			s.set_variant(variant);
		}
	});

	on_cleanup(move || {
		alive.try_update_value(|alive| *alive = false);
		if let Some(window) = web_sys::window() {
			if let Some(handle) = frame_handle.try_get_value().flatten() {
				let _ = window.cancel_animation_frame(handle);
			}
			// Detach before the closure drops; a listener left behind
			// would fire into a dropped closure on the next resize.
			if let Some(cb) = resize_cb.try_update_value(|slot| slot.take()).flatten() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		// The frame closure drops with its slot; cleanup never runs from
		// inside its call, so the drop is safe.
		animate.try_update_value(|slot| slot.take());
	});

	view! { <canvas node_ref=canvas_ref class=canvas_class(&class) /> }
}

#[cfg(test)]
mod tests {
	use super::super::rng::Prng;
	use super::*;

	#[test]
	fn clock_seed_is_not_saturated() {
		// Epoch milliseconds sit far above u32::MAX; a saturating cast
		// would hand every mount the same constant.
		let seed = seed_from_clock(1_755_000_000_000.0);
		assert_ne!(seed, u32::MAX);
		assert_eq!(seed, 2_653_343_232);
	}

	#[test]
	fn mounts_at_different_times_seed_differently() {
		let first = seed_from_clock(1_755_000_000_000.0);
		let year_later = seed_from_clock(1_786_536_000_000.0);
		assert_ne!(first, seed_from_clock(1_755_000_000_001.0));
		assert_ne!(first, year_later);
		// Distinct even through the generator's modulus, so the two
		// mounts draw different streams.
		let mut a = Prng::new(first);
		let mut b = Prng::new(year_later);
		assert_ne!(a.next_f64(), b.next_f64());
	}

	#[test]
	fn class_attribute_has_no_trailing_space() {
		assert_eq!(canvas_class(""), "visualizer-canvas");
		assert_eq!(canvas_class("hero-visual"), "visualizer-canvas hero-visual");
	}
}
