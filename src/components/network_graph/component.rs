use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::config::ChartConfig;
use super::details::{DetailPanel, NodeDetails};
use super::legend::Legend;
use super::palette::LegendEntry;
use super::render;
use super::state::{ChartState, Selection};
use super::types::{Point, Record};

type Shared<T> = Rc<RefCell<Option<T>>>;

/// Sizes the canvas to the window or its parent and returns the new size.
fn fit_canvas(
	canvas: &HtmlCanvasElement,
	window: &Window,
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
) -> (f64, f64) {
	let (w, h) = if fullscreen {
		(
			window
				.inner_width()
				.ok()
				.and_then(|v| v.as_f64())
				.unwrap_or(800.0),
			window
				.inner_height()
				.ok()
				.and_then(|v| v.as_f64())
				.unwrap_or(600.0),
		)
	} else {
		(
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		)
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w, h)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

fn pointer(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Force-directed research network drawn on a canvas, with legend and
/// detail panel. Any change to `data` or a selector rebuilds the chart.
#[component]
pub fn NetworkGraphCanvas(
	/// Dataset rows.
	#[prop(into)]
	data: Signal<Vec<Record>>,
	/// Column that sizes nodes.
	#[prop(into)]
	size_column: Signal<String>,
	/// Column that produces secondary links.
	#[prop(into)]
	secondary_column: Signal<String>,
	/// Design constants.
	#[prop(optional)]
	config: ChartConfig,
	/// Fill the window and follow its resizes.
	#[prop(default = false)]
	fullscreen: bool,
	/// Fixed width; defaults to the parent's.
	#[prop(default = None)]
	width: Option<f64>,
	/// Fixed height; defaults to the parent's.
	#[prop(default = None)]
	height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Shared<ChartState> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let (ready, set_ready) = signal(false);
	let (hovering, set_hovering) = signal(false);
	let (legend, set_legend) = signal(Vec::<LegendEntry>::new());
	let (details, set_details) = signal(None::<NodeDetails>);
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rows = data.get();
		let selection = Selection {
			size_column: size_column.get(),
			secondary_column: secondary_column.get(),
		};
		let Some(window) = web_sys::window() else {
			log::error!("no window available, chart not started");
			return;
		};

		let (w, h) = fit_canvas(&canvas, &window, fullscreen, width, height);
		{
			let mut slot = state_init.borrow_mut();
			match slot.as_mut() {
				Some(s) => {
					s.resize(w, h);
					s.rebuild(&rows, &selection);
				}
				None => {
					let mut s = ChartState::new(config.clone(), &rows, &selection, w, h);
					let window_width = window
						.inner_width()
						.ok()
						.and_then(|v| v.as_f64())
						.unwrap_or(w);
					s.begin_initial_zoom(window_width, js_sys::Date::now());
					*slot = Some(s);
				}
			}
			if let Some(s) = slot.as_ref() {
				set_legend.set(s.legend.clone());
			}
		}
		set_details.set(None);
		set_hovering.set(false);

		if animate_init.borrow().is_some() {
			return;
		}

		let Some(ctx) = context_2d(&canvas) else {
			log::error!("canvas has no 2d context, chart not started");
			return;
		};

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = fit_canvas(&canvas_resize, &win, true, None, None);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.advance_zoom(js_sys::Date::now());
				s.tick(0.016);
				render::render(s, &ctx);
				if !ready.get_untracked() {
					log::debug!("first frame drawn, enabling pointer interaction");
					set_ready.set(true);
				}
			}
			if let Some(ref cb) = *animate_inner.borrow()
				&& let Some(win) = web_sys::window()
			{
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.start_pan(pointer(&canvas, &ev));
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if !ready.get_untracked() {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let at = pointer(&canvas, &ev);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pan_to(at);
			let hovered = s.pointer_move(at);
			set_hovering.set(hovered.is_some());
			set_details.set(s.details());
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_pan();
		}
	};

	let state_click = state.clone();
	let on_click = move |_: MouseEvent| {
		if !ready.get_untracked() {
			return;
		}
		if let Some(ref mut s) = *state_click.borrow_mut() {
			s.click();
			set_details.set(s.details());
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		set_hovering.set(false);
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
			set_details.set(s.details());
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let at = pointer(&canvas, &ev);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.wheel(at, ev.delta_y());
		}
	};

	view! {
		<div class="network-graph">
			<canvas
				node_ref=canvas_ref
				class="network-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:click=on_click
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style:display="block"
				style:cursor=move || if hovering.get() { "pointer" } else { "default" }
			/>
			<Legend entries=legend />
			<DetailPanel details=details />
		</div>
	}
}
