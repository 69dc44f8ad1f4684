#![warn(clippy::pedantic)]

mod decorations;
mod dom;
mod filter;

use schoolpage_core::Config;
use tracing::{debug, error};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::Window;

pub use decorations::{format_dates, highlight_nav, intercept_forms};
pub use dom::{RowHandle, SelectHandle};
pub use filter::{setup_schedule_filter, ScheduleFilter};

/// # Errors
///
/// Fails when there is no window or document, or the load listener cannot
/// be added.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	console_error_panic_hook::set_once();
	// a second instantiation keeps the first subscriber
	let _ = tracing_wasm::try_set_as_global_default();

	let window = window()?;
	let document = window
		.document()
		.ok_or_else(|| JsValue::from_str("window has no document"))?;

	if document.ready_state() == "loading" {
		let on_ready = wasm_bindgen::closure::Closure::once_into_js(move || {
			enhance_window(&window, &Config::default());
		});

		document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
	} else {
		enhance_window(&window, &Config::default());
	}

	Ok(())
}

/// Applies every enhancement to the current page with the default page
/// contract. `start` already does this once the document has loaded; later
/// calls on the same page do nothing.
///
/// # Errors
///
/// Fails when there is no global window.
#[wasm_bindgen]
pub fn enhance() -> Result<(), JsValue> {
	enhance_window(&window()?, &Config::default());

	Ok(())
}

/// Runs each enhancement independently; one failing does not stop the
/// others. A page is enhanced at most once: the root element is marked with
/// `config.enhanced_attribute` so handlers are never registered twice.
pub fn enhance_window(window: &Window, config: &Config) {
	let Some(document) = window.document() else {
		error!("window has no document, nothing to enhance");
		return;
	};
	let Some(root) = document.document_element() else {
		error!("document has no root element, nothing to enhance");
		return;
	};

	if root.has_attribute(&config.enhanced_attribute) {
		debug!("page already enhanced");
		return;
	}

	report(
		"enhancement marker",
		root.set_attribute(&config.enhanced_attribute, ""),
	);

	report("form interception", intercept_forms(window, &document, config));
	report("date formatting", format_dates(&document, config));
	report(
		"navigation highlighting",
		window
			.location()
			.pathname()
			.and_then(|path| highlight_nav(&document, &path, config)),
	);
	report(
		"schedule filter",
		setup_schedule_filter(&document, config).map(drop),
	);
}

fn window() -> Result<Window, JsValue> {
	web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn report(part: &str, result: Result<(), JsValue>) {
	if let Err(err) = result {
		error!(part, ?err, "page enhancement failed");
	}
}
