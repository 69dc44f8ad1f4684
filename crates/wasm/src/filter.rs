use std::rc::Rc;

use schoolpage_core::{Config, FilterController};
use tracing::debug;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement};

use crate::dom::{elements, RowHandle, SelectHandle};

pub type ScheduleFilter = FilterController<SelectHandle, RowHandle>;

/// Wires the schedule table to its class and day selectors. Returns `None`
/// when the page has no schedule table or is missing a selector.
///
/// # Errors
///
/// Fails when a configured selector is invalid or a listener cannot be
/// added.
pub fn setup_schedule_filter(
	document: &Document,
	config: &Config,
) -> Result<Option<Rc<ScheduleFilter>>, JsValue> {
	let Some(table) = document.query_selector(&config.table_selector)? else {
		debug!(selector = %config.table_selector, "no schedule table, filtering disabled");
		return Ok(None);
	};

	let cell_selector: Rc<str> = Rc::from(config.cell_selector.as_str());
	let rows = elements::<HtmlElement>(&table.query_selector_all(&config.row_selector)?)
		.into_iter()
		.map(|row| RowHandle::new(row, Rc::clone(&cell_selector)))
		.collect();

	let class_filter = SelectHandle::by_id(document, &config.class_filter_id);
	let day_filter = SelectHandle::by_id(document, &config.day_filter_id);
	let selects = [class_filter.clone(), day_filter.clone()];

	let Some(controller) = FilterController::setup(rows, class_filter, day_filter) else {
		return Ok(None);
	};
	let controller = Rc::new(controller);

	for SelectHandle(select) in selects.into_iter().flatten() {
		let controller = Rc::clone(&controller);
		let on_change = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
			let visible = controller.apply();

			debug!(visible, "schedule filtered");
		});

		select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
		on_change.forget();
	}

	if let Some(form) = document.query_selector(&config.filter_form_selector)? {
		keep_client_side(&form)?;
	}

	Ok(Some(controller))
}

/// Stops the filter form from navigating; filtering happens on change.
fn keep_client_side(form: &Element) -> Result<(), JsValue> {
	let on_submit = Closure::<dyn FnMut(Event)>::new(|event: Event| event.prevent_default());

	form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
	on_submit.forget();

	Ok(())
}
