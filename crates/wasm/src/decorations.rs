use schoolpage_core::{date::format_date_attribute, forms::FormPolicy, nav, Config, Messages};
use tracing::{debug, error, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, Window};

use crate::dom::elements;

/// Blocks submission of delete forms and of any non-`get` form in the main
/// content area. Each form gets at most one handler; delete confirmation
/// wins over the generic notice.
///
/// # Errors
///
/// Fails when a configured selector is invalid or a listener cannot be
/// added.
pub fn intercept_forms(
	window: &Window,
	document: &Document,
	config: &Config,
) -> Result<(), JsValue> {
	let delete_forms =
		elements::<Element>(&document.query_selector_all(&config.delete_form_selector)?);

	for form in &delete_forms {
		block_submit(window, form, FormPolicy::ConfirmDelete, &config.messages)?;
	}

	let mut blocked = 0;

	for form in elements::<Element>(&document.query_selector_all(&config.write_form_selector)?) {
		let policy = FormPolicy::classify(
			form.get_attribute("method").as_deref(),
			form.matches(&config.delete_form_selector)?,
		);

		// delete forms were handled above
		if policy == FormPolicy::BlockWrite {
			block_submit(window, &form, policy, &config.messages)?;
			blocked += 1;
		}
	}

	debug!(delete = delete_forms.len(), write = blocked, "intercepting forms");

	Ok(())
}

fn block_submit(
	window: &Window,
	form: &Element,
	policy: FormPolicy,
	messages: &Messages,
) -> Result<(), JsValue> {
	let window = window.clone();
	let messages = messages.clone();
	let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
		event.prevent_default();

		let notice = policy.notice(&messages, |question| {
			window.confirm_with_message(question).unwrap_or(false)
		});

		if let Some(notice) = notice {
			if let Err(err) = window.alert_with_message(notice) {
				error!(?err, "could not show form notice");
			}
		}
	});

	form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
	on_submit.forget();

	Ok(())
}

/// Rewrites flagged date cells as `DD.MM.YYYY`. Cells with a malformed date
/// keep their text.
///
/// # Errors
///
/// Fails when the date selector is invalid.
pub fn format_dates(document: &Document, config: &Config) -> Result<(), JsValue> {
	for cell in elements::<Element>(&document.query_selector_all(&config.date_selector)?) {
		let Some(value) = cell.get_attribute(&config.date_attribute) else {
			continue;
		};

		match format_date_attribute(&value, &config.date_format) {
			Ok(text) => cell.set_text_content(Some(&text)),
			Err(err) => warn!(%err, "leaving date cell unformatted"),
		}
	}

	Ok(())
}

/// Marks the nav links that point at `current_path`.
///
/// # Errors
///
/// Fails when the nav selector or the active class name is invalid.
pub fn highlight_nav(
	document: &Document,
	current_path: &str,
	config: &Config,
) -> Result<(), JsValue> {
	for link in elements::<Element>(&document.query_selector_all(&config.nav_link_selector)?) {
		let Some(href) = link.get_attribute("href") else {
			continue;
		};

		if nav::is_active(&href, current_path) {
			link.class_list().add_1(&config.active_nav_class)?;
		}
	}

	Ok(())
}
