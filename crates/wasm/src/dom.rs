use std::rc::Rc;

use schoolpage_core::dom::{Selector, TableRow};
use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlOptionElement, HtmlSelectElement, NodeList};

/// Elements of a query result that are of type `T`, in document order.
pub(crate) fn elements<T: JsCast>(list: &NodeList) -> Vec<T> {
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<T>().ok())
		.collect()
}

#[derive(Debug, Clone)]
pub struct SelectHandle(pub HtmlSelectElement);

impl SelectHandle {
	pub(crate) fn by_id(document: &web_sys::Document, id: &str) -> Option<Self> {
		document
			.get_element_by_id(id)
			.and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
			.map(Self)
	}

	#[must_use]
	pub fn option_values(&self) -> Vec<String> {
		self.options().iter().map(HtmlOptionElement::value).collect()
	}

	fn options(&self) -> Vec<HtmlOptionElement> {
		(0..self.0.length())
			.filter_map(|i| self.0.item(i))
			.filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
			.collect()
	}
}

impl Selector for SelectHandle {
	fn value(&self) -> String {
		self.0.value()
	}

	fn retain_option(&self, keep: &str) {
		for option in self.options() {
			if option.value() != keep {
				option.remove();
			}
		}
	}

	fn append_option(&self, value: &str, label: &str) {
		let appended = HtmlOptionElement::new_with_text_and_value(label, value)
			.and_then(|option| self.0.append_child(&option));

		if let Err(err) = appended {
			error!(value, ?err, "could not add filter option");
		}
	}
}

#[derive(Debug, Clone)]
pub struct RowHandle {
	row: HtmlElement,
	cell_selector: Rc<str>,
}

impl RowHandle {
	pub(crate) fn new(row: HtmlElement, cell_selector: Rc<str>) -> Self {
		Self { row, cell_selector }
	}

	#[must_use]
	pub fn element(&self) -> &HtmlElement {
		&self.row
	}
}

impl TableRow for RowHandle {
	fn cell_texts(&self) -> Vec<String> {
		match self.row.query_selector_all(&self.cell_selector) {
			Ok(cells) => elements::<Element>(&cells)
				.iter()
				.map(|cell| cell.text_content().unwrap_or_default())
				.collect(),
			Err(err) => {
				error!(selector = %self.cell_selector, ?err, "could not read schedule cells");
				Vec::new()
			}
		}
	}

	fn set_visible(&self, visible: bool) {
		// an empty value drops the inline rule and restores the stylesheet's
		let display = if visible { "" } else { "none" };

		if let Err(err) = self.row.style().set_property("display", display) {
			error!(?err, "could not change schedule row visibility");
		}
	}
}
