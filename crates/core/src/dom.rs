//! The slice of the DOM the filter controller drives.
//!
//! Handles are shared references into a live document, so mutation goes
//! through `&self`.

pub trait Selector {
	fn value(&self) -> String;

	/// Removes every option whose value is not `keep`.
	fn retain_option(&self, keep: &str);

	fn append_option(&self, value: &str, label: &str);
}

pub trait TableRow {
	/// Raw text of each cell, untrimmed.
	fn cell_texts(&self) -> Vec<String>;

	fn set_visible(&self, visible: bool);
}
