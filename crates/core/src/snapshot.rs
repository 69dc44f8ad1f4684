use std::io;

use select::{
	document::Document,
	node::Node,
	predicate::{Name, Predicate},
};

use crate::schedule::{DistinctValues, Row, Selection};

/// The schedule table of a static page, read into typed rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
	rows: Vec<Row>,
}

impl Schedule {
	/// Reads the first `section table` of the page. A page without one yields
	/// an empty schedule.
	#[must_use]
	pub fn from_html(html: &str) -> Self {
		Self::from_document(&Document::from(html))
	}

	/// # Errors
	///
	/// Fails when `reader` does.
	pub fn from_read<R: io::Read>(reader: R) -> io::Result<Self> {
		Document::from_read(reader).map(|document| Self::from_document(&document))
	}

	fn from_document(document: &Document) -> Self {
		let Some(table) = document
			.find(Name("section").descendant(Name("table")))
			.next()
		else {
			return Self::default();
		};

		let rows = table
			.find(Name("tbody").descendant(Name("tr")))
			.filter_map(|tr| Row::from_cells(&cell_texts(&tr)))
			.collect();

		Self { rows }
	}

	#[must_use]
	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	#[must_use]
	pub fn distinct_values(&self) -> DistinctValues {
		DistinctValues::collect(&self.rows)
	}

	/// Rows a page would show for `selection`, in table order.
	pub fn visible<'a>(
		&'a self,
		selection: &'a Selection,
	) -> impl Iterator<Item = &'a Row> + 'a {
		self.rows.iter().filter(move |row| selection.shows(row))
	}
}

fn cell_texts(tr: &Node) -> Vec<String> {
	tr.find(Name("td")).map(|td| td.text()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn page_without_table() {
		let schedule = Schedule::from_html("<main><p>Нет расписания</p></main>");

		assert!(schedule.rows().is_empty());
	}

	#[test]
	fn table_outside_section_is_ignored() {
		let schedule = Schedule::from_html(
			"<table><tbody><tr><td>10A</td><td>Mon</td></tr></tbody></table>",
		);

		assert!(schedule.rows().is_empty());
	}

	#[test]
	fn header_rows_are_not_schedule_rows() {
		let schedule = Schedule::from_html(
			"<section><table>\
				<thead><tr><th>Класс</th><th>День</th></tr></thead>\
				<tbody><tr><td> 9B </td><td>Fri</td></tr></tbody>\
			</table></section>",
		);

		assert_eq!(schedule.rows(), [Row::new("9B", "Fri")]);
	}
}
