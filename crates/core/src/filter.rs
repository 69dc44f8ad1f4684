use tracing::debug;

use crate::{
	dom::{Selector, TableRow},
	schedule::{DistinctValues, Row, Selection},
	ALL,
};

/// Makes a schedule table filterable by class and day.
///
/// Holds no derived state: every pass reads the rows and selectors again.
#[derive(Debug)]
pub struct FilterController<S, R> {
	class_filter: S,
	day_filter: S,
	rows: Vec<R>,
}

impl<S: Selector, R: TableRow> FilterController<S, R> {
	#[must_use]
	pub fn new(rows: Vec<R>, class_filter: S, day_filter: S) -> Self {
		Self {
			class_filter,
			day_filter,
			rows,
		}
	}

	/// Populates both selectors and runs the first filter pass. Returns `None`
	/// when either selector is missing.
	#[must_use]
	pub fn setup(rows: Vec<R>, class_filter: Option<S>, day_filter: Option<S>) -> Option<Self> {
		let (Some(class_filter), Some(day_filter)) = (class_filter, day_filter) else {
			debug!("schedule filters not found, filtering disabled");
			return None;
		};

		let controller = Self::new(rows, class_filter, day_filter);

		controller.populate();
		controller.apply();

		Some(controller)
	}

	#[must_use]
	pub fn rows(&self) -> &[R] {
		&self.rows
	}

	#[must_use]
	pub fn distinct_values(&self) -> DistinctValues {
		let mut values = DistinctValues::default();

		for row in self.rows.iter().filter_map(read_row) {
			values.insert(&row);
		}

		values
	}

	/// Replaces the selectors' options with the table's distinct values,
	/// keeping the `all` option.
	pub fn populate(&self) -> DistinctValues {
		let values = self.distinct_values();

		fill(&self.class_filter, &values.classes);
		fill(&self.day_filter, &values.days);

		debug!(
			classes = values.classes.len(),
			days = values.days.len(),
			"populated schedule filters"
		);

		values
	}

	#[must_use]
	pub fn selection(&self) -> Selection {
		Selection::from_values(&self.class_filter.value(), &self.day_filter.value())
	}

	/// Shows the rows matching the current selection and hides the rest.
	/// Rows with fewer than two cells are not touched. Returns the number of
	/// rows left visible.
	pub fn apply(&self) -> usize {
		let selection = self.selection();
		let mut visible = 0;

		for handle in &self.rows {
			let Some(row) = read_row(handle) else {
				continue;
			};

			let shown = selection.shows(&row);

			handle.set_visible(shown);
			visible += usize::from(shown);
		}

		visible
	}
}

fn read_row<R: TableRow>(handle: &R) -> Option<Row> {
	Row::from_cells(&handle.cell_texts())
}

fn fill<'a, S: Selector>(selector: &S, values: impl IntoIterator<Item = &'a String>) {
	selector.retain_option(ALL);

	for value in values {
		selector.append_option(value, value);
	}
}
