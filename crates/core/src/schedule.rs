use std::collections::BTreeSet;

use crate::ALL;

/// A schedule row as seen by the filter: class in column 0, day in column 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
	pub class: String,
	pub day: String,
}

impl Row {
	#[must_use]
	pub fn new(class: impl Into<String>, day: impl Into<String>) -> Self {
		Self {
			class: class.into(),
			day: day.into(),
		}
	}

	/// Builds a row from raw cell texts. Returns `None` for rows with fewer
	/// than two cells.
	#[must_use]
	pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Option<Self> {
		match cells {
			[class, day, ..] => Some(Self::new(class.as_ref().trim(), day.as_ref().trim())),
			_ => None,
		}
	}
}

/// One selector's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice {
	#[default]
	All,
	Only(String),
}

impl Choice {
	#[must_use]
	pub fn from_value(value: &str) -> Self {
		if value == ALL {
			Self::All
		} else {
			Self::Only(value.to_string())
		}
	}

	#[must_use]
	pub fn matches(&self, value: &str) -> bool {
		match self {
			Self::All => true,
			Self::Only(wanted) => wanted == value,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	pub class: Choice,
	pub day: Choice,
}

impl Selection {
	#[must_use]
	pub fn from_values(class: &str, day: &str) -> Self {
		Self {
			class: Choice::from_value(class),
			day: Choice::from_value(day),
		}
	}

	#[must_use]
	pub fn shows(&self, row: &Row) -> bool {
		self.class.matches(&row.class) && self.day.matches(&row.day)
	}
}

/// Unique values per filterable column, kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistinctValues {
	pub classes: BTreeSet<String>,
	pub days: BTreeSet<String>,
}

impl DistinctValues {
	#[must_use]
	pub fn collect<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Self {
		let mut values = Self::default();

		for row in rows {
			values.insert(row);
		}

		values
	}

	pub fn insert(&mut self, row: &Row) {
		self.classes.insert(row.class.clone());
		self.days.insert(row.day.clone());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rows() -> Vec<Row> {
		vec![
			Row::new("10A", "Mon"),
			Row::new("10B", "Tue"),
			Row::new("10A", "Tue"),
		]
	}

	#[test]
	fn row_needs_two_cells() {
		assert_eq!(Row::from_cells(&["10A"]), None);
		assert_eq!(Row::from_cells::<&str>(&[]), None);
		assert_eq!(
			Row::from_cells(&[" 10A\n", "  Mon ", "Math"]),
			Some(Row::new("10A", "Mon"))
		);
	}

	#[test]
	fn sentinel_matches_everything() {
		let choice = Choice::from_value("all");

		assert_eq!(choice, Choice::All);
		assert!(choice.matches("10A"));
		assert!(choice.matches(""));
	}

	#[test]
	fn class_only_selection() {
		let selection = Selection::from_values("10A", "all");
		let shown = rows()
			.iter()
			.map(|row| selection.shows(row))
			.collect::<Vec<_>>();

		assert_eq!(shown, [true, false, true]);
	}

	#[test]
	fn both_columns_must_match() {
		let rows = rows();

		for (class, day, expected) in [
			("all", "all", [true, true, true]),
			("10A", "Tue", [false, false, true]),
			("10B", "Mon", [false, false, false]),
			("all", "Tue", [false, true, true]),
		] {
			let selection = Selection::from_values(class, day);
			let shown = rows.iter().map(|row| selection.shows(row)).collect::<Vec<_>>();

			assert_eq!(shown, expected, "class={class} day={day}");
		}
	}

	#[test]
	fn distinct_values_are_sorted_and_unique() {
		let values = DistinctValues::collect(&rows());

		assert_eq!(values.classes.iter().collect::<Vec<_>>(), ["10A", "10B"]);
		assert_eq!(values.days.iter().collect::<Vec<_>>(), ["Mon", "Tue"]);
	}
}
