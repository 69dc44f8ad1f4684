/// The page contract: where the enhancements look for things and what they
/// tell the user.
#[derive(Debug, Clone)]
pub struct Config {
	/// First match is the schedule table.
	pub table_selector: String,
	/// Relative to the table.
	pub row_selector: String,
	/// Relative to a row.
	pub cell_selector: String,
	pub class_filter_id: String,
	pub day_filter_id: String,
	pub filter_form_selector: String,

	pub delete_form_selector: String,
	pub write_form_selector: String,

	pub date_selector: String,
	pub date_attribute: String,
	/// `chrono` strftime pattern used for display.
	pub date_format: String,

	pub nav_link_selector: String,
	pub active_nav_class: String,

	/// Set on the root element once the page has been enhanced.
	pub enhanced_attribute: String,

	pub messages: Messages,
}

#[derive(Debug, Clone)]
pub struct Messages {
	pub confirm_delete: String,
	pub not_deleted: String,
	pub not_saved: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			table_selector: String::from("section table"),
			row_selector: String::from("tbody tr"),
			cell_selector: String::from("td"),
			class_filter_id: String::from("class_filter"),
			day_filter_id: String::from("day_filter"),
			filter_form_selector: String::from(".filters form[method=\"get\"]"),
			delete_form_selector: String::from(".delete-confirm"),
			write_form_selector: String::from("main form"),
			date_selector: String::from(".format-date"),
			date_attribute: String::from("data-date"),
			date_format: String::from("%d.%m.%Y"),
			nav_link_selector: String::from("nav ul li a"),
			active_nav_class: String::from("active-nav-link"),
			enhanced_attribute: String::from("data-schoolpage-enhanced"),
			messages: Messages::default(),
		}
	}
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			confirm_delete: String::from(
				"Вы уверены, что хотите удалить эту запись? Это действие нельзя отменить.",
			),
			not_deleted: String::from(
				"Внимание: в статичном режиме эта форма не отправляет данные на сервер. Запись не удалена.",
			),
			not_saved: String::from(
				"Внимание: в статичном режиме эта форма не отправляет данные на сервер. Запись не сохранена.",
			),
		}
	}
}
