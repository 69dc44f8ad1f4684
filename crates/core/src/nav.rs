/// Last segment of a `/`-separated path or href.
#[must_use]
pub fn file_name(path: &str) -> &str {
	path.rsplit('/').next().unwrap_or(path)
}

/// Whether a nav link points at the page currently shown.
#[must_use]
pub fn is_active(href: &str, current_path: &str) -> bool {
	file_name(href) == file_name(current_path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn file_name_is_last_segment() {
		assert_eq!(file_name("/site/pages/schedule.html"), "schedule.html");
		assert_eq!(file_name("schedule.html"), "schedule.html");
		assert_eq!(file_name("/site/"), "");
	}

	#[test]
	fn matches_on_file_name_only() {
		let current = "/school/admin/schedule.html";

		assert!(is_active("schedule.html", current));
		assert!(is_active("../admin/schedule.html", current));
		assert!(!is_active("teachers.html", current));
		assert!(!is_active("edit_schedule.html", current));
	}

	#[test]
	fn directory_index() {
		assert!(is_active("./", "/school/"));
		assert!(!is_active("index.html", "/school/"));
	}
}
