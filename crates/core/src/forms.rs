use crate::Messages;

/// What happens when a form on the page is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPolicy {
	/// Ask first, then explain that nothing was deleted.
	ConfirmDelete,
	/// Explain that nothing was saved.
	BlockWrite,
	/// Leave the submission to the browser.
	Allow,
}

impl FormPolicy {
	/// Delete forms take precedence over the generic write interception so a
	/// form never gets both handlers. A missing `method` counts as a write.
	#[must_use]
	pub fn classify(method: Option<&str>, confirms_delete: bool) -> Self {
		if confirms_delete {
			return Self::ConfirmDelete;
		}

		match method {
			Some(method) if method.trim().eq_ignore_ascii_case("get") => Self::Allow,
			_ => Self::BlockWrite,
		}
	}

	#[must_use]
	pub fn prevents_submit(self) -> bool {
		!matches!(self, Self::Allow)
	}

	/// Resolves a submission to the notice to show, if any. `confirm` is only
	/// called for delete forms.
	#[must_use]
	pub fn notice<'m>(
		self,
		messages: &'m Messages,
		confirm: impl FnOnce(&str) -> bool,
	) -> Option<&'m str> {
		match self {
			Self::ConfirmDelete => {
				confirm(&messages.confirm_delete).then_some(messages.not_deleted.as_str())
			}
			Self::BlockWrite => Some(messages.not_saved.as_str()),
			Self::Allow => None,
		}
	}
}
