/// Localizable strings rendered around the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLabels {
	/// Title of the collapsible panel holding the list.
	pub panel_title: String,
	/// Marker appended to candidates that are not published.
	pub unpublished: String,
	/// Text of the overflow row.
	pub more: String,
	/// Optional description shown above the list.
	pub description: Option<String>,
}

impl Default for ViewLabels {
	fn default() -> Self {
		Self {
			panel_title: "Related content".into(),
			unpublished: "not published".into(),
			more: "... and others.".into(),
			description: None,
		}
	}
}

impl ViewLabels {
	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		let description = description.into();
		self.description = (!description.trim().is_empty()).then_some(description);
		self
	}
}
