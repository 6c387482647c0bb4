/// A single entry of the visible list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRow {
	/// A real candidate, rendered as a link to its reference.
	Link {
		/// Composite identity used by the controller's caches.
		key: String,
		title: String,
		href: String,
		published: bool,
	},
	/// Overflow placeholder signalling that more candidates exist.
	More,
}

impl ResultRow {
	#[must_use]
	pub fn is_more(&self) -> bool {
		matches!(self, ResultRow::More)
	}
}

/// Status line shown beneath the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Notifier {
	#[default]
	Hidden,
	/// A query is in flight.
	Searching(String),
	/// The last query returned nothing while the title field had text.
	NoResults(String),
}

impl Notifier {
	#[must_use]
	pub fn is_searching(&self) -> bool {
		matches!(self, Notifier::Searching(_))
	}

	#[must_use]
	pub fn text(&self) -> Option<&str> {
		match self {
			Notifier::Hidden => None,
			Notifier::Searching(text) | Notifier::NoResults(text) => Some(text),
		}
	}
}

/// Everything needed to render the widget at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
	pub rows: Vec<ResultRow>,
	pub notifier: Notifier,
	/// Whether the containing panel is open.
	pub expanded: bool,
	/// Whether the description line should be shown.
	pub description_visible: bool,
}
