//! Debounced, cached search state for one widget instance.
//!
//! The controller is a plain state machine: callers feed it input events and
//! responses together with the current [`Instant`], call [`SearchController::tick`]
//! when [`SearchController::next_deadline`] passes, and render
//! [`SearchController::snapshot`]. It never sleeps or spawns anything itself.

use std::time::{Duration, Instant};

use dupecheck_provider_api::{Facet, QueryValues};
use dupecheck_view::{Notifier, ResultRow, ViewSnapshot};
use tracing::{debug, warn};

use super::cache::{ItemCache, QueryCache};
use super::settings::ClientSettings;
use crate::endpoint::{QueryResponse, WireRecord, encode_query};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Timing knobs for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
	/// Quiet period after the last input before a query is sent.
	pub debounce: Duration,
	/// How long a request may stay unanswered.
	pub timeout: Duration,
}

impl Default for Timing {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

/// Coarse state reported for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
	Idle,
	/// A debounce timer is armed.
	Pending,
	/// A request was sent and no response has been applied yet.
	InFlight,
}

/// A query the caller must deliver to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
	/// Sequence number to hand back with the response.
	pub seq: u64,
	/// Full request address including the query string.
	pub url: String,
	pub values: QueryValues,
}

#[derive(Debug)]
struct PendingQuery {
	facet: Facet,
	text: String,
	deadline: Instant,
}

#[derive(Debug)]
struct InFlight {
	seq: u64,
	text: String,
	deadline: Instant,
}

pub struct SearchController {
	settings: ClientSettings,
	timing: Timing,
	pending: Option<PendingQuery>,
	in_flight: Option<InFlight>,
	last_seq: u64,
	title: String,
	searched: QueryCache,
	shown: ItemCache,
	rows: Vec<ResultRow>,
	notifier: Notifier,
	expanded: bool,
	auto_expanded: bool,
	description_visible: bool,
}

impl SearchController {
	#[must_use]
	pub fn new(settings: ClientSettings) -> Self {
		Self::with_timing(settings, Timing::default())
	}

	#[must_use]
	pub fn with_timing(settings: ClientSettings, timing: Timing) -> Self {
		Self {
			settings,
			timing,
			pending: None,
			in_flight: None,
			last_seq: 0,
			title: String::new(),
			searched: QueryCache::default(),
			shown: ItemCache::default(),
			rows: Vec::new(),
			notifier: Notifier::Hidden,
			expanded: false,
			auto_expanded: false,
			description_visible: true,
		}
	}

	#[must_use]
	pub fn settings(&self) -> &ClientSettings {
		&self.settings
	}

	#[must_use]
	pub fn state(&self) -> ControllerState {
		if self.pending.is_some() {
			ControllerState::Pending
		} else if self.in_flight.is_some() {
			ControllerState::InFlight
		} else {
			ControllerState::Idle
		}
	}

	#[must_use]
	pub fn query_cache(&self) -> &QueryCache {
		&self.searched
	}

	/// The title field changed to `text`.
	pub fn on_title_input(&mut self, text: &str, now: Instant) {
		self.title = text.to_string();
		if text.is_empty() {
			self.pending = None;
			if !self.settings.prepend_results {
				if let Some(in_flight) = self.in_flight.take() {
					debug!(seq = in_flight.seq, "title emptied; dropping request");
					self.stop_searching();
				}
				self.clear();
			}
			return;
		}
		if !self.request(Facet::Title, text, now) {
			// An earlier value of the same burst must not fire.
			self.pending = None;
		}
	}

	/// The tags field lost focus holding `text`.
	pub fn on_tags_blur(&mut self, text: &str, now: Instant) {
		self.request(Facet::Tags, text, now);
	}

	/// Arm the debounce timer for `text`. Returns `false` when the value
	/// does not warrant a query.
	fn request(&mut self, facet: Facet, text: &str, now: Instant) -> bool {
		if text.chars().count() < self.settings.min_characters {
			return false;
		}
		if self.settings.prepend_results && self.searched.contains(text) {
			debug!(query = text, "query already produced results; skipping");
			return false;
		}
		self.pending = Some(PendingQuery {
			facet,
			text: text.to_string(),
			deadline: now + self.timing.debounce,
		});
		true
	}

	/// Earliest instant at which [`tick`](Self::tick) has work to do.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		let pending = self.pending.as_ref().map(|pending| pending.deadline);
		let in_flight = self.in_flight.as_ref().map(|in_flight| in_flight.deadline);
		match (pending, in_flight) {
			(Some(a), Some(b)) => Some(a.min(b)),
			(a, b) => a.or(b),
		}
	}

	/// Expire a stalled request and fire the debounce timer when due.
	pub fn tick(&mut self, now: Instant) -> Option<QueryRequest> {
		if self
			.in_flight
			.as_ref()
			.is_some_and(|in_flight| in_flight.deadline <= now)
		{
			self.on_timeout();
		}
		if self.pending.as_ref()?.deadline > now {
			return None;
		}
		let pending = self.pending.take()?;
		Some(self.fire(pending, now))
	}

	fn fire(&mut self, pending: PendingQuery, now: Instant) -> QueryRequest {
		if !self.notifier.is_searching() {
			self.notifier = Notifier::Searching(self.settings.searching_string.clone());
		}

		let mut values = QueryValues::new();
		for (facet, value) in [
			(Facet::EntityId, &self.settings.entity_id),
			(Facet::EntityType, &self.settings.entity_type),
			(Facet::Bundle, &self.settings.bundle),
		] {
			if let Some(value) = value {
				values.set(facet, value.as_str());
			}
		}
		values.set(pending.facet, pending.text.as_str());

		self.last_seq += 1;
		let seq = self.last_seq;
		self.in_flight = Some(InFlight {
			seq,
			text: pending.text,
			deadline: now + self.timing.timeout,
		});
		let url = format!("{}?{}", self.settings.url, encode_query(&values));
		debug!(seq, %url, "sending query");
		QueryRequest { seq, url, values }
	}

	fn on_timeout(&mut self) {
		if let Some(in_flight) = self.in_flight.take() {
			warn!(seq = in_flight.seq, query = %in_flight.text, "query timed out");
			self.stop_searching();
		}
	}

	/// Apply the endpoint's answer to request `seq`.
	///
	/// `None` stands for a failed or unparseable response. Returns `false`
	/// when the response was stale and ignored.
	pub fn on_response(&mut self, seq: u64, response: Option<QueryResponse>) -> bool {
		let Some(in_flight) = self.in_flight.take_if(|in_flight| in_flight.seq == seq) else {
			debug!(seq, latest = self.last_seq, "discarding stale response");
			return false;
		};
		self.stop_searching();

		match response.filter(|response| !response.is_empty()) {
			Some(response) => {
				self.update(&response);
				self.searched.record(&in_flight.text);
			}
			None => self.update_empty(),
		}
		true
	}

	fn stop_searching(&mut self) {
		self.notifier = Notifier::Hidden;
	}

	fn update(&mut self, response: &QueryResponse) {
		let added = if self.settings.prepend_results {
			let mut fresh: Vec<ResultRow> = response
				.records()
				.filter(|record| !record.more)
				.filter_map(|record| {
					let key = ItemCache::key_for(record);
					self.shown.insert(&key).then(|| link_row(key, record))
				})
				.collect();
			let added = !fresh.is_empty();
			fresh.append(&mut self.rows);
			self.rows = fresh;
			added
		} else {
			self.description_visible = true;
			self.rows = response
				.records()
				.map(|record| {
					if record.more {
						ResultRow::More
					} else {
						link_row(ItemCache::key_for(record), record)
					}
				})
				.collect();
			!self.rows.is_empty()
		};

		if added && !self.auto_expanded {
			self.auto_expanded = true;
			self.expanded = true;
		}
	}

	fn update_empty(&mut self) {
		if self.settings.prepend_results {
			return;
		}
		self.description_visible = false;
		self.clear();
		if !self.title.is_empty() {
			self.notifier = Notifier::NoResults(self.settings.no_results_string.clone());
		}
	}

	/// Empty the visible list.
	pub fn clear(&mut self) {
		self.rows.clear();
	}

	/// Open or close the panel by hand. This never resets the one-shot
	/// auto-expand.
	pub fn set_expanded(&mut self, expanded: bool) {
		self.expanded = expanded;
	}

	/// Drop every timer, request and cache. The instance starts over, but
	/// sequence numbers keep counting so late answers stay stale.
	pub fn teardown(&mut self) {
		let settings = self.settings.clone();
		let last_seq = self.last_seq;
		*self = Self::with_timing(settings, self.timing);
		self.last_seq = last_seq;
	}

	#[must_use]
	pub fn snapshot(&self) -> ViewSnapshot {
		ViewSnapshot {
			rows: self.rows.clone(),
			notifier: self.notifier.clone(),
			expanded: self.expanded,
			description_visible: self.description_visible,
		}
	}
}

fn link_row(key: String, record: &WireRecord) -> ResultRow {
	ResultRow::Link {
		key,
		title: record.title.clone(),
		href: record.href.clone(),
		published: record.is_published(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::endpoint::MORE_KEY;

	fn settings(prepend: bool) -> ClientSettings {
		ClientSettings {
			url: "http://site/search".into(),
			prepend_results: prepend,
			min_characters: 3,
			entity_id: Some("42".into()),
			entity_type: Some("node".into()),
			bundle: None,
			searching_string: "Searching…".into(),
			no_results_string: "Nothing found".into(),
		}
	}

	fn record(id: &str) -> (String, WireRecord) {
		let record = WireRecord {
			title: format!("Item {id}"),
			status: 1,
			href: format!("/node/{id}"),
			more: false,
			entity_type: Some("node".into()),
			bundle: None,
			entity_id: Some(id.into()),
		};
		(format!("node--{id}"), record)
	}

	fn response(ids: &[&str]) -> QueryResponse {
		let mut response = QueryResponse::new();
		for id in ids {
			let (key, record) = record(id);
			response.push(key, record);
		}
		response
	}

	fn titles(controller: &SearchController) -> Vec<String> {
		controller
			.snapshot()
			.rows
			.iter()
			.map(|row| match row {
				ResultRow::Link { title, .. } => title.clone(),
				ResultRow::More => "more".into(),
			})
			.collect()
	}

	/// Type `text` and let the debounce expire, returning the request.
	fn search(controller: &mut SearchController, text: &str, now: Instant) -> QueryRequest {
		controller.on_title_input(text, now);
		controller
			.tick(now + DEFAULT_DEBOUNCE)
			.expect("debounce should fire")
	}

	#[test]
	fn rapid_input_sends_one_query_with_the_last_value() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		for (offset, text) in ["cat", "cats", "catsu"].into_iter().enumerate() {
			controller.on_title_input(text, start + Duration::from_millis(100 * offset as u64));
		}
		assert_eq!(controller.state(), ControllerState::Pending);
		assert_eq!(controller.tick(start + DEFAULT_DEBOUNCE), None);

		let deadline = controller.next_deadline().expect("armed");
		assert_eq!(deadline, start + Duration::from_millis(200) + DEFAULT_DEBOUNCE);
		let request = controller.tick(deadline).expect("fires once");
		assert_eq!(request.seq, 1);
		assert_eq!(request.values.title.as_deref(), Some("catsu"));
		assert_eq!(controller.tick(deadline), None);
		assert_eq!(controller.state(), ControllerState::InFlight);
	}

	#[test]
	fn requests_carry_fixed_scope_fields() {
		let mut controller = SearchController::new(settings(false));
		let request = search(&mut controller, "dog", Instant::now());
		assert_eq!(
			request.url,
			"http://site/search?title=dog&entity_id=42&entity_type=node"
		);
		assert_eq!(request.values.bundle, None);
		assert!(controller.snapshot().notifier.is_searching());
	}

	#[test]
	fn short_input_does_nothing() {
		let mut controller = SearchController::new(settings(false));
		controller.on_title_input("ab", Instant::now());
		assert_eq!(controller.state(), ControllerState::Idle);
		assert_eq!(controller.next_deadline(), None);
		assert_eq!(controller.snapshot(), SearchController::new(settings(false)).snapshot());
	}

	#[test]
	fn cumulative_mode_prepends_unseen_items() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(true));

		let first = search(&mut controller, "cat", start);
		assert!(controller.on_response(first.seq, Some(response(&["A", "B"]))));
		let later = start + Duration::from_secs(1);
		let second = search(&mut controller, "cats", later);
		assert!(controller.on_response(second.seq, Some(response(&["A", "C"]))));

		assert_eq!(titles(&controller), vec!["Item C", "Item A", "Item B"]);
		assert!(controller.query_cache().contains("cat"));
		assert!(controller.query_cache().contains("cats"));
	}

	#[test]
	fn cumulative_mode_skips_known_queries_and_keeps_history() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(true));
		let first = search(&mut controller, "cat", start);
		controller.on_response(first.seq, Some(response(&["A"])));

		controller.on_title_input("cat", start + Duration::from_secs(1));
		assert_eq!(controller.state(), ControllerState::Idle);

		let empty = search(&mut controller, "zebra", start + Duration::from_secs(2));
		controller.on_response(empty.seq, Some(QueryResponse::new()));
		controller.on_title_input("", start + Duration::from_secs(3));
		assert_eq!(titles(&controller), vec!["Item A"]);
		assert!(!controller.query_cache().contains("zebra"));
	}

	#[test]
	fn cumulative_mode_ignores_the_overflow_sentinel() {
		let mut controller = SearchController::new(settings(true));
		let request = search(&mut controller, "cat", Instant::now());
		let mut data = response(&["A"]);
		data.push(MORE_KEY, WireRecord::sentinel());
		controller.on_response(request.seq, Some(data));
		assert_eq!(titles(&controller), vec!["Item A"]);
	}

	#[test]
	fn replace_mode_replaces_and_renders_overflow() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		let first = search(&mut controller, "cat", start);
		controller.on_response(first.seq, Some(response(&["A", "B"])));

		let second = search(&mut controller, "cats", start + Duration::from_secs(1));
		let mut data = response(&["C"]);
		data.push(MORE_KEY, WireRecord::sentinel());
		controller.on_response(second.seq, Some(data));
		assert_eq!(titles(&controller), vec!["Item C", "more"]);
		assert!(controller.snapshot().description_visible);
	}

	#[test]
	fn replace_mode_empty_response_clears_and_notifies() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		let first = search(&mut controller, "cat", start);
		controller.on_response(first.seq, Some(response(&["A"])));

		let second = search(&mut controller, "dog", start + Duration::from_secs(1));
		controller.on_response(second.seq, Some(QueryResponse::new()));
		let snapshot = controller.snapshot();
		assert!(snapshot.rows.is_empty());
		assert_eq!(snapshot.notifier, Notifier::NoResults("Nothing found".into()));
		assert!(!snapshot.description_visible);
	}

	#[test]
	fn emptied_title_hides_no_results_notice() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		let request = search(&mut controller, "dog", start);
		controller.on_title_input("", start + Duration::from_secs(1));
		controller.on_response(request.seq, None);
		assert_eq!(controller.snapshot().notifier, Notifier::Hidden);
	}

	#[test]
	fn emptied_title_clears_immediately_in_replace_mode() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		let request = search(&mut controller, "cat", start);
		controller.on_response(request.seq, Some(response(&["A"])));
		controller.on_title_input("", start + Duration::from_secs(1));
		assert!(controller.snapshot().rows.is_empty());
		assert_eq!(controller.state(), ControllerState::Idle);
	}

	#[test]
	fn emptying_title_cancels_armed_query() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		controller.on_title_input("cat", start);
		controller.on_title_input("", start + Duration::from_millis(100));
		assert_eq!(controller.next_deadline(), None);
		assert_eq!(controller.tick(start + Duration::from_secs(1)), None);
		assert_eq!(controller.state(), ControllerState::Idle);
		assert!(controller.snapshot().rows.is_empty());
	}

	#[test]
	fn emptying_title_discards_the_running_request() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		let request = search(&mut controller, "cat", start);
		controller.on_title_input("", start + Duration::from_secs(1));
		assert_eq!(controller.state(), ControllerState::Idle);
		assert!(!controller.on_response(request.seq, Some(response(&["A"]))));
		assert!(controller.snapshot().rows.is_empty());
	}

	#[test]
	fn shortened_title_does_not_send_the_longer_value() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		controller.on_title_input("cats", start);
		controller.on_title_input("ca", start + Duration::from_millis(100));
		assert_eq!(controller.tick(start + Duration::from_secs(1)), None);
		assert_eq!(controller.state(), ControllerState::Idle);
	}

	#[test]
	fn panel_auto_expands_only_once() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		assert!(!controller.snapshot().expanded);

		let first = search(&mut controller, "cat", start);
		controller.on_response(first.seq, Some(response(&["A"])));
		assert!(controller.snapshot().expanded);

		controller.set_expanded(false);
		let second = search(&mut controller, "cats", start + Duration::from_secs(1));
		controller.on_response(second.seq, Some(response(&["B"])));
		assert!(!controller.snapshot().expanded);
	}

	#[test]
	fn stale_responses_are_discarded() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		let old = search(&mut controller, "cat", start);
		let new = search(&mut controller, "cats", start + Duration::from_secs(1));
		assert!(new.seq > old.seq);

		assert!(controller.on_response(new.seq, Some(response(&["B"]))));
		assert!(!controller.on_response(old.seq, Some(response(&["A"]))));
		assert_eq!(titles(&controller), vec!["Item B"]);
	}

	#[test]
	fn timeout_clears_searching_and_drops_late_response() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		let request = search(&mut controller, "cat", start);
		let fired_at = start + DEFAULT_DEBOUNCE;
		assert_eq!(controller.next_deadline(), Some(fired_at + DEFAULT_TIMEOUT));

		assert_eq!(controller.tick(fired_at + DEFAULT_TIMEOUT), None);
		assert_eq!(controller.state(), ControllerState::Idle);
		assert_eq!(controller.snapshot().notifier, Notifier::Hidden);
		assert!(!controller.on_response(request.seq, Some(response(&["A"]))));
		assert!(controller.snapshot().rows.is_empty());
	}

	#[test]
	fn tags_blur_queries_the_tags_facet() {
		let mut controller = SearchController::new(settings(false));
		let now = Instant::now();
		controller.on_tags_blur("", now);
		assert_eq!(controller.state(), ControllerState::Idle);
		controller.on_tags_blur("pets, cats", now);
		let request = controller.tick(now + DEFAULT_DEBOUNCE).expect("fires");
		assert_eq!(request.values.tags.as_deref(), Some("pets, cats"));
		assert_eq!(request.values.title, None);
	}

	#[test]
	fn teardown_forgets_everything() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(true));
		let request = search(&mut controller, "cat", start);
		controller.on_response(request.seq, Some(response(&["A"])));
		controller.teardown();
		assert!(controller.query_cache().is_empty());
		assert_eq!(controller.snapshot(), SearchController::new(settings(true)).snapshot());
	}

	#[test]
	fn responses_from_before_teardown_are_discarded() {
		let start = Instant::now();
		let mut controller = SearchController::new(settings(false));
		let old = search(&mut controller, "cat", start);
		controller.teardown();

		let new = search(&mut controller, "dog", start + Duration::from_secs(1));
		assert!(new.seq > old.seq);
		assert!(!controller.on_response(old.seq, Some(response(&["A"]))));
		assert!(controller.snapshot().rows.is_empty());
		assert!(controller.on_response(new.seq, Some(response(&["B"]))));
		assert_eq!(titles(&controller), vec!["Item B"]);
	}
}
