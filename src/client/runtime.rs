//! Threaded driver for a [`SearchController`].

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use dupecheck_view::ViewSnapshot;
use tracing::debug;

use super::controller::{ControllerState, QueryRequest, SearchController};
use super::transport::QueryTransport;
use crate::endpoint::QueryResponse;

/// Messages accepted by the controller thread.
#[derive(Debug)]
pub enum ControllerEvent {
	TitleInput(String),
	TagsBlur(String),
	SetExpanded(bool),
	Response {
		seq: u64,
		response: Option<QueryResponse>,
	},
	Teardown,
	/// No more input will arrive; exit once the controller is idle.
	Close,
	Shutdown,
}

/// Owns a controller running on its own thread.
///
/// Input goes in through the event channel, rendered snapshots come out of
/// [`snapshots`](Self::snapshots) whenever they change.
pub struct ControllerHandle {
	events: Sender<ControllerEvent>,
	snapshots: Receiver<ViewSnapshot>,
	worker: Option<JoinHandle<()>>,
}

impl ControllerHandle {
	pub fn spawn(controller: SearchController, transport: Arc<dyn QueryTransport>) -> Self {
		let (event_tx, event_rx) = mpsc::channel();
		let (snapshot_tx, snapshot_rx) = mpsc::channel();
		let loop_tx = event_tx.clone();
		let worker = thread::spawn(move || {
			worker_loop(controller, transport, event_rx, loop_tx, snapshot_tx);
		});
		Self {
			events: event_tx,
			snapshots: snapshot_rx,
			worker: Some(worker),
		}
	}

	pub fn title_input(&self, text: impl Into<String>) {
		self.send(ControllerEvent::TitleInput(text.into()));
	}

	pub fn tags_blur(&self, text: impl Into<String>) {
		self.send(ControllerEvent::TagsBlur(text.into()));
	}

	pub fn set_expanded(&self, expanded: bool) {
		self.send(ControllerEvent::SetExpanded(expanded));
	}

	pub fn teardown(&self) {
		self.send(ControllerEvent::Teardown);
	}

	/// Let outstanding work finish, then stop. The snapshot channel closes
	/// after the last snapshot is published.
	pub fn close(&self) {
		self.send(ControllerEvent::Close);
	}

	/// A sender for feeding events from another thread.
	#[must_use]
	pub fn sender(&self) -> Sender<ControllerEvent> {
		self.events.clone()
	}

	fn send(&self, event: ControllerEvent) {
		if self.events.send(event).is_err() {
			debug!("controller thread has exited");
		}
	}

	#[must_use]
	pub fn snapshots(&self) -> &Receiver<ViewSnapshot> {
		&self.snapshots
	}

	/// Stop the controller thread and wait for it.
	pub fn shutdown(mut self) {
		self.stop();
	}

	fn stop(&mut self) {
		let _ = self.events.send(ControllerEvent::Shutdown);
		if let Some(worker) = self.worker.take() {
			let _ = worker.join();
		}
	}
}

impl Drop for ControllerHandle {
	fn drop(&mut self) {
		self.stop();
	}
}

fn worker_loop(
	mut controller: SearchController,
	transport: Arc<dyn QueryTransport>,
	event_rx: Receiver<ControllerEvent>,
	event_tx: Sender<ControllerEvent>,
	snapshot_tx: Sender<ViewSnapshot>,
) {
	let mut published = controller.snapshot();
	let mut closing = false;
	loop {
		if let Some(request) = controller.tick(Instant::now()) {
			dispatch(request, Arc::clone(&transport), event_tx.clone());
		}

		let current = controller.snapshot();
		if current != published {
			if snapshot_tx.send(current.clone()).is_err() {
				break;
			}
			published = current;
		}
		if closing && controller.state() == ControllerState::Idle {
			break;
		}

		let event = match controller.next_deadline() {
			Some(deadline) => {
				event_rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
			}
			None => event_rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
		};
		let now = Instant::now();
		match event {
			Ok(ControllerEvent::TitleInput(text)) => controller.on_title_input(&text, now),
			Ok(ControllerEvent::TagsBlur(text)) => controller.on_tags_blur(&text, now),
			Ok(ControllerEvent::SetExpanded(expanded)) => controller.set_expanded(expanded),
			Ok(ControllerEvent::Response { seq, response }) => {
				controller.on_response(seq, response);
			}
			Ok(ControllerEvent::Teardown) => controller.teardown(),
			Ok(ControllerEvent::Close) => closing = true,
			Ok(ControllerEvent::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
			Err(RecvTimeoutError::Timeout) => {}
		}
	}
}

/// Run `request` on a helper thread and post the answer back to the loop.
fn dispatch(
	request: QueryRequest,
	transport: Arc<dyn QueryTransport>,
	event_tx: Sender<ControllerEvent>,
) {
	thread::spawn(move || {
		let response = transport.fetch(&request.url);
		let _ = event_tx.send(ControllerEvent::Response {
			seq: request.seq,
			response,
		});
	});
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::time::Duration;

	use dupecheck_view::{Notifier, ResultRow};

	use super::*;
	use crate::client::controller::Timing;
	use crate::client::settings::ClientSettings;
	use crate::endpoint::WireRecord;

	/// Answers every request with one record named after the query and logs
	/// the URLs it saw.
	struct EchoTransport {
		urls: Mutex<Vec<String>>,
	}

	impl QueryTransport for EchoTransport {
		fn fetch(&self, url: &str) -> Option<QueryResponse> {
			self.urls.lock().expect("lock").push(url.to_string());
			let mut response = QueryResponse::new();
			response.push(
				"node--1",
				WireRecord {
					title: url.rsplit('=').next().unwrap_or_default().to_string(),
					status: 1,
					href: "/node/1".into(),
					entity_type: Some("node".into()),
					entity_id: Some("1".into()),
					..WireRecord::default()
				},
			);
			Some(response)
		}
	}

	fn settings() -> ClientSettings {
		ClientSettings {
			url: "http://local/search".into(),
			prepend_results: false,
			min_characters: 3,
			entity_id: None,
			entity_type: None,
			bundle: None,
			searching_string: "Searching…".into(),
			no_results_string: "None".into(),
		}
	}

	fn next_with_rows(handle: &ControllerHandle) -> ViewSnapshot {
		loop {
			let snapshot = handle
				.snapshots()
				.recv_timeout(Duration::from_secs(5))
				.expect("snapshot");
			if !snapshot.rows.is_empty() {
				return snapshot;
			}
		}
	}

	#[test]
	fn debounced_input_reaches_transport_once() {
		let transport = Arc::new(EchoTransport {
			urls: Mutex::new(Vec::new()),
		});
		let timing = Timing {
			debounce: Duration::from_millis(50),
			timeout: Duration::from_secs(5),
		};
		let handle = ControllerHandle::spawn(
			SearchController::with_timing(settings(), timing),
			Arc::clone(&transport) as Arc<dyn QueryTransport>,
		);
		handle.title_input("cat");
		handle.title_input("cats");
		handle.title_input("catsup");

		let snapshot = next_with_rows(&handle);
		assert_eq!(snapshot.notifier, Notifier::Hidden);
		assert!(snapshot.expanded);
		assert!(matches!(
			&snapshot.rows[0],
			ResultRow::Link { title, .. } if title == "catsup"
		));
		handle.close();
		while handle.snapshots().recv().is_ok() {}
		assert_eq!(
			*transport.urls.lock().expect("lock"),
			vec!["http://local/search?title=catsup".to_string()]
		);
	}
}
