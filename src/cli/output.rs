use anyhow::Result;
use dupecheck::QueryResponse;
use dupecheck::view::{ResultView, ViewLabels, ViewSnapshot};

/// Print each record on its own line, with the overflow row last.
pub(crate) fn print_plain(response: &QueryResponse, labels: &ViewLabels) {
	if response.is_empty() {
		println!("No matches");
		return;
	}
	for line in format_plain(response, labels) {
		println!("{line}");
	}
}

pub(crate) fn format_plain(response: &QueryResponse, labels: &ViewLabels) -> Vec<String> {
	response
		.iter()
		.map(|(key, record)| {
			if record.more {
				return labels.more.clone();
			}
			let mut line = format!("{key}\t{}", record.title);
			if !record.is_published() {
				line.push_str(&format!(" ({})", labels.unpublished));
			}
			line.push_str(&format!("\t{}", record.href));
			line
		})
		.collect()
}

/// Format the response as pretty-printed JSON.
pub(crate) fn format_response_json(response: &QueryResponse) -> Result<String> {
	Ok(serde_json::to_string_pretty(response)?)
}

pub(crate) fn print_json(response: &QueryResponse) -> Result<()> {
	println!("{}", format_response_json(response)?);
	Ok(())
}

/// Print a rendered widget state, separated from the previous one.
pub(crate) fn print_snapshot(snapshot: &ViewSnapshot, labels: &ViewLabels) {
	println!("--");
	for line in ResultView::new(snapshot, labels).plain_lines() {
		println!("{line}");
	}
}
