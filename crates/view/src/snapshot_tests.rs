use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::{Notifier, ResultRow, ResultView, ViewLabels, ViewSnapshot};

fn draw(snapshot: &ViewSnapshot, labels: &ViewLabels, width: u16, height: u16) -> String {
	let backend = TestBackend::new(width, height);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| frame.render_widget(ResultView::new(snapshot, labels), frame.area()))
		.expect("draw snapshot frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

#[test]
fn expanded_list_with_overflow_snapshot() {
	let snapshot = ViewSnapshot {
		rows: vec![
			ResultRow::Link {
				key: "node--article--7".into(),
				title: "Duplicate title".into(),
				href: "/node/7".into(),
				published: true,
			},
			ResultRow::Link {
				key: "node--article--9".into(),
				title: "Draft copy".into(),
				href: "/node/9".into(),
				published: false,
			},
			ResultRow::More,
		],
		expanded: true,
		..ViewSnapshot::default()
	};
	let rendered = draw(&snapshot, &ViewLabels::default(), 40, 6);
	insta::assert_snapshot!(rendered, @r"
╭▾ Related content─────────────────────╮
│Duplicate title </node/7>             │
│Draft copy (not published) </node/9>  │
│... and others.                       │
│                                      │
╰──────────────────────────────────────╯
");
}

#[test]
fn no_results_notifier_snapshot() {
	let snapshot = ViewSnapshot {
		notifier: Notifier::NoResults("No related content found.".into()),
		expanded: true,
		description_visible: true,
		..ViewSnapshot::default()
	};
	let labels = ViewLabels::default().with_description("Similar items:");
	let rendered = draw(&snapshot, &labels, 40, 5);
	insta::assert_snapshot!(rendered, @r"
╭▾ Related content─────────────────────╮
│Similar items:                        │
│                                      │
│No related content found.             │
╰──────────────────────────────────────╯
");
}

#[test]
fn collapsed_panel_renders_only_border() {
	let snapshot = ViewSnapshot {
		rows: vec![ResultRow::More],
		..ViewSnapshot::default()
	};
	let rendered = draw(&snapshot, &ViewLabels::default(), 40, 3);
	assert_eq!(
		rendered,
		"╭▸ Related content─────────────────────╮\n│                                      │\n╰──────────────────────────────────────╯"
	);
}
