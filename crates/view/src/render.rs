use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Widget};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::labels::ViewLabels;
use crate::rows::{Notifier, ResultRow, ViewSnapshot};
use crate::style::ViewStyle;

const EXPANDED_MARKER: &str = "▾";
const COLLAPSED_MARKER: &str = "▸";
const ELLIPSIS: &str = "…";

/// Renders a [`ViewSnapshot`] as a collapsible bordered panel.
pub struct ResultView<'a> {
	snapshot: &'a ViewSnapshot,
	labels: &'a ViewLabels,
	style: ViewStyle,
	throbber: Option<&'a ThrobberState>,
}

impl<'a> ResultView<'a> {
	#[must_use]
	pub fn new(snapshot: &'a ViewSnapshot, labels: &'a ViewLabels) -> Self {
		Self {
			snapshot,
			labels,
			style: ViewStyle::default(),
			throbber: None,
		}
	}

	#[must_use]
	pub fn style(mut self, style: ViewStyle) -> Self {
		self.style = style;
		self
	}

	/// Animate the searching notifier with the provided throbber state.
	#[must_use]
	pub fn throbber(mut self, state: &'a ThrobberState) -> Self {
		self.throbber = Some(state);
		self
	}

	fn title(&self) -> String {
		let marker = if self.snapshot.expanded {
			EXPANDED_MARKER
		} else {
			COLLAPSED_MARKER
		};
		format!("{marker} {}", self.labels.panel_title)
	}

	fn description(&self) -> Option<&'a str> {
		if !self.snapshot.description_visible {
			return None;
		}
		self.labels.description.as_deref()
	}

	/// Build one line per visible row.
	#[must_use]
	pub fn lines(&self) -> Vec<Line<'a>> {
		self.snapshot
			.rows
			.iter()
			.map(|row| row_line(row, self.labels, self.style))
			.collect()
	}

	fn notifier_line(&self) -> Option<Line<'a>> {
		let text = self.snapshot.notifier.text()?;
		let mut line = Line::default();
		if let (Notifier::Searching(_), Some(state)) = (&self.snapshot.notifier, self.throbber) {
			let spinner = Throbber::default()
				.style(self.style.notice)
				.throbber_style(self.style.notice);
			line.spans.push(spinner.to_symbol_span(state));
		}
		line.spans
			.push(Span::styled(text.to_string(), self.style.notice));
		Some(line)
	}

	/// Render the panel as plain text, one entry per output line.
	#[must_use]
	pub fn plain_lines(&self) -> Vec<String> {
		let mut output = vec![self.title()];
		if !self.snapshot.expanded {
			return output;
		}
		if let Some(description) = self.description() {
			output.push(format!("  {description}"));
		}
		for line in self.lines() {
			output.push(format!("  {}", line_text(&line)));
		}
		if let Some(text) = self.snapshot.notifier.text() {
			output.push(format!("  {text}"));
		}
		output
	}
}

impl Widget for ResultView<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(self.style.border)
			.title(self.title());
		let inner = block.inner(area);
		block.render(area, buf);

		if !self.snapshot.expanded || inner.height == 0 {
			return;
		}

		let description = self.description();
		let notifier = self.notifier_line();
		let [description_area, list_area, notifier_area] = Layout::vertical([
			Constraint::Length(u16::from(description.is_some())),
			Constraint::Fill(1),
			Constraint::Length(u16::from(notifier.is_some())),
		])
		.areas(inner);

		if let Some(description) = description {
			Paragraph::new(Span::styled(description, self.style.muted))
				.render(description_area, buf);
		}
		let items = self
			.lines()
			.into_iter()
			.map(|line| ListItem::new(fit_line(line, list_area.width)));
		Widget::render(List::new(items), list_area, buf);
		if let Some(line) = notifier {
			Paragraph::new(line).render(notifier_area, buf);
		}
	}
}

fn row_line<'a>(row: &ResultRow, labels: &ViewLabels, style: ViewStyle) -> Line<'a> {
	match row {
		ResultRow::Link {
			title,
			href,
			published,
			..
		} => {
			let mut spans = vec![Span::styled(title.clone(), style.link)];
			if !published {
				spans.push(Span::styled(
					format!(" ({})", labels.unpublished),
					style.muted,
				));
			}
			if !href.is_empty() {
				spans.push(Span::styled(format!(" <{href}>"), style.href));
			}
			Line::from(spans)
		}
		ResultRow::More => Line::from(Span::styled(labels.more.clone(), style.muted)),
	}
}

fn line_text(line: &Line<'_>) -> String {
	let mut text = String::with_capacity(line.width());
	for span in &line.spans {
		text.push_str(&span.content);
	}
	text
}

/// Shorten `line` to `width` columns, marking the cut with an ellipsis.
fn fit_line(line: Line<'_>, width: u16) -> Line<'_> {
	let width = usize::from(width);
	if line.width() <= width {
		return line;
	}
	let style = line.style;
	let budget = width.saturating_sub(ELLIPSIS.width());
	let mut used = 0;
	let mut spans = Vec::with_capacity(line.spans.len() + 1);
	for span in line.spans {
		let span_width = span.content.width();
		if used + span_width <= budget {
			used += span_width;
			spans.push(span);
			continue;
		}
		let mut content = String::new();
		for ch in span.content.chars() {
			let ch_width = ch.width().unwrap_or(0);
			if used + ch_width > budget {
				break;
			}
			used += ch_width;
			content.push(ch);
		}
		if !content.is_empty() {
			spans.push(Span::styled(content, span.style));
		}
		break;
	}
	if width >= ELLIPSIS.width() {
		spans.push(Span::raw(ELLIPSIS));
	}
	Line::from(spans).style(style)
}
