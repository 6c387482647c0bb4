use ratatui::style::{Color, Modifier, Style};

/// Styles applied to the different parts of the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStyle {
	pub border: Style,
	pub link: Style,
	pub href: Style,
	pub muted: Style,
	pub notice: Style,
}

impl Default for ViewStyle {
	fn default() -> Self {
		Self {
			border: Style::default().fg(Color::DarkGray),
			link: Style::default().add_modifier(Modifier::UNDERLINED),
			href: Style::default().fg(Color::DarkGray),
			muted: Style::default()
				.fg(Color::Gray)
				.add_modifier(Modifier::ITALIC),
			notice: Style::default().fg(Color::Yellow),
		}
	}
}
