use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect, Spacing};
use ratatui::prelude::StatefulWidget;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Clear, HighlightSpacing, List, ListItem, Paragraph, Widget, Wrap};

use crate::{ExplorerContent, ExplorerState};

/// Renders an [`ExplorerState`]. Reads the listing with `blocking_read`, so it
/// must not run on a current-thread runtime worker; wrap the draw in
/// `tokio::task::block_in_place`.
pub struct Explorer<'s> {
  state: &'s mut ExplorerState,
  selected_content: Option<ExplorerContent>,
}

impl<'s> Explorer<'s> {
  pub fn new(state: &'s mut ExplorerState) -> Self {
    let selected_content = state.selected_content_blocking();
    Self { state, selected_content }
  }

  fn frame_block(&self) -> Block<'static> {
    let hints = [
      Span::raw(" [Enter]").green(),
      Span::raw(" open "),
      Span::raw("[Tab]").blue(),
      Span::raw(" type "),
      Span::raw("[Alt+←/⌫]").yellow(),
      Span::raw(" up "),
      Span::raw("[Esc]").red(),
      Span::raw(" cancel "),
    ];

    Block::bordered()
      .border_type(BorderType::Rounded)
      .fg(Color::Rgb(0, 255, 251))
      .title_top(Line::raw(self.state.title.clone()).centered().white().bold())
      .title_bottom(Line::from_iter(hints).centered().white())
  }

  fn draw_filetree(&self, items: &[ExplorerContent]) -> List<'static> {
    let pattern: &str = &self.state.input_state;
    let block = Block::bordered()
      .border_type(BorderType::Rounded)
      .fg(Color::Rgb(0, 255, 251))
      .title_top(Line::raw(self.state.current_dir().to_string_lossy().into_owned()).white())
      .title_bottom(Line::raw(format!(" {} / {} ", items.len(), self.state.blocking_total())).dark_gray().right_aligned());

    items
      .iter()
      .map(|item| ListItem::new(item.apply_colors(pattern)))
      .collect::<List>()
      .block(block)
      .highlight_spacing(HighlightSpacing::Always)
      .highlight_style(Style::new().bg(Color::Rgb(50, 80, 70)).fg(Color::White).bold())
      .highlight_symbol("▶ ")
  }

  fn draw_input(&self) -> Paragraph<'static> {
    let input = &self.state.input_state;
    let cursor = input.cursor();
    let mut line = Line::default();

    for (pos, chr) in input.char_indices() {
      if pos == cursor {
        line.push_span(Span::raw(chr.to_string()).dark_gray().on_white());
      } else {
        line.push_span(Span::raw(chr.to_string()));
      }
    }
    if cursor >= input.len() {
      line.push_span(Span::raw(" ").dark_gray().on_white());
    }

    let block = Block::bordered()
      .border_type(BorderType::Rounded)
      .fg(Color::Rgb(0, 255, 251))
      .title_top(Line::raw(" Filter ").white().left_aligned())
      .title_top(Line::raw(format!(" {} ", self.state.active_filter().describe())).yellow().right_aligned());

    Paragraph::new(line)
      .scroll((0, input.cursor_column().saturating_sub(10) as u16))
      .block(block)
  }

  fn draw_details(&self) -> Paragraph<'static> {
    let block = Block::bordered()
      .border_type(BorderType::Rounded)
      .fg(Color::Rgb(0, 255, 251))
      .title_top(Line::raw(" Details ").white());

    let Some(ref content) = self.selected_content else {
      return Paragraph::new("").block(block);
    };

    let kind = if content.is_dir() { "directory" } else { "file" };
    let mut lines = vec![
      Line::from_iter([Span::raw("Name: ").dark_gray(), Span::raw(content.filename().into_owned()).yellow()]),
      Line::from_iter([Span::raw("Kind: ").dark_gray(), Span::raw(kind).white()]),
    ];
    if let Some(size) = content.human_size() {
      lines.push(Line::from_iter([Span::raw("Size: ").dark_gray(), Span::raw(size).white()]));
    }

    Paragraph::new(Text::from(lines)).block(block).wrap(Wrap { trim: false })
  }
}

impl Widget for Explorer<'_> {
  fn render(mut self, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);
    let frame = self.frame_block();
    let inner = frame.inner(area);
    frame.render(area, buf);

    let [left, details_area] = Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)])
      .spacing(Spacing::Space(1))
      .areas(inner);
    let [file_area, input_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(left);

    let items = self.state.blocking_read_items();
    let filetree = self.draw_filetree(&items);
    let input = self.draw_input();
    let details = self.draw_details();

    StatefulWidget::render(filetree, file_area, buf, &mut self.state.list_state);
    input.render(input_area, buf);
    details.render(details_area, buf);
  }
}
