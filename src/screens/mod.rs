pub mod confirm_quit;
pub mod home;
pub mod invalid;
pub mod loading;
pub mod quiz;
pub mod quiz_complete;
pub mod topic_detail;

// Re-exports so you can keep using crate::screens::XYZScreen
pub use confirm_quit::ConfirmQuitScreen;
pub use home::HomeScreen;
pub use invalid::InvalidScreen;
pub use loading::LoadingScreen;
pub use quiz::QuizScreen;
pub use quiz_complete::QuizCompleteScreen;
pub use topic_detail::TopicScreen;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Frame,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::components::{inner_text_width, row_count, wrapped_lines};
use crate::ui::layout::{three_box_layout, Margins, ThreeBox};

/// Draws the bordered header box (centered heading over wrapped paragraphs)
/// and the empty body/footer frames. Callers fill `middle_inner` and render
/// their help bar into `bottom`.
pub(crate) fn draw_page(f: &mut Frame<'_>, size: Rect, header: &str, paragraphs: &[String], middle_rows: u16) -> ThreeBox {
    let width = inner_text_width(size.width, Margins::STANDARD.page, Margins::STANDARD.inner_top);
    let header_lines = wrapped_lines(header, width);

    let mut body: Vec<Line> = Vec::new();
    for (i, p) in paragraphs.iter().enumerate() {
        body.extend(wrapped_lines(p, width));
        if i + 1 < paragraphs.len() {
            body.push(Line::from(""));
        }
    }

    let header_height = row_count(header_lines.len()).max(1);
    let top_needed = header_height.saturating_add(row_count(body.len())).saturating_add(5);
    let middle_needed = middle_rows.saturating_add(4);
    let regions = three_box_layout(size, top_needed, middle_needed, 3, Margins::STANDARD);

    f.render_widget(Block::default().borders(Borders::ALL), regions.top);
    let top_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_height), Constraint::Length(1), Constraint::Min(1)])
        .split(regions.top_inner);

    f.render_widget(Paragraph::new(header_lines).alignment(Alignment::Center), top_chunks[0]);
    f.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), top_chunks[2]);

    f.render_widget(Block::default().borders(Borders::ALL), regions.middle);
    f.render_widget(Block::default().borders(Borders::ALL), regions.bottom);
    regions
}

#[cfg(test)]
pub(crate) mod testing {
    use ratatui::{backend::TestBackend, Terminal};

    use crate::app::{AppCtx, ScreenWidget};

    /// Renders one screen into an off-screen buffer and returns its text rows.
    pub fn render(screen: &dyn ScreenWidget, ctx: &AppCtx, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| screen.draw(f, f.size(), ctx)).unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }
}
