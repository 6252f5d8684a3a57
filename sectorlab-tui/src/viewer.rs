//! Figure viewer — shows every figure at once and blocks until closed.
//!
//! Keys:
//! - `Tab` / `→` / `l` — focus next figure
//! - `BackTab` / `←` / `h` — focus previous figure
//! - `Enter` — toggle maximized view of the focused figure
//! - `q` / `Esc` — close the viewer

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::chart::FigureChart;
use crate::figure::ChartFigure;
use crate::theme::Theme;

/// Focus and zoom state of the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    pub figure_count: usize,
    pub focus: usize,
    pub maximized: bool,
    pub running: bool,
}

impl ViewerState {
    pub fn new(figure_count: usize) -> Self {
        Self {
            figure_count,
            focus: 0,
            maximized: false,
            running: true,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.next(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.previous(),
            KeyCode::Enter => self.maximized = !self.maximized,
            _ => {}
        }
    }

    fn next(&mut self) {
        if self.figure_count > 0 {
            self.focus = (self.focus + 1) % self.figure_count;
        }
    }

    fn previous(&mut self) {
        if self.figure_count > 0 {
            self.focus = (self.focus + self.figure_count - 1) % self.figure_count;
        }
    }
}

/// Near-square grid: `(rows, cols)` with `rows * cols >= n`.
pub fn grid_shape(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let mut cols = 1;
    while cols * cols < n {
        cols += 1;
    }
    let rows = n.div_ceil(cols);
    (rows, cols)
}

/// Split `area` into one cell per figure, row-major.
pub fn figure_areas(area: Rect, n: usize) -> Vec<Rect> {
    let (rows, cols) = grid_shape(n);
    if rows == 0 {
        return Vec::new();
    }
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
    let mut cells = Vec::with_capacity(n);
    for row in row_areas.iter() {
        let remaining = n - cells.len();
        let in_row = remaining.min(cols);
        let col_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, in_row as u32); in_row]).split(*row);
        cells.extend(col_areas.iter().copied());
        if cells.len() == n {
            break;
        }
    }
    cells
}

pub fn draw(f: &mut Frame, figures: &[ChartFigure], state: &ViewerState, theme: &Theme) {
    let [body, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(f.area());

    if state.maximized {
        if let Some(figure) = figures.get(state.focus) {
            f.render_widget(FigureChart::new(figure, theme).focused(true), body);
        }
    } else {
        for (i, (figure, cell)) in figures
            .iter()
            .zip(figure_areas(body, figures.len()))
            .enumerate()
        {
            f.render_widget(
                FigureChart::new(figure, theme).focused(i == state.focus),
                cell,
            );
        }
    }

    let status_line = Line::from(vec![
        Span::styled(
            format!(" Figure {}/{} ", state.focus + 1, figures.len()),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            " Tab: next  Shift-Tab: previous  Enter: maximize  q: quit",
            Style::default().fg(theme.text_secondary),
        ),
    ]);
    f.render_widget(
        Paragraph::new(status_line).style(Style::default().bg(theme.background)),
        status,
    );
}

/// Render all figures in one screen until the user closes it.
///
/// Returns immediately when `figures` is empty.
pub fn show_figures(figures: &[ChartFigure]) -> Result<()> {
    if figures.is_empty() {
        return Ok(());
    }

    // Restore the terminal before a panic message is printed.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let theme = Theme::default();
    let mut state = ViewerState::new(figures.len());
    let result = run_viewer(&mut terminal, figures, &mut state, &theme);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_viewer(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    figures: &[ChartFigure],
    state: &mut ViewerState,
    theme: &Theme,
) -> Result<()> {
    while state.running {
        terminal.draw(|f| draw(f, figures, state, theme))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                state.handle_key(key);
            }
        }
    }
    Ok(())
}
