use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table};
use ratatui::{Frame, Terminal};
use tracing::info;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::config::Config;
use crate::enhance::sort::SortIndicator;
use crate::enhance::view::TableView;

/// Terminal front end for one enhanced table. Typing edits the search
/// query (when the table qualified for one), left/right pick a column,
/// Enter "clicks" its header.
pub struct App {
    view: TableView,
    input: Input,
    column_cursor: usize,
    scroll: usize,
    icons: (String, String, String),
    should_quit: bool,
}

impl App {
    pub fn new(view: TableView, config: &Config) -> Self {
        Self {
            view,
            input: Input::default(),
            column_cursor: 0,
            scroll: 0,
            icons: config.indicator_icons(),
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: event::KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.view.query().is_empty() && !self.view.search_enabled() {
                    self.should_quit = true;
                } else if self.view.query().is_empty() && self.input.value().is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.reset();
                    self.view.search("");
                }
            }
            KeyCode::Left => {
                let cols = self.view.model().column_count();
                if cols > 0 {
                    self.column_cursor = if self.column_cursor == 0 {
                        cols - 1
                    } else {
                        self.column_cursor - 1
                    };
                }
            }
            KeyCode::Right => {
                let cols = self.view.model().column_count();
                if cols > 0 {
                    self.column_cursor = (self.column_cursor + 1) % cols;
                }
            }
            KeyCode::Enter => {
                self.view.header_clicked(self.column_cursor);
                self.scroll = 0;
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(self.view.visible_count().saturating_sub(1));
            }
            // `q` quits unless it belongs to a query being typed.
            KeyCode::Char('q')
                if !self.view.search_enabled()
                    || (self.view.query().is_empty() && self.input.value().is_empty()) =>
            {
                self.should_quit = true;
            }
            _ => {
                if self.view.search_enabled() {
                    self.input.handle_event(&Event::Key(key));
                    self.view.queue_search(self.input.value());
                    self.scroll = 0;
                }
            }
        }
    }

    fn indicator_glyph(&self, column: usize) -> &str {
        match self.view.indicator(column) {
            SortIndicator::Unsorted => &self.icons.0,
            SortIndicator::Ascending => &self.icons.1,
            SortIndicator::Descending => &self.icons.2,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let constraints = if self.view.search_enabled() {
            vec![
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ]
        } else {
            vec![Constraint::Min(3), Constraint::Length(1)]
        };
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.area());

        let (table_area, status_area) = if self.view.search_enabled() {
            self.draw_search_bar(frame, areas[0]);
            (areas[1], areas[2])
        } else {
            (areas[0], areas[1])
        };

        self.draw_table(frame, table_area);

        let help = Paragraph::new("←/→ column  Enter sort  ↑/↓ scroll  Esc clear  Ctrl-C quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, status_area);
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let search = Paragraph::new(self.input.value())
            .block(Block::default().borders(Borders::ALL).title("Search table"));
        frame.render_widget(search, halves[0]);

        let counter = Paragraph::new(self.view.counter_text())
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(counter, halves[1]);
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let model = self.view.model();

        let header_cells: Vec<Cell> = model
            .headers()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if i == self.column_cursor {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                Cell::from(format!("{} {}", name, self.indicator_glyph(i))).style(style)
            })
            .collect();
        let header = TableRow::new(header_cells).height(1);

        // Only visible rows are rendered; hidden rows keep their
        // position in the model.
        let body_height = area.height.saturating_sub(3) as usize;
        let rows: Vec<TableRow> = model
            .rows()
            .iter()
            .filter(|r| r.is_visible())
            .skip(self.scroll)
            .take(body_height)
            .map(|r| {
                TableRow::new(
                    (0..model.column_count())
                        .map(|c| Cell::from(r.cell(c).to_string()))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        let widths = self.column_widths(body_height);
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(table, area);
    }

    fn column_widths(&self, body_height: usize) -> Vec<Constraint> {
        let model = self.view.model();
        (0..model.column_count())
            .map(|c| {
                let header_width =
                    model.headers()[c].chars().count() + 2 + self.indicator_glyph(c).chars().count();
                let cell_width = model
                    .rows()
                    .iter()
                    .filter(|r| r.is_visible())
                    .skip(self.scroll)
                    .take(body_height)
                    .map(|r| r.cell(c).chars().count())
                    .max()
                    .unwrap_or(0);
                Constraint::Length(header_width.max(cell_width).min(32) as u16)
            })
            .collect()
    }
}

/// Run the event loop until the user quits. Events are handled one at
/// a time, fully, on this thread; the poll timeout doubles as the
/// debouncer tick.
pub fn run(view: TableView, config: &Config) -> Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;

    let result = event_loop(App::new(view, config));

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}


fn event_loop(mut app: App) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        }
        app.view.tick();

        if app.should_quit {
            info!("quitting");
            return Ok(());
        }
    }
}
