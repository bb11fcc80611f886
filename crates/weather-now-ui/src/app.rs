use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use tokio::sync::mpsc::{self, UnboundedSender};
use weather_now_meteo::WeatherLookup;

use crate::form::SearchForm;
use crate::models::WeatherModel;
use crate::services::{self, WeatherServiceMessage};
use crate::theme;
use crate::tui::{self, AppEvent, EventHandler, Tui};
use crate::view::{self, Card, View};

pub struct App {
    model: WeatherModel,
    lookup: Arc<WeatherLookup>,
    tx: UnboundedSender<WeatherServiceMessage>,
    tick: usize,
    should_quit: bool,
}

impl App {
    pub fn new(lookup: Arc<WeatherLookup>, tx: UnboundedSender<WeatherServiceMessage>) -> Self {
        Self {
            model: WeatherModel::new(),
            lookup,
            tx,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn model(&self) -> &WeatherModel {
        &self.model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => self.tick = self.tick.wrapping_add(1),
            AppEvent::Resize => {}
        }
    }

    pub fn handle_message(&mut self, message: WeatherServiceMessage) {
        self.model.apply(message);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            code => self.edit(code),
        }
    }

    fn edit(&mut self, code: KeyCode) {
        let form = &mut self.model.form;
        match code {
            KeyCode::Char(c) => form.insert(c),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Delete => form.delete(),
            KeyCode::Left => form.move_left(),
            KeyCode::Right => form.move_right(),
            KeyCode::Home => form.move_home(),
            KeyCode::End => form.move_end(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        if let Some(ticket) = self.model.submit() {
            let _ = services::request_search(&self.tx, self.lookup.clone(), ticket);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        draw(frame, &self.model, self.tick);
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Tui,
        mut results: mpsc::UnboundedReceiver<WeatherServiceMessage>,
    ) -> Result<()> {
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                Some(event) = events.next() => self.handle_event(event),
                Some(message) = results.recv() => self.handle_message(message),
                else => break,
            }
        }

        Ok(())
    }
}

/// Run the interactive form until the user quits.
pub async fn run(lookup: Arc<WeatherLookup>) -> Result<()> {
    tui::install_panic_hook();
    let mut terminal = tui::init()?;

    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(lookup, tx);
    let result = app.run_loop(&mut terminal, rx).await;

    tui::restore()?;
    result
}

/// Run a single lookup for `query` and return what the form would show.
pub async fn run_once(lookup: &WeatherLookup, query: &str) -> View {
    let mut model = WeatherModel::new();
    model.form = SearchForm::with_query(query);

    if let Some(ticket) = model.submit() {
        let result = lookup.search(&ticket.query).await;
        if let Err(e) = &result {
            tracing::error!("Error fetching weather data: {}", e);
        }
        model.apply(WeatherServiceMessage::SearchDone {
            generation: ticket.generation,
            result,
        });
    }

    view::render(model.view())
}

pub fn draw(frame: &mut Frame, model: &WeatherModel, tick: usize) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(3), // input
        Constraint::Length(1), // key hints
        Constraint::Length(2), // error / progress
        Constraint::Min(0),    // cards
    ])
    .margin(1)
    .split(frame.area());

    frame.render_widget(
        Paragraph::new("Weather Now")
            .style(theme::title())
            .alignment(Alignment::Center),
        chunks[0],
    );

    draw_input(frame, model, chunks[1]);

    frame.render_widget(
        Paragraph::new("Enter: search   Esc: quit")
            .style(theme::hint())
            .alignment(Alignment::Center),
        chunks[2],
    );

    let status = if model.loading() {
        Some(Paragraph::new(format!("Searching{}", ".".repeat(tick % 4))).style(theme::hint()))
    } else {
        model
            .view()
            .error_message()
            .map(|msg| Paragraph::new(msg.to_string()).style(theme::error()))
    };
    if let Some(status) = status {
        frame.render_widget(status.alignment(Alignment::Center), chunks[3]);
    }

    if let View::Cards { city, cards } = view::render(model.view()) {
        let stacked = frame.area().width < theme::NARROW_WIDTH;
        draw_cards(frame, &city, &cards, chunks[4], stacked);
    }
}

fn draw_input(frame: &mut Frame, model: &WeatherModel, area: Rect) {
    let input = Paragraph::new(model.form.query()).block(
        Block::bordered()
            .title(" Enter city ")
            .border_style(theme::input_border()),
    );
    frame.render_widget(input, area);

    // Wide glyphs take two cells
    let inner_width = area.width.saturating_sub(2);
    let offset = u16::try_from(Span::raw(model.form.before_cursor()).width())
        .unwrap_or(u16::MAX)
        .min(inner_width.saturating_sub(1));
    frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y + 1));
}

fn draw_cards(frame: &mut Frame, city: &str, cards: &[Card; 3], area: Rect, stacked: bool) {
    let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);

    frame.render_widget(
        Paragraph::new(city.to_string())
            .style(theme::city())
            .alignment(Alignment::Center),
        rows[0],
    );

    let card_height = 4;
    let slots = if stacked {
        Layout::vertical([Constraint::Length(card_height); 3]).split(rows[1])
    } else {
        let band = Layout::vertical([Constraint::Length(card_height), Constraint::Min(0)])
            .split(rows[1]);
        Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(1)
            .split(band[0])
    };

    for (card, slot) in cards.iter().zip(slots.iter()) {
        let lines: Vec<Line> = card.lines.iter().map(|l| Line::from(l.as_str())).collect();
        let widget = Paragraph::new(lines)
            .style(theme::card_text())
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(Span::styled(card.title, theme::card_title()))
                    .border_style(theme::card_border()),
            );
        frame.render_widget(widget, *slot);
    }
}
