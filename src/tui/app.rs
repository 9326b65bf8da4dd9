use super::ui;
use crate::{
    config::PokedexConfig,
    error::{PokedexError, Result},
    model::{Pokemon, PokemonSummary},
    pokeapi::PokeApiClient,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::runtime::Runtime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

#[derive(Debug)]
pub struct App {
    client: PokeApiClient,
    runtime: Runtime,
    pub limit: u32,
    pub show_help_bar: bool,
    pub page_index: usize,
    pub count: u64,
    pub pokemons: Vec<PokemonSummary>,
    pub selected_index: usize,
    pub detail: Option<Pokemon>,
    pub detail_scroll: u16,
    pub input_mode: InputMode,
    pub search_query: String,
    pub show_help: bool,
    pub message: Option<String>,
}

impl App {
    pub fn new(config: &PokedexConfig, client: PokeApiClient) -> Result<Self> {
        let runtime = Runtime::new()?;

        let mut app = Self {
            client,
            runtime,
            limit: config.list.limit.max(1),
            show_help_bar: config.tui.show_help_bar,
            page_index: 0,
            count: 0,
            pokemons: Vec::new(),
            selected_index: 0,
            detail: None,
            detail_scroll: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            show_help: false,
            message: None,
        };
        app.fetch_page()?;
        app.fetch_detail()?;
        Ok(app)
    }

    fn offset(&self) -> u32 {
        self.page_index as u32 * self.limit
    }

    pub fn total_pages(&self) -> usize {
        (self.count as usize).div_ceil(self.limit as usize).max(1)
    }

    /// Fetch the current page of the list and clamp the selection to it.
    fn fetch_page(&mut self) -> Result<()> {
        let page = self.runtime.block_on(self.client.pokemon_list(
            self.limit,
            self.offset(),
            &self.search_query,
        ))?;
        self.count = page.count;
        self.pokemons = page.pokemons;
        if self.selected_index >= self.pokemons.len() {
            self.selected_index = self.pokemons.len().saturating_sub(1);
        }
        Ok(())
    }

    /// Fetch the detail card for the selected entry. Skips the request when
    /// the card for that id is already loaded.
    fn fetch_detail(&mut self) -> Result<()> {
        let id = match self.pokemons.get(self.selected_index) {
            Some(summary) => summary.id,
            None => {
                self.detail = None;
                return Ok(());
            }
        };
        if self.detail.as_ref().is_some_and(|p| p.id == id) {
            return Ok(());
        }

        let pokemon = self.runtime.block_on(self.client.pokemon_by_id(id))?;
        self.detail = Some(pokemon);
        self.detail_scroll = 0;
        Ok(())
    }

    fn report(&mut self, err: PokedexError) {
        tracing::error!(error = %err, "Fetch failed");
        self.message = Some(err.to_string());
    }

    fn reload(&mut self) {
        let res = self.fetch_page().and_then(|()| self.fetch_detail());
        if let Err(err) = res {
            self.report(err);
        }
    }

    fn sync_detail(&mut self) {
        if let Err(err) = self.fetch_detail() {
            self.report(err);
        }
    }

    pub fn refresh(&mut self) {
        self.detail = None;
        self.reload();
    }

    pub fn next(&mut self) {
        if self.selected_index + 1 < self.pokemons.len() {
            self.selected_index += 1;
            self.sync_detail();
        }
    }

    pub fn previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.sync_detail();
        }
    }

    pub fn first(&mut self) {
        self.selected_index = 0;
        self.sync_detail();
    }

    pub fn last(&mut self) {
        self.selected_index = self.pokemons.len().saturating_sub(1);
        self.sync_detail();
    }

    pub fn next_page(&mut self) {
        if self.page_index + 1 < self.total_pages() {
            self.page_index += 1;
            self.selected_index = 0;
            self.reload();
        }
    }

    pub fn previous_page(&mut self) {
        if self.page_index > 0 {
            self.page_index -= 1;
            self.selected_index = 0;
            self.reload();
        }
    }

    pub fn apply_search(&mut self) {
        self.page_index = 0;
        self.selected_index = 0;
        self.reload();
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn selected_pokemon(&self) -> Option<&PokemonSummary> {
        self.pokemons.get(self.selected_index)
    }
}

pub fn run_tui(config: PokedexConfig, client: PokeApiClient) -> Result<()> {
    // Load the first page before touching the terminal so a dead endpoint
    // fails with a readable error instead of a torn alternate screen.
    let mut app = App::new(&config, client)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // A message lives until the key press after the one that set it
            app.message = None;

            match app.input_mode {
                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('?') => app.show_help = !app.show_help,
                    KeyCode::Esc => {
                        if app.show_help {
                            app.show_help = false;
                        } else if !app.search_query.is_empty() {
                            app.search_query.clear();
                            app.apply_search();
                        }
                    }
                    KeyCode::Down | KeyCode::Char('j') => app.next(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous(),
                    KeyCode::Right | KeyCode::Char('n') => app.next_page(),
                    KeyCode::Left | KeyCode::Char('p') => app.previous_page(),
                    KeyCode::Char('g') => app.first(),
                    KeyCode::Char('G') => app.last(),
                    KeyCode::Char('/') => {
                        app.input_mode = InputMode::Search;
                    }
                    KeyCode::Char('r') => app.refresh(),
                    KeyCode::Char('J') => app.scroll_detail_down(),
                    KeyCode::Char('K') => app.scroll_detail_up(),
                    KeyCode::PageDown => {
                        for _ in 0..5 {
                            app.scroll_detail_down();
                        }
                    }
                    KeyCode::PageUp => {
                        for _ in 0..5 {
                            app.scroll_detail_up();
                        }
                    }
                    _ => {}
                },
                InputMode::Search => match key.code {
                    KeyCode::Enter | KeyCode::Esc => {
                        app.input_mode = InputMode::Normal;
                    }
                    KeyCode::Char(c) => {
                        app.search_query.push(c);
                        app.apply_search();
                    }
                    KeyCode::Backspace => {
                        app.search_query.pop();
                        app.apply_search();
                    }
                    _ => {}
                },
            }
        }
    }
}
