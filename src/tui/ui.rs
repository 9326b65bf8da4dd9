use super::app::{App, InputMode};
use super::theme::theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};

use crate::config;
use crate::model::Pokemon;

/// Width of the stat and metric bars in the detail card.
const BAR_WIDTH: usize = 20;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content (list + detail)
            Constraint::Length(1), // Footer (mode + keybindings)
        ])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[0]);

    draw_list(f, app, panes[0]);
    draw_detail(f, app, panes[1]);
    draw_footer(f, app, chunks[1]);

    if app.show_help {
        draw_help_popup(f);
    }
}

fn draw_list(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let title = if app.search_query.is_empty() {
        format!(" Pokédex ({}) ", app.count)
    } else {
        format!(" Pokédex ({}) /{} ", app.count, app.search_query)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(t.border_style(true));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    if app.pokemons.is_empty() {
        let empty = Paragraph::new("No Pokémon match")
            .style(Style::default().fg(t.text_muted));
        f.render_widget(empty, inner_area);
        return;
    }

    let rows: Vec<Row> = app
        .pokemons
        .iter()
        .enumerate()
        .map(|(idx, summary)| {
            let is_selected = idx == app.selected_index;

            let marker = if is_selected { "▶" } else { " " };
            let marker_cell = Cell::from(Span::styled(
                marker,
                Style::default().fg(t.border_focused),
            ));

            let id_cell = Cell::from(Span::styled(
                summary.id_string(),
                t.id_style(is_selected),
            ));

            let name_style = if is_selected {
                t.selected_style()
            } else {
                Style::default().fg(t.text)
            };
            let name_cell = Cell::from(Span::styled(capitalize(&summary.name), name_style));

            let types = summary
                .types
                .iter()
                .map(|ty| ty.name.as_str())
                .collect::<Vec<_>>()
                .join("/");
            let types_cell = Cell::from(Span::styled(types, Style::default().fg(t.text_muted)));

            Row::new(vec![marker_cell, id_cell, name_cell, types_cell])
        })
        .collect();

    let widths = [
        Constraint::Length(1),  // Selection marker
        Constraint::Length(4),  // Dex number
        Constraint::Fill(1),    // Name
        Constraint::Length(14), // Types
    ];

    let table = Table::new(rows, widths)
        .column_spacing(1)
        .row_highlight_style(Style::default());

    let mut table_state = TableState::default();
    table_state.select(Some(app.selected_index));
    f.render_stateful_widget(table, inner_area, &mut table_state);
}

fn draw_detail(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let Some(pokemon) = app.detail.as_ref() else {
        let block = Block::default()
            .title(" Details ")
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(t.border_style(false));
        let empty = Paragraph::new("No entry selected")
            .block(block)
            .style(Style::default().fg(t.text_muted));
        f.render_widget(empty, area);
        return;
    };

    let block = Block::default()
        .title(format!(
            " {} {} ",
            pokemon.id_string(),
            capitalize(&pokemon.name)
        ))
        .title_style(
            Style::default()
                .fg(t.id_selected)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(t.border_style(false));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let card = Paragraph::new(detail_lines(pokemon))
        .scroll((app.detail_scroll, 0))
        .wrap(Wrap { trim: false });
    f.render_widget(card, inner);
}

/// Build the detail card: genus, type badges, dex entry, abilities,
/// metrics, stats and the evolution chain.
fn detail_lines(pokemon: &Pokemon) -> Vec<Line<'_>> {
    let t = theme();
    let mut lines = vec![Line::from("")];

    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            pokemon.genus.as_str(),
            Style::default().fg(t.genus).add_modifier(Modifier::ITALIC),
        ),
    ]));

    let mut badges = vec![Span::raw("  ")];
    for (i, ty) in pokemon.types.iter().enumerate() {
        if i > 0 {
            badges.push(Span::raw(" "));
        }
        badges.push(Span::styled(
            format!(" {} ", ty.name),
            t.type_badge_style(&ty.name),
        ));
    }
    lines.push(Line::from(badges));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(pokemon.flavor_text_flat(), Style::default().fg(t.text)),
    ]));
    lines.push(Line::from(""));

    lines.push(section_header("Abilities"));
    for ability in &pokemon.abilities {
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(capitalize(&ability.name), Style::default().fg(t.text)),
        ];
        if ability.is_hidden {
            spans.push(Span::styled(
                "  (hidden)",
                Style::default().fg(t.hidden_ability),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    lines.push(section_header("Metrics"));
    lines.push(metric_line(
        "Height",
        format!("{}m", f64::from(pokemon.height) / 10.0),
        pokemon.height,
        config::HEIGHT_SCALE,
    ));
    lines.push(metric_line(
        "Weight",
        format!("{}kg", f64::from(pokemon.weight) / 10.0),
        pokemon.weight,
        config::WEIGHT_SCALE,
    ));
    lines.push(metric_line(
        "Base EXP",
        format!("{} EXP", pokemon.base_exp),
        pokemon.base_exp,
        config::BASE_EXP_SCALE,
    ));
    lines.push(Line::from(""));

    lines.push(section_header("Stats"));
    for stat in &pokemon.stats {
        lines.push(metric_line(
            &stat.display_name,
            stat.value.to_string(),
            stat.value,
            config::STATS_SCALE,
        ));
    }

    if let Some(chain) = &pokemon.evolution_chain {
        lines.push(Line::from(""));
        lines.push(section_header("Evolution"));

        let mut spans = vec![Span::raw("  ")];
        for (i, stage) in chain.iter().enumerate() {
            if i > 0 {
                let arrow = match stage.min_level {
                    Some(level) => format!(" ─[Lvl {level}]→ "),
                    None => " ──→ ".to_string(),
                };
                spans.push(Span::styled(arrow, Style::default().fg(t.text_muted)));
            }
            let style = if stage.id == pokemon.id {
                Style::default()
                    .fg(t.id_selected)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.text)
            };
            spans.push(Span::styled(capitalize(&stage.name), style));
        }
        lines.push(Line::from(spans));
    }

    lines
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::UNDERLINED),
        ),
    ])
}

/// One aligned metric row: label, value, colored bar against the scale.
fn metric_line(label: &str, value: String, raw: u32, scale: u32) -> Line<'static> {
    let t = theme();
    let mut spans = vec![
        Span::raw("  "),
        Span::styled(format!("{label:<8}"), Style::default().fg(t.text)),
        Span::styled(
            format!("{value:>9}  "),
            Style::default().fg(t.text_highlight),
        ),
    ];
    spans.extend(bar_spans(raw, scale));
    Line::from(spans)
}

fn bar_spans(value: u32, scale: u32) -> Vec<Span<'static>> {
    let t = theme();
    let ratio = (f64::from(value) / f64::from(scale)).clamp(0.0, 1.0);
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    vec![
        Span::styled(
            "█".repeat(filled),
            Style::default().fg(t.bar_color(ratio * 100.0)),
        ),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::default().fg(t.bar_empty),
        ),
    ]
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().bg(t.mode_normal.0).fg(t.mode_normal.1),
        ),
        InputMode::Search => Span::styled(
            " SEARCH ",
            Style::default().bg(t.mode_search.0).fg(t.mode_search.1),
        ),
    };

    let mut footer_spans = vec![mode_indicator];

    footer_spans.push(Span::styled(
        format!(" Page {}/{} ", app.page_index + 1, app.total_pages()),
        Style::default().fg(t.text_muted),
    ));

    // Show search input when in Search mode
    if app.input_mode == InputMode::Search {
        footer_spans.push(Span::raw(" Search: "));
        footer_spans.push(Span::styled(
            &app.search_query,
            Style::default().fg(t.text_highlight),
        ));
        footer_spans.push(Span::styled("_", Style::default().fg(t.search_cursor)));
        footer_spans.push(Span::raw(" "));
    }

    if let Some(ref msg) = app.message {
        footer_spans.push(Span::raw(" "));
        footer_spans.push(Span::styled(
            msg,
            Style::default().fg(t.message).add_modifier(Modifier::BOLD),
        ));
    }

    if app.show_help_bar {
        let help_text = match app.input_mode {
            InputMode::Normal => {
                " j/k:nav  n/p:page  /:search  J/K:scroll  r:refresh  ?:help  q:quit "
            }
            InputMode::Search => " Type to search, Enter/Esc to confirm ",
        };
        footer_spans.push(Span::styled(help_text, Style::default().fg(t.text_muted)));
    }

    let keybindings = Paragraph::new(Line::from(footer_spans));
    f.render_widget(keybindings, area);
}

fn draw_help_popup(f: &mut Frame) {
    let area = centered_rect(50, 60, f.area());
    let t = theme();
    let key_style = Style::default().fg(t.help_key);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(vec![
            Span::styled("↑/↓ k/j ", key_style),
            Span::raw("Move up/down"),
        ]),
        Line::from(vec![
            Span::styled("←/→ p/n ", key_style),
            Span::raw("Prev/next page"),
        ]),
        Line::from(vec![
            Span::styled("g/G     ", key_style),
            Span::raw("First/last entry on the page"),
        ]),
        Line::from(vec![
            Span::styled("J/K     ", key_style),
            Span::raw("Scroll the detail card"),
        ]),
        Line::from(vec![
            Span::styled("/       ", key_style),
            Span::raw("Search by name"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Actions",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(vec![
            Span::styled("r       ", key_style),
            Span::raw("Refetch the current page"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("?       ", key_style),
            Span::raw("Toggle help"),
        ]),
        Line::from(vec![
            Span::styled("Esc     ", key_style),
            Span::raw("Close help / clear search"),
        ]),
        Line::from(vec![Span::styled("q       ", key_style), Span::raw("Quit")]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.help_border)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
