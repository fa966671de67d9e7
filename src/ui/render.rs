// src/ui/render.rs
use super::{App, InputMode};
use crate::explorer::Node;
use ratatui::{prelude::*, widgets::*};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.size());

    f.render_widget(breadcrumb(app), chunks[0]);
    draw_entries(f, app, chunks[1]);
    f.render_widget(detail_line(app), chunks[2]);
    f.render_widget(status_line(app), chunks[3]);
}

fn breadcrumb(app: &App) -> Paragraph<'static> {
    let path = app.store.current_path();
    let mut spans = vec![Span::styled("Home", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))];
    if !path.is_root() {
        spans.push(Span::raw(" > "));
        spans.push(Span::styled(path.to_display_string(), Style::default().fg(Color::Cyan)));
    }
    Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).title("treexp"))
}

fn draw_entries(f: &mut Frame, app: &App, area: Rect) {
    let entries = app.visible_entries();
    let title = match &app.filter {
        Some(pattern) if !pattern.is_empty() => format!("Entries [{}]", pattern),
        _ => "Entries".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if entries.is_empty() {
        let empty = Paragraph::new("empty").style(Style::default().fg(Color::DarkGray)).block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = entries.iter().map(|node| entry_item(app, node)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(app.cursor.min(entries.len() - 1)));
    f.render_stateful_widget(list, area, &mut state);
}

fn entry_item(app: &App, node: &Node) -> ListItem<'static> {
    let marker = if app.store.is_selected(node.id()) { "* " } else { "  " };
    let label = if app.show_extensions { node.full_name() } else { node.name() };
    let (icon, style) = if node.is_folder() {
        ("[D] ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
    } else {
        ("[F] ", Style::default())
    };
    ListItem::new(Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::raw(icon),
        Span::styled(label.to_string(), style),
    ]))
}

fn detail_line(app: &App) -> Paragraph<'static> {
    let text = match app.entry_under_cursor() {
        Some(node) => format!(
            " {}  created {}  selected {}",
            node.full_name(),
            node.meta().created_at.format("%Y-%m-%d %H:%M:%S"),
            app.store.selected_items().len()
        ),
        None => String::new(),
    };
    Paragraph::new(text).style(Style::default().fg(Color::DarkGray))
}

fn status_line(app: &App) -> Paragraph<'static> {
    match app.mode {
        InputMode::Prompt => Paragraph::new(format!("name: {}", app.input)),
        InputMode::Filter => Paragraph::new(format!("/{}", app.input)),
        InputMode::Normal => match &app.status {
            Some(message) => Paragraph::new(message.clone()).style(Style::default().fg(Color::Red)),
            None => Paragraph::new(
                "q quit  enter open  bksp back  ~ home  space select  v add  n new folder  / filter",
            )
            .style(Style::default().fg(Color::DarkGray)),
        },
    }
}
