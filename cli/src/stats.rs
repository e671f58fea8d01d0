use std::{io, time::Duration};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, BorderType, Paragraph, Gauge, Padding},
};
use frontdesk_core::{
    config::StatsConfig,
    time::long_date,
    DayStats, FrontDesk, LedgerRepository, OccupancyPoint, RoomCount, TOTAL_ROOMS,
};
use tabled::{Table, Tabled};
use tabled::settings::Style as TableStyle;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    occupancy: Color,
    rooms: Color,
    full: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    occupancy: Color::Blue,
    rooms: Color::Green,
    full: Color::Red,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ChartKind {
    Occupancy,
    TopRooms,
}

pub struct StatsApp {
    pub date_label: String,
    pub today: DayStats,
    pub occupancy: Vec<OccupancyPoint>,
    pub rooms: Vec<RoomCount>,
    chart: ChartKind,
}

impl StatsApp {
    pub fn new<R: LedgerRepository>(desk: &FrontDesk<R>, config: &StatsConfig) -> Self {
        Self {
            date_label: long_date(desk.today()),
            today: desk.stats(),
            occupancy: desk.historical_occupancy(config.history_days),
            rooms: desk.top_rooms(config.top_rooms),
            chart: ChartKind::Occupancy,
        }
    }

    pub fn next_chart(&mut self) {
        self.chart = ChartKind::TopRooms;
    }

    pub fn previous_chart(&mut self) {
        self.chart = ChartKind::Occupancy;
    }
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Day")]
    label: String,
    #[tabled(rename = "Occupancy")]
    pct: String,
}

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "Room")]
    room: String,
    #[tabled(rename = "Check-ins")]
    count: usize,
}

pub fn print_summary<R: LedgerRepository>(desk: &FrontDesk<R>, config: &StatsConfig) {
    let app = StatsApp::new(desk, config);
    let stats = &app.today;

    println!("\x1b[1;36m{}\x1b[0m", app.date_label);
    println!(
        "Occupancy:  {:.1}% ({}/{} rooms, {} available)",
        stats.occupancy_pct, stats.occupied, TOTAL_ROOMS, stats.available
    );
    println!("Check-ins:  {}", stats.checkin_count);
    println!("Check-outs: {}", stats.checkout_count);
    println!("Guests:     {}", stats.total_guests);

    let days: Vec<DayRow> = app
        .occupancy
        .iter()
        .map(|p| DayRow {
            label: p.label.clone(),
            pct: format!("{:.1}%", p.pct),
        })
        .collect();
    println!("\nLast {} days", days.len());
    println!("{}", Table::new(days).with(TableStyle::modern()));

    if app.rooms.is_empty() {
        println!("\nNo check-ins recorded yet.");
        return;
    }
    let rooms: Vec<RoomRow> = app
        .rooms
        .iter()
        .map(|r| RoomRow {
            room: r.room.clone(),
            count: r.count,
        })
        .collect();
    println!("\nMost booked rooms");
    println!("{}", Table::new(rooms).with(TableStyle::modern()));
}

pub fn run<R: LedgerRepository>(desk: &FrontDesk<R>, config: &StatsConfig) -> Result<()> {
    let mut app = StatsApp::new(desk, config);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Left | KeyCode::Char('h') => app.previous_chart(),
                        KeyCode::Right | KeyCode::Char('l') => app.next_chart(),
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(frame: &mut Frame, app: &StatsApp) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header / Tabs
            Constraint::Min(10),   // Chart + Sidebar
            Constraint::Length(1), // Footer / Help
        ])
        .split(size);

    // --- Header ---
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),
            Constraint::Min(1),
            Constraint::Length(36),
        ])
        .split(main_layout[0]);

    let app_title = Paragraph::new(Span::styled("FRONT DESK", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)))
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let (title, has_prev, has_next) = match app.chart {
        ChartKind::Occupancy => (format!(" Occupancy, last {} days ", app.occupancy.len()), false, true),
        ChartKind::TopRooms => (" Most booked rooms ".to_string(), true, false),
    };
    let nav_text = Line::from(vec![
        Span::styled(" < ", Style::default().fg(if has_prev { THEME.text } else { THEME.muted })),
        Span::styled(title, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(" > ", Style::default().fg(if has_next { THEME.text } else { THEME.muted })),
    ]);
    let nav = Paragraph::new(nav_text).alignment(Alignment::Right).block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);

    frame.render_widget(header_block, main_layout[0]);

    // --- Main Content Split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(75), // Chart Area
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(25), // Info Panel
        ])
        .split(main_layout[1]);

    match app.chart {
        ChartKind::Occupancy => draw_occupancy_chart(frame, &app.occupancy, content_chunks[0]),
        ChartKind::TopRooms => draw_rooms_chart(frame, &app.rooms, content_chunks[0]),
    }

    draw_info_panel(frame, app, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("CHART: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help).alignment(Alignment::Center).style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_occupancy_chart(frame: &mut Frame, points: &[OccupancyPoint], area: Rect) {
    // Bars are in tenths of a percent so one decimal survives the u64.
    let bar_items: Vec<Bar> = points.iter().map(|p| {
        let value = (p.pct * 10.0).round() as u64;
        Bar::default()
            .label(p.label.as_str())
            .value(value)
            .style(Style::default().fg(THEME.occupancy))
            .text_value(format!("{:.1}%", p.pct))
    }).collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Occupancy (%) ");

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(6)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bar_items))
        .max(1000);

    frame.render_widget(chart, area);
}

fn draw_rooms_chart(frame: &mut Frame, rooms: &[RoomCount], area: Rect) {
    let bar_items: Vec<Bar> = rooms.iter().map(|r| {
        Bar::default()
            .label(r.room.as_str())
            .value(r.count as u64)
            .style(Style::default().fg(THEME.rooms))
            .text_value(r.count.to_string())
    }).collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Check-ins per room ");

    if bar_items.is_empty() {
        let empty = Paragraph::new("No check-ins recorded yet").alignment(Alignment::Center).block(chart_block);
        frame.render_widget(empty, area);
        return;
    }

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(6)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bar_items));

    frame.render_widget(chart, area);
}

fn draw_info_panel(frame: &mut Frame, app: &StatsApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Stats
            Constraint::Min(1),     // Gauge
        ])
        .split(area);

    let stats = &app.today;
    let info_text = vec![
        Line::from(vec![Span::styled(app.date_label.as_str(), Style::default().add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Check-ins:  ", Style::default().fg(THEME.muted)),
            Span::styled(stats.checkin_count.to_string(), Style::default().fg(THEME.rooms).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Check-outs: ", Style::default().fg(THEME.muted)),
            Span::styled(stats.checkout_count.to_string(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Guests:     ", Style::default().fg(THEME.muted)),
            Span::styled(stats.total_guests.to_string(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Available:  ", Style::default().fg(THEME.muted)),
            Span::styled(format!("{}/{}", stats.available, TOTAL_ROOMS), Style::default().fg(THEME.text)),
        ]),
    ];

    let info_block = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Today "));
    frame.render_widget(info_block, chunks[0]);

    let ratio = stats.occupancy_pct / 100.0;
    let gauge = Gauge::default()
        .block(Block::default().title(" Occupancy ").borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)))
        .gauge_style(Style::default().fg(if ratio >= 1.0 { THEME.full } else { THEME.occupancy }))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{:.1}%", stats.occupancy_pct));

    frame.render_widget(gauge, chunks[1]);
}
