//! Console layout: transport line, bus gauges, output meter and key help

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Everything the console shows, copied out of the app each frame
pub struct Snapshot {
    pub level: u32,
    /// Name, tonal centre and bar count of the playing piece
    pub composition: Option<(&'static str, &'static str, usize)>,
    pub tempo_bpm: Option<f64>,
    /// Structure index of the bar that plays next
    pub next_bar: Option<usize>,
    pub audible: bool,
    /// Audio clock, seconds
    pub clock: f64,
    pub sample_rate: f32,
    pub music_volume: f32,
    pub music_enabled: bool,
    pub sfx_volume: f32,
    pub sfx_enabled: bool,
    pub peak: f32,
    pub last_event: String,
}

pub fn render(frame: &mut Frame, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Transport
            Constraint::Length(3), // Music bus
            Constraint::Length(3), // Effects bus
            Constraint::Length(3), // Output meter
            Constraint::Min(1),    // Last event
            Constraint::Length(2), // Help
        ])
        .split(frame.area());

    render_transport(frame, chunks[0], snapshot);
    render_bus(
        frame,
        chunks[1],
        " Music [+/-] [M] ",
        snapshot.music_volume,
        snapshot.music_enabled,
        Color::Cyan,
    );
    render_bus(
        frame,
        chunks[2],
        " Effects [[/]] [F] ",
        snapshot.sfx_volume,
        snapshot.sfx_enabled,
        Color::Magenta,
    );

    let meter = Gauge::default()
        .block(Block::default().title(" Output ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .label(format!("{:.2}", snapshot.peak))
        .ratio(snapshot.peak.clamp(0.0, 1.0) as f64);
    frame.render_widget(meter, chunks[3]);

    let event = Paragraph::new(format!(" {}", snapshot.last_event))
        .style(Style::default().fg(Color::White));
    frame.render_widget(event, chunks[4]);

    let help = Paragraph::new(vec![
        Line::from(" [1-9] Start level  [S] Stop  [Space] Click  [L] Level complete  [Q] Quit"),
        Line::from(" [C] Collision  [W] Wall bounce  [O] Door open  [P] Door close"),
    ])
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[5]);
}

fn render_transport(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default().title(" devilbox ").borders(Borders::ALL);

    let (status, status_color) = if snapshot.audible {
        ("● live", Color::Green)
    } else {
        ("○ silent", Color::Yellow)
    };

    let mut spans = vec![
        Span::styled(format!(" {status}  "), Style::default().fg(status_color)),
        Span::styled(
            format!("Level {}  ", snapshot.level),
            Style::default().fg(Color::White),
        ),
    ];

    match (snapshot.composition, snapshot.tempo_bpm, snapshot.next_bar) {
        (Some((name, key, bars)), Some(bpm), Some(next)) => {
            // next_bar has already advanced past the bar that is sounding
            let playing = (next + bars - 1) % bars + 1;
            spans.push(Span::styled(
                format!("{name} ({key})  "),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(
                format!("BPM: {bpm:.0}  Bar {playing}/{bars}  "),
                Style::default().fg(Color::White),
            ));
        }
        _ => spans.push(Span::styled(
            "⏹ Stopped  ",
            Style::default().fg(Color::DarkGray),
        )),
    }

    spans.push(Span::styled(
        format!("{:.1}s @ {:.1}kHz", snapshot.clock, snapshot.sample_rate / 1000.0),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_bus(frame: &mut Frame, area: Rect, title: &str, volume: f32, enabled: bool, color: Color) {
    let (label, style) = if enabled {
        (
            format!("{:.0}%", volume * 100.0),
            Style::default().fg(color),
        )
    } else {
        (
            format!("off ({:.0}%)", volume * 100.0),
            Style::default().fg(Color::DarkGray),
        )
    };

    let gauge = Gauge::default()
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .gauge_style(style)
        .label(label)
        .ratio(volume.clamp(0.0, 1.0) as f64);
    frame.render_widget(gauge, area);
}
