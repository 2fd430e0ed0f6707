// ui rendering

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::core::{Directory, PaymentMethod, quote};
use crate::tui::app::{App, BookingTarget, LogLevel, LoginStage, Mode, Panel, Popup, Sender};
use crate::tui::ascii::MEDIBUD_LOGO;
use crate::tui::theme::ThemeKind;

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = &app.theme;

    // clear with bg color
    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    // main layout: header + content + footer
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // header with logo
            Constraint::Min(10),   // content
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, main[0]);
    render_content(frame, app, main[1]);
    render_footer(frame, app, main[2]);

    // render popups on top
    match app.popup {
        Popup::Themes => render_theme_popup(frame, app),
        Popup::Booking => render_booking_popup(frame, app),
        Popup::Login => render_login_popup(frame, app),
        Popup::None => {}
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.base());

    frame.render_widget(block, area);

    // split header: logo on left, info on right
    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(20)])
        .margin(1)
        .split(area);

    // render ascii logo
    let logo_lines: Vec<Line> = MEDIBUD_LOGO
        .iter()
        .map(|&line| Line::styled(line, theme.accent()))
        .collect();

    let logo = Paragraph::new(logo_lines).style(theme.base());
    frame.render_widget(logo, inner[0]);

    // render info panel
    let mode_str = match app.mode {
        Mode::Normal => "normal",
        Mode::Insert => "insert",
    };

    let account = app.user.as_deref().unwrap_or("not logged in");

    let info_lines = vec![
        Line::from(vec![
            Span::styled("| ", theme.muted()),
            Span::styled("medibud", theme.accent()),
            Span::styled(" - healthcare resources, Kanpur", theme.muted()),
        ]),
        Line::from(vec![
            Span::styled("| Account: ", theme.muted()),
            Span::styled(account, theme.base()),
            Span::styled("  | Mode: ", theme.muted()),
            Span::styled(mode_str, theme.accent()),
        ]),
        Line::from(vec![
            Span::styled("| ", theme.muted()),
            Span::styled("[Tab]", theme.accent()),
            Span::styled(" Panels  ", theme.muted()),
            Span::styled("[b]", theme.accent()),
            Span::styled(" Book  ", theme.muted()),
            Span::styled("[L]", theme.accent()),
            Span::styled(" Login  ", theme.muted()),
            Span::styled("[t]", theme.accent()),
            Span::styled(" Themes  ", theme.muted()),
            Span::styled("[q]", theme.accent()),
            Span::styled(" Quit", theme.muted()),
        ]),
    ];

    let info = Paragraph::new(info_lines).style(theme.base());
    frame.render_widget(info, inner[1]);
}

fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_chat(frame, app, cols[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(cols[1]);

    match app.browse_panel() {
        Panel::Doctors => render_doctors(frame, app, right[0]),
        Panel::Services => render_services(frame, app, right[0]),
        _ => render_hospitals(frame, app, right[0]),
    }
    render_logs(frame, app, right[1]);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let mut parts = vec![
        Span::styled(" i ", theme.base().bg(theme.accent).fg(theme.bg)),
        Span::styled(" type a health query  ", theme.muted()),
        Span::styled(" j/k ", theme.base().bg(theme.accent).fg(theme.bg)),
        Span::styled(" move  ", theme.muted()),
        Span::styled(" e/s ", theme.base().bg(theme.accent).fg(theme.bg)),
        Span::styled(" hospital filters  ", theme.muted()),
    ];

    if app.loading {
        parts.push(Span::styled(" assistant is thinking... ", theme.warning()));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)).style(theme.base()), area);
}

fn render_chat(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Chat;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if active { theme.accent() } else { theme.border() })
        .title(Span::styled(" MediBud HealthBot ", theme.title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(inner);

    render_transcript(frame, app, rows[0]);
    render_prompt(frame, app, rows[1]);
}

fn render_transcript(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let width = area.width.saturating_sub(1) as usize;

    let mut lines: Vec<Line> = Vec::new();

    if app.messages.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled("Hi! I'm MediBud HealthBot.", theme.accent()));
        lines.push(Line::styled(
            "I can help with general health queries and wellness tips.",
            theme.muted(),
        ));
        lines.push(Line::styled(
            "My responses are informational only, not medical advice.",
            theme.muted(),
        ));
    }

    for message in &app.messages {
        let (label, style) = match message.sender {
            Sender::User => ("you", theme.success()),
            Sender::Bot => ("medibud", theme.accent()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{label} "), style),
            Span::styled(message.time.format("%H:%M").to_string(), theme.muted()),
        ]));
        for text_line in message.text.lines() {
            for wrapped in wrap_text(text_line, width) {
                lines.push(Line::styled(wrapped, theme.base()));
            }
        }
        lines.push(Line::raw(""));
    }

    if app.loading {
        lines.push(Line::styled("...", theme.muted()));
    }

    // clamp scroll so usize::MAX means "stick to bottom"
    let visible = area.height as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    if app.chat_scroll > max_scroll {
        app.chat_scroll = max_scroll;
    }

    let transcript = Paragraph::new(lines)
        .style(app.theme.base())
        .scroll((app.chat_scroll as u16, 0));
    frame.render_widget(transcript, area);
}

fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if app.mode == Mode::Insert {
            theme.accent()
        } else {
            theme.border()
        })
        .title(Span::styled(" query ", theme.muted()));

    let inner = block.inner(area);

    let placeholder = app.input.is_empty() && app.mode == Mode::Normal;
    let text = if placeholder {
        Span::styled("press i and type your health query...", theme.muted())
    } else {
        Span::styled(app.input.as_str(), theme.base())
    };

    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);

    if app.mode == Mode::Insert {
        let offset = app.input[..app.input_cursor].chars().count() as u16;
        let x = inner.x + offset.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_hospitals(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Hospitals;

    let mut title = String::from(" Hospitals ");
    if app.emergency_only {
        title.push_str("[24/7 emergency] ");
    }
    if let Some(i) = app.specialty_index {
        title.push_str(&format!("[{}] ", Directory::SPECIALTIES[i]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if active { theme.accent() } else { theme.border() })
        .title(Span::styled(title, theme.title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hospitals = app.filtered_hospitals();
    if hospitals.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("no hospitals match the filters", theme.muted())),
            inner,
        );
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(5)])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    for (i, h) in hospitals.iter().enumerate() {
        let style = if i == app.hospital_selected && active {
            theme.selected()
        } else {
            theme.base()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<30}", h.name), style),
            Span::styled(format!(" icu {:>2}", h.icu_available), theme.success()),
            Span::styled(format!(" vents {:>2}", h.ventilators), theme.accent()),
            Span::styled(format!("  {:.1}\u{2605}", h.rating), theme.warning()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).style(theme.base()), rows[0]);

    // details for the selected hospital
    if let Some(h) = hospitals.get(app.hospital_selected) {
        let detail = vec![
            Line::from(vec![
                Span::styled(h.location, theme.muted()),
                Span::styled(format!("  ({} km)", h.distance_km), theme.muted()),
            ]),
            Line::from(vec![
                Span::styled(h.kind, theme.accent()),
                Span::styled(format!("  {} doctors  {}", h.doctors, h.open_hours), theme.muted()),
            ]),
            Line::styled(h.specialties.join(", "), theme.base()),
            if h.emergency {
                Line::styled("24/7 emergency services available", theme.success())
            } else {
                Line::styled("no emergency services", theme.warning())
            },
        ];
        frame.render_widget(Paragraph::new(detail).style(theme.base()), rows[1]);
    }
}

fn render_doctors(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Doctors;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if active { theme.accent() } else { theme.border() })
        .title(Span::styled(" Doctors ", theme.title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let doctors = app.visible_doctors();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(5)])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    for (i, d) in doctors.iter().enumerate() {
        let style = if i == app.doctor_selected && active {
            theme.selected()
        } else {
            theme.base()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<22}", d.name), style),
            Span::styled(format!("{:<14}", d.specialty), theme.accent()),
            Span::styled(format!("\u{20b9}{:<5}", d.fee), theme.success()),
            Span::styled(format!(" {:.1}\u{2605} ({})", d.rating, d.reviews), theme.warning()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).style(theme.base()), rows[0]);

    if let Some(d) = doctors.get(app.doctor_selected) {
        let detail = vec![
            Line::styled(d.bio, theme.base()),
            Line::from(vec![
                Span::styled(d.availability, theme.muted()),
                Span::styled(format!("  {}", d.phone), theme.muted()),
            ]),
            Line::styled(d.address, theme.muted()),
            Line::from(vec![
                Span::styled("accepts: ", theme.muted()),
                Span::styled(d.payment_methods.join(", "), theme.accent()),
            ]),
        ];
        frame.render_widget(Paragraph::new(detail).style(theme.base()), rows[1]);
    }
}

fn render_services(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Services;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if active { theme.accent() } else { theme.border() })
        .title(Span::styled(" Medical services ", theme.title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, s) in app.directory.services().iter().enumerate() {
        let style = if i == app.service_selected && active {
            theme.selected()
        } else {
            theme.base()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<20}", s.title), style),
            Span::styled(format!("\u{20b9}{:<6}/day", s.price_per_day), theme.success()),
            Span::styled(format!("  {:>2} available", s.available), theme.muted()),
        ]));
        lines.push(Line::styled(format!("  {}", s.description), theme.muted()));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("[b]", theme.accent()),
        Span::styled(" book the selected resource", theme.muted()),
    ]));

    frame.render_widget(Paragraph::new(lines).style(theme.base()), inner);
}

fn render_logs(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.panel == Panel::Logs;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if active { theme.accent() } else { theme.border() })
        .title(Span::styled(" Activity ", theme.title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .logs
        .iter()
        .skip(app.log_scroll)
        .map(|entry| {
            let (prefix, style) = match entry.level {
                LogLevel::Ok => ("ok   ", theme.success()),
                LogLevel::Info => ("info ", theme.accent()),
                LogLevel::Warn => ("warn ", theme.warning()),
                LogLevel::Error => ("error", theme.error()),
            };
            Line::from(vec![
                Span::styled(prefix, style),
                Span::raw(" "),
                Span::styled(entry.message.clone(), theme.base()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(theme.base()), inner);
}

fn render_theme_popup(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(30, 40, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(Span::styled(" themes ", theme.title()))
        .style(theme.base());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = ThemeKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let style = if i == app.theme_scroll {
                theme.selected()
            } else {
                theme.base()
            };
            Line::styled(format!("  {}", kind.name()), style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(theme.base()), inner);
}

fn render_booking_popup(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(50, 45, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(Span::styled(" book ", theme.title()))
        .style(theme.base());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    match app.booking_target {
        Some(BookingTarget::Service(id)) => {
            if let Some(s) = app.directory.service(id) {
                lines.push(Line::styled(s.title, theme.title()));
                lines.push(Line::styled(s.description, theme.muted()));
                lines.push(Line::raw(""));
                lines.push(Line::from(vec![
                    Span::styled("duration: ", theme.muted()),
                    Span::styled(format!("{} day(s)", app.booking_days), theme.base()),
                    Span::styled("   +/- to adjust", theme.muted()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("total:    ", theme.muted()),
                    Span::styled(
                        format!("\u{20b9}{}", quote(s, app.booking_days)),
                        theme.success(),
                    ),
                ]));
            }
        }
        Some(BookingTarget::Doctor(id)) => {
            if let Some(d) = app.directory.doctor(id) {
                lines.push(Line::styled(d.name, theme.title()));
                lines.push(Line::styled(d.specialty, theme.muted()));
                lines.push(Line::raw(""));
                lines.push(Line::from(vec![
                    Span::styled("consultation fee: ", theme.muted()),
                    Span::styled(format!("\u{20b9}{}", d.fee), theme.success()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("accepts: ", theme.muted()),
                    Span::styled(d.payment_methods.join(", "), theme.base()),
                ]));
            }
        }
        None => {}
    }

    lines.push(Line::raw(""));
    let mut method_spans = vec![Span::styled("payment:  ", theme.muted())];
    for (i, method) in PaymentMethod::ALL.iter().enumerate() {
        let style = if i == app.booking_method {
            theme.selected()
        } else {
            theme.muted()
        };
        method_spans.push(Span::styled(format!(" {} ", method.name()), style));
    }
    lines.push(Line::from(method_spans));

    lines.push(Line::raw(""));
    if let Some(error) = &app.booking_error {
        lines.push(Line::styled(error.clone(), theme.error()));
    } else {
        lines.push(Line::from(vec![
            Span::styled("[Enter]", theme.accent()),
            Span::styled(" pay   ", theme.muted()),
            Span::styled("[Esc]", theme.accent()),
            Span::styled(" cancel", theme.muted()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(theme.base()), inner);
}

fn render_login_popup(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(40, 40, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(Span::styled(" login ", theme.title()))
        .style(theme.base());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    match app.login_stage {
        LoginStage::Phone => {
            lines.push(Line::styled("phone number (10 digits)", theme.muted()));
            lines.push(Line::styled(app.login_phone.clone(), theme.base()));
        }
        LoginStage::Otp => {
            lines.push(Line::from(vec![
                Span::styled("otp sent to ", theme.muted()),
                Span::styled(app.login_phone.clone(), theme.base()),
            ]));
            lines.push(Line::styled(app.login_otp.clone(), theme.base()));
            if let Some(challenge) = &app.login_challenge {
                lines.push(Line::raw(""));
                lines.push(Line::from(vec![
                    Span::styled("demo otp: ", theme.muted()),
                    Span::styled(challenge.code().to_string(), theme.warning()),
                ]));
            }
        }
    }

    lines.push(Line::raw(""));
    if let Some(error) = &app.login_error {
        lines.push(Line::styled(error.clone(), theme.error()));
    } else {
        let action = match app.login_stage {
            LoginStage::Phone => " send otp   ",
            LoginStage::Otp => " verify   ",
        };
        lines.push(Line::from(vec![
            Span::styled("[Enter]", theme.accent()),
            Span::styled(action, theme.muted()),
            Span::styled("[Esc]", theme.accent()),
            Span::styled(" cancel", theme.muted()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(theme.base()), inner);

    // cursor on the active digit field
    let cursor_x = inner.x + app.login_cursor() as u16;
    let cursor_y = inner.y + 1;
    if cursor_x < inner.right() {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}
