// app state for the tui

use crate::core::{Directory, Doctor, Hospital, HospitalFilter, OtpChallenge, PaymentMethod};
use crate::tui::theme::{Theme, ThemeKind, detect_theme};
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Chat,
    Hospitals,
    Doctors,
    Services,
    Logs,
}

impl Panel {
    const ORDER: [Panel; 5] = [
        Panel::Chat,
        Panel::Hospitals,
        Panel::Doctors,
        Panel::Services,
        Panel::Logs,
    ];

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|&p| p == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|&p| p == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Themes,
    Booking,
    Login,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Ok,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub time: DateTime<Local>,
}

/// What the booking popup is booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingTarget {
    Service(u32),
    Doctor(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStage {
    Phone,
    Otp,
}

pub struct App {
    pub mode: Mode,
    pub panel: Panel,
    pub popup: Popup,
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    pub directory: Directory,

    // chat transcript
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub input_cursor: usize,
    pub loading: bool,
    pub chat_scroll: usize,

    // browse panels
    pub last_browse: Panel,
    pub hospital_selected: usize,
    pub doctor_selected: usize,
    pub service_selected: usize,
    pub emergency_only: bool,
    pub specialty_index: Option<usize>,

    // booking popup
    pub booking_target: Option<BookingTarget>,
    pub booking_days: u32,
    pub booking_method: usize,
    pub booking_error: Option<String>,

    // login popup
    pub login_stage: LoginStage,
    pub login_phone: String,
    pub login_phone_cursor: usize,
    pub login_otp: String,
    pub login_otp_cursor: usize,
    pub login_challenge: Option<OtpChallenge>,
    pub login_error: Option<String>,
    pub user: Option<String>,

    // logs
    pub logs: Vec<LogEntry>,
    pub log_scroll: usize,
    pub theme_scroll: usize,

    // prompt history
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl App {
    pub fn new(directory: Directory) -> Self {
        let theme_kind = detect_theme();

        let mut app = Self {
            mode: Mode::Normal,
            panel: Panel::Chat,
            popup: Popup::None,
            theme_kind,
            theme: Theme::from_kind(theme_kind),
            directory,
            messages: Vec::new(),
            input: String::new(),
            input_cursor: 0,
            loading: false,
            chat_scroll: 0,
            last_browse: Panel::Hospitals,
            hospital_selected: 0,
            doctor_selected: 0,
            service_selected: 0,
            emergency_only: false,
            specialty_index: None,
            booking_target: None,
            booking_days: 1,
            booking_method: 0,
            booking_error: None,
            login_stage: LoginStage::Phone,
            login_phone: String::new(),
            login_phone_cursor: 0,
            login_otp: String::new(),
            login_otp_cursor: 0,
            login_challenge: None,
            login_error: None,
            user: None,
            logs: Vec::new(),
            log_scroll: 0,
            theme_scroll: theme_kind.index(),
            history: Vec::new(),
            history_index: None,
        };

        app.log(
            LogLevel::Ok,
            format!("directory loaded ({} hospitals)", app.directory.hospitals().len()),
        );
        app.log(LogLevel::Info, "assistant ready".to_string());

        app
    }

    pub fn log(&mut self, level: LogLevel, message: String) {
        self.logs.push(LogEntry { level, message });
        // auto-scroll to bottom
        if self.logs.len() > 1 {
            self.log_scroll = self.logs.len().saturating_sub(10);
        }
    }

    // mode handling

    pub fn enter_insert(&mut self) {
        self.panel = Panel::Chat;
        self.mode = Mode::Insert;
    }

    pub fn exit_insert(&mut self) {
        self.mode = Mode::Normal;
    }

    pub fn next_panel(&mut self) {
        self.panel = self.panel.next();
        self.remember_browse();
    }

    pub fn prev_panel(&mut self) {
        self.panel = self.panel.prev();
        self.remember_browse();
    }

    fn remember_browse(&mut self) {
        if matches!(self.panel, Panel::Hospitals | Panel::Doctors | Panel::Services) {
            self.last_browse = self.panel;
        }
    }

    /// The browse panel to draw on the right side, even while chatting.
    pub fn browse_panel(&self) -> Panel {
        match self.panel {
            Panel::Hospitals | Panel::Doctors | Panel::Services => self.panel,
            _ => self.last_browse,
        }
    }

    // chat input editing

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.input_cursor > 0 {
            let prev = prev_boundary(&self.input, self.input_cursor);
            self.input.remove(prev);
            self.input_cursor = prev;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.input_cursor > 0 {
            self.input_cursor = prev_boundary(&self.input, self.input_cursor);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input_cursor = next_boundary(&self.input, self.input_cursor);
        }
    }

    pub fn move_cursor_start(&mut self) {
        self.input_cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.input_cursor = self.input.len();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
    }

    /// Take the prompt if it has any content. Whitespace-only input is
    /// dropped here so the assistant is never invoked for it.
    pub fn submit_prompt(&mut self) -> Option<String> {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            return None;
        }

        self.history.push(query.clone());
        self.history_index = None;
        self.clear_input();
        Some(query)
    }

    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(0) => 0,
            Some(i) => i - 1,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.input = self.history[idx].clone();
        self.input_cursor = self.input.len();
    }

    pub fn history_next(&mut self) {
        let Some(idx) = self.history_index else {
            return;
        };
        if idx + 1 < self.history.len() {
            self.history_index = Some(idx + 1);
            self.input = self.history[idx + 1].clone();
        } else {
            self.history_index = None;
            self.input.clear();
        }
        self.input_cursor = self.input.len();
    }

    // transcript

    pub fn push_user(&mut self, text: String) {
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text,
            time: Local::now(),
        });
        self.chat_scroll = usize::MAX; // stick to bottom
    }

    pub fn push_bot(&mut self, text: String) {
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text,
            time: Local::now(),
        });
        self.chat_scroll = usize::MAX;
    }

    // browse filters and selection

    pub fn hospital_filter(&self) -> HospitalFilter {
        HospitalFilter {
            search: None,
            specialty: self
                .specialty_index
                .map(|i| Directory::SPECIALTIES[i].to_string()),
            emergency_only: self.emergency_only,
        }
    }

    pub fn filtered_hospitals(&self) -> Vec<&Hospital> {
        self.directory.search_hospitals(&self.hospital_filter())
    }

    pub fn visible_doctors(&self) -> Vec<&Doctor> {
        self.directory.doctors().iter().collect()
    }

    pub fn toggle_emergency_only(&mut self) {
        self.emergency_only = !self.emergency_only;
        self.hospital_selected = 0;
    }

    pub fn cycle_specialty(&mut self) {
        self.specialty_index = match self.specialty_index {
            None => Some(0),
            Some(i) if i + 1 < Directory::SPECIALTIES.len() => Some(i + 1),
            Some(_) => None,
        };
        self.hospital_selected = 0;
    }

    pub fn selection_up(&mut self) {
        match self.panel {
            Panel::Hospitals => self.hospital_selected = self.hospital_selected.saturating_sub(1),
            Panel::Doctors => self.doctor_selected = self.doctor_selected.saturating_sub(1),
            Panel::Services => self.service_selected = self.service_selected.saturating_sub(1),
            Panel::Logs => self.log_scroll = self.log_scroll.saturating_sub(1),
            Panel::Chat => self.chat_scroll = self.chat_scroll.saturating_sub(1),
        }
    }

    pub fn selection_down(&mut self) {
        match self.panel {
            Panel::Hospitals => {
                let len = self.filtered_hospitals().len();
                if self.hospital_selected + 1 < len {
                    self.hospital_selected += 1;
                }
            }
            Panel::Doctors => {
                if self.doctor_selected + 1 < self.directory.doctors().len() {
                    self.doctor_selected += 1;
                }
            }
            Panel::Services => {
                if self.service_selected + 1 < self.directory.services().len() {
                    self.service_selected += 1;
                }
            }
            Panel::Logs => {
                if self.log_scroll + 1 < self.logs.len() {
                    self.log_scroll += 1;
                }
            }
            Panel::Chat => {
                self.chat_scroll = self.chat_scroll.saturating_add(1);
            }
        }
    }

    // booking popup

    pub fn open_booking(&mut self) {
        let target = match self.browse_panel() {
            Panel::Services => self
                .directory
                .services()
                .get(self.service_selected)
                .map(|s| BookingTarget::Service(s.id)),
            Panel::Doctors => self
                .directory
                .doctors()
                .get(self.doctor_selected)
                .map(|d| BookingTarget::Doctor(d.id)),
            _ => None,
        };

        if let Some(target) = target {
            self.booking_target = Some(target);
            self.booking_days = 1;
            self.booking_method = 0;
            self.booking_error = None;
            self.popup = Popup::Booking;
        }
    }

    pub fn booking_days_up(&mut self) {
        self.booking_days = self.booking_days.saturating_add(1);
        self.booking_error = None;
    }

    pub fn booking_days_down(&mut self) {
        if self.booking_days > 1 {
            self.booking_days -= 1;
        }
        self.booking_error = None;
    }

    pub fn booking_method_next(&mut self) {
        self.booking_method = (self.booking_method + 1) % PaymentMethod::ALL.len();
        self.booking_error = None;
    }

    pub fn booking_method_prev(&mut self) {
        self.booking_method =
            (self.booking_method + PaymentMethod::ALL.len() - 1) % PaymentMethod::ALL.len();
        self.booking_error = None;
    }

    pub fn selected_method(&self) -> PaymentMethod {
        PaymentMethod::ALL[self.booking_method]
    }

    /// Run the simulated booking for the popup target.
    pub fn confirm_booking(&mut self) {
        let Some(target) = self.booking_target else {
            self.close_popup();
            return;
        };

        let method = self.selected_method();
        let result = match target {
            BookingTarget::Service(id) => self
                .directory
                .service(id)
                .ok_or(crate::Error::NotFound("service", id))
                .and_then(|s| crate::core::book_service(s, self.booking_days, method)),
            BookingTarget::Doctor(id) => self
                .directory
                .doctor(id)
                .ok_or(crate::Error::NotFound("doctor", id))
                .and_then(|d| crate::core::book_appointment(d, method)),
        };

        match result {
            Ok(receipt) => {
                self.log(LogLevel::Ok, format!("{} [{}]", receipt.message, receipt.reference));
                self.booking_target = None;
                self.close_popup();
            }
            Err(e) => self.booking_error = Some(e.to_string()),
        }
    }

    // login popup

    pub fn open_login(&mut self) {
        self.login_stage = LoginStage::Phone;
        self.login_phone.clear();
        self.login_phone_cursor = 0;
        self.login_otp.clear();
        self.login_otp_cursor = 0;
        self.login_challenge = None;
        self.login_error = None;
        self.popup = Popup::Login;
    }

    fn login_field_mut(&mut self) -> (&mut String, &mut usize) {
        match self.login_stage {
            LoginStage::Phone => (&mut self.login_phone, &mut self.login_phone_cursor),
            LoginStage::Otp => (&mut self.login_otp, &mut self.login_otp_cursor),
        }
    }

    pub fn login_insert_char(&mut self, c: char) {
        // both fields are digits-only
        if !c.is_ascii_digit() {
            return;
        }
        let (field, cursor) = self.login_field_mut();
        field.insert(*cursor, c);
        *cursor += 1;
        self.login_error = None;
    }

    pub fn login_delete_char(&mut self) {
        let (field, cursor) = self.login_field_mut();
        if *cursor > 0 {
            *cursor -= 1;
            field.remove(*cursor);
        }
    }

    pub fn login_cursor(&self) -> usize {
        match self.login_stage {
            LoginStage::Phone => self.login_phone_cursor,
            LoginStage::Otp => self.login_otp_cursor,
        }
    }

    pub fn login_submit(&mut self) {
        match self.login_stage {
            LoginStage::Phone => match crate::core::send_otp(&self.login_phone) {
                Ok(challenge) => {
                    self.log(LogLevel::Info, format!("otp sent to {}", challenge.phone()));
                    self.login_challenge = Some(challenge);
                    self.login_stage = LoginStage::Otp;
                    self.login_error = None;
                }
                Err(e) => self.login_error = Some(e.to_string()),
            },
            LoginStage::Otp => {
                let Some(challenge) = self.login_challenge.take() else {
                    return;
                };
                match challenge.verify(&self.login_otp) {
                    Ok(()) => {
                        let phone = challenge.phone().to_string();
                        self.log(LogLevel::Ok, format!("logged in as {phone}"));
                        self.user = Some(phone);
                        self.close_popup();
                    }
                    Err(e) => {
                        self.login_error = Some(e.to_string());
                        self.login_challenge = Some(challenge);
                    }
                }
            }
        }
    }

    // theme popup

    pub fn set_theme(&mut self, kind: ThemeKind) {
        self.theme_kind = kind;
        self.theme = Theme::from_kind(kind);
        self.theme_scroll = kind.index();
    }

    pub fn open_theme_popup(&mut self) {
        self.popup = Popup::Themes;
        self.theme_scroll = self.theme_kind.index();
    }

    pub fn theme_scroll_up(&mut self) {
        if self.theme_scroll > 0 {
            self.theme_scroll -= 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    pub fn theme_scroll_down(&mut self) {
        if self.theme_scroll < ThemeKind::ALL.len() - 1 {
            self.theme_scroll += 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    pub fn select_theme(&mut self) {
        self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        self.close_popup();
    }

    pub fn close_popup(&mut self) {
        self.popup = Popup::None;
    }
}

fn prev_boundary(s: &str, idx: usize) -> usize {
    let mut i = idx - 1;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_boundary(s: &str, idx: usize) -> usize {
    let mut i = idx + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}
