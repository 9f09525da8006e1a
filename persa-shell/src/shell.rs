//! Terminal page hosting the login modal.
//!
//! The page owns the open flag of the modal, reads one command per line and
//! prints the modal as text after each of them.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use persa_login::{
    copy,
    screen::{Body, Screen},
    LoginModal, Message, Signal, View,
};
use tracing::{debug, info};

const PAGE_TITLE: &str = "Finance Tracker";
const LOGIN_BUTTON: &str = "Login";

const HELP: &str = "commands: login, close, phone <number>, otp <code>, email <address>, \
                    use-email, use-phone, change-phone, change-email, reset, quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login,
    Close,
    Phone(String),
    Otp(String),
    Email(String),
    UseEmail,
    UsePhone,
    ChangePhone,
    ChangeEmail,
    Reset,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, rest) = match s.trim().split_once(' ') {
            Some((word, rest)) => (word, rest.trim()),
            None => (s.trim(), ""),
        };
        match (word, rest) {
            ("login", "") => Ok(Self::Login),
            ("close", "") => Ok(Self::Close),
            ("phone", number) => Ok(Self::Phone(number.to_string())),
            ("otp", code) => Ok(Self::Otp(code.to_string())),
            ("email", address) => Ok(Self::Email(address.to_string())),
            ("use-email", "") => Ok(Self::UseEmail),
            ("use-phone", "") => Ok(Self::UsePhone),
            ("change-phone", "") => Ok(Self::ChangePhone),
            ("change-email", "") => Ok(Self::ChangeEmail),
            ("reset", "") => Ok(Self::Reset),
            ("quit", "") | ("exit", "") => Ok(Self::Quit),
            _ => Err(format!("unknown command '{}'", s.trim())),
        }
    }
}

/// Command typed to trigger `message`.
fn command_for(message: &Message) -> &'static str {
    match message {
        Message::PhoneEdited(_) | Message::PhoneSubmitted => "phone <number>",
        Message::UseEmail => "use-email",
        Message::OtpEdited(_) | Message::OtpSubmitted => "otp <code>",
        Message::ChangePhone => "change-phone",
        Message::EmailEdited(_) | Message::EmailSubmitted => "email <address>",
        Message::UsePhone => "use-phone",
        Message::ChangeEmail => "change-email",
        Message::Reset => "reset",
    }
}

#[derive(Debug, Default)]
pub struct Page {
    modal_open: bool,
    modal: LoginModal,
}

impl Page {
    pub fn new(open_on_start: bool) -> Self {
        let mut page = Self::default();
        page.set_modal_open(open_on_start);
        page
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn modal(&self) -> &LoginModal {
        &self.modal
    }

    pub fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
        self.modal.set_open(open);
    }

    fn dispatch(&mut self, message: Message) {
        if let Some(Signal::CloseModal) = self.modal.update(message) {
            info!("page: login modal dismissed");
            self.modal_open = false;
        }
    }

    fn current_view(&self) -> Option<View> {
        self.modal.state().map(|s| s.view)
    }

    /// Applies `command`. Returns false once the user wants to leave.
    pub fn handle(&mut self, command: Command) -> Result<bool, String> {
        debug!("page: {:?}", command);
        match command {
            Command::Quit => return Ok(false),
            Command::Login => self.set_modal_open(true),
            Command::Close => self.set_modal_open(false),
            _ if !self.modal_open => {
                return Err("the login modal is closed, type 'login' to open it".to_string())
            }
            Command::Phone(number) => {
                self.dispatch(Message::PhoneEdited(number));
                self.dispatch(Message::PhoneSubmitted);
            }
            Command::Otp(code) => {
                self.dispatch(Message::OtpEdited(code));
                // Six digits complete the step on their own.
                if self.current_view() == Some(View::Otp) {
                    self.dispatch(Message::OtpSubmitted);
                }
            }
            Command::Email(address) => {
                self.dispatch(Message::EmailEdited(address));
                self.dispatch(Message::EmailSubmitted);
            }
            Command::UseEmail => self.dispatch(Message::UseEmail),
            Command::UsePhone => self.dispatch(Message::UsePhone),
            Command::ChangePhone => self.dispatch(Message::ChangePhone),
            Command::ChangeEmail => self.dispatch(Message::ChangeEmail),
            Command::Reset => self.dispatch(Message::Reset),
        }
        Ok(true)
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}  [{}]", PAGE_TITLE, LOGIN_BUTTON)?;
        match self.modal.render() {
            None => writeln!(out, "type 'login' to sign in"),
            Some(screen) => render_screen(&screen, out),
        }
    }
}

fn render_field<W: Write>(
    out: &mut W,
    label: &str,
    field: &persa_login::form::Value<String>,
) -> io::Result<()> {
    writeln!(out, "  [{}] {}", label, field.value)?;
    if let Some(warning) = field.warning {
        writeln!(out, "  ! {}", warning)?;
    }
    Ok(())
}

fn render_screen<W: Write>(screen: &Screen, out: &mut W) -> io::Result<()> {
    writeln!(out, "+--")?;
    if let Some(title) = screen.title {
        writeln!(out, "| {}", title)?;
    }
    if let Some(description) = &screen.description {
        writeln!(out, "| {}", description)?;
    }
    match &screen.body {
        Body::Phone {
            field,
            placeholder,
            can_submit,
        } => {
            writeln!(out, "  ({})", copy::phone::SEPARATOR)?;
            render_field(out, placeholder, field)?;
            if *can_submit {
                writeln!(out, "  -> phone <number>")?;
            }
        }
        Body::Otp { field, resend } => {
            render_field(out, "------", field)?;
            writeln!(out, "  {}", resend)?;
        }
        Body::Email {
            field,
            placeholder,
            can_submit,
        } => {
            render_field(out, placeholder, field)?;
            if *can_submit {
                writeln!(out, "  -> email <address>")?;
            }
        }
        Body::Confirmation {
            heading,
            sent_to_label,
            sent_to,
        } => {
            writeln!(out, "| {}", heading)?;
            writeln!(out, "  {} {}", sent_to_label, sent_to)?;
        }
    }
    for action in &screen.actions {
        writeln!(out, "  * {} ({})", action.label, command_for(&action.message))?;
    }
    if screen.terms {
        writeln!(
            out,
            "  {} {} ({}) {}",
            copy::TERMS_PREFIX,
            copy::TERMS_LINK,
            copy::TERMS_URL,
            copy::TERMS_SUFFIX
        )?;
    }
    writeln!(out, "+--")
}

/// Runs the page until `input` is exhausted or the user quits.
pub fn run<R: BufRead, W: Write>(page: &mut Page, input: R, mut out: W) -> io::Result<()> {
    page.render(&mut out)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>().and_then(|c| page.handle(c)) {
            Ok(true) => page.render(&mut out)?,
            Ok(false) => break,
            Err(e) => {
                writeln!(out, "{}", e)?;
                writeln!(out, "{}", HELP)?;
            }
        }
    }
    out.flush()
}
