//! Console status output for the demo workflows.

use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};

#[derive(strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Message {
    Info,
    Success,
    Error,
}

impl Message {
    fn color(&self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Success => LogColor::Highlight,
            Self::Error => LogColor::Error,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Label,
    Error,
    Info,
    Gray,
}

impl From<LogColor> for Color {
    fn from(value: LogColor) -> Color {
        match value {
            LogColor::Highlight => Color::TrueColor { r: 255, g: 215, b: 87 },
            LogColor::Label => Color::TrueColor { r: 40, g: 100, b: 153 },
            LogColor::Error => Color::TrueColor { r: 255, g: 0, b: 45 },
            LogColor::Info => Color::TrueColor { r: 0, g: 95, b: 255 },
            LogColor::Gray => Color::TrueColor { r: 192, g: 192, b: 192 },
        }
    }
}

fn log(msg_ty: Message, label: impl Display, msg: impl Display) {
    let color = msg_ty.color();
    println!(
        "[{}] {} {}",
        msg_ty.to_string().color(color),
        label.to_string().color(LogColor::Label),
        msg.to_string().bright_black()
    );
}

pub fn log_info(label: impl Display, msg: impl Display) {
    log(Message::Info, label, msg)
}

pub fn log_success(label: impl Display, msg: impl Display) {
    log(Message::Success, label, msg)
}

pub fn log_error(label: impl Display, msg: impl Display) {
    log(Message::Error, label, msg)
}
