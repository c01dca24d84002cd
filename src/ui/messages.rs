//! Console status lines: one colored, icon-prefixed line per message.
//! Errors go to stderr, everything else to stdout.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

/// The line printed for `msg` at `level`, ANSI codes included.
pub fn format_line<T: fmt::Display>(level: Level, msg: T) -> String {
    format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
}

fn emit<T: fmt::Display>(level: Level, msg: T) {
    let line = format_line(level, msg);
    if level == Level::Error {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}
