//! Глобальный logger симуляции
//!
//! Хост может подставить свой printer через set_logger (по умолчанию —
//! console printer). Timestamp добавляем здесь, не в printer'е.

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Уровень логирования (фильтр применяется в log_with_level)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Интерфейс printer'а (хост-сторона: Godot console, файл, что угодно)
pub trait LogPrinter: Send + Sync {
    fn print(&self, level: LogLevel, message: &str);
}

// Потокобезопасный глобальный logger (Arc не нужен для static)
static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

static LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

pub fn set_logger(printer: Box<dyn LogPrinter>) {
    *LOGGER.lock().unwrap() = Some(printer);
}

pub fn set_logger_if_needed(printer: Box<dyn LogPrinter>) {
    let mut logger = LOGGER.lock().unwrap();
    if logger.is_none() {
        *logger = Some(printer);
    }
}

pub fn set_log_level(level: LogLevel) {
    *LEVEL.lock().unwrap() = level;
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    if level < *LEVEL.lock().unwrap() {
        return;
    }
    if let Some(printer) = LOGGER.lock().unwrap().as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        printer.print(level, &format!("[{}] {}", timestamp, message));
    }
}

struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn print(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}

/// Console logger по умолчанию (не перетирает уже установленный)
pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}
