use std::{fmt, fmt::Write as _, thread};

use chrono::{format::DelayedFormat, DateTime, Local};
use crossbeam_channel::{unbounded, Sender};
use once_cell::sync::Lazy;

use crate::config;

pub mod rotate;

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new("default"));

/// 累積到這個長度或佇列清空時才寫入檔案
const FLUSH_SIZE: usize = 4096;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        })
    }
}

pub struct LogMessage {
    pub level: Level,
    pub msg: String,
    pub created_at: DateTime<Local>,
}

impl LogMessage {
    pub fn new(level: Level, msg: String) -> Self {
        LogMessage {
            level,
            msg,
            created_at: Local::now(),
        }
    }
}

/// 以名稱區分檔案的非同步日誌，寫檔由背景線程負責
pub struct Logger {
    writer: Sender<LogMessage>,
}

impl Logger {
    pub fn new(log_name: &str) -> Self {
        let settings = &config::SETTINGS.log;
        let fn_pattern = format!("{}/%Y-%m-%d-{}.log", settings.dir, log_name);
        let max_size = settings.max_size_mb * 1024 * 1024;
        let max_age_days = settings.max_age_days;
        let (tx, rx) = unbounded::<LogMessage>();

        // 寫入檔案的操作使用另一個線程處理
        let spawned = thread::Builder::new()
            .name(format!("log-{}", log_name))
            .spawn(move || {
                let mut rotate = rotate::Rotate::with_options(fn_pattern, max_size, max_age_days);
                let mut lines = String::with_capacity(FLUSH_SIZE);

                for received in &rx {
                    if writeln!(
                        &mut lines,
                        "{} {} {}",
                        received.created_at.format("%F %X%.6f"),
                        received.level,
                        received.msg
                    )
                    .is_err()
                    {
                        continue;
                    }

                    if rx.is_empty() || lines.len() >= FLUSH_SIZE {
                        if let Err(why) = rotate.write_msg(received.created_at, lines.as_bytes()) {
                            error_console(format!(
                                "Failed to write to log file. because:{:#?}\r\nmsg:{}",
                                why, lines
                            ));
                        }

                        rotate.flush();
                        lines.clear();
                    }
                }
            });

        if let Err(why) = spawned {
            error_console(format!("Failed to spawn the log writer because {:?}", why));
        }

        Logger { writer: tx }
    }

    pub fn debug(&self, log: String) {
        self.send(Level::Debug, log);
    }

    pub fn info(&self, log: String) {
        self.send(Level::Info, log);
    }

    pub fn warn(&self, log: String) {
        self.send(Level::Warn, log);
    }

    pub fn error(&self, log: String) {
        self.send(Level::Error, log);
    }

    fn send(&self, level: Level, msg: String) {
        if let Err(why) = self.writer.send(LogMessage::new(level, msg)) {
            error_console(why.to_string());
        }
    }
}

pub fn debug_file_async(log: String) {
    LOGGER.debug(log);
}

pub fn info_file_async(log: String) {
    LOGGER.info(log);
}

pub fn warn_file_async(log: String) {
    LOGGER.warn(log);
}

pub fn error_file_async(log: String) {
    LOGGER.error(log);
}

pub fn error_console(log: String) {
    println!(
        "{} Error {}",
        DelayedFormat::to_string(&Local::now().format("%Y-%m-%d %H:%M:%S.%3f")),
        log
    );
}
