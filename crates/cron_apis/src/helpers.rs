use log::{error, info, warn};

pub enum LogLevel {
    Info,
    Warn,
    Error,
}

pub fn log_message(message: &str, log_level: LogLevel, logger_target: Option<&str>) {
    if let Some(target) = logger_target {
        match log_level {
            LogLevel::Info => {
                info!(target: target, "{}", message);
            }
            LogLevel::Warn => {
                warn!(target: target, "{}", message);
            }
            LogLevel::Error => {
                error!(target: target, "{}", message);
            }
        }
    } else {
        match log_level {
            LogLevel::Info => {
                info!("{}", message);
            }
            LogLevel::Warn => {
                warn!("{}", message);
            }
            LogLevel::Error => {
                error!("{}", message);
            }
        }
    }
}
