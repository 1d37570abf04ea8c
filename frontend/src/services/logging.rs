use gloo::net::http::Request;
use log::{Level, LevelFilter, Metadata, Record};
use shared::{AppConfig, LogRequest};
use std::sync::OnceLock;
use wasm_bindgen_futures::spawn_local;

static LOG_ENDPOINT: OnceLock<String> = OnceLock::new();
static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

/// Component-tagged logging to the browser console, mirrored best-effort to
/// the mock API's `/api/logs` sink.
pub struct Logger;

impl Logger {
    /// Route `log` records (the domain crate logs through the facade) to the
    /// console and remember where to forward log lines. Nothing is forwarded
    /// when the app runs on mock payloads.
    pub fn init(config: &AppConfig) {
        if !config.use_mock_api {
            let _ = LOG_ENDPOINT.set(format!("{}/api/logs", config.api_base_url));
        }
        if log::set_logger(&CONSOLE_LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let line = format!("[{}] {}", component.as_deref().unwrap_or("app"), message);
        match level {
            "debug" => gloo::console::debug!(line),
            "warn" => gloo::console::warn!(line),
            "error" => gloo::console::error!(line),
            _ => gloo::console::info!(line),
        }

        if !forwards(level) {
            return;
        }
        Self::forward(LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component,
        });
    }

    fn forward(request: LogRequest) {
        let Some(endpoint) = LOG_ENDPOINT.get() else {
            return;
        };

        // Fire and forget; a missing mock API only costs the remote copy
        spawn_local(async move {
            if let Ok(builder) = Request::post(endpoint).json(&request) {
                let _ = builder.send().await;
            }
        });
    }
}

/// Debug lines stay in the console; info and above also go to the sink
fn forwards(level: &str) -> bool {
    matches!(level, "info" | "warn" | "error")
}

/// `log::Log` backend for records emitted outside the UI code
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let component = record.target().rsplit("::").next().unwrap_or("domain").to_string();
        let message = record.args().to_string();
        match record.level() {
            Level::Error => Logger::error_with_component(&component, &message),
            Level::Warn => Logger::warn_with_component(&component, &message),
            Level::Info => Logger::info_with_component(&component, &message),
            Level::Debug | Level::Trace => {
                gloo::console::debug!(format!("[{}] {}", component, message))
            }
        }
    }

    fn flush(&self) {}
}
