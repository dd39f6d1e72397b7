use ::log::Level;
use wasm_bindgen::prelude::*;

use crate::event::Event;

/// Installs the `log` backend: `console_log` in the browser, `env_logger`
/// natively. `level` is a `log::Level` name; anything else means `info`.
/// Repeat calls keep the first backend.
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) {
    let level = level
        .as_deref()
        .and_then(|name| name.parse::<Level>().ok())
        .unwrap_or(Level::Info);
    install_backend(level);
}

#[cfg(target_arch = "wasm32")]
fn install_backend(level: Level) {
    let _ = console_log::init_with_level(level);
}

#[cfg(not(target_arch = "wasm32"))]
fn install_backend(level: Level) {
    let _ = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .is_test(cfg!(test))
        .try_init();
}

#[cfg(target_arch = "wasm32")]
mod wasm_log {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        fn log(message: &str);
    }

    pub fn log_line(message: &str) {
        log(message);
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_log::log_line;

#[cfg(not(target_arch = "wasm32"))]
pub fn log_line(message: &str) {
    println!("{message}");
}

/// Encodes an event as a JSON line, mirrors it to console and appends it to `events`.
pub fn push_event(events: &mut Vec<String>, event: Event) {
    match event.to_json_line() {
        Ok(line) => {
            log_line(&line);
            events.push(line);
        }
        Err(err) => {
            ::log::warn!("dropping unencodable event {event:?}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use ::log::LevelFilter;

    use super::init_logging;
    use crate::config::GameConfig;
    use crate::session::GameSession;

    #[test]
    fn init_logging_enables_diagnostics() {
        init_logging(Some("debug".to_string()));
        assert_ne!(::log::max_level(), LevelFilter::Off);
        assert!(::log::log_enabled!(::log::Level::Info));

        init_logging(Some("not-a-level".to_string()));
        GameSession::new(GameConfig::default());
        assert_ne!(::log::max_level(), LevelFilter::Off);
    }
}
