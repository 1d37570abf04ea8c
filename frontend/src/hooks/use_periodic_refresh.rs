use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Configuration for one periodic refresh
#[derive(Clone, PartialEq)]
pub struct PeriodicRefreshConfig {
    /// Shown in log lines only
    pub name: &'static str,
    pub interval_ms: u32,
}

/// Run `refresh_fn` every `interval_ms` while the calling component is mounted.
///
/// The interval is rebuilt when the configuration or the callback changes and
/// cancelled on unmount. An interval of 0 disables the timer.
#[hook]
pub fn use_periodic_refresh(config: PeriodicRefreshConfig, refresh_fn: Callback<()>) {
    use_effect_with((config, refresh_fn), move |(config, refresh_fn)| {
        let name = config.name;
        let interval = if config.interval_ms > 0 {
            Logger::debug_with_component(
                "periodic-refresh-hook",
                &format!("Starting {} timer every {} ms", name, config.interval_ms),
            );
            let refresh_fn = refresh_fn.clone();
            Some(Interval::new(config.interval_ms, move || refresh_fn.emit(())))
        } else {
            None
        };

        move || {
            if let Some(interval) = interval {
                drop(interval);
                Logger::debug_with_component("periodic-refresh-hook", &format!("Stopped {} timer", name));
            }
        }
    });
}
