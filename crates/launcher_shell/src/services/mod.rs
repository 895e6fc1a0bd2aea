//! Collaborator contracts the handlers call into, with system-backed and no-op defaults.

pub mod desktop;
pub mod mail;
pub mod network;
pub mod process;
pub mod remote;

pub use desktop::{
    DesktopOpener, NoopDesktopOpener, NoopPowerControl, NoopUiActions, PowerControl,
    SystemDesktopOpener, SystemPowerControl, UiActions,
};
pub use mail::{MailDraft, MailService, MailtoMailService, NoopMailService};
pub use network::{
    annotate_hops, NetworkDiagnostics, NoopNetworkDiagnostics, SystemNetworkDiagnostics,
};
pub use process::{NoopProcessRunner, ProcessOutput, ProcessRunner, SystemProcessRunner};
pub use remote::{
    title_case, Article, MediaCommand, MediaService, NewsQuery, NewsService,
    UnavailableMediaService, UnavailableNewsService, UnavailableWeatherService, WeatherReport,
    WeatherService, NEWS_CATEGORIES,
};

use crate::config::ShellConfig;

/// Every collaborator a handler may call, injected once at startup.
pub struct Services {
    /// Shell and program execution.
    pub processes: Box<dyn ProcessRunner>,
    /// URL and folder opening.
    pub opener: Box<dyn DesktopOpener>,
    /// Shutdown, restart, and sleep.
    pub power: Box<dyn PowerControl>,
    /// Weather lookups.
    pub weather: Box<dyn WeatherService>,
    /// News headlines.
    pub news: Box<dyn NewsService>,
    /// Media playback.
    pub media: Box<dyn MediaService>,
    /// Mail composition.
    pub mail: Box<dyn MailService>,
    /// Route tracing and port probing.
    pub network: Box<dyn NetworkDiagnostics>,
    /// Front-end window actions.
    pub ui: Box<dyn UiActions>,
}

impl Services {
    /// System-backed collaborators where the standard library suffices, unavailable otherwise.
    pub fn system(config: &ShellConfig) -> Self {
        Self {
            processes: Box::new(SystemProcessRunner),
            opener: Box::new(SystemDesktopOpener),
            power: Box::new(SystemPowerControl::new(config.allow_power_control)),
            weather: Box::new(UnavailableWeatherService),
            news: Box::new(UnavailableNewsService),
            media: Box::new(UnavailableMediaService),
            mail: Box::new(MailtoMailService),
            network: Box::new(SystemNetworkDiagnostics),
            ui: Box::new(NoopUiActions),
        }
    }

    /// Replaces the UI collaborator.
    pub fn with_ui(mut self, ui: impl UiActions + 'static) -> Self {
        self.ui = Box::new(ui);
        self
    }
}

impl Default for Services {
    /// Collaborators that touch nothing outside the process.
    fn default() -> Self {
        Self {
            processes: Box::new(NoopProcessRunner),
            opener: Box::new(NoopDesktopOpener),
            power: Box::new(NoopPowerControl),
            weather: Box::new(UnavailableWeatherService),
            news: Box::new(UnavailableNewsService),
            media: Box::new(UnavailableMediaService),
            mail: Box::new(NoopMailService),
            network: Box::new(NoopNetworkDiagnostics),
            ui: Box::new(NoopUiActions),
        }
    }
}
