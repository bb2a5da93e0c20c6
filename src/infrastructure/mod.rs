pub mod download;
pub mod http;
pub mod rendering;
pub mod services;

pub use download::trigger_download;
pub use http::ForecastHttpClient;
pub use services::{BrowserTimeProvider, ConsoleLogger, TimeoutDelay};
