pub mod export;
pub mod query_client;
pub mod retry;

pub use export::{ExportFile, export_file_name};
pub use query_client::{ForecastSource, QueryClient};
pub use retry::{Delay, RetryPolicy, run_with_retry};
