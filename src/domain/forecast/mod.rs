pub mod entities;
pub mod query;
pub mod value_objects;

pub use entities::ForecastSeries;
pub use query::{PanelView, QueryState, QueryStatus};
pub use value_objects::{ForecastPoint, Symbol, normalize_symbol_input};
