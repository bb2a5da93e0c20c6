use strum::{AsRefStr, Display as StrumDisplay};

use super::entities::ForecastSeries;
use crate::domain::errors::AppError;

/// Lifecycle of one forecast request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Loading,
    Success(ForecastSeries),
    /// Panel-ready message
    Error(String),
}

/// Payload-free tag of [`QueryState`], for logs and CSS hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum QueryStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl QueryState {
    /// Settle a finished request
    pub fn settled(result: Result<ForecastSeries, AppError>) -> Self {
        match result {
            Ok(series) => QueryState::Success(series),
            Err(err) => QueryState::Error(err.user_message()),
        }
    }

    pub fn status(&self) -> QueryStatus {
        match self {
            QueryState::Idle => QueryStatus::Idle,
            QueryState::Loading => QueryStatus::Loading,
            QueryState::Success(_) => QueryStatus::Success,
            QueryState::Error(_) => QueryStatus::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, QueryState::Success(_) | QueryState::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            QueryState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Successful series with at least one plottable point
    pub fn chart_series(&self) -> Option<&ForecastSeries> {
        match self {
            QueryState::Success(series) if !series.is_empty() => Some(series),
            _ => None,
        }
    }

    pub fn can_download(&self) -> bool {
        self.chart_series().is_some()
    }
}

/// What the chart panel shows for a given state. Errors win over data.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView<'a> {
    Error(&'a str),
    Chart(&'a ForecastSeries),
    Placeholder,
}

impl<'a> From<&'a QueryState> for PanelView<'a> {
    fn from(state: &'a QueryState) -> Self {
        if let Some(msg) = state.error_message() {
            PanelView::Error(msg)
        } else if let Some(series) = state.chart_series() {
            PanelView::Chart(series)
        } else {
            PanelView::Placeholder
        }
    }
}
