use leptos::html::Canvas;
use leptos::*;
use std::rc::Rc;

use crate::{
    application::{ExportFile, QueryClient, RetryPolicy},
    config::config,
    domain::{
        forecast::{ForecastSeries, PanelView, QueryState, normalize_symbol_input},
        logging::{LogComponent, get_logger},
    },
    global_state::{TooltipData, dismiss_toast, notify, toasts, tooltip},
    infrastructure::{
        ForecastHttpClient, TimeoutDelay, trigger_download,
        rendering::{CanvasRenderer, LineChartGeometry, Margin, tooltip_text},
    },
    log_error, log_info,
    presentation::{Toast, copy, download_toast, rejection_toast},
};

type ForecastQueryClient = QueryClient<ForecastHttpClient, TimeoutDelay>;

/// 🦀 Asset forecast page
#[component]
pub fn App() -> impl IntoView {
    let cfg = config();
    let client: Rc<ForecastQueryClient> = Rc::new(QueryClient::new(
        ForecastHttpClient::new(cfg.endpoint.clone()),
        TimeoutDelay,
        RetryPolicy::new(cfg.retry_count, cfg.retry_delay_ms),
    ));

    let symbol = create_rw_signal(String::new());
    let query = create_rw_signal(QueryState::Idle);

    let analyze = move || start_analysis(Rc::clone(&client), symbol.get_untracked(), query);

    view! {
        <style>{STYLES}</style>
        <div class="asset-app">
            <Header />
            <div class="layout">
                <div class="side">
                    <SymbolPanel symbol=symbol query=query on_analyze=analyze />
                    <DownloadPanel query=query />
                </div>
                <ChartPanel query=query />
            </div>
            <Toaster />
        </div>
    }
}

/// Run one forecast query in the background, mirroring its memo entry
/// into `query` after each transition
fn start_analysis(client: Rc<ForecastQueryClient>, input: String, query: RwSignal<QueryState>) {
    spawn_local(async move {
        let outcome = client
            .analyze(&input, |symbol, state| {
                if state.is_loading() {
                    tooltip().set(None);
                } else {
                    log_info!(LogComponent::Presentation("App"), "📊 {} -> {}", symbol, state.status());
                }
                // last settled request wins
                query.set(state.clone());
            })
            .await;

        if let Err(err) = outcome {
            match rejection_toast(&err) {
                Some(toast) => notify(toast),
                None => {
                    log_error!(LogComponent::Presentation("App"), "❌ Analyze failed: {}", err);
                }
            }
        }
    });
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <h1>{copy::TITLE}</h1>
            <p class="subtitle">{copy::SUBTITLE}</p>
            <div class="hint">
                <p>{copy::PAIR_HINT}</p>
            </div>
        </div>
    }
}

#[component]
fn SymbolPanel<F>(symbol: RwSignal<String>, query: RwSignal<QueryState>, on_analyze: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    let loading = move || query.with(QueryState::is_loading);

    view! {
        <div class="card">
            <label class="label" for="symbol-input">{copy::SYMBOL_LABEL}</label>
            <input
                id="symbol-input"
                class="input"
                type="text"
                placeholder=copy::SYMBOL_PLACEHOLDER
                prop:value=move || symbol.get()
                on:input=move |ev| symbol.set(normalize_symbol_input(&event_target_value(&ev)))
            />
            <button class="btn btn-analyze" disabled=loading on:click=move |_| on_analyze()>
                {move || copy::analyze_label(loading())}
            </button>
        </div>
    }
}

#[component]
fn DownloadPanel(query: RwSignal<QueryState>) -> impl IntoView {
    let on_download = move |_: ev::MouseEvent| {
        let Some(series) = query.with_untracked(|state| state.chart_series().cloned()) else {
            return;
        };
        match ExportFile::from_series(&series).and_then(|file| trigger_download(&file)) {
            Ok(()) => notify(download_toast()),
            Err(err) => {
                log_error!(LogComponent::Presentation("Download"), "❌ Export failed: {}", err);
            }
        }
    };

    view! {
        <div class="card">
            <button
                class="btn btn-download"
                disabled=move || !query.with(QueryState::can_download)
                on:click=on_download
            >
                {copy::DOWNLOAD}
            </button>
        </div>
    }
}

#[component]
fn ChartPanel(query: RwSignal<QueryState>) -> impl IntoView {
    view! {
        <div class="chart-panel">
            {move || match PanelView::from(&query.get()) {
                PanelView::Error(message) => {
                    view! { <div class="panel-error">{message.to_string()}</div> }.into_view()
                }
                PanelView::Chart(series) => view! { <LineChart series=series.clone() /> }.into_view(),
                PanelView::Placeholder => {
                    view! { <div class="panel-empty">{copy::CHART_PLACEHOLDER}</div> }.into_view()
                }
            }}
        </div>
    }
}

/// 🎨 Canvas line chart with hover tooltip
#[component]
fn LineChart(series: ForecastSeries) -> impl IntoView {
    let cfg = config();
    let canvas_ref = create_node_ref::<Canvas>();
    let geometry = LineChartGeometry::compute(
        series.points(),
        cfg.chart_width as f64,
        cfg.chart_height as f64,
        Margin::default(),
    )
    .map(Rc::new);
    let (hover, set_hover) = create_signal::<Option<usize>>(None);
    let renderer = Rc::new(CanvasRenderer::default());

    {
        let geometry = geometry.clone();
        create_effect(move |_| {
            let index = hover.get();
            let (Some(canvas), Some(geometry)) = (canvas_ref.get(), geometry.as_ref()) else {
                return;
            };
            if let Err(e) = renderer.render(&canvas, geometry, index) {
                get_logger().error(
                    LogComponent::Presentation("LineChart"),
                    &format!("❌ Render error: {}", e),
                );
            }
        });
    }

    let handle_mouse_move = {
        let geometry = geometry.clone();
        let series = series.clone();
        move |event: web_sys::MouseEvent| {
            let (Some(canvas), Some(geometry)) = (canvas_ref.get_untracked(), geometry.as_ref()) else {
                return;
            };
            // canvas may be CSS-scaled; map back to drawing-buffer pixels
            let scale_x = geometry.width / canvas.client_width().max(1) as f64;
            let scale_y = geometry.height / canvas.client_height().max(1) as f64;
            let index = geometry.hover_index(event.offset_x() as f64 * scale_x);
            set_hover.set(index);
            tooltip().set(index.and_then(|i| {
                let point = series.points().get(i)?;
                let (px, py) = geometry.points[i];
                Some(TooltipData {
                    index: i,
                    x: px / scale_x,
                    y: py / scale_y,
                    text: tooltip_text(point),
                })
            }));
        }
    };

    let handle_mouse_leave = move |_event: web_sys::MouseEvent| {
        set_hover.set(None);
        tooltip().set(None);
    };

    view! {
        <div class="chart-wrapper">
            <canvas
                node_ref=canvas_ref
                class="chart-canvas"
                width=cfg.chart_width
                height=cfg.chart_height
                on:mousemove=handle_mouse_move
                on:mouseleave=handle_mouse_leave
            />
            <ChartTooltip />
        </div>
    }
}

#[component]
fn ChartTooltip() -> impl IntoView {
    let data = tooltip();
    view! {
        <Show when=move || data.with(Option::is_some)>
            <div
                class="tooltip"
                style:left=move || data.with(|d| format!("{}px", d.as_ref().map_or(0.0, |t| t.x)))
                style:top=move || data.with(|d| format!("{}px", d.as_ref().map_or(0.0, |t| t.y)))
            >
                {move || data.with(|d| d.as_ref().map(|t| t.text.clone()).unwrap_or_default())}
            </div>
        </Show>
    }
}

#[component]
fn Toaster() -> impl IntoView {
    let queue = toasts();
    view! {
        <div class="toaster">
            <For
                each=move || queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let class = toast.css_class();
                    let Toast { id, title, description, .. } = toast;
                    view! {
                        <div class=class role="status">
                            <div class="toast-title">{title}</div>
                            <div class="toast-description">{description}</div>
                            <button class="toast-close" aria-label=copy::CLOSE on:click=move |_| dismiss_toast(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

const STYLES: &str = r#"
.asset-app {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background: #F9FAFB;
    min-height: 100vh;
    color: #111827;
}
.header { max-width: 80rem; margin: 0 auto; padding: 3rem 1rem 2rem; text-align: center; }
.header h1 { font-size: 2.25rem; font-weight: 700; margin-bottom: 0.5rem; }
.subtitle { color: #4B5563; }
.hint {
    margin-top: 1rem;
    padding: 1rem;
    background: #FEFCE8;
    border: 1px solid #FEF08A;
    border-radius: 0.5rem;
    color: #A16207;
    font-size: 0.875rem;
}
.layout {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem 3rem;
    display: grid;
    grid-template-columns: 1fr 2fr;
    gap: 2rem;
}
@media (max-width: 768px) { .layout { grid-template-columns: 1fr; } }
.side { display: grid; gap: 1rem; align-content: start; }
.card, .chart-panel {
    background: white;
    padding: 1.5rem;
    border-radius: 0.75rem;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}
.card { display: flex; flex-direction: column; gap: 1rem; }
.label { text-align: center; font-size: 0.875rem; font-weight: 500; color: #374151; }
.input { padding: 0.5rem 0.75rem; border: 1px solid #D1D5DB; border-radius: 0.375rem; }
.btn { padding: 0.5rem 1rem; border: none; border-radius: 0.375rem; color: white; cursor: pointer; }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-analyze { background: #4F46E5; }
.btn-analyze:hover:not(:disabled) { background: #4338CA; }
.btn-download { background: #16A34A; }
.btn-download:hover:not(:disabled) { background: #15803D; }
.panel-error { text-align: center; color: #EF4444; padding: 2rem 0; }
.panel-empty { text-align: center; color: #6B7280; padding: 2rem 0; }
.chart-wrapper { position: relative; height: 400px; }
.chart-canvas { width: 100%; height: 100%; }
.tooltip {
    position: absolute;
    background: white;
    border: 1px solid #E5E7EB;
    border-radius: 0.375rem;
    padding: 0.5rem 0.75rem;
    font-size: 0.75rem;
    white-space: pre-line;
    pointer-events: none;
    transform: translate(10px, -100%);
}
.toaster { position: fixed; bottom: 1rem; right: 1rem; display: grid; gap: 0.5rem; z-index: 100; }
.toast {
    position: relative;
    min-width: 20rem;
    padding: 1rem 2rem 1rem 1rem;
    border-radius: 0.375rem;
    border: 1px solid #E5E7EB;
    background: white;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.toast-destructive { background: #EF4444; border-color: #EF4444; color: white; }
.toast-title { font-weight: 600; font-size: 0.875rem; }
.toast-description { font-size: 0.875rem; opacity: 0.9; }
.toast-close {
    position: absolute;
    top: 0.5rem;
    right: 0.5rem;
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
}
"#;
