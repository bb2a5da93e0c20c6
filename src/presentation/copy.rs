//! User-facing strings (pt-BR).

pub const TITLE: &str = "Análise de Ativos Digitais";
pub const SUBTITLE: &str = "Insira o código do ativo para visualizar a previsão de preços";
pub const PAIR_HINT: &str = "Importante: Criptomoedas são listadas com pares. Por exemplo, para prever o preço do bitcoin, use BTC-USD. Caso você use apenas BTC, o valor será relacionado ao ETF dele.";

pub const SYMBOL_LABEL: &str = "Código do Ativo";
pub const SYMBOL_PLACEHOLDER: &str = "Ex: BTC-USD";
pub const ANALYZE: &str = "Analisar";
pub const ANALYZING: &str = "Analisando...";
pub const DOWNLOAD: &str = "Baixar dados completo";

pub const CHART_PLACEHOLDER: &str =
    "Insira um código de ativo e clique em analisar para ver o gráfico";

pub const WARNING_TITLE: &str = "Atenção";
pub const EMPTY_SYMBOL: &str = "Por favor, insira o código da ação";
pub const SUCCESS_TITLE: &str = "Sucesso";
pub const DOWNLOAD_DONE: &str = "Arquivo JSON baixado com sucesso";

pub const CLOSE: &str = "Fechar";

/// Analyze button label for the current loading flag
pub fn analyze_label(loading: bool) -> &'static str {
    if loading { ANALYZING } else { ANALYZE }
}
