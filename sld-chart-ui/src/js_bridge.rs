//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js`, are embedded at
//! compile time and evaluated as globals (no ES modules) exposed on
//! `window.*`. The wrappers here serialize chart descriptions to JSON and
//! call those globals once D3, the scripts and the target element exist.

use serde::Serialize;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Global functions the chart scripts define, promoted to `window.*`.
const CHART_FUNCTIONS: [&str; 5] = [
    "renderPieChart",
    "renderScatterChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SLD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Build the script that waits for D3 and evaluates the chart scripts at
/// global scope.
fn init_script() -> String {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");
    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};\n"))
        .collect();

    format!(
        r#"
        (function() {{
            if (window.__sldChartsReady || window.__sldChartsPending) return;
            window.__sldChartsPending = true;
            window.__sldChartScripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    // Indirect eval runs at global scope
                    (0, eval)(window.__sldChartScripts);
                    delete window.__sldChartScripts;
                    {promote}
                    window.__sldChartsReady = true;
                    console.log('SLD charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        scripts = js_string(&all_js),
        promote = promote,
    )
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Safe to call
/// more than once.
pub fn init_charts() {
    let _ = js_sys::eval(&init_script());
}

/// Build the script that polls until `render_fn` and the container exist,
/// then renders `figure_json` with `config_json` into `container_id`.
fn render_script(render_fn: &str, container_id: &str, figure_json: &str, config_json: &str) -> String {
    let id = js_string(container_id);
    let figure = js_string(figure_json);
    let config = js_string(config_json);
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__sldChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{render_fn}({id}, {figure}, {config});
                    }} catch(e) {{ console.error('[SLD] {render_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn render<T: Serialize>(render_fn: &str, container_id: &str, figure: &T, config: &serde_json::Value) {
    let figure_json = match serde_json::to_string(figure) {
        Ok(json) => json,
        Err(e) => {
            log::error!("[SLD] failed to serialize figure for {}: {}", container_id, e);
            return;
        }
    };
    call_js(&render_script(
        render_fn,
        container_id,
        &figure_json,
        &config.to_string(),
    ));
}

/// Render a pie chart description (see `sld_figures::PieFigure`).
pub fn render_pie_chart<T: Serialize>(container_id: &str, figure: &T, config: &serde_json::Value) {
    render("renderPieChart", container_id, figure, config);
}

/// Render a scatter chart description (see `sld_figures::ScatterFigure`).
pub fn render_scatter_chart<T: Serialize>(
    container_id: &str,
    figure: &T,
    config: &serde_json::Value,
) {
    render("renderScatterChart", container_id, figure, config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes() {
        assert_eq!(js_string(r#"{"title":"it's"}"#), r#""{\"title\":\"it's\"}""#);
    }

    #[test]
    fn render_script_passes_json_as_string_literals() {
        let script = render_script("renderPieChart", "success-pie-chart", r#"{"slices":[]}"#, "{}");
        assert!(script.contains("window.renderPieChart(\"success-pie-chart\", \"{\\\"slices\\\":[]}\", \"{}\")"));
        assert!(script.contains("document.getElementById(\"success-pie-chart\")"));
    }

    #[test]
    fn init_script_promotes_every_chart_function() {
        let script = init_script();
        for f in CHART_FUNCTIONS {
            assert!(script.contains(&format!("window.{f} = {f};")), "{} not promoted", f);
        }
        assert!(script.contains("window.__sldChartsReady = true"));
    }
}
