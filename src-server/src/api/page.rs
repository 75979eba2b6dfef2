//! Single-page shell. The page fetches `/api/v1/dashboard` and draws the
//! chart specs with Chart.js; all numbers come pre-formatted from the core.

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use livrocaixa_core::dashboard::DASHBOARD_TITLE;
use livrocaixa_core::DashboardServiceTrait;

use crate::main_lib::AppState;

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
<style>
  body { margin: 0; min-height: 100vh; display: flex; justify-content: center;
         background: radial-gradient(ellipse at center, #181a1e 70%, #121217 100%);
         color: #fafafa; font-family: "Segoe UI", Arial, sans-serif; }
  main { max-width: 1150px; width: 95%; padding: 20px; }
  h1 { color: #00FFB4; text-align: center; margin-bottom: 25px; text-shadow: 0 2px 10px #000; }
  .selector { display: flex; justify-content: center; gap: 10px; margin-bottom: 30px; }
  .selector label { font-weight: bold; font-size: 1.1em; align-self: center; }
  .selector select { width: 180px; padding: 4px; }
  #kpis { display: flex; gap: 18px; flex-wrap: wrap; justify-content: center; margin-bottom: 25px; }
  .kpi { padding: 16px 20px; border-radius: 12px; min-width: 150px; max-width: 240px;
         flex: 1 1 120px; text-align: center; border: 1px solid #333; font-size: 1.05em; }
  .kpi .detail { font-size: 0.85em; }
  .bar { position: relative; max-width: 800px; height: 23px; margin: 0 auto 30px;
         border-radius: 12px; background: #232526; box-shadow: 0 2px 5px #0008; }
  .bar .fill { height: 100%; border-radius: 12px 0 0 12px;
               background: linear-gradient(90deg, #00FFB4, #00DD8D 80%);
               transition: width .8s cubic-bezier(.25,.1,.4,1.7); }
  .bar .label { position: absolute; top: 0; width: 100%; text-align: center;
                font-weight: bold; line-height: 23px; color: #111; }
  .chart { background: #171C24; border-radius: 12px; padding: 12px; margin-bottom: 25px; height: 400px; }
  .row { display: flex; flex-wrap: wrap; justify-content: center; gap: 20px; }
  .row .chart { flex: 1 1 400px; min-width: 320px; max-width: 560px; }
  #summary { text-align: center; opacity: .7; }
</style>
</head>
<body>
<main>
  <h1>📊 __TITLE__</h1>
  <div class="selector">
    <label for="month">Selecione o Mês:</label>
    <select id="month">__OPTIONS__</select>
  </div>
  <div id="kpis"></div>
  <div class="bar"><div class="fill" id="fill"></div><div class="label" id="progress"></div></div>
  <div class="chart"><canvas id="revenue"></canvas></div>
  <div class="row">
    <div class="chart"><canvas id="commission"></canvas></div>
    <div class="chart"><canvas id="clients"></canvas></div>
  </div>
  <div id="summary"></div>
</main>
<script>
const charts = {};
const types = { bar: "bar", line: "line", horizontalBar: "bar" };

function draw(id, spec) {
  if (charts[id]) charts[id].destroy();
  const horizontal = spec.kind === "horizontalBar";
  charts[id] = new Chart(document.getElementById(id), {
    type: types[spec.kind],
    data: {
      labels: spec.points.map(p => p.category),
      datasets: [{
        label: spec.valueLabel,
        data: spec.points.map(p => p.value),
        backgroundColor: spec.points.map(p => p.color),
        borderColor: spec.points.map(p => p.color),
        pointRadius: spec.markers ? 4 : 0,
      }],
    },
    options: {
      indexAxis: horizontal ? "y" : "x",
      maintainAspectRatio: false,
      plugins: {
        title: { display: true, text: spec.title, color: "#fafafa" },
        legend: { display: false },
        tooltip: { callbacks: { label: ctx => spec.points[ctx.dataIndex].tooltip } },
      },
      scales: {
        x: { ticks: { color: "#ccc" }, grid: { color: "#2a2d34" } },
        y: { ticks: { color: "#ccc" }, grid: { color: "#2a2d34" } },
      },
    },
  });
}

function text(tag, value, style) {
  const el = document.createElement(tag);
  el.textContent = value;
  if (style) el.style.cssText = style;
  return el;
}

async function refresh() {
  const month = document.getElementById("month").value;
  const query = month ? "?month=" + encodeURIComponent(month) : "";
  const response = await fetch("/api/v1/dashboard" + query);
  const view = await response.json();

  const kpis = document.getElementById("kpis");
  kpis.replaceChildren(...view.kpis.map(k => {
    const card = document.createElement("div");
    card.className = "kpi";
    card.style.background = k.background;
    card.append(text("div", k.title, "color:" + k.accent), text("div", k.value));
    if (k.detail) card.append(text("div", k.detail, "font-size:0.85em"));
    return card;
  }));

  document.getElementById("fill").style.width = view.progress.widthPercent.toFixed(2) + "%";
  document.getElementById("progress").textContent = view.progress.label;
  draw("revenue", view.charts.revenue);
  draw("commission", view.charts.commission);
  draw("clients", view.charts.clients);
  document.getElementById("summary").textContent =
    view.summary.orderCount + " pedido(s) · quantidade " + view.summary.quantity +
    " · comissão " + view.summary.commission;
}

document.getElementById("month").addEventListener("change", refresh);
refresh();
</script>
</body>
</html>
"##;

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let default = state.dashboard_service.default_month();
    let options: String = state
        .dashboard_service
        .available_months()
        .iter()
        .map(|m| {
            let selected = if Some(*m) == default { " selected" } else { "" };
            format!("<option value=\"{m}\"{selected}>{m}</option>")
        })
        .collect();

    Html(
        PAGE_TEMPLATE
            .replace("__TITLE__", DASHBOARD_TITLE)
            .replace("__OPTIONS__", &options),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}
