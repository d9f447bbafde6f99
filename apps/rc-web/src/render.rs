//! Server-side HTML and SVG rendering.

use rc_app::{AppResult, ControlInputs, MetricsView, Notice, NoticeLevel, PhChart, StateRow};

const SVG_W: f64 = 640.0;
const SVG_H: f64 = 440.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 48.0;
const TICKS: usize = 6;

/// Everything the page shows for one session.
pub struct PageView<'a> {
    pub inputs: ControlInputs,
    pub rows: &'a [StateRow],
    pub metrics: &'a MetricsView,
    pub chart: &'a AppResult<PhChart>,
    pub labels: &'a [String],
    pub notice: Option<&'a Notice>,
    pub backend: &'a str,
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Maps chart coordinates onto the SVG canvas.
struct Axes {
    h: (f64, f64),
    p: (f64, f64),
}

impl Axes {
    fn x(&self, h: f64) -> f64 {
        MARGIN_LEFT + (h - self.h.0) / (self.h.1 - self.h.0) * (SVG_W - MARGIN_LEFT - MARGIN_RIGHT)
    }

    fn y(&self, p: f64) -> f64 {
        SVG_H - MARGIN_BOTTOM - (p - self.p.0) / (self.p.1 - self.p.0) * (SVG_H - MARGIN_TOP - MARGIN_BOTTOM)
    }

    fn polyline(&self, points: impl Iterator<Item = (f64, f64)>) -> String {
        points
            .map(|(h, p)| format!("{:.1},{:.1}", self.x(h), self.y(p)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// P-h chart as an inline SVG element.
pub fn chart_svg(chart: &PhChart) -> String {
    let axes = Axes {
        h: chart.h_range,
        p: chart.p_range,
    };
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {SVG_W} {SVG_H}" width="{SVG_W}" height="{SVG_H}" class="ph-chart">"#
    );
    svg.push_str(&format!(
        r##"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="#fff" stroke="#999"/>"##,
        x = MARGIN_LEFT,
        y = MARGIN_TOP,
        w = SVG_W - MARGIN_LEFT - MARGIN_RIGHT,
        h = SVG_H - MARGIN_TOP - MARGIN_BOTTOM,
    ));

    for h in rc_core::linspace(chart.h_range.0, chart.h_range.1, TICKS) {
        let x = axes.x(h);
        svg.push_str(&format!(
            r##"<line x1="{x:.1}" y1="{y0:.1}" x2="{x:.1}" y2="{y1:.1}" stroke="#eee"/><text x="{x:.1}" y="{ty:.1}" font-size="11" text-anchor="middle">{h:.0}</text>"##,
            y0 = MARGIN_TOP,
            y1 = SVG_H - MARGIN_BOTTOM,
            ty = SVG_H - MARGIN_BOTTOM + 16.0,
        ));
    }
    for p in rc_core::linspace(chart.p_range.0, chart.p_range.1, TICKS) {
        let y = axes.y(p);
        svg.push_str(&format!(
            r##"<line x1="{x0:.1}" y1="{y:.1}" x2="{x1:.1}" y2="{y:.1}" stroke="#eee"/><text x="{tx:.1}" y="{ty:.1}" font-size="11" text-anchor="end">{p:.0}</text>"##,
            x0 = MARGIN_LEFT,
            x1 = SVG_W - MARGIN_RIGHT,
            tx = MARGIN_LEFT - 6.0,
            ty = y + 4.0,
        ));
    }
    svg.push_str(&format!(
        r#"<text x="{x:.1}" y="{y:.1}" font-size="12" text-anchor="middle">Enthalpy (kJ/kg)</text>"#,
        x = (MARGIN_LEFT + SVG_W - MARGIN_RIGHT) / 2.0,
        y = SVG_H - 8.0,
    ));
    svg.push_str(&format!(
        r#"<text x="14" y="{y:.1}" font-size="12" text-anchor="middle" transform="rotate(-90 14 {y:.1})">Pressure (kPa)</text>"#,
        y = (MARGIN_TOP + SVG_H - MARGIN_BOTTOM) / 2.0,
    ));

    svg.push_str(&format!(
        r##"<polyline class="dome-liquid" fill="none" stroke="#4670c8" points="{}"/>"##,
        axes.polyline(chart.dome.liquid_line())
    ));
    svg.push_str(&format!(
        r##"<polyline class="dome-vapor" fill="none" stroke="#4670c8" points="{}"/>"##,
        axes.polyline(chart.dome.vapor_line())
    ));

    if chart.has_cycle() {
        svg.push_str(&format!(
            r##"<polyline class="cycle" fill="none" stroke="#d23c32" stroke-width="2" points="{}"/>"##,
            axes.polyline(chart.polygon().into_iter())
        ));
        for v in &chart.vertices {
            let x = axes.x(v.enthalpy_kj_per_kg);
            let y = axes.y(v.pressure_kpa);
            svg.push_str(&format!(
                r##"<circle cx="{x:.1}" cy="{y:.1}" r="4" fill="#d23c32"/><text x="{tx:.1}" y="{ty:.1}" font-size="13" fill="#d23c32">{label}</text>"##,
                tx = x + 6.0,
                ty = y - 6.0,
                label = escape_html(&v.label),
            ));
        }
    }
    svg.push_str("</svg>");
    svg
}

fn slider(name: &str, title: &str, value: f64, min: f64, max: f64, step: &str, unit: &str) -> String {
    format!(
        r#"<label>{title}<br><input type="range" name="{name}" min="{min}" max="{max}" step="{step}" value="{value}" oninput="this.nextElementSibling.value=this.value"><output>{value}</output> {unit}</label><br>"#
    )
}

pub fn page(view: &PageView<'_>) -> String {
    let mut html = String::from(
        r#"<!doctype html><html><head><meta charset="utf-8"><title>Refrigeration Cycle</title>
<style>body{font-family:sans-serif;display:flex;gap:24px;margin:16px}
table{border-collapse:collapse}td,th{border:1px solid #ccc;padding:2px 8px;text-align:right}
.notice-info{color:#333}.notice-warning{color:#b07000}.notice-error{color:#c00}</style>
</head><body>"#,
    );

    // controls and metrics
    html.push_str("<section><h2>Control inputs</h2><form method=\"post\" action=\"/calculate\">");
    let i = view.inputs;
    let (f_min, f_max) = (*ControlInputs::FREQUENCY_RANGE.start(), *ControlInputs::FREQUENCY_RANGE.end());
    let (v_min, v_max) = (*ControlInputs::VALVE_OPENING_RANGE.start(), *ControlInputs::VALVE_OPENING_RANGE.end());
    let (n_min, n_max) = (*ControlInputs::FAN_SPEED_RANGE.start(), *ControlInputs::FAN_SPEED_RANGE.end());
    html.push_str(&slider("frequency", "Compressor frequency", i.frequency, f_min, f_max, "0.1", "Hz"));
    html.push_str(&slider("valve_opening", "EEV opening", i.valve_opening, v_min, v_max, "0.1", "%"));
    html.push_str(&slider("fan_speed", "Outdoor fan", i.fan_speed.trunc(), n_min, n_max, "1", "RPM"));
    html.push_str("<button type=\"submit\">Calculate</button></form>");

    html.push_str("<h2>Performance</h2><table>");
    for (name, value) in [
        ("Cooling effect", &view.metrics.cooling_effect),
        ("Compressor work", &view.metrics.compressor_work),
        ("EER", &view.metrics.eer),
    ] {
        html.push_str(&format!("<tr><th>{name}</th><td>{}</td></tr>", escape_html(value)));
    }
    html.push_str("</table>");
    if let Some(notice) = view.notice {
        let class = match notice.level {
            NoticeLevel::Info => "notice-info",
            NoticeLevel::Warning => "notice-warning",
            NoticeLevel::Error => "notice-error",
        };
        html.push_str(&format!(
            "<p class=\"notice {class}\">{}</p>",
            escape_html(&notice.message)
        ));
    }
    html.push_str(&format!("<p><small>Backend: {}</small></p></section>", escape_html(view.backend)));

    // state table and chart
    html.push_str("<section><h2>State points</h2><table><tr><th>Point</th><th>P [kPa]</th><th>h [kJ/kg]</th><th>State</th></tr>");
    for row in view.rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.point,
            escape_html(&row.pressure_kpa),
            escape_html(&row.enthalpy_kj_per_kg),
            escape_html(row.description)
        ));
    }
    html.push_str("</table>");
    match view.chart {
        Ok(chart) => html.push_str(&chart_svg(chart)),
        Err(err) => html.push_str(&format!(
            "<p class=\"notice notice-error\">Chart unavailable: {}</p>",
            escape_html(&err.to_string())
        )),
    }
    html.push_str("</section>");

    // snapshots
    html.push_str("<section><h2>Snapshots</h2><form method=\"post\" action=\"/snapshots/save\"><button type=\"submit\">Save</button></form>");
    html.push_str("<form method=\"post\" action=\"/snapshots/load\"><select name=\"label\" size=\"10\" style=\"min-width:320px\">");
    for label in view.labels {
        let l = escape_html(label);
        html.push_str(&format!("<option value=\"{l}\">{l}</option>"));
    }
    html.push_str("</select><br><button type=\"submit\">Load</button> <button type=\"submit\" formaction=\"/snapshots/delete\">Delete</button></form></section>");

    html.push_str("</body></html>");
    html
}
