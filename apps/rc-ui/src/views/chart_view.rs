use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text};
use rc_app::PhChart;

pub struct ChartView;

impl ChartView {
    pub fn show(ui: &mut egui::Ui, chart: &PhChart) {
        let vapor: PlotPoints = chart.dome.vapor_line().map(|(h, p)| [h, p]).collect();
        let liquid: PlotPoints = chart.dome.liquid_line().map(|(h, p)| [h, p]).collect();
        let dome_color = egui::Color32::from_rgb(70, 110, 200);
        let cycle_color = egui::Color32::from_rgb(210, 60, 50);

        Plot::new("ph_chart")
            .legend(Legend::default())
            .x_axis_label("Enthalpy (kJ/kg)")
            .y_axis_label("Pressure (kPa)")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [chart.h_range.0, chart.p_range.0],
                    [chart.h_range.1, chart.p_range.1],
                ));
                plot_ui.line(Line::new(vapor).color(dome_color).name("Saturated vapor"));
                plot_ui.line(Line::new(liquid).color(dome_color).name("Saturated liquid"));

                if chart.has_cycle() {
                    let polygon: PlotPoints =
                        chart.polygon().into_iter().map(|(h, p)| [h, p]).collect();
                    plot_ui.line(
                        Line::new(polygon)
                            .color(cycle_color)
                            .width(2.0)
                            .name("Cycle"),
                    );
                    let vertices: PlotPoints = chart
                        .vertices
                        .iter()
                        .map(|v| [v.enthalpy_kj_per_kg, v.pressure_kpa])
                        .collect();
                    plot_ui.points(Points::new(vertices).color(cycle_color).radius(4.0));
                    for v in &chart.vertices {
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(v.enthalpy_kj_per_kg + 8.0, v.pressure_kpa + 60.0),
                                v.label.as_str(),
                            )
                            .color(cycle_color),
                        );
                    }
                }
            });
    }
}
