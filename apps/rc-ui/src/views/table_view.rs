use egui_extras::{Column, TableBuilder};
use rc_app::{MetricsView, StateRow};

pub struct StateTableView;

impl StateTableView {
    pub fn show(ui: &mut egui::Ui, rows: &[StateRow]) {
        ui.push_id("state_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(50.0))
                .column(Column::initial(110.0).at_least(90.0))
                .column(Column::initial(110.0).at_least(90.0))
                .column(Column::remainder())
                .header(22.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Point");
                    });
                    header.col(|ui| {
                        ui.strong("P [kPa]");
                    });
                    header.col(|ui| {
                        ui.strong("h [kJ/kg]");
                    });
                    header.col(|ui| {
                        ui.strong("State");
                    });
                })
                .body(|mut body| {
                    for row in rows {
                        body.row(20.0, |mut r| {
                            r.col(|ui| {
                                ui.label(row.point.to_string());
                            });
                            r.col(|ui| {
                                ui.monospace(row.pressure_kpa.as_str());
                            });
                            r.col(|ui| {
                                ui.monospace(row.enthalpy_kj_per_kg.as_str());
                            });
                            r.col(|ui| {
                                ui.label(row.description);
                            });
                        });
                    }
                });
        });
    }

    pub fn show_metrics(ui: &mut egui::Ui, metrics: &MetricsView) {
        egui::Grid::new("metrics").num_columns(2).show(ui, |ui| {
            ui.label("Cooling effect");
            ui.monospace(metrics.cooling_effect.as_str());
            ui.end_row();
            ui.label("Compressor work");
            ui.monospace(metrics.compressor_work.as_str());
            ui.end_row();
            ui.label("EER");
            ui.monospace(metrics.eer.as_str());
            ui.end_row();
        });
    }
}
