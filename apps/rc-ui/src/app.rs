use crate::views::{ChartView, ControlsView, SnapshotActions, SnapshotView, StateTableView};
use rc_app::{AppConfig, Notice, NoticeLevel, PhChart, Session, save_notice};

pub struct RefCycleApp {
    session: Session,
    controls: ControlsView,
    snapshots: SnapshotView,
    chart: Option<PhChart>,
    notice: Option<Notice>,
}

impl RefCycleApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let session = Session::from_config(config);
        tracing::info!(backend = session.oracle().name(), "desktop session started");
        let mut app = Self {
            controls: ControlsView::new(session.inputs()),
            session,
            snapshots: SnapshotView::default(),
            chart: None,
            notice: None,
        };
        app.refresh_chart();
        app
    }

    fn refresh_chart(&mut self) {
        match self.session.chart() {
            Ok(chart) => self.chart = Some(chart),
            Err(err) => {
                self.chart = None;
                self.notice = Some(Notice::from_error(&err));
            }
        }
    }

    fn calculate(&mut self) {
        self.session.set_inputs(self.controls.inputs());
        self.controls.set_inputs(self.session.inputs());
        match self.session.calculate() {
            Ok(_) => self.notice = None,
            Err(err) => {
                tracing::warn!(%err, "calculation failed");
                self.notice = Some(Notice::from_error(&err));
            }
        }
        self.refresh_chart();
    }

    fn apply_snapshot_action(&mut self, action: SnapshotActions) {
        match action {
            SnapshotActions::Save => {
                let result = self.session.save_snapshot();
                self.notice = Some(save_notice(&result));
            }
            SnapshotActions::Load(label) => match self.session.load_snapshot(&label) {
                Ok(_) => {
                    self.controls.set_inputs(self.session.inputs());
                    self.notice = Some(Notice::info(format!("Loaded {label}")));
                    self.refresh_chart();
                }
                Err(err) => self.notice = Some(Notice::from_error(&err)),
            },
            SnapshotActions::Delete(label) => match self.session.delete_snapshot(&label) {
                Ok(()) => {
                    self.snapshots.clear_selection();
                    self.notice = Some(Notice::info(format!("Deleted {label}")));
                }
                Err(err) => self.notice = Some(Notice::from_error(&err)),
            },
            SnapshotActions::NoSelection => {
                self.notice = Some(Notice {
                    level: NoticeLevel::Error,
                    message: "Select a snapshot first".to_string(),
                });
            }
        }
    }
}

impl eframe::App for RefCycleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Backend: {}", self.session.oracle().name()));
                if let Some(notice) = &self.notice {
                    ui.separator();
                    let color = match notice.level {
                        NoticeLevel::Info => ui.visuals().text_color(),
                        NoticeLevel::Warning => ui.visuals().warn_fg_color,
                        NoticeLevel::Error => ui.visuals().error_fg_color,
                    };
                    ui.colored_label(color, notice.message.as_str());
                }
            });
        });

        let mut calculate = false;
        egui::SidePanel::left("controls")
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.heading("Control inputs");
                calculate = self.controls.show(ui);
                ui.separator();
                ui.heading("Performance");
                StateTableView::show_metrics(ui, &self.session.metrics_view());
            });
        if calculate {
            self.calculate();
        }

        let labels = self.session.snapshot_labels();
        let action = egui::SidePanel::right("snapshots")
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.heading("Snapshots");
                self.snapshots.show(ui, &labels)
            })
            .inner;
        if let Some(action) = action {
            self.apply_snapshot_action(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            StateTableView::show(ui, &self.session.state_rows());
            ui.separator();
            match &self.chart {
                Some(chart) => ChartView::show(ui, chart),
                None => {
                    ui.label("Saturation dome unavailable");
                }
            }
        });
    }
}
