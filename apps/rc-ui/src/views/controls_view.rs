use rc_cycle::ControlInputs;

/// Slider state for the three control inputs.
pub struct ControlsView {
    frequency: f64,
    valve_opening: f64,
    fan_speed: f64,
}

impl ControlsView {
    pub fn new(inputs: ControlInputs) -> Self {
        let mut view = Self {
            frequency: 0.0,
            valve_opening: 0.0,
            fan_speed: 0.0,
        };
        view.set_inputs(inputs);
        view
    }

    pub fn inputs(&self) -> ControlInputs {
        ControlInputs::new(self.frequency, self.valve_opening, self.fan_speed)
    }

    pub fn set_inputs(&mut self, inputs: ControlInputs) {
        self.frequency = inputs.frequency;
        self.valve_opening = inputs.valve_opening;
        self.fan_speed = inputs.fan_speed;
    }

    /// Returns true when "Calculate" was pressed.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        egui::Grid::new("control_inputs")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Compressor frequency");
                ui.add(
                    egui::Slider::new(&mut self.frequency, ControlInputs::FREQUENCY_RANGE)
                        .suffix(" Hz")
                        .fixed_decimals(1),
                );
                ui.end_row();

                ui.label("EEV opening");
                ui.add(
                    egui::Slider::new(&mut self.valve_opening, ControlInputs::VALVE_OPENING_RANGE)
                        .suffix(" %")
                        .fixed_decimals(1),
                );
                ui.end_row();

                ui.label("Outdoor fan");
                ui.add(
                    egui::Slider::new(&mut self.fan_speed, ControlInputs::FAN_SPEED_RANGE)
                        .suffix(" RPM")
                        .integer(),
                );
                ui.end_row();
            });
        ui.add_space(6.0);
        ui.button("Calculate").clicked()
    }
}
