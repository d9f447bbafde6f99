/// Requests raised from the snapshot panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotActions {
    Save,
    Load(String),
    Delete(String),
    NoSelection,
}

#[derive(Default)]
pub struct SnapshotView {
    selected: Option<String>,
}

impl SnapshotView {
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, labels: &[String]) -> Option<SnapshotActions> {
        // drop a selection that no longer exists
        if let Some(sel) = &self.selected
            && !labels.contains(sel)
        {
            self.selected = None;
        }

        let mut action = None;
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                action = Some(SnapshotActions::Save);
            }
            if ui.button("Load").clicked() {
                action = Some(match &self.selected {
                    Some(label) => SnapshotActions::Load(label.clone()),
                    None => SnapshotActions::NoSelection,
                });
            }
            if ui.button("Delete").clicked() {
                action = Some(match &self.selected {
                    Some(label) => SnapshotActions::Delete(label.clone()),
                    None => SnapshotActions::NoSelection,
                });
            }
        });
        ui.separator();

        if labels.is_empty() {
            ui.weak("No snapshots saved");
        }
        egui::ScrollArea::vertical().show(ui, |ui| {
            for label in labels {
                let selected = self.selected.as_deref() == Some(label.as_str());
                if ui.selectable_label(selected, label.as_str()).clicked() {
                    self.selected = Some(label.clone());
                }
            }
        });
        action
    }
}
