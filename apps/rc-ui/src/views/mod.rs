pub mod chart_view;
pub mod controls_view;
pub mod snapshot_view;
pub mod table_view;

pub use chart_view::ChartView;
pub use controls_view::ControlsView;
pub use snapshot_view::{SnapshotActions, SnapshotView};
pub use table_view::StateTableView;
