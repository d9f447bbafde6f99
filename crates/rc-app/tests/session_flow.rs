//! Session behavior across calculate, save, load and delete.

use rc_app::*;
use rc_fluids::CorrelationOracle;
use rc_snapshots::SnapshotError;
use std::sync::Arc;

fn session() -> Session {
    Session::new(Arc::new(CorrelationOracle::default()), &AppConfig::default())
}

#[test]
fn load_restores_inputs_without_recomputing() {
    let mut s = session();
    s.set_inputs(ControlInputs::new(90.0, 20.0, 300.0));
    let saved = s.calculate().unwrap().cycle;
    let label = s.save_snapshot().unwrap();

    s.set_inputs(ControlInputs::new(40.0, 80.0, 1200.0));
    s.calculate().unwrap();

    let restored = s.load_snapshot(&label).unwrap();
    assert_eq!(restored.cycle, saved);
    assert!(restored.conditions.is_none());
    assert_eq!(s.inputs(), ControlInputs::new(90.0, 20.0, 300.0));
    assert_eq!(s.state_rows()[0].pressure_kpa, format!("{:.1}", saved.suction.pressure_kpa));
}

#[test]
fn delete_unknown_leaves_store_untouched() {
    let mut s = session();
    s.calculate().unwrap();
    let label = s.save_snapshot().unwrap();

    let err = s.delete_snapshot("Comp_1.0Hz_EEV_1.0%_Fan_1RPM").unwrap_err();
    assert!(matches!(err, AppError::Snapshot(SnapshotError::NotFound { .. })));
    assert_eq!(Notice::from_error(&err).level, NoticeLevel::Error);
    assert_eq!(s.snapshot_labels(), vec![label.clone()]);

    s.delete_snapshot(&label).unwrap();
    assert!(s.snapshot_labels().is_empty());
}

#[test]
fn load_unknown_keeps_displayed_cycle() {
    let mut s = session();
    let shown = s.calculate().unwrap().clone();
    assert!(s.load_snapshot("missing").is_err());
    assert_eq!(s.current(), Some(&shown));
}

#[test]
fn failed_calculation_keeps_previous_cycle() {
    struct Broken;
    impl PropertyOracle for Broken {
        fn name(&self) -> &str {
            "Broken"
        }
        fn property(
            &self,
            _: rc_fluids::Refrigerant,
            _: rc_fluids::Property,
            input: rc_fluids::StateQuery,
        ) -> rc_fluids::FluidResult<f64> {
            Err(rc_fluids::FluidError::Backend {
                message: format!("no data for {}", input.describe()),
            })
        }
        fn critical_temperature(
            &self,
            _: rc_fluids::Refrigerant,
        ) -> rc_fluids::FluidResult<rc_core::Temperature> {
            Ok(rc_core::k(351.255))
        }
    }

    let mut s = Session::new(Arc::new(Broken), &AppConfig::default());
    let err = s.calculate().unwrap_err();
    assert!(matches!(err, AppError::Cycle(_)));
    assert!(s.current().is_none());
}

#[test]
fn stateless_report_matches_session() {
    let oracle = CorrelationOracle::default();
    let report = compute_report(&oracle, &ControlInputs::new(75.0, 60.0, 500.0)).unwrap();

    let mut s = session();
    s.set_inputs(ControlInputs::new(75.0, 60.0, 500.0));
    let computed = s.calculate().unwrap();
    assert_eq!(report.cycle, computed.cycle);
    assert_eq!(report.backend, "Correlation");
}
