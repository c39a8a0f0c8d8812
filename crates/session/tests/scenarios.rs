//! End-to-end scenarios: CSV file in, statistics and exports out

use session::{
    ChartKind, ReportSession, SessionError, BAR_CHART_FILE, CLEANED_CSV_FILE, PIE_CHART_FILE,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn process(contents: &str) -> (TempDir, ReportSession, Result<(), SessionError>) {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "fleet.csv", contents);
    let mut session = ReportSession::default();
    let result = session.process_file(Some(path.as_path())).map(|_| ());
    (dir, session, result)
}

#[test]
fn test_mixed_rows_keep_one_ambulance() {
    let (_dir, session, result) = process(
        "vehicle_type,intouch_active_status,current_version\n\
         Ambulance ,TRUE,2.0.8\n\
         bus,true,1\n\
         crane,false,2.0.9\n",
    );
    result.unwrap();

    let records = session.cleaned_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record.vehicle_type(), "ambulance");

    let report = session.report().unwrap();
    let buckets: Vec<_> = report.histogram.iter().collect();
    assert_eq!(buckets, vec![("2.0.8", 1)]);

    for row in report.crosstab.rows() {
        for (version, count) in &row.counts {
            let expected = usize::from(row.vehicle.as_str() == "ambulance" && version == "2.0.8");
            assert_eq!(*count, expected, "{} / {}", row.vehicle, version);
        }
    }
}

#[test]
fn test_missing_version_defaults_to_zero() {
    let (_dir, session, result) = process("vehicle_type,intouch_active_status\ncrane,true\n");
    result.unwrap();
    assert_eq!(session.cleaned_records()[0].version(), "0");
}

#[test]
fn test_misspelled_vehicle_column() {
    let (_dir, session, result) = process(
        "vehicale_type,intouch_active_status,current_version\n\
         Patrol Vehicle,true,2.0.9\n",
    );
    result.unwrap();
    let batch = session.last_batch().unwrap();
    assert_eq!(batch.vehicle_column.as_str(), "vehicale_type");
    assert_eq!(batch.report.histogram.get("2.0.9"), 1);
}

#[test]
fn test_missing_vehicle_column() {
    let (_dir, session, result) = process("type,intouch_active_status\ncrane,true\n");
    assert!(matches!(result, Err(SessionError::MissingColumn)));
    assert!(session.charts().is_none());
    assert!(session.cleaned_records().is_empty());
}

#[test]
fn test_all_rows_inactive() {
    let (_dir, session, result) = process(
        "vehicle_type,intouch_active_status\n\
         crane,false\n\
         ambulance,\n",
    );
    assert!(matches!(result, Err(SessionError::EmptyResultSet)));
    assert!(session.charts().is_none());
}

#[test]
fn test_empty_file() {
    let (_dir, _session, result) = process("");
    assert!(matches!(result, Err(SessionError::EmptyOrInvalidInput)));

    let (_dir, _session, result) = process("vehicle_type,intouch_active_status\n");
    assert!(matches!(result, Err(SessionError::EmptyOrInvalidInput)));
}

#[test]
fn test_unreadable_file() {
    let mut session = ReportSession::default();
    let result = session.process_file(Some(Path::new("/nonexistent/fleet.csv")));
    assert!(matches!(result, Err(SessionError::Read { .. })));
}

#[test]
fn test_malformed_rows_are_skipped() {
    let (_dir, session, result) = process(
        "vehicle_type,intouch_active_status,current_version\n\
         crane,true,2.0.9,unexpected\n\
         crane,true,2.0.9\n",
    );
    result.unwrap();
    let batch = session.last_batch().unwrap();
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.rejected_rows, 1);
}

#[test]
fn test_exports() {
    let (dir, session, result) = process(
        "driver_name,vehicle_type,intouch_active_status,current_version\n\
         X,crane,true,2.0.9\n\
         Y,ambulance,True,2.0.8\n\
         Z,ambulance,TRUE,3.0.0\n",
    );
    result.unwrap();

    let csv_path = dir.path().join(CLEANED_CSV_FILE);
    session.export_csv(&csv_path).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        csv,
        "vehicle_type,intouch_active_status,current_version\n\
         crane,true,2.0.9\n\
         ambulance,True,2.0.8\n\
         ambulance,TRUE,3.0.0\n"
    );

    let pie_path = dir.path().join(PIE_CHART_FILE);
    let bar_path = dir.path().join(BAR_CHART_FILE);
    session.export_chart(ChartKind::Pie, &pie_path).unwrap();
    session.export_chart(ChartKind::StackedBar, &bar_path).unwrap();

    let pie = image::open(&pie_path).unwrap();
    let bar = image::open(&bar_path).unwrap();
    let config = session::ChartConfig::default();
    assert_eq!((pie.width(), pie.height()), (config.width, config.height));
    assert_eq!((bar.width(), bar.height()), (config.width, config.height));

    // the out-of-vocabulary version counts in the histogram only
    let report = session.report().unwrap();
    assert_eq!(report.histogram.total(), 3);
    assert_eq!(report.crosstab.total(), 2);
}

#[test]
fn test_failed_second_file_leaves_nothing_to_export() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_csv(&dir, "a.csv", "vehicle_type,intouch_active_status,current_version\ncrane,true,2.0.9\n");
    let second = write_csv(&dir, "b.csv", "vehicle_type,intouch_active_status\nambulance,false\n");

    let mut session = ReportSession::default();
    session.process_file(Some(first.as_path())).unwrap();
    let result = session.process_file(Some(second.as_path()));
    assert!(matches!(result, Err(SessionError::EmptyResultSet)));

    let csv_path = dir.path().join(CLEANED_CSV_FILE);
    assert!(matches!(
        session.export_csv(&csv_path),
        Err(SessionError::NoDataToExport)
    ));
    assert!(!csv_path.exists());
    assert!(matches!(
        session.export_chart(ChartKind::Pie, &dir.path().join(PIE_CHART_FILE)),
        Err(SessionError::ExportWithoutChart)
    ));
}

#[test]
fn test_short_first_row_uses_header_column() {
    let (_dir, session, result) = process(
        "intouch_active_status,current_version,vehicle_type\n\
         true\n\
         true,2.0.8,crane\n",
    );
    result.unwrap();
    let batch = session.last_batch().unwrap();
    assert_eq!(batch.vehicle_column.as_str(), "vehicle_type");
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.dropped, 1);
    assert_eq!(batch.report.histogram.get("2.0.8"), 1);
}
