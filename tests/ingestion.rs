use lowpayout::config::AppConfig;
use lowpayout::data::{load_tickets, LoadReport, TicketCsvConnector};
use lowpayout::engines::search::{NoProgress, Optimizer};
use lowpayout::report::{export_csv, export_json, Report};
use std::fs;

#[test]
fn test_load_quoted_and_split_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.csv");
    fs::write(
        &path,
        "\"1,2,3,4,5,6,7\"\n\"8, 9,10,11,12,13,14\"\n\"1,2,3\"\n\"30,31,32,33,34,35,99\"\n\"7,7,6,5,4,3,2,1\"\n",
    )
    .unwrap();

    let report = TicketCsvConnector::load(&path).unwrap();
    assert_eq!(report.rows_read, 5);
    assert_eq!(report.valid_count(), 3);
    assert_eq!(report.rejected.len(), 2);
    assert_eq!(report.pool.tickets()[1].numbers(), &[8, 9, 10, 11, 12, 13, 14]);
    assert_eq!(report.pool.total_price(4), 12);
}

#[test]
fn test_load_one_number_per_cell() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.csv");
    fs::write(&path, "1,2,3,4,5,6,7\n20,21,22,23,24,25,26\n").unwrap();

    let report = TicketCsvConnector::load(&path).unwrap();
    assert_eq!(report.valid_count(), 2);
    assert_eq!(report.pool.tickets()[1].numbers(), &[20, 21, 22, 23, 24, 25, 26]);
}

#[test]
fn test_extra_columns_after_ticket_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.csv");
    fs::write(
        &path,
        "\"1,2,3,4,5,6,7\",42\n\"8,9,10,11,12,13,14\",43\n",
    )
    .unwrap();

    let report = TicketCsvConnector::load(&path).unwrap();
    assert_eq!(report.valid_count(), 2);
    assert!(report.rejected.is_empty());
    assert_eq!(report.pool.tickets()[0].numbers(), &[1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_spread_cells_ignore_trailing_id_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.csv");
    fs::write(&path, "1,2,3,4,5,6,7,1001\n20,21,22,23,24,25,26,1002\n").unwrap();

    let report = TicketCsvConnector::load(&path).unwrap();
    assert_eq!(report.valid_count(), 2);
}

#[test]
fn test_connector_chosen_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let xlsx = dir.path().join("tickets.XLSX");
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "1,2,3,4,5,6,7").unwrap();
    sheet.write_string(1, 0, "8,9,10,11,12,13,14").unwrap();
    workbook.save(&xlsx).unwrap();
    assert_eq!(load_tickets(&xlsx).unwrap().valid_count(), 2);

    let csv = dir.path().join("tickets.csv");
    fs::write(&csv, "\"1,2,3,4,5,6,7\"\n").unwrap();
    assert_eq!(load_tickets(&csv).unwrap().valid_count(), 1);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(TicketCsvConnector::load(dir.path().join("nope.csv")).is_err());
}

#[test]
fn test_run_and_export() {
    let rows: Vec<String> = (0..40)
        .map(|i| {
            let base = (i % 7) as u8 + 1;
            (0..7)
                .map(|k| (base + k * 2).to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    let load = LoadReport::from_rows(&rows);
    assert_eq!(load.valid_count(), 40);

    let mut config = AppConfig::default();
    config.search.min_four = 0;
    config.search.restart_budget = 20;
    config.search.seed = Some(3);
    let summary = Optimizer::new(config).unwrap().run(&load.pool, NoProgress);
    let report = Report::from_summary(&summary, "PKR");
    assert!(!report.rows.is_empty());
    assert_eq!(report.rows[0].rank, 1);

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("out.csv");
    export_csv(&report, &csv_path).unwrap();
    let text = fs::read_to_string(&csv_path).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("Combo,Total Payout (PKR),Tickets with 3 matches"));
    assert_eq!(lines.count(), report.rows.len());

    let json_path = dir.path().join("out.json");
    export_json(&report, &json_path).unwrap();
    let back: Report = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(back.rows, report.rows);
    assert_eq!(back.total_ticket_price, 160);
}
