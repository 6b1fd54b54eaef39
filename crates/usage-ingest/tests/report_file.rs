//! Integration tests for reading usage reports from disk.

use std::io::Write;
use std::path::Path;

use usage_ingest::read_usage_report;
use usage_model::RawCount;

#[test]
fn reads_report_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("Sample_Report.csv");
    let mut file = std::fs::File::create(&path).expect("create report");
    writeln!(file, "PartnerID,PartNumber,accountGuid,plan,domains,itemCount").unwrap();
    writeln!(file, "1,ADS000010U0R,abc-123,TestPlan,test.example.com,5").unwrap();
    writeln!(file, "26392,SSX006NR,def-456,Pro Plan,other.example.com,2000").unwrap();
    drop(file);

    let records = read_usage_report(&path).expect("report should load");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].row_number, 2);
    assert_eq!(records[1].row_number, 3);
    assert_eq!(records[1].partner_id, RawCount::Int(26392));
    assert_eq!(records[1].item_count, RawCount::Int(2000));
}

#[test]
fn missing_report_file_fails() {
    let error =
        read_usage_report(Path::new("no/such/report.csv")).expect_err("missing file should fail");
    assert!(format!("{error:#}").contains("open usage report"));
}
