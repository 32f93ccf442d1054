//! Tests for reading a view from CSV and writing the visible rows back

use pretty_assertions::assert_eq;
use slipview::prelude::*;

const REPORT: &str = "\
id,shop,summ
2,Market,5
1,Bakery,3
3,Corner Shop,12
";

#[test]
fn test_open_sort_filter_save() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.csv");
    let output = dir.path().join("view.csv");
    std::fs::write(&input, REPORT).unwrap();

    let options = CsvReadOptions::default().with_footer(["", "", "summ"]);
    let mut view = TableView::open(&input, &options).unwrap();
    view.sort(0).unwrap();
    view.apply_filter(1, "o").unwrap();
    view.save(&output, &CsvWriteOptions::default()).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, "id,shop,summ\n3,Corner Shop,12\n");
    assert_eq!(view.compute_sum().unwrap(), Sum::Total(20));
}

#[test]
fn test_write_keeps_display_order() {
    let table = CsvReader::read(REPORT.as_bytes(), &CsvReadOptions::default()).unwrap();
    let mut view = TableView::new(table);
    view.sort_by_name("shop").unwrap();

    let mut out = Vec::new();
    view.write_csv(&mut out, &CsvWriteOptions::default()).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "id,shop,summ\n1,Bakery,3\n3,Corner Shop,12\n2,Market,5\n"
    );
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = TableView::open(dir.path().join("nope.csv"), &CsvReadOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::Other(_)));
}
