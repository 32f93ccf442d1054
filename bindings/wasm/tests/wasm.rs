//! Browser tests for the page table handlers
//!
//! Run with `wasm-pack test --headless --firefox bindings/wasm`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlTableElement, HtmlTableRowElement};

use slipview_wasm::*;

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<input id="search" value="keep me">
<table id="output_table">
  <thead>
    <tr><th>id</th><th>shop</th><th>summ</th></tr>
    <tr><th><input id="filter0"></th><th><input id="filter1"></th><th></th></tr>
  </thead>
  <tbody>
    <tr><td>3</td><td>Corner Shop</td><td>12</td></tr>
    <tr><td>1</td><td>Bakery</td><td>3</td></tr>
    <tr><td>2</td><td>Market</td><td>5</td></tr>
  </tbody>
  <tfoot><tr><th></th><th></th><th>summ</th></tr></tfoot>
</table>
<span id="summ"></span>
<input id="start_date"><input id="end_date">
<input id="start_summ"><input id="end_summ">
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Replace the page body with `html` and load its table
fn mount(html: &str) {
    document().body().unwrap().set_inner_html(html);
    refresh_table().unwrap();
}

fn input(id: &str) -> HtmlInputElement {
    document().get_element_by_id(id).unwrap().dyn_into().unwrap()
}

/// First-column text of each body row, in document order, with its visibility
fn rows() -> Vec<(String, bool)> {
    let table: HtmlTableElement = document()
        .get_element_by_id("output_table")
        .unwrap()
        .dyn_into()
        .unwrap();
    let body = table.t_bodies().item(0).unwrap();
    let body_rows = body.get_elements_by_tag_name("tr");
    (0..body_rows.length())
        .map(|i| {
            let row: HtmlTableRowElement = body_rows.item(i).unwrap().dyn_into().unwrap();
            let first = row.get_elements_by_tag_name("td").item(0).unwrap();
            let style: &HtmlElement = row.as_ref();
            let visible = style.style().get_property_value("display").unwrap() != "none";
            (first.text_content().unwrap(), visible)
        })
        .collect()
}

fn ids() -> Vec<String> {
    rows().into_iter().map(|(id, _)| id).collect()
}

#[wasm_bindgen_test]
fn test_sort_reorders_rows() {
    mount(PAGE);
    sort_table(0).unwrap();
    assert_eq!(ids(), ["1", "2", "3"]);
    sort_table(0).unwrap();
    assert_eq!(ids(), ["3", "2", "1"]);
}

#[wasm_bindgen_test]
fn test_filter_hides_rows() {
    mount(PAGE);
    input("filter1").set_value("shop");
    table_filter(1).unwrap();
    assert_eq!(
        rows(),
        vec![
            ("3".to_string(), true),
            ("1".to_string(), false),
            ("2".to_string(), false),
        ]
    );
}

#[wasm_bindgen_test]
fn test_summ_writes_total() {
    mount(PAGE);
    assert_eq!(summ().unwrap(), "20");
    let target = document().get_element_by_id("summ").unwrap();
    assert_eq!(target.text_content().unwrap(), "20");
}

#[wasm_bindgen_test]
fn test_reset_clears_inputs_and_shows_rows() {
    mount(PAGE);
    input("filter1").set_value("bakery");
    table_filter(1).unwrap();

    reset_filter().unwrap();
    assert_eq!(input("search").value(), "keep me");
    assert_eq!(input("filter1").value(), "");
    assert!(rows().iter().all(|(_, visible)| *visible));
    assert_eq!(ids(), ["1", "2", "3"]);
}

#[wasm_bindgen_test]
fn test_validate_summ_on_page() {
    mount(PAGE);
    assert_eq!(validate_summ().unwrap(), None);

    input("start_summ").set_value("10");
    input("end_summ").set_value("5");
    assert_eq!(validate_summ().unwrap(), Some(false));
    // blank dates leave the amounts unchecked
    assert_eq!(validate_all().unwrap(), None);

    input("start_date").set_value("2024-03-01");
    input("end_date").set_value("2024-03-31");
    assert_eq!(validate_all().unwrap(), Some(false));

    input("end_summ").set_value("15,5");
    assert_eq!(validate_summ().unwrap(), Some(true));
}

#[wasm_bindgen_test]
fn test_set_date_fills_blank_dates() {
    mount(PAGE);
    set_date().unwrap();
    let start = input("start_date").value();
    let end = input("end_date").value();
    assert!(start.ends_with("-01"));
    assert_eq!(start.len(), 10);
    assert_eq!(&start[..7], &end[..7]);
}
