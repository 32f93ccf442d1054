//! WebAssembly bindings for slipview
//!
//! This module exposes the report page's table and form helpers to
//! JavaScript. The rendered `#output_table` is read once into a
//! [`TableView`]; sorting, filtering and resetting work on that model and
//! then write row order and visibility back into the document.
//!
//! The exported function names match the handlers the page template wires
//! to its buttons and inputs (`sort_table(n)`, `table_filter(n)`, `summ()`,
//! `reset_filter()`, `validate_all()`, ...).

use std::cell::RefCell;

use chrono::NaiveDate;
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlCollection, HtmlInputElement, HtmlTableElement, HtmlTableRowElement,
    HtmlTableSectionElement,
};

use slipview::validation::{self, FormFields};
use slipview::{TableView, ViewOptions};
use slipview_core::{Schema, Table};

// =============================================================================
// Error Conversion
// =============================================================================

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn js_value_error(e: JsValue) -> JsError {
    JsError::new(&format!("{:?}", e))
}

// =============================================================================
// Logging - forwards the `log` facade to the browser console
// =============================================================================

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&message),
            Level::Warn => web_sys::console::warn_1(&message),
            Level::Info => web_sys::console::info_1(&message),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Route slipview's log output to the browser console
///
/// Only warnings are shown unless `verbose` is set.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(verbose: bool) {
    // a second call only adjusts the level
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
}

// =============================================================================
// Document helpers
// =============================================================================

fn document() -> Result<Document, JsError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsError::new("No document available"))
}

fn input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
}

fn elements(collection: &HtmlCollection) -> impl Iterator<Item = Element> + '_ {
    (0..collection.length()).filter_map(move |i| collection.item(i))
}

fn texts(collection: &HtmlCollection) -> Vec<String> {
    elements(collection)
        .map(|e| e.text_content().unwrap_or_default().trim().to_string())
        .collect()
}

/// Header labels made unique
///
/// A blank label becomes "columnN". A label already taken gets " (N)"
/// appended, counting up from its position until the name is free.
fn unique_names(names: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(names.len());
    for (i, name) in names.into_iter().enumerate() {
        let base = if name.is_empty() {
            format!("column{}", i + 1)
        } else {
            name
        };
        let mut candidate = base.clone();
        let mut suffix = i + 1;
        while seen.contains(&candidate) {
            candidate = format!("{} ({})", base, suffix);
            suffix += 1;
        }
        seen.push(candidate);
    }
    seen
}

// =============================================================================
// Form fields over input elements
// =============================================================================

struct DomFields {
    document: Document,
}

impl FormFields for DomFields {
    fn value(&self, id: &str) -> String {
        input(&self.document, id)
            .map(|i| i.value())
            .unwrap_or_default()
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(i) = input(&self.document, id) {
            i.set_value(value);
        }
    }

    fn set_custom_validity(&mut self, id: &str, message: &str) {
        if let Some(i) = input(&self.document, id) {
            i.set_custom_validity(message);
        }
    }

    fn report_validity(&mut self, id: &str) {
        if let Some(i) = input(&self.document, id) {
            i.report_validity();
        }
    }
}

fn dom_fields() -> Result<DomFields, JsError> {
    Ok(DomFields {
        document: document()?,
    })
}

// =============================================================================
// PageTable - the rendered table and its model
// =============================================================================

struct PageTable {
    view: TableView,
    /// Body row elements, indexed by row id
    rows: Vec<HtmlTableRowElement>,
}

impl PageTable {
    fn load(document: &Document, options: ViewOptions) -> Result<Self, JsError> {
        let element: HtmlTableElement = document
            .get_element_by_id(&options.table_id)
            .ok_or_else(|| JsError::new(&format!("No element #{}", options.table_id)))?
            .dyn_into()
            .map_err(|_| JsError::new(&format!("#{} is not a table", options.table_id)))?;

        let mut rows = Vec::new();
        let mut cells = Vec::new();
        let bodies = element.t_bodies();
        for body in elements(&bodies) {
            let body: HtmlTableSectionElement = body.dyn_into().map_err(unexpected_element)?;
            let body_rows = body.rows();
            for row in elements(&body_rows) {
                let row: HtmlTableRowElement = row.dyn_into().map_err(unexpected_element)?;
                cells.push(texts(&row.get_elements_by_tag_name("td")));
                rows.push(row);
            }
        }

        let header = element
            .t_head()
            .and_then(|head| head.rows().item(0))
            .map(|row| texts(&row.get_elements_by_tag_name("th")))
            .unwrap_or_default();
        let width = cells.iter().map(Vec::len).max().unwrap_or(0).max(header.len());
        let mut names = header;
        names.resize(width, String::new());

        let schema = Schema::from_names(unique_names(names)).map_err(to_js_error)?;
        let mut table = Table::from_text_rows(schema, cells);

        if let Some(foot) = element.t_foot() {
            table
                .set_footer(texts(&foot.get_elements_by_tag_name("th")))
                .map_err(to_js_error)?;
        }

        log::debug!(
            "loaded #{}: {} rows x {} columns",
            options.table_id,
            table.row_count(),
            table.column_count()
        );
        Ok(Self {
            view: TableView::with_options(table, options),
            rows,
        })
    }

    /// Write display order and visibility back to the row elements
    fn render(&self) -> Result<(), JsError> {
        for id in self.view.order() {
            let Some(row) = self.rows.get(*id) else {
                continue;
            };
            if let Some(parent) = row.parent_node() {
                parent.append_child(row).map_err(js_value_error)?;
            }
            let display = if self.view.is_hidden(*id) { "none" } else { "" };
            row.style()
                .set_property("display", display)
                .map_err(js_value_error)?;
        }
        Ok(())
    }
}

fn unexpected_element(e: Element) -> JsError {
    JsError::new(&format!("Unexpected element <{}>", e.tag_name().to_lowercase()))
}

thread_local! {
    static PAGE: RefCell<Option<PageTable>> = const { RefCell::new(None) };
}

/// Run `f` on the page table, reading it from the document on first use
fn with_page<T>(
    f: impl FnOnce(&mut PageTable, &Document) -> Result<T, JsError>,
) -> Result<T, JsError> {
    let document = document()?;
    PAGE.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(PageTable::load(&document, ViewOptions::default())?);
        }
        match slot.as_mut() {
            Some(page) => f(page, &document),
            None => Err(JsError::new("Table is not loaded")),
        }
    })
}

// =============================================================================
// Table handlers
// =============================================================================

/// Read the table from the document again, dropping sort and filter state
#[wasm_bindgen(js_name = refreshTable)]
pub fn refresh_table() -> Result<(), JsError> {
    let document = document()?;
    let page = PageTable::load(&document, ViewOptions::default())?;
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Sort by column `n`; calling again on a sorted column reverses it
#[wasm_bindgen]
pub fn sort_table(n: usize) -> Result<(), JsError> {
    with_page(|page, _| {
        page.view.sort(n).map_err(to_js_error)?;
        page.render()
    })
}

/// Filter column `n` by the value of its `filter{n}` input
#[wasm_bindgen]
pub fn table_filter(n: usize) -> Result<(), JsError> {
    with_page(|page, document| {
        let id = page.view.options().filter_input_id(n);
        let query = input(document, &id).map(|i| i.value()).unwrap_or_default();
        page.view.apply_filter(n, query).map_err(to_js_error)?;
        page.render()
    })
}

/// Sum the `summ` column into the summary element and return the text
#[wasm_bindgen]
pub fn summ() -> Result<String, JsError> {
    with_page(|page, document| {
        let text = page.view.compute_sum().map_err(to_js_error)?.to_string();
        if let Some(target) = document.get_element_by_id(&page.view.options().summary_id) {
            target.set_text_content(Some(&text));
        }
        Ok(text)
    })
}

/// Show all rows, clear the page's inputs except the first, sort by column 0
#[wasm_bindgen]
pub fn reset_filter() -> Result<(), JsError> {
    with_page(|page, document| {
        let inputs = document.get_elements_by_tag_name("input");
        for element in elements(&inputs).skip(1) {
            if let Ok(input) = element.dyn_into::<HtmlInputElement>() {
                input.set_value("");
            }
        }
        page.view.reset().map_err(to_js_error)?;
        page.render()
    })
}

// =============================================================================
// Form handlers
// =============================================================================

/// `true`/`false` when both dates are set, `undefined` otherwise
#[wasm_bindgen]
pub fn validate_date() -> Result<Option<bool>, JsError> {
    Ok(validation::validate_date(&mut dom_fields()?).checked())
}

/// `true`/`false` when both amounts are set, `undefined` otherwise
#[wasm_bindgen]
pub fn validate_summ() -> Result<Option<bool>, JsError> {
    Ok(validation::validate_summ(&mut dom_fields()?).checked())
}

#[wasm_bindgen]
pub fn validate_pass() -> Result<bool, JsError> {
    Ok(validation::validate_pass(&mut dom_fields()?))
}

/// Gate for the report form's submit handler
///
/// `false` blocks submission. `undefined` when a range is incomplete, in
/// which case the amounts may not have been checked.
#[wasm_bindgen]
pub fn validate_all() -> Result<Option<bool>, JsError> {
    Ok(validation::validate_all(&mut dom_fields()?).checked())
}

/// Fill blank dates with the current month up to today (UTC)
#[wasm_bindgen]
pub fn set_date() -> Result<(), JsError> {
    let now = js_sys::Date::new_0();
    let today = NaiveDate::from_ymd_opt(
        now.get_utc_full_year() as i32,
        now.get_utc_month() + 1,
        now.get_utc_date(),
    )
    .ok_or_else(|| JsError::new("Invalid current date"))?;
    validation::set_date(&mut dom_fields()?, today);
    Ok(())
}
