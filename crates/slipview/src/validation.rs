//! Form cross-field validation
//!
//! Checks the report form's date range, amount range and password
//! confirmation. Fields are reached through [`FormFields`], which the
//! browser binding implements over input elements and [`FieldMap`]
//! implements in memory.
//!
//! A failed check sets a custom validity message on the offending fields
//! and reports it. A passing check clears the messages it owns, so a field
//! does not stay invalid after the user fixes it.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use slipview_core::parse_number;

/// Start of the date range
pub const START_DATE: &str = "start_date";
/// End of the date range
pub const END_DATE: &str = "end_date";
/// Lower bound of the amount range
pub const START_SUMM: &str = "start_summ";
/// Upper bound of the amount range
pub const END_SUMM: &str = "end_summ";
/// Password
pub const PASSWORD: &str = "password";
/// Password confirmation
pub const PASSWORD_CONFIRM: &str = "password2";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Access to form fields by id
pub trait FormFields {
    /// Current value, empty when the field is blank or absent
    fn value(&self, id: &str) -> String;

    /// Replace the value
    fn set_value(&mut self, id: &str, value: &str);

    /// Set the custom validity message; an empty message marks the field valid
    fn set_custom_validity(&mut self, id: &str, message: &str);

    /// Show the field's validity state to the user
    fn report_validity(&mut self, id: &str);
}

/// Outcome of a range check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheck {
    /// One of the bounds is blank, nothing was checked
    Incomplete,
    /// Start is not after end
    Valid,
    /// Start is after end
    Invalid,
}

impl RangeCheck {
    /// Whether this outcome should block submission
    pub fn is_invalid(self) -> bool {
        self == RangeCheck::Invalid
    }

    /// `Some(passed)` when both bounds were present, `None` otherwise
    pub fn checked(self) -> Option<bool> {
        match self {
            RangeCheck::Incomplete => None,
            RangeCheck::Valid => Some(true),
            RangeCheck::Invalid => Some(false),
        }
    }
}

/// Messages set on the two fields of a failed range check
struct RangeMessages {
    start: &'static str,
    end: &'static str,
}

const DATE_MESSAGES: RangeMessages = RangeMessages {
    start: "Start date should be earlier than end date.",
    end: "End date should be later than start date.",
};

const SUMM_MESSAGES: RangeMessages = RangeMessages {
    start: "Start summ should be less than end summ.",
    end: "End summ should be more than start summ.",
};

/// Message set on the confirmation field when passwords differ
pub const PASSWORD_MISMATCH: &str = "Passwords don't match.";

fn check_range<F, T, P>(
    fields: &mut F,
    ids: (&str, &str),
    parse: P,
    messages: &RangeMessages,
) -> RangeCheck
where
    F: FormFields + ?Sized,
    T: PartialOrd,
    P: Fn(&str) -> Option<T>,
{
    let (start_id, end_id) = ids;
    let start = fields.value(start_id);
    let end = fields.value(end_id);

    if start.is_empty() || end.is_empty() {
        fields.set_custom_validity(start_id, "");
        fields.set_custom_validity(end_id, "");
        return RangeCheck::Incomplete;
    }

    let inverted = match (parse(&start), parse(&end)) {
        (Some(start), Some(end)) => start > end,
        // unparsable bounds are left to the inputs' own type constraints
        _ => {
            debug!("cannot compare {:?} and {:?}, skipping range check", start, end);
            false
        }
    };

    if inverted {
        fields.set_custom_validity(start_id, messages.start);
        fields.report_validity(start_id);
        fields.set_custom_validity(end_id, messages.end);
        fields.report_validity(end_id);
        RangeCheck::Invalid
    } else {
        fields.set_custom_validity(start_id, "");
        fields.set_custom_validity(end_id, "");
        RangeCheck::Valid
    }
}

/// Parse a date or datetime-local input value
pub fn parse_date_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|d| d.and_time(NaiveTime::MIN))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Parse an amount input value
///
/// The first `,` or `-` is read as a decimal point, so "12,50" and "12-50"
/// both mean 12.5.
pub fn parse_amount_input(value: &str) -> Option<f64> {
    let normalized = value.replacen(|c: char| c == ',' || c == '-', ".", 1);
    parse_number(&normalized)
}

/// Check that the start date is not after the end date
pub fn validate_date<F: FormFields + ?Sized>(fields: &mut F) -> RangeCheck {
    check_range(fields, (START_DATE, END_DATE), parse_date_input, &DATE_MESSAGES)
}

/// Check that the lower amount is not above the upper amount
pub fn validate_summ<F: FormFields + ?Sized>(fields: &mut F) -> RangeCheck {
    check_range(fields, (START_SUMM, END_SUMM), parse_amount_input, &SUMM_MESSAGES)
}

/// Check that the password confirmation matches
pub fn validate_pass<F: FormFields + ?Sized>(fields: &mut F) -> bool {
    if fields.value(PASSWORD) != fields.value(PASSWORD_CONFIRM) {
        fields.set_custom_validity(PASSWORD_CONFIRM, PASSWORD_MISMATCH);
        fields.report_validity(PASSWORD_CONFIRM);
        false
    } else {
        fields.set_custom_validity(PASSWORD_CONFIRM, "");
        true
    }
}

/// Run the date check, then the amount check
///
/// The amount range is only checked once the date range is complete and
/// valid; otherwise the date outcome is returned as is. Submission should
/// be blocked only when the result [is invalid](RangeCheck::is_invalid).
pub fn validate_all<F: FormFields + ?Sized>(fields: &mut F) -> RangeCheck {
    match validate_date(fields) {
        RangeCheck::Valid => validate_summ(fields),
        other => other,
    }
}

/// Fill a blank date range with the current month up to today
///
/// A blank start becomes the first day of `today`'s month, a blank end
/// becomes `today`. Non-blank values are kept.
pub fn set_date<F: FormFields + ?Sized>(fields: &mut F, today: NaiveDate) {
    if fields.value(START_DATE).is_empty() {
        let first = today.with_day(1).unwrap_or(today);
        fields.set_value(START_DATE, &first.format(DATE_FORMAT).to_string());
    }
    if fields.value(END_DATE).is_empty() {
        fields.set_value(END_DATE, &today.format(DATE_FORMAT).to_string());
    }
}

/// State of one in-memory field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current value
    pub value: String,
    /// Custom validity message, empty when valid
    pub validity_message: String,
    /// How many times validity was reported
    pub reports: usize,
}

/// In-memory [`FormFields`]
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    fields: BTreeMap<String, FieldState>,
}

impl FieldMap {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with a value
    pub fn with(mut self, id: &str, value: &str) -> Self {
        self.set_value(id, value);
        self
    }

    /// State of a field
    pub fn field(&self, id: &str) -> Option<&FieldState> {
        self.fields.get(id)
    }

    /// Custom validity message of a field, empty when valid or absent
    pub fn validity_message(&self, id: &str) -> &str {
        self.fields
            .get(id)
            .map(|f| f.validity_message.as_str())
            .unwrap_or("")
    }

    /// Fields with a non-empty validity message, in id order
    pub fn invalid_fields(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields
            .iter()
            .filter(|(_, f)| !f.validity_message.is_empty())
            .map(|(id, f)| (id.as_str(), f.validity_message.as_str()))
    }
}

impl FormFields for FieldMap {
    fn value(&self, id: &str) -> String {
        self.fields
            .get(id)
            .map(|f| f.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, id: &str, value: &str) {
        self.fields.entry(id.to_string()).or_default().value = value.to_string();
    }

    fn set_custom_validity(&mut self, id: &str, message: &str) {
        self.fields.entry(id.to_string()).or_default().validity_message = message.to_string();
    }

    fn report_validity(&mut self, id: &str) {
        self.fields.entry(id.to_string()).or_default().reports += 1;
    }
}
