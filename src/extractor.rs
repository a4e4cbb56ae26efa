use std::borrow::Cow;

use crate::model::RecipeRecord;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

const NAME_MARKERS: [&str; 2] = ["Name:", "Recipe:"];
const CALORIE_MARKER: &str = "Calories:";
const PROTEIN_MARKER: &str = "Protein";

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)").expect("number pattern is valid"));

static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d$").expect("digit pattern is valid"));

/// Parse the recipe context handed over by the recommendation page.
///
/// The context is freeform text where each recipe starts on a line holding
/// `Name:` or `Recipe:`. Calorie and protein lines that follow are attached
/// to the most recently opened recipe. Lines before the first recipe marker
/// are ignored, as is anything that is not a marker line.
pub fn extract_records(context_text: &str) -> Vec<RecipeRecord> {
    let mut records = Vec::new();
    let mut current: Option<RecipeRecord> = None;

    for line in context_text.lines() {
        if NAME_MARKERS.iter().any(|marker| line.contains(marker)) {
            if let Some(done) = current.take() {
                records.push(done);
            }
            current = Some(RecipeRecord::new(record_name(line)));
        } else if line.contains(CALORIE_MARKER) {
            if let Some(record) = current.as_mut() {
                if let Some(value) = first_number(line) {
                    record.calories = Some(value);
                }
            }
        } else if line.contains(PROTEIN_MARKER) {
            if let Some(record) = current.as_mut() {
                if let Some(value) = first_number(line) {
                    record.protein = Some(value);
                }
            }
        }
    }

    if let Some(done) = current {
        records.push(done);
    }

    debug!("Extracted {} recipes from context", records.len());
    records
}

fn record_name(line: &str) -> String {
    match line.split_once(':') {
        Some((_, rest)) => rest.trim().to_string(),
        None => line.to_string(),
    }
}

/// First decimal number on the line, if it parses.
fn first_number(line: &str) -> Option<f64> {
    NUMBER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| ascii_digits(m.as_str()).parse::<f64>().ok())
}

/// Rewrite any Unicode decimal digit (`\d` matches all of them) as its
/// ASCII counterpart so the float parser accepts it.
fn ascii_digits(number: &str) -> Cow<'_, str> {
    if number.is_ascii() {
        return Cow::Borrowed(number);
    }
    number
        .chars()
        .map(|c| match decimal_value(c) {
            Some(value) if !c.is_ascii() => char::from(b'0' + value),
            _ => c,
        })
        .collect()
}

/// Decimal digits are assigned in runs of ten, zero first, so a digit's
/// value is its distance from the start of its run.
fn decimal_value(c: char) -> Option<u8> {
    if !is_decimal_digit(c) {
        return None;
    }
    let mut offset = 0u32;
    let mut code = u32::from(c);
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some((offset % 10) as u8)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}
