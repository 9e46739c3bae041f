//! es-AR presentation of index values and dates.
//!
//! Amounts use `.` for thousands and `,` for decimals with exactly two
//! fraction digits. Like the CLDR Spanish data, grouping only starts at five
//! integer digits (`1234,56` but `12.345,67`).

use time::Month;

use crate::{IndexDate, IndexQuote, ValidationError};

const MIN_GROUPING_DIGITS: usize = 5;

/// Formats `value` as an es-AR decimal with two fraction digits.
pub fn format_amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round();
    let negative = value.is_sign_negative() && cents > 0.0;
    // Finite f64 values below 2^64 cents cover every realistic index value.
    let cents = cents as u64;
    let integer = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    if integer.len() >= MIN_GROUPING_DIGITS {
        for (index, digit) in integer.chars().enumerate() {
            if index > 0 && (integer.len() - index) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
    } else {
        grouped.push_str(&integer);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{fraction:02}")
}

/// Parses an es-AR formatted amount, with or without a leading `$`.
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let invalid = || ValidationError::InvalidAmount {
        value: input.to_owned(),
    };

    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    let (integer, fraction) = match trimmed.split_once(',') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (trimmed, None),
    };

    let (sign, integer) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let groups: Vec<&str> = integer.split('.').collect();
    let well_grouped = groups.len() == 1
        || (!groups[0].is_empty()
            && groups[0].len() <= 3
            && groups[1..].iter().all(|group| group.len() == 3));
    let digits = groups.concat();
    if !well_grouped || !is_digits(digits.as_str()) {
        return Err(invalid());
    }
    if fraction.is_some_and(|fraction| !is_digits(fraction)) {
        return Err(invalid());
    }

    let normalized = match fraction {
        Some(fraction) => format!("{sign}{digits}.{fraction}"),
        None => format!("{sign}{digits}"),
    };
    normalized.parse().map_err(|_| invalid())
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
}

/// Spanish month name as used in long dates.
pub const fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "enero",
        Month::February => "febrero",
        Month::March => "marzo",
        Month::April => "abril",
        Month::May => "mayo",
        Month::June => "junio",
        Month::July => "julio",
        Month::August => "agosto",
        Month::September => "septiembre",
        Month::October => "octubre",
        Month::November => "noviembre",
        Month::December => "diciembre",
    }
}

/// Long-form es-AR date, e.g. `15 de marzo de 2024`.
pub fn format_long_date(date: IndexDate) -> String {
    let date = date.into_inner();
    format!(
        "{} de {} de {}",
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

/// HTML notification text for a resolved quote.
pub fn format_message(quote: &IndexQuote) -> String {
    format!(
        "📊 <b>Cotización UVA - Argentina</b>\n\
         \n\
         💰 <b>Valor:</b> ${}\n\
         📅 <b>Fecha:</b> {}\n\
         \n\
         <i>Datos provistos por ArgentinaDatos.com</i>",
        format_amount(quote.value()),
        format_long_date(quote.date()),
    )
}
