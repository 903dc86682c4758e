use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::alphabet::{Category, Selection};
use crate::strength::Report;
use crate::text;

pub fn write<W: WriteColor + ?Sized>(w: &mut W, msg: &str) -> io::Result<()> {
    writeln!(w, "{}", msg)
}

fn write_colored<W: WriteColor + ?Sized>(w: &mut W, color: Color, msg: &str) -> io::Result<()> {
    w.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    let written = writeln!(w, "{}", msg);
    w.reset()?;
    written
}

pub fn error<W: WriteColor + ?Sized>(w: &mut W, msg: &str) -> io::Result<()> {
    write_colored(w, Color::Red, &format!("error: {}", msg))
}

/// Integer part of `value` with a comma between every group of three digits.
pub fn group_digits(value: f64) -> String {
    if !value.is_finite() {
        return "∞".to_string();
    }
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Scientific notation with two digits after the point, e.g. `1.76e-8`.
pub fn scientific(value: f64) -> String {
    format!("{:.2e}", value)
}

pub fn selection<W: WriteColor + ?Sized>(w: &mut W, selection: &Selection) -> io::Result<()> {
    for (i, category) in Category::ALL.iter().enumerate() {
        let mark = if selection.is_enabled(*category) { 'x' } else { ' ' };
        writeln!(
            w,
            "  {}. [{}] {} - {} chars",
            i + 1,
            mark,
            category.label(),
            category.chars().len()
        )?;
    }
    alphabet_size(w, selection.alphabet_size())
}

pub fn alphabet_size<W: WriteColor + ?Sized>(w: &mut W, size: usize) -> io::Result<()> {
    writeln!(w, "alphabet size: {} chars", size)
}

pub fn report<W: WriteColor + ?Sized>(w: &mut W, report: &Report) -> io::Result<()> {
    writeln!(w, "strength:")?;
    writeln!(w, "  alphabet size:        {}", report.alphabet_size)?;
    writeln!(w, "  password length:      {}", report.password_length)?;
    writeln!(w, "  total combinations:   {}", group_digits(report.total_combinations))?;
    writeln!(w, "  actual probability:   {}", scientific(report.actual_probability))?;
    writeln!(w, "  required probability: {}", scientific(report.required_probability))?;
    if report.meets_requirements {
        write_colored(w, Color::Green, text::MSG_VERDICT_MET)
    } else {
        write_colored(w, Color::Red, text::MSG_VERDICT_NOT_MET)
    }
}

pub fn passwords<W: WriteColor + ?Sized>(w: &mut W, batch: &[String]) -> io::Result<()> {
    writeln!(w, "passwords:")?;
    let width = batch.len().to_string().len();
    for (i, password) in batch.iter().enumerate() {
        writeln!(w, "  {:>width$}. {}", i + 1, password, width = width)?;
    }
    Ok(())
}
