use std::fmt::Write as _;

use anyhow::Result;
use cantus_liturgy::{
    liturgical_year_letter, season_spans, Feast, LiturgicalSummary, LiturgicalYearDates,
    MusicalSuggestions, SeasonProfile, SeasonSpan, YearLetter,
};
use cantus_time::Date;
use serde::Serialize;

use crate::config::OutputFormat;

/// Feast dates and season runs of one calendar year.
#[derive(Debug, Serialize)]
pub struct YearReport {
    pub year: u16,
    pub year_letter: YearLetter,
    pub feasts: Vec<FeastEntry>,
    pub seasons: Vec<SeasonSpan>,
}

#[derive(Debug, Serialize)]
pub struct FeastEntry {
    pub feast: Feast,
    pub name: &'static str,
    pub date: Date,
}

impl YearReport {
    pub fn build(year: u16) -> cantus_core::Result<Self> {
        let dates = LiturgicalYearDates::for_year(year)?;
        Ok(Self {
            year,
            year_letter: liturgical_year_letter(year),
            feasts: dates
                .feasts()
                .into_iter()
                .map(|(feast, date)| FeastEntry {
                    feast,
                    name: feast.name(),
                    date,
                })
                .collect(),
            seasons: season_spans(year)?,
        })
    }
}

/// Render `value` as JSON or with the given text renderer.
pub fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Text => text(value),
    })
}

fn format_date(date: Date, pattern: &str) -> String {
    date.to_naive_date()
        .map(|d| d.format(pattern).to_string())
        .unwrap_or_else(|| date.to_string())
}

pub fn summary_text(s: &LiturgicalSummary, date_format: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Date:          {}", format_date(s.date, date_format));
    let _ = writeln!(out, "Season:        {} ({})", s.season, s.season.local_name());
    let _ = writeln!(out, "Year:          {}", s.year_letter);
    let _ = writeln!(out, "Color:         {}", s.color);
    let _ = writeln!(out, "Style:         {}", s.style);
    let _ = writeln!(out, "Themes:        {}", s.themes.join(", "));
    if let Some(feast) = s.feast {
        let _ = writeln!(out, "Feast:         {feast}");
    }
    out
}

pub fn suggestions_text(s: &MusicalSuggestions) -> String {
    let keys: Vec<String> = s
        .keys
        .iter()
        .map(|k| format!("{} ({:.2} Hz)", k.name(), k.frequency_hz))
        .collect();
    let mut out = String::new();
    let _ = writeln!(out, "Season:        {}", s.season);
    let _ = writeln!(out, "Style:         {}", s.style);
    let _ = writeln!(out, "Themes:        {}", s.themes.join(", "));
    if let Some(name) = s.commemoration {
        let _ = writeln!(out, "Saint of day:  {name}");
    }
    let _ = writeln!(out, "Keys:          {}", keys.join(", "));
    let _ = writeln!(out, "Instruments:   {}", s.instruments.join(", "));
    out
}

pub fn year_text(r: &YearReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (year {})", r.year, r.year_letter);
    let _ = writeln!(out);
    for f in &r.feasts {
        let _ = writeln!(out, "  {:<24} {}", f.name, f.date.to_iso_string());
    }
    let _ = writeln!(out);
    for span in &r.seasons {
        let _ = writeln!(
            out,
            "  {:<24} {} .. {}",
            span.season.name(),
            span.start.to_iso_string(),
            span.end.to_iso_string()
        );
    }
    out
}

pub fn profile_text(p: &SeasonProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Season:        {} ({})", p.season, p.season.local_name());
    let _ = writeln!(out, "Color:         {} ({})", p.color, p.color_name);
    let _ = writeln!(out, "Style:         {}", p.style);
    let _ = writeln!(out, "Themes:        {}", p.themes.join(", "));
    let _ = writeln!(out, "Keys:          {}", p.keys.join(", "));
    let _ = writeln!(out, "Instruments:   {}", p.instruments.join(", "));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn summary_uses_date_format() {
        let s = LiturgicalSummary::for_date(date(2024, 12, 25)).unwrap();
        let text = summary_text(&s, "%d/%m/%Y");
        assert!(text.contains("25/12/2024"));
        assert!(text.contains("Christmas (Natal)"));
        assert!(text.contains("Year:          B"));
    }

    #[test]
    fn year_report_json() {
        let report = YearReport::build(2024).unwrap();
        let json = render(OutputFormat::Json, &report, year_text).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["year_letter"], "B");
        let easter = value["feasts"]
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["feast"] == "easter")
            .unwrap();
        assert_eq!(easter["date"], "2024-03-31");
        assert_eq!(value["seasons"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn suggestions_list_key_frequencies() {
        let s = MusicalSuggestions::for_date(date(2024, 7, 10), true).unwrap();
        let text = render(OutputFormat::Text, &s, suggestions_text).unwrap();
        assert!(text.contains("G (392.00 Hz)"));
        assert!(!text.contains("Saint of day"));
    }
}
