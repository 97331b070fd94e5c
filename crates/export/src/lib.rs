//! Export helpers for CSV sweeps and JSON reports.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod sweep {
    use std::borrow::Cow;
    use std::io::{self, Write};

    pub const HEADER: &str = "fuel_mass_kg,total_mass_kg,distance_km,propulsion,oxidizer";

    /// Write the standard sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the sweep exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub fuel_mass_kg: f64,
        pub total_mass_kg: f64,
        pub distance_km: f64,
        pub propulsion: &'a str,
        pub oxidizer: &'a str,
    }

    impl<'a> Record<'a> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.3},{:.3},{:.2},{},{}",
                self.fuel_mass_kg,
                self.total_mass_kg,
                self.distance_km,
                field(self.propulsion),
                field(self.oxidizer),
            )
        }
    }

    /// Quote a text field when it would otherwise break the row (RFC 4180).
    fn field(value: &str) -> Cow<'_, str> {
        if value.contains([',', '"', '\n', '\r']) {
            Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(value)
        }
    }

    /// Write a header followed by every record.
    pub fn write_all(writer: &mut dyn Write, records: &[Record<'_>]) -> io::Result<()> {
        write_header(writer)?;
        for record in records {
            record.write_to(writer)?;
        }
        writer.flush()
    }
}

pub mod report {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use std::path::Path;

    /// Pretty-print any serializable report as JSON followed by a newline.
    pub fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> io::Result<()> {
        to_writer_pretty(&mut *writer, value)?;
        writeln!(writer)?;
        writer.flush()
    }

    /// Write a JSON report to `path` (`-` for stdout).
    pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
        let mut writer = super::writer_for_path(path)?;
        write_json(&mut *writer, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn sweep_csv_layout() {
        let records = [
            sweep::Record {
                fuel_mass_kg: 100.0,
                total_mass_kg: 500.0,
                distance_km: 10.64,
                propulsion: "petroleum",
                oxidizer: "liquid_oxygen",
            },
            sweep::Record {
                fuel_mass_kg: 200.0,
                total_mass_kg: 600.0,
                distance_km: 8.866_666,
                propulsion: "petroleum",
                oxidizer: "liquid_oxygen",
            },
        ];
        let mut buffer: Vec<u8> = Vec::new();
        sweep::write_all(&mut buffer, &records).expect("write csv");
        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], sweep::HEADER);
        assert_eq!(lines[1], "100.000,500.000,10.64,petroleum,liquid_oxygen");
        assert_eq!(lines[2], "200.000,600.000,8.87,petroleum,liquid_oxygen");
    }

    #[test]
    fn identifiers_with_separators_are_quoted() {
        let record = sweep::Record {
            fuel_mass_kg: 100.0,
            total_mass_kg: 400.0,
            distance_km: 1.5,
            propulsion: "ion,drive",
            oxidizer: "say \"ox\"",
        };
        let mut buffer: Vec<u8> = Vec::new();
        record.write_to(&mut buffer).expect("write row");
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text, "100.000,400.000,1.50,\"ion,drive\",\"say \"\"ox\"\"\"\n");
    }

    #[derive(Serialize)]
    struct Summary {
        distance_km: f64,
        warnings: Vec<String>,
    }

    #[test]
    fn json_report_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("report.json");
        let summary = Summary {
            distance_km: 8.75,
            warnings: vec![],
        };
        report::write_json_file(&path, &summary).expect("write json");

        let text = fs::read_to_string(&path).expect("read back");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["distance_km"], 8.75);
        assert!(value["warnings"].as_array().unwrap().is_empty());
    }
}
