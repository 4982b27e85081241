use std::io::Write;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Best observed times for one matrix size, one entry per strategy
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchmarkRow {
    pub size: usize,
    /// milliseconds, in the same order as [`BenchmarkReport::strategies`]
    pub times_ms: Vec<f64>,
}

/// Timing results of a harness run
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchmarkReport {
    pub strategies: Vec<String>,
    pub rows: Vec<BenchmarkRow>,
}

impl BenchmarkReport {
    pub fn new(strategies: Vec<String>) -> Self {
        Self {
            strategies,
            rows: Vec::new(),
        }
    }

    /// appends the times for `size`, one per strategy
    pub fn push(&mut self, size: usize, times: &[Duration]) {
        assert_eq!(times.len(), self.strategies.len());
        let times_ms = times.iter().map(|t| t.as_secs_f64() * 1000.0).collect();
        self.rows.push(BenchmarkRow { size, times_ms });
    }

    /// Writes a header `Size,<strategy>,...` and one line per size,
    /// with times in milliseconds to ten decimal places.
    pub fn write_delimited<W: Write>(&self, w: &mut W, sep: char) -> std::io::Result<()> {
        write!(w, "Size")?;
        for name in &self.strategies {
            write!(w, "{sep}{name}")?;
        }
        writeln!(w)?;

        for row in &self.rows {
            write!(w, "{}", row.size)?;
            for t in &row.times_ms {
                write!(w, "{sep}{t:.10}")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn write_json<W: Write>(&self, w: &mut W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(w, self)
    }

    #[cfg(feature = "serde")]
    pub fn read_json<R: std::io::Read>(r: R) -> serde_json::Result<Self> {
        serde_json::from_reader(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> BenchmarkReport {
        let mut report = BenchmarkReport::new(vec!["sequential".into(), "parallel".into()]);
        report.push(4, &[Duration::from_micros(1), Duration::from_nanos(1500)]);
        report.push(8, &[Duration::from_millis(2), Duration::from_secs(1)]);
        report
    }

    #[test]
    fn test_write_delimited() {
        let mut buf = Vec::new();
        report().write_delimited(&mut buf, ',').unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Size,sequential,parallel");
        assert_eq!(lines[1], "4,0.0010000000,0.0015000000");
        assert_eq!(lines[2], "8,2.0000000000,1000.0000000000");
        assert_eq!(lines.len(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip() {
        let report = report();
        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();
        let back = BenchmarkReport::read_json(buf.as_slice()).unwrap();
        assert_eq!(back, report);
    }
}
