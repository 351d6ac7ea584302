use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{CdfOptions, Distribution};
use gencdf_common::{CdfError, Result};

/// One row of the report.
///
/// Real rows carry both frequency ratios; filler rows (zero-count
/// positions bridging a gap wider than the padding increment) carry
/// neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CdfPoint {
    pub value: f64,
    pub count: u64,
    pub cumulative: u64,
    pub total: u64,
    /// count / total; `None` on filler rows.
    pub frequency: Option<f64>,
    /// cumulative / total; `None` on filler rows.
    pub cumulative_frequency: Option<f64>,
}

impl CdfPoint {
    pub fn is_filler(&self) -> bool {
        self.frequency.is_none()
    }
}

/// Walk the (possibly padded) table in ascending value order, computing
/// the running cumulative sum and interleaving filler rows.
///
/// `start` is the effective start point returned by the padder: the
/// inserted `pad_start` sentinel when one applied, otherwise the observed
/// minimum. Zero-count sentinels are emitted as real rows (their ratios
/// are exact zeros), matching the stairstep output a plotter expects.
pub fn build_report(dist: &Distribution, start: f64, opts: &CdfOptions) -> Result<Vec<CdfPoint>> {
    let total = dist.total();
    if total == 0 {
        return Err(CdfError::NoData);
    }
    // a non-positive (or non-finite) step would make the filler loop spin
    if opts.padding && !(opts.pad_increment.is_finite() && opts.pad_increment > 0.0) {
        return Err(CdfError::Increment(opts.pad_increment));
    }

    let mut points = Vec::with_capacity(dist.len());
    let mut last = start;
    let mut cumulative: u64 = 0;
    for (value, count) in dist.sorted_entries() {
        if opts.padding {
            while last < value {
                points.push(CdfPoint {
                    value: last,
                    count: 0,
                    cumulative,
                    total,
                    frequency: None,
                    cumulative_frequency: None,
                });
                last += opts.pad_increment;
            }
        }
        cumulative += count;
        points.push(CdfPoint {
            value,
            count,
            cumulative,
            total,
            frequency: Some(count as f64 / total as f64),
            cumulative_frequency: Some(cumulative as f64 / total as f64),
        });
        last = value;
        if opts.padding {
            // skip past the row just emitted so the next gap starts clean
            last += opts.pad_increment;
        }
    }
    Ok(points)
}

/// Render rows in the plotting format: space-separated
/// `value count cumulative total [freq cum_freq]`, no header row.
pub fn write_report<W: Write>(points: &[CdfPoint], mut out: W) -> std::io::Result<()> {
    for p in points {
        match (p.frequency, p.cumulative_frequency) {
            (Some(freq), Some(cum)) => writeln!(
                out,
                "{} {} {} {} {} {}",
                p.value, p.count, p.cumulative, p.total, freq, cum
            )?,
            _ => writeln!(out, "{} {} {} {}", p.value, p.count, p.cumulative, p.total)?,
        }
    }
    Ok(())
}
