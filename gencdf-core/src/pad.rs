use crate::{CdfOptions, Distribution};
use gencdf_common::{CdfError, Result};

/// Insert zero-count sentinels at the configured bounds and pick the
/// reporting start point. Runs once, after ingestion is frozen.
///
/// Bounds are applied with strict comparisons: a `pad_start` at or above
/// the observed minimum (or a `pad_stop` at or below the maximum) is
/// ignored. Sentinels never change the total count.
pub fn apply_padding(dist: &mut Distribution, opts: &CdfOptions) -> Result<f64> {
    let min = dist.min().ok_or(CdfError::NoData)?;
    let max = dist.max().ok_or(CdfError::NoData)?;
    let mut start = min;
    if opts.padding {
        if let Some(pad_start) = opts.pad_start {
            if pad_start < min {
                dist.insert_sentinel(pad_start);
                start = pad_start;
            }
        }
        if let Some(pad_stop) = opts.pad_stop {
            if pad_stop > max {
                dist.insert_sentinel(pad_stop);
            }
        }
    }
    Ok(start)
}
