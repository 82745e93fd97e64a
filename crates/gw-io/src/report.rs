//! Congestion report output.
//!
//! Creates `jam_report.csv`-style files: one row per street with the peak
//! queue depth the simulator observed.  Every street appears, in id order;
//! a zero peak is information too when deciding where green time is wasted.

use std::path::Path;

use csv::Writer;

use gw_core::StreetId;
use gw_net::Network;
use gw_sim::JamStats;

use crate::error::IoResult;

/// Write per-street peak queue depths as CSV.
pub fn write_jam_report(path: &Path, stats: &JamStats, network: &Network) -> IoResult<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["street_id", "name", "peak_queue"])?;

    for (id, street) in network.streets().iter().enumerate() {
        writer.write_record(&[
            id.to_string(),
            street.name.clone(),
            stats.peak(StreetId(id as u32)).to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
