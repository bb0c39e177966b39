use std::io::{self, Write};

use ec2ctl_core::{
    cloud_provider::CloudProvider,
    commands::instances::scan_all_regions,
    error::{ComputeError, Result},
};

use crate::{progress::ProgressBar, render};

const SCAN_STATUS: &str = "Scanning regions for instances";

/// Prints whatever the scan gathered even when regions failed; the failures
/// are reported afterwards and turn into a non-zero exit.
pub async fn run(provider: &dyn CloudProvider) -> Result<()> {
    let mut stderr = io::stderr();
    let report = scan_all_regions(provider, |scanned, total| {
        let mut bar = ProgressBar::new(total as u64);
        bar.set_progress(scanned as u64);
        let _ = write!(stderr, "\r{} {}", SCAN_STATUS, bar.render());
        let _ = stderr.flush();
    })
    .await?;
    let _ = writeln!(stderr);

    print!("{}", render::instance_table(&report.instances));

    if !report.is_complete() {
        for failure in &report.failures {
            eprintln!(
                "Warning: region {} could not be scanned: {}",
                failure.region_name, failure.error
            );
        }
        return Err(ComputeError::IncompleteScan {
            failed: report.failures.len(),
            total: report.region_count,
        }
        .into());
    }

    Ok(())
}
