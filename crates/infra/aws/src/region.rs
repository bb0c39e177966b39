use aws_sdk_ec2::Client as Ec2Client;
use ec2ctl_core::{cloud_provider::Region, error::Result};
use tracing::debug;

use crate::aws_error::map_aws_error;

pub(super) async fn list_regions(ec2_client: &Ec2Client) -> Result<Vec<Region>> {
    debug!("describing regions");
    let resp = ec2_client
        .describe_regions()
        .send()
        .await
        .map_err(|error| map_aws_error("DescribeRegions", error))?;

    let regions = resp
        .regions()
        .iter()
        .filter_map(|r| {
            let name = r.region_name()?.to_string();
            let endpoint = r.endpoint().unwrap_or_default().to_string();
            Some(Region { name, endpoint })
        })
        .collect();

    Ok(regions)
}
