use crate::{
    cloud_provider::{CloudProvider, DescribeInstanceParams, InstanceInfo},
    commands::require_parameter,
    error::Result,
};

pub async fn get_instance_info(
    provider: &dyn CloudProvider,
    instance_id: &str,
    region: &str,
) -> Result<InstanceInfo> {
    let instance_id = require_parameter("instance_id", instance_id)?;
    let region = require_parameter("region", region)?;

    provider
        .describe_instance(&DescribeInstanceParams {
            region,
            instance_id,
        })
        .await
}
