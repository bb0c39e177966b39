use aws_config::SdkConfig;
use aws_sdk_ec2::{Client as Ec2Client, config::Region as AwsRegion};

use async_trait::async_trait;
use ec2ctl_core::{
    cloud_provider::{
        CloudProvider, DescribeInstanceParams, InstanceActionParams, InstanceInfo,
        InstanceStateChange, Region,
    },
    error::Result,
};

use crate::{config, instance, region};

pub struct AwsProvider {
    sdk_config: SdkConfig,
    catalog_client: Ec2Client,
}

impl AwsProvider {
    /// Credential errors surface at first use, not here.
    pub async fn new(profile: Option<String>, region: Option<String>) -> Self {
        let sdk_config = config::get_config(&profile, &region).await;
        let catalog_client = Ec2Client::new(&sdk_config);
        Self {
            sdk_config,
            catalog_client,
        }
    }

    /// EC2 clients are region-bound; every per-region operation gets a client
    /// scoped to that region on top of the shared configuration.
    fn regional_client(&self, region_name: &str) -> Ec2Client {
        let conf = aws_sdk_ec2::config::Builder::from(&self.sdk_config)
            .region(AwsRegion::new(region_name.to_string()))
            .build();
        Ec2Client::from_conf(conf)
    }
}

#[async_trait]
impl CloudProvider for AwsProvider {
    async fn get_regions(&self) -> Result<Vec<Region>> {
        region::list_regions(&self.catalog_client).await
    }

    async fn list_instances(&self, region: &str) -> Result<Vec<InstanceInfo>> {
        instance::list_instances(&self.regional_client(region), region).await
    }

    async fn describe_instance(
        &self,
        params: &DescribeInstanceParams<'_>,
    ) -> Result<InstanceInfo> {
        instance::describe_instance(&self.regional_client(params.region), params).await
    }

    async fn send_instance_action(
        &self,
        params: &InstanceActionParams<'_>,
        dry_run: bool,
    ) -> Result<Vec<InstanceStateChange>> {
        instance::send_instance_action(&self.regional_client(params.region), params, dry_run)
            .await
    }
}
