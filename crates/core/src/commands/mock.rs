use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;

use crate::{
    cloud_provider::{
        CloudProvider, DescribeInstanceParams, InstanceActionParams, InstanceInfo,
        InstanceStateChange, Region,
    },
    error::{ComputeError, Error, Result},
};

/// Test provider backed by in-memory fixtures, recording every call it
/// receives in order.
#[derive(Default)]
pub(crate) struct MockProvider {
    pub regions: Vec<Region>,
    pub instances: HashMap<String, Vec<InstanceInfo>>,
    pub failing_regions: Vec<String>,
    pub fail_get_regions: bool,
    pub fail_dry_run: bool,
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn region(name: &str) -> Region {
        Region {
            name: name.to_string(),
            endpoint: format!("ec2.{name}.amazonaws.com"),
        }
    }

    pub fn instance(id: &str, region: &str) -> InstanceInfo {
        InstanceInfo {
            id: id.to_string(),
            region: region.to_string(),
            state: "running".to_string(),
            launch_time: Some("2024-05-01T10:00:00Z".to_string()),
            key_name: Some("ops".to_string()),
            public_ip_v4: Some("203.0.113.10".to_string()),
        }
    }
}

#[async_trait]
impl CloudProvider for MockProvider {
    async fn get_regions(&self) -> Result<Vec<Region>> {
        self.record("get_regions");
        if self.fail_get_regions {
            return Err(Error::Transient {
                operation_name: "DescribeRegions".to_string(),
            });
        }
        Ok(self.regions.clone())
    }

    async fn list_instances(&self, region: &str) -> Result<Vec<InstanceInfo>> {
        self.record(format!("list_instances:{region}"));
        if self.failing_regions.iter().any(|r| r == region) {
            return Err(Error::Transient {
                operation_name: "DescribeInstances".to_string(),
            });
        }
        Ok(self.instances.get(region).cloned().unwrap_or_default())
    }

    async fn describe_instance(
        &self,
        params: &DescribeInstanceParams<'_>,
    ) -> Result<InstanceInfo> {
        self.record(format!(
            "describe_instance:{}:{}",
            params.region, params.instance_id
        ));
        self.instances
            .get(params.region)
            .and_then(|list| list.iter().find(|i| i.id == params.instance_id))
            .cloned()
            .ok_or_else(|| {
                ComputeError::InstanceNotFound {
                    instance_id: params.instance_id.to_string(),
                    region_name: params.region.to_string(),
                }
                .into()
            })
    }

    async fn send_instance_action(
        &self,
        params: &InstanceActionParams<'_>,
        dry_run: bool,
    ) -> Result<Vec<InstanceStateChange>> {
        self.record(format!(
            "send_instance_action:{}:{}:dry_run={}",
            params.instance_id, params.action, dry_run
        ));
        if dry_run {
            if self.fail_dry_run {
                return Err(Error::Authorization {
                    operation: "StartInstances".to_string(),
                });
            }
            return Ok(Vec::new());
        }
        Ok(vec![InstanceStateChange {
            instance_id: params.instance_id.to_string(),
            previous_state: Some("stopped".to_string()),
            current_state: Some("pending".to_string()),
        }])
    }
}
