use aws_sdk_ec2::{
    Client as Ec2Client,
    types::{Instance, InstanceStateChange as Ec2StateChange},
};
use ec2ctl_core::{
    cloud_provider::{
        DescribeInstanceParams, InstanceAction, InstanceActionParams, InstanceInfo,
        InstanceStateChange,
    },
    error::{ComputeError, Result},
};
use tracing::debug;

use crate::aws_error::{is_dry_run_confirmation, map_aws_error};

fn project_instance(instance: &Instance, region_name: &str) -> Option<InstanceInfo> {
    let id = instance.instance_id()?.to_string();
    let state = instance
        .state()
        .and_then(|s| s.name())
        .map(|n| n.as_str().to_string())
        .unwrap_or_default();

    Some(InstanceInfo {
        id,
        region: region_name.to_string(),
        state,
        launch_time: instance.launch_time().map(|t| t.to_string()),
        key_name: instance.key_name().map(ToString::to_string),
        public_ip_v4: instance.public_ip_address().map(ToString::to_string),
    })
}

fn project_state_changes(changes: &[Ec2StateChange]) -> Vec<InstanceStateChange> {
    changes
        .iter()
        .map(|change| InstanceStateChange {
            instance_id: change.instance_id().unwrap_or_default().to_string(),
            previous_state: change
                .previous_state()
                .and_then(|s| s.name())
                .map(|n| n.as_str().to_string()),
            current_state: change
                .current_state()
                .and_then(|s| s.name())
                .map(|n| n.as_str().to_string()),
        })
        .collect()
}

pub(super) async fn list_instances(
    ec2_client: &Ec2Client,
    region_name: &str,
) -> Result<Vec<InstanceInfo>> {
    debug!(region = region_name, "describing instances");
    let resp = ec2_client
        .describe_instances()
        .send()
        .await
        .map_err(|error| map_aws_error("DescribeInstances", error))?;

    let instances = resp
        .reservations()
        .iter()
        .flat_map(|r| r.instances())
        .filter_map(|i| project_instance(i, region_name))
        .collect();

    Ok(instances)
}

pub(super) async fn describe_instance(
    ec2_client: &Ec2Client,
    params: &DescribeInstanceParams<'_>,
) -> Result<InstanceInfo> {
    debug!(
        region = params.region,
        instance_id = params.instance_id,
        "describing instance"
    );
    let resp = ec2_client
        .describe_instances()
        .instance_ids(params.instance_id)
        .send()
        .await
        .map_err(|error| map_aws_error("DescribeInstances", error))?;

    resp.reservations()
        .iter()
        .flat_map(|r| r.instances())
        .find_map(|i| project_instance(i, params.region))
        .ok_or_else(|| {
            ComputeError::InstanceNotFound {
                instance_id: params.instance_id.to_string(),
                region_name: params.region.to_string(),
            }
            .into()
        })
}

/// On a dry run, EC2 reports "would have succeeded" as the service error
/// `DryRunOperation`; that is normalized to an empty change set here so
/// callers only ever see a real error when the validation actually failed.
pub(super) async fn send_instance_action(
    ec2_client: &Ec2Client,
    params: &InstanceActionParams<'_>,
    dry_run: bool,
) -> Result<Vec<InstanceStateChange>> {
    debug!(
        region = params.region,
        instance_id = params.instance_id,
        action = %params.action,
        dry_run,
        "sending instance action"
    );

    match params.action {
        InstanceAction::Start => {
            match ec2_client
                .start_instances()
                .instance_ids(params.instance_id)
                .dry_run(dry_run)
                .send()
                .await
            {
                Ok(output) => Ok(project_state_changes(output.starting_instances())),
                Err(error) if dry_run && is_dry_run_confirmation(&error) => Ok(Vec::new()),
                Err(error) => Err(map_aws_error("StartInstances", error)),
            }
        }
        InstanceAction::Stop => {
            match ec2_client
                .stop_instances()
                .instance_ids(params.instance_id)
                .dry_run(dry_run)
                .send()
                .await
            {
                Ok(output) => Ok(project_state_changes(output.stopping_instances())),
                Err(error) if dry_run && is_dry_run_confirmation(&error) => Ok(Vec::new()),
                Err(error) => Err(map_aws_error("StopInstances", error)),
            }
        }
        InstanceAction::Terminate => {
            match ec2_client
                .terminate_instances()
                .instance_ids(params.instance_id)
                .dry_run(dry_run)
                .send()
                .await
            {
                Ok(output) => Ok(project_state_changes(output.terminating_instances())),
                Err(error) if dry_run && is_dry_run_confirmation(&error) => Ok(Vec::new()),
                Err(error) => Err(map_aws_error("TerminateInstances", error)),
            }
        }
    }
}
