use crate::{
    cloud_provider::{CloudProvider, InstanceAction, InstanceActionParams, InstanceStateChange},
    commands::require_parameter,
    error::Result,
};

/// Validates the transition with a dry run before committing to it. Any
/// dry-run failure is fatal and the real call is never issued. The two
/// calls are not atomic.
pub async fn run_instance_action(
    provider: &dyn CloudProvider,
    instance_id: &str,
    region: &str,
    action: InstanceAction,
) -> Result<Vec<InstanceStateChange>> {
    let instance_id = require_parameter("instance_id", instance_id)?;
    let region = require_parameter("region", region)?;

    let params = InstanceActionParams {
        region,
        instance_id,
        action,
    };

    provider.send_instance_action(&params, true).await?;
    provider.send_instance_action(&params, false).await
}
