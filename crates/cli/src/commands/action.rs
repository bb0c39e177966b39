use ec2ctl_core::{
    cloud_provider::{CloudProvider, InstanceAction},
    commands::{action::run_instance_action, info::get_instance_info},
    error::Result,
};

use crate::render;

pub async fn run(
    provider: &dyn CloudProvider,
    instance_id: &str,
    region: &str,
    action: InstanceAction,
) -> Result<()> {
    let changes = run_instance_action(provider, instance_id, region, action).await?;
    for change in &changes {
        println!(
            "{}: {} -> {}",
            change.instance_id,
            change.previous_state.as_deref().unwrap_or("-"),
            change.current_state.as_deref().unwrap_or("-")
        );
    }

    // Show the instance as the provider reports it after the transition.
    let instance = get_instance_info(provider, instance_id, region).await?;
    print!("{}", render::instance_table(&[instance]));
    Ok(())
}
