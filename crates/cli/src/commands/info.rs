use ec2ctl_core::{
    cloud_provider::CloudProvider, commands::info::get_instance_info, error::Result,
};

use crate::render;

pub async fn run(provider: &dyn CloudProvider, instance_id: &str, region: &str) -> Result<()> {
    let instance = get_instance_info(provider, instance_id, region).await?;
    print!("{}", render::instance_table(&[instance]));
    Ok(())
}
