use ec2ctl_core::{cloud_provider::CloudProvider, commands::regions::get_regions, error::Result};

use crate::render;

pub async fn run(provider: &dyn CloudProvider) -> Result<()> {
    let regions = get_regions(provider).await?;
    print!("{}", render::region_table(&regions));
    Ok(())
}
