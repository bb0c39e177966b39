use crate::{
    cloud_provider::{CloudProvider, Region},
    error::Result,
};

pub async fn get_regions(provider: &dyn CloudProvider) -> Result<Vec<Region>> {
    provider.get_regions().await
}
