use aws_config::{SdkConfig, meta::region::RegionProviderChain};
use aws_sdk_ec2::config::Region;

/// Region used for the region-catalog lookup when neither the CLI nor the
/// environment resolves one.
const FALLBACK_REGION: &str = "eu-west-1";

/// Credentials come from the SDK's default resolution chain: environment
/// variables (including an optional session token), shared config files, or
/// ambient providers. Never from source.
pub(super) async fn get_config(profile: &Option<String>, region: &Option<String>) -> SdkConfig {
    let region_provider = match region {
        Some(r) => RegionProviderChain::first_try(Region::new(r.clone()))
            .or_default_provider()
            .or_else(Region::new(FALLBACK_REGION)),
        None => RegionProviderChain::default_provider().or_else(Region::new(FALLBACK_REGION)),
    };

    let mut loader = aws_config::from_env().region(region_provider);
    if let Some(profile) = profile {
        loader = loader.profile_name(profile.clone());
    }
    loader.load().await
}
