use tracing::warn;

use crate::{
    cloud_provider::{CloudProvider, InstanceInfo},
    error::{Error, Result},
};

#[derive(Debug)]
pub struct RegionFailure {
    pub region_name: String,
    pub error: Error,
}

/// Outcome of a cross-region scan. Rows gathered before a region failure are
/// always retained; the failures ride alongside them.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub instances: Vec<InstanceInfo>,
    pub failures: Vec<RegionFailure>,
    pub region_count: usize,
}

impl ScanReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Scans every region in catalog order, sequentially. `progress` is invoked
/// with (regions scanned so far, total) before each region and once more at
/// the end.
pub async fn scan_all_regions<F>(
    provider: &dyn CloudProvider,
    mut progress: F,
) -> Result<ScanReport>
where
    F: FnMut(usize, usize),
{
    let regions = provider.get_regions().await?;

    let mut report = ScanReport {
        region_count: regions.len(),
        ..ScanReport::default()
    };

    for (scanned, region) in regions.iter().enumerate() {
        progress(scanned, regions.len());
        match provider.list_instances(&region.name).await {
            Ok(instances) => report.instances.extend(instances),
            Err(error) => {
                warn!(region = %region.name, %error, "region scan failed");
                report.failures.push(RegionFailure {
                    region_name: region.name.clone(),
                    error,
                });
            }
        }
    }
    progress(regions.len(), regions.len());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mock::MockProvider;

    fn provider_with_three_regions() -> MockProvider {
        let mut provider = MockProvider::default();
        provider.regions = vec![
            MockProvider::region("eu-west-1"),
            MockProvider::region("eu-west-2"),
            MockProvider::region("us-east-1"),
        ];
        provider.instances.insert(
            "eu-west-1".to_string(),
            vec![
                MockProvider::instance("i-0aa", "eu-west-1"),
                MockProvider::instance("i-0ab", "eu-west-1"),
            ],
        );
        provider.instances.insert(
            "us-east-1".to_string(),
            vec![MockProvider::instance("i-0ba", "us-east-1")],
        );
        provider
    }

    #[tokio::test]
    async fn scans_every_region_once() {
        let provider = provider_with_three_regions();

        let report = scan_all_regions(&provider, |_, _| {}).await.unwrap();

        assert!(report.is_complete());
        assert_eq!(report.region_count, 3);
        assert_eq!(report.instances.len(), 3);
        let listed: Vec<String> = provider
            .calls()
            .into_iter()
            .filter(|c| c.starts_with("list_instances"))
            .collect();
        assert_eq!(
            listed,
            vec![
                "list_instances:eu-west-1",
                "list_instances:eu-west-2",
                "list_instances:us-east-1",
            ]
        );
    }

    #[tokio::test]
    async fn failed_region_keeps_rows_from_other_regions() {
        let mut provider = provider_with_three_regions();
        provider.failing_regions.push("eu-west-2".to_string());

        let report = scan_all_regions(&provider, |_, _| {}).await.unwrap();

        assert!(!report.is_complete());
        assert_eq!(report.instances.len(), 3);
        let row_regions: Vec<&str> =
            report.instances.iter().map(|i| i.region.as_str()).collect();
        assert_eq!(row_regions, vec!["eu-west-1", "eu-west-1", "us-east-1"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].region_name, "eu-west-2");
    }

    #[tokio::test]
    async fn reports_progress_per_region() {
        let provider = provider_with_three_regions();

        let mut ticks = Vec::new();
        scan_all_regions(&provider, |scanned, total| ticks.push((scanned, total)))
            .await
            .unwrap();

        assert_eq!(ticks, vec![(0, 3), (1, 3), (2, 3), (3, 3)]);
    }

    #[tokio::test]
    async fn catalog_failure_aborts_scan() {
        let mut provider = provider_with_three_regions();
        provider.fail_get_regions = true;

        let result = scan_all_regions(&provider, |_, _| {}).await;

        assert!(result.is_err());
        assert_eq!(provider.calls(), vec!["get_regions"]);
    }
}
