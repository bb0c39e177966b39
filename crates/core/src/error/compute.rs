use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("instance {instance_id} not found in region {region_name}")]
    InstanceNotFound {
        instance_id: String,
        region_name: String,
    },

    #[error("{failed} of {total} regions could not be scanned")]
    IncompleteScan { failed: usize, total: usize },
}
