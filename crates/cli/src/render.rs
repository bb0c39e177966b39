use ec2ctl_core::cloud_provider::{InstanceInfo, Region};

const ABSENT: &str = "-";

pub fn region_table(regions: &[Region]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<20} {:<40}\n", "REGION", "ENDPOINT"));
    out.push_str(&format!("{}\n", "-".repeat(61)));

    for region in regions {
        out.push_str(&format!("{:<20} {:<40}\n", region.name, region.endpoint));
    }

    out.push_str(&format!("\nTotal: {} region(s)\n", regions.len()));
    out
}

pub fn instance_table(instances: &[InstanceInfo]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<15} {:<20} {:<15} {:<25} {:<20} {:<16}\n",
        "REGION", "INSTANCE ID", "STATE", "LAUNCHED", "KEY NAME", "PUBLIC IP"
    ));
    out.push_str(&format!("{}\n", "-".repeat(117)));

    for instance in instances {
        out.push_str(&format!(
            "{:<15} {:<20} {:<15} {:<25} {:<20} {:<16}\n",
            instance.region,
            instance.id,
            instance.state,
            instance.launch_time.as_deref().unwrap_or(ABSENT),
            instance.key_name.as_deref().unwrap_or(ABSENT),
            instance.public_ip_v4.as_deref().unwrap_or(ABSENT),
        ));
    }

    out.push_str(&format!("\nTotal: {} instance(s)\n", instances.len()));
    out
}
