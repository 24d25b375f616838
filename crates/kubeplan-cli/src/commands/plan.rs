use kubeplan_util::errors::KubeplanResult as Result;
use miette::IntoDiagnostic;

use kubeplan_core::config::GlobalConfig;
use kubeplan_core::plan::{plan, Plan, PlanInputs};

pub fn exec(
    config: &GlobalConfig,
    service_subnet: Option<&str>,
    pod_subnet: Option<&str>,
    git_version: Option<&str>,
    json: bool,
) -> Result<()> {
    let info = super::build_info(config, git_version)?;
    let table = config.etcd.table()?;

    let result = plan(PlanInputs {
        build_info: &info,
        etcd: &table,
        service_subnet: service_subnet.unwrap_or(&config.networking.service_subnet),
        pod_subnet: pod_subnet.or(config.networking.pod_subnet.as_deref()),
    })?;

    if let Some(warning) = &result.etcd_warning {
        tracing::warn!("{warning}");
        eprintln!("warning: {warning}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?);
    } else {
        print_plan(&result);
    }
    Ok(())
}

fn print_plan(p: &Plan) {
    println!("Versions:");
    println!("  Kubernetes:            {}", p.kubernetes_version.tag());
    println!("  Minimum control plane: {}", p.minimum_control_plane_version.tag());
    println!("  Minimum kubelet:       {}", p.minimum_kubelet_version.tag());
    println!("  etcd:                  {}", p.etcd_version);
    println!("Networking:");
    if p.dual_stack {
        println!("  Service subnet:        {} (dual-stack)", p.service_subnet);
    } else {
        println!("  Service subnet:        {}", p.service_subnet);
    }
    for net in &p.secondary_service_subnets {
        println!("    secondary:           {net}");
    }
    if let Some(pods) = &p.pod_subnet {
        println!("  Pod subnet:            {pods}");
    }
    println!("  API server virtual IP: {}", p.api_server_virtual_ip);
    println!("  Cluster DNS IP:        {}", p.dns_ip);
}
