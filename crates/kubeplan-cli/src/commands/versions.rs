use kubeplan_util::errors::KubeplanResult as Result;

use kubeplan_core::config::GlobalConfig;
use kubeplan_version::skew::{
    current_kubernetes_version, minimum_control_plane_version, minimum_kubelet_version,
};

pub fn exec(config: &GlobalConfig, git_version: Option<&str>) -> Result<()> {
    let info = super::build_info(config, git_version)?;
    if !info.is_populated() {
        tracing::warn!("This build carries no version information, showing the placeholder version");
    }

    println!("Kubernetes:            {}", current_kubernetes_version(&info)?.tag());
    println!(
        "Minimum control plane: {}",
        minimum_control_plane_version(&info)?.tag()
    );
    println!("Minimum kubelet:       {}", minimum_kubelet_version(&info)?.tag());
    Ok(())
}
