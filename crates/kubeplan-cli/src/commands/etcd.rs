use kubeplan_util::errors::KubeplanResult as Result;

use kubeplan_core::config::GlobalConfig;
use kubeplan_version::resolver::resolve_compatible_version;

pub fn exec(config: &GlobalConfig, kubernetes_version: &str) -> Result<()> {
    let table = config.etcd.table()?;
    let resolution = resolve_compatible_version(&table, kubernetes_version)?;

    if let Some(warning) = &resolution.warning {
        tracing::warn!("{warning}");
        eprintln!("warning: {warning}");
    }
    println!("{}", resolution.version);
    Ok(())
}
