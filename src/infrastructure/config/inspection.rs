//! 적용 설정 진단(inspection) 뷰 모델.

use std::collections::BTreeMap;

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_host_token;
use super::utils::command_exists;
use crate::application::config::{DefaultsConfig, HostConfig};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub effective_defaults: EffectiveDefaults,
    pub hosts: BTreeMap<String, HostInspection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub tool_name: Option<String>,
    pub max_comments: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostInspection {
    pub token_source: Option<String>,
    pub token_resolved: bool,
    pub token_command_available: Option<bool>,
    pub api_base: Option<String>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let mut hosts = BTreeMap::new();
        for (host, cfg) in &loaded.config.hosts {
            hosts.insert(host.clone(), host_inspection(cfg));
        }

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: loaded.config.defaults.clone(),
            effective_defaults: EffectiveDefaults {
                tool_name: loaded
                    .config
                    .tool_name()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(ToString::to_string),
                max_comments: loaded.config.max_comments(),
            },
            hosts,
        }
    }
}

fn host_inspection(cfg: &HostConfig) -> HostInspection {
    let token_resolution = resolve_host_token(Some(cfg)).ok();
    HostInspection {
        token_source: token_resolution.as_ref().and_then(|r| r.source.clone()),
        token_resolved: token_resolution
            .as_ref()
            .and_then(|r| r.token.as_ref())
            .is_some(),
        token_command_available: cfg
            .token_command
            .as_ref()
            .and_then(|cmd| cmd.first())
            .map(|program| command_exists(program)),
        api_base: cfg.api_base.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::config::Config;

    #[test]
    fn reports_paths_and_hosts() {
        let mut config = Config::default();
        config.defaults.tool_name = Some("  ".to_string());
        config.hosts.insert(
            "github.com".to_string(),
            HostConfig {
                token: Some("t".to_string()),
                api_base: Some("https://api.github.com".to_string()),
                ..HostConfig::default()
            },
        );
        let loaded = LoadedConfig {
            config,
            searched_paths: vec![PathBuf::from("a.json"), PathBuf::from("b.json")],
            loaded_paths: vec![PathBuf::from("b.json")],
        };

        let inspection = ConfigInspection::from_loaded(loaded);

        assert_eq!(inspection.searched_paths, vec!["a.json", "b.json"]);
        assert_eq!(inspection.loaded_paths, vec!["b.json"]);
        assert!(inspection.effective_defaults.tool_name.is_none());
        let gh = &inspection.hosts["github.com"];
        assert!(gh.token_resolved);
        assert_eq!(gh.token_source.as_deref(), Some("inline"));
        assert!(gh.token_command_available.is_none());
    }
}
