//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// VCS 호스트별 인증/엔드포인트 설정
    #[serde(default)]
    pub hosts: HashMap<String, HostConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 입력 코멘트에 tool_name이 없을 때 쓰는 도구 이름
    pub tool_name: Option<String>,
    /// 한 번의 실행에서 새로 게시할 최대 코멘트 수(미지정 시 무제한)
    pub max_comments: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct HostConfig {
    /// 고정 토큰(민감정보: 권장하지 않음)
    pub token: Option<String>,
    /// 토큰을 읽을 환경변수 이름
    pub token_env: Option<String>,
    /// 토큰을 stdout으로 출력하는 커맨드(예: ["gh","auth","token"])
    pub token_command: Option<Vec<String>>,
    /// API base URL override(선택)
    pub api_base: Option<String>,
}

impl Config {
    pub fn tool_name(&self) -> Option<&str> {
        self.defaults.tool_name.as_deref()
    }

    pub fn max_comments(&self) -> Option<usize> {
        self.defaults.max_comments
    }

    pub fn host_config(&self, host: &str) -> Option<&HostConfig> {
        self.hosts.get(host)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);

        for (host, incoming) in other.hosts {
            if let Some(existing) = self.hosts.get_mut(&host) {
                existing.merge_from(incoming);
            } else {
                self.hosts.insert(host, incoming);
            }
        }
    }
}

impl DefaultsConfig {
    pub fn merge_from(&mut self, other: DefaultsConfig) {
        if other.tool_name.is_some() {
            self.tool_name = other.tool_name;
        }
        if other.max_comments.is_some() {
            self.max_comments = other.max_comments;
        }
    }
}

impl HostConfig {
    pub fn merge_from(&mut self, other: HostConfig) {
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.token_env.is_some() {
            self.token_env = other.token_env;
        }
        if other.token_command.is_some() {
            self.token_command = other.token_command;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
    }
}
