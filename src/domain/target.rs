//! 입력 URL을 GitHub PR 대상으로 해석하는 모듈.

use anyhow::{Result, bail};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTarget {
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub url: String,
}

impl ReviewTarget {
    /// `https://<host>/<owner>/<repo>/pull/<number>` 형식만 허용한다.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input)?;
        let host = url
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("URL host is missing"))?
            .to_string();

        let segments: Vec<String> = url
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).map(ToString::to_string).collect())
            .unwrap_or_default();

        if let Some(target) = parse_github(&host, &segments, input) {
            return Ok(target);
        }

        bail!("unsupported URL format: {input}")
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn parse_github(host: &str, segments: &[String], input: &str) -> Option<ReviewTarget> {
    // /owner/repo/pull/<number>[/files]
    if segments.len() < 4 {
        return None;
    }
    if segments[2] != "pull" {
        return None;
    }

    let number = segments[3].parse().ok()?;

    Some(ReviewTarget {
        host: host.to_string(),
        owner: segments[0].clone(),
        repo: segments[1].clone(),
        number,
        url: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_github_pull_url() {
        let target = ReviewTarget::parse("https://github.com/reviewdog/reviewdog/pull/42").unwrap();
        assert_eq!(target.host(), "github.com");
        assert_eq!(target.owner, "reviewdog");
        assert_eq!(target.repo, "reviewdog");
        assert_eq!(target.number, 42);
    }

    #[test]
    fn parses_enterprise_files_tab() {
        let target =
            ReviewTarget::parse("https://git.example.com/team/app/pull/7/files").unwrap();
        assert_eq!(target.host(), "git.example.com");
        assert_eq!(target.number, 7);
    }

    #[test]
    fn rejects_non_pull_urls() {
        assert!(ReviewTarget::parse("https://github.com/reviewdog/reviewdog/issues/1").is_err());
        assert!(ReviewTarget::parse("https://github.com/reviewdog/reviewdog/pull/abc").is_err());
        assert!(ReviewTarget::parse("not a url").is_err());
    }
}
