//! GitHub Pull Request 리뷰 코멘트 API 연동 구현.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde_json::json;

use super::{ReviewComment, VcsProvider};

const PER_PAGE: usize = 100;

pub struct GitHubClient {
    client: Client,
    host: String,
    owner: String,
    repo: String,
    number: u64,
    token: Option<String>,
    api_base: Option<String>,
}

impl GitHubClient {
    /// GitHub 대상 클라이언트를 생성한다.
    pub fn new(
        host: String,
        owner: String,
        repo: String,
        number: u64,
        token: Option<String>,
        api_base: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            host,
            owner,
            repo,
            number,
            token,
            api_base,
        }
    }

    fn api_base(&self) -> String {
        // github.com은 공개 API, 그 외는 Enterprise 기본 경로를 사용한다.
        if let Some(base) = &self.api_base {
            return base.trim_end_matches('/').to_string();
        }
        if self.host == "github.com" {
            "https://api.github.com".to_string()
        } else {
            format!("https://{}/api/v3", self.host)
        }
    }

    fn pulls_endpoint(&self) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_base(),
            self.owner,
            self.repo,
            self.number
        )
    }

    fn review_comments_endpoint(&self) -> String {
        format!("{}/comments", self.pulls_endpoint())
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        // 공통 헤더/인증 적용.
        let req = self
            .client
            .request(method, url)
            .header("User-Agent", "dogpost")
            .header("Accept", "application/vnd.github+json");

        if let Some(token) = &self.token {
            req.bearer_auth(token)
        } else {
            req
        }
    }
}

#[derive(Debug, Deserialize)]
struct PullResponse {
    head: PullHead,
}

#[derive(Debug, Deserialize)]
struct PullHead {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct ReviewCommentResponse {
    id: u64,
    path: String,
    #[serde(default)]
    line: Option<u32>,
    #[serde(default)]
    body: String,
}

impl From<ReviewCommentResponse> for ReviewComment {
    fn from(c: ReviewCommentResponse) -> Self {
        ReviewComment {
            id: c.id.to_string(),
            path: c.path,
            line: c.line,
            body: c.body,
        }
    }
}

fn parse_review_comments(body: &str) -> Result<Vec<ReviewComment>> {
    let comments: Vec<ReviewCommentResponse> =
        serde_json::from_str(body).context("github: invalid review comments JSON")?;
    Ok(comments.into_iter().map(ReviewComment::from).collect())
}

#[async_trait]
impl VcsProvider for GitHubClient {
    async fn fetch_head_sha(&self) -> Result<String> {
        let resp = self
            .request(Method::GET, self.pulls_endpoint())
            .send()
            .await
            .context("github: failed to fetch PR")?;

        let status = resp.status();
        let body = resp.text().await.context("github: failed to read PR body")?;
        if !status.is_success() {
            anyhow::bail!("github: failed to fetch PR metadata ({status}): {body}");
        }

        let pr: PullResponse = serde_json::from_str(&body).context("github: invalid PR JSON")?;
        Ok(pr.head.sha)
    }

    async fn list_review_comments(&self) -> Result<Vec<ReviewComment>> {
        let mut all = Vec::new();

        for page in 1.. {
            let url = format!(
                "{}?per_page={PER_PAGE}&page={page}",
                self.review_comments_endpoint()
            );
            let resp = self
                .request(Method::GET, url)
                .send()
                .await
                .context("github: failed to list review comments")?;

            let status = resp.status();
            let body = resp
                .text()
                .await
                .context("github: failed to read review comments body")?;

            if !status.is_success() {
                anyhow::bail!("github: failed to list review comments ({status}): {body}");
            }

            let comments = parse_review_comments(&body)?;
            let fetched = comments.len();
            tracing::debug!(page, fetched, "github: review comments page");
            all.extend(comments);

            if fetched < PER_PAGE {
                break;
            }
        }

        Ok(all)
    }

    async fn create_review_comment(
        &self,
        commit_id: &str,
        path: &str,
        line: u32,
        body: &str,
    ) -> Result<ReviewComment> {
        let resp = self
            .request(Method::POST, self.review_comments_endpoint())
            .json(&json!({
                "body": body,
                "commit_id": commit_id,
                "path": path,
                "line": line,
                "side": "RIGHT",
            }))
            .send()
            .await
            .context("github: failed to create review comment")?;

        let status = resp.status();
        let response_body = resp
            .text()
            .await
            .context("github: failed to read create-comment body")?;

        if !status.is_success() {
            anyhow::bail!("github: failed to create review comment ({status}): {response_body}");
        }

        let comment: ReviewCommentResponse = serde_json::from_str(&response_body)
            .context("github: invalid create-comment JSON")?;
        Ok(comment.into())
    }
}
