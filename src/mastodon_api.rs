use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, LINK};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tootstats::config::ServerConfig;
use tootstats::{Account, AppError, Context, Page, Result, Status, StatusSource};

/// Authenticated client for the Mastodon REST API.
#[derive(Clone)]
pub struct MastodonClient {
    client: reqwest::Client,
    api_base: String,
    access_token: String,
}

impl MastodonClient {
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            api_base: format!("{}/api/v1", config.instance.trim_end_matches('/')),
            access_token: config.access_token.clone(),
        })
    }

    /// The account the access token belongs to.
    pub async fn fetch_me(&self) -> Result<Account> {
        let response = self
            .authorized(self.client.get(self.url("accounts/verify_credentials")))
            .send()
            .await?;
        parse_json(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Bearer {}", self.access_token))
    }
}

#[async_trait]
impl StatusSource for MastodonClient {
    async fn fetch_page(
        &self,
        account_id: &str,
        cursor: Option<&str>,
        limit: usize,
    ) -> Result<Page> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(max_id) = cursor {
            query.push(("max_id", max_id.to_string()));
        }

        let response = self
            .authorized(
                self.client
                    .get(self.url(&format!("accounts/{}/statuses", account_id)))
                    .query(&query),
            )
            .send()
            .await?;

        let next_cursor = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_next_cursor);
        let statuses: Vec<Status> = parse_json(response).await?;

        Ok(Page {
            statuses,
            next_cursor,
        })
    }

    async fn fetch_thread(&self, status_id: &str) -> Result<Vec<Status>> {
        let response = self
            .authorized(
                self.client
                    .get(self.url(&format!("statuses/{}/context", status_id))),
            )
            .send()
            .await?;
        let context: Context = parse_json(response).await?;
        Ok(context.descendants)
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(AppError::api(status.as_u16(), error_body.trim()));
    }
    Ok(response.json().await?)
}

/// Pull the `max_id` of the `rel="next"` target out of a `Link` header.
fn parse_next_cursor(link: &str) -> Option<String> {
    link.split(',').find_map(|entry| {
        let (target, params) = entry.split_once(';')?;
        let is_next = params
            .split(';')
            .any(|param| param.trim().eq_ignore_ascii_case("rel=\"next\""));
        if !is_next {
            return None;
        }
        let target = target.trim().trim_start_matches('<').trim_end_matches('>');
        let url = Url::parse(target).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "max_id")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    })
}
