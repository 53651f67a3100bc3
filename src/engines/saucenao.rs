use std::{path::Path, time::Duration};

use crate::{config, engines::ReverseEngine, models::SearchHit};
use async_trait::async_trait;

use anyhow::{Result, anyhow, bail};
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;
use serde_json::{Map, Value};

const SAUCENAO_URL: &str = "https://saucenao.com/search.php";

/// Keys SauceNAO uses for a work's title, most specific first.
const TITLE_KEYS: [&str; 4] = ["title", "eng_name", "material", "source"];
/// Keys SauceNAO uses for a work's author, most specific first.
const AUTHOR_KEYS: [&str; 5] = ["author", "member_name", "creator", "author_name", "company"];

#[derive(Deserialize, Debug)]
struct Response {
    header: ResponseHeader,
    #[serde(default)]
    results: Vec<RawResult>,
}

#[derive(Deserialize, Debug)]
struct ResponseHeader {
    status: i64,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RawResult {
    header: ResultHeader,
    #[serde(default)]
    data: Map<String, Value>,
}

#[derive(Deserialize, Debug)]
struct ResultHeader {
    similarity: Value,
    thumbnail: String,
}

#[derive(Clone, Debug)]
pub struct SauceNao {
    client: Client,
    api_key: String,
    limit: u8,
}

impl SauceNao {
    pub(crate) fn new(config: &config::SauceNao) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            limit: config.limit,
        })
    }
}

fn similarity(value: &Value) -> Result<f32> {
    let similarity = match value {
        Value::String(s) => s
            .trim()
            .parse::<f32>()
            .map_err(|e| anyhow!("Invalid similarity {:?}: {}", s, e))?,
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| anyhow!("Invalid similarity {}", n))? as f32,
        other => bail!("Invalid similarity {}", other),
    };

    if !similarity.is_finite() || !(0.0..=100.0).contains(&similarity) {
        bail!("Similarity out of range: {}", similarity);
    }

    Ok(similarity)
}

fn first_string(data: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match data.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(values) => values.first()?.as_str().map(str::to_string),
        _ => None,
    })
}

fn parse_result(result: RawResult) -> Result<SearchHit> {
    let urls: Vec<String> = result
        .data
        .get("ext_urls")
        .and_then(Value::as_array)
        .map(|urls| {
            urls.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(SearchHit {
        similarity: similarity(&result.header.similarity)?,
        thumbnail: result.header.thumbnail,
        urls,
        title: first_string(&result.data, &TITLE_KEYS),
        author: first_string(&result.data, &AUTHOR_KEYS),
    })
}

fn parse_response(body: &str) -> Result<Vec<SearchHit>> {
    let response: Response = serde_json::from_str(body)?;

    if response.header.status != 0 {
        bail!(
            "Saucenao status {}: {}",
            response.header.status,
            response
                .header
                .message
                .unwrap_or_else(|| "no message".to_string())
        );
    }

    response.results.into_iter().map(parse_result).collect()
}

#[async_trait]
impl ReverseEngine for SauceNao {
    fn name(&self) -> &'static str {
        "saucenao"
    }

    async fn search(&self, path: &Path) -> Result<Vec<SearchHit>> {
        log::info!("Searching saucenao for {}", path.display());

        let numres = self.limit.to_string();
        let request = self
            .client
            .post(SAUCENAO_URL)
            .query(&[
                ("output_type", "2"),
                ("db", "999"),
                ("numres", numres.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .multipart(Form::new().part("file", Part::file(path).await?));

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Saucenao error: {}", e);
                return Err(anyhow!(e));
            }
        };

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            log::error!("Saucenao responded with {}: {}", status, body);
            bail!("Saucenao responded with {}", status);
        }

        let hits = parse_response(&body)?;
        log::info!("Found {} hits for {}", hits.len(), self.name());

        Ok(hits)
    }
}
