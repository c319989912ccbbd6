use clap::Args;
use color_eyre::eyre::WrapErr;
use http::Method;
use shopfront_api_base::ContentType;
use shopfront_core::{Client, RequestOptions};

use crate::render::{CommandOutput, CommandResult};

#[derive(Args, Clone)]
pub struct RequestArgs {
    #[arg(value_parser = parse_method, help = "HTTP method, e.g. GET or POST")]
    pub method: Method,

    #[arg(help = "Path of the endpoint, e.g. /api/products")]
    pub path: String,

    #[arg(short = 'd', long, help = "JSON request body")]
    pub data: Option<String>,

    #[arg(short = 'Q', long = "query", value_parser = parse_query, help = "Query parameter as name=value, can be repeated")]
    pub query: Vec<(String, String)>,
}

fn parse_method(arg: &str) -> Result<Method, String> {
    arg.to_ascii_uppercase()
        .parse()
        .map_err(|e| format!("invalid method `{arg}`: {e}"))
}

fn parse_query(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got `{arg}`"))
}

impl RequestArgs {
    pub async fn run(self, client: Client) -> CommandResult {
        let body: Option<serde_json::Value> = self
            .data
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .wrap_err("`--data` is not valid JSON")?;

        let options = self
            .query
            .into_iter()
            .fold(RequestOptions::default(), |options, (name, value)| {
                options.query(name, value)
            });

        let response = client
            .request_raw(self.method, &self.path, body.as_ref(), options)
            .await?;

        Ok(match response.content_type {
            ContentType::Json => CommandOutput::Object(response.json()?),
            _ => response.text().into(),
        })
    }
}
