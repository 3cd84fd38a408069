//! Fusiform subcommand - find vertices similar to a set of sources.

use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::Value as JsonValue;

use crate::driver::HugeClient;
use crate::structure::traverser::{
    FusiformSimilarityRequest, DEFAULT_CAPACITY, DEFAULT_DEGREE, DEFAULT_PATHS_LIMIT,
};
use crate::structure::{Direction, Id};

/// Run a fusiform similarity query.
#[derive(Parser)]
pub struct FusiformCommand {
    /// Source vertex ids (JSON numbers are taken as numeric ids)
    #[arg(long = "id")]
    pub ids: Vec<String>,

    /// Label of the source vertices
    #[arg(long)]
    pub source_label: Option<String>,

    /// Source vertex property filter as key=value (repeatable)
    #[arg(long = "source-property", value_parser = parse_key_value)]
    pub source_properties: Vec<(String, JsonValue)>,

    /// Edge label to walk
    #[arg(long)]
    pub label: Option<String>,

    /// Edge direction: OUT, IN or BOTH
    #[arg(long)]
    pub direction: Option<Direction>,

    /// Minimum number of neighbors a source must have
    #[arg(long)]
    pub min_neighbors: i32,

    /// Share of neighbors a similar vertex must have in common, in (0, 1]
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,

    /// Minimum number of similar vertices per source
    #[arg(long, default_value_t = 1)]
    pub min_similars: i32,

    /// Keep only the N most similar vertices per source
    #[arg(long)]
    pub top: Option<i32>,

    /// Property to group similar vertices by
    #[arg(long)]
    pub group_property: Option<String>,

    /// Minimum number of distinct groups
    #[arg(long, default_value_t = 1)]
    pub min_groups: i32,

    /// Max edges walked per vertex (-1 for no limit)
    #[arg(long, default_value_t = DEFAULT_DEGREE, allow_hyphen_values = true)]
    pub degree: i64,

    /// Max vertices visited (-1 for no limit)
    #[arg(long, default_value_t = DEFAULT_CAPACITY, allow_hyphen_values = true)]
    pub capacity: i64,

    /// Max sources in the result (-1 for no limit)
    #[arg(long, default_value_t = DEFAULT_PATHS_LIMIT, allow_hyphen_values = true)]
    pub limit: i64,

    /// Include shared neighbors in the result
    #[arg(long)]
    pub with_intermediary: bool,

    /// Include vertex bodies in the result
    #[arg(long)]
    pub with_vertex: bool,
}

/// Parses `key=value`; the value is read as JSON when possible, else as text.
fn parse_key_value(raw: &str) -> Result<(String, JsonValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| JsonValue::from(value));
    Ok((key.to_string(), value))
}

impl FusiformCommand {
    /// Build the request from the arguments.
    pub fn request(&self) -> Result<FusiformSimilarityRequest> {
        let mut builder = FusiformSimilarityRequest::builder()
            .sources(|mut sources| {
                sources = sources.ids(self.ids.iter().map(|id| match id.parse::<i64>() {
                    Ok(number) => Id::from(number),
                    Err(_) => Id::from(id.as_str()),
                }));
                if let Some(label) = &self.source_label {
                    sources = sources.label(label);
                }
                for (key, value) in &self.source_properties {
                    sources = sources.property(key, value.clone());
                }
                sources
            })
            .min_neighbors(self.min_neighbors)?
            .alpha(self.alpha)?
            .min_similars(self.min_similars)?
            .min_groups(self.min_groups)?
            .degree(self.degree)?
            .capacity(self.capacity)?
            .limit(self.limit)?
            .with_intermediary(self.with_intermediary)
            .with_vertex(self.with_vertex);

        if let Some(label) = &self.label {
            builder = builder.label(label);
        }
        if let Some(direction) = self.direction {
            builder = builder.direction(direction);
        }
        if let Some(top) = self.top {
            builder = builder.top(top)?;
        }
        if let Some(group_property) = &self.group_property {
            builder = builder.group_property(group_property)?;
        }
        Ok(builder.build()?)
    }

    /// Run the query and print the result as JSON.
    pub async fn run(&self, client: &HugeClient) -> Result<()> {
        let request = self.request()?;
        tracing::info!(graph = client.graph_name(), "Running fusiform similarity");

        let result = client
            .traverser()
            .fusiform_similarity(&request)
            .await
            .map_err(|e| eyre!("Fusiform similarity failed: {}", e))?;
        tracing::info!(sources = result.size(), "Found similar vertices");

        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    }
}
