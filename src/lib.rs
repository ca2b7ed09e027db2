//! Travel Genie - an LLM-powered travel cost estimator.
//!
//! Takes a source, a destination, and a travel date, asks a hosted LLM
//! for structured travel-option estimates (cab, train, bus, flight), and
//! normalizes the reply into a clean display table.
//!
//! The estimation itself is delegated entirely to the model. The crate's
//! work is on either side of the call:
//! 1. A prompt whose format instructions are generated from the same
//!    [`ResponseSchema`](schema::ResponseSchema) that later validates the
//!    reply, so instructions and parser cannot drift apart.
//! 2. A defensive normalizer that flattens whatever cost/duration shapes
//!    the model chose into uniform display strings.
//!
//! # Quick Start
//!
//! ```no_run
//! use travel_genie::{
//!     config::Config,
//!     llm::LlmClient,
//!     normalize::normalize,
//!     pipeline::TravelPipeline,
//!     query::TravelQuery,
//!     schema::ResponseSchema,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration (API key is required)
//!     let config = Config::load()?;
//!     config.validate()?;
//!
//!     // One pipeline per model + schema pair
//!     let client = LlmClient::new(config.llm);
//!     let pipeline = TravelPipeline::new(client, ResponseSchema::travel_options());
//!
//!     // One submission
//!     let query = TravelQuery::new("Delhi", "Hyderabad", "2025-06-01")?;
//!     let result = pipeline.invoke(&query).await?;
//!
//!     // Normalize and render
//!     let table = normalize(&result);
//!     print!("{}", table.format());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **TravelQuery**: validated user input (source, destination, date)
//! - **TravelPipeline**: prompt build, single chat call, parse, validate
//! - **ResponseSchema**: one object for format instructions and validation
//! - **ChatModel / LlmClient**: OpenAI-compatible chat abstraction
//! - **normalize / CostShape**: variant cost/duration shapes to strings
//! - **Table**: ordered columns and rows for display

pub mod config;
pub mod error;
pub mod llm;
pub mod normalize;
pub mod options;
pub mod pipeline;
pub mod query;
pub mod schema;
pub mod table;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TravelGenieError};
pub use llm::{ChatModel, LlmClient, Message};
pub use normalize::{clean_duration, format_cost, normalize, CostShape};
pub use options::{TravelOption, TravelOptionsResult};
pub use pipeline::TravelPipeline;
pub use query::TravelQuery;
pub use schema::ResponseSchema;
pub use table::Table;
