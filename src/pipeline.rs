//! Prompt/response pipeline.
//!
//! Builds the two-message prompt for a [`TravelQuery`], submits it to the
//! chat model in a single synchronous call, and parses the raw reply into
//! a validated [`TravelOptionsResult`]. No retries, no caching: identical
//! queries re-invoke the model every time.

use crate::error::{Result, TravelGenieError};
use crate::llm::{ChatModel, Message};
use crate::options::TravelOptionsResult;
use crate::query::TravelQuery;
use crate::schema::ResponseSchema;
use serde_json::Value;

/// The assistant role description for the system message.
const SYSTEM_ROLE: &str = "You are an intelligent AI assistant designed to estimate travel costs \
from a given source to a destination. Based on user inputs, you provide various travel options, \
including cabs, trains, buses, and flights, along with their estimated costs. Additionally, you \
consider the selected date to enhance accuracy in your estimations.";

/// Pipeline from user query to validated travel options.
pub struct TravelPipeline<M> {
    model: M,
    schema: ResponseSchema,
}

impl<M: ChatModel> TravelPipeline<M> {
    /// Create a pipeline over a chat model and the response schema.
    ///
    /// The same schema instance generates the prompt's format
    /// instructions and validates the parsed reply.
    pub fn new(model: M, schema: ResponseSchema) -> Self {
        Self { model, schema }
    }

    /// The chat model behind this pipeline.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Build the system + user message pair for a query.
    pub fn build_messages(&self, query: &TravelQuery) -> Vec<Message> {
        let system = format!(
            "{}\n\nOutput format instructions: {}",
            SYSTEM_ROLE,
            self.schema.format_instructions()
        );
        let user = format!(
            "Show me the travel options from {} to {} on {}",
            query.source,
            query.destination,
            query.date_string()
        );

        vec![Message::system(system), Message::user(user)]
    }

    /// Run one submission: prompt, invoke, parse, validate.
    pub async fn invoke(&self, query: &TravelQuery) -> Result<TravelOptionsResult> {
        let messages = self.build_messages(query);

        tracing::debug!(
            model = %self.model.model_name(),
            source = %query.source,
            destination = %query.destination,
            "invoking travel estimation"
        );

        let reply = self.model.chat(messages).await?;

        let json_str = extract_json(&reply);
        let value: Value = serde_json::from_str(&json_str).map_err(|e| {
            TravelGenieError::ParseFailure(format!(
                "{}. Response: {}",
                e,
                reply.chars().take(200).collect::<String>()
            ))
        })?;

        self.schema.validate(&value)
    }
}

/// Extract JSON from a potentially markdown-wrapped reply.
fn extract_json(reply: &str) -> String {
    let reply = reply.trim();

    if reply.starts_with("```json") {
        if let Some(end) = reply.rfind("```") {
            let start = "```json".len();
            if end > start {
                return reply[start..end].trim().to_string();
            }
        }
    }

    if reply.starts_with("```") {
        if let Some(end) = reply.rfind("```") {
            let start = reply.find('\n').map(|n| n + 1).unwrap_or(3);
            if end > start {
                return reply[start..end].trim().to_string();
            }
        }
    }

    if let Some(start) = reply.find('{') {
        if let Some(end) = reply.rfind('}') {
            if end > start {
                return reply[start..=end].to_string();
            }
        }
    }

    reply.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted model: always replies with the same text, counts calls.
    #[derive(Clone)]
    struct MockModel {
        reply: String,
        calls: Arc<AtomicUsize>,
    }

    impl MockModel {
        fn new(reply: impl Into<String>) -> Self {
            Self {
                reply: reply.into(),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatModel for MockModel {
        async fn chat(&self, _messages: Vec<Message>) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }

        fn model_name(&self) -> &str {
            "mock"
        }
    }

    fn pipeline_with(reply: &str) -> (TravelPipeline<MockModel>, MockModel) {
        let mock = MockModel::new(reply);
        let pipeline = TravelPipeline::new(mock.clone(), ResponseSchema::travel_options());
        (pipeline, mock)
    }

    fn delhi_hyderabad() -> TravelQuery {
        TravelQuery::new("Delhi", "Hyderabad", "2025-06-01").unwrap()
    }

    #[test]
    fn test_messages_carry_query_and_instructions() {
        let (pipeline, _) = pipeline_with("{}");
        let messages = pipeline.build_messages(&delhi_hyderabad());

        assert_eq!(messages.len(), 2);
        assert!(messages[0].content.contains("estimate travel costs"));
        assert!(messages[0].content.contains(r#""travel_options""#));
        assert_eq!(
            messages[1].content,
            "Show me the travel options from Delhi to Hyderabad on 2025-06-01"
        );
    }

    #[tokio::test]
    async fn test_invoke_end_to_end() {
        let (pipeline, mock) = pipeline_with(
            r#"{"travel_options": [{"mode": "flight", "estimated_cost": {"currency": "INR", "min": 3000, "max": 5000}, "duration": 2}]}"#,
        );

        let result = pipeline.invoke(&delhi_hyderabad()).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.travel_options[0].mode(), Some("flight"));
        assert_eq!(mock.call_count(), 1);

        let table = crate::normalize::normalize(&result);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0]["estimated_cost"], "INR 3000 - 5000");
        assert_eq!(table.rows()[0]["duration"], "2 hours");
    }

    #[tokio::test]
    async fn test_invoke_strips_markdown_fences() {
        let (pipeline, _) = pipeline_with(
            "```json\n{\"travel_options\": [{\"mode\": \"bus\", \"estimated_cost\": 800, \"duration\": \"8-10\"}]}\n```",
        );

        let result = pipeline.invoke(&delhi_hyderabad()).await.unwrap();
        assert_eq!(result.travel_options[0].mode(), Some("bus"));
    }

    #[tokio::test]
    async fn test_empty_object_reply_is_missing_options() {
        let (pipeline, _) = pipeline_with("{}");

        let err = pipeline.invoke(&delhi_hyderabad()).await.unwrap_err();
        assert!(matches!(err, TravelGenieError::MissingOptions));
    }

    #[test]
    fn test_non_json_reply_is_parse_failure() {
        let (pipeline, _) =
            pipeline_with("Sorry, I cannot help with travel estimates right now.");

        let err = tokio_test::block_on(pipeline.invoke(&delhi_hyderabad())).unwrap_err();
        assert!(matches!(err, TravelGenieError::ParseFailure(_)));
    }

    #[test]
    fn test_incomplete_query_never_reaches_the_model() {
        let mock = MockModel::new("{}");
        let _pipeline = TravelPipeline::new(mock.clone(), ResponseSchema::travel_options());

        // Submission with an empty destination fails validation up front,
        // so there is nothing to invoke.
        let query = TravelQuery::new("Delhi", "", "2025-06-01");
        assert!(query.is_err());
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_extract_json_plain() {
        let extracted = extract_json(r#"{"travel_options": []}"#);
        assert_eq!(extracted, r#"{"travel_options": []}"#);
    }

    #[test]
    fn test_extract_json_bare_fence() {
        let extracted = extract_json("```\n{\"travel_options\": []}\n```");
        assert_eq!(extracted, r#"{"travel_options": []}"#);
    }

    #[test]
    fn test_extract_json_with_surrounding_prose() {
        let extracted = extract_json("Here you go:\n{\"travel_options\": []}\nEnjoy!");
        assert_eq!(extracted, r#"{"travel_options": []}"#);
    }
}
