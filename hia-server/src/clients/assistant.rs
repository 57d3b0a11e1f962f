//! Census-assistant client: a single chat-completion call to OpenAI.

use serde::{Deserialize, Serialize};

use super::ProviderError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
static MODEL_NAME: &str = "gpt-4o";

/// System prompt for the census data assistant surfaced on the site
const SYSTEM_PROMPT: &str = "\
You are a Census Data Assistant specializing in food and material insecurity data across the United States.

Your role is to provide accurate, up-to-date information about:
- Food insecurity rates by geographic location (state, county, city)
- SNAP (food stamps) participation rates
- Material insecurity indicators (housing, utilities, transportation)
- Demographics most affected by food insecurity
- College student hunger statistics
- Underserved community identification
- Poverty rates and economic indicators related to food access

Always cite data sources when possible (USDA, Census Bureau, Bureau of Labor Statistics, etc.) and provide specific numbers with context. If you don't have current data for a specific location, explain what general trends exist and suggest where to find more recent local data.

Keep responses informative but concise, focusing on actionable data that could help identify areas needing assistance.";

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Clone)]
pub struct AssistantClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AssistantClient {
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_owned())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey);
        }
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    /// Ask the assistant a single question; returns the reply text.
    pub async fn ask(&self, message: &str) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: MODEL_NAME,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
            max_tokens: 1000,
            temperature: 0.7,
        };

        let response = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatCompletionResponse>()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::UnexpectedResponse {
                reason: "no completion choices returned",
            })
    }
}
