use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub createai_api_url: String,
    pub createai_api_token: SecretString,
    pub createai_system_prompt: String,
    pub createai_model_provider: String,
    pub createai_model_name: String,
    pub createai_project_id: Option<String>,
    pub createai_timeout_secs: u64,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            createai_api_url: env::var("CREATEAI_API_URL")
                .unwrap_or_else(|_| "https://api-main.aiml.asu.edu/query".to_string()),
            createai_api_token: SecretString::from(
                env::var("CREATEAI_API_TOKEN").unwrap_or_default(),
            ),
            createai_system_prompt: env::var("CREATEAI_SYSTEM_PROMPT").unwrap_or_else(|_| {
                "You are Socratic CourseTutor (CSE 230 Assembly).".to_string()
            }),
            createai_model_provider: env::var("CREATEAI_MODEL_PROVIDER")
                .unwrap_or_else(|_| "openai".to_string()),
            createai_model_name: env::var("CREATEAI_MODEL_NAME")
                .unwrap_or_else(|_| "gpt4".to_string()),
            createai_project_id: env::var("CREATEAI_PROJECT_ID").ok(),
            createai_timeout_secs: env::var("CREATEAI_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "coursetutor-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are missing
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.createai_api_token.expose_secret().is_empty() {
            panic!(
                "FATAL: CREATEAI_API_TOKEN is not set! Set CREATEAI_API_TOKEN environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            createai_api_url: "https://api-main.aiml.asu.edu/query".to_string(),
            createai_api_token: SecretString::from("test_token".to_string()),
            createai_system_prompt: "You are Socratic CourseTutor (CSE 230 Assembly).".to_string(),
            createai_model_provider: "openai".to_string(),
            createai_model_name: "gpt4".to_string(),
            createai_project_id: Some("test-project".to_string()),
            createai_timeout_secs: 5,
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "coursetutor-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
        }
    }
}
