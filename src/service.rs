use crate::{
    dto::GenerateReplyRequest,
    gemini::{GeminiClient, GeminiError},
    prompt::build_prompt,
};

pub const ERROR_PREFIX: &str = "Error processing request: ";

pub struct ReplyService {
    client: GeminiClient,
}

impl ReplyService {
    pub const fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    pub async fn try_generate_reply(
        &self,
        request: &GenerateReplyRequest,
    ) -> Result<String, GeminiError> {
        let prompt = build_prompt(request);

        tracing::info!(
            "Generating reply for email of {} bytes with tone {:?}",
            request.email_content.len(),
            request.tone()
        );

        let reply = self.client.generate(&prompt).await?;

        tracing::info!("Generated reply of {} bytes", reply.len());
        Ok(reply)
    }

    // Failures come back as text, see ERROR_PREFIX.
    pub async fn generate_reply(&self, request: &GenerateReplyRequest) -> String {
        match self.try_generate_reply(request).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Failed to generate reply: {e}");
                format!("{ERROR_PREFIX}{e}")
            }
        }
    }
}
