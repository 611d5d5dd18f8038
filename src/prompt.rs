use crate::dto::GenerateReplyRequest;

const INSTRUCTION: &str = "Generate a professional email reply for the following email content. \
                           Please don't generate a subject line ";

const ORIGINAL_EMAIL_MARKER: &str = "\nOriginal email: \n";

/// Instruction, optional tone clause, then the original email verbatim.
pub fn build_prompt(request: &GenerateReplyRequest) -> String {
    let mut prompt = String::with_capacity(
        INSTRUCTION.len() + ORIGINAL_EMAIL_MARKER.len() + request.email_content.len() + 32,
    );
    prompt.push_str(INSTRUCTION);

    if let Some(tone) = request.tone() {
        prompt.push_str("Use a ");
        prompt.push_str(tone);
        prompt.push_str(" tone.");
    }

    prompt.push_str(ORIGINAL_EMAIL_MARKER);
    prompt.push_str(&request.email_content);
    prompt
}
