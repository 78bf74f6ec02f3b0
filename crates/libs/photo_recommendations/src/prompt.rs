use crate::PromptContext;

const TAG_PROMPT: &str = "You are helping parents organise a baby photo diary. \
Suggest 5 short hashtags that describe the photo below. Prefer tags about the activity, \
the place and the developmental stage of the child. Respond with a JSON array of strings \
only, for example [\"#firststeps\", \"#park\"].";

#[must_use]
pub fn render_tag_prompt(context: &PromptContext) -> String {
    format!(
        "{TAG_PROMPT}\n\nName: {}\nLocation: {}\nAge: {}\nDescription: {}",
        context.name, context.location, context.age, context.detail
    )
}
