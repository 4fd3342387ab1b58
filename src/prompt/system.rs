//! System prompt assembly.

use super::PromptError;
use super::template::{render_template, vars};
use super::templates::{AIPY_PROMPT, API_PROMPT, SYSTEM_PROMPT_TEMPLATE, TIPS_PROMPT};
use super::tips::Tips;
use tracing::debug;

/// Build the system prompt.
///
/// Sections, in order: role, output rules, tips, APIs.
///
/// - Role: the trimmed `user_prompt` when it is non-empty, otherwise the
///   detail of the role in `tips`.
/// - Tips: empty whenever a user prompt was given, and also when `tips` has
///   no entries. Otherwise the rendered tips inside the knowledge section.
/// - APIs: `api_info` inserted verbatim into the API section.
///
/// # Errors
///
/// [`PromptError::MissingRole`] when there is neither a user prompt nor a
/// role in `tips`.
pub fn build_system_prompt(
    tips: &Tips,
    api_info: &str,
    user_prompt: Option<&str>,
) -> Result<String, PromptError> {
    let user_prompt = user_prompt.map(str::trim).filter(|p| !p.is_empty());

    let role_prompt = match user_prompt {
        Some(prompt) => prompt.to_string(),
        None => tips
            .role()
            .map(|role| role.detail.clone())
            .ok_or(PromptError::MissingRole)?,
    };

    let tips_prompt = if user_prompt.is_some() || tips.is_empty() {
        debug!(
            user_prompt = user_prompt.is_some(),
            tips = tips.len(),
            "tips section suppressed"
        );
        String::new()
    } else {
        render_template(TIPS_PROMPT, &vars([("tips", tips.to_string())]))?
    };

    let api_prompt = render_template(API_PROMPT, &vars([("apis", api_info)]))?;

    let prompt = render_template(
        SYSTEM_PROMPT_TEMPLATE,
        &vars([
            ("role_prompt", role_prompt),
            ("aipy_prompt", AIPY_PROMPT.to_string()),
            ("tips_prompt", tips_prompt),
            ("api_prompt", api_prompt),
        ]),
    )?;

    Ok(prompt)
}
