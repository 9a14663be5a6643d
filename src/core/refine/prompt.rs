//! Prompt construction and response cleanup for task refinement

/// Prompt asking the model to rewrite a spoken task.
///
/// With context the model merges both into one actionable task; without it
/// the model only tidies the wording. Either way it is told to answer with
/// the rewritten text alone.
pub fn build_prompt(text: &str, context: Option<&str>) -> String {
    match context.map(str::trim).filter(|c| !c.is_empty()) {
        Some(context) => format!(
            "Rewrite this to-do item as one clear, actionable task of at most two sentences, \
             folding in any relevant details from the extra context.\n\
             To-do: \"{}\"\n\
             Context: \"{}\"\n\
             Reply with only the rewritten task, no explanation or formatting.",
            text, context
        ),
        None => format!(
            "Clean up this to-do item: fix grammar, drop filler words and repetition, \
             and keep it to at most two sentences.\n\
             To-do: \"{}\"\n\
             Reply with only the rewritten task, no explanation or formatting.",
            text
        ),
    }
}

/// Trim model output and strip one pair of wrapping quote characters
pub fn clean_response(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix(['"', '\''])
        .unwrap_or(trimmed);
    let trimmed = trimmed
        .strip_suffix(['"', '\''])
        .unwrap_or(trimmed);
    trimmed.trim().to_string()
}
