//! Prompt templates for log analysis and summarization

/// Render the question-answering prompt over retrieved log context.
///
/// The template asks the model to flag recurring issues with an importance
/// indicator chosen from how often the issue appears in the context.
pub fn analysis_prompt(context: &str, question: &str) -> String {
    format!(
        "You are a log analyzer and you will analyze the log and answer questions.\n\
         Use the provided context to respond. If the question is about recurring issues, \
         return each issue with its count and add an indicator based on the count: \
         if the count is greater than 5 use 🔥, if greater than 3 use ⚠️, \
         if greater than 1 use 🟡, else use ✅.\n\
         If the answer is outside the context, acknowledge that you don't know.\n\
         Limit your response to three concise sentences.\n\n\
         Context:\n{context}\n\n\
         Question: {question}\n\
         Answer:"
    )
}

/// Render the map-stage prompt that summarizes one log chunk
pub fn chunk_summary_prompt(chunk: &str) -> String {
    format!(
        "You are a log analyzer that summarizes logs. Summarize the following \
         log chunk clearly, keeping error messages and counts:\n\n{chunk}"
    )
}

/// Render the reduce-stage prompt that combines partial summaries
pub fn final_summary_prompt(partial_summaries: &str) -> String {
    format!(
        "You are a log analyzer that summarizes logs. Identify the top 3 issues \
         with their counts and add an indicator based on each count: \
         if the count is greater than 5 use 🔥, if greater than 3 use ⚠️, \
         if greater than 1 use 🟡, else use ✅.\n\
         Limit your response to three concise sentences.\n\
         Summarize the following log clearly:\n\n{partial_summaries}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_embeds_context_and_question() {
        let prompt = analysis_prompt("ERROR db timeout", "what failed?");
        assert!(prompt.contains("ERROR db timeout"));
        assert!(prompt.contains("what failed?"));
        // Context comes before the question, stuffed-documents style.
        assert!(prompt.find("ERROR db timeout").unwrap() < prompt.find("what failed?").unwrap());
    }

    #[test]
    fn test_summary_prompts_embed_input() {
        assert!(chunk_summary_prompt("WARN disk full").contains("WARN disk full"));
        assert!(final_summary_prompt("partial one").contains("partial one"));
    }
}
