//! Prompt template for alert explanations.
//!
//! The turn structure is a contract with the backend: one system turn
//! establishing the assistant role and the Slack markdown dialect, two user
//! turns pinning down the formatting rules, and one user turn carrying the
//! actual request. Keep the order if you reword anything.

use crate::domain::Message;

const SYSTEM_ROLE: &str = "You are a helpful assistant that helps Software Developers and \
    DevOps Engineers to solve issues relating to Prometheus alerts for Kubernetes clusters. \
    You are factual, clear and concise. Your responses are formatted using Slack specific \
    markdown to ensure compatibility with displaying your response in a Slack message.";

const MARKDOWN_RULES: &str = "Here are the rules for Slack specific markdown, make sure to \
    only use the following syntax in your responses: Text formatted in bold, surround text \
    with asterisks: '*your text*', '**' is invalid syntax so do not use it. Text formatted \
    in italics, surround text with underscores: '_your text_'. Text formatted in \
    strikethrough, surround text with tildes: '~your text~'. Text formatted in code, \
    surround text with backticks: '`your text`'. Text formatted in blockquote, add an \
    angled bracket in front of text: '>your text'. Text formatted in code block, add three \
    backticks in front of text: '```your text'. Text formatted in an ordered list, add 1 \
    and a full stop '1.' in front of text. Text formatted in a bulleted list, add an \
    asterisk in front of text: '* your text'.";

const HEADING_RULES: &str = "When responding, use Slack specific markdown following the \
    rules provided. Always bold and italic headings, i.e '*_The heading:_*', to clearly \
    separate the content with headers. Don't include any conversational response before \
    the facts.";

/// Build the multi-turn prompt asking for a structured explanation of the
/// given alert name or search term.
pub fn explanation_prompt(search_term: &str) -> Vec<Message> {
    let request = format!(
        "Please describe what the Kubernetes Prometheus alert '{search_term}' means, giving \
         succinct examples of common causes. Provide any possible solutions including any \
         troubleshooting steps that can be performed. Give a real-world example of a \
         situation that can cause the alert. Clearly separate sections for Alert Name, \
         Description, Real World Example, Common Causes, Troubleshooting Steps, and \
         Possible Solutions."
    );

    vec![
        Message::system(SYSTEM_ROLE),
        Message::user(MARKDOWN_RULES),
        Message::user(HEADING_RULES),
        Message::user(request),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageRole;

    #[test]
    fn test_turn_structure() {
        let messages = explanation_prompt("KubePodNotReady");
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, MessageRole::System);
        assert!(
            messages[1..]
                .iter()
                .all(|m| m.role == MessageRole::User)
        );
    }

    #[test]
    fn test_search_term_in_final_turn() {
        let messages = explanation_prompt("KubePodNotReady");
        assert!(messages[3].content.contains("'KubePodNotReady'"));
    }

    #[test]
    fn test_requested_sections_present() {
        let messages = explanation_prompt("HighLatency");
        let request = &messages[3].content;
        for section in [
            "Alert Name",
            "Description",
            "Real World Example",
            "Common Causes",
            "Troubleshooting Steps",
            "Possible Solutions",
        ] {
            assert!(request.contains(section), "missing section: {section}");
        }
    }
}
