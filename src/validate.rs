use serde::Serialize;

use crate::types::AgentDraft;

/// Outcome of [`validate_agent`]; `errors` lists every violation found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Checks that the display and prompt fields of `agent` are non-blank.
///
/// `tools` is a `Vec` so the "tools must be a list" rule holds by construction.
#[must_use]
pub fn validate_agent(agent: &AgentDraft) -> AgentValidation {
    let mut errors = Vec::new();

    if agent.name.trim().is_empty() {
        errors.push("Agent name is required".to_string());
    }
    if agent.description.trim().is_empty() {
        errors.push("Agent description is required".to_string());
    }
    if agent.system_prompt.trim().is_empty() {
        errors.push("Agent system prompt is required".to_string());
    }

    AgentValidation {
        valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentSource;

    #[test]
    fn collects_every_violation() {
        let draft = AgentDraft::new("  ", "", "\n", AgentSource::Custom);

        let validation = validate_agent(&draft);

        assert!(!validation.valid);
        assert_eq!(
            validation.errors,
            vec![
                "Agent name is required",
                "Agent description is required",
                "Agent system prompt is required",
            ]
        );
    }

    #[test]
    fn complete_draft_is_valid() {
        let draft = AgentDraft::new("a", "b", "c", AgentSource::Imported).with_tools(["Read"]);
        assert_eq!(
            validate_agent(&draft),
            AgentValidation {
                valid: true,
                errors: Vec::new(),
            }
        );
    }
}
