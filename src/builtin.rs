//! Agent presets shipped with the client.

use crate::mutate::AgentStamp;
use crate::types::{AgentDraft, AgentSource, ProviderSettings};

const READ_ONLY_TOOLS: [&str; 3] = ["Read", "Grep", "Glob"];
const EDIT_TOOLS: [&str; 5] = ["Read", "Write", "Edit", "Grep", "Glob"];

#[must_use]
pub fn builtin_agents() -> Vec<AgentDraft> {
    vec![
        builtin(
            "code-reviewer",
            "Code review and quality assurance specialist",
            "Quality Assurance",
            &READ_ONLY_TOOLS,
            "You are a code review expert focused on:\n\
             - Code quality and best practices\n\
             - Security vulnerabilities\n\
             - Performance optimizations\n\
             - Maintainability and readability\n\
             - Testing coverage\n\
             \n\
             Provide constructive feedback with specific examples and suggestions.",
        ),
        builtin(
            "refactoring-specialist",
            "Code refactoring and improvement expert",
            "Code Quality",
            &EDIT_TOOLS,
            "You are a refactoring specialist who:\n\
             - Improves code structure without changing functionality\n\
             - Reduces complexity and improves maintainability\n\
             - Applies design patterns appropriately\n\
             - Ensures backward compatibility\n\
             - Maintains or improves test coverage\n\
             \n\
             Always explain your refactoring decisions.",
        ),
        builtin(
            "api-designer",
            "REST and GraphQL API architect",
            "Backend Development",
            &EDIT_TOOLS,
            "You are an API design expert specializing in:\n\
             - RESTful API design principles\n\
             - GraphQL schema design\n\
             - API versioning strategies\n\
             - Authentication and authorization\n\
             - Error handling and status codes\n\
             - Documentation and OpenAPI specs\n\
             \n\
             Design APIs that are intuitive, secure, and scalable.",
        ),
        builtin(
            "frontend-developer",
            "UI/UX specialist for React, Vue, and Angular",
            "Frontend Development",
            &EDIT_TOOLS,
            "You are a frontend development expert focused on:\n\
             - Modern React, Vue, and Angular patterns\n\
             - Component architecture and reusability\n\
             - State management best practices\n\
             - Performance optimization\n\
             - Accessibility (a11y) standards\n\
             - Responsive design principles\n\
             - User experience (UX) best practices\n\
             \n\
             Create clean, maintainable, and performant frontend code.",
        ),
        builtin(
            "technical-writer",
            "Technical documentation specialist",
            "Documentation",
            &[
                "Read",
                "Write",
                "Edit",
                "Grep",
                "Glob",
                "WebFetch",
                "WebSearch",
            ],
            "You are a technical writing expert who creates:\n\
             - Clear and comprehensive documentation\n\
             - API documentation and guides\n\
             - README files and setup instructions\n\
             - Code comments and inline documentation\n\
             - User guides and tutorials\n\
             \n\
             Write documentation that is accessible to both technical and non-technical audiences.",
        ),
    ]
}

fn builtin(
    name: &str,
    description: &str,
    category: &str,
    tools: &[&str],
    system_prompt: &str,
) -> AgentDraft {
    AgentDraft::new(name, description, system_prompt, AgentSource::Builtin)
        .with_tools(tools.iter().copied())
        .with_category(category)
}

impl ProviderSettings {
    /// Adds every preset whose name is not already taken by a builtin agent.
    #[must_use]
    pub fn seed_builtin_agents(&self) -> Self {
        builtin_agents()
            .into_iter()
            .fold(self.clone(), |settings, draft| {
                let present = settings
                    .all_agents()
                    .any(|agent| agent.source == AgentSource::Builtin && agent.name == draft.name);
                if present {
                    settings
                } else {
                    settings.add_agent_with(draft, AgentStamp::generate())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_agent;

    #[test]
    fn presets_are_valid_builtins() {
        for draft in builtin_agents() {
            assert_eq!(draft.source, AgentSource::Builtin);
            assert!(validate_agent(&draft).valid, "{} should validate", draft.name);
        }
    }

    #[test]
    fn seeding_twice_adds_each_preset_once() {
        let seeded = ProviderSettings::default()
            .seed_builtin_agents()
            .seed_builtin_agents();
        assert_eq!(seeded.agents.len(), builtin_agents().len());
    }
}
