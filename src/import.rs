//! Markdown agent import.
//!
//! Accepts the subagent file convention used by Claude-style agent collections:
//!
//! ```text
//! ---
//! name: code-reviewer
//! description: Reviews diffs before merge
//! tools: Read, Grep, Glob
//! provider: claude
//! ---
//!
//! You are a careful reviewer...
//! ```
//!
//! Frontmatter is read as flat `key: value` lines; nested YAML is not supported and
//! unknown keys are ignored. A document without frontmatter becomes the system prompt
//! of a minimal draft.

use std::collections::HashMap;

use crate::error::AgentImportError;
use crate::mutate::AgentStamp;
use crate::types::{AgentDraft, AgentProvider, AgentSource, ProviderSettings};
use crate::validate::validate_agent;

pub const DEFAULT_IMPORTED_NAME: &str = "imported-agent";
pub const DEFAULT_IMPORTED_DESCRIPTION: &str = "Imported agent";
pub const DEFAULT_MAX_IMPORT_BYTES: usize = 1024 * 1024;

/// Parses an agent document, returning `None` (and logging) when it cannot be imported.
#[must_use]
pub fn parse_agent_markdown(content: &str) -> Option<AgentDraft> {
    parse_agent_markdown_with_limit(content, DEFAULT_MAX_IMPORT_BYTES)
}

#[must_use]
pub fn parse_agent_markdown_with_limit(content: &str, max_bytes: usize) -> Option<AgentDraft> {
    match try_parse_agent_markdown(content, max_bytes) {
        Ok(draft) => Some(draft),
        Err(error) => {
            tracing::error!(%error, "failed to parse agent markdown");
            None
        }
    }
}

pub fn try_parse_agent_markdown(
    content: &str,
    max_bytes: usize,
) -> Result<AgentDraft, AgentImportError> {
    if content.len() > max_bytes {
        return Err(AgentImportError::DocumentTooLarge {
            len: content.len(),
            limit: max_bytes,
        });
    }

    let Some((frontmatter, body)) = split_frontmatter(content) else {
        return Ok(AgentDraft {
            name: DEFAULT_IMPORTED_NAME.to_string(),
            description: DEFAULT_IMPORTED_DESCRIPTION.to_string(),
            tools: Vec::new(),
            system_prompt: content.trim().to_string(),
            source: AgentSource::Imported,
            provider: AgentProvider::All,
            category: None,
        });
    };

    let mut metadata = frontmatter_fields(frontmatter);

    let name = metadata
        .remove("name")
        .unwrap_or_else(|| DEFAULT_IMPORTED_NAME.to_string());
    let description = metadata
        .remove("description")
        .unwrap_or_else(|| DEFAULT_IMPORTED_DESCRIPTION.to_string());
    let tools = metadata
        .remove("tools")
        .map(|tools| parse_tool_list(&tools))
        .unwrap_or_default();
    let provider = metadata
        .remove("provider")
        .and_then(|provider| provider.parse::<AgentProvider>().ok())
        .unwrap_or(AgentProvider::All);
    let category = metadata.remove("category");

    Ok(AgentDraft {
        name,
        description,
        tools,
        system_prompt: body.trim().to_string(),
        source: AgentSource::Imported,
        provider,
        category,
    })
}

/// Splits `content` into frontmatter and body.
///
/// The opening delimiter must be the first line; the block ends at the next line
/// that is `---` followed only by whitespace.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let mut segments = content.split_inclusive('\n');
    let opening = segments.next()?;
    if !opening.ends_with('\n') || !is_delimiter(opening) {
        return None;
    }

    let start = opening.len();
    let mut consumed = start;
    for segment in segments {
        if is_delimiter(segment) {
            let frontmatter = content[start..consumed].trim_end_matches(['\r', '\n']);
            let body = &content[consumed + segment.len()..];
            return Some((frontmatter, body));
        }
        consumed += segment.len();
    }

    None
}

fn is_delimiter(line: &str) -> bool {
    line.strip_prefix("---")
        .is_some_and(|rest| rest.trim().is_empty())
}

// `key: value` with a word-character key and a non-empty value; other lines are skipped.
fn frontmatter_fields(frontmatter: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for line in frontmatter.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            continue;
        }
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        fields.insert(key.to_string(), value.to_string());
    }
    fields
}

fn parse_tool_list(tools: &str) -> Vec<String> {
    tools
        .split(',')
        .map(str::trim)
        .filter(|tool| !tool.is_empty())
        .map(str::to_string)
        .collect()
}

impl ProviderSettings {
    /// Parses, validates and adds an agent document.
    ///
    /// Provider-specific agents are also enabled for their provider; `all` agents
    /// are added without being enabled anywhere.
    pub fn import_agent_markdown(
        &self,
        content: &str,
        stamp: AgentStamp,
    ) -> Result<Self, AgentImportError> {
        let draft = parse_agent_markdown(content).ok_or(AgentImportError::Unparseable)?;
        self.import_agent_draft(draft, stamp)
    }

    /// Validates and adds an already-parsed draft, enabling it like
    /// [`ProviderSettings::import_agent_markdown`].
    pub fn import_agent_draft(
        &self,
        draft: AgentDraft,
        stamp: AgentStamp,
    ) -> Result<Self, AgentImportError> {
        let validation = validate_agent(&draft);
        if !validation.valid {
            return Err(AgentImportError::Invalid {
                errors: validation.errors,
            });
        }

        let agent_id = stamp.id.clone();
        let provider = draft.provider.provider();
        let added = self.add_agent_with(draft, stamp);
        Ok(match provider {
            Some(provider) => added.enable_agent(provider, &agent_id),
            None => added,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_requires_closing_delimiter() {
        assert!(split_frontmatter("---\nname: a\nbody").is_none());
    }

    #[test]
    fn split_accepts_delimiter_at_end_of_input() {
        let (frontmatter, body) = split_frontmatter("---\nname: a\n---").expect("should split");
        assert_eq!(frontmatter, "name: a");
        assert_eq!(body, "");
    }

    #[test]
    fn split_handles_crlf() {
        let (frontmatter, body) =
            split_frontmatter("---\r\nname: a\r\n---\r\nbody\r\n").expect("should split");
        assert_eq!(frontmatter, "name: a");
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn fields_skip_invalid_keys_and_empty_values() {
        let fields = frontmatter_fields("name: a\nbad key: x\nempty:\n  nested: y\nurl: http://x");
        assert_eq!(fields.get("name").map(String::as_str), Some("a"));
        assert_eq!(fields.get("url").map(String::as_str), Some("http://x"));
        assert!(!fields.contains_key("empty"));
        assert!(!fields.contains_key("bad key"));
        assert!(!fields.contains_key("  nested"));
    }

    #[test]
    fn oversized_documents_are_rejected() {
        let error = try_parse_agent_markdown("0123456789", 4).expect_err("must fail");
        assert_eq!(error, AgentImportError::DocumentTooLarge { len: 10, limit: 4 });
        assert!(parse_agent_markdown_with_limit("0123456789", 4).is_none());
    }
}
