//! System prompt for memory-grounded chat

use crate::memory::entry::MemoryEntry;

/// System prompt used when no memory matched the query
pub const FALLBACK_SYSTEM_PROMPT: &str = "You are a helpful AI.";

/// Lead-in used when memories are embedded into the prompt
pub const MEMORY_SYSTEM_PROMPT: &str =
    "You are a helpful AI. Answer based on the query and memories.";

/// Builds the system prompt for a chat turn
pub struct MemoryPromptTemplate;

impl MemoryPromptTemplate {
    /// System prompt for the given search results, in the order returned
    pub fn system(memories: &[MemoryEntry]) -> String {
        if memories.is_empty() {
            return FALLBACK_SYSTEM_PROMPT.to_string();
        }
        format!(
            "{}\n\nMemories:\n{}",
            MEMORY_SYSTEM_PROMPT,
            Self::memory_lines(memories)
        )
    }

    /// One `- <memory>` line per entry, newline separated
    pub fn memory_lines(memories: &[MemoryEntry]) -> String {
        memories
            .iter()
            .map(|entry| format!("- {}", entry.memory))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::entry::UserId;

    fn entry(text: &str) -> MemoryEntry {
        MemoryEntry::new("id", text, UserId::default())
    }

    #[test]
    fn test_no_memories_uses_fallback_exactly() {
        assert_eq!(MemoryPromptTemplate::system(&[]), "You are a helpful AI.");
    }

    #[test]
    fn test_single_memory_prompt() {
        let prompt = MemoryPromptTemplate::system(&[entry("favorite color is blue")]);
        assert_eq!(
            prompt,
            "You are a helpful AI. Answer based on the query and memories.\n\nMemories:\n- favorite color is blue"
        );
    }

    #[test]
    fn test_memories_keep_search_order() {
        let prompt =
            MemoryPromptTemplate::system(&[entry("first"), entry("second"), entry("third")]);
        assert!(prompt.ends_with("Memories:\n- first\n- second\n- third"));
        assert_eq!(prompt.matches("\n- ").count(), 3);
    }

    #[test]
    fn test_multiline_memory_is_not_split() {
        let lines = MemoryPromptTemplate::memory_lines(&[entry("a\nb")]);
        assert_eq!(lines, "- a\nb");
    }
}
