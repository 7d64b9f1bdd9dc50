//! Prompt assembly for `@workspace` requests.

/// Instruction placed ahead of the retrieved workspace files.
pub const WORKSPACE_INSTRUCTION: &str =
    "Read following workspace code end-to-end and answer the prompt initialised by `@workspace` ";

/// Build the enriched user turn: instruction, retrieved context, then the
/// original prompt.
pub fn workspace_prompt(context: &str, prompt: &str) -> String {
    format!("{WORKSPACE_INSTRUCTION}\n{context}\n\n{prompt}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_workspace_prompt_layout() {
        let prompt = workspace_prompt("1. main.dart\n```dart\nvoid main() {}\n```", "explain main");

        assert_eq!(
            prompt,
            "Read following workspace code end-to-end and answer the prompt initialised by `@workspace` \n\
             1. main.dart\n```dart\nvoid main() {}\n```\n\n\
             explain main"
        );
    }

    #[test]
    fn test_workspace_prompt_with_empty_context() {
        let prompt = workspace_prompt("", "hello");
        assert!(prompt.ends_with(" \n\n\nhello"));
    }
}
