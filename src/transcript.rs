use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

/// Parse a raw support transcript into ordered, role-tagged messages.
///
/// Lines starting with `Agent:` become system messages, lines starting with
/// `Customer:` become user messages; the label must sit at the very start of
/// the line, an indented label does not count. Any other line (timestamps,
/// order notes) is dropped without error; the transcripts interleave them
/// freely.
pub fn parse_transcript(transcript: &str) -> Conversation {
    let messages = transcript
        .lines()
        .filter_map(|line| {
            if let Some(rest) = line.strip_prefix("Agent:") {
                Some(Message {
                    role: Role::System,
                    content: rest.trim().to_owned(),
                })
            } else if let Some(rest) = line.strip_prefix("Customer:") {
                Some(Message {
                    role: Role::User,
                    content: rest.trim().to_owned(),
                })
            } else {
                None
            }
        })
        .collect();

    Conversation { messages }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_lines_become_system_messages() {
        let conversation = parse_transcript("Agent:   Hello, how can I assist you today?  ");
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(conversation.messages[0].role, Role::System);
        assert_eq!(
            conversation.messages[0].content,
            "Hello, how can I assist you today?"
        );
    }

    #[test]
    fn customer_lines_become_user_messages() {
        let conversation = parse_transcript("Customer: I have an issue with my order.");
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(conversation.messages[0].role, Role::User);
        assert_eq!(conversation.messages[0].content, "I have an issue with my order.");
    }

    #[test]
    fn unlabelled_lines_are_dropped() {
        let conversation =
            parse_transcript("Agent: Hello\nCustomer: Hi there\nNote: internal\nCustomer: Bye");
        let rendered: Vec<(Role, &str)> = conversation
            .messages
            .iter()
            .map(|message| (message.role, message.content.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                (Role::System, "Hello"),
                (Role::User, "Hi there"),
                (Role::User, "Bye"),
            ]
        );
    }

    #[test]
    fn indented_labels_do_not_count() {
        assert!(parse_transcript("  Agent: Hi").messages.is_empty());
        assert!(parse_transcript("\tCustomer: Hi").messages.is_empty());
        let conversation = parse_transcript("Agent: Hello\n  Agent: Hi");
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(conversation.messages[0].content, "Hello");
    }

    #[test]
    fn order_follows_the_transcript() {
        let conversation =
            parse_transcript("Customer: First\nAgent: Second\nCustomer: Third");
        assert_eq!(conversation.messages[0].content, "First");
        assert_eq!(conversation.messages[1].content, "Second");
        assert_eq!(conversation.messages[2].content, "Third");
    }

    #[test]
    fn empty_transcript_yields_no_messages() {
        assert!(parse_transcript("").messages.is_empty());
        assert!(parse_transcript("\n\n").messages.is_empty());
    }

    #[test]
    fn roles_serialize_lowercase() {
        let message = Message {
            role: Role::System,
            content: "Hello".to_owned(),
        };
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"role":"system","content":"Hello"}"#);
    }
}
