use cluemine_core::constants::{DELETION_PLACEHOLDERS, SYSTEM_AUTHOR};
use cluemine_core::Message;

/// Drops service noise and splits multi-line messages into siblings.
///
/// Deleted-message placeholders and system lines never carry clues or
/// answers. Splitting keeps the invariant that a message text holds a
/// single line; siblings inherit the original timestamp and author.
pub fn preprocess(messages: Vec<Message>) -> Vec<Message> {
    let mut processed = Vec::with_capacity(messages.len());
    for message in messages {
        if DELETION_PLACEHOLDERS.contains(&message.text.as_str()) {
            continue;
        }
        if message.author == SYSTEM_AUTHOR {
            continue;
        }
        if message.text.contains('\n') {
            for line in message.text.split('\n') {
                processed.push(Message::new(message.timestamp, message.author.clone(), line));
            }
        } else {
            processed.push(message);
        }
    }
    processed
}
