use chrono::{NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::error::{AnalysisError, AnalysisResult};
use cluemine_core::constants::SYSTEM_AUTHOR;
use cluemine_core::Message;

/// A complete parsed transcript.
#[derive(Debug, Clone)]
pub struct ParsedTranscript {
    /// Source format name (e.g. "whatsapp").
    pub format: String,

    /// Chat name, derived from the file name.
    pub chat_name: String,

    /// Messages in transcript order.
    pub messages: Vec<Message>,
}

/// Trait for format-specific transcript parsers.
pub trait TranscriptParser: Send + Sync {
    /// Returns the name of the parser.
    fn name(&self) -> &str;
    /// Check if this parser can handle the given file.
    fn can_parse(&self, path: &Path) -> bool;
    /// Parse the transcript file into structured messages.
    fn parse(&self, path: &Path) -> AnalysisResult<ParsedTranscript>;
}

/// Registry of available transcript parsers.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn TranscriptParser>>,
}

impl ParserRegistry {
    /// Creates a new registry with default parsers.
    pub fn new() -> Self {
        let mut registry = Self {
            parsers: Vec::new(),
        };
        registry.register_default_parsers();
        registry
    }

    fn register_default_parsers(&mut self) {
        self.parsers.push(Box::new(WhatsAppParser::new()));
        self.parsers.push(Box::new(JsonParser::new()));
    }

    /// Register a new parser.
    ///
    /// Adds a custom parser to the registry.
    pub fn register(&mut self, parser: Box<dyn TranscriptParser>) {
        self.parsers.push(parser);
    }

    /// Detect the transcript format and parse the file.
    ///
    /// Tries each registered parser in order until one accepts the file.
    pub fn detect_and_parse(&self, path: &Path) -> AnalysisResult<ParsedTranscript> {
        for parser in &self.parsers {
            if parser.can_parse(path) {
                info!("Detected format: {}", parser.name());
                return parser.parse(path);
            }
        }
        Err(AnalysisError::UnsupportedFormat(
            "Unknown transcript format".to_string(),
        ))
    }

    /// Parse the file with the named parser, bypassing detection.
    pub fn parse_with(&self, name: &str, path: &Path) -> AnalysisResult<ParsedTranscript> {
        self.parsers
            .iter()
            .find(|parser| parser.name() == name)
            .ok_or_else(|| AnalysisError::UnsupportedFormat(name.to_string()))?
            .parse(path)
    }

    /// Returns all registered parser names.
    pub fn parser_names(&self) -> Vec<String> {
        self.parsers
            .iter()
            .map(|parser| parser.name().to_string())
            .collect()
    }

    /// Returns number of registered parsers.
    pub fn parser_count(&self) -> usize {
        self.parsers.len()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parser for WhatsApp text exports.
pub struct WhatsAppParser {
    name_str: String,
}

impl WhatsAppParser {
    /// Creates a new WhatsAppParser instance.
    pub fn new() -> Self {
        Self {
            name_str: "whatsapp".to_string(),
        }
    }
}

// Android exports: "1/2/23, 10:15 - Alice: text"; service lines omit the
// "Author: " part entirely.
static ANDROID_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}/\d{1,2}/\d{2,4}), (\d{1,2}:\d{2}(?::\d{2})?(?: [AP]M)?) - (?:(.+?): )?(.*)$")
        .expect("android line regex")
});

// iOS exports wrap the timestamp in brackets and usually carry seconds.
static IOS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\[(\d{1,2}/\d{1,2}/\d{2,4}), (\d{1,2}:\d{2}(?::\d{2})?(?: [AP]M)?)\] (?:(.+?): )?(.*)$",
    )
    .expect("ios line regex")
});

impl TranscriptParser for WhatsAppParser {
    fn name(&self) -> &str {
        &self.name_str
    }

    fn can_parse(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.contains("whatsapp") || path_str.ends_with(".txt")
    }

    fn parse(&self, path: &Path) -> AnalysisResult<ParsedTranscript> {
        let content = std::fs::read_to_string(path)?;
        let mut messages: Vec<Message> = Vec::new();

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(msg) = parse_whatsapp_line(line) {
                messages.push(msg);
            } else if let Some(last) = messages.last_mut() {
                // Untimestamped lines continue the previous message.
                last.text.push('\n');
                last.text.push_str(line);
            }
        }

        let chat_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "WhatsApp Chat".to_string());

        Ok(ParsedTranscript {
            format: "whatsapp".to_string(),
            chat_name,
            messages,
        })
    }
}

fn parse_whatsapp_line(line: &str) -> Option<Message> {
    let caps = ANDROID_LINE
        .captures(line)
        .or_else(|| IOS_LINE.captures(line))?;

    let timestamp_str = format!("{} {}", caps.get(1)?.as_str(), caps.get(2)?.as_str());
    let author = caps
        .get(3)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| SYSTEM_AUTHOR.to_string());
    let text = caps.get(4)?.as_str().to_string();

    let timestamp = parse_whatsapp_timestamp(&timestamp_str)?;

    Some(Message {
        timestamp,
        author,
        text,
    })
}

fn parse_whatsapp_timestamp(s: &str) -> Option<i64> {
    const FORMATS: &[&str] = &[
        "%m/%d/%y %H:%M",
        "%d/%m/%y %H:%M",
        "%m/%d/%Y %H:%M",
        "%d/%m/%Y %H:%M",
        "%m/%d/%y %H:%M:%S",
        "%d/%m/%y %H:%M:%S",
        "%m/%d/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M:%S",
        "%m/%d/%y %I:%M %p",
        "%m/%d/%Y %I:%M %p",
        "%m/%d/%y %I:%M:%S %p",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| Utc.from_utc_datetime(&dt).timestamp())
}

/// Parser for pre-parsed JSON transcripts.
///
/// Accepts an array of `{date, author, message}` records, the shape common
/// chat-export tooling produces.
pub struct JsonParser {
    name_str: String,
}

impl JsonParser {
    /// Creates a new JsonParser instance.
    pub fn new() -> Self {
        Self {
            name_str: "json".to_string(),
        }
    }
}

impl TranscriptParser for JsonParser {
    fn name(&self) -> &str {
        &self.name_str
    }

    fn can_parse(&self, path: &Path) -> bool {
        path.extension().map(|e| e == "json").unwrap_or(false)
    }

    fn parse(&self, path: &Path) -> AnalysisResult<ParsedTranscript> {
        #[derive(Deserialize)]
        struct JsonRecord {
            date: String,
            author: String,
            message: String,
        }

        let content = std::fs::read_to_string(path)?;
        let records: Vec<JsonRecord> = serde_json::from_str(&content)?;

        let messages = records
            .into_iter()
            .map(|record| Message {
                timestamp: parse_json_timestamp(&record.date).unwrap_or(0),
                author: record.author,
                text: record.message,
            })
            .collect();

        Ok(ParsedTranscript {
            format: "json".to_string(),
            chat_name: path
                .file_stem()
                .ok_or(AnalysisError::InvalidFormat(
                    "missing file stem".to_string(),
                ))?
                .to_string_lossy()
                .to_string(),
            messages,
        })
    }
}

fn parse_json_timestamp(s: &str) -> Option<i64> {
    use chrono::DateTime;

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.timestamp())
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| Utc.from_utc_datetime(&dt).timestamp())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn registry_contains_supported_format_parsers() {
        let registry = ParserRegistry::new();
        let names = registry.parser_names();

        for parser_name in ["whatsapp", "json"] {
            assert!(
                names.contains(&parser_name.to_string()),
                "missing parser in registry: {}",
                parser_name
            );
        }
        assert_eq!(registry.parser_count(), 2);
    }

    #[test]
    fn parses_android_export_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(
            &path,
            "1/2/23, 10:15 - Alice: Capital of France (5)\n1/2/23, 10:16 - Bob: PARIS\n",
        )
        .unwrap();

        let transcript = WhatsAppParser::new().parse(&path).unwrap();
        assert_eq!(transcript.format, "whatsapp");
        assert_eq!(transcript.chat_name, "chat");
        assert_eq!(transcript.messages.len(), 2);
        assert_eq!(transcript.messages[0].author, "Alice");
        assert_eq!(transcript.messages[0].text, "Capital of France (5)");
        assert_eq!(transcript.messages[1].author, "Bob");
        assert!(transcript.messages[0].timestamp < transcript.messages[1].timestamp);
    }

    #[test]
    fn parses_bracketed_ios_export_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(&path, "[1/2/23, 10:15:42] Alice: hello there\n").unwrap();

        let transcript = WhatsAppParser::new().parse(&path).unwrap();
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].author, "Alice");
        assert_eq!(transcript.messages[0].text, "hello there");
    }

    #[test]
    fn untimestamped_lines_fold_into_the_previous_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(
            &path,
            "1/2/23, 10:15 - Alice: first line\nsecond line\n1/2/23, 10:16 - Bob: reply\n",
        )
        .unwrap();

        let transcript = WhatsAppParser::new().parse(&path).unwrap();
        assert_eq!(transcript.messages.len(), 2);
        assert_eq!(transcript.messages[0].text, "first line\nsecond line");
    }

    #[test]
    fn authorless_lines_become_system_messages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        fs::write(
            &path,
            "1/2/23, 10:14 - Messages and calls are end-to-end encrypted\n",
        )
        .unwrap();

        let transcript = WhatsAppParser::new().parse(&path).unwrap();
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].author, SYSTEM_AUTHOR);
    }

    #[test]
    fn parses_json_record_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.json");
        fs::write(
            &path,
            r#"[{"date": "2023-01-02 10:15:00", "author": "Alice", "message": "hi"}]"#,
        )
        .unwrap();

        let transcript = JsonParser::new().parse(&path).unwrap();
        assert_eq!(transcript.format, "json");
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].author, "Alice");
        assert!(transcript.messages[0].timestamp > 0);
    }

    #[test]
    fn detection_routes_txt_files_to_whatsapp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.txt");
        fs::write(&path, "1/2/23, 10:15 - Alice: hello\n").unwrap();

        let transcript = ParserRegistry::new().detect_and_parse(&path).unwrap();
        assert_eq!(transcript.format, "whatsapp");
    }

    #[test]
    fn named_parser_selection_rejects_unknown_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.txt");
        fs::write(&path, "").unwrap();

        let err = ParserRegistry::new().parse_with("telegram", &path);
        assert!(matches!(err, Err(AnalysisError::UnsupportedFormat(_))));
    }
}
