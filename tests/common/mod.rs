//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// Builder for a conversation export written to a temp directory
pub struct ExportBuilder {
    conversations: Vec<Value>,
}

impl ExportBuilder {
    /// Create an empty export
    pub fn new() -> Self {
        Self { conversations: Vec::new() }
    }

    /// Add a conversation
    pub fn with_conversation(mut self, conversation: ConversationBuilder) -> Self {
        self.conversations.push(conversation.to_value());
        self
    }

    /// Add an arbitrary top-level entry (e.g. a non-object)
    pub fn with_raw(mut self, value: Value) -> Self {
        self.conversations.push(value);
        self
    }

    /// The export as a JSON value
    pub fn to_value(&self) -> Value {
        Value::Array(self.conversations.clone())
    }

    /// Write `conversations.json` into a new temp dir, returning both
    pub fn write(&self) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("conversations.json");
        fs::write(&path, self.to_value().to_string()).expect("Failed to write export");
        (dir, path)
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one conversation object
pub struct ConversationBuilder {
    fields: Map<String, Value>,
    mapping: Map<String, Value>,
}

impl ConversationBuilder {
    /// Create a conversation with the given id and no messages
    pub fn new(id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), json!(id));
        Self { fields, mapping: Map::new() }
    }

    /// Create a conversation without an `id` field
    pub fn without_id() -> Self {
        Self { fields: Map::new(), mapping: Map::new() }
    }

    /// Set the title
    pub fn title(self, title: &str) -> Self {
        self.field("title", json!(title))
    }

    /// Set the conversation creation time
    pub fn create_time(self, create_time: f64) -> Self {
        self.field("create_time", json!(create_time))
    }

    /// Set the conversation update time
    pub fn update_time(self, update_time: f64) -> Self {
        self.field("update_time", json!(update_time))
    }

    /// Set the gizmo id
    pub fn gizmo_id(self, gizmo_id: &str) -> Self {
        self.field("gizmo_id", json!(gizmo_id))
    }

    /// Set any top-level field
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Add a node holding the given message
    pub fn with_message(mut self, node_id: &str, message: MessageBuilder) -> Self {
        self.mapping
            .insert(node_id.to_string(), json!({"id": node_id, "message": message.to_value()}));
        self
    }

    /// Add a node without a message (like an export's root node)
    pub fn with_empty_node(mut self, node_id: &str) -> Self {
        self.mapping.insert(node_id.to_string(), json!({"id": node_id, "message": null}));
        self
    }

    /// Convert to a JSON value
    pub fn to_value(&self) -> Value {
        let mut conv = self.fields.clone();
        conv.insert("mapping".to_string(), Value::Object(self.mapping.clone()));
        Value::Object(conv)
    }
}

/// Builder for a message inside a node
pub struct MessageBuilder {
    role: String,
    content: Value,
    timestamp: Option<(String, Value)>,
}

impl MessageBuilder {
    /// Create a message from the given role with `{"parts": [text]}` content
    pub fn new(role: &str, text: &str) -> Self {
        Self { role: role.to_string(), content: json!({"parts": [text]}), timestamp: None }
    }

    pub fn user(text: &str) -> Self {
        Self::new("user", text)
    }

    pub fn assistant(text: &str) -> Self {
        Self::new("assistant", text)
    }

    pub fn system(text: &str) -> Self {
        Self::new("system", text)
    }

    pub fn tool(text: &str) -> Self {
        Self::new("tool", text)
    }

    /// Use bare string content instead of parts
    pub fn string_content(mut self) -> Self {
        if let Some(text) = self.content["parts"][0].as_str().map(str::to_string) {
            self.content = Value::String(text);
        }
        self
    }

    /// Set `create_time`
    pub fn create_time(self, create_time: f64) -> Self {
        self.timestamp_field("create_time", json!(create_time))
    }

    /// Set the timestamp under an arbitrary field name
    pub fn timestamp_field(mut self, key: &str, value: Value) -> Self {
        self.timestamp = Some((key.to_string(), value));
        self
    }

    /// Convert to a JSON value
    pub fn to_value(&self) -> Value {
        let mut message = json!({"author": {"role": self.role}, "content": self.content});
        if let Some((key, value)) = &self.timestamp {
            message[key.as_str()] = value.clone();
        }
        message
    }
}

/// Builder for a markdown tree in a temp directory
pub struct MarkdownTreeBuilder {
    temp_dir: TempDir,
}

impl MarkdownTreeBuilder {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    /// Root of the markdown tree
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file at `relative` with `content`, creating directories
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        self.with_bytes(relative, content.as_bytes())
    }

    /// Write raw bytes at `relative`
    pub fn with_bytes(self, relative: &str, bytes: &[u8]) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create markdown dir");
        }
        fs::write(path, bytes).expect("Failed to write markdown file");
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for MarkdownTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read and parse a JSON file
pub fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
}

/// The canonical two-message conversation
pub fn chat_conversation() -> ConversationBuilder {
    ConversationBuilder::new("c1")
        .title("Chat")
        .with_message("n1", MessageBuilder::user("hi").create_time(100.0))
        .with_message("n2", MessageBuilder::assistant("hello").string_content().create_time(200.0))
}

/// An export resembling a real one: root nodes, system prompts, tool calls
pub fn realistic_export() -> ExportBuilder {
    ExportBuilder::new()
        .with_conversation(
            ConversationBuilder::new("c-old")
                .title("Trip planning")
                .create_time(1_700_000_000.0)
                .update_time(1_700_000_500.0)
                .gizmo_id("g-p-travel")
                .with_empty_node("root")
                .with_message("s1", MessageBuilder::system("You are helpful").create_time(1_700_000_001.0))
                .with_message("u1", MessageBuilder::user("Where to go in May?").create_time(1_700_000_010.0))
                .with_message("t1", MessageBuilder::tool("search results").create_time(1_700_000_020.0))
                .with_message("a1", MessageBuilder::assistant("Try Lisbon").create_time(1_700_000_030.0)),
        )
        .with_conversation(
            ConversationBuilder::new("c-new")
                .title("Recipes")
                .create_time(1_710_000_000.0)
                .gizmo_id("g-p-food")
                .with_message("u1", MessageBuilder::user("Pasta ideas?"))
                .with_message("a1", MessageBuilder::assistant("Cacio e pepe")),
        )
        .with_conversation(
            ConversationBuilder::without_id()
                .with_message("u1", MessageBuilder::user("orphan")),
        )
}
