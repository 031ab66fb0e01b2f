//! # Defaults Document
//!
//! Parser for Hadoop-style configuration XML:
//!
//! ```xml
//! <configuration>
//!   <property>
//!     <name>yarn.resourcemanager.hostname</name>
//!     <value>0.0.0.0</value>
//!     <description>The hostname of the RM.</description>
//!   </property>
//! </configuration>
//! ```
//!
//! Unknown elements are skipped. Variable references such as `${yarn.nodemanager.hostname}`
//! are kept verbatim; values are never interpreted.

use crate::error::{EngineError, EngineErrorExt};
use confdrift_domain::constants::{DOCUMENT_PROPERTY, DOCUMENT_ROOT};
use confdrift_domain::document::DocumentEntry;
use fxhash::FxHashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;
use xml::common::Position;
use xml::reader::{EventReader, ParserConfig, XmlEvent};

/// Property children the parser reads; anything else inside `<property>` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Value,
    Description,
    Final,
}

impl Field {
    fn from_element(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "value" => Some(Self::Value),
            "description" => Some(Self::Description),
            "final" => Some(Self::Final),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct PendingProperty {
    name: Option<String>,
    value: Option<String>,
    description: Option<String>,
    is_final: bool,
}

/// The parsed entries of a defaults document, in document order.
#[derive(Debug, Clone, Default)]
pub struct DefaultsDocument {
    entries: Vec<DocumentEntry>,
    index: FxHashMap<String, usize>,
}

impl DefaultsDocument {
    /// Reads and parses the document at `path`.
    ///
    /// # Errors
    /// Returns [`EngineError::Io`] when the file cannot be opened, otherwise whatever
    /// [`DefaultsDocument::from_reader`] returns.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let file = File::open(path).context(format!("Opening {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .context(format!("Parsing {}", path.display()))
    }

    /// Parses a document held in memory.
    ///
    /// # Errors
    /// See [`DefaultsDocument::from_reader`].
    pub fn parse(xml: &str) -> Result<Self, EngineError> {
        Self::from_reader(xml.as_bytes())
    }

    /// Parses a document from any byte source.
    ///
    /// # Errors
    /// * [`EngineError::Xml`] if the input is not well-formed XML.
    /// * [`EngineError::MalformedDocument`] if the root is not `<configuration>` or a
    ///   `<property>` has no `<name>`.
    pub fn from_reader(reader: impl Read) -> Result<Self, EngineError> {
        let mut events = ParserConfig::new()
            .trim_whitespace(true)
            .ignore_comments(true)
            .cdata_to_characters(true)
            .create_reader(reader);

        let mut document = Self::default();
        let mut depth = 0usize;
        let mut property: Option<PendingProperty> = None;
        let mut field: Option<Field> = None;
        let mut text = String::new();
        let mut ordinal = 0usize;

        loop {
            match next_event(&mut events)? {
                XmlEvent::StartElement { name, .. } => {
                    depth += 1;
                    let local = name.local_name.as_str();
                    match depth {
                        1 if local != DOCUMENT_ROOT => {
                            return Err(EngineError::MalformedDocument {
                                message: format!(
                                    "expected <{DOCUMENT_ROOT}> root element, found <{local}> at {}",
                                    events.position()
                                )
                                .into(),
                                context: None,
                            });
                        },
                        2 if local == DOCUMENT_PROPERTY => {
                            ordinal += 1;
                            property = Some(PendingProperty::default());
                        },
                        3 if property.is_some() => {
                            field = Field::from_element(local);
                            text.clear();
                        },
                        _ => {},
                    }
                },
                XmlEvent::Characters(chunk) if field.is_some() && depth == 3 => {
                    text.push_str(&chunk);
                },
                XmlEvent::EndElement { .. } => {
                    match depth {
                        3 => {
                            if let (Some(current), Some(pending)) =
                                (field.take(), property.as_mut())
                            {
                                pending.assign(current, text.trim());
                            }
                        },
                        2 => {
                            if let Some(pending) = property.take() {
                                document.insert(pending.finish(ordinal, events.position())?);
                            }
                        },
                        _ => {},
                    }
                    depth = depth.saturating_sub(1);
                },
                XmlEvent::EndDocument => break,
                _ => {},
            }
        }

        debug!(entries = document.len(), "Parsed defaults document");
        Ok(document)
    }

    fn insert(&mut self, entry: DocumentEntry) {
        if let Some(&slot) = self.index.get(&entry.key) {
            debug!(key = %entry.key, "Duplicate document entry, keeping the later one");
            self.entries[slot] = entry;
        } else {
            self.index.insert(entry.key.clone(), self.entries.len());
            self.entries.push(entry);
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DocumentEntry> {
        self.index.get(key).map(|&slot| &self.entries[slot])
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in document order. A duplicated key sits at its first position with the
    /// later value.
    #[must_use]
    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<DocumentEntry> for DefaultsDocument {
    fn from_iter<I: IntoIterator<Item = DocumentEntry>>(iter: I) -> Self {
        let mut document = Self::default();
        for entry in iter {
            document.insert(entry);
        }
        document
    }
}

impl PendingProperty {
    fn assign(&mut self, field: Field, text: &str) {
        match field {
            Field::Name => self.name = Some(text.to_owned()),
            Field::Value => self.value = Some(text.to_owned()),
            Field::Description => self.description = Some(text.to_owned()),
            Field::Final => self.is_final = text.eq_ignore_ascii_case("true"),
        }
    }

    fn finish(
        self,
        ordinal: usize,
        position: xml::common::TextPosition,
    ) -> Result<DocumentEntry, EngineError> {
        let Some(key) = self.name.filter(|name| !name.is_empty()) else {
            return Err(EngineError::MalformedDocument {
                message: format!("<{DOCUMENT_PROPERTY}> #{ordinal} has no <name> at {position}")
                    .into(),
                context: None,
            });
        };

        Ok(DocumentEntry {
            key,
            value: self.value.unwrap_or_default(),
            description: self.description,
            is_final: self.is_final,
        })
    }
}

fn next_event<R: Read>(events: &mut EventReader<R>) -> Result<XmlEvent, EngineError> {
    events.next().map_err(EngineError::from)
}
