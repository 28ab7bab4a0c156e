//! Grouping of notes by topic

use super::note::Note;
use super::topic::TopicKey;
use std::collections::BTreeMap;

/// A topic and the notes filed directly under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub key: TopicKey,
    /// Notes keyed by relative path
    pub notes: BTreeMap<String, Note>,
}

impl Topic {
    pub fn new(key: TopicKey) -> Self {
        Self {
            key,
            notes: BTreeMap::new(),
        }
    }

    /// Notes in index order (sticky first, then by title)
    pub fn sorted_notes(&self) -> Vec<&Note> {
        let mut notes: Vec<&Note> = self.notes.values().collect();
        notes.sort_by(|a, b| a.index_order(b));
        notes
    }
}

/// All topics of one indexing run, ordered by key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    topics: BTreeMap<TopicKey, Topic>,
}

impl Grouping {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a note under its topic, creating the topic if needed.
    ///
    /// A note with the same relative path replaces the previous one.
    pub fn insert(&mut self, note: Note) {
        self.topics
            .entry(note.topic.clone())
            .or_insert_with_key(|key| Topic::new(key.clone()))
            .notes
            .insert(note.relative_path.clone(), note);
    }

    /// Add an empty topic for every missing ancestor of a present topic.
    ///
    /// e.g. a lone `Go/Concurrency/Channels` topic also yields `Go` and
    /// `Go/Concurrency`.
    pub fn fill_missing_topics(&mut self) {
        let missing: Vec<TopicKey> = self
            .topics
            .keys()
            .flat_map(|key| key.strict_prefixes())
            .filter(|prefix| !self.topics.contains_key(prefix))
            .collect();

        for key in missing {
            self.topics
                .entry(key)
                .or_insert_with_key(|key| Topic::new(key.clone()));
        }
    }

    /// Build a complete grouping from a set of notes
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let mut grouping = Self::new();
        for note in notes {
            grouping.insert(note);
        }
        grouping.fill_missing_topics();
        grouping
    }

    /// Topics in rendering order
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.values()
    }

    pub fn get(&self, key: &TopicKey) -> Option<&Topic> {
        self.topics.get(key)
    }

    pub fn contains(&self, key: &TopicKey) -> bool {
        self.topics.contains_key(key)
    }

    /// Number of topics, synthesized ones included
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Total number of notes across all topics
    pub fn note_count(&self) -> usize {
        self.topics.values().map(|topic| topic.notes.len()).sum()
    }
}
