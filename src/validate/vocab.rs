use crate::handle::VocabularyRecord;
use std::collections::HashMap;

/// Seam to the external controlled-vocabulary service
///
/// Resolves platform and instrument short names to their canonical
/// records. Only the validator consults it.
pub trait VocabularyLookup {
    fn platform(&self, short_name: &str) -> Option<VocabularyRecord>;
    fn instrument(&self, short_name: &str) -> Option<VocabularyRecord>;
}

impl<V: VocabularyLookup + ?Sized> VocabularyLookup for &V {
    fn platform(&self, short_name: &str) -> Option<VocabularyRecord> {
        (**self).platform(short_name)
    }

    fn instrument(&self, short_name: &str) -> Option<VocabularyRecord> {
        (**self).instrument(short_name)
    }
}

/// In-memory vocabulary, keyed by record short name
///
/// Stands in for the real vocabulary service in tests and in the demo
/// binary.
#[derive(Debug, Clone, Default)]
pub struct StaticVocabulary {
    platforms: HashMap<String, VocabularyRecord>,
    instruments: HashMap<String, VocabularyRecord>,
}

impl StaticVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_platform(&mut self, record: VocabularyRecord) {
        self.platforms.insert(record.short_name.clone(), record);
    }

    pub fn add_instrument(&mut self, record: VocabularyRecord) {
        self.instruments.insert(record.short_name.clone(), record);
    }
}

impl VocabularyLookup for StaticVocabulary {
    fn platform(&self, short_name: &str) -> Option<VocabularyRecord> {
        self.platforms.get(short_name).cloned()
    }

    fn instrument(&self, short_name: &str) -> Option<VocabularyRecord> {
        self.instruments.get(short_name).cloned()
    }
}
