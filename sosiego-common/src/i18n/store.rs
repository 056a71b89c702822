use crate::i18n::language::Language;
use tokio::sync::watch;

/// Name under which the active tag is persisted.
pub const LANGUAGE_KEY: &str = "language";

/// Where the active tag survives between visits.
pub trait LocaleStorage {
    fn load(&self) -> Option<String>;

    fn save(&mut self, tag: &str);
}

/// The active display language.
///
/// Reads the persisted tag once when opened, falling back to Spanish for a
/// missing or unknown tag. Every change is written back before subscribers
/// are notified.
#[derive(Debug)]
pub struct LocaleStore<S> {
    storage: S,
    current: watch::Sender<Language>,
}

impl<S: LocaleStorage> LocaleStore<S> {
    pub fn open(storage: S) -> Self {
        let language = storage
            .load()
            .and_then(|tag| Language::from_code(&tag))
            .unwrap_or_default();

        Self {
            storage,
            current: watch::Sender::new(language),
        }
    }

    #[must_use]
    pub fn current(&self) -> Language {
        *self.current.borrow()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.current.subscribe()
    }

    pub fn set(&mut self, language: Language) {
        self.storage.save(language.code());
        self.current.send_replace(language);
    }

    /// Switches to the other language and returns it.
    pub fn toggle(&mut self) -> Language {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use crate::i18n::{
        language::Language,
        store::{LocaleStorage, LocaleStore},
    };

    #[derive(Default)]
    struct RecordingStorage {
        stored: Option<String>,
        writes: Vec<String>,
    }

    impl LocaleStorage for RecordingStorage {
        fn load(&self) -> Option<String> {
            self.stored.clone()
        }

        fn save(&mut self, tag: &str) {
            self.stored = Some(tag.to_owned());
            self.writes.push(tag.to_owned());
        }
    }

    fn stored(tag: &str) -> RecordingStorage {
        RecordingStorage {
            stored: Some(tag.to_owned()),
            writes: Vec::new(),
        }
    }

    #[test]
    fn startup_reads_persisted_tag() {
        assert_eq!(LocaleStore::open(stored("en")).current(), Language::English);
        assert_eq!(LocaleStore::open(stored("es")).current(), Language::Spanish);
    }

    #[test]
    fn missing_or_unknown_tag_defaults_to_spanish() {
        assert_eq!(
            LocaleStore::open(RecordingStorage::default()).current(),
            Language::Spanish
        );
        assert_eq!(LocaleStore::open(stored("fr")).current(), Language::Spanish);
    }

    #[test]
    fn double_toggle_returns_and_persists_each_step() {
        let mut store = LocaleStore::open(RecordingStorage::default());
        let original = store.current();

        let first = store.toggle();
        assert_eq!(first, Language::English);
        assert_eq!(store.storage().stored.as_deref(), Some(first.code()));

        let second = store.toggle();
        assert_eq!(second, original);
        assert_eq!(store.storage().stored.as_deref(), Some(second.code()));

        assert_eq!(store.into_storage().writes, ["en", "es"]);
    }

    #[test]
    fn subscribers_see_changes() {
        let mut store = LocaleStore::open(RecordingStorage::default());
        let mut receiver = store.subscribe();
        assert!(!receiver.has_changed().unwrap());

        store.set(Language::English);

        assert!(receiver.has_changed().unwrap());
        assert_eq!(*receiver.borrow_and_update(), Language::English);
    }
}
