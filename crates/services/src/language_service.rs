use std::sync::Arc;

use quiz_core::model::Language;
use storage::repository::PreferenceRepository;

use crate::error::LanguageServiceError;

/// Reads and writes the persisted quiz medium.
#[derive(Clone)]
pub struct LanguageService {
    repo: Arc<dyn PreferenceRepository>,
}

impl LanguageService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted language, defaulting to English when nothing usable
    /// is stored.
    ///
    /// # Errors
    ///
    /// Returns `LanguageServiceError` on storage failures.
    pub async fn load(&self) -> Result<Language, LanguageServiceError> {
        let stored = self.repo.get(Language::PREFERENCE_KEY).await?;
        let language = match stored {
            None => Language::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring stored language");
                Language::default()
            }),
        };
        Ok(language)
    }

    /// Like [`LanguageService::load`], but a storage failure also yields
    /// English.
    pub async fn load_or_default(&self) -> Language {
        self.load().await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "language preference unreadable");
            Language::default()
        })
    }

    /// Persist `language`.
    ///
    /// # Errors
    ///
    /// Returns `LanguageServiceError` if the value cannot be stored.
    pub async fn save(&self, language: Language) -> Result<Language, LanguageServiceError> {
        self.repo
            .set(Language::PREFERENCE_KEY, language.as_str())
            .await?;
        tracing::debug!(%language, "language preference saved");
        Ok(language)
    }

    /// Flip `current` and persist the result.
    ///
    /// # Errors
    ///
    /// Returns `LanguageServiceError` if the value cannot be stored.
    pub async fn toggle(&self, current: Language) -> Result<Language, LanguageServiceError> {
        self.save(current.toggled()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use storage::repository::{InMemoryRepository, StorageError};

    struct BrokenRepository;

    #[async_trait]
    impl PreferenceRepository for BrokenRepository {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("disk gone".into()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("disk gone".into()))
        }
    }

    #[tokio::test]
    async fn missing_preference_is_english() {
        let service = LanguageService::new(Arc::new(InMemoryRepository::new()));
        assert_eq!(service.load().await.unwrap(), Language::English);
    }

    #[tokio::test]
    async fn toggle_persists_the_new_language() {
        let repo = InMemoryRepository::new();
        let service = LanguageService::new(Arc::new(repo.clone()));

        let toggled = service.toggle(Language::English).await.unwrap();
        assert_eq!(toggled, Language::Hindi);
        assert_eq!(
            repo.get(Language::PREFERENCE_KEY).await.unwrap().as_deref(),
            Some("hindi")
        );
        assert_eq!(service.load().await.unwrap(), Language::Hindi);
    }

    #[tokio::test]
    async fn garbage_value_falls_back_to_english() {
        let repo = InMemoryRepository::new();
        repo.set(Language::PREFERENCE_KEY, "klingon").await.unwrap();
        let service = LanguageService::new(Arc::new(repo));
        assert_eq!(service.load().await.unwrap(), Language::English);
    }

    #[tokio::test]
    async fn unreadable_storage_defaults_but_surfaces_on_load() {
        let service = LanguageService::new(Arc::new(BrokenRepository));
        assert!(service.load().await.is_err());
        assert_eq!(service.load_or_default().await, Language::English);
        assert!(service.save(Language::Hindi).await.is_err());
    }
}
