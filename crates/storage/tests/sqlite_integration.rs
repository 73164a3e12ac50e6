use quiz_core::model::Language;
use storage::repository::{PreferenceRepository, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrips_language_preference() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_language?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get(Language::PREFERENCE_KEY).await.unwrap(), None);

    repo.set(Language::PREFERENCE_KEY, Language::Hindi.as_str())
        .await
        .expect("store");
    let stored = repo.get(Language::PREFERENCE_KEY).await.expect("read");
    assert_eq!(stored.as_deref(), Some("hindi"));

    repo.set(Language::PREFERENCE_KEY, Language::English.as_str())
        .await
        .expect("overwrite");
    let stored = repo.get(Language::PREFERENCE_KEY).await.expect("read");
    assert_eq!(stored.as_deref(), Some("english"));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate_twice?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set("k", "v").await.expect("store");
    repo.migrate().await.expect("second migrate");

    assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn storage_sqlite_wires_preferences() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage
        .preferences
        .set(Language::PREFERENCE_KEY, "hindi")
        .await
        .expect("store");
    let value = storage
        .preferences
        .get(Language::PREFERENCE_KEY)
        .await
        .expect("read");
    assert_eq!(value.as_deref(), Some("hindi"));
}
