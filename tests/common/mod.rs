#![allow(dead_code)]

use std::{
    collections::HashMap,
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use random_quotes::{config::Config, init::init_database, store::QuoteStore, Data};
use tempfile::TempDir;

pub fn testing_config() -> Config {
    Config::from_vars(Some("testing"), &HashMap::new()).unwrap()
}

pub fn testing_config_with(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    Config::from_vars(Some("testing"), &vars).unwrap()
}

/// A migrated, empty in-memory database.
pub async fn memory_store() -> QuoteStore {
    let pool = init_database(&testing_config()).await.unwrap();

    QuoteStore::new(pool)
}

/// A migrated, empty WAL database file inside `dir`.
pub async fn file_store(dir: &Path) -> QuoteStore {
    let url = format!("sqlite://{}", dir.join("quotes.db").display());
    let pool = init_database(&testing_config_with(&[("TEST_DATABASE_URL", &url)]))
        .await
        .unwrap();

    QuoteStore::new(pool)
}

pub async fn memory_data() -> Data {
    data_with(testing_config()).await
}

pub async fn data_with(config: Config) -> Data {
    let pool = init_database(&config).await.unwrap();

    Data {
        config: Arc::new(config),
        store: QuoteStore::new(pool),
    }
}

/// Writes `contents` to `quotes.csv` in a fresh temporary directory.
///
/// The directory is removed when the returned guard is dropped.
pub fn write_csv(contents: &str) -> (TempDir, PathBuf) {
    write_csv_bytes(contents.as_bytes())
}

pub fn write_csv_bytes(contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.csv");

    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents).unwrap();

    (dir, path)
}

pub async fn stored_texts(store: &QuoteStore) -> Vec<String> {
    sqlx::query_scalar::<_, String>("SELECT text FROM quotes ORDER BY id;")
        .fetch_all(store.pool())
        .await
        .unwrap()
}
