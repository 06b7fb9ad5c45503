use crate::collection::generate_numbers;
use crate::errors::AppError;
use crate::models::{CollectionKind, Snapshot};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub fn resolve_data_dir() -> Result<PathBuf, std::io::Error> {
    if let Ok(dir) = env::var("JANTRIK_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    Ok(PathBuf::from("data"))
}

/// One persisted file per collection, named after its storage key.
pub fn collection_path(data_dir: &Path, kind: CollectionKind) -> PathBuf {
    data_dir.join(format!("{}.json", kind.storage_key()))
}

/// Read the persisted snapshot for a collection. A missing file yields a
/// fresh zero-filled snapshot; an unreadable or shape-invalid payload does
/// the same, with a warning, so a corrupted file never takes the app down.
pub async fn load_collection(data_dir: &Path, kind: CollectionKind) -> Snapshot {
    let path = collection_path(data_dir, kind);
    let range = kind.range();

    let raw = match fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return generate_numbers(range);
        }
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            return generate_numbers(range);
        }
    };

    let parsed: Snapshot = match serde_json::from_slice(&raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(
                "discarding unparseable data for {}: {err}",
                kind.storage_key()
            );
            return generate_numbers(range);
        }
    };

    if let Err(reason) = check_shape(&parsed, kind) {
        warn!(
            "discarding malformed data for {}: {reason}",
            kind.storage_key()
        );
        return generate_numbers(range);
    }

    // Merge onto the zero-filled base so every number in range has a key
    // even if the payload only carried active entries.
    let mut numbers = generate_numbers(range);
    numbers.extend(parsed);
    numbers
}

fn check_shape(numbers: &Snapshot, kind: CollectionKind) -> Result<(), String> {
    let range = kind.range();
    for (key, amount) in numbers {
        if key.len() != range.width || !key.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("key {key:?} is not a {}-digit number", range.width));
        }
        let value: i64 = key.parse().map_err(|_| format!("key {key:?} overflows"))?;
        if !range.contains(value) {
            return Err(format!("key {key:?} is outside the collection range"));
        }
        if !amount.is_finite() || *amount < 0.0 {
            return Err(format!("amount {amount} for key {key:?} is invalid"));
        }
    }
    Ok(())
}

pub async fn persist_collection(
    data_dir: &Path,
    kind: CollectionKind,
    numbers: &Snapshot,
) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(numbers).map_err(AppError::internal)?;
    fs::write(collection_path(data_dir, kind), payload)
        .await
        .map_err(AppError::internal)?;
    Ok(())
}

pub async fn clear_collection(data_dir: &Path, kind: CollectionKind) -> Result<(), AppError> {
    match fs::remove_file(collection_path(data_dir, kind)).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(AppError::internal(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_data_dir() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "jantrik_storage_{}_{}",
            std::process::id(),
            nanos
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = unique_data_dir();
        let kind = CollectionKind::Down;

        let mut numbers = generate_numbers(kind.range());
        numbers.insert("05".into(), 12.5);
        numbers.insert("99".into(), 3.0);

        persist_collection(&dir, kind, &numbers).await.unwrap();
        let restored = load_collection(&dir, kind).await;
        assert_eq!(restored, numbers);
    }

    #[tokio::test]
    async fn missing_file_yields_zero_filled_snapshot() {
        let dir = unique_data_dir();
        let numbers = load_collection(&dir, CollectionKind::Down).await;
        assert_eq!(numbers.len(), 100);
        assert!(numbers.values().all(|amount| *amount == 0.0));
    }

    #[tokio::test]
    async fn corrupted_payload_falls_back_to_zero_filled() {
        let dir = unique_data_dir();
        let kind = CollectionKind::Down;
        std::fs::write(collection_path(&dir, kind), b"not json at all").unwrap();

        let numbers = load_collection(&dir, kind).await;
        assert_eq!(numbers.len(), 100);
        assert!(numbers.values().all(|amount| *amount == 0.0));
    }

    #[tokio::test]
    async fn out_of_range_key_falls_back_to_zero_filled() {
        let dir = unique_data_dir();
        let kind = CollectionKind::Down;
        std::fs::write(collection_path(&dir, kind), br#"{"123": 4.0}"#).unwrap();

        let numbers = load_collection(&dir, kind).await;
        assert!(numbers.values().all(|amount| *amount == 0.0));
    }

    #[tokio::test]
    async fn negative_amount_falls_back_to_zero_filled() {
        let dir = unique_data_dir();
        let kind = CollectionKind::Down;
        std::fs::write(collection_path(&dir, kind), br#"{"05": -1.0}"#).unwrap();

        let numbers = load_collection(&dir, kind).await;
        assert!(numbers.values().all(|amount| *amount == 0.0));
    }

    #[tokio::test]
    async fn partial_payload_merges_onto_full_range() {
        let dir = unique_data_dir();
        let kind = CollectionKind::Down;
        std::fs::write(collection_path(&dir, kind), br#"{"05": 7.0}"#).unwrap();

        let numbers = load_collection(&dir, kind).await;
        assert_eq!(numbers.len(), 100);
        assert_eq!(numbers["05"], 7.0);
        assert_eq!(numbers["06"], 0.0);
    }

    #[tokio::test]
    async fn clear_removes_the_persisted_file() {
        let dir = unique_data_dir();
        let kind = CollectionKind::Down;

        let numbers = generate_numbers(kind.range());
        persist_collection(&dir, kind, &numbers).await.unwrap();
        assert!(collection_path(&dir, kind).exists());

        clear_collection(&dir, kind).await.unwrap();
        assert!(!collection_path(&dir, kind).exists());

        // clearing an already-clear collection is fine
        clear_collection(&dir, kind).await.unwrap();
    }
}
