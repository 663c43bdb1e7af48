//! Persisted high score
//!
//! A single scalar in the key/value store under `HI_SCORE_KEY`.

use crate::consts::HI_SCORE_KEY;
use crate::platform::{KeyValueStore, StorageError};

/// Parse stored high-score text.
///
/// Integers load as-is; numeric text with a fraction or exponent is
/// truncated. Anything else (negative, NaN, garbage) loads as 0.
pub fn parse_hi_score(text: &str) -> u64 {
    let text = text.trim();
    if let Ok(score) = text.parse::<u64>() {
        return score;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value.trunc() as u64,
        _ => 0,
    }
}

/// Read the stored high score, defaulting to 0 when absent or unreadable
pub fn load_hi_score(store: &impl KeyValueStore) -> u64 {
    match store.get(HI_SCORE_KEY) {
        Ok(Some(text)) => {
            let score = parse_hi_score(&text);
            log::info!("Loaded high score {}", score);
            score
        }
        Ok(None) => {
            log::info!("No high score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Failed to read high score: {}", e);
            0
        }
    }
}

/// Write the high score
pub fn save_hi_score(store: &mut impl KeyValueStore, score: u64) -> Result<(), StorageError> {
    store.set(HI_SCORE_KEY, &score.to_string())?;
    log::info!("High score saved ({})", score);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_parse_hi_score() {
        assert_eq!(parse_hi_score("1500"), 1500);
        assert_eq!(parse_hi_score(" 42\n"), 42);
        assert_eq!(parse_hi_score("1500.9"), 1500);
        assert_eq!(parse_hi_score("1.2e3"), 1200);
        assert_eq!(parse_hi_score(""), 0);
        assert_eq!(parse_hi_score("abc"), 0);
        assert_eq!(parse_hi_score("-5"), 0);
        assert_eq!(parse_hi_score("NaN"), 0);
        assert_eq!(parse_hi_score("inf"), 0);
    }

    #[test]
    fn test_load_missing_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(load_hi_score(&store), 0);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        save_hi_score(&mut store, 7300).unwrap();
        assert_eq!(store.get(HI_SCORE_KEY).unwrap().as_deref(), Some("7300"));
        assert_eq!(load_hi_score(&store), 7300);
    }

    #[test]
    fn test_load_garbage_is_zero() {
        let mut store = MemoryStore::new();
        store.set(HI_SCORE_KEY, "not a number").unwrap();
        assert_eq!(load_hi_score(&store), 0);
    }
}
