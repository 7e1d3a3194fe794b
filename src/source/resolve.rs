/// Hint resolution: pick the config key that holds the connection string.
///
/// Resolution strategy (in priority order):
///
/// 1. **Exact key**: the hint is a key verbatim.
/// 2. **Substring**: keys containing the hint, case-insensitive. Succeeds only
///    if exactly one key matches.
/// 3. **Fuzzy match**: auto-resolve if the top score is well ahead of the second.
/// 4. **Ambiguity error**: several keys match with similar confidence.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

use super::errors::SourceError;

/// Minimum score ratio between 1st and 2nd result to auto-resolve fuzzy match.
const FUZZY_AUTO_RESOLVE_RATIO: f32 = 2.0;

/// Maximum candidates listed in an ambiguity error.
const MAX_CANDIDATES: usize = 5;

/// Resolve `hint` to one of `keys`.
///
/// # Errors
///
/// - `SourceError::KeyNotFound` — nothing matches
/// - `SourceError::AmbiguousKey` — several keys match with similar confidence
pub fn resolve_key<'a>(keys: &'a [String], hint: &str) -> Result<&'a str, SourceError> {
    if let Some(exact) = keys.iter().find(|k| *k == hint) {
        return Ok(exact.as_str());
    }

    let needle = hint.to_lowercase();
    let contains: Vec<&String> = keys
        .iter()
        .filter(|k| k.to_lowercase().contains(&needle))
        .collect();

    match contains.as_slice() {
        [only] => return Ok(only.as_str()),
        [_, _, ..] => {
            return Err(SourceError::AmbiguousKey {
                hint: hint.to_owned(),
                candidates: contains.iter().map(|k| (*k).clone()).collect(),
            });
        }
        [] => {}
    }

    resolve_fuzzy(keys, hint)
}

fn resolve_fuzzy<'a>(keys: &'a [String], hint: &str) -> Result<&'a str, SourceError> {
    let pattern = Pattern::parse(hint, CaseMatching::Smart, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut scored: Vec<(&str, u32)> = keys
        .iter()
        .filter_map(|key| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(key, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|s| (key.as_str(), s))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));

    match scored.as_slice() {
        [] => Err(SourceError::KeyNotFound {
            hint: hint.to_owned(),
        }),
        [(key, _)] => Ok(*key),
        [(best_key, best_score), (_, second_score), ..] => {
            #[allow(clippy::cast_precision_loss)]
            let ratio = *best_score as f32 / (*second_score as f32).max(1.0);
            if ratio >= FUZZY_AUTO_RESOLVE_RATIO {
                Ok(*best_key)
            } else {
                Err(SourceError::AmbiguousKey {
                    hint: hint.to_owned(),
                    candidates: scored
                        .iter()
                        .take(MAX_CANDIDATES)
                        .map(|(k, _)| (*k).to_owned())
                        .collect(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Vec<String> {
        [
            "DATABASE_URL",
            "HEROKU_POSTGRESQL_NAVY_URL",
            "HEROKU_POSTGRESQL_OLIVE_URL",
            "REDIS_URL",
        ]
        .iter()
        .map(|s| (*s).to_owned())
        .collect()
    }

    #[test]
    fn test_exact_key() {
        let k = keys();
        assert_eq!(resolve_key(&k, "DATABASE_URL").unwrap(), "DATABASE_URL");
    }

    #[test]
    fn test_unique_substring() {
        let k = keys();
        assert_eq!(
            resolve_key(&k, "HEROKU_POSTGRESQL_NAVY").unwrap(),
            "HEROKU_POSTGRESQL_NAVY_URL"
        );
        assert_eq!(resolve_key(&k, "olive").unwrap(), "HEROKU_POSTGRESQL_OLIVE_URL");
    }

    #[test]
    fn test_ambiguous_substring() {
        let k = keys();
        match resolve_key(&k, "HEROKU_POSTGRESQL_") {
            Err(SourceError::AmbiguousKey { candidates, .. }) => {
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn test_fuzzy_single_match() {
        let k = vec!["DATABASE_URL".to_owned(), "REDIS_URL".to_owned()];
        assert_eq!(resolve_key(&k, "dburl").unwrap(), "DATABASE_URL");
    }

    #[test]
    fn test_not_found() {
        let k = keys();
        assert!(matches!(
            resolve_key(&k, "qqq"),
            Err(SourceError::KeyNotFound { .. })
        ));
        assert!(matches!(
            resolve_key(&[], "DATABASE_URL"),
            Err(SourceError::KeyNotFound { .. })
        ));
    }
}
