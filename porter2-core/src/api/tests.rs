//! Tests for the stemmer facade

#[cfg(test)]
mod api_tests {
    use crate::api::*;
    use crate::tables::ExceptionTables;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_stemmer_creation() {
        let stemmer = Stemmer::new();
        assert_eq!(stemmer.config(), &StemmerConfig::default());
        assert_eq!(stemmer.exceptions(), &ExceptionTables::english());

        let config = StemmerConfig::builder().cache_helpers(false).build().unwrap();
        let stemmer = Stemmer::with_config(config);
        assert!(!stemmer.config().cache_helpers());
    }

    #[test]
    fn test_exception_precedence() {
        let stemmer = Stemmer::new();
        assert_eq!(stemmer.stem("skis"), "ski");
        assert_eq!(stemmer.stem("sky"), "sky");
        assert_eq!(stemmer.stem("news"), "news");
        assert_eq!(stemmer.stem("dying"), "die");
        assert_eq!(stemmer.stem("communing"), "commune");

        // Exception hits never reach the stem cache
        assert_eq!(stemmer.cache_stats().stems.entries, 0);
    }

    #[test]
    fn test_post_step_1a_short_circuit() {
        let stemmer = Stemmer::new();
        assert_eq!(stemmer.stem("inning"), "inning");
        assert_eq!(stemmer.stem("outing"), "outing");
        assert_eq!(stemmer.stem("cannings"), "canning");
        assert_eq!(stemmer.stem("succeeding"), "succeed");
    }

    #[test]
    fn test_length_gate() {
        let stemmer = Stemmer::new();
        assert_eq!(stemmer.stem("a"), "a");
        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("by"), "by");
        assert_eq!(stemmer.stem(""), "");
        assert_eq!(stemmer.stem("s'"), "s'");
        assert_eq!(stemmer.stem("''"), "''");
    }

    #[test]
    fn test_possessives() {
        let stemmer = Stemmer::new();
        assert_eq!(stemmer.stem("'s"), "");
        assert_eq!(stemmer.stem("'"), "");
        assert_eq!(stemmer.stem("''s"), "");
        assert_eq!(stemmer.stem("''s'"), "");
        assert_eq!(stemmer.stem("dog's"), "dog");
        assert_eq!(stemmer.stem("dogs'"), "dog");
    }

    #[test]
    fn test_leading_apostrophe() {
        let stemmer = Stemmer::new();
        assert_eq!(stemmer.stem("'tis"), "tis");
        assert_eq!(stemmer.stem("'skis"), "ski");
    }

    #[test]
    fn test_stem_cache() {
        let stemmer = Stemmer::new();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("running"), "run");

        let stats = stemmer.cache_stats();
        assert_eq!(stats.stems.hits, 1);
        assert_eq!(stats.stems.misses, 1);
        assert_eq!(stats.stems.entries, 1);
        assert_eq!(stats.marked_forms.entries, 1);
        assert!(stats.letter_runs.entries > 0);
    }

    #[test]
    fn test_initial_capacity_does_not_bound_cache() {
        let config = StemmerConfig::builder().initial_capacity(2).build().unwrap();
        let stemmer = Stemmer::with_config(config);
        for word in ["running", "jumping", "hopeful", "kisses", "flies"] {
            stemmer.stem(word);
        }
        assert_eq!(stemmer.cache_stats().stems.entries, 5);
    }

    #[test]
    fn test_uncached_matches_cached() {
        let cached = Stemmer::new();
        let uncached = Stemmer::with_config(StemmerConfig::uncached());

        for word in ["generously", "sayings", "knightly", "hopelessly", "kisses"] {
            assert_eq!(cached.stem(word), uncached.stem(word));
        }

        let stats = uncached.cache_stats();
        assert_eq!(stats.stems.entries, 0);
        assert_eq!(stats.letter_runs.entries, 0);
        assert_eq!(stats.marked_forms.entries, 0);
    }

    #[test]
    fn test_custom_exceptions() {
        let tables = ExceptionTables::builder()
            .form("geese", "goose")
            .build()
            .unwrap();
        let stemmer = Stemmer::builder().exceptions(tables).build();

        assert_eq!(stemmer.stem("geese"), "goose");
        // English entries are gone with a custom table
        assert_eq!(stemmer.stem("skis"), "skis");
        assert_eq!(stemmer.stem("sky"), "ski");
        assert_eq!(stemmer.stem("inning"), "in");
    }

    #[test]
    fn test_stemmer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Stemmer>();

        let stemmer = Arc::new(Stemmer::new());
        let handles: Vec<_> = ["flies", "dies", "tied", "cries"]
            .into_iter()
            .map(|word| {
                let stemmer = Arc::clone(&stemmer);
                thread::spawn(move || (0..50).map(|_| stemmer.stem(word)).collect::<Vec<_>>())
            })
            .collect();

        for handle in handles {
            let stems = handle.join().unwrap();
            assert!(stems.windows(2).all(|pair| pair[0] == pair[1]));
        }
        assert_eq!(stemmer.cache_stats().stems.entries, 4);
    }
}
