//! End-to-end runs over small, hand-checked vocabularies

use lexiglyph::config::EngineConfig;
use lexiglyph::confusion::ConfusionKind;
use lexiglyph::pipeline::{Pipeline, PipelineError};
use lexiglyph::wordlists::Blocklist;
use pretty_assertions::assert_eq;

fn config(tier_count: usize) -> EngineConfig {
    EngineConfig {
        tier_count,
        ..EngineConfig::default()
    }
}

#[test]
fn anagram_and_edit_neighbours() {
    let output = Pipeline::new(config(2))
        .run(["cat", "act", "cats"])
        .unwrap();

    let cat = output.find("cat").unwrap();
    let act = output.find("act").unwrap();
    let cats = output.find("cats").unwrap();

    let anagram = cat.confused_with.iter().find(|c| c.word == "act").unwrap();
    assert_eq!(anagram.kind, ConfusionKind::Anagram);
    assert!((anagram.strength - 1.0).abs() < f64::EPSILON);

    let edit = cat.confused_with.iter().find(|c| c.word == "cats").unwrap();
    assert_eq!(edit.kind, ConfusionKind::SingleEdit);
    assert!((edit.strength - 0.5).abs() < f64::EPSILON);

    assert_eq!(cat.tier.value(), 1);
    assert_eq!(act.tier.value(), 1);
    assert_eq!(cats.tier.value(), 2);
}

#[test]
fn blocklisted_word_is_dropped() {
    let blocklist = Blocklist::from_words(["bad"]);
    let output = Pipeline::new(config(1))
        .with_filter(&blocklist)
        .run(["bad", "word"])
        .unwrap();

    let words: Vec<&str> = output.words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["word"]);
    assert_eq!(output.diagnostics.filtered, 1);
}

#[test]
fn junk_only_input_fails_with_empty_vocabulary() {
    for tokens in [vec![""], vec!["123"], vec!["", "123"]] {
        let err = Pipeline::new(config(1)).run(&tokens).unwrap_err();
        assert!(
            matches!(err, PipelineError::EmptyVocabulary { .. }),
            "{tokens:?}: {err}"
        );
    }
}

#[test]
fn blocking_everything_fails_with_empty_vocabulary() {
    let blocklist = Blocklist::from_words(["only"]);
    let err = Pipeline::new(config(1))
        .with_filter(&blocklist)
        .run(["only", "ONLY!"])
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::EmptyVocabulary {
            skipped: 0,
            filtered: 1
        }
    ));
}

#[test]
fn anagram_pair_outranks_unrelated_words_of_same_length() {
    let output = Pipeline::new(config(2))
        .run(["listen", "silent", "rotate", "ration"])
        .unwrap();

    let listen = output.find("listen").unwrap();
    let silent = output.find("silent").unwrap();
    let rotate = output.find("rotate").unwrap();
    let ration = output.find("ration").unwrap();

    assert_eq!(listen.confused_with.len(), 1);
    assert_eq!(listen.confused_with[0].word, "silent");
    assert_eq!(listen.confused_with[0].kind, ConfusionKind::Anagram);
    assert!(rotate.confused_with.is_empty());

    assert!(listen.tier > rotate.tier);
    assert!(silent.tier > ration.tier);
}

#[test]
fn single_tier_holds_everything() {
    let output = Pipeline::new(config(1))
        .run(["alpha", "beta", "gamma", "delta", "epsilon"])
        .unwrap();
    assert!(output.words.iter().all(|w| w.tier.value() == 1));
}

#[test]
fn tier_count_above_vocabulary_is_rejected() {
    let err = Pipeline::new(config(4))
        .run(["one", "two", "three"])
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::TierCountExceedsVocabulary {
            tier_count: 4,
            vocabulary: 3
        }
    ));
}

#[test]
fn duplicates_collapse_to_one_entry() {
    let output = Pipeline::new(config(1))
        .run(["Stone", "stone", "STONE!", "notes"])
        .unwrap();

    assert_eq!(output.words.len(), 2);
    assert_eq!(output.diagnostics.tokens_read, 4);
    assert_eq!(output.words[0].spellings, vec!["STONE!", "Stone", "stone"]);
}

#[test]
fn length_bounds_skip_and_count() {
    let bounded = EngineConfig {
        min_length: 3,
        max_length: Some(5),
        ..config(1)
    };
    let output = Pipeline::new(bounded)
        .run(["at", "cat", "castle", "coast"])
        .unwrap();

    let words: Vec<&str> = output.words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["cat", "coast"]);
    assert_eq!(output.diagnostics.skipped, 2);
}
