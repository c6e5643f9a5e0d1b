//! JSON rendering of a finished run
//!
//! Two layouts:
//!
//! - `words`: one object per word, keyed by word, in first-seen order
//! - `tiers`: one array per tier, keyed by tier label, easiest first
//!
//! Floats are rounded to four decimals. Key order is fixed by the run, not
//! by a hash map, so identical runs serialize to identical bytes.

use crate::confusion::ConfusionKind;
use crate::pipeline::{Confusable, PipelineOutput, ProjectedWord};
use crate::tiers::{Tier, tier_label};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::io::Write;

const DECIMALS: i32 = 4;

/// Shape of the output document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Layout {
    /// Word to entry map
    #[default]
    Words,
    /// Tier label to word list
    Tiers,
}

fn rounded(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    (value * scale).round() / scale
}

#[derive(Serialize)]
struct ConfusableView<'a> {
    word: &'a str,
    kind: ConfusionKind,
    strength: f64,
}

impl<'a> From<&'a Confusable> for ConfusableView<'a> {
    fn from(c: &'a Confusable) -> Self {
        Self {
            word: &c.word,
            kind: c.kind,
            strength: rounded(c.strength),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryView<'a> {
    tier: Tier,
    score: f64,
    adjusted_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    spellings: Option<&'a [String]>,
    confused_with: Vec<ConfusableView<'a>>,
}

impl<'a> From<&'a ProjectedWord> for EntryView<'a> {
    fn from(p: &'a ProjectedWord) -> Self {
        // only worth listing when the input spelled the word some other way
        let plain = p.spellings.len() == 1 && p.spellings[0] == p.word;
        Self {
            tier: p.tier,
            score: rounded(p.score),
            adjusted_score: rounded(p.adjusted_score),
            spellings: (!plain).then_some(p.spellings.as_slice()),
            confused_with: p.confused_with.iter().map(ConfusableView::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TierMember<'a> {
    word: &'a str,
    score: f64,
    adjusted_score: f64,
}

struct ByWord<'a>(&'a [ProjectedWord]);

impl Serialize for ByWord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.word, &EntryView::from(entry))?;
        }
        map.end()
    }
}

struct ByTier<'a> {
    words: &'a [ProjectedWord],
    tier_count: usize,
}

impl Serialize for ByTier<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut groups: Vec<Vec<TierMember<'_>>> = (0..self.tier_count).map(|_| Vec::new()).collect();
        for entry in self.words {
            if let Some(group) = groups.get_mut(entry.tier.index()) {
                group.push(TierMember {
                    word: &entry.word,
                    score: rounded(entry.score),
                    adjusted_score: rounded(entry.adjusted_score),
                });
            }
        }

        let mut map = serializer.serialize_map(Some(self.tier_count))?;
        for (index, members) in groups.iter().enumerate() {
            if let Some(tier) = Tier::from_index(index) {
                map.serialize_entry(&tier_label(tier, self.tier_count), members)?;
            }
        }
        map.end()
    }
}

/// Write the run as pretty-printed JSON
///
/// # Errors
/// Returns a `serde_json::Error` if writing fails.
pub fn write_json<W: Write>(
    writer: W,
    output: &PipelineOutput,
    layout: Layout,
) -> serde_json::Result<()> {
    match layout {
        Layout::Words => serde_json::to_writer_pretty(writer, &ByWord(&output.words)),
        Layout::Tiers => serde_json::to_writer_pretty(
            writer,
            &ByTier {
                words: &output.words,
                tier_count: output.tier_count(),
            },
        ),
    }
}

/// Render the run as a JSON string
///
/// # Errors
/// Returns a `serde_json::Error` if serialization fails.
pub fn to_json(output: &PipelineOutput, layout: Layout) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    write_json(&mut buffer, output, layout)?;
    String::from_utf8(buffer).map_err(|e| serde::ser::Error::custom(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::pipeline::Pipeline;
    use serde_json::Value;

    fn build(tokens: &[&str], tier_count: usize) -> PipelineOutput {
        let config = EngineConfig {
            tier_count,
            ..EngineConfig::default()
        };
        Pipeline::new(config).run(tokens).unwrap()
    }

    #[test]
    fn words_layout_keeps_first_seen_order() {
        let output = build(&["zebra", "Apple", "cat", "act"], 2);
        let json = to_json(&output, Layout::Words).unwrap();

        let zebra = json.find("\"zebra\"").unwrap();
        let apple = json.find("\"apple\"").unwrap();
        let cat = json.find("\"cat\"").unwrap();
        assert!(zebra < apple && apple < cat);
    }

    #[test]
    fn words_layout_entry_shape() {
        let output = build(&["cat", "act", "cats"], 2);
        let value: Value = serde_json::from_str(&to_json(&output, Layout::Words).unwrap()).unwrap();

        let cat = &value["cat"];
        assert_eq!(cat["tier"], 1);
        assert_eq!(cat["score"], 10.5);
        assert_eq!(cat["adjustedScore"], 11.25);
        assert_eq!(cat["confusedWith"][0]["word"], "act");
        assert_eq!(cat["confusedWith"][0]["kind"], "anagram");
        assert_eq!(cat["confusedWith"][0]["strength"], 1.0);
        assert_eq!(cat["confusedWith"][1]["kind"], "single_edit");
        assert!(cat.get("spellings").is_none());
        assert_eq!(value["cats"]["tier"], 2);
    }

    #[test]
    fn alternate_spellings_are_listed() {
        let output = build(&["Cat", "dog"], 1);
        let value: Value = serde_json::from_str(&to_json(&output, Layout::Words).unwrap()).unwrap();
        assert_eq!(value["cat"]["spellings"][0], "Cat");
    }

    #[test]
    fn tiers_layout_groups_by_label() {
        let output = build(&["a", "bb", "cccc", "dddddd", "eeeeeeee", "ffffffffff"], 3);
        let value: Value = serde_json::from_str(&to_json(&output, Layout::Tiers).unwrap()).unwrap();

        let labels: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(labels.len(), 3);
        for label in ["Easy", "Medium", "Hard"] {
            assert_eq!(value[label].as_array().unwrap().len(), 2);
        }
        assert_eq!(value["Easy"][0]["word"], "a");
    }

    #[test]
    fn score_keys_mean_the_same_in_both_layouts() {
        let output = build(&["cat", "act", "cats"], 2);
        let words: Value = serde_json::from_str(&to_json(&output, Layout::Words).unwrap()).unwrap();
        let tiers: Value = serde_json::from_str(&to_json(&output, Layout::Tiers).unwrap()).unwrap();

        let easy = tiers["Tier 1"].as_array().unwrap();
        let cat = easy.iter().find(|m| m["word"] == "cat").unwrap();
        assert_eq!(cat["score"], words["cat"]["score"]);
        assert_eq!(cat["adjustedScore"], words["cat"]["adjustedScore"]);
        assert_eq!(cat["score"], 10.5);
    }

    #[test]
    fn identical_runs_serialize_identically() {
        let tokens = ["stone", "notes", "tones", "stoner", "phone", "fone", "xylem"];
        let first = to_json(&build(&tokens, 3), Layout::Words).unwrap();
        let second = to_json(&build(&tokens, 3), Layout::Words).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rounding() {
        assert!((rounded(1.234_56) - 1.2346).abs() < 1e-12);
        assert!((rounded(2.0) - 2.0).abs() < f64::EPSILON);
    }
}
