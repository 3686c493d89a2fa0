use agent::{CandidateSet, Lexicon, LetterSupply};
use letters::{LetterCounts, LetterTable};
use serde::Deserialize;
use std::fs;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct TestVector {
    name: String,
    frequency: LetterCounts,
    raw: Vec<String>,
    legal: Vec<String>,
}

#[test]
fn run_legal_lexicon_vectors() {
    let yaml_content = fs::read_to_string("../../tests/lexicon/legal_lexicon.yaml")
        .expect("Failed to read test vectors");
    let vectors: Vec<TestVector> =
        serde_yaml::from_str(&yaml_content).expect("Failed to parse test vectors");
    assert!(!vectors.is_empty());

    for vector in vectors {
        let table = LetterTable::with_frequency(vector.frequency);
        let lexicon = Arc::new(Lexicon::build(&vector.raw, &table));
        let words: Vec<&str> = lexicon.words().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(words, vector.legal, "{}", vector.name);

        // With a full supply nothing in the lexicon is ruled out.
        let mut candidates = CandidateSet::new(Arc::clone(&lexicon));
        assert_eq!(candidates.refine(&LetterSupply::new(&table)), 0, "{}", vector.name);
    }
}
