use indexmap::IndexMap;

use super::term_frequency::TermFrequency;


/// Splits a document into lowercase comparison units.
///
/// The split is on single ASCII spaces only: consecutive spaces yield
/// empty tokens and no punctuation is stripped. An empty document yields
/// exactly one empty token. This exact behavior is part of the scoring
/// contract, so IDF weights line up with term frequencies.
fn normalize(document: &str) -> Vec<String> {
	document.split(' ').map(|token| token.to_lowercase()).collect()
}

/// Counts, for each word, how many documents contain it at least once.
///
/// Each document contributes at most 1 per word regardless of how often
/// the word repeats inside it, so every count lies in
/// `[1, documents.len()]`. Words are keyed in the order they are first
/// seen across the corpus.
pub fn document_frequency<T: AsRef<str>>(documents: &[T]) -> IndexMap<String, u32> {
	let mut doc_counts: IndexMap<String, u32> = IndexMap::new();

	for document in documents {
		let unique_words = TermFrequency::from_terms(&normalize(document.as_ref()));
		for word in unique_words.terms() {
			*doc_counts.entry(word.to_owned()).or_insert(0) += 1;
		}
	}

	doc_counts
}

/// Computes the corpus-wide informativeness weight of each word.
///
/// `idf[word] = ln(corpus_size / document_frequency[word])`. Document
/// frequencies lie in `[1, corpus_size]`, so the ratio is always >= 1 and
/// the weight always >= 0. The weight is 0 exactly for words appearing in
/// every document. An empty corpus yields an empty table.
pub fn inverse_document_frequency<T: AsRef<str>>(documents: &[T]) -> IndexMap<String, f64> {
	let size = documents.len() as f64;

	document_frequency(documents)
		.into_iter()
		.map(|(word, doc_count)| (word, (size / doc_count as f64).ln()))
		.collect()
}

/// Scores every word of every document against the whole corpus.
///
/// Computes the IDF table once, then for each document multiplies its
/// term-frequency distribution by the corresponding IDF weight. A word
/// missing from the IDF table weighs 0, though every word of every
/// document is present by construction.
///
/// Returns one score map per document, in input order, with one entry per
/// distinct word of that document. An empty corpus returns an empty
/// vector.
pub fn score<T: AsRef<str>>(documents: &[T]) -> Vec<IndexMap<String, f64>> {
	let idf = inverse_document_frequency(documents);
	let mut tfidf = Vec::with_capacity(documents.len());

	for document in documents {
		let tf = TermFrequency::from_terms(&normalize(document.as_ref()));

		let doc_scores: IndexMap<String, f64> = tf
			.distribution()
			.into_iter()
			.map(|(word, tf_value)| {
				let weight = idf.get(&word).copied().unwrap_or(0.0);
				(word, tf_value * weight)
			})
			.collect();

		tfidf.push(doc_scores);
	}

	tfidf
}

#[cfg(test)]
mod tests {
	use super::*;

	const CORPUS: [&str; 3] = ["The cat", "The cat sat on the mat", "My name is Mat"];

	#[test]
	fn normalize_splits_on_single_spaces_and_lowercases() {
		assert_eq!(normalize("The cat"), vec!["the", "cat"]);
		assert_eq!(normalize("a  b"), vec!["a", "", "b"]);
		assert_eq!(normalize(""), vec![""]);
	}

	#[test]
	fn document_frequency_counts_each_document_once() {
		let df = document_frequency(&CORPUS);
		// "the" appears twice in document 2 but still counts once for it.
		assert_eq!(df["the"], 2);
		assert_eq!(df["cat"], 2);
		// "Mat" lowercases into document 3.
		assert_eq!(df["mat"], 2);
		assert_eq!(df["my"], 1);
		assert_eq!(df["sat"], 1);
	}

	#[test]
	fn idf_weights_match_document_frequencies() {
		let idf = inverse_document_frequency(&CORPUS);
		assert!((idf["the"] - (3.0_f64 / 2.0).ln()).abs() < 1e-10);
		assert!((idf["mat"] - (3.0_f64 / 2.0).ln()).abs() < 1e-10);
		// Singleton words weigh ln(corpus size).
		assert!((idf["my"] - 3.0_f64.ln()).abs() < 1e-10);
		assert!((idf["sat"] - 3.0_f64.ln()).abs() < 1e-10);
	}

	#[test]
	fn words_in_every_document_weigh_zero() {
		let idf = inverse_document_frequency(&["a a b"]);
		assert!((idf["a"] - 0.0).abs() < 1e-10);
		assert!((idf["b"] - 0.0).abs() < 1e-10);

		let scores = score(&["a a b"]);
		assert_eq!(scores.len(), 1);
		assert!((scores[0]["a"] - 0.0).abs() < 1e-10);
		assert!((scores[0]["b"] - 0.0).abs() < 1e-10);
	}

	#[test]
	fn term_distribution_sums_to_one_per_document() {
		for document in CORPUS {
			let tf = TermFrequency::from_terms(&normalize(document));
			let sum: f64 = tf.distribution().values().sum();
			assert!((sum - 1.0).abs() < 1e-10);
		}
	}

	#[test]
	fn one_score_map_per_document_in_input_order() {
		let scores = score(&CORPUS);
		assert_eq!(scores.len(), CORPUS.len());
		// Each map covers exactly its document's distinct words.
		let doc2_words: Vec<&str> = scores[1].keys().map(|w| w.as_str()).collect();
		assert_eq!(doc2_words, vec!["the", "cat", "sat", "on", "mat"]);
		assert!(scores[0].contains_key("cat"));
		assert!(!scores[0].contains_key("sat"));
		assert!(scores[2].contains_key("name"));
	}

	#[test]
	fn scores_combine_tf_and_idf() {
		let scores = score(&CORPUS);
		// Document 1: "the" and "cat" each have tf 0.5 and idf ln(3/2).
		let expected = 0.5 * (3.0_f64 / 2.0).ln();
		assert!((scores[0]["the"] - expected).abs() < 1e-10);
		assert!((scores[0]["cat"] - expected).abs() < 1e-10);
		// Document 3: "my" has tf 0.25 and idf ln(3).
		assert!((scores[2]["my"] - 0.25 * 3.0_f64.ln()).abs() < 1e-10);
	}

	#[test]
	fn empty_corpus_yields_empty_output() {
		let documents: [&str; 0] = [];
		assert!(score(&documents).is_empty());
		assert!(inverse_document_frequency(&documents).is_empty());
	}

	#[test]
	fn empty_document_is_one_empty_token() {
		let scores = score(&["", "x"]);
		assert_eq!(scores.len(), 2);
		// The empty string is a word of document 1 only.
		assert!((scores[0][""] - 1.0 * 2.0_f64.ln()).abs() < 1e-10);
		assert!((scores[1]["x"] - 1.0 * 2.0_f64.ln()).abs() < 1e-10);
	}
}
