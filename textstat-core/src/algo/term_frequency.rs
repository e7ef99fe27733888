use indexmap::IndexMap;

use serde::{Deserialize, Serialize};


/// Occurrence counter for the terms of a single document.
///
/// A `TermFrequency` accumulates how many times each term appears and the
/// total number of terms seen, and derives from those the term-frequency
/// vector: the probability distribution over the document's vocabulary.
///
/// Entries keep first-occurrence order, so derived vectors iterate in the
/// order terms appeared in the document.
///
/// ## Responsibilities:
/// - Accumulate term occurrences
/// - Report per-term and total counts
/// - Derive the count / total probability distribution
///
/// ## Invariants
/// - Every stored count is strictly positive
/// - `total_terms` equals the sum of all stored counts
/// - `distribution` values sum to 1.0 whenever any term was added
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TermFrequency {
	/// Term occurrence counts, in first-occurrence order.
	#[serde(with = "indexmap::map::serde_seq")]
	counts: IndexMap<String, u32>,

	/// Total number of terms added, duplicates included.
	total: u64,
}

impl TermFrequency {
	/// Creates an empty counter.
	pub fn new() -> Self {
		Self { counts: IndexMap::new(), total: 0 }
	}

	/// Builds a counter from a slice of terms.
	pub fn from_terms<T: AsRef<str>>(terms: &[T]) -> Self {
		let mut freq = Self::new();
		for term in terms {
			freq.add_term(term.as_ref());
		}
		freq
	}

	/// Records one occurrence of `term`.
	pub fn add_term(&mut self, term: &str) {
		*self.counts.entry(term.to_owned()).or_insert(0) += 1;
		self.total += 1;
	}

	/// Returns how many times `term` was added.
	///
	/// Unseen terms report 0.
	pub fn term_count(&self, term: &str) -> u32 {
		self.counts.get(term).copied().unwrap_or(0)
	}

	/// Returns the total number of terms added, duplicates included.
	pub fn total_terms(&self) -> u64 {
		self.total
	}

	/// Returns the number of distinct terms.
	pub fn term_num(&self) -> usize {
		self.counts.len()
	}

	/// Returns the distinct terms in first-occurrence order.
	pub fn terms(&self) -> impl Iterator<Item = &str> {
		self.counts.keys().map(|term| term.as_str())
	}

	/// Returns the relative frequency of each term.
	///
	/// Each count is divided by the total term count, yielding a
	/// probability distribution over the document's vocabulary. Returns an
	/// empty map when nothing was added.
	pub fn distribution(&self) -> IndexMap<String, f64> {
		self.counts
			.iter()
			.map(|(term, &count)| (term.clone(), count as f64 / self.total as f64))
			.collect()
	}
}
