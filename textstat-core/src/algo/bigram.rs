use indexmap::IndexMap;

use serde::{Deserialize, Serialize};


/// Frequency table over adjacent character pairs of a single string.
///
/// A `BigramModel` counts every pair `(text[i], text[i+1])` observed while
/// scanning its input once. Entries keep the order in which each pair was
/// first seen, which is what makes prediction ties deterministic.
///
/// ## Responsibilities:
/// - Accumulate pair occurrences during the scan
/// - Predict the most frequent successor of a given character
///
/// ## Invariants
/// - Every stored count is strictly positive
/// - Iteration order is first-occurrence order of each pair
/// - The sum of all counts equals `char_count - 1` for inputs with at
///   least two characters, and 0 otherwise
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BigramModel {
	/// Pair occurrence counts, keyed by `(first, second)`.
	/// Example: { ('h', 'e') => 3, ('e', 'l') => 3 }
	#[serde(with = "indexmap::map::serde_seq")]
	pairs: IndexMap<(char, char), u32>,
}

impl BigramModel {
	/// Builds the pair table by scanning `text` once.
	///
	/// A string with fewer than two characters produces an empty table.
	pub fn from_text(text: &str) -> Self {
		let mut model = Self { pairs: IndexMap::new() };

		let mut chars = text.chars();
		let Some(mut prev) = chars.next() else {
			return model;
		};
		for next in chars {
			model.add_pair(prev, next);
			prev = next;
		}

		model
	}

	/// Records one occurrence of the pair `(first, second)`.
	fn add_pair(&mut self, first: char, second: char) {
		*self.pairs.entry((first, second)).or_insert(0) += 1;
	}

	/// Returns how many times the pair `(first, second)` was observed.
	///
	/// Unseen pairs report 0.
	pub fn pair_count(&self, first: char, second: char) -> u32 {
		self.pairs.get(&(first, second)).copied().unwrap_or(0)
	}

	/// Returns the number of distinct pairs in the table.
	pub fn pair_num(&self) -> usize {
		self.pairs.len()
	}

	/// Returns the total number of pair occurrences.
	pub fn pair_total(&self) -> u64 {
		self.pairs.values().map(|&count| count as u64).sum()
	}

	/// Predicts the character most likely to follow `last`.
	///
	/// Walks the table in first-occurrence order and keeps the successor
	/// with the highest count. The comparison is strictly greater, so a
	/// later candidate with an equal count never displaces the current
	/// winner.
	///
	/// Returns `None` if no observed pair starts with `last`.
	pub fn predict_after(&self, last: char) -> Option<char> {
		let mut next_char: Option<char> = None;
		let mut max_count = 0;

		for (&(first, second), &count) in &self.pairs {
			if first == last && count > max_count {
				max_count = count;
				next_char = Some(second);
			}
		}

		next_char
	}
}

/// Predicts the most likely character to follow the last character of `text`.
///
/// Builds a fresh `BigramModel` over `text`, then looks for the
/// highest-frequency pair starting with the final character.
///
/// Returns `None` when the input is empty (no last character) or when no
/// pair in the input starts with the last character. Never panics, and is
/// deterministic across repeated calls.
pub fn predict_next(text: &str) -> Option<char> {
	let last = text.chars().last()?;
	BigramModel::from_text(text).predict_after(last)
}
