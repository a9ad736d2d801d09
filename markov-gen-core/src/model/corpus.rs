use std::collections::HashMap;

use log::{debug, trace};
use serde::Serialize;

use crate::error::Result;

use super::config::Config;
use super::token::{Key, Token};

/// Word-level Markov corpus with a context of `N` words.
///
/// The `Corpus` maps every observed key (the `N` tokens preceding a position)
/// to the list of tokens seen right after it in the training text.
///
/// # Responsibilities
/// - Split raw text into sentences with a simple terminator scan
/// - Record every sliding window of each sentence as a transition
/// - Answer read-only lookups for the generator
///
/// # Invariants
/// - Continuation lists only grow, in insertion order, duplicates kept
///   (a duplicate is what makes a continuation more likely)
/// - `Token::Begin` is never stored as a continuation
#[derive(Clone, Debug)]
pub struct Corpus<const N: usize = 2> {
	/// Segmentation parameters
	config: Config,

	/// Mapping from a key to the tokens observed after it
	transitions: HashMap<Key<N>, Vec<Token>>,
}

/// Serializable view of one corpus entry, used for dumps.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CorpusEntry {
	pub key: Vec<String>,
	pub continuations: Vec<String>,
}

impl<const N: usize> Corpus<N> {
	/// Creates an empty corpus.
	pub fn new(config: &Config) -> Self {
		const { assert!(N >= 1, "the context must hold at least one word") };
		Self { config: config.clone(), transitions: HashMap::new() }
	}

	/// Creates a corpus and trains it on `text`.
	pub fn from_text(text: &str, config: &Config) -> Self {
		let mut corpus = Self::new(config);
		corpus.add_from_string(text);
		corpus
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Adds a string that may contain any number of sentences.
	///
	/// A sentence is a run of characters ending at a terminator and starting
	/// right after the previous one (or at the start of `text`). Runs whose
	/// length, terminator excluded, is not above `min_threshold` are dropped.
	/// Text after the last terminator is ignored.
	///
	/// Returns the number of sentences learned.
	pub fn add_from_string(&mut self, text: &str) -> usize {
		let mut learned = 0;
		let mut start = 0;
		let mut run_len = 0;

		for (index, c) in text.char_indices() {
			if !self.config.is_terminator(c) {
				run_len += 1;
				continue;
			}
			let end = index + c.len_utf8();
			if run_len > self.config.min_threshold {
				self.add_sentence(&text[start..end]);
				learned += 1;
			} else {
				trace!("skipping short run {:?}", &text[start..end]);
			}
			start = end;
			run_len = 0;
		}

		debug!("learned {} sentences, corpus now holds {} keys", learned, self.transitions.len());
		learned
	}

	/// Adds a single sentence.
	///
	/// The sentence is split on whitespace, framed by `N` `Begin` tokens and
	/// one `End` token, and each window of `N` tokens is recorded together with
	/// the token that follows it. A framed sequence of `k` tokens therefore
	/// yields `k - N` transitions.
	pub fn add_sentence(&mut self, sentence: &str) {
		let framed: Vec<Token> = std::iter::repeat_n(Token::Begin, N)
			.chain(sentence.split_whitespace().map(Token::from))
			.chain(std::iter::once(Token::End))
			.collect();

		for window in framed.windows(N + 1) {
			let key = Key::<N>::from(std::array::from_fn::<Token, N, _>(|i| window[i].clone()));
			self.transitions.entry(key).or_default().push(window[N].clone());
		}
	}

	/// Returns the continuations observed after `key`, if any.
	pub fn continuations(&self, key: &Key<N>) -> Option<&[Token]> {
		self.transitions.get(key).map(Vec::as_slice)
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Total number of recorded transitions, duplicates included.
	pub fn transition_count(&self) -> usize {
		self.transitions.values().map(Vec::len).sum()
	}

	/// Snapshot of the whole table, sorted by key.
	pub fn entries(&self) -> Vec<CorpusEntry> {
		let mut keys: Vec<&Key<N>> = self.transitions.keys().collect();
		keys.sort();
		keys.into_iter()
			.map(|key| CorpusEntry {
				key: key.tokens().iter().map(Token::to_string).collect(),
				continuations: self.transitions[key].iter().map(Token::to_string).collect(),
			})
			.collect()
	}

	/// Renders [`Corpus::entries`] as pretty-printed JSON.
	///
	/// # Errors
	/// Returns an error if serialization fails.
	pub fn dump(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(&self.entries())?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::token::BEGIN_STRING;

	fn words(list: &[&str]) -> Vec<Token> {
		list.iter().map(|w| Token::from(*w)).collect()
	}

	#[test]
	fn sentence_windows() {
		let mut corpus = Corpus::<2>::new(&Config::default());
		corpus.add_sentence("the cat sat.");

		// [B] [B] the cat sat. [E] -> 6 tokens, 4 transitions
		assert_eq!(corpus.transition_count(), 4);
		assert_eq!(corpus.continuations(&Key::begin()), Some(&words(&["the"])[..]));
		assert_eq!(
			corpus.continuations(&Key::from([Token::Begin, Token::from("the")])),
			Some(&words(&["cat"])[..])
		);
		assert_eq!(corpus.continuations(&Key::from(["the", "cat"])), Some(&words(&["sat."])[..]));
		assert_eq!(corpus.continuations(&Key::from(["cat", "sat."])), Some(&[Token::End][..]));
		assert_eq!(corpus.continuations(&Key::from(["sat.", "the"])), None);
	}

	#[test]
	fn begin_is_never_a_continuation() {
		let corpus = Corpus::<3>::from_text("One two three four five six. Seven eight nine ten!", &Config::default());
		assert!(corpus
			.entries()
			.iter()
			.all(|entry| entry.continuations.iter().all(|c| c != BEGIN_STRING)));
	}

	#[test]
	fn duplicates_are_kept_in_order() {
		let mut corpus = Corpus::<1>::new(&Config::default());
		corpus.add_sentence("a b a c a b");
		assert_eq!(corpus.continuations(&Key::from(["a"])), Some(&words(&["b", "c", "b"])[..]));
	}

	#[test]
	fn short_runs_are_skipped() {
		let mut corpus = Corpus::<2>::new(&Config::default());
		assert_eq!(corpus.add_from_string("Hi. This is a longer sentence here."), 1);
		assert_eq!(corpus.continuations(&Key::begin()), Some(&words(&["This"])[..]));
	}

	#[test]
	fn threshold_is_exclusive() {
		let mut corpus = Corpus::<2>::new(&Config::default());
		// ten characters before the terminator: dropped
		assert_eq!(corpus.add_from_string("abcde fghi."), 0);
		// eleven: learned
		assert_eq!(corpus.add_from_string("abcde fghij."), 1);
	}

	#[test]
	fn trailing_text_without_terminator_is_ignored() {
		let mut corpus = Corpus::<2>::new(&Config::default());
		assert_eq!(corpus.add_from_string("no terminator anywhere in here"), 0);
		assert!(corpus.is_empty());
	}

	#[test]
	fn custom_terminators() {
		let mut config = Config::default();
		config.set_terminators(";").unwrap();
		let corpus = Corpus::<2>::from_text("first clause here; second clause there.", &config);
		assert_eq!(corpus.continuations(&Key::from(["clause", "here;"])), Some(&[Token::End][..]));
		assert_eq!(corpus.continuations(&Key::begin()), Some(&words(&["first"])[..]));
	}

	#[test]
	fn multibyte_lengths_count_chars() {
		// nine characters but more than ten bytes: dropped
		let corpus = Corpus::<2>::from_text("déjà vu é.", &Config::default());
		assert!(corpus.is_empty());
		let corpus = Corpus::<2>::from_text("déjà vu éé à.", &Config::default());
		assert_eq!(corpus.len(), 5);
	}

	#[test]
	fn entries_are_sorted_and_rendered() {
		let mut corpus = Corpus::<1>::new(&Config::default());
		corpus.add_sentence("b a");
		let entries = corpus.entries();
		assert_eq!(
			entries,
			vec![
				CorpusEntry { key: vec!["[B]".into()], continuations: vec!["b".into()] },
				CorpusEntry { key: vec!["a".into()], continuations: vec!["[E]".into()] },
				CorpusEntry { key: vec!["b".into()], continuations: vec!["a".into()] },
			]
		);
	}

	#[test]
	fn dump_is_json_of_entries() {
		let mut corpus = Corpus::<1>::new(&Config::default());
		corpus.add_sentence("b a");
		let dump: serde_json::Value = serde_json::from_str(&corpus.dump().unwrap()).unwrap();
		assert_eq!(
			dump,
			serde_json::json!([
				{ "key": ["[B]"], "continuations": ["b"] },
				{ "key": ["a"], "continuations": ["[E]"] },
				{ "key": ["b"], "continuations": ["a"] },
			])
		);
	}
}
