use log::{debug, trace};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;

use super::corpus::Corpus;
use super::token::{Key, Token};

/// Random walk over a trained [`Corpus`].
///
/// # Responsibilities
/// - Generate single sentences bounded by a character budget
/// - Generate multi-sentence output bounded by the same budget
/// - Own the random source, so tests can inject a deterministic one
///
/// The corpus is only borrowed: several generators may share it.
#[derive(Debug)]
pub struct Generator<'a, const N: usize = 2, R: Rng = ThreadRng> {
	corpus: &'a Corpus<N>,
	rng: R,
	try_limit: usize,
}

impl<'a, const N: usize> Generator<'a, N> {
	/// Creates a generator drawing from the thread-local random source.
	pub fn new(corpus: &'a Corpus<N>) -> Self {
		Self::with_rng(corpus, rand::rng())
	}
}

impl<'a, const N: usize, R: Rng> Generator<'a, N, R> {
	/// Creates a generator drawing from `rng`.
	///
	/// The retry limit is taken from the corpus configuration.
	pub fn with_rng(corpus: &'a Corpus<N>, rng: R) -> Self {
		Self { corpus, rng, try_limit: corpus.config().try_limit }
	}

	/// Generates one sentence of fewer than `max_chars` characters.
	///
	/// # Behavior
	/// - Starts from the key made of `N` `Begin` tokens.
	/// - Repeatedly samples a continuation of the last `N` tokens, uniformly
	///   over the stored list (so duplicates weigh more).
	/// - Stops on an unknown key, on `End`, or when a candidate is rejected
	///   for being too long after `try_limit` resamples at the same position;
	///   the words accepted so far are kept.
	///
	/// # Returns
	/// Accepted words separated by single spaces, possibly empty.
	pub fn yield_sentence(&mut self, max_chars: usize) -> String {
		let mut out: Vec<Token> = Key::<N>::begin().tokens().to_vec();
		let mut size = 0;
		let mut tries = 0;

		loop {
			// `out` always holds at least N tokens
			let Some(key) = Key::<N>::from_tail(&out) else { break };

			let Some(list) = self.corpus.continuations(&key) else {
				trace!("dead end after {key}");
				break;
			};

			let word = match list.choose(&mut self.rng) {
				Some(Token::Word(word)) => word,
				_ => break,
			};

			let word_len = word.chars().count();
			if size + word_len >= max_chars {
				tries += 1;
				if tries <= self.try_limit {
					trace!("{word:?} does not fit in {max_chars} chars, retry {tries}");
					continue;
				}
				break;
			}

			tries = 0;
			size += word_len + 1;
			out.push(Token::Word(word.clone()));
		}

		join(out[N..].iter().filter_map(Token::as_word))
	}

	/// Generates one or more sentences totalling fewer than `max_chars` characters.
	///
	/// Each sentence is generated with the full `max_chars` budget and then
	/// rejected if it is empty or no longer fits next to the accepted ones.
	/// Generation stops when the budget is used up or at the `try_limit`-th
	/// consecutive rejection.
	pub fn yield_output(&mut self, max_chars: usize) -> String {
		let mut out: Vec<String> = Vec::new();
		let mut size = 0;
		let mut tries = 0;

		while size <= max_chars {
			let sentence = self.yield_sentence(max_chars);
			let sentence_len = sentence.chars().count();

			if sentence.is_empty() || size + sentence_len >= max_chars {
				tries += 1;
				if tries < self.try_limit {
					continue;
				}
				break;
			}

			tries = 0;
			size += sentence_len + 1;
			out.push(sentence);
		}

		debug!("generated {} sentences ({} chars)", out.len(), size.saturating_sub(1));
		join(out.iter().map(String::as_str))
	}

	/// Generates output with the configured default budget.
	pub fn generate(&mut self) -> String {
		let max_chars = self.corpus.config().max_chars();
		self.yield_output(max_chars)
	}
}

/// Joins words with single spaces.
fn join<'w>(words: impl Iterator<Item = &'w str>) -> String {
	let mut output = String::new();
	for word in words {
		if !output.is_empty() {
			output.push(' ');
		}
		output.push_str(word);
	}
	output
}
