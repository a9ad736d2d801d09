use std::fmt;

/// Rendering of the `Begin` sentinel in dumps and logs.
pub const BEGIN_STRING: &str = "[B]";

/// Rendering of the `End` sentinel in dumps and logs.
pub const END_STRING: &str = "[E]";

/// A single element of a training or generated sequence.
///
/// Sentence boundaries are enum variants rather than reserved strings, so they
/// can never collide with a real word of the training text.
///
/// ## Invariants
/// - `Begin` only ever appears inside keys, never as a continuation
/// - `Word` never contains whitespace (it comes from a whitespace split)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
	/// Synthetic start of a sentence, repeated `N` times at its head.
	Begin,
	/// A whitespace-delimited word, punctuation included.
	Word(String),
	/// Synthetic end of a sentence, appended once at its tail.
	End,
}

impl Token {
	/// Returns the word carried by this token, if it is not a sentinel.
	pub fn as_word(&self) -> Option<&str> {
		match self {
			Token::Word(word) => Some(word),
			_ => None,
		}
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Token::Begin => f.write_str(BEGIN_STRING),
			Token::Word(word) => f.write_str(word),
			Token::End => f.write_str(END_STRING),
		}
	}
}

impl From<&str> for Token {
	fn from(word: &str) -> Self {
		Token::Word(word.to_owned())
	}
}

/// The `N` tokens immediately preceding a generation point.
///
/// Compared and hashed element by element. The length is part of the type,
/// so a key of the wrong size cannot be built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key<const N: usize>([Token; N]);

impl<const N: usize> Key<N> {
	/// Key made of `N` `Begin` sentinels, the starting point of every sentence.
	pub fn begin() -> Self {
		Self(std::array::from_fn(|_| Token::Begin))
	}

	/// Builds the key from the `N` tokens of `tokens` starting at `offset`.
	///
	/// Returns `None` if fewer than `N` tokens remain after `offset`.
	pub fn from_window(tokens: &[Token], offset: usize) -> Option<Self> {
		let window = tokens.get(offset..offset.checked_add(N)?)?;
		Some(Self(std::array::from_fn(|i| window[i].clone())))
	}

	/// Builds the key from the last `N` tokens of `tokens`.
	pub fn from_tail(tokens: &[Token]) -> Option<Self> {
		let offset = tokens.len().checked_sub(N)?;
		Self::from_window(tokens, offset)
	}

	pub fn tokens(&self) -> &[Token; N] {
		&self.0
	}
}

impl<const N: usize> From<[Token; N]> for Key<N> {
	fn from(tokens: [Token; N]) -> Self {
		Self(tokens)
	}
}

impl<const N: usize> From<[&str; N]> for Key<N> {
	fn from(words: [&str; N]) -> Self {
		Self(words.map(Token::from))
	}
}

impl<const N: usize> fmt::Display for Key<N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, token) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{token}")?;
		}
		Ok(())
	}
}
