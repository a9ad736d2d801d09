use markov_gen_core::model::config::Config;
use markov_gen_core::model::corpus::Corpus;
use markov_gen_core::model::generator::Generator;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
	#[test]
	fn sentence_stays_under_budget(text in "[a-e .!?]{0,300}", max_chars in 0usize..200, seed in any::<u64>()) {
		let corpus = Corpus::<2>::from_text(&text, &Config::default());
		let mut generator = Generator::with_rng(&corpus, StdRng::seed_from_u64(seed));
		let sentence = generator.yield_sentence(max_chars);
		prop_assert!(sentence.chars().count() < max_chars.max(1));
		prop_assert_eq!(sentence.trim(), sentence.as_str());
	}

	#[test]
	fn output_stays_under_budget(text in "[a-c ,.!?]{0,300}", max_chars in 0usize..200, seed in any::<u64>()) {
		let corpus = Corpus::<1>::from_text(&text, &Config::default());
		let mut generator = Generator::with_rng(&corpus, StdRng::seed_from_u64(seed));
		let output = generator.yield_output(max_chars);
		prop_assert!(output.chars().count() < max_chars.max(1));
		prop_assert!(!output.contains("  "));
	}

	#[test]
	fn continuations_never_contain_begin(text in "[^\\[]{0,300}") {
		let corpus = Corpus::<2>::from_text(&text, &Config::default());
		for entry in corpus.entries() {
			prop_assert_eq!(entry.key.len(), 2);
			prop_assert!(entry.continuations.iter().all(|c| c != "[B]"));
		}
	}

	#[test]
	fn every_learned_word_comes_from_the_text(text in "[a-z .]{0,200}", seed in any::<u64>()) {
		let corpus = Corpus::<2>::from_text(&text, &Config::default());
		let mut generator = Generator::with_rng(&corpus, StdRng::seed_from_u64(seed));
		let output = generator.yield_output(145);
		for word in output.split(' ').filter(|w| !w.is_empty()) {
			prop_assert!(text.contains(word));
		}
	}
}
