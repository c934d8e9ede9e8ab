use std::collections::VecDeque;

use rand::seq::SliceRandom;

/// Fixed candidate set for a sprint.
pub const WORDS: [&str; 5] = ["apple", "sky", "blue", "middle", "set"];

/// Supplies the next word to type.
pub trait WordSource {
    fn draw(&mut self) -> String;
}

/// Uniform random draws from [`WORDS`], with replacement. The same word
/// can come up twice in a row.
#[derive(Debug, Default)]
pub struct RandomPool;

impl WordSource for RandomPool {
    fn draw(&mut self) -> String {
        WORDS
            .choose(&mut rand::thread_rng())
            .expect("candidate set is non-empty")
            .to_string()
    }
}

/// Deterministic source for tests: hands out the queued words in order,
/// then keeps repeating the last one.
#[derive(Debug)]
pub struct ScriptedPool {
    queue: VecDeque<String>,
    last: String,
}

impl ScriptedPool {
    pub fn new(words: &[&str]) -> Self {
        assert!(!words.is_empty(), "scripted pool needs at least one word");
        Self {
            queue: words.iter().map(|w| w.to_string()).collect(),
            last: words[0].to_string(),
        }
    }
}

impl WordSource for ScriptedPool {
    fn draw(&mut self) -> String {
        if let Some(word) = self.queue.pop_front() {
            self.last = word.clone();
            word
        } else {
            self.last.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pool_draws_from_candidate_set() {
        let mut pool = RandomPool;

        for _ in 0..50 {
            let word = pool.draw();
            assert!(WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn scripted_pool_hands_out_words_in_order() {
        let mut pool = ScriptedPool::new(&["sky", "blue"]);

        assert_eq!(pool.draw(), "sky");
        assert_eq!(pool.draw(), "blue");
    }

    #[test]
    fn scripted_pool_repeats_last_word_when_exhausted() {
        let mut pool = ScriptedPool::new(&["set"]);

        assert_eq!(pool.draw(), "set");
        assert_eq!(pool.draw(), "set");
        assert_eq!(pool.draw(), "set");
    }

    #[test]
    fn words_are_all_non_empty() {
        for word in WORDS {
            assert!(!word.is_empty());
        }
    }
}
