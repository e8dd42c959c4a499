//! Behaviour tests for the lexicon-then-remote translation lookup.
//!
//! The remote provider is a scripted stub so scenarios can assert both the
//! resolved text and whether the network tier was consulted.

#[path = "support/stub_remote.rs"]
mod stub_remote;

use std::cell::RefCell;
use std::sync::Arc;

use flashcards::domain::{Direction, TranslationResolver, TranslationResult, TranslationSource, Word};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use stub_remote::StubRemote;
use tokio::runtime::Runtime;

struct ResolverWorld {
    runtime: Runtime,
    remote: Arc<StubRemote>,
    result: RefCell<Option<TranslationResult>>,
}

impl ResolverWorld {
    fn new() -> Self {
        Self {
            runtime: tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("test runtime"),
            remote: Arc::new(StubRemote::default()),
            result: RefCell::new(None),
        }
    }

    fn resolve(&self, word: &str, direction: Direction) {
        let resolver = TranslationResolver::new(self.remote.clone());
        let word = Word::new(word).expect("valid word");
        let result = self
            .runtime
            .block_on(async { resolver.resolve(&word, direction).await });
        *self.result.borrow_mut() = Some(result);
    }

    fn with_result<F>(&self, f: F)
    where
        F: FnOnce(&TranslationResult),
    {
        let result = self.result.borrow();
        f(result.as_ref().expect("a translation was resolved"));
    }
}

#[fixture]
fn world() -> ResolverWorld {
    ResolverWorld::new()
}

#[given("the remote provider answers {answer}")]
fn the_remote_provider_answers(world: &ResolverWorld, answer: String) {
    world.remote.set_answer(Some(&answer));
}

#[given("the remote provider is unavailable")]
fn the_remote_provider_is_unavailable(world: &ResolverWorld) {
    world.remote.set_answer(None);
}

#[when("I translate {word} with direction {direction}")]
fn i_translate_with_direction(world: &ResolverWorld, word: String, direction: String) {
    let direction: Direction = direction.parse().expect("known direction");
    world.resolve(&word, direction);
}

#[then("the translation is {expected}")]
fn the_translation_is(world: &ResolverWorld, expected: String) {
    world.with_result(|result| assert_eq!(result.translation, expected));
}

#[then("the translation came from the {tier}")]
fn the_translation_came_from(world: &ResolverWorld, tier: String) {
    let expected = match tier.as_str() {
        "lexicon" => TranslationSource::Lexicon,
        "remote" => TranslationSource::Remote,
        "identity" => TranslationSource::Identity,
        other => panic!("unknown tier {other}"),
    };
    world.with_result(|result| assert_eq!(result.source, expected));
}

#[then("the remote provider was not called")]
fn the_remote_provider_was_not_called(world: &ResolverWorld) {
    assert!(world.remote.calls().is_empty());
}

#[then("the remote provider was asked for {word} with pair {pair}")]
fn the_remote_provider_was_asked_for(world: &ResolverWorld, word: String, pair: String) {
    assert_eq!(world.remote.calls(), vec![(word, pair)]);
}

#[scenario(
    path = "tests/features/translation_resolver.feature",
    name = "Lexicon words never reach the remote provider"
)]
fn lexicon_words_never_reach_the_remote_provider(world: ResolverWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/translation_resolver.feature",
    name = "Portuguese words resolve through the reverse lexicon"
)]
fn portuguese_words_resolve_through_the_reverse_lexicon(world: ResolverWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/translation_resolver.feature",
    name = "Unknown words use the remote provider"
)]
fn unknown_words_use_the_remote_provider(world: ResolverWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/translation_resolver.feature",
    name = "Unknown words fall back to themselves when the provider fails"
)]
fn unknown_words_fall_back_to_themselves(world: ResolverWorld) {
    drop(world);
}
