//! Deck construction integration tests.

use core::cmp::Ordering;

use cardeck::options::{AddJokers, DeckOption, FilterOut, NoOfDecks, Shuffle, Sort};
use cardeck::{
    Card, DECK_SIZE, DeckBuilder, DeckError, Rank, Suit, deck, default_sort, order, rng, shuffle,
};
use proptest::prelude::*;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn is_two(card: &Card) -> bool {
    card.rank == Rank::Two
}

fn is_two_or_three(card: &Card) -> bool {
    matches!(card.rank, Rank::Two | Rank::Three)
}

#[test]
fn card_display_names_rank_and_pluralized_suit() {
    assert_eq!(Card::joker().to_string(), "Joker");
    assert_eq!(card(Suit::Diamond, Rank::Two).to_string(), "Two of Diamonds");
    assert_eq!(card(Suit::Spade, Rank::Seven).to_string(), "Seven of Spades");
    assert_eq!(card(Suit::Heart, Rank::King).to_string(), "King of Hearts");
    assert_eq!(card(Suit::Club, Rank::Ace).to_string(), "Ace of Clubs");
}

#[test]
fn joker_ignores_rank() {
    let odd = card(Suit::Joker, Rank::Queen);
    assert_eq!(odd.to_string(), "Joker");
    assert_eq!(odd, Card::joker());
    assert_eq!(order::abs_value(&odd), order::JOKER_VALUE);
}

#[test]
fn every_standard_card_displays_with_pattern() {
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            let shown = card(suit, rank).to_string();
            assert_eq!(shown, format!("{rank} of {suit}s"));
        }
    }
}

#[test]
fn ordinals_follow_declaration_order() {
    assert_eq!(Suit::Spade.ordinal(), 0);
    assert_eq!(Suit::Joker.ordinal(), 4);
    assert_eq!(Rank::MIN.ordinal(), 0);
    assert_eq!(Rank::MAX.ordinal(), 12);
    assert_eq!(DECK_SIZE, 52);
}

#[test]
fn suit_dominates_rank() {
    let two_of_diamonds = card(Suit::Diamond, Rank::Two);
    let king_of_spades = card(Suit::Spade, Rank::King);
    assert!(order::less(&king_of_spades, &two_of_diamonds));
    assert!(!order::less(&two_of_diamonds, &king_of_spades));
    assert_eq!(
        order::compare(&two_of_diamonds, &king_of_spades),
        Ordering::Greater
    );
}

#[test]
fn standard_cards_have_distinct_keys_below_jokers() {
    let mut seen = [false; order::JOKER_VALUE as usize];
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            let key = order::abs_value(&card(suit, rank)) as usize;
            assert!(!seen[key], "duplicate key {key}");
            seen[key] = true;
        }
    }
    assert!(seen.iter().all(|&s| s));
    assert!(order::less(&card(Suit::Club, Rank::King), &Card::joker()));
}

#[test]
fn new_deck_has_each_card_once() {
    let cards = deck::new();
    assert_eq!(cards.len(), DECK_SIZE);
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            let wanted = card(suit, rank);
            assert_eq!(cards.iter().filter(|&&c| c == wanted).count(), 1);
        }
    }
    assert!(cards.iter().all(|c| !c.is_joker()));
}

#[test]
fn generation_order_is_spade_heart_diamond_club() {
    let cards = deck::new();
    let leading: Vec<Suit> = cards.chunks(13).map(|chunk| chunk[0].suit).collect();
    assert_eq!(leading, Suit::STANDARD);
    assert_eq!(cards[12], card(Suit::Spade, Rank::King));
    assert_eq!(cards[51], card(Suit::Club, Rank::King));
}

#[test]
fn no_options_is_standard_deck() {
    assert_eq!(DeckBuilder::new().build(), deck::new());
    assert_eq!(deck::build(Vec::new()), deck::new());
}

#[test]
fn options_apply_in_order() {
    // Filtering after adding jokers removes them; before, it does not.
    let jokers_first = DeckBuilder::new()
        .with(AddJokers::new(2))
        .with(FilterOut::new(Card::is_joker))
        .build();
    let filter_first = DeckBuilder::new()
        .with(FilterOut::new(Card::is_joker))
        .with(AddJokers::new(2))
        .build();
    assert_eq!(jokers_first.len(), DECK_SIZE);
    assert_eq!(filter_first.len(), DECK_SIZE + 2);
}

#[test]
fn closures_and_functions_are_options() {
    let cards = DeckBuilder::new()
        .with(NoOfDecks::new(2))
        .with(|mut cards: Vec<Card>| {
            cards.truncate(3);
            cards
        })
        .with(default_sort)
        .build();
    assert_eq!(
        cards,
        [
            card(Suit::Spade, Rank::Ace),
            card(Suit::Spade, Rank::Two),
            card(Suit::Spade, Rank::Three),
        ]
    );
}

#[test]
fn no_of_decks_zero_and_one() {
    assert!(NoOfDecks::new(0).apply(deck::new()).is_empty());
    assert_eq!(NoOfDecks::new(1).apply(deck::new()), deck::new());
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn no_of_decks_overflow_panics() {
    let _ = NoOfDecks::new(usize::MAX).apply(deck::new());
}

#[test]
fn add_jokers_appends() {
    let cards = AddJokers::new(2).apply(vec![card(Suit::Heart, Rank::Ten)]);
    assert_eq!(
        cards,
        vec![card(Suit::Heart, Rank::Ten), Card::joker(), Card::joker()]
    );
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn add_jokers_overflow_panics_instead_of_shrinking() {
    let _ = AddJokers::new(usize::MAX).apply(deck::new());
}

#[test]
fn filter_out_everything() {
    assert!(FilterOut::new(|_: &Card| true).apply(deck::new()).is_empty());
}

#[test]
fn default_sort_orders_suit_before_rank() {
    let cards = default_sort(vec![
        card(Suit::Diamond, Rank::Two),
        card(Suit::Spade, Rank::King),
    ]);
    assert_eq!(cards[0], card(Suit::Spade, Rank::King));
}

#[test]
fn custom_sort_with_default_comparator_starts_with_ace_of_spades() {
    let cards = DeckBuilder::new().with(Sort::new(order::compare)).build();
    assert_eq!(cards[0], card(Suit::Spade, Rank::Ace));
    assert_eq!(cards[DECK_SIZE - 1], card(Suit::Club, Rank::King));
}

#[test]
fn custom_sort_uses_comparator() {
    let cards = Sort::new(|a: &Card, b: &Card| order::compare(b, a)).apply(deck::new());
    assert_eq!(cards[0], card(Suit::Club, Rank::King));
    assert_eq!(cards[DECK_SIZE - 1], card(Suit::Spade, Rank::Ace));
}

#[test]
fn jokers_then_shuffle_keeps_count() {
    let cards = DeckBuilder::new()
        .with(AddJokers::new(5))
        .with(Shuffle::seeded(11))
        .build();
    assert_eq!(cards.len(), DECK_SIZE + 5);
    assert_eq!(cards.iter().filter(|c| c.is_joker()).count(), 5);
}

#[test]
fn filter_after_jokers() {
    let cards = DeckBuilder::new()
        .with(AddJokers::new(5))
        .with(FilterOut::new(is_two))
        .build();
    assert_eq!(cards.len(), DECK_SIZE + 5 - 4);
}

#[test]
fn filter_then_triple_then_jokers() {
    let cards = DeckBuilder::new()
        .with(FilterOut::new(is_two_or_three))
        .with(NoOfDecks::new(3))
        .with(AddJokers::new(5))
        .build();
    assert_eq!(cards.len(), (DECK_SIZE - 8) * 3 + 5);
    assert!(cards[cards.len() - 5..].iter().all(Card::is_joker));
    assert!(cards[..cards.len() - 5].iter().all(|c| !is_two_or_three(c)));
}

#[test]
fn shared_source_is_reproducible_after_reseed() {
    // Every use of the shared source in this binary lives in this test.
    rng::reseed(0);
    let first = DeckBuilder::new().with(shuffle).build();
    let second = shuffle(deck::new());

    rng::reseed(0);
    assert_eq!(DeckBuilder::new().with(Shuffle::new()).build(), first);
    assert_eq!(shuffle(deck::new()), second);
    assert_ne!(first, second);

    let mut sorted = first;
    sorted.sort();
    assert_eq!(sorted, default_sort(deck::new()));
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let a = Shuffle::seeded(0).apply(deck::new());
    assert_eq!(a, Shuffle::seeded(0).apply(deck::new()));
    assert_ne!(a, deck::new());
    assert!(Shuffle::seeded(1).apply(Vec::new()).is_empty());
    assert_eq!(
        Shuffle::seeded(1).apply(vec![Card::joker()]),
        [Card::joker()]
    );
}

#[test]
fn injected_generator_matches_seeded() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let injected = Shuffle::with_rng(ChaCha8Rng::seed_from_u64(5)).apply(deck::new());
    let seeded = Shuffle::seeded(5).apply(deck::new());
    assert_eq!(injected, seeded);
}

#[test]
fn signed_counts() {
    assert_eq!(NoOfDecks::try_from(-2_i64), Err(DeckError::NegativeCount(-2)));
    assert_eq!(AddJokers::try_from(-1_i64), Err(DeckError::NegativeCount(-1)));
    assert_eq!(AddJokers::try_from(0_i64).map(|n| n.count()), Ok(0));
    assert_eq!(
        NoOfDecks::try_from(2_i64).map(|mut n| n.apply(deck::new()).len()),
        Ok(2 * DECK_SIZE)
    );
}

fn any_card() -> impl Strategy<Value = Card> {
    prop_oneof![
        9 => (0..4_usize, 0..13_usize)
            .prop_map(|(s, r)| card(Suit::STANDARD[s], Rank::ALL[r])),
        1 => Just(Card::joker()),
    ]
}

proptest! {
    #[test]
    fn filter_out_keeps_order_of_survivors(
        cards in prop::collection::vec(any_card(), 0..80),
    ) {
        let kept = FilterOut::new(is_two).apply(cards.clone());
        let expected: Vec<Card> = cards.iter().copied().filter(|c| !is_two(c)).collect();
        prop_assert!(kept.len() <= cards.len());
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn no_of_decks_multiplies_length(
        cards in prop::collection::vec(any_card(), 0..60),
        n in 0..5_usize,
    ) {
        let out = NoOfDecks::new(n).apply(cards.clone());
        prop_assert_eq!(out.len(), n * cards.len());
        for chunk in out.chunks(cards.len().max(1)) {
            prop_assert_eq!(chunk, cards.as_slice());
        }
    }

    #[test]
    fn add_jokers_appends_exactly_n(
        cards in prop::collection::vec(any_card(), 0..60),
        n in 0..10_usize,
    ) {
        let out = AddJokers::new(n).apply(cards.clone());
        prop_assert_eq!(out.len(), cards.len() + n);
        prop_assert_eq!(&out[..cards.len()], cards.as_slice());
        prop_assert!(out[cards.len()..].iter().all(Card::is_joker));
    }

    #[test]
    fn shuffle_is_a_permutation(
        cards in prop::collection::vec(any_card(), 0..80),
        seed in any::<u64>(),
    ) {
        let mut shuffled = Shuffle::seeded(seed).apply(cards.clone());
        prop_assert_eq!(shuffled.len(), cards.len());
        shuffled.sort();
        prop_assert_eq!(shuffled, default_sort(cards));
    }

    #[test]
    fn default_sort_agrees_with_less(
        cards in prop::collection::vec(any_card(), 0..80),
    ) {
        let sorted = default_sort(cards);
        for pair in sorted.windows(2) {
            prop_assert!(!order::less(&pair[1], &pair[0]));
        }
    }
}
