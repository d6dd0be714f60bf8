//! Command loop tests.

use bjduel::{
    Card, Command, Deck, DeckError, Game, GameError, GameOptions, Rank, ShellError, Shell, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

const OPENING: &str = "Dealer's hand\n\
                       10 of Hearts, 8 of Hearts\n\
                       Total Val: 18\n\
                       Player's hand\n\
                       King of Spades, Queen of Spades\n\
                       Total Val: 20\n";

/// Dealer opens on 18, player on 20, followed by `extra` in draw order.
fn stacked_game(extra: &[Card]) -> Game {
    let mut draws = vec![
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::King),
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Spades, Rank::Queen),
    ];
    draws.extend_from_slice(extra);
    draws.reverse();

    let mut deck = Deck::new(0);
    deck.cards = draws;
    Game::with_deck(GameOptions::default(), deck).unwrap()
}

fn run(game: Game, input: &str) -> String {
    let mut output = Vec::new();
    Shell::new(input.as_bytes(), &mut output).run(game).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn quit_twice_mid_round() {
    let transcript = run(stacked_game(&[]), "no\nno\n");

    let expected = format!(
        "{OPENING}\
         (Cmd) \u{bf}Que? Just one hand\n\
         (Cmd) Dealer score: \n0\nPlayer score: \n0\n\
         \n"
    );
    assert_eq!(transcript, expected);
}

#[test]
fn full_round_then_quit() {
    let transcript = run(stacked_game(&[]), "pass\nquit\n");

    let expected = format!(
        "{OPENING}\
         (Cmd) Dealer's hand\n10 of Hearts, 8 of Hearts\n18\n\nPlayer wins\n\
         (Cmd) Dealer score: \n0\nPlayer score: \n1\n\
         \n"
    );
    assert_eq!(transcript, expected);
}

#[test]
fn end_of_input_asks_then_quits() {
    let transcript = run(stacked_game(&[]), "");

    assert_eq!(transcript.matches("\u{bf}Que? Just one hand").count(), 1);
    assert!(transcript.ends_with("Dealer score: \n0\nPlayer score: \n0\n\n"));
}

#[test]
fn unknown_input_cancels_quit() {
    let transcript = run(stacked_game(&[]), "no\ndance\nno\nno\n");

    assert!(transcript.contains("*** Unknown syntax: dance\n"));
    assert_eq!(transcript.matches("\u{bf}Que? Just one hand").count(), 2);
    assert!(transcript.ends_with("Player score: \n0\n\n"));
}

#[test]
fn blank_line_repeats_last_command() {
    let transcript = run(
        stacked_game(&[card(Suit::Clubs, Rank::Ace), card(Suit::Clubs, Rank::Two)]),
        "stand\n\nEOF\n",
    );

    assert_eq!(transcript.matches("Dealer's hand\n").count(), 3);
    assert!(transcript.ends_with("Player score: \n2\n\n"));
}

#[test]
fn blank_line_without_history_does_nothing() {
    let transcript = run(stacked_game(&[]), "\nyes\nexit\nexit\n");

    assert_eq!(transcript.matches("(Cmd) ").count(), 4);
    assert!(transcript.contains("(Cmd) (Cmd) \u{bf}Que?\n"));
}

#[test]
fn commands_ignore_trailing_words() {
    let transcript = run(stacked_game(&[card(Suit::Clubs, Rank::Two)]), "hit me\nno\nno\n");

    assert!(transcript.contains(
        "Player Hand: \nKing of Spades, Queen of Spades, 2 of Clubs\nTotal val: 22\n\
         Player busted, another round?\n"
    ));
    assert!(transcript.ends_with("Dealer score: \n1\nPlayer score: \n0\n\n"));
}

#[test]
fn help_lists_and_describes_commands() {
    let transcript = run(
        stacked_game(&[]),
        "help\nhelp hit\n? pass\nhelp dance\nno\nno\n",
    );

    assert!(transcript.contains("Documented commands (type help <topic>):\n"));
    assert!(transcript.contains(
        "EOF  another  exit  help  hit  newHand  no  pass  quit  stand  yes\n"
    ));
    assert!(transcript.contains(Command::Hit.description()));
    assert!(transcript.contains(Command::Stand.description()));
    assert!(transcript.contains("*** No help on dance\n"));
    assert_eq!(transcript.matches("\u{bf}Que? Just one hand").count(), 1);
}

#[test]
fn dealer_running_dry_aborts_the_session() {
    let mut deck = Deck::new(0);
    deck.cards = vec![
        card(Suit::Spades, Rank::Nine),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Two),
    ];
    let game = Game::with_deck(GameOptions::default(), deck).unwrap();

    let mut output = Vec::new();
    let err = Shell::new("pass\n".as_bytes(), &mut output)
        .run(game)
        .unwrap_err();
    assert!(matches!(
        err,
        ShellError::Game(GameError::Deck(DeckError::Empty))
    ));
}
