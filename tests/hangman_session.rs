use rand::rngs::StdRng;
use rand::SeedableRng;
use yazikit::hangman::session::{play, SessionEnd, EXIT_EOF, INVALID_GUESS, WELCOME};
use yazikit::hangman::stages::STAGES;
use yazikit::hangman::words::WordList;
use yazikit::hangman::Game;

async fn run_script(word: &str, script: &str) -> (SessionEnd, String, Game) {
    let mut game = Game::new(word);
    let mut input = script.as_bytes();
    let mut out: Vec<u8> = Vec::new();
    let end = play(&mut game, &mut input, &mut out)
        .await
        .expect("session should not fail on in-memory io");
    (end, String::from_utf8(out).expect("utf8 output"), game)
}

#[tokio::test]
async fn winning_game_transcript() {
    let (end, out, game) = run_script("cat", "c\nA\nt\n").await;
    assert_eq!(end, SessionEnd::Won);
    assert!(out.starts_with(WELCOME));
    assert!(out.contains("\nWord: _ _ _\nGuessed: None\nGuess letter: "));
    assert!(out.contains("\nWord: c _ _\nGuessed: c\n"));
    assert!(out.contains("\nWord: c a _\nGuessed: a c\n"));
    assert!(out.trim_end().ends_with("You win!"));
    assert_eq!(game.wrong(), 0);
}

#[tokio::test]
async fn losing_game_shows_every_frame_and_word() {
    let (end, out, game) = run_script("owl", "a\nb\nc\nd\ne\nf\n").await;
    assert_eq!(end, SessionEnd::Lost);
    for frame in &STAGES[1..] {
        assert!(out.contains(frame), "missing frame {frame:?}");
    }
    assert!(out.trim_end().ends_with("You lose! Word: owl"));
    assert!(game.is_lost());
}

#[tokio::test]
async fn game_stops_reading_once_decided() {
    // Extra lines after the winning guess are never consumed.
    let (end, out, game) = run_script("ox", "o\nx\nq\nr\n").await;
    assert_eq!(end, SessionEnd::Won);
    assert!(!game.used().contains(&'q'));
    assert_eq!(out.matches("Guess letter: ").count(), 2);
}

#[tokio::test]
async fn end_of_input_exits_cleanly() {
    let (end, out, _) = run_script("zebra", "z\n").await;
    assert_eq!(end, SessionEnd::Eof);
    assert!(out.trim_end().ends_with(EXIT_EOF.trim()));
    assert!(!out.contains("You lose!"));

    let (end, _, _) = run_script("zebra", "").await;
    assert_eq!(end, SessionEnd::Eof);
}

#[tokio::test]
async fn invalid_input_reprompts_without_penalty() {
    let (end, out, game) = run_script("ox", "hello\n9\n\nO\no\nx\n").await;
    assert_eq!(end, SessionEnd::Won);
    assert_eq!(out.matches(INVALID_GUESS).count(), 4);
    assert_eq!(game.wrong(), 0);
}

#[test]
fn seeded_pick_is_reproducible() {
    let words = WordList::builtin();
    let first = words.pick(&mut StdRng::seed_from_u64(42)).to_string();
    for _ in 0..5 {
        assert_eq!(words.pick(&mut StdRng::seed_from_u64(42)), first);
    }
}
