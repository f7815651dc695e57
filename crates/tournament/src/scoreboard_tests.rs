use super::*;
use std::sync::Arc;
use std::thread;

#[test]
fn new_board_is_zeroed() {
    let board = ScoreBoard::new(5).unwrap();
    assert_eq!(board.len(), 5);
    assert_eq!(board.matches_played(), 0);
    assert!(board.rows().iter().all(|row| *row == ScoreRow::default()));
}

#[test]
fn oversized_board_is_a_resource_error() {
    let err = ScoreBoard::new(usize::MAX).unwrap_err();
    assert!(matches!(
        err,
        TournamentError::ResourceAcquisition { participants, .. } if participants == usize::MAX
    ));
}

#[test]
fn draw_updates_both_rows() {
    let mut board = ScoreBoard::new(2).unwrap();
    board.apply(0, 1, MatchResult::Draw);

    let expected = ScoreRow {
        draws: 1,
        total_points: 1,
        ..Default::default()
    };
    assert_eq!(board.row(0), Some(&expected));
    assert_eq!(board.row(1), Some(&expected));
    assert_eq!(board.matches_played(), 1);
}

#[test]
fn win_first_scores_first_row() {
    let mut board = ScoreBoard::new(3).unwrap();
    board.apply(0, 2, MatchResult::WinFirst);

    assert_eq!(board.rows()[0].wins, 1);
    assert_eq!(board.rows()[0].total_points, 2);
    assert_eq!(board.rows()[2].losses, 1);
    assert_eq!(board.rows()[2].total_points, 0);
    assert_eq!(board.rows()[1], ScoreRow::default());
}

#[test]
fn win_second_scores_second_row() {
    let mut board = ScoreBoard::new(2).unwrap();
    board.apply(0, 1, MatchResult::WinSecond);

    assert_eq!(board.rows()[0].losses, 1);
    assert_eq!(board.rows()[0].total_points, 0);
    assert_eq!(board.rows()[1].wins, 1);
    assert_eq!(board.rows()[1].total_points, 2);
}

#[test]
#[should_panic]
fn self_match_is_rejected() {
    let mut board = ScoreBoard::new(2).unwrap();
    board.apply(1, 1, MatchResult::Draw);
}

#[test]
fn winners_include_all_ties() {
    let mut board = ScoreBoard::new(3).unwrap();
    board.apply(0, 1, MatchResult::Draw);
    board.apply(0, 2, MatchResult::WinSecond);
    board.apply(1, 2, MatchResult::WinFirst);

    // 0: 1 pt, 1: 3 pts, 2: 2 pts
    assert_eq!(board.max_points(), Some(3));
    assert_eq!(board.winners(), vec![1]);

    let mut tied = ScoreBoard::new(2).unwrap();
    tied.apply(0, 1, MatchResult::Draw);
    assert_eq!(tied.winners(), vec![0, 1]);
}

#[test]
fn empty_board_has_no_winners() {
    let board = ScoreBoard::new(0).unwrap();
    assert!(board.is_empty());
    assert_eq!(board.max_points(), None);
    assert!(board.winners().is_empty());
}

#[test]
fn concurrent_applies_are_never_torn() {
    let participants = 8;
    let per_thread = 500;
    let shared = Arc::new(SharedScoreBoard::new(ScoreBoard::new(participants).unwrap()));

    let handles: Vec<_> = (0..16)
        .map(|t| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for k in 0..per_thread {
                    let first = (t + k) % participants;
                    let second = (first + 1 + k % (participants - 1)) % participants;
                    let result = match k % 3 {
                        0 => MatchResult::Draw,
                        1 => MatchResult::WinFirst,
                        _ => MatchResult::WinSecond,
                    };
                    let mut board = shared.lock().unwrap();
                    board.apply(first, second, result);
                    assert!(board.rows().iter().all(ScoreRow::is_consistent));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let board = Arc::try_unwrap(shared).unwrap().into_inner().unwrap();
    assert_eq!(board.matches_played(), 16 * per_thread as u64);

    let total: u64 = board.rows().iter().map(|r| r.total_points as u64).sum();
    assert_eq!(total, 2 * board.matches_played());
}

#[test]
fn lock_reports_poisoning() {
    let shared = Arc::new(SharedScoreBoard::new(ScoreBoard::new(2).unwrap()));

    let poisoner = Arc::clone(&shared);
    let result = thread::spawn(move || {
        let _board = poisoner.lock().unwrap();
        panic!("worker died while holding the scoreboard");
    })
    .join();
    assert!(result.is_err());

    assert!(matches!(shared.lock(), Err(TournamentError::ScoreBoardPoisoned)));
    assert!(matches!(shared.snapshot(), Err(TournamentError::ScoreBoardPoisoned)));

    let shared = Arc::try_unwrap(shared).unwrap();
    assert!(matches!(shared.into_inner(), Err(TournamentError::ScoreBoardPoisoned)));
}
