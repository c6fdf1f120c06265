//! Integration tests for per-player career statistics.

use chrono::NaiveDate;
use poker_stats_web::{player_stats, Dataset, Player, PlayerBuyin, Session, RECENT_SESSIONS_LIMIT};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn players() -> Vec<Player> {
    vec![Player::new("p1", "Alice"), Player::new("p2", "Bob")]
}

#[test]
fn single_financial_session_scenario() {
    let d = Dataset::new(
        vec![Session::financial(
            1,
            date("2024-01-01"),
            vec![PlayerBuyin::new("p1", vec![100.0, 50.0], -20.0)],
        )],
        vec![Player::new("p1", "Alice")],
    )
    .unwrap();

    let s = player_stats(&d, "p1");
    assert_eq!(s.total_sessions, 1);
    assert_eq!(s.total_buyins, 150.0);
    assert_eq!(s.total_result, -20.0);
    assert_eq!(s.wins, 0);
    assert_eq!(s.losses, 1);
    assert_eq!(s.max_buyin, 100.0);
    assert_eq!(s.average_buyin, 75.0);
    assert_eq!(s.average_result, -20.0);
    assert_eq!(s.buyin_history.len(), 2);
    assert_eq!(s.recent_sessions[0].total_buyin, 150.0);
}

#[test]
fn player_without_sessions_has_zero_stats() {
    let d = Dataset::new(
        vec![Session::financial(
            1,
            date("2024-01-01"),
            vec![PlayerBuyin::new("p1", vec![10.0], 5.0)],
        )],
        players(),
    )
    .unwrap();

    for id in ["p2", "unknown"] {
        let s = player_stats(&d, id);
        assert_eq!(s.total_sessions, 0);
        assert_eq!(s.wins, 0);
        assert_eq!(s.losses, 0);
        assert_eq!(s.total_buyins, 0.0);
        assert_eq!(s.total_result, 0.0);
        assert_eq!(s.average_buyin, 0.0);
        assert_eq!(s.average_result, 0.0);
        assert!(s.recent_sessions.is_empty());
        assert!(s.buyin_history.is_empty());
    }
}

#[test]
fn attendance_only_session_counts_without_money() {
    let d = Dataset::new(
        vec![Session::attendance(4, date("2024-03-01"), vec!["p2".into()])],
        players(),
    )
    .unwrap();

    let s = player_stats(&d, "p2");
    assert_eq!(s.total_sessions, 1);
    assert_eq!(s.sessions_without_buyins, 1);
    assert_eq!(s.sessions_with_buyins, 0);
    assert_eq!(s.total_buyins, 0.0);
    assert_eq!(s.total_result, 0.0);
    assert_eq!(s.recent_sessions.len(), 1);
    let entry = &s.recent_sessions[0];
    assert_eq!(entry.session_id, 4);
    assert!(entry.buyins.is_empty());
    assert_eq!(entry.result, 0.0);
}

#[test]
fn break_even_session_is_neither_win_nor_loss() {
    let d = Dataset::new(
        vec![
            Session::financial(1, date("2024-01-01"), vec![PlayerBuyin::new("p1", vec![10.0], 0.0)]),
            Session::financial(2, date("2024-01-02"), vec![PlayerBuyin::new("p1", vec![10.0], 15.0)]),
            Session::financial(3, date("2024-01-03"), vec![PlayerBuyin::new("p1", vec![10.0], -5.0)]),
        ],
        players(),
    )
    .unwrap();

    let s = player_stats(&d, "p1");
    assert_eq!(s.wins, 1);
    assert_eq!(s.losses, 1);
    assert!(s.wins + s.losses < s.sessions_with_buyins);
}

#[test]
fn averages_round_halves_up() {
    // 25 / 2 = 12.5 -> 13; results -5 over 2 sessions = -2.5 -> -2
    let d = Dataset::new(
        vec![
            Session::financial(1, date("2024-01-01"), vec![PlayerBuyin::new("p1", vec![10.0], -8.0)]),
            Session::financial(2, date("2024-01-02"), vec![PlayerBuyin::new("p1", vec![15.0], 3.0)]),
        ],
        players(),
    )
    .unwrap();

    let s = player_stats(&d, "p1");
    assert_eq!(s.average_buyin, 13.0);
    assert_eq!(s.average_result, -2.0);
}

#[test]
fn histories_are_newest_first_and_stable_on_equal_dates() {
    let d = Dataset::new(
        vec![
            Session::financial(1, date("2024-01-01"), vec![PlayerBuyin::new("p1", vec![1.0], 0.0)]),
            Session::financial(2, date("2024-03-01"), vec![PlayerBuyin::new("p1", vec![2.0, 3.0], 0.0)]),
            Session::attendance(3, date("2024-02-01"), vec!["p1".into()]),
            Session::financial(4, date("2024-03-01"), vec![PlayerBuyin::new("p1", vec![4.0], 0.0)]),
        ],
        players(),
    )
    .unwrap();

    let s = player_stats(&d, "p1");
    let ids: Vec<_> = s.recent_sessions.iter().map(|e| e.session_id).collect();
    assert_eq!(ids, [2, 4, 3, 1]);
    let amounts: Vec<_> = s.buyin_history.iter().map(|e| e.amount).collect();
    assert_eq!(amounts, [2.0, 3.0, 4.0, 1.0]);
}

#[test]
fn recent_sessions_are_truncated() {
    let sessions: Vec<Session> = (1..=15)
        .map(|i| {
            Session::financial(
                i,
                date("2024-01-01") + chrono::Duration::days(i as i64),
                vec![PlayerBuyin::new("p1", vec![10.0], 1.0)],
            )
        })
        .collect();
    let d = Dataset::new(sessions, players()).unwrap();

    let s = player_stats(&d, "p1");
    assert_eq!(s.total_sessions, 15);
    assert_eq!(s.recent_sessions.len(), RECENT_SESSIONS_LIMIT);
    assert_eq!(s.recent_sessions[0].session_id, 15);
    assert_eq!(s.buyin_history.len(), 15);
}

#[test]
fn session_with_both_lists_counts_each_list() {
    let games = r#"{"sessions": [{
        "id": 9, "date": "2024-04-01",
        "players": ["p1", "p2"],
        "playersBuyins": [{"playerId": "p1", "buyins": [20, 10], "result": 15}]
    }]}"#;
    let d = Dataset::from_json_strs(games, r#"[{"id": "p1", "name": "Alice"}, {"id": "p2", "name": "Bob"}]"#)
        .unwrap();

    let both = player_stats(&d, "p1");
    assert_eq!(both.total_sessions, 2);
    assert_eq!(both.sessions_with_buyins, 1);
    assert_eq!(both.sessions_without_buyins, 1);
    assert_eq!(both.total_buyins, 30.0);
    assert_eq!(both.wins, 1);
    assert_eq!(both.recent_sessions.len(), 1);
    assert_eq!(both.recent_sessions[0].result, 15.0);

    let attendee = player_stats(&d, "p2");
    assert_eq!(attendee.total_sessions, 1);
    assert_eq!(attendee.sessions_without_buyins, 1);
    assert_eq!(attendee.total_buyins, 0.0);
    assert_eq!(attendee.recent_sessions.len(), 1);
    assert_eq!(attendee.recent_sessions[0].session_id, 9);
    assert!(attendee.recent_sessions[0].buyins.is_empty());
}

#[test]
fn average_just_below_half_rounds_down() {
    let d = Dataset::new(
        vec![Session::financial(
            1,
            date("2024-01-01"),
            vec![PlayerBuyin::new("p1", vec![10.0], 0.49999999999999994)],
        )],
        players(),
    )
    .unwrap();

    let s = player_stats(&d, "p1");
    assert_eq!(s.average_result, 0.0);
    assert_eq!(s.wins, 1);
}
