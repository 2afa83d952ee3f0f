use std::collections::HashSet;

use chrono::NaiveDate;
use tennis_pairing::domain::{FixedClock, MatchRecord, Player};
use tennis_pairing::errors::PairingError;
use tennis_pairing::matching::{Matcher, StableRoommates};
use tennis_pairing::preferences::{InMemoryHistory, NormalizedStrategy, PreferenceBuilder};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()
}

fn days_ago(days: u64) -> NaiveDate {
    today() - chrono::Days::new(days)
}

fn ladder() -> Vec<Player> {
    vec![
        Player::new("11", "Henrik F.", 1712),
        Player::new("12", "Martin A.", 1650),
        Player::new("13", "Tomasz C.", 1490),
        Player::new("14", "Gustaf K.", 1480),
        Player::new("15", "Gustav W.", 1320),
        Player::new("16", "Dave B.", 1300),
        Player::new("17", "Aleksandra", 1185),
        Player::new("18", "Anders W.", 1100),
        Player::new("19", "Maxim F.", 1020),
        Player::new("20", "Miguel P.", 990),
    ]
}

fn history() -> InMemoryHistory {
    let mut history = InMemoryHistory::new();
    history.insert(
        "Gustav W.",
        vec![
            MatchRecord::new(days_ago(4), "Dave B."),
            MatchRecord::new(days_ago(20), "Aleksandra"),
            MatchRecord::new(days_ago(120), "Anders W."),
        ],
    );
    history.insert(
        "Dave B.",
        vec![
            MatchRecord::new(days_ago(4), "Gustav W."),
            MatchRecord::new(days_ago(11), "Maxim F."),
        ],
    );
    history
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_every_list_is_a_permutation_of_the_other_players() {
    let history = history();
    let clock = FixedClock(today());
    let strategy = NormalizedStrategy::default();
    let builder = PreferenceBuilder::new(&history, &clock, &strategy, 90);

    for pool in [
        names(&["Gustav W.", "Dave B."]),
        names(&["Gustav W.", "Dave B.", "Aleksandra", "Anders W.", "Maxim F.", "Miguel P."]),
        ladder().into_iter().map(|p| p.name).collect(),
    ] {
        let preferences = builder.build_all(&pool, &ladder()).unwrap();

        let keys: HashSet<&str> = preferences.players().collect();
        let expected: HashSet<&str> = pool.iter().map(String::as_str).collect();
        assert_eq!(keys, expected);

        for (player, opponents) in preferences.iter() {
            let listed: HashSet<&str> = opponents.iter().map(String::as_str).collect();
            assert_eq!(listed.len(), opponents.len(), "{} lists someone twice", player);
            assert!(!listed.contains(player), "{} lists itself", player);
            assert_eq!(listed.len(), pool.len() - 1);
        }
    }
}

#[test]
fn test_recent_opponents_drop_down_the_list() {
    let history = history();
    let clock = FixedClock(today());
    let strategy = NormalizedStrategy::default();
    let builder = PreferenceBuilder::new(&history, &clock, &strategy, 90);
    let pool = names(&["Gustav W.", "Dave B.", "Aleksandra", "Anders W.", "Maxim F.", "Miguel P."]);

    let preferences = builder.build_all(&pool, &ladder()).unwrap();

    // normalized: Gustav 1060, Dave 1050, Aleksandra 1040, Anders 1030, Maxim 1020, Miguel 1010
    assert_eq!(
        preferences.get("Gustav W.").unwrap(),
        names(&["Anders W.", "Maxim F.", "Aleksandra", "Miguel P.", "Dave B."]).as_slice()
    );
    assert_eq!(
        preferences.get("Dave B.").unwrap(),
        names(&["Aleksandra", "Anders W.", "Miguel P.", "Maxim F.", "Gustav W."]).as_slice()
    );
}

#[test]
fn test_preferences_feed_a_symmetric_pairing() {
    let history = history();
    let clock = FixedClock(today());
    let strategy = NormalizedStrategy::default();
    let builder = PreferenceBuilder::new(&history, &clock, &strategy, 90);
    let pool = names(&["Gustav W.", "Dave B.", "Aleksandra", "Anders W.", "Maxim F.", "Miguel P."]);

    let preferences = builder.build_all(&pool, &ladder()).unwrap();
    let pairing = StableRoommates.pair(&preferences).unwrap();

    for name in &pool {
        let partner = pairing.partner_of(name).unwrap();
        assert_ne!(partner, name);
        assert_eq!(pairing.partner_of(partner), Some(name.as_str()));
    }
    assert_ne!(pairing.partner_of("Gustav W."), Some("Dave B."));
}

#[test]
fn test_missing_player_aborts_everything() {
    let history = history();
    let clock = FixedClock(today());
    let strategy = NormalizedStrategy::default();
    let builder = PreferenceBuilder::new(&history, &clock, &strategy, 90);

    let result = builder.build_all(&names(&["Gustav W.", "Roger F.", "Dave B."]), &ladder());

    assert_eq!(
        result,
        Err(PairingError::NotFound {
            name: "Roger F.".to_string()
        })
    );
}

#[test]
fn test_duplicate_pool_name_is_rejected() {
    let history = history();
    let clock = FixedClock(today());
    let strategy = NormalizedStrategy::default();
    let builder = PreferenceBuilder::new(&history, &clock, &strategy, 90);

    let result = builder.build_all(&names(&["Dave B.", "Dave B."]), &ladder());

    assert_eq!(
        result,
        Err(PairingError::DuplicatePlayer {
            name: "Dave B.".to_string()
        })
    );
}
