use gamehub::ui::format_game_list;

#[test]
fn two_game_panel_snapshot() {
    let (text, _) = format_game_list(&["nethack", "rogue"], "Story / Roguelike");
    insta::assert_snapshot!(text, @r"
    ┌──────────────────────────────────────┐
    │          Story / Roguelike           │
    ├──────────────────────────────────────┤
    │   1) nethack                         │
    │   2) rogue                           │
    ├──────────────────────────────────────┤
    │   0) Back to Main Menu               │
    └──────────────────────────────────────┘
    ");
}

#[test]
fn twelve_game_panel_rows_snapshot() {
    let games: Vec<String> = (1..=12).map(|i| format!("g{i:02}")).collect();
    let (text, map) = format_game_list(&games, "Boards / Classics");
    let rows: Vec<&str> = text.lines().skip(3).take(6).collect();
    insta::assert_snapshot!(rows.join("\n"), @r"
    │ 1) g01             7) g07            │
    │ 2) g02             8) g08            │
    │ 3) g03             9) g09            │
    │ 4) g04             10) g10           │
    │ 5) g05             11) g11           │
    │ 6) g06             12) g12           │
    ");
    assert_eq!(map.get(7), Some("g07"));
}

#[test]
fn index_map_keys_are_dense_for_any_size() {
    for n in 0..=30 {
        let games: Vec<String> = (0..n).map(|i| format!("game{i}")).collect();
        let (_, map) = format_game_list(&games, "x");
        let keys: Vec<usize> = map.numbers().collect();
        assert_eq!(keys, (1..=n).collect::<Vec<_>>(), "n = {n}");
        // Interleaved columns still number games in list order.
        for (k, g) in map.iter() {
            assert_eq!(g, games[k - 1]);
        }
    }
}
