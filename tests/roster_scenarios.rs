// End-to-end roster scenarios through the public API

use pokedex_query::{
    average_hp, filter_by_type, parse_roster, project_names, select_strongest,
    select_strongest_with, sort_by_name, Pokemon, QueryConfig, QueryError, TiePolicy,
};

const STARTERS_JSON: &str = r#"[
    {"id": 1,  "name": "Bulbasaur",  "type": "grass",    "hp": 45, "attack": 49, "defense": 49},
    {"id": 4,  "name": "Charmander", "type": "fire",     "hp": 39, "attack": 52, "defense": 43},
    {"id": 7,  "name": "Squirtle",   "type": "water",    "hp": 44, "attack": 48, "defense": 65},
    {"id": 25, "name": "Pikachu",    "type": "electric", "hp": 35, "attack": 55, "defense": 40}
]"#;

fn starters() -> Vec<Pokemon> {
    parse_roster(STARTERS_JSON).unwrap()
}

#[test]
fn test_starter_scenario() {
    let roster = starters();

    assert_eq!(project_names(&filter_by_type(&roster, "fire")), vec!["Charmander"]);
    assert_eq!(project_names(&select_strongest(&roster).unwrap()), vec!["Pikachu"]);
    assert_eq!(average_hp(&roster), 40.75);
    assert_eq!(
        project_names(&sort_by_name(&roster)),
        vec!["Bulbasaur", "Charmander", "Pikachu", "Squirtle"]
    );
}

#[test]
fn test_tie_scenario() {
    let mut roster = starters();
    roster.push(Pokemon::new(133, "Eevee", "normal", 55, 55, 50));

    let all = select_strongest_with(&roster, TiePolicy::AllTies).unwrap();
    assert_eq!(project_names(&all), vec!["Pikachu", "Eevee"]);

    let first = select_strongest_with(&roster, TiePolicy::FirstOccurrence).unwrap();
    assert_eq!(project_names(&first), vec!["Pikachu"]);

    let config = QueryConfig::from_json_str(r#"{"tie_policy": "first_occurrence"}"#).unwrap();
    assert_eq!(config.select_strongest(&roster).unwrap(), first);
}

#[test]
fn test_queries_leave_roster_untouched() {
    let roster = starters();
    let snapshot = roster.clone();

    let _ = filter_by_type(&roster, "water");
    let _ = project_names(&roster);
    let _ = select_strongest(&roster);
    let _ = sort_by_name(&roster);
    let _ = average_hp(&roster);

    assert_eq!(roster, snapshot);
}

#[test]
fn test_empty_roster() {
    let empty: Vec<Pokemon> = parse_roster("[]").unwrap();

    assert!(filter_by_type(&empty, "fire").is_empty());
    assert!(project_names(&empty).is_empty());
    assert!(sort_by_name(&empty).is_empty());
    assert_eq!(average_hp(&empty), 0.0);
    assert!(matches!(
        select_strongest(&empty),
        Err(QueryError::EmptyInput { .. })
    ));
}
