use super::*;

fn sample(id: &str, name: &str) -> Restaurant {
    Restaurant {
        id: id.to_owned(),
        name: name.to_owned(),
        image_url: "https://cdn/x.png".to_owned(),
        address: None,
        cuisine: None,
        rating: None,
        offers: None,
        cost_for_two: None,
        description: None,
    }
}

#[test]
fn find_returns_matching_restaurant() {
    let state = RestaurantsState {
        items: vec![sample("1", "A"), sample("2", "B")],
        ..RestaurantsState::default()
    };
    assert_eq!(state.find("2").map(|r| r.name), Some("B".to_owned()));
}

#[test]
fn find_misses_unknown_id() {
    let state = RestaurantsState { items: vec![sample("1", "A")], ..RestaurantsState::default() };
    assert_eq!(state.find("99"), None);
}

#[test]
fn default_state_is_empty_and_not_loaded() {
    let state = RestaurantsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loaded);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}
