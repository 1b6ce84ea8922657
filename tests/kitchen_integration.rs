use kitchen_helper::app::{ConverterPanel, TimerAction, TimerPanel};
use kitchen_helper::recipes::RecipeStore;
use kitchen_helper::timer::{CountdownTimer, TimerStatus};
use kitchen_helper::units::{self, Unit};
use kitchen_helper::KitchenError;
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

#[test]
fn timer_runs_to_finish_on_the_event_loop_clock() {
    let t0 = Instant::now();
    let mut timer = CountdownTimer::new("Eggs", 0, 1, 5).unwrap();
    assert_eq!(timer.total_seconds(), 65);
    timer.start_at(t0);

    let mut notifications = Vec::new();
    for second in 1..=70 {
        notifications.extend(timer.poll(t0 + Duration::from_secs(second)));
    }

    assert_eq!(timer.status(), TimerStatus::Finished);
    assert_eq!(timer.remaining_seconds(), 0);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].message(), "Eggs timer has ended!");

    timer.reset();
    assert_eq!(timer.status(), TimerStatus::Reset);
    assert_eq!(timer.formatted_remaining(), "00:01:05");
}

#[test]
fn negative_duration_is_rejected() {
    let err = CountdownTimer::new("Bad", 0, -1, 0).unwrap_err();
    assert!(matches!(err, KitchenError::InvalidArgument(_)));
}

#[test]
fn timer_panel_add_then_stop_and_resume() {
    let t0 = Instant::now();
    let mut panel = TimerPanel::default();
    panel.set_inputs("Rice", "0", "0", "4");
    panel.add_timer(t0).unwrap();

    panel.poll(t0 + Duration::from_secs(2));
    panel.apply(0, TimerAction::Stop, t0 + Duration::from_secs(2));
    assert!(panel.poll(t0 + Duration::from_secs(30)).is_empty());
    assert_eq!(panel.timers()[0].remaining_seconds(), 2);

    let resumed = t0 + Duration::from_secs(30);
    panel.apply(0, TimerAction::Start, resumed);
    let finished = panel.poll(resumed + Duration::from_secs(2));
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].name, "Rice");
}

#[test]
fn recipe_store_round_trip_through_public_api() {
    let mut store = RecipeStore::seeded();
    assert!(store.add("").is_err());
    assert!(store.add("Fried Rice").is_err());
    store.add("New Dish").unwrap();

    let dish = store.get("New Dish").unwrap();
    assert!(dish.ingredients.is_empty());
    assert!(dish.steps.is_empty());

    let fried_rice = store.get("Fried Rice").unwrap();
    assert_eq!(fried_rice.ingredients.len(), 6);
    assert_eq!(fried_rice.steps.len(), 8);
}

#[test]
fn converter_matches_table_and_panel_text() {
    assert!((units::convert("cup", "tablespoon", 1.0).unwrap() - 16.0).abs() < 1e-3);
    assert!((units::convert("kg", "g", 2.0).unwrap() - 2000.0).abs() < 1e-3);
    assert_eq!(
        units::convert("pinch", "g", 1.0),
        Err(KitchenError::UnknownUnit("pinch".to_string()))
    );

    let mut panel = ConverterPanel::new(Unit::Kg, Unit::G);
    panel.set_input("1.5");
    panel.convert();
    assert_eq!(
        panel.result().map(|m| m.text.as_str()),
        Some("Result: 1.5 kg = 1500 g")
    );
}
