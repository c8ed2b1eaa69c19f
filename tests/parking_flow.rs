//! End-to-end entry/exit flows against the in-memory stores.

use std::io::Cursor;
use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use parkit::config::LotConfig;
use parkit::domain::{
    DomainError, ParkingSpot, RateCard, RepositoryProvider, Ticket, VehicleCategory,
    CAR_RATE_PER_HOUR, NO_AVAILABLE_SLOT,
};
use parkit::interfaces::ConsoleInput;
use parkit::{InMemoryRepositoryProvider, ParkingService};

const REG: &str = "ABCDEF";

/// Console input answering from the given lines, in order.
fn terminal(lines: &[&str]) -> Arc<ConsoleInput> {
    let mut script = lines.join("\n");
    script.push('\n');
    Arc::new(ConsoleInput::new(Cursor::new(script.into_bytes())))
}

fn lot() -> Arc<InMemoryRepositoryProvider> {
    Arc::new(InMemoryRepositoryProvider::new(&LotConfig {
        car_spots: 3,
        bike_spots: 2,
    }))
}

fn service(repos: &Arc<InMemoryRepositoryProvider>, input: Arc<ConsoleInput>) -> ParkingService {
    ParkingService::new(repos.clone(), input, RateCard::default())
}

/// Seed an open car ticket that entered `minutes` ago on the next free car spot.
async fn park_car_since(repos: &InMemoryRepositoryProvider, minutes: i64) -> Ticket {
    let spot_id = repos
        .parking_spots()
        .next_available_slot(VehicleCategory::Car)
        .await
        .unwrap();
    let spot = ParkingSpot::new(spot_id, VehicleCategory::Car, false);
    repos.parking_spots().update(&spot).await.unwrap();

    let mut ticket = Ticket::open(REG, spot, Utc::now() - Duration::minutes(minutes));
    ticket.id = repos.tickets().save(&ticket).await.unwrap();
    ticket
}

fn approx(actual: Decimal, expected: Decimal) -> bool {
    (actual - expected).abs() < dec!(0.001)
}

#[tokio::test]
async fn parking_a_car_saves_ticket_and_occupies_spot() {
    let repos = lot();
    let parking = service(&repos, terminal(&[REG, "1"]));

    let receipt = parking.process_entry().await.unwrap().unwrap();

    let ticket = repos.tickets().find_latest(REG).await.unwrap().unwrap();
    assert_eq!(ticket.id, 1);
    assert_eq!(ticket, receipt.ticket);
    assert!(!ticket.spot.available);
    assert!(
        !repos
            .parking_spots()
            .find_by_id(1)
            .await
            .unwrap()
            .unwrap()
            .available
    );
    assert_eq!(
        repos
            .parking_spots()
            .next_available_slot(VehicleCategory::Car)
            .await
            .unwrap(),
        2
    );
}

#[tokio::test]
async fn parking_lot_exit_records_out_time_and_fare() {
    let repos = lot();
    let parked = park_car_since(&repos, 60).await;
    let parking = service(&repos, terminal(&[REG]));

    parking.process_exit().await.unwrap();

    let ticket = repos.tickets().find_by_id(parked.id).await.unwrap().unwrap();
    assert!(ticket.out_time.is_some());
    assert!(approx(ticket.price, CAR_RATE_PER_HOUR));
    assert_eq!(repos.tickets().count_prior(REG).await.unwrap(), 1);
    assert!(
        repos
            .parking_spots()
            .find_by_id(parked.spot.id)
            .await
            .unwrap()
            .unwrap()
            .available
    );
}

#[tokio::test]
async fn recurring_user_gets_loyalty_discount() {
    let repos = lot();

    let mut first = Ticket::open(
        REG,
        ParkingSpot::new(1, VehicleCategory::Car, true),
        Utc::now() - Duration::hours(6),
    );
    first.out_time = Some(Utc::now() - Duration::hours(5));
    first.price = dec!(1.5);
    repos.tickets().save(&first).await.unwrap();

    let second = park_car_since(&repos, 60).await;
    let parking = service(&repos, terminal(&[REG]));

    let closed = parking.process_exit().await.unwrap();

    assert_eq!(closed.id, second.id);
    assert!(approx(closed.price, dec!(0.95) * CAR_RATE_PER_HOUR));
    assert_eq!(repos.tickets().count_prior(REG).await.unwrap(), 2);
    assert_eq!(parking.vehicle_history(REG).await.unwrap().len(), 2);
}

#[tokio::test]
async fn short_stay_is_free_even_for_returning_customers() {
    let repos = lot();
    let entry = service(&repos, terminal(&[REG, "1", REG, REG, "1", REG]));
    entry.process_entry().await.unwrap().unwrap();
    entry.process_exit().await.unwrap();

    let receipt = entry.process_entry().await.unwrap().unwrap();
    assert!(receipt.returning_customer);

    let closed = entry.process_exit().await.unwrap();
    assert_eq!(closed.price, Decimal::ZERO);
}

#[tokio::test]
async fn second_exit_for_same_stay_fails_fast() {
    let repos = lot();
    park_car_since(&repos, 90).await;
    let parking = service(&repos, terminal(&[REG, REG]));

    let first = parking.process_exit().await.unwrap();
    let err = parking.process_exit().await.unwrap_err();

    assert!(matches!(err, DomainError::TicketAlreadyClosed { ticket_id, .. } if ticket_id == first.id));
    let stored = repos.tickets().find_by_id(first.id).await.unwrap().unwrap();
    assert_eq!(stored.price, first.price);
    assert_eq!(stored.out_time, first.out_time);
}

#[tokio::test]
async fn full_category_turns_vehicles_away() {
    let repos = Arc::new(InMemoryRepositoryProvider::new(&LotConfig {
        car_spots: 1,
        bike_spots: 1,
    }));

    service(&repos, terminal(&["CAR-1", "1"]))
        .process_entry()
        .await
        .unwrap()
        .unwrap();

    let turned_away = service(&repos, terminal(&["CAR-2", "1"]))
        .process_entry()
        .await
        .unwrap();
    assert!(turned_away.is_none());
    assert!(repos.tickets().find_latest("CAR-2").await.unwrap().is_none());

    let bike = service(&repos, terminal(&["BIKE-1", "2"]))
        .process_entry()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bike.ticket.spot.id, 2);
    assert_eq!(
        repos
            .parking_spots()
            .next_available_slot(VehicleCategory::Bike)
            .await
            .unwrap(),
        NO_AVAILABLE_SLOT
    );
}

#[tokio::test]
async fn two_terminals_cannot_take_the_same_spot() {
    let repos = lot();
    let slow = service(&repos, terminal(&[]));
    let fast = service(&repos, terminal(&["FAST", "1"]));

    // The slow terminal found spot 1 but has not marked it yet.
    let mut spot = slow
        .spot_allocator()
        .next_available_spot(VehicleCategory::Car)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(spot.id, 1);

    let taken = fast.process_entry().await.unwrap().unwrap();
    assert_eq!(taken.ticket.spot.id, 1);

    spot.occupy();
    let err = repos.parking_spots().update(&spot).await.unwrap_err();
    assert!(matches!(err, DomainError::SpotUnavailable(1)));
}

#[tokio::test]
async fn list_spots_reflects_occupancy() {
    let repos = lot();
    let parking = service(&repos, terminal(&[REG, "2"]));
    parking.process_entry().await.unwrap().unwrap();

    let spots = parking.list_spots().await.unwrap();
    let occupied: Vec<i32> = spots.iter().filter(|s| !s.available).map(|s| s.id).collect();
    assert_eq!(spots.len(), 5);
    assert_eq!(occupied, vec![4]);
}

#[tokio::test]
async fn vehicle_already_parked_cannot_enter_again() {
    let repos = lot();
    let parking = service(&repos, terminal(&[REG, "1", REG, "1"]));
    let first = parking.process_entry().await.unwrap().unwrap();

    let err = parking.process_entry().await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::VehicleAlreadyParked { ticket_id, spot_id, .. }
            if ticket_id == first.ticket.id && spot_id == first.ticket.spot.id
    ));
    assert_eq!(parking.vehicle_history(REG).await.unwrap().len(), 1);
    assert_eq!(
        repos
            .parking_spots()
            .next_available_slot(VehicleCategory::Car)
            .await
            .unwrap(),
        2
    );
}
