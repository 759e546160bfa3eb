//! Food Dispatch - demo entry point
//!
//! Runs the reference scenario against the seed data and prints the
//! results. Set `RUST_LOG=debug` to see every engine event.

use food_dispatch::logging::init_tracing;
use food_dispatch::types::rating::{format_rating, parse_rating};
use food_dispatch::{DispatchEngine, DispatchError, EngineConfig};

fn print_restaurants(engine: &DispatchEngine) {
    println!("{:<5} {:<15} {:<8} {}", "ID", "Name", "Rating", "Location");
    for restaurant in engine.registry().iter() {
        println!(
            "{:<5} {:<15} {:<8} {}",
            restaurant.id,
            restaurant.name,
            format_rating(restaurant.rating),
            restaurant.location
        );
    }
}

fn print_riders(engine: &mut DispatchEngine) {
    println!("{:<10} {:<10} {}", "Name", "Location", "Deliveries Done");
    for rider in engine.ranked_rider_view() {
        println!("{:<10} {:<10} {}", rider.name, rider.location, rider.deliveries_completed);
    }
}

fn run() -> Result<(), DispatchError> {
    let mut engine = DispatchEngine::from_config(&EngineConfig::reference());

    println!("===========================================");
    println!("  Food Dispatch - Reference Scenario");
    println!("===========================================");
    println!();

    // Late additions arrive with ratings as text
    let late = [(104, "Karahi House", "3.9", 10), (105, "Nowhere", "n/a", 0)];
    for (id, name, rating, location) in late {
        match parse_rating(rating) {
            Some(rating) => {
                engine.register_restaurant(id, name, rating, location);
            }
            None => println!("Skipped {}: invalid rating {:?}", name, rating),
        }
    }
    print_restaurants(&engine);
    println!();

    for (restaurant_id, customer_location) in [(101, 7), (102, 1), (103, 9)] {
        let order_id = engine.submit_order(restaurant_id, customer_location)?;
        println!(
            "Order #{} queued (restaurant {}, customer @ {})",
            order_id, restaurant_id, customer_location
        );
    }

    if let Err(e) = engine.submit_order(999, 4) {
        println!("Rejected: {}", e);
    }
    println!();

    loop {
        match engine.process_next_order() {
            Ok(assignment) => {
                println!("Order #{} from {}", assignment.order_id, assignment.restaurant_name);
                println!("  Rider:         {}", assignment.rider_name);
                println!("  To restaurant: {}", assignment.distance_to_restaurant);
                println!("  To customer:   {}", assignment.distance_to_customer);
                println!("  Total:         {}", assignment.total_distance);
            }
            Err(DispatchError::EmptyQueue) => break,
            Err(e) => println!("  {}", e),
        }
    }
    println!();

    print_riders(&mut engine);
    println!();

    let entry = engine.undo_last_action()?;
    println!("Undid: {} (rider state is unchanged)", entry);
    println!("State root: {}", engine.state_root_hex()?);

    Ok(())
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
