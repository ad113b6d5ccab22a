use lcg_core::model::format::{render_errors, render_table, summary};
use lcg_core::{generate, Panel, RawInput, Variant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see the derived parameters
    env_logger::init();

    // Mixed generator: seed X₀ = 7, k = 1 (a = 1 + 4k), c = 3, p = 5 values, D = 2 decimals
    let linear = generate(&RawInput::linear("7", "1", "3", "5", "2"), Variant::Linear)?;
    println!("{}", summary(&linear));
    println!("{}", linear.note);
    println!("{}", render_table(&linear));

    // Multiplicative generator with a = 3 + 8k
    // The seed must be odd, the period is 2^(g-2)
    let multiplicative = generate(&RawInput::multiplicative("5", "0", "3", "4"), Variant::MultiplicativeA)?;
    println!("{}", summary(&multiplicative));
    println!("{}", multiplicative.note);
    println!("{}", render_table(&multiplicative));

    // Every malformed field is reported at once
    match generate(&RawInput::linear("-7", "k", "3", "0", "20"), Variant::Linear) {
        Ok(_) => println!("Should not happen"),
        Err(e) => print!("{}", render_errors(&e.messages())),
    }

    // Number theory checks stop at the first failure
    match generate(&RawInput::linear("7", "1", "9", "5", "2"), Variant::Linear) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("c = 9 is rejected: {}", e),
    }

    // A panel keeps the last outcome until it is cleared
    let mut panel = Panel::new(Variant::MultiplicativeB);
    if let Err(e) = panel.generate(&RawInput::multiplicative("4", "1", "10", "3")) {
        println!("Even seed: {}", e);
    }
    let rows = panel.generate(&RawInput::multiplicative("9", "1", "10", "3"))?.rows.len();
    println!("a = 5 + 8k, p = 10: {} rows", rows);
    panel.clear();
    println!("Panel empty after clear: {}", panel.is_empty());

    // Above the row cap of 8192
    if let Err(e) = generate(&RawInput::multiplicative("1", "0", "9000", "2"), Variant::MultiplicativeA) {
        println!("{}", e);
    }

    Ok(())
}
