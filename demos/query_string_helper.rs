/// `QueryStringHelper` usage example
///
/// Run with `RUST_LOG=qsh=trace` to see which instructions were ignored.
use qsh::{QueryString, QueryStringHelper};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let qs = QueryStringHelper::new();
    let query = "q=san+francisco&page=2&sort=price&sort=rating";

    // Inspect the parsed state
    let parsed = QueryString::parse(query);
    for entry in parsed.iter() {
        println!("  #{} {} = {}", entry.index(), entry.key(), entry.value());
    }
    println!();

    // Replace every `sort` with a new one
    let resorted = qs.remove_all_and_add(Some(query), ["sort"], [("sort", "distance")]);
    println!("Re-sorted: {resorted}"); // q=san%20francisco&page=2&sort=distance

    // Drop the second `sort` only; index 7 does not exist and is ignored
    let trimmed = qs.remove_nth_and_add(Some(query), [("sort", [1, 7])], [("view", "map")]);
    println!("Trimmed: {trimmed}"); // q=san%20francisco&page=2&sort=price&view=map

    // Pagination links
    let next = qs.adjust_first_numeric_value_by(Some(query), "page", 1);
    let previous = qs.adjust_first_numeric_value_by(Some(query), "page", -1);
    println!("Next: {next}"); // q=san%20francisco&page=3&sort=price&sort=rating
    println!("Previous: {previous}"); // q=san%20francisco&page=1&sort=price&sort=rating
}
