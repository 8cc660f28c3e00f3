//! Example demonstrating typed environment variable lookup

use std::time::Duration;

fn main() {
    std::env::set_var("EXPIRES_IN", "1h");

    // Absent variables convert the empty string, so optional targets stay
    // None instead of erroring.
    let expires_in: Option<Vec<Duration>> = strparse_env::get("EXPIRES_IN");
    println!("EXPIRES_IN: {expires_in:?}");

    let retries: u32 = strparse_env::get_or("RETRIES", "3");
    println!("RETRIES: {retries}");

    let endpoint = strparse_env::get_string_or("ENDPOINT", "127.0.0.1:8080");
    println!("ENDPOINT: {endpoint}");
}
