//! Working with Value graphs at runtime.
//!
//! Run with: cargo run --example dynamic_values

use ocular::{inspect, to_value, value, Value};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build config dynamically with the value! macro
    let config = value!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Config: {}\n", inspect(&config));

    // Access fields dynamically
    if let Value::Object(obj) = &config {
        if let Some(Value::String(host)) = obj.get("host") {
            println!("Accessing field 'host': {host}");
        }
        if let Some(Value::Number(port)) = obj.get("port") {
            println!("Accessing field 'port': {port}");
        }
    }

    // Convert an existing struct to a Value
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let user_value = to_value(&user)?;
    println!("\nUser: {}", inspect(&user_value));

    // Cycles are labeled, not followed
    let node = value!({ "name": "root" });
    if let Value::Object(handle) = &node {
        handle.set("parent", node.clone());
    }
    println!("Cyclic: {}", inspect(&node));

    Ok(())
}
