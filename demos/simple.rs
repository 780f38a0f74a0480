//! Basic inspection of values built with the value! macro.
//!
//! Run with: cargo run --example simple

use ocular::{inspect, value};

fn main() {
    let user = value!({
        "id": 123,
        "name": "Alice",
        "roles": ["admin", "developer"],
        "active": true
    });

    println!("{}", inspect(&user));

    let numbers = value!([1, 2, 3, 4, 5]);
    println!("{}", inspect(&numbers));

    let nested = value!({
        "servers": [
            { "host": "a.internal", "port": 8080 },
            { "host": "b.internal", "port": 8081 }
        ]
    });
    println!("{}", inspect(&nested));
}
