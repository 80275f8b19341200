//! Greet capability - turns `{"name": ...}` into `{"greeting": ...}`.

use greet::{greet, GreetInput, GreetOutput};

fn main() {
    capability_common::run(|input: GreetInput| {
        Ok(GreetOutput {
            greeting: greet(&input.name),
        })
    });
}
