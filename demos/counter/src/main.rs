//! Counter Demo
//!
//! Exercises a store with the classic counter reducer: two hardcoded
//! dispatches, state printed after each. Illustrative only; nothing here is
//! part of the reusable core's contract.

use reflow_core::{Action, Store};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy)]
enum CounterAction {
    Init,
    Increment,
    Decrement,
}

impl Action for CounterAction {
    fn kind(&self) -> &str {
        match self {
            CounterAction::Init => "INIT",
            CounterAction::Increment => "INCREMENT",
            CounterAction::Decrement => "DECREMENT",
        }
    }
}

fn counter(state: Option<&i64>, action: &CounterAction) -> i64 {
    let state = state.copied().unwrap_or(0);
    match action {
        CounterAction::Increment => state + 1,
        CounterAction::Decrement => state - 1,
        CounterAction::Init => state,
    }
}

fn main() -> Result<(), reflow_core::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Reflow Counter Demo ===\n");

    let store = Store::new(counter, CounterAction::Init)?;
    println!("Default: {}", store.get_state());

    let subscription = store.subscribe({
        let store = store.clone();
        move || println!("  listener saw state {}", store.get_state())
    });

    store.dispatch(CounterAction::Increment)?;
    println!("After dispatching increment action: {}", store.get_state());

    store.dispatch(CounterAction::Decrement)?;
    println!("After dispatching decrement action: {}", store.get_state());

    subscription.unsubscribe();
    Ok(())
}
