use crate::heap::{HeapEngine, HeapMode};
use crate::Value;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Builds an engine and inserts `values` one at a time.
pub fn engine_with(mode: HeapMode, values: &[Value]) -> HeapEngine<Value> {
    let mut engine = HeapEngine::new(mode);
    for &value in values.iter() {
        engine.insert(value);
    }
    engine
}
