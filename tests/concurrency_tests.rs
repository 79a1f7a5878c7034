mod common;

use common::TestResult;
use mosaic::{DispatchCache, Marshaller, TypeDescriptor};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

#[derive(Serialize, Clone)]
struct Reading {
    sensor: String,
    value: f64,
    flags: Vec<bool>,
    history: BTreeMap<u8, Vec<i32>>,
}

fn readings(count: usize) -> Vec<Reading> {
    (0..count)
        .map(|i| Reading {
            sensor: format!("s{}", i),
            value: (i as f64 / count as f64) - 0.5,
            flags: (0..i % 5).map(|j| j % 2 == 0).collect(),
            history: (0..i as u8 % 4).map(|k| (k, vec![k as i32 - 2; k as usize])).collect(),
        })
        .collect()
}

#[test]
fn test_parallel_threads_match_sequential() -> TestResult {
    let data = readings(12);
    let sequential: Vec<Vec<u8>> = data
        .iter()
        .map(|r| Marshaller::new().with_cache(Default::default()).marshal(r, 240.0))
        .collect::<Result<_, _>>()?;

    let cache = Arc::new(DispatchCache::new());
    let marshaller = Marshaller::new().with_cache(Arc::clone(&cache));
    let data = Arc::new(data);
    let handles: Vec<_> = (0..data.len())
        .map(|i| {
            let marshaller = marshaller.clone();
            let data = Arc::clone(&data);
            thread::spawn(move || marshaller.marshal(&data[i], 240.0).map_err(|e| e.to_string()))
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(&sequential) {
        let bytes = handle.join().expect("worker panicked")?;
        assert_eq!(&bytes, expected);
    }

    assert!(cache.contains(&TypeDescriptor::Record("Reading".into())));
    assert!(cache.contains(&TypeDescriptor::Mapping));
    Ok(())
}

#[test]
fn test_batch_preserves_input_order() -> TestResult {
    let data = readings(20);
    let marshaller = Marshaller::new().with_cache(Default::default());

    let batch = marshaller.marshal_batch(&data, 120.0);
    assert_eq!(batch.len(), data.len());
    for (result, reading) in batch.into_iter().zip(&data) {
        assert_eq!(result?, marshaller.marshal(reading, 120.0)?);
    }
    Ok(())
}

#[test]
fn test_batch_reports_failures_individually() {
    let data = vec![Some(1.0f64), Some(f64::NAN), None];
    let results = Marshaller::new().marshal_batch(&data, 50.0);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());
}
