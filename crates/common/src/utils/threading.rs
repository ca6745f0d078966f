use crossbeam_channel::unbounded;

use std::{sync::Arc, thread};

/// A simple thread pool implementation that takes a vector of items, splits them into chunks, and
/// processes each chunk in a separate thread. Results are returned in the order of `items`,
/// regardless of which thread finishes first.
///
/// ```
/// use stowage_common::utils::threading::task_pool;
///
/// let items = vec![1, 2, 3, 4, 5];
/// let num_threads = 2;
/// let results = task_pool(items, num_threads, |item| item * 2);
///
/// assert_eq!(results, vec![2, 4, 6, 8, 10]);
/// ```
pub fn task_pool<
    T: Clone + Send + Sync + 'static,
    R: Send + 'static,
    F: Fn(T) -> R + Send + Sync + 'static,
>(
    items: Vec<T>,
    num_threads: usize,
    f: F,
) -> Vec<R> {
    // if items is empty, return empty results
    if items.is_empty() {
        return Vec::new();
    }

    // a single thread needs no pool at all
    let num_threads = num_threads.max(1);
    if num_threads == 1 {
        return items.into_iter().map(f).collect();
    }

    let (tx, rx) = unbounded();
    let mut handles = Vec::new();

    // Split items into chunks for each thread to process
    let chunk_size = items.len().div_ceil(num_threads);
    let chunks = items.chunks(chunk_size);
    let chunk_count = chunks.len();

    // Share ownership of f across threads with Arc
    let shared_f = Arc::new(f);

    for (chunk_index, chunk) in chunks.enumerate() {
        let chunk = chunk.to_owned();
        let tx = tx.clone();
        let shared_f = Arc::clone(&shared_f);
        let handle = thread::spawn(move || {
            let chunk_results: Vec<R> = chunk.into_iter().map(|item| shared_f(item)).collect();
            let _ = tx.send((chunk_index, chunk_results));
        });
        handles.push(handle);
    }
    drop(tx);

    // Slot each chunk back into its original position
    let mut ordered: Vec<Option<Vec<R>>> = (0..chunk_count).map(|_| None).collect();
    for (chunk_index, chunk_results) in rx.iter() {
        ordered[chunk_index] = Some(chunk_results);
    }

    // Wait for all threads to finish. A panicked worker would leave a hole in the results, so
    // the panic is re-raised on the calling thread instead.
    for handle in handles {
        if let Err(panic) = handle.join() {
            std::panic::resume_unwind(panic);
        }
    }

    ordered.into_iter().flatten().flatten().collect()
}
