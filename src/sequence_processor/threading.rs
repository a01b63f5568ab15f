use anyhow::{Context, Result};
use crossbeam_channel::{bounded, unbounded};
use std::path::{Path, PathBuf};
use std::thread;

/// Run `work` over every path on up to `num_threads` workers.
///
/// Each path is handled by exactly one worker, so per-file state never
/// crosses threads. Results come back in the order of `paths`; if any file
/// fails, the error of the earliest failing path is returned.
pub fn process_files<T, F>(paths: &[PathBuf], num_threads: usize, work: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&Path) -> Result<T> + Sync,
{
    let num_threads = num_threads.clamp(1, paths.len().max(1));
    let (job_tx, job_rx) = bounded::<(usize, &Path)>(num_threads * 2);
    let (result_tx, result_rx) = unbounded::<(usize, Result<T>)>();

    thread::scope(|scope| {
        for _ in 0..num_threads {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            let work = &work;
            scope.spawn(move || {
                while let Ok((idx, path)) = job_rx.recv() {
                    let result =
                        work(path).with_context(|| format!("Failed to process {}", path.display()));
                    if result_tx.send((idx, result)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(job_rx);
        drop(result_tx);

        for (idx, path) in paths.iter().enumerate() {
            if job_tx.send((idx, path.as_path())).is_err() {
                break;
            }
        }
        drop(job_tx);
    });

    let mut slots: Vec<Option<T>> = (0..paths.len()).map(|_| None).collect();
    let mut first_error: Option<(usize, anyhow::Error)> = None;

    for (idx, result) in result_rx.iter() {
        match result {
            Ok(value) => slots[idx] = Some(value),
            Err(e) => {
                if first_error.as_ref().map_or(true, |(first, _)| idx < *first) {
                    first_error = Some((idx, e));
                }
            }
        }
    }

    if let Some((_, e)) = first_error {
        return Err(e);
    }

    slots
        .into_iter()
        .zip(paths)
        .map(|(slot, path)| slot.with_context(|| format!("No result for {}", path.display())))
        .collect()
}
