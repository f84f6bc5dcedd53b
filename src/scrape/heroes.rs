// src/scrape/heroes.rs
use std::{
    any::Any,
    panic::{ self, AssertUnwindSafe },
    thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    config::consts::{ HEROES, JITTER_MS },
    config::options::{ PageSource, ScrapeOptions },
    core::{ DirLoader, HttpLoader, PageLoader },
    data::{ BatchReport, HeroRecord, SubjectFailure },
    error::{ Result, ScrapeError },
    progress::{ NullProgress, Progress },
    specs::hero,
};

pub fn list_heroes() -> Vec<&'static str> {
    HEROES.to_vec()
}

/// Build the page loader for `scrape.source` and collect every selected hero.
/// Only loader construction can fail; per-hero errors land in the report.
pub fn run(
    scrape: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<BatchReport> {
    let loader: Arc<dyn PageLoader> = match &scrape.source {
        PageSource::Remote { base_url } => Arc::new(HttpLoader::new(base_url)?),
        PageSource::Local(dir) => Arc::new(DirLoader::new(dir.clone())),
    };
    Ok(collect_heroes(scrape, loader, progress))
}

/// Fetch and extract the selected heroes on a small worker pool.
/// A failing hero is reported and skipped; the others still come through.
pub fn collect_heroes(
    scrape: &ScrapeOptions,
    loader: Arc<dyn PageLoader>,
    progress: Option<&mut dyn Progress>,
) -> BatchReport {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let heroes = scrape.heroes.resolve();

    progress.begin(heroes.len());
    if heroes.is_empty() {
        progress.log("No heroes selected.");
        progress.finish();
        return BatchReport::default();
    }
    log::info!("Scraping {} heroes with {} workers", heroes.len(), scrape.workers.max(1));

    // Concurrency
    type Outcome = (usize, Result<HeroRecord>);

    let heroes = Arc::new(heroes);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Outcome>();

    let workers = scrape.workers.min(heroes.len()).max(1);
    let pause_ms = scrape.pause_ms;

    // Spawn workers
    let mut handles = Vec::with_capacity(workers);

    for _ in 0..workers {
        let heroes = Arc::clone(&heroes);
        let idx = Arc::clone(&counter);
        let loader = Arc::clone(&loader);
        let tx = res_tx.clone();

        handles.push(thread::spawn(
            move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= heroes.len() {
                        break;
                    }
                    let result = panic::catch_unwind(AssertUnwindSafe(|| {
                        hero::fetch_and_extract(loader.as_ref(), &heroes[i])
                    }))
                    .unwrap_or_else(|payload| {
                        Err(ScrapeError::WorkerPanic(panic_message(payload.as_ref())))
                    });

                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    if pause_ms > 0 {
                        let jitter = (i as u64) % JITTER_MS;
                        thread::sleep(Duration::from_millis(pause_ms + jitter)); // be polite
                    }
                }
            }
        ));
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut report = BatchReport::default();
    let mut failed: Vec<(usize, SubjectFailure)> = Vec::new();
    let mut seen = vec![false; heroes.len()];

    for (i, result) in res_rx {
        seen[i] = true;
        match result {
            Ok(record) => {
                report.dataset.insert(heroes[i].clone(), record);
                progress.item_done(&heroes[i]);
            }
            Err(e) => failed.push((i, fail(&heroes[i], e, progress))),
        }
    }

    for h in handles {
        if h.join().is_err() {
            log::error!("scrape worker exited abnormally");
        }
    }

    // Anything a dead worker claimed but never reported
    for i in (0..heroes.len()).filter(|&i| !seen[i]) {
        let e = ScrapeError::WorkerPanic(s!("no result from worker"));
        failed.push((i, fail(&heroes[i], e, progress)));
    }

    // Report failures in request order
    failed.sort_by_key(|(i, _)| *i);
    report.failures = failed.into_iter().map(|(_, f)| f).collect();

    progress.finish();
    log::info!(
        "Scrape done: {} ok, {} failed",
        report.dataset.len(),
        report.failures.len()
    );
    report
}

fn fail(name: &str, e: ScrapeError, progress: &mut dyn Progress) -> SubjectFailure {
    log::error!("{name}: {e}");
    progress.item_failed(name, &e);
    SubjectFailure::new(name, &e)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s!(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        s!("unknown panic")
    }
}
