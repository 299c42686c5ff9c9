//! Scheduler for periodic background jobs.
//!
//! Wraps a cron based [`JobScheduler`]. Every job is guarded so that at most one run of
//! it is in flight: a tick arriving while the previous run is still going is skipped and
//! logged.

use std::{future::Future, sync::Arc};

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, service::holiday::HolidayService};

pub mod config;

use self::config::holiday as holiday_config;

/// Shared resources handed to every job run
#[derive(Clone)]
pub struct JobContext {
    pub db: DatabaseConnection,
    pub http_client: reqwest::Client,
    pub holiday_feed_url: String,
}

/// Job scheduler for background tasks.
pub struct Scheduler {
    context: JobContext,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(context: JobContext) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;

        Ok(Self { context, sched })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// The following jobs are registered:
    /// - Public holiday import
    ///
    /// # Returns
    /// - `Ok(())` - All jobs successfully registered and scheduler started
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            holiday_config::CRON_EXPRESSION,
            "public holiday import",
            holiday_config::RUN_AT_STARTUP,
            sync_holidays,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The function receives a clone of the [`JobContext`] and returns the number of
    /// records it changed, which is logged together with any error.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run (e.g., "0 0 * * * *" for hourly)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `run_at_startup` - Also run the job once immediately, sharing the overlap guard
    /// - `function` - Async function performing the job
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Failed to create or add the job (invalid cron expression or scheduler error)
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        run_at_startup: bool,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(JobContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let job = Arc::new(GuardedJob::new(name, self.context.clone(), function));

        if run_at_startup {
            let job = Arc::clone(&job);
            tokio::spawn(async move { job.run().await });
        }

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let job = Arc::clone(&job);

                Box::pin(async move {
                    job.run().await;
                })
            })?)
            .await?;

        Ok(())
    }
}

/// A job function with a guard preventing overlapping runs
struct GuardedJob<F> {
    name: String,
    context: JobContext,
    function: F,
    running: Mutex<()>,
}

impl<F, Fut> GuardedJob<F>
where
    F: Fn(JobContext) -> Fut,
    Fut: Future<Output = Result<usize, Error>>,
{
    fn new(name: &str, context: JobContext, function: F) -> Self {
        Self {
            name: name.to_string(),
            context,
            function,
            running: Mutex::new(()),
        }
    }

    /// Runs the job unless a previous run is still in flight.
    ///
    /// Returns `false` when the run was skipped.
    async fn run(&self) -> bool {
        let Ok(_guard) = self.running.try_lock() else {
            tracing::warn!("Skipping {} run, previous run still in progress", self.name);

            return false;
        };

        match (self.function)(self.context.clone()).await {
            Ok(count) => {
                tracing::debug!("Completed {} run, {} record(s) changed", self.name, count)
            }
            Err(e) => tracing::error!("Error running {}: {:?}", self.name, e),
        }

        true
    }
}

async fn sync_holidays(context: JobContext) -> Result<usize, Error> {
    let holiday_service =
        HolidayService::new(&context.db, &context.http_client, &context.holiday_feed_url);
    let summary = holiday_service.sync().await?;

    Ok(summary.created)
}
