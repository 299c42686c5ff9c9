pub mod holiday {
    /// Cron expression for the public holiday import
    /// Runs every 6 hours at the top of the hour (00:00, 06:00, 12:00, 18:00)
    pub const CRON_EXPRESSION: &str = "0 0 */6 * * *";

    /// Import once at startup so a fresh database is populated without waiting for the
    /// first tick
    pub const RUN_AT_STARTUP: bool = true;
}
