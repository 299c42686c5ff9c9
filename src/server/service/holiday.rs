use chrono::{NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        event::{EventRepository, NewEvent},
        user::UserRepository,
    },
    error::Error,
    model::holiday::{HolidayFeed, SyncSummary},
    service::event::NO_RECURRENCE,
    util::time::DATE_FORMAT,
};

/// Username of the account owning imported holidays.
pub const HOLIDAY_BOT_USERNAME: &str = "bank-holiday-bot";
/// Role of the account owning imported holidays.
pub const HOLIDAY_BOT_ROLE: &str = "bot";
/// Event type of imported holidays.
pub const HOLIDAY_EVENT_TYPE: &str = "bank_holiday";

/// Imports public holidays from the holiday feed
///
/// Each holiday becomes an all day event owned by the holiday bot. Holidays are keyed by
/// event type and start date, so repeated runs over the same feed insert nothing new.
pub struct HolidayService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    feed_url: &'a str,
}

impl<'a> HolidayService<'a> {
    /// Creates a new instance of [`HolidayService`]
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        feed_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            feed_url,
        }
    }

    /// Fetches and decodes the holiday feed
    ///
    /// # Returns
    /// - `Ok(HolidayFeed)` - Decoded feed
    /// - `Err(Error::HttpError)` - Request failed, non-success status, or undecodable body
    pub async fn fetch_feed(&self) -> Result<HolidayFeed, Error> {
        let feed = self
            .http_client
            .get(self.feed_url)
            .send()
            .await?
            .error_for_status()?
            .json::<HolidayFeed>()
            .await?;

        Ok(feed)
    }

    /// Fetches the feed and inserts every holiday not yet stored
    ///
    /// Entries with an unparseable date are logged and skipped, the rest of the feed is
    /// still imported.
    pub async fn sync(&self) -> Result<SyncSummary, Error> {
        let feed = self.fetch_feed().await?;
        let entries = feed.england_and_wales.events;

        let mut summary = SyncSummary {
            fetched: entries.len(),
            ..Default::default()
        };

        let bot = UserRepository::new(self.db)
            .get_or_create(HOLIDAY_BOT_USERNAME, HOLIDAY_BOT_ROLE)
            .await?;
        let event_repo = EventRepository::new(self.db);

        for entry in entries {
            let date = match NaiveDate::parse_from_str(&entry.date, DATE_FORMAT) {
                Ok(date) => date,
                Err(e) => {
                    tracing::warn!(
                        title = %entry.title,
                        date = %entry.date,
                        "Skipping holiday with unparseable date: {}",
                        e
                    );
                    summary.skipped += 1;

                    continue;
                }
            };

            let (_, created) = event_repo
                .get_or_create_by_type_and_start(NewEvent {
                    event_type: HOLIDAY_EVENT_TYPE.to_string(),
                    title: entry.title,
                    start_date: date.and_time(NaiveTime::MIN),
                    end_date: None,
                    all_day: true,
                    recurring_type: NO_RECURRENCE.to_string(),
                    recurring_interval: 0,
                    user_id: Some(bot.id),
                })
                .await?;

            if created {
                summary.created += 1;
            }
        }

        tracing::info!(
            fetched = %summary.fetched,
            skipped = %summary.skipped,
            created = %summary.created,
            "Synced public holidays"
        );

        Ok(summary)
    }
}
