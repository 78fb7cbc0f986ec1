// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeMap;

use time::{Duration, OffsetDateTime, Time};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoticeKind {
    ExitIntentPopup,
    WelcomeNotification,
    OfferBanner,
    ActivityFeed,
}

/// How long a notice stays suppressed once it has been shown or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    Session,
    RestOfDay,
}

impl NoticeKind {
    pub const ALL: [Self; 4] = [
        Self::ExitIntentPopup,
        Self::WelcomeNotification,
        Self::OfferBanner,
        Self::ActivityFeed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExitIntentPopup => "exit_popup_shown",
            Self::WelcomeNotification => "notification_seen",
            Self::OfferBanner => "offer_banner_closed",
            Self::ActivityFeed => "activity_feed_seen",
        }
    }

    pub const fn suppression(self) -> Suppression {
        match self {
            Self::OfferBanner => Suppression::RestOfDay,
            Self::ExitIntentPopup | Self::WelcomeNotification | Self::ActivityFeed => {
                Suppression::Session
            }
        }
    }

    /// Time on page before the notice may appear. The exit popup is armed
    /// after this delay and shows on the next exit gesture.
    pub const fn show_delay(self) -> Duration {
        match self {
            Self::ExitIntentPopup | Self::OfferBanner => Duration::seconds(5),
            Self::WelcomeNotification => Duration::seconds(3),
            Self::ActivityFeed => Duration::seconds(10),
        }
    }

    pub const fn hide_after(self) -> Option<Duration> {
        match self {
            Self::ActivityFeed => Some(Duration::seconds(40)),
            Self::ExitIntentPopup | Self::WelcomeNotification | Self::OfferBanner => None,
        }
    }
}

pub const ACTIVITY_ROTATION: Duration = Duration::seconds(8);
pub const OFFER_COUNTDOWN: Duration = Duration::hours(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expiry {
    EndOfSession,
    At(OffsetDateTime),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVisibility {
    Suppressed,
    Pending,
    Visible,
    Expired,
}

/// Per-visitor record of which notices were shown or dismissed, with an
/// explicit expiry for each. Owned by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeLedger {
    entries: BTreeMap<NoticeKind, Expiry>,
}

impl NoticeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a notice as shown (or closed, for the offer banner) at `now`.
    pub fn record(&mut self, kind: NoticeKind, now: OffsetDateTime) {
        let expiry = match kind.suppression() {
            Suppression::Session => Expiry::EndOfSession,
            Suppression::RestOfDay => Expiry::At(next_midnight(now)),
        };
        self.entries.insert(kind, expiry);
    }

    pub fn is_suppressed(&self, kind: NoticeKind, now: OffsetDateTime) -> bool {
        match self.entries.get(&kind) {
            Some(Expiry::EndOfSession) => true,
            Some(Expiry::At(expires_at)) => now < *expires_at,
            None => false,
        }
    }

    pub fn expires_at(&self, kind: NoticeKind) -> Option<OffsetDateTime> {
        match self.entries.get(&kind) {
            Some(Expiry::At(expires_at)) => Some(*expires_at),
            Some(Expiry::EndOfSession) | None => None,
        }
    }

    /// Drops session-scoped flags; day-scoped flags outlive the session.
    pub fn end_session(&mut self) {
        self.entries
            .retain(|_, expiry| !matches!(expiry, Expiry::EndOfSession));
    }

    pub fn prune(&mut self, now: OffsetDateTime) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, expiry| match expiry {
            Expiry::EndOfSession => true,
            Expiry::At(expires_at) => now < *expires_at,
        });
        before - self.entries.len()
    }

    /// `elapsed` is time on page since the visit started.
    pub fn visibility(
        &self,
        kind: NoticeKind,
        elapsed: Duration,
        now: OffsetDateTime,
    ) -> NoticeVisibility {
        if self.is_suppressed(kind, now) {
            return NoticeVisibility::Suppressed;
        }
        if elapsed < kind.show_delay() {
            return NoticeVisibility::Pending;
        }
        if let Some(hide_after) = kind.hide_after()
            && elapsed >= hide_after
        {
            return NoticeVisibility::Expired;
        }
        NoticeVisibility::Visible
    }
}

/// Index of the activity item on screen `elapsed` into the visit, or `None`
/// while the feed is hidden.
pub fn activity_feed_slot(elapsed: Duration, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let kind = NoticeKind::ActivityFeed;
    if elapsed < kind.show_delay() {
        return None;
    }
    if let Some(hide_after) = kind.hide_after()
        && elapsed >= hide_after
    {
        return None;
    }
    let ticks = elapsed.whole_seconds() / ACTIVITY_ROTATION.whole_seconds();
    Some(ticks.rem_euclid(len as i64) as usize)
}

/// Seconds left on the offer countdown, floored at zero.
pub fn offer_seconds_left(elapsed: Duration) -> i64 {
    (OFFER_COUNTDOWN - elapsed).whole_seconds().max(0)
}

fn next_midnight(now: OffsetDateTime) -> OffsetDateTime {
    now.replace_time(Time::MIDNIGHT) + Duration::days(1)
}
