//! The activities feed: voice summaries and consultations merged into one
//! newest-first list.

use chrono::NaiveDate;

use crate::dates::calendar_date;
use crate::models::{Consultation, Customer, VoiceSummary};

pub const ACTIVITY_FEED_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Voice,
    Consultation,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Voice => "Voice summary",
            ActivityKind::Consultation => "Consultation",
        }
    }
}

/// One row of the feed, borrowing the record it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityEntry<'a> {
    Voice(&'a VoiceSummary),
    Consultation(&'a Consultation),
}

impl<'a> ActivityEntry<'a> {
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityEntry::Voice(_) => ActivityKind::Voice,
            ActivityEntry::Consultation(_) => ActivityKind::Consultation,
        }
    }

    pub fn id(&self) -> &'a str {
        match *self {
            ActivityEntry::Voice(voice) => &voice.id,
            ActivityEntry::Consultation(consultation) => &consultation.id,
        }
    }

    pub fn date(&self) -> &'a str {
        match *self {
            ActivityEntry::Voice(voice) => &voice.date,
            ActivityEntry::Consultation(consultation) => &consultation.date,
        }
    }

    pub fn summary(&self) -> &'a str {
        match *self {
            ActivityEntry::Voice(voice) => &voice.summary,
            ActivityEntry::Consultation(consultation) => &consultation.summary,
        }
    }

    /// Heading for the row: the meeting type for voice summaries.
    pub fn title(&self) -> &'a str {
        match *self {
            ActivityEntry::Voice(voice) => &voice.meeting_type,
            ActivityEntry::Consultation(_) => ActivityKind::Consultation.label(),
        }
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        calendar_date(self.date())
    }
}

/// Merge with the standard feed length.
pub fn merge_activities<'a>(
    voice_summaries: &'a [VoiceSummary],
    consultations: &'a [Consultation],
) -> Vec<ActivityEntry<'a>> {
    merge_activities_with_limit(voice_summaries, consultations, ACTIVITY_FEED_LIMIT)
}

/// Tag, concatenate (voice first), sort newest first and truncate.
///
/// The sort is stable, so entries sharing a date keep their input order.
/// Entries whose date does not parse sink to the end.
pub fn merge_activities_with_limit<'a>(
    voice_summaries: &'a [VoiceSummary],
    consultations: &'a [Consultation],
    limit: usize,
) -> Vec<ActivityEntry<'a>> {
    let mut keyed: Vec<(Option<NaiveDate>, ActivityEntry<'a>)> = voice_summaries
        .iter()
        .map(ActivityEntry::Voice)
        .chain(consultations.iter().map(ActivityEntry::Consultation))
        .map(|entry| (entry.calendar_date(), entry))
        .collect();

    // None < Some(_), so reversing the comparison leaves undated entries last.
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    keyed
        .into_iter()
        .take(limit)
        .map(|(_, entry)| entry)
        .collect()
}

impl Customer {
    pub fn activity_feed(&self) -> Vec<ActivityEntry<'_>> {
        merge_activities(&self.voice_summaries, &self.consultations)
    }

    /// Most recent date across voice summaries and consultations.
    pub fn latest_activity_date(&self) -> Option<NaiveDate> {
        self.voice_summaries
            .iter()
            .map(|voice| voice.date.as_str())
            .chain(self.consultations.iter().map(|c| c.date.as_str()))
            .filter_map(calendar_date)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn dates_and_kinds(feed: &[ActivityEntry<'_>]) -> Vec<(String, ActivityKind)> {
        feed.iter()
            .map(|entry| (entry.date().to_string(), entry.kind()))
            .collect()
    }

    #[test]
    fn interleaves_both_kinds_newest_first() {
        let voices = vec![
            fixtures::voice("v-1", "2024-01-01"),
            fixtures::voice("v-2", "2024-03-01"),
        ];
        let consultations = vec![fixtures::consultation("k-1", "2024-02-01")];

        let feed = merge_activities(&voices, &consultations);

        assert_eq!(
            dates_and_kinds(&feed),
            vec![
                ("2024-03-01".to_string(), ActivityKind::Voice),
                ("2024-02-01".to_string(), ActivityKind::Consultation),
                ("2024-01-01".to_string(), ActivityKind::Voice),
            ]
        );
    }

    #[test]
    fn keeps_only_the_ten_most_recent() {
        let voices: Vec<_> = (1..=8)
            .map(|day| fixtures::voice(&format!("v-{}", day), &format!("2024-01-{:02}", day)))
            .collect();
        let consultations: Vec<_> = (9..=15)
            .map(|day| fixtures::consultation(&format!("k-{}", day), &format!("2024-01-{:02}", day)))
            .collect();

        let feed = merge_activities(&voices, &consultations);

        assert_eq!(feed.len(), 10);
        assert_eq!(feed.first().map(|e| e.date()), Some("2024-01-15"));
        assert_eq!(feed.last().map(|e| e.date()), Some("2024-01-06"));
        assert!(feed.iter().all(|e| e.date() >= "2024-01-06"));
    }

    #[test]
    fn ties_keep_input_order() {
        let voices = vec![fixtures::voice("v-1", "2024-05-05")];
        let consultations = vec![
            fixtures::consultation("k-1", "2024-05-05"),
            fixtures::consultation("k-2", "2024-05-05T18:30:00Z"),
        ];

        let feed = merge_activities(&voices, &consultations);
        let ids: Vec<_> = feed.iter().map(|e| e.id()).collect();

        assert_eq!(ids, ["v-1", "k-1", "k-2"]);
    }

    #[test]
    fn unparseable_dates_sink_to_the_end() {
        let voices = vec![fixtures::voice("v-1", "sometime"), fixtures::voice("v-2", "2023-12-31")];
        let consultations = vec![fixtures::consultation("k-1", "2024-01-01")];

        let feed = merge_activities(&voices, &consultations);
        let ids: Vec<_> = feed.iter().map(|e| e.id()).collect();

        assert_eq!(ids, ["k-1", "v-2", "v-1"]);
    }

    #[test]
    fn feed_follows_the_current_inputs() {
        let mut customer = fixtures::customer("c-1");
        customer.voice_summaries = vec![fixtures::voice("v-1", "2024-01-01")];
        assert_eq!(customer.activity_feed().len(), 1);

        customer.consultations.push(fixtures::consultation("k-1", "2024-04-01"));
        let feed = customer.activity_feed();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].kind(), ActivityKind::Consultation);
        assert_eq!(feed[0].title(), "Consultation");
        assert_eq!(feed[1].title(), "Phone call");
    }

    #[test]
    fn latest_activity_date_spans_both_lists() {
        let mut customer = fixtures::customer("c-1");
        assert_eq!(customer.latest_activity_date(), None);

        customer.voice_summaries = vec![fixtures::voice("v-1", "2024-01-01")];
        customer.consultations = vec![fixtures::consultation("k-1", "2024-02-10")];
        assert_eq!(
            customer.latest_activity_date(),
            NaiveDate::from_ymd_opt(2024, 2, 10)
        );
    }
}
