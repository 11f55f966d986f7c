//! What the card and the detail summary tab show for a customer.
//!
//! The rule throughout is "prefer the API value, otherwise fall back to what
//! we can compute locally", expressed as a coalesce over `Option` so that a
//! real count of zero is still shown as zero.

use crate::models::{Customer, Task, VoiceSummary};

pub const SUMMARY_VOICE_LIMIT: usize = 3;
pub const SUMMARY_KEY_POINT_LIMIT: usize = 2;
pub const SUMMARY_TASK_LIMIT: usize = 5;

/// `real ?? fallback`. Never a sum.
pub fn coalesce(real: Option<u32>, fallback: u32) -> u32 {
    real.unwrap_or(fallback)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCounters {
    pub consults: u32,
    pub actions: u32,
    pub pending: u32,
}

/// The API counters exactly as received. Shown alongside `latest_voice` in
/// the detail summary, where they are not coalesced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealCounters {
    pub consults: Option<u32>,
    pub actions: Option<u32>,
    pub pending: Option<u32>,
}

/// The single snippet previewed on a customer card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewSnippet<'a> {
    RecentConsultation(&'a str),
    RecentVoiceSummary(&'a VoiceSummary),
    Empty,
}

impl PreviewSnippet<'_> {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            PreviewSnippet::RecentConsultation(_) => Some("Recent consultation"),
            PreviewSnippet::RecentVoiceSummary(_) => Some("Recent voice summary"),
            PreviewSnippet::Empty => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            PreviewSnippet::RecentConsultation(text) => Some(*text),
            PreviewSnippet::RecentVoiceSummary(voice) => Some(voice.summary.as_str()),
            PreviewSnippet::Empty => None,
        }
    }
}

/// Upper half of the detail summary tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryOverview<'a> {
    /// `latest_voice` is set: show it with the real counters verbatim.
    Api {
        latest_voice: &'a str,
        counters: RealCounters,
    },
    /// No override: the first few voice summaries.
    Local { voice_summaries: &'a [VoiceSummary] },
}

impl Customer {
    pub fn display_counters(&self) -> DisplayCounters {
        DisplayCounters {
            consults: coalesce(self.real_consult_count, self.voice_summaries.len() as u32),
            actions: coalesce(self.real_action_count, self.total_activities),
            pending: coalesce(self.real_pending_count, self.pending_tasks),
        }
    }

    pub fn real_counters(&self) -> RealCounters {
        RealCounters {
            consults: self.real_consult_count,
            actions: self.real_action_count,
            pending: self.real_pending_count,
        }
    }

    /// `latest_voice`, treating only an empty string as absent.
    pub fn latest_voice_text(&self) -> Option<&str> {
        self.latest_voice.as_deref().filter(|text| !text.is_empty())
    }

    pub fn preview(&self) -> PreviewSnippet<'_> {
        if let Some(text) = self.latest_voice_text() {
            return PreviewSnippet::RecentConsultation(text);
        }
        match self.voice_summaries.first() {
            Some(voice) => PreviewSnippet::RecentVoiceSummary(voice),
            None => PreviewSnippet::Empty,
        }
    }

    pub fn summary_overview(&self) -> SummaryOverview<'_> {
        match self.latest_voice_text() {
            Some(latest_voice) => SummaryOverview::Api {
                latest_voice,
                counters: self.real_counters(),
            },
            None => {
                let end = self.voice_summaries.len().min(SUMMARY_VOICE_LIMIT);
                SummaryOverview::Local {
                    voice_summaries: &self.voice_summaries[..end],
                }
            }
        }
    }

    pub fn summary_tasks(&self) -> &[Task] {
        &self.tasks[..self.tasks.len().min(SUMMARY_TASK_LIMIT)]
    }
}

impl VoiceSummary {
    pub fn summary_key_points(&self) -> &[String] {
        &self.key_points[..self.key_points.len().min(SUMMARY_KEY_POINT_LIMIT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn counters_fall_back_to_local_totals() {
        let mut customer = fixtures::customer("c-1");
        customer.voice_summaries = vec![
            fixtures::voice("v-1", "2024-01-01"),
            fixtures::voice("v-2", "2024-01-02"),
        ];
        customer.total_activities = 7;
        customer.pending_tasks = 3;

        assert_eq!(
            customer.display_counters(),
            DisplayCounters { consults: 2, actions: 7, pending: 3 }
        );
    }

    #[test]
    fn real_counters_win_and_are_not_summed() {
        let mut customer = fixtures::customer("c-1");
        customer.voice_summaries = vec![fixtures::voice("v-1", "2024-01-01")];
        customer.total_activities = 7;
        customer.pending_tasks = 3;
        customer.real_consult_count = Some(12);
        customer.real_action_count = Some(4);
        customer.real_pending_count = Some(9);

        assert_eq!(
            customer.display_counters(),
            DisplayCounters { consults: 12, actions: 4, pending: 9 }
        );
    }

    #[test]
    fn real_zero_is_still_authoritative() {
        let mut customer = fixtures::customer("c-1");
        customer.voice_summaries = vec![fixtures::voice("v-1", "2024-01-01")];
        customer.pending_tasks = 5;
        customer.real_consult_count = Some(0);
        customer.real_pending_count = Some(0);

        let counters = customer.display_counters();
        assert_eq!(counters.consults, 0);
        assert_eq!(counters.pending, 0);
    }

    #[test]
    fn latest_voice_shadows_voice_summaries() {
        let mut customer = fixtures::customer("c-1");
        customer.voice_summaries = vec![fixtures::voice("v-1", "2024-01-01")];
        customer.latest_voice = Some("Wants a quote by Friday".to_string());

        let preview = customer.preview();
        assert_eq!(preview, PreviewSnippet::RecentConsultation("Wants a quote by Friday"));
        assert_eq!(preview.label(), Some("Recent consultation"));
        assert_eq!(preview.text(), Some("Wants a quote by Friday"));
    }

    #[test]
    fn first_voice_summary_is_previewed_without_latest_voice() {
        let mut customer = fixtures::customer("c-1");
        customer.voice_summaries = vec![
            fixtures::voice("v-1", "2024-01-01"),
            fixtures::voice("v-2", "2024-02-01"),
        ];

        match customer.preview() {
            PreviewSnippet::RecentVoiceSummary(voice) => assert_eq!(voice.id, "v-1"),
            other => panic!("unexpected preview {:?}", other),
        }
    }

    #[test]
    fn empty_latest_voice_counts_as_absent() {
        let mut customer = fixtures::customer("c-1");
        customer.latest_voice = Some(String::new());
        assert_eq!(customer.preview(), PreviewSnippet::Empty);
        assert_eq!(customer.preview().label(), None);
    }

    #[test]
    fn whitespace_latest_voice_is_still_shown() {
        let mut customer = fixtures::customer("c-1");
        customer.voice_summaries = vec![fixtures::voice("v-1", "2024-01-01")];
        customer.latest_voice = Some("  ".to_string());

        let preview = customer.preview();
        assert_eq!(preview.label(), Some("Recent consultation"));
        assert_eq!(preview.text(), Some("  "));
        assert!(matches!(customer.summary_overview(), SummaryOverview::Api { latest_voice: "  ", .. }));
    }

    #[test]
    fn summary_overview_uses_real_counters_verbatim() {
        let mut customer = fixtures::customer("c-1");
        customer.latest_voice = Some("Follow-up booked".to_string());
        customer.real_action_count = Some(2);
        customer.pending_tasks = 4;

        assert_eq!(
            customer.summary_overview(),
            SummaryOverview::Api {
                latest_voice: "Follow-up booked",
                counters: RealCounters { consults: None, actions: Some(2), pending: None },
            }
        );
    }

    #[test]
    fn summary_overview_truncates_local_lists() {
        let mut customer = fixtures::customer("c-1");
        customer.voice_summaries = (0..5)
            .map(|i| {
                let mut voice = fixtures::voice(&format!("v-{}", i), "2024-01-01");
                voice.key_points = vec!["a".into(), "b".into(), "c".into()];
                voice
            })
            .collect();
        customer.tasks = (0..8).map(|i| fixtures::task(&format!("t-{}", i), false)).collect();

        match customer.summary_overview() {
            SummaryOverview::Local { voice_summaries } => {
                assert_eq!(voice_summaries.len(), 3);
                assert_eq!(voice_summaries[0].summary_key_points(), ["a", "b"]);
            }
            other => panic!("unexpected overview {:?}", other),
        }
        assert_eq!(customer.summary_tasks().len(), 5);
    }
}
