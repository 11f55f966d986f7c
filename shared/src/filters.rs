//! Search, stage, sort and date-range filtering of the customer list.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates::{calendar_date, format_iso, parse_calendar_date};
use crate::error::CrmResult;
use crate::models::{Customer, Stage};

// ===== Stage filter =====

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageFilter {
    #[default]
    All,
    Lead,
    Prospect,
    Opportunity,
    Customer,
}

impl StageFilter {
    pub fn all() -> [StageFilter; 5] {
        [
            StageFilter::All,
            StageFilter::Lead,
            StageFilter::Prospect,
            StageFilter::Opportunity,
            StageFilter::Customer,
        ]
    }

    /// Unknown values select everything.
    pub fn from_value(value: &str) -> Self {
        match value {
            "lead" => StageFilter::Lead,
            "prospect" => StageFilter::Prospect,
            "opportunity" => StageFilter::Opportunity,
            "customer" => StageFilter::Customer,
            _ => StageFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StageFilter::All => "all",
            StageFilter::Lead => "lead",
            StageFilter::Prospect => "prospect",
            StageFilter::Opportunity => "opportunity",
            StageFilter::Customer => "customer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StageFilter::All => "All stages",
            StageFilter::Lead => Stage::Lead.label(),
            StageFilter::Prospect => Stage::Prospect.label(),
            StageFilter::Opportunity => Stage::Opportunity.label(),
            StageFilter::Customer => Stage::Customer.label(),
        }
    }

    pub fn matches(&self, stage: &Stage) -> bool {
        match self {
            StageFilter::All => true,
            StageFilter::Lead => *stage == Stage::Lead,
            StageFilter::Prospect => *stage == Stage::Prospect,
            StageFilter::Opportunity => *stage == Stage::Opportunity,
            StageFilter::Customer => *stage == Stage::Customer,
        }
    }
}

// ===== Sort key =====

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Recent,
    Name,
    Activities,
    Stage,
}

impl SortKey {
    pub fn all() -> [SortKey; 4] {
        [SortKey::Recent, SortKey::Name, SortKey::Activities, SortKey::Stage]
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "name" => SortKey::Name,
            "activities" => SortKey::Activities,
            "stage" => SortKey::Stage,
            _ => SortKey::Recent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Name => "name",
            SortKey::Activities => "activities",
            SortKey::Stage => "stage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Recent => "Most recent",
            SortKey::Name => "Name",
            SortKey::Activities => "Most activities",
            SortKey::Stage => "Stage",
        }
    }
}

// ===== Date filter =====

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFilterType {
    #[default]
    All,
    Registration,
    LastContact,
    Birthday,
    Custom,
}

impl DateFilterType {
    pub fn all() -> [DateFilterType; 5] {
        [
            DateFilterType::All,
            DateFilterType::Registration,
            DateFilterType::LastContact,
            DateFilterType::Birthday,
            DateFilterType::Custom,
        ]
    }

    /// Unknown values fall back to `All`, which disables date filtering.
    pub fn from_value(value: &str) -> Self {
        match value {
            "registration" => DateFilterType::Registration,
            "lastContact" => DateFilterType::LastContact,
            "birthday" => DateFilterType::Birthday,
            "custom" => DateFilterType::Custom,
            _ => DateFilterType::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilterType::All => "all",
            DateFilterType::Registration => "registration",
            DateFilterType::LastContact => "lastContact",
            DateFilterType::Birthday => "birthday",
            DateFilterType::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateFilterType::All => "All dates",
            DateFilterType::Registration => "Registration date",
            DateFilterType::LastContact => "Last contact",
            DateFilterType::Birthday => "Birthday",
            DateFilterType::Custom => "Activity date",
        }
    }
}

/// Flat form of the date filter as the parent stores it. When `filter_type`
/// is `All` the dates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilterState {
    pub filter_type: DateFilterType,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// A confirmed date range, ready to narrow the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedRange {
    pub kind: DateFilterType,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AppliedRange {
    /// Build a range, ordering the endpoints.
    pub fn new(kind: DateFilterType, a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self { kind, start, end }
    }

    /// Rebuild from the ISO strings handed to `on_date_range_apply`.
    pub fn parse(kind: DateFilterType, start: &str, end: &str) -> CrmResult<Self> {
        Ok(Self::new(kind, parse_calendar_date(start)?, parse_calendar_date(end)?))
    }

    /// Whether this range still describes the picker after it changed to
    /// `state`: same kind and both dates still chosen.
    pub fn still_selected_by(&self, state: &DateFilterState) -> bool {
        state.filter_type == self.kind && DateFilter::from(state).is_ready()
    }

    pub fn start_iso(&self) -> String {
        format_iso(self.start)
    }

    pub fn end_iso(&self) -> String {
        format_iso(self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Month/day comparison for birthdays; the year is ignored and ranges
    /// that wrap over New Year are handled.
    pub fn contains_anniversary(&self, date: NaiveDate) -> bool {
        if (self.end - self.start).num_days() >= 365 {
            return true;
        }
        let from = (self.start.month(), self.start.day());
        let to = (self.end.month(), self.end.day());
        let day = (date.month(), date.day());
        if from <= to {
            from <= day && day <= to
        } else {
            day >= from || day <= to
        }
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        let field = |value: &Option<String>| value.as_deref().and_then(calendar_date);
        match self.kind {
            DateFilterType::All => true,
            DateFilterType::Registration => {
                field(&customer.registered_at).is_some_and(|d| self.contains(d))
            }
            DateFilterType::LastContact => {
                field(&customer.last_contact_at).is_some_and(|d| self.contains(d))
            }
            DateFilterType::Birthday => {
                field(&customer.birthday).is_some_and(|d| self.contains_anniversary(d))
            }
            DateFilterType::Custom => customer
                .voice_summaries
                .iter()
                .map(|voice| voice.date.as_str())
                .chain(customer.consultations.iter().map(|c| c.date.as_str()))
                .filter_map(calendar_date)
                .any(|d| self.contains(d)),
        }
    }
}

/// The date picker's state machine.
///
/// `Inactive` shows only the trigger, `Selecting` shows the two pickers and
/// `Ready` additionally shows the formatted range and enables apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    Inactive,
    Selecting {
        kind: DateFilterType,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
    Ready {
        kind: DateFilterType,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl DateFilter {
    fn from_parts(kind: DateFilterType, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (kind, start, end) {
            (DateFilterType::All, _, _) => DateFilter::Inactive,
            (kind, Some(start), Some(end)) => DateFilter::Ready { kind, start, end },
            (kind, start, end) => DateFilter::Selecting { kind, start, end },
        }
    }

    fn parts(&self) -> (DateFilterType, Option<NaiveDate>, Option<NaiveDate>) {
        match *self {
            DateFilter::Inactive => (DateFilterType::All, None, None),
            DateFilter::Selecting { kind, start, end } => (kind, start, end),
            DateFilter::Ready { kind, start, end } => (kind, Some(start), Some(end)),
        }
    }

    pub fn filter_type(&self) -> DateFilterType {
        self.parts().0
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.parts().1
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.parts().2
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, DateFilter::Inactive)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DateFilter::Ready { .. })
    }

    /// Choosing `All` is the same as reset; any other kind keeps the dates
    /// picked so far.
    pub fn select_kind(self, kind: DateFilterType) -> Self {
        let (_, start, end) = self.parts();
        Self::from_parts(kind, start, end)
    }

    /// Ignored while inactive.
    pub fn set_start(self, date: Option<NaiveDate>) -> Self {
        match self.parts() {
            (DateFilterType::All, _, _) => self,
            (kind, _, end) => Self::from_parts(kind, date, end),
        }
    }

    /// Ignored while inactive.
    pub fn set_end(self, date: Option<NaiveDate>) -> Self {
        match self.parts() {
            (DateFilterType::All, _, _) => self,
            (kind, start, _) => Self::from_parts(kind, start, date),
        }
    }

    pub fn reset(self) -> Self {
        DateFilter::Inactive
    }

    /// `(start, end)` as `YYYY-MM-DD` in the order they were picked, only
    /// once both ends are chosen. Ordering is left to `AppliedRange`.
    pub fn apply(&self) -> Option<(String, String)> {
        match *self {
            DateFilter::Ready { start, end, .. } => Some((format_iso(start), format_iso(end))),
            DateFilter::Inactive | DateFilter::Selecting { .. } => {
                log::debug!("ignoring apply on incomplete date filter {:?}", self);
                None
            }
        }
    }

    pub fn range_text(&self) -> Option<String> {
        match *self {
            DateFilter::Ready { start, end, .. } => {
                Some(format!("{} ~ {}", format_iso(start), format_iso(end)))
            }
            _ => None,
        }
    }
}

impl From<&DateFilter> for DateFilterState {
    fn from(filter: &DateFilter) -> Self {
        let (filter_type, start, end) = filter.parts();
        DateFilterState {
            filter_type,
            start_date: start.map(format_iso),
            end_date: end.map(format_iso),
        }
    }
}

impl From<&DateFilterState> for DateFilter {
    fn from(state: &DateFilterState) -> Self {
        let date = |value: &Option<String>| value.as_deref().and_then(calendar_date);
        DateFilter::from_parts(state.filter_type, date(&state.start_date), date(&state.end_date))
    }
}

// ===== Query =====

/// Everything the parent uses to narrow and order the customer list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerQuery {
    pub search: String,
    pub stage: StageFilter,
    pub sort: SortKey,
    pub date_range: Option<AppliedRange>,
}

impl CustomerQuery {
    pub fn matches(&self, customer: &Customer) -> bool {
        let query = self.search.trim().to_lowercase();
        let search_match = query.is_empty()
            || [&customer.name, &customer.email, &customer.phone, &customer.product]
                .iter()
                .any(|field| field.to_lowercase().contains(&query));

        let date_match = self
            .date_range
            .as_ref()
            .map(|range| range.matches(customer))
            .unwrap_or(true);

        search_match && self.stage.matches(&customer.stage) && date_match
    }

    pub fn apply<'a>(&self, customers: &'a [Customer]) -> Vec<&'a Customer> {
        let mut result: Vec<&Customer> = customers.iter().filter(|c| self.matches(c)).collect();

        match self.sort {
            SortKey::Recent => {
                // Newest first; customers with no dates at all go last.
                result.sort_by_key(|c| std::cmp::Reverse(recency(c)));
            }
            SortKey::Name => result.sort_by_key(|c| c.name.to_lowercase()),
            SortKey::Activities => {
                result.sort_by_key(|c| std::cmp::Reverse(c.display_counters().actions))
            }
            SortKey::Stage => result.sort_by_key(|c| c.stage.pipeline_rank()),
        }

        result
    }
}

fn recency(customer: &Customer) -> Option<NaiveDate> {
    let last_contact = customer.last_contact_at.as_deref().and_then(calendar_date);
    last_contact.max(customer.latest_activity_date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn choosing_a_type_opens_the_pickers() {
        let filter = DateFilter::default().select_kind(DateFilterType::Registration);
        assert_eq!(
            filter,
            DateFilter::Selecting { kind: DateFilterType::Registration, start: None, end: None }
        );
        assert!(filter.is_active());
        assert!(!filter.is_ready());
    }

    #[test]
    fn apply_with_only_a_start_date_does_nothing() {
        let filter = DateFilter::default()
            .select_kind(DateFilterType::Registration)
            .set_start(Some(ymd(2024, 1, 1)));

        assert_eq!(filter.apply(), None);
        assert_eq!(filter.range_text(), None);
    }

    #[test]
    fn apply_with_both_dates_yields_iso_range() {
        let filter = DateFilter::default()
            .select_kind(DateFilterType::Registration)
            .set_start(Some(ymd(2024, 1, 1)))
            .set_end(Some(ymd(2024, 2, 15)));

        assert!(filter.is_ready());
        assert_eq!(filter.range_text().as_deref(), Some("2024-01-01 ~ 2024-02-15"));

        assert_eq!(
            filter.apply(),
            Some(("2024-01-01".to_string(), "2024-02-15".to_string()))
        );
    }

    #[test]
    fn clearing_a_date_drops_back_to_selecting() {
        let filter = DateFilter::default()
            .select_kind(DateFilterType::Birthday)
            .set_start(Some(ymd(2024, 1, 1)))
            .set_end(Some(ymd(2024, 2, 1)))
            .set_end(None);

        assert!(!filter.is_ready());
        assert_eq!(filter.start(), Some(ymd(2024, 1, 1)));
    }

    #[test]
    fn reset_returns_to_all_and_clears_dates() {
        let filters = [
            DateFilter::default().select_kind(DateFilterType::LastContact),
            DateFilter::default()
                .select_kind(DateFilterType::Custom)
                .set_start(Some(ymd(2024, 3, 1)))
                .set_end(Some(ymd(2024, 3, 31))),
        ];

        for filter in filters {
            let reset = filter.reset();
            assert_eq!(reset.filter_type(), DateFilterType::All);
            assert_eq!(reset.start(), None);
            assert_eq!(reset.end(), None);
            assert_eq!(DateFilterState::from(&reset), DateFilterState::default());
        }
    }

    #[test]
    fn dates_are_ignored_while_inactive() {
        let filter = DateFilter::default().set_start(Some(ymd(2024, 1, 1)));
        assert_eq!(filter, DateFilter::Inactive);

        let state = DateFilterState {
            filter_type: DateFilterType::All,
            start_date: Some("2024-01-01".into()),
            end_date: Some("2024-01-31".into()),
        };
        assert_eq!(DateFilter::from(&state), DateFilter::Inactive);
    }

    #[test]
    fn switching_kind_keeps_chosen_dates() {
        let filter = DateFilter::default()
            .select_kind(DateFilterType::Registration)
            .set_start(Some(ymd(2024, 1, 1)))
            .set_end(Some(ymd(2024, 1, 31)))
            .select_kind(DateFilterType::LastContact);

        assert_eq!(
            filter,
            DateFilter::Ready {
                kind: DateFilterType::LastContact,
                start: ymd(2024, 1, 1),
                end: ymd(2024, 1, 31)
            }
        );
    }

    #[test]
    fn reversed_range_is_passed_through_as_picked() {
        let (start, end) = DateFilter::default()
            .select_kind(DateFilterType::Custom)
            .set_start(Some(ymd(2024, 5, 1)))
            .set_end(Some(ymd(2024, 4, 1)))
            .apply()
            .unwrap();
        assert_eq!((start.as_str(), end.as_str()), ("2024-05-01", "2024-04-01"));

        let range = AppliedRange::parse(DateFilterType::Custom, &start, &end).unwrap();
        assert_eq!((range.start, range.end), (ymd(2024, 4, 1), ymd(2024, 5, 1)));
    }

    #[test]
    fn applied_range_is_dropped_when_the_picker_moves_away() {
        let range = AppliedRange::new(DateFilterType::Registration, ymd(2024, 1, 1), ymd(2024, 1, 31));
        let state = |filter_type, end: Option<&str>| DateFilterState {
            filter_type,
            start_date: Some("2024-01-01".into()),
            end_date: end.map(str::to_string),
        };

        assert!(range.still_selected_by(&state(DateFilterType::Registration, Some("2024-01-31"))));
        assert!(!range.still_selected_by(&state(DateFilterType::LastContact, Some("2024-01-31"))));
        assert!(!range.still_selected_by(&state(DateFilterType::Registration, None)));
        assert!(!range.still_selected_by(&state(DateFilterType::All, Some("2024-01-31"))));
    }

    #[test]
    fn state_round_trips_through_flat_form() {
        let state = DateFilterState {
            filter_type: DateFilterType::LastContact,
            start_date: Some("2024-06-01T09:00:00Z".into()),
            end_date: None,
        };
        let filter = DateFilter::from(&state);
        assert_eq!(filter.start(), Some(ymd(2024, 6, 1)));
        assert_eq!(
            DateFilterState::from(&filter).start_date.as_deref(),
            Some("2024-06-01")
        );
        assert_eq!(DateFilterType::from_value("lastContact"), DateFilterType::LastContact);
        assert_eq!(DateFilterType::from_value("anniversary"), DateFilterType::All);
    }

    #[test]
    fn birthday_ranges_ignore_year_and_wrap() {
        let december = AppliedRange::new(DateFilterType::Birthday, ymd(2024, 12, 20), ymd(2025, 1, 10));
        assert!(december.contains_anniversary(ymd(1990, 12, 25)));
        assert!(december.contains_anniversary(ymd(1985, 1, 3)));
        assert!(!december.contains_anniversary(ymd(1985, 6, 3)));

        let spring = AppliedRange::new(DateFilterType::Birthday, ymd(2024, 3, 1), ymd(2024, 4, 30));
        assert!(spring.contains_anniversary(ymd(1970, 4, 12)));
        assert!(!spring.contains_anniversary(ymd(1970, 5, 1)));
    }

    #[test]
    fn search_covers_name_email_phone_and_product() {
        let mut customer = fixtures::customer("c-1");
        customer.name = "Lee Seojun".into();
        customer.product = "Dental rider".into();

        let query = |search: &str| CustomerQuery { search: search.into(), ..Default::default() };
        assert!(query("seojun").matches(&customer));
        assert!(query("DENTAL").matches(&customer));
        assert!(query("c-1@example").matches(&customer));
        assert!(query("010-0000").matches(&customer));
        assert!(!query("pension").matches(&customer));
        assert!(query("   ").matches(&customer));
    }

    #[test]
    fn stage_filter_and_date_range_narrow_the_list() {
        let mut early = fixtures::customer("early");
        early.stage = Stage::Prospect;
        early.registered_at = Some("2023-05-01".into());
        let mut late = fixtures::customer("late");
        late.stage = Stage::Prospect;
        late.registered_at = Some("2024-05-01".into());
        let mut lead = fixtures::customer("lead");
        lead.registered_at = Some("2024-05-02".into());
        let undated = {
            let mut c = fixtures::customer("undated");
            c.stage = Stage::Prospect;
            c
        };
        let customers = vec![early, late, lead, undated];

        let query = CustomerQuery {
            stage: StageFilter::Prospect,
            date_range: Some(AppliedRange::new(
                DateFilterType::Registration,
                ymd(2024, 1, 1),
                ymd(2024, 12, 31),
            )),
            ..Default::default()
        };
        let ids: Vec<_> = query.apply(&customers).into_iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["late"]);
    }

    #[test]
    fn custom_range_matches_any_activity() {
        let mut customer = fixtures::customer("c-1");
        customer.consultations = vec![fixtures::consultation("k-1", "2024-02-14")];
        let range = AppliedRange::new(DateFilterType::Custom, ymd(2024, 2, 1), ymd(2024, 2, 28));
        assert!(range.matches(&customer));

        customer.consultations.clear();
        assert!(!range.matches(&customer));
    }

    #[test]
    fn sorts_by_each_key() {
        let mut a = fixtures::customer("a");
        a.name = "bora".into();
        a.stage = Stage::Lead;
        a.total_activities = 2;
        a.last_contact_at = Some("2024-01-10".into());
        let mut b = fixtures::customer("b");
        b.name = "Ahn".into();
        b.stage = Stage::Customer;
        b.real_action_count = Some(9);
        b.consultations = vec![fixtures::consultation("k", "2024-03-01")];
        let mut c = fixtures::customer("c");
        c.name = "Cho".into();
        c.stage = Stage::Other("archived".into());
        c.total_activities = 5;
        let customers = vec![a, b, c];

        let order = |sort: SortKey| -> Vec<String> {
            CustomerQuery { sort, ..Default::default() }
                .apply(&customers)
                .iter()
                .map(|c| c.id.clone())
                .collect()
        };

        assert_eq!(order(SortKey::Recent), ["b", "a", "c"]);
        assert_eq!(order(SortKey::Name), ["b", "a", "c"]);
        assert_eq!(order(SortKey::Activities), ["b", "c", "a"]);
        assert_eq!(order(SortKey::Stage), ["b", "a", "c"]);
    }

    #[test]
    fn unknown_selector_values_fall_back() {
        assert_eq!(StageFilter::from_value("archived"), StageFilter::All);
        assert_eq!(SortKey::from_value("revenue"), SortKey::Recent);
        assert!(StageFilter::All.matches(&Stage::Other("archived".into())));
        assert!(!StageFilter::Lead.matches(&Stage::Other("archived".into())));
    }
}
