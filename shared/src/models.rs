use serde::{Deserialize, Serialize};

// Colours come from the Tokyo Night palette; badges append a hex alpha
// suffix (`{color}20`) so they must stay six-digit hex values.
const NEUTRAL_COLOR: &str = "#565f89";
const BLUE: &str = "#7aa2f7";
const YELLOW: &str = "#e0af68";
const PURPLE: &str = "#bb9af7";
const GREEN: &str = "#9ece6a";
const RED: &str = "#f7768e";

// ===== Stage =====

/// Pipeline position of a customer.
///
/// Any value the API sends that is not one of the four known stages is kept
/// verbatim in `Other` and rendered with the neutral default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stage {
    Lead,
    Prospect,
    Opportunity,
    Customer,
    Other(String),
}

impl Stage {
    pub fn known() -> [Stage; 4] {
        [Stage::Lead, Stage::Prospect, Stage::Opportunity, Stage::Customer]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Stage::Lead => "lead",
            Stage::Prospect => "prospect",
            Stage::Opportunity => "opportunity",
            Stage::Customer => "customer",
            Stage::Other(value) => value,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Lead => "Lead",
            Stage::Prospect => "Prospect",
            Stage::Opportunity => "Opportunity",
            Stage::Customer => "Customer",
            Stage::Other(_) => "Unclassified",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Stage::Lead => BLUE,
            Stage::Prospect => YELLOW,
            Stage::Opportunity => PURPLE,
            Stage::Customer => GREEN,
            Stage::Other(_) => NEUTRAL_COLOR,
        }
    }

    /// Position when sorting by stage: most advanced first.
    pub fn pipeline_rank(&self) -> u8 {
        match self {
            Stage::Customer => 0,
            Stage::Opportunity => 1,
            Stage::Prospect => 2,
            Stage::Lead => 3,
            Stage::Other(_) => 4,
        }
    }
}

impl From<String> for Stage {
    fn from(value: String) -> Self {
        match value.as_str() {
            "lead" => Stage::Lead,
            "prospect" => Stage::Prospect,
            "opportunity" => Stage::Opportunity,
            "customer" => Stage::Customer,
            _ => Stage::Other(value),
        }
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        stage.as_str().to_string()
    }
}

// ===== Priority =====

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Other(value) => value,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Other(_) => "Normal",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Priority::High => RED,
            Priority::Medium => YELLOW,
            Priority::Low => GREEN,
            Priority::Other(_) => NEUTRAL_COLOR,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Other(value),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

// ===== Sentiment =====

/// Tone of a voice summary. Anything other than positive or negative,
/// including an explicit "neutral", renders as neutral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Other(String),
}

impl Sentiment {
    pub fn as_str(&self) -> &str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Other(value) => value,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral | Sentiment::Other(_) => "Neutral",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => GREEN,
            Sentiment::Negative => RED,
            Sentiment::Neutral | Sentiment::Other(_) => NEUTRAL_COLOR,
        }
    }
}

impl From<String> for Sentiment {
    fn from(value: String) -> Self {
        match value.as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            "neutral" => Sentiment::Neutral,
            _ => Sentiment::Other(value),
        }
    }
}

impl From<Sentiment> for String {
    fn from(sentiment: Sentiment) -> Self {
        sentiment.as_str().to_string()
    }
}

// ===== Detail tabs =====

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DetailTab {
    #[default]
    Summary,
    Activities,
    Tasks,
    Notes,
    /// Unrecognised tab id; the detail view renders an empty panel.
    Other(String),
}

impl DetailTab {
    pub fn all() -> [DetailTab; 4] {
        [
            DetailTab::Summary,
            DetailTab::Activities,
            DetailTab::Tasks,
            DetailTab::Notes,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            DetailTab::Summary => "summary",
            DetailTab::Activities => "activities",
            DetailTab::Tasks => "tasks",
            DetailTab::Notes => "notes",
            DetailTab::Other(value) => value,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Summary => "Summary",
            DetailTab::Activities => "Activities",
            DetailTab::Tasks => "Tasks",
            DetailTab::Notes => "Notes",
            DetailTab::Other(_) => "",
        }
    }
}

impl From<String> for DetailTab {
    fn from(value: String) -> Self {
        match value.as_str() {
            "summary" => DetailTab::Summary,
            "activities" => DetailTab::Activities,
            "tasks" => DetailTab::Tasks,
            "notes" => DetailTab::Notes,
            _ => DetailTab::Other(value),
        }
    }
}

impl From<DetailTab> for String {
    fn from(tab: DetailTab) -> Self {
        tab.as_str().to_string()
    }
}

// ===== Records =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSummary {
    pub id: String,
    pub meeting_type: String,
    pub date: String,
    pub summary: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub priority: Priority,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: String,
    pub date: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub product: String,
    pub stage: Stage,
    pub email: String,
    pub phone: String,

    // Authoritative counts from the API. When absent the local totals below
    // are shown instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_consult_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_action_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_pending_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_voice: Option<String>,

    #[serde(default)]
    pub voice_summaries: Vec<VoiceSummary>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub consultations: Vec<Consultation>,

    #[serde(default)]
    pub total_activities: u32,
    #[serde(default)]
    pub pending_tasks: u32,
    #[serde(default)]
    pub completed_tasks: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl Customer {
    /// Recompute the task counters from `tasks`. `total_activities` and the
    /// real counters come from the API and are left alone.
    pub fn recompute_task_totals(&mut self) {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        self.completed_tasks = completed as u32;
        self.pending_tasks = (self.tasks.len() - completed) as u32;
    }

    pub fn avatar_glyph(&self) -> String {
        if self.avatar.trim().is_empty() {
            self.name.chars().next().unwrap_or('?').to_string()
        } else {
            self.avatar.clone()
        }
    }
}

/// Payload of the "start recording" action, serialised as
/// `{"type": "customer", "name": ..., "id": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingContext {
    #[serde(rename = "type")]
    pub context_type: String,
    pub name: String,
    pub id: String,
}

impl RecordingContext {
    pub fn for_customer(customer: &Customer) -> Self {
        Self {
            context_type: "customer".to_string(),
            name: customer.name.clone(),
            id: customer.id.clone(),
        }
    }
}
