// Builders for test records. Each returns a minimal valid value that tests
// then tweak field by field.

use crate::models::{Consultation, Customer, Priority, Sentiment, Stage, Task, VoiceSummary};

pub fn customer(id: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: format!("Customer {}", id),
        avatar: "C".to_string(),
        product: "Term life".to_string(),
        stage: Stage::Lead,
        email: format!("{}@example.com", id),
        phone: "010-0000-0000".to_string(),
        real_consult_count: None,
        real_action_count: None,
        real_pending_count: None,
        latest_voice: None,
        voice_summaries: Vec::new(),
        tasks: Vec::new(),
        consultations: Vec::new(),
        total_activities: 0,
        pending_tasks: 0,
        completed_tasks: 0,
        registered_at: None,
        last_contact_at: None,
        birthday: None,
    }
}

pub fn voice(id: &str, date: &str) -> VoiceSummary {
    VoiceSummary {
        id: id.to_string(),
        meeting_type: "Phone call".to_string(),
        date: date.to_string(),
        summary: format!("Voice summary {}", id),
        sentiment: Sentiment::Neutral,
        key_points: Vec::new(),
    }
}

pub fn consultation(id: &str, date: &str) -> Consultation {
    Consultation {
        id: id.to_string(),
        date: date.to_string(),
        summary: format!("Consultation {}", id),
    }
}

pub fn task(id: &str, completed: bool) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {}", id),
        description: String::new(),
        completed,
        priority: Priority::Medium,
        due_date: "2024-06-01".to_string(),
    }
}
