// Sample customers shown when the backend cannot be reached, so the screen
// stays usable in local development.

use salescrm_shared::Customer;
use serde_json::json;

pub fn sample_customers() -> Vec<Customer> {
    let data = json!([
        {
            "id": "cust-001",
            "name": "Minji Park",
            "avatar": "M",
            "product": "Whole life insurance",
            "stage": "customer",
            "email": "minji.park@example.com",
            "phone": "010-2481-3321",
            "registeredAt": "2023-02-14",
            "lastContactAt": "2024-06-03",
            "birthday": "1986-06-20",
            "voiceSummaries": [
                {
                    "id": "voice-001",
                    "meetingType": "Phone call",
                    "date": "2024-06-03",
                    "summary": "Asked to move the annual review to July and add her spouse as beneficiary.",
                    "sentiment": "positive",
                    "keyPoints": ["Review moved to July", "Add spouse as beneficiary", "Happy with claims service"]
                },
                {
                    "id": "voice-002",
                    "meetingType": "In-person meeting",
                    "date": "2024-03-11",
                    "summary": "Compared rider options for critical illness cover.",
                    "sentiment": "neutral",
                    "keyPoints": ["Interested in CI rider", "Budget is fixed"]
                }
            ],
            "consultations": [
                { "id": "consult-001", "date": "2024-05-20", "summary": "Sent the beneficiary change form by email." }
            ],
            "tasks": [
                {
                    "id": "task-001",
                    "title": "Prepare beneficiary change documents",
                    "description": "Needs spouse ID copy",
                    "completed": false,
                    "priority": "high",
                    "dueDate": "2024-06-10"
                },
                {
                    "id": "task-002",
                    "title": "Schedule July review",
                    "completed": true,
                    "priority": "medium",
                    "dueDate": "2024-06-05"
                }
            ],
            "totalActivities": 3,
            "pendingTasks": 1,
            "completedTasks": 1
        },
        {
            "id": "cust-002",
            "name": "Daniel Cho",
            "avatar": "D",
            "product": "Pension savings",
            "stage": "opportunity",
            "email": "daniel.cho@example.com",
            "phone": "010-9034-1187",
            "registeredAt": "2024-01-08",
            "lastContactAt": "2024-05-28",
            "latestVoice": "Wants a side-by-side quote against his current provider before Friday.",
            "realConsultCount": 6,
            "realActionCount": 0,
            "realPendingCount": 2,
            "voiceSummaries": [
                {
                    "id": "voice-003",
                    "meetingType": "Video call",
                    "date": "2024-05-28",
                    "summary": "Reviewed fee structure; concerned about early withdrawal penalties.",
                    "sentiment": "negative",
                    "keyPoints": ["Fee concerns", "Early withdrawal penalties"]
                }
            ],
            "tasks": [
                {
                    "id": "task-003",
                    "title": "Send comparison quote",
                    "completed": false,
                    "priority": "high",
                    "dueDate": "2024-05-31"
                },
                {
                    "id": "task-004",
                    "title": "Follow-up call",
                    "completed": false,
                    "priority": "low",
                    "dueDate": "2024-06-07"
                }
            ],
            "totalActivities": 1,
            "pendingTasks": 2,
            "completedTasks": 0
        },
        {
            "id": "cust-003",
            "name": "Sora Lee",
            "avatar": "",
            "product": "Car insurance",
            "stage": "prospect",
            "email": "sora.lee@example.com",
            "phone": "010-5512-7730",
            "registeredAt": "2024-05-02",
            "birthday": "1992-12-30",
            "consultations": [
                { "id": "consult-002", "date": "2024-05-02", "summary": "Walk-in enquiry about multi-car discounts." }
            ],
            "totalActivities": 1
        },
        {
            "id": "cust-004",
            "name": "Jihoon Kwon",
            "avatar": "J",
            "product": "Travel insurance",
            "stage": "lead",
            "email": "jihoon.kwon@example.com",
            "phone": "010-3321-0098",
            "registeredAt": "2024-06-01"
        }
    ]);

    match serde_json::from_value(data) {
        Ok(customers) => customers,
        Err(err) => {
            log::error!("sample customers failed to parse: {}", err);
            Vec::new()
        }
    }
}
