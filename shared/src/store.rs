//! The customer collection the page owns. Components never mutate records;
//! they emit callbacks and the page turns those into `StoreAction`s.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::dates::format_iso;
use crate::error::{CrmError, CrmResult};
use crate::models::{Consultation, Customer};

#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    Replace(Vec<Customer>),
    ToggleTask {
        customer_id: String,
        task_id: String,
    },
    DeleteTask {
        customer_id: String,
        task_id: String,
    },
    /// Record a note as a consultation dated `date`. Blank notes are dropped.
    SaveNote {
        customer_id: String,
        text: String,
        date: NaiveDate,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerStore {
    customers: Vec<Customer>,
}

impl CustomerStore {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn apply(&mut self, action: StoreAction) -> CrmResult<()> {
        match action {
            StoreAction::Replace(customers) => {
                log::debug!("store: replacing {} customers", customers.len());
                self.customers = customers;
            }
            StoreAction::ToggleTask { customer_id, task_id } => {
                let customer = self.customer_mut(&customer_id)?;
                let task = customer
                    .tasks
                    .iter_mut()
                    .find(|t| t.id == task_id)
                    .ok_or_else(|| CrmError::UnknownTask {
                        customer_id: customer_id.clone(),
                        task_id: task_id.clone(),
                    })?;
                task.completed = !task.completed;
                customer.recompute_task_totals();
            }
            StoreAction::DeleteTask { customer_id, task_id } => {
                let customer = self.customer_mut(&customer_id)?;
                let before = customer.tasks.len();
                customer.tasks.retain(|t| t.id != task_id);
                if customer.tasks.len() == before {
                    return Err(CrmError::UnknownTask { customer_id, task_id });
                }
                customer.recompute_task_totals();
            }
            StoreAction::SaveNote { customer_id, text, date } => {
                let text = text.trim();
                if text.is_empty() {
                    log::debug!("store: ignoring blank note for {}", customer_id);
                    return Ok(());
                }
                let customer = self.customer_mut(&customer_id)?;
                customer.consultations.insert(
                    0,
                    Consultation {
                        id: Uuid::new_v4().to_string(),
                        date: format_iso(date),
                        summary: text.to_string(),
                    },
                );
                customer.last_contact_at = Some(format_iso(date));
                customer.total_activities += 1;
            }
        }
        Ok(())
    }

    fn customer_mut(&mut self, id: &str) -> CrmResult<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CrmError::UnknownCustomer(id.to_string()))
    }
}
