use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrmError {
    #[error("invalid calendar date: {0:?}")]
    InvalidDate(String),

    #[error("unknown customer: {0}")]
    UnknownCustomer(String),

    #[error("unknown task {task_id} for customer {customer_id}")]
    UnknownTask {
        customer_id: String,
        task_id: String,
    },
}

pub type CrmResult<T> = Result<T, CrmError>;
