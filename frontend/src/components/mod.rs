pub mod badges;
pub mod customer_card;
pub mod customer_detail;
pub mod customer_filters;
pub mod layout;
