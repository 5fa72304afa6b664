//! Payments - Demo page over a simulated paginated backend

pub mod page;
pub mod payment;
pub mod service;

pub use page::{PaymentsPage, payment_columns};
pub use payment::{Payment, PaymentStatus, sample_payments};
pub use service::{PaymentsPageData, PaymentsQuery, PaymentsService};
