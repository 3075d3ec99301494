//! CustomerService: one parameterized statement per operation.

mod customer;
pub use customer::CustomerService;
