use crate::core::domain::Identifiable;

pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;

pub(crate) trait Book: Identifiable {
    fn quantity(&self) -> i64;

    // a copy can be checked out only while the quantity is positive
    fn is_available(&self) -> bool {
        self.quantity() > 0
    }
}
