pub mod students;

pub use students::Entity as Students;
pub use students::Model as StudentRow;
