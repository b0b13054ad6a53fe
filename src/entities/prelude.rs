pub use super::calculations::Entity as Calculations;
