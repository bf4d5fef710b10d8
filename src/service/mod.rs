//! AnimalService: data access for the `animal` table.

mod crud;
pub use crud::AnimalService;
