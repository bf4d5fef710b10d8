//! HTTP handlers for animal CRUD.

pub mod animal;
