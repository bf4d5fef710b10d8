//! The `Animal` record and its typed request bodies.
//! Wire names stay Portuguese (`nome`, `especie`, `idade`, `disponivel`).

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "especie")]
    pub species: String,
    #[serde(rename = "idade")]
    pub age: i64,
    #[serde(rename = "disponivel")]
    pub available: bool,
}

impl<'r> FromRow<'r, AnyRow> for Animal {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("nome")?,
            species: row.try_get("especie")?,
            age: row.try_get("idade")?,
            available: get_bool(row, "disponivel")?,
        })
    }
}

/// Postgres returns BOOLEAN; SQLite stores the flag as INTEGER 0/1.
fn get_bool(row: &AnyRow, column: &str) -> Result<bool, sqlx::Error> {
    row.try_get::<i64, _>(column)
        .map(|v| v != 0)
        .or_else(|_| row.try_get::<bool, _>(column))
}

/// Body of `POST /animais`. Every field is optional on the wire so that
/// missing fields surface as [`AppError::IncompleteData`] rather than a parse error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewAnimal {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub especie: Option<String>,
    #[serde(default)]
    pub idade: Option<i64>,
    #[serde(default)]
    pub disponivel: Option<bool>,
}

/// A validated insert: required fields present, availability defaulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimalDraft {
    pub name: String,
    pub species: String,
    pub age: i64,
    pub available: bool,
}

impl NewAnimal {
    pub fn validate(self) -> Result<AnimalDraft, AppError> {
        let mut missing = Vec::new();
        if self.nome.is_none() {
            missing.push("nome");
        }
        if self.especie.is_none() {
            missing.push("especie");
        }
        if self.idade.is_none() {
            missing.push("idade");
        }
        match (self.nome, self.especie, self.idade) {
            (Some(name), Some(species), Some(age)) => Ok(AnimalDraft {
                name,
                species,
                age,
                available: self.disponivel.unwrap_or(true),
            }),
            _ => Err(AppError::IncompleteData { missing }),
        }
    }
}

/// Body of `PUT /animais/{id}`: only supplied fields are written.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AnimalChanges {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub especie: Option<String>,
    #[serde(default)]
    pub idade: Option<i64>,
    #[serde(default)]
    pub disponivel: Option<bool>,
}

impl AnimalChanges {
    pub fn apply_to(self, animal: &mut Animal) {
        if let Some(name) = self.nome {
            animal.name = name;
        }
        if let Some(species) = self.especie {
            animal.species = species;
        }
        if let Some(age) = self.idade {
            animal.age = age;
        }
        if let Some(available) = self.disponivel {
            animal.available = available;
        }
    }
}

/// Parse a JSON request body. An empty body reads as `{}`.
pub fn parse_body<T>(bytes: &[u8]) -> Result<T, AppError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    match serde_json::from_slice::<serde_json::Value>(bytes).map_err(AppError::InvalidBody)? {
        serde_json::Value::Null => Ok(T::default()),
        value => serde_json::from_value(value).map_err(AppError::InvalidBody),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rex() -> Animal {
        Animal {
            id: 1,
            name: "Rex".into(),
            species: "Cachorro".into(),
            age: 3,
            available: true,
        }
    }

    #[test]
    fn serializes_with_wire_names() {
        let value = serde_json::to_value(rex()).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "nome": "Rex", "especie": "Cachorro", "idade": 3, "disponivel": true})
        );
    }

    #[test]
    fn availability_defaults_to_true() {
        let body: NewAnimal = parse_body(br#"{"nome":"Mia","especie":"Gato","idade":2}"#).unwrap();
        let draft = body.validate().unwrap();
        assert!(draft.available);
        assert_eq!(draft.name, "Mia");
    }

    #[test]
    fn reports_every_missing_field() {
        let body: NewAnimal = parse_body(br#"{"nome":"Mia"}"#).unwrap();
        match body.validate() {
            Err(AppError::IncompleteData { missing }) => assert_eq!(missing, vec!["especie", "idade"]),
            other => panic!("expected IncompleteData, got {:?}", other),
        }
    }

    #[test]
    fn null_counts_as_missing() {
        let body: NewAnimal = parse_body(br#"{"nome":null,"especie":"Gato","idade":2}"#).unwrap();
        assert!(matches!(body.validate(), Err(AppError::IncompleteData { .. })));
    }

    #[test]
    fn empty_or_null_body_is_empty_object() {
        let body: NewAnimal = parse_body(b"").unwrap();
        assert!(body.validate().is_err());
        let body: AnimalChanges = parse_body(b"null").unwrap();
        assert!(body.nome.is_none());
    }

    #[test]
    fn malformed_body_is_rejected() {
        assert!(matches!(parse_body::<NewAnimal>(b"{nome"), Err(AppError::InvalidBody(_))));
        assert!(matches!(
            parse_body::<NewAnimal>(br#"{"idade":"dois"}"#),
            Err(AppError::InvalidBody(_))
        ));
        assert!(matches!(parse_body::<NewAnimal>(b"[1,2]"), Err(AppError::InvalidBody(_))));
    }

    #[test]
    fn changes_touch_only_supplied_fields() {
        let mut animal = rex();
        let changes: AnimalChanges = parse_body(br#"{"idade":5}"#).unwrap();
        changes.apply_to(&mut animal);
        assert_eq!(animal.age, 5);
        assert_eq!(animal.name, "Rex");
        assert_eq!(animal.species, "Cachorro");
        assert!(animal.available);
    }
}
