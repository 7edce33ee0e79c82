mod schema;

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::*;

/// Handle to the Herodex database.
///
/// Cheap to clone; all clones share one SQLite connection behind a mutex.
/// Every connection runs with `PRAGMA foreign_keys = ON` so the cascade
/// rules on `hero_powers` are enforced.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    /// Opens the database at its platform data directory, creating the
    /// directory if needed.
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("com", "rocket-tycoon", "herodex")
            .ok_or(Error::NoHomeDir)?;
        std::fs::create_dir_all(dirs.data_dir())?;
        Self::open(dirs.data_dir().join("herodex.db"))
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Applies the schema. Idempotent.
    pub fn migrate(&self) -> Result<()> {
        self.conn().execute_batch(schema::SCHEMA)?;
        debug!("database schema applied");
        Ok(())
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("database mutex poisoned")
    }

    // ----- Heroes -----

    pub fn create_hero(&self, input: CreateHeroInput) -> Result<Hero> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO heroes (name, super_name) VALUES (?1, ?2)",
            params![input.name, input.super_name],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, "created hero");
        Ok(Hero {
            id,
            name: input.name,
            super_name: input.super_name,
        })
    }

    pub fn get_hero(&self, id: i64) -> Result<Option<Hero>> {
        let hero = self
            .conn()
            .query_row(
                "SELECT id, name, super_name FROM heroes WHERE id = ?1",
                [id],
                row_to_hero,
            )
            .optional()?;
        Ok(hero)
    }

    pub fn get_all_heroes(&self) -> Result<Vec<Hero>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT id, name, super_name FROM heroes ORDER BY id")?;
        let heroes = stmt
            .query_map([], row_to_hero)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(heroes)
    }

    /// Updates the provided columns only. Returns false when no such hero
    /// exists.
    pub fn update_hero(&self, id: i64, input: UpdateHeroInput) -> Result<bool> {
        let n = self.conn().execute(
            "UPDATE heroes
             SET name = COALESCE(?1, name),
                 super_name = COALESCE(?2, super_name)
             WHERE id = ?3",
            params![input.name, input.super_name, id],
        )?;
        Ok(n > 0)
    }

    /// Deletes a hero and, through the cascade, every hero_power that
    /// references it. Returns false when no such hero exists.
    pub fn delete_hero(&self, id: i64) -> Result<bool> {
        let n = self
            .conn()
            .execute("DELETE FROM heroes WHERE id = ?1", [id])?;
        if n > 0 {
            debug!(id, "deleted hero");
        }
        Ok(n > 0)
    }

    // ----- Powers -----

    pub fn create_power(&self, input: CreatePowerInput) -> Result<Power> {
        Power::validate_description(&input.description)?;
        let conn = self.conn();
        conn.execute(
            "INSERT INTO powers (name, description) VALUES (?1, ?2)",
            params![input.name, input.description],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, "created power");
        Ok(Power {
            id,
            name: input.name,
            description: input.description,
        })
    }

    pub fn get_power(&self, id: i64) -> Result<Option<Power>> {
        let power = self
            .conn()
            .query_row(
                "SELECT id, name, description FROM powers WHERE id = ?1",
                [id],
                row_to_power,
            )
            .optional()?;
        Ok(power)
    }

    pub fn get_all_powers(&self) -> Result<Vec<Power>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT id, name, description FROM powers ORDER BY id")?;
        let powers = stmt
            .query_map([], row_to_power)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(powers)
    }

    /// Updates the provided columns only, validating the description before
    /// anything is written. Returns false when no such power exists.
    pub fn update_power(&self, id: i64, input: UpdatePowerInput) -> Result<bool> {
        if let Some(description) = &input.description {
            Power::validate_description(description)?;
        }
        let n = self.conn().execute(
            "UPDATE powers
             SET name = COALESCE(?1, name),
                 description = COALESCE(?2, description)
             WHERE id = ?3",
            params![input.name, input.description, id],
        )?;
        Ok(n > 0)
    }

    /// Deletes a power and, through the cascade, every hero_power that
    /// references it. Returns false when no such power exists.
    pub fn delete_power(&self, id: i64) -> Result<bool> {
        let n = self
            .conn()
            .execute("DELETE FROM powers WHERE id = ?1", [id])?;
        if n > 0 {
            debug!(id, "deleted power");
        }
        Ok(n > 0)
    }

    // ----- HeroPowers -----

    /// Links a hero to a power. The strength value is validated here; a
    /// dangling hero_id or power_id is rejected by SQLite as a foreign key
    /// constraint error.
    pub fn create_hero_power(&self, input: CreateHeroPowerInput) -> Result<HeroPower> {
        let strength = Strength::parse(&input.strength)?;
        let conn = self.conn();
        conn.execute(
            "INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?1, ?2, ?3)",
            params![strength.as_str(), input.hero_id, input.power_id],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, hero_id = input.hero_id, power_id = input.power_id, "created hero power");
        Ok(HeroPower {
            id,
            strength,
            hero_id: input.hero_id,
            power_id: input.power_id,
        })
    }

    pub fn get_hero_power(&self, id: i64) -> Result<Option<HeroPower>> {
        let hero_power = self
            .conn()
            .query_row(
                "SELECT id, strength, hero_id, power_id FROM hero_powers WHERE id = ?1",
                [id],
                row_to_hero_power,
            )
            .optional()?;
        Ok(hero_power)
    }

    pub fn get_all_hero_powers(&self) -> Result<Vec<HeroPower>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare("SELECT id, strength, hero_id, power_id FROM hero_powers ORDER BY id")?;
        let hero_powers = stmt
            .query_map([], row_to_hero_power)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(hero_powers)
    }

    /// The associations for one hero. An explicit query, never embedded in
    /// the hero's own serialized form.
    pub fn get_hero_powers_for_hero(&self, hero_id: i64) -> Result<Vec<HeroPower>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, strength, hero_id, power_id FROM hero_powers
             WHERE hero_id = ?1 ORDER BY id",
        )?;
        let hero_powers = stmt
            .query_map([hero_id], row_to_hero_power)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(hero_powers)
    }

    /// The associations for one power.
    pub fn get_hero_powers_for_power(&self, power_id: i64) -> Result<Vec<HeroPower>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, strength, hero_id, power_id FROM hero_powers
             WHERE power_id = ?1 ORDER BY id",
        )?;
        let hero_powers = stmt
            .query_map([power_id], row_to_hero_power)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(hero_powers)
    }

    /// Updates the strength of an existing association, validating the new
    /// value first. Returns false when no such association exists.
    pub fn update_hero_power(&self, id: i64, input: UpdateHeroPowerInput) -> Result<bool> {
        let Some(raw) = &input.strength else {
            return Ok(self.get_hero_power(id)?.is_some());
        };
        let strength = Strength::parse(raw)?;
        let n = self.conn().execute(
            "UPDATE hero_powers SET strength = ?1 WHERE id = ?2",
            params![strength.as_str(), id],
        )?;
        Ok(n > 0)
    }

    pub fn delete_hero_power(&self, id: i64) -> Result<bool> {
        let n = self
            .conn()
            .execute("DELETE FROM hero_powers WHERE id = ?1", [id])?;
        Ok(n > 0)
    }
}

fn row_to_hero(row: &rusqlite::Row) -> rusqlite::Result<Hero> {
    Ok(Hero {
        id: row.get("id")?,
        name: row.get("name")?,
        super_name: row.get("super_name")?,
    })
}

fn row_to_power(row: &rusqlite::Row) -> rusqlite::Result<Power> {
    Ok(Power {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}

fn row_to_hero_power(row: &rusqlite::Row) -> rusqlite::Result<HeroPower> {
    let raw: String = row.get("strength")?;
    let strength = Strength::from_str(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown strength value: {raw}").into(),
        )
    })?;
    Ok(HeroPower {
        id: row.get("id")?,
        strength,
        hero_id: row.get("hero_id")?,
        power_id: row.get("power_id")?,
    })
}
