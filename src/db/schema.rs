pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS heroes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    super_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS powers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL CHECK (length(description) >= 20)
);

CREATE TABLE IF NOT EXISTS hero_powers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    strength TEXT NOT NULL CHECK (strength IN ('Strong', 'Weak', 'Average')),
    hero_id INTEGER NOT NULL,
    power_id INTEGER NOT NULL,
    CONSTRAINT fk_hero_powers_hero_id_heroes
        FOREIGN KEY (hero_id) REFERENCES heroes(id) ON DELETE CASCADE,
    CONSTRAINT fk_hero_powers_power_id_powers
        FOREIGN KEY (power_id) REFERENCES powers(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_hero_powers_hero ON hero_powers(hero_id);
CREATE INDEX IF NOT EXISTS idx_hero_powers_power ON hero_powers(power_id);
"#;
