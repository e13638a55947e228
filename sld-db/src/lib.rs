//! In-memory SQLite table of SpaceX launch records.
//!
//! The launch dataset is loaded once into an in-memory SQLite database and
//! never written again. Dashboard handlers only read it through the typed
//! query methods here, which return serializable structs from [`models`].
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for single-threaded WASM use
//! - In-memory SQLite via `rusqlite` (compiles to `wasm32-unknown-unknown`)
//! - CSV text is handed in by the caller (embedded with `include_str!` in the
//!   web app, read from the cached file in the CLI)
//!
//! # Usage
//!
//! ```rust
//! use sld_db::Database;
//! use sld_launch::PayloadRange;
//!
//! let db = Database::new().unwrap();
//! db.load_launches(
//!     "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
//!      CCAFS LC-40,525.0,v1.0,0\n\
//!      KSC LC-39A,5300.0,FT,1\n",
//! )
//! .unwrap();
//!
//! let sites = db.query_launch_sites().unwrap();
//! assert_eq!(sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
//!
//! let heavy = db
//!     .query_launches_in_payload_range(&PayloadRange::new(1000.0, 10000.0), None)
//!     .unwrap();
//! assert_eq!(heavy.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`]. The only table is `launches`; per-site
//! success totals and outcome counts are derived with `GROUP BY` queries.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the launch record table.
///
/// Cheaply cloneable (via `Rc`) so it can sit in a Dioxus signal and be
/// shared by every component in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl PartialEq for Database {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_launches`](Self::load_launches) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load the given dataset CSV into it.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_launches(csv_data)?;
        Ok(db)
    }
}
