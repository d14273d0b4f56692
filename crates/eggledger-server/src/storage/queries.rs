//! Database queries for the eggledger server.

use eggledger_core::db::{DatabaseError, unix_timestamp};

use super::db::Database;
use super::models::{FarmNumber, FarmRecord, Role, SettingsRow, User};

impl Database {
    // =========================================================================
    // User queries
    // =========================================================================

    /// Create a new user. The username is the primary key; inserting a
    /// duplicate fails at the constraint.
    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        firstname: &str,
        lastname: &str,
        role: Role,
    ) -> Result<User, DatabaseError> {
        let now = unix_timestamp();

        sqlx::query(
            "INSERT INTO users (username, password_hash, firstname, lastname, role, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(username)
        .bind(password_hash)
        .bind(firstname)
        .bind(lastname)
        .bind(role)
        .bind(now)
        .bind(now)
        .execute(self.pool())
        .await?;

        self.get_user(username).await
    }

    /// Get a user by username.
    pub async fn get_user(&self, username: &str) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("User {username}")))
    }

    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY username")
            .fetch_all(self.pool())
            .await?;

        Ok(users)
    }

    /// List users holding the given role.
    pub async fn list_users_by_role(&self, role: Role) -> Result<Vec<User>, DatabaseError> {
        let users =
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE role = ? ORDER BY username")
                .bind(role)
                .fetch_all(self.pool())
                .await?;

        Ok(users)
    }

    /// Delete a user by username. Returns `false` when no such user exists.
    pub async fn delete_user(&self, username: &str) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(username)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // =========================================================================
    // Farm record queries
    // =========================================================================

    /// Create a production record for a farm. Multiple entries per
    /// (farm, date) pair are permitted.
    pub async fn create_record(
        &self,
        id: &str,
        farm: FarmNumber,
        eggs: i64,
        flats: i64,
        packets: i64,
        date: &str,
    ) -> Result<FarmRecord, DatabaseError> {
        let now = unix_timestamp();

        sqlx::query(
            "INSERT INTO farm_records (id, farm_number, eggs, flats, packets, date, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(farm.as_i64())
        .bind(eggs)
        .bind(flats)
        .bind(packets)
        .bind(date)
        .bind(now)
        .execute(self.pool())
        .await?;

        self.get_record(id).await
    }

    /// Get a record by ID.
    pub async fn get_record(&self, id: &str) -> Result<FarmRecord, DatabaseError> {
        sqlx::query_as::<_, FarmRecord>("SELECT * FROM farm_records WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("Record {id}")))
    }

    /// List all records for a farm, newest first. Unbounded.
    pub async fn list_records(&self, farm: FarmNumber) -> Result<Vec<FarmRecord>, DatabaseError> {
        let records = sqlx::query_as::<_, FarmRecord>(
            "SELECT * FROM farm_records WHERE farm_number = ? ORDER BY created_at DESC, rowid DESC",
        )
        .bind(farm.as_i64())
        .fetch_all(self.pool())
        .await?;

        Ok(records)
    }

    /// Update a record's counts in place and stamp `updated_at`.
    ///
    /// Lookup is by id alone; the row's farm is not checked here.
    pub async fn update_record(
        &self,
        id: &str,
        eggs: i64,
        flats: i64,
        packets: i64,
    ) -> Result<FarmRecord, DatabaseError> {
        let now = unix_timestamp();

        let result = sqlx::query(
            "UPDATE farm_records SET eggs = ?, flats = ?, packets = ?, updated_at = ? WHERE id = ?",
        )
        .bind(eggs)
        .bind(flats)
        .bind(packets)
        .bind(now)
        .bind(id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("Record {id}")));
        }

        self.get_record(id).await
    }

    /// Delete a record by ID. Returns `false` when no such record exists.
    pub async fn delete_record(&self, id: &str) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM farm_records WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count records for a farm.
    pub async fn count_records(&self, farm: FarmNumber) -> Result<i64, DatabaseError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM farm_records WHERE farm_number = ?")
            .bind(farm.as_i64())
            .fetch_one(self.pool())
            .await?;

        Ok(row.0)
    }

    // =========================================================================
    // Settings queries
    // =========================================================================

    /// Get the settings blob for a user, if one has been saved.
    pub async fn get_settings(&self, user_id: &str) -> Result<Option<SettingsRow>, DatabaseError> {
        let row = sqlx::query_as::<_, SettingsRow>("SELECT * FROM settings WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(self.pool())
            .await?;

        Ok(row)
    }

    /// Upsert the settings blob for a user. The payload is replaced
    /// wholesale; last writer wins.
    pub async fn put_settings(&self, user_id: &str, payload: &str) -> Result<(), DatabaseError> {
        let now = unix_timestamp();

        sqlx::query(
            "INSERT INTO settings (user_id, payload, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(user_id) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at",
        )
        .bind(user_id)
        .bind(payload)
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(())
    }
}
