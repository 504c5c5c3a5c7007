//! SQLite 联系人存储
//!
//! 单表 `contacts`，每次修改立即提交（自动提交模式）

use std::path::Path;
use std::time::Instant;

use log::{error, info};
use rusqlite::{Connection, Row, params};

use crate::error::{StoreError, StoreResult};
use crate::models::Contact;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY,
    name TEXT,
    number TEXT,
    email TEXT,
    relation TEXT
)";

/// 联系人存储，持有进程内唯一的数据库连接
pub struct ContactStore {
    conn: Connection,
}

impl ContactStore {
    /// 打开（或创建）数据库文件并建表，可重复调用
    pub fn open(path: &Path) -> StoreResult<Self> {
        let started_at = Instant::now();
        let conn = match Connection::open(path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=db_open module=storage status=error mode=file path={} error={}",
                    path.display(),
                    err
                );
                return Err(err.into());
            }
        };

        let store = Self::bootstrap(conn)?;
        info!(
            "event=db_open module=storage status=ok mode=file path={} duration_ms={}",
            path.display(),
            started_at.elapsed().as_millis()
        );
        Ok(store)
    }

    /// 内存数据库
    pub fn open_in_memory() -> StoreResult<Self> {
        let store = Self::bootstrap(Connection::open_in_memory()?)?;
        info!("event=db_open module=storage status=ok mode=memory");
        Ok(store)
    }

    fn bootstrap(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(CREATE_TABLE_SQL)?;
        Ok(Self { conn })
    }

    /// 读取全部记录，顺序由存储引擎决定
    pub fn fetch_all(&self) -> StoreResult<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, number, email, relation FROM contacts")?;
        let contacts = stmt
            .query_map([], row_to_contact)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(contacts)
    }

    /// 插入新记录，返回分配的 id；不做校验
    pub fn add(&self, name: &str, number: &str, email: &str, relation: &str) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO contacts (id, name, number, email, relation) VALUES (NULL, ?1, ?2, ?3, ?4)",
            params![name, number, email, relation],
        )?;
        let id = self.conn.last_insert_rowid();
        info!("event=contact_add module=storage status=ok id={id}");
        Ok(id)
    }

    /// 删除记录；id 不存在时什么也不做，返回受影响行数
    pub fn delete(&self, id: i64) -> StoreResult<usize> {
        let affected = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1", params![id])?;
        info!("event=contact_delete module=storage status=ok id={id} affected={affected}");
        Ok(affected)
    }

    /// 覆盖记录的全部字段；id 不存在时什么也不做
    pub fn update(
        &self,
        id: i64,
        name: &str,
        number: &str,
        email: &str,
        relation: &str,
    ) -> StoreResult<usize> {
        let affected = self.conn.execute(
            "UPDATE contacts SET name = ?1, number = ?2, email = ?3, relation = ?4 WHERE id = ?5",
            params![name, number, email, relation, id],
        )?;
        info!("event=contact_update module=storage status=ok id={id} affected={affected}");
        Ok(affected)
    }

    /// 显式关闭连接；未调用时在 drop 时释放
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, err)| {
            error!("event=db_close module=storage status=error error={err}");
            StoreError::Sqlite(err)
        })?;
        info!("event=db_close module=storage status=ok");
        Ok(())
    }
}

fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        number: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        email: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        relation: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(contact: &Contact) -> (&str, &str, &str, &str) {
        (
            &contact.name,
            &contact.number,
            &contact.email,
            &contact.relation,
        )
    }

    #[test]
    fn add_then_fetch_returns_record_with_fresh_id() {
        let store = ContactStore::open_in_memory().unwrap();
        let first = store.add("Alice", "1234567890", "a@x.com", "Friend").unwrap();
        let second = store.add("Bob", "555", "b@x.com", "Work").unwrap();
        assert_ne!(first, second);

        let contacts = store.fetch_all().unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].id, first);
        assert_eq!(
            fields(&contacts[0]),
            ("Alice", "1234567890", "a@x.com", "Friend")
        );
        assert_eq!(contacts[1].id, second);
    }

    #[test]
    fn add_update_delete_scenario() {
        let store = ContactStore::open_in_memory().unwrap();
        let id = store.add("Alice", "1234567890", "a@x.com", "Friend").unwrap();

        let contacts = store.fetch_all().unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(
            fields(&contacts[0]),
            ("Alice", "1234567890", "a@x.com", "Friend")
        );

        assert_eq!(
            store
                .update(id, "Alice", "0987654321", "a@x.com", "Friend")
                .unwrap(),
            1
        );
        let contacts = store.fetch_all().unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].id, id);
        assert_eq!(contacts[0].number, "0987654321");

        assert_eq!(store.delete(id).unwrap(), 1);
        assert!(store.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_only_that_id() {
        let store = ContactStore::open_in_memory().unwrap();
        let keep = store.add("Alice", "1", "a@x.com", "Friend").unwrap();
        let gone = store.add("Bob", "2", "b@x.com", "Work").unwrap();

        store.delete(gone).unwrap();
        let ids: Vec<i64> = store.fetch_all().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let store = ContactStore::open_in_memory().unwrap();
        store.add("Alice", "1", "a@x.com", "Friend").unwrap();
        let before = store.fetch_all().unwrap();

        assert_eq!(store.delete(999).unwrap(), 0);
        assert_eq!(store.fetch_all().unwrap(), before);
    }

    #[test]
    fn update_missing_id_is_noop() {
        let store = ContactStore::open_in_memory().unwrap();
        store.add("Alice", "1", "a@x.com", "Friend").unwrap();
        let before = store.fetch_all().unwrap();

        assert_eq!(store.update(42, "Mallory", "0", "m@x.com", "None").unwrap(), 0);
        assert_eq!(store.fetch_all().unwrap(), before);
    }

    #[test]
    fn open_is_idempotent_and_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.db");

        let store = ContactStore::open(&path).unwrap();
        let id = store.add("Alice", "1234567890", "a@x.com", "Friend").unwrap();
        store.close().unwrap();

        let store = ContactStore::open(&path).unwrap();
        let contacts = store.fetch_all().unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].id, id);
        assert_eq!(contacts[0].name, "Alice");
    }

    #[test]
    fn open_tolerates_null_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(CREATE_TABLE_SQL).unwrap();
            conn.execute("INSERT INTO contacts (name) VALUES ('Carol')", [])
                .unwrap();
        }

        let store = ContactStore::open(&path).unwrap();
        let contacts = store.fetch_all().unwrap();
        assert_eq!(contacts[0].name, "Carol");
        assert_eq!(contacts[0].number, "");
    }
}
