//! `PostgreSQL` repository implementation for task storage.
//!
//! Scope filters compile into `WHERE` clauses so ownership checks run inside
//! the database, alongside whatever row-level policy the deployment applies.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskPriority, TaskScope, TaskStatus, TaskTitle, UserId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn list(&self, scope: &TaskScope) -> TaskRepositoryResult<Vec<Task>> {
        let list_scope = *scope;
        self.run_blocking(move |connection| {
            let rows = match list_scope {
                TaskScope::Owner(owner) => tasks::table
                    .filter(tasks::owner_id.eq(owner.into_inner()))
                    .order(tasks::created_at.desc())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection),
                TaskScope::All => tasks::table
                    .order(tasks::created_at.desc())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection),
            }
            .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: TaskId,
        scope: &TaskScope,
    ) -> TaskRepositoryResult<Option<Task>> {
        let find_scope = *scope;
        self.run_blocking(move |connection| {
            let row = match find_scope {
                TaskScope::Owner(owner) => tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .filter(tasks::owner_id.eq(owner.into_inner()))
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(connection)
                    .optional(),
                TaskScope::All => tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(connection)
                    .optional(),
            }
            .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn update(&self, task: &Task, scope: &TaskScope) -> TaskRepositoryResult<()> {
        let task_id = task.id().into_inner();
        let changes = to_changeset(task);
        let update_scope = *scope;

        self.run_blocking(move |connection| {
            let updated_count = match update_scope {
                TaskScope::Owner(owner) => diesel::update(
                    tasks::table
                        .filter(tasks::id.eq(task_id))
                        .filter(tasks::owner_id.eq(owner.into_inner())),
                )
                .set(&changes)
                .execute(connection),
                TaskScope::All => diesel::update(tasks::table.filter(tasks::id.eq(task_id)))
                    .set(&changes)
                    .execute(connection),
            }
            .map_err(TaskRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TaskRepositoryError::NotFound(TaskId::from_uuid(task_id)));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId, scope: &TaskScope) -> TaskRepositoryResult<()> {
        let task_id = id.into_inner();
        let delete_scope = *scope;

        self.run_blocking(move |connection| {
            let deleted_count = match delete_scope {
                TaskScope::Owner(owner) => diesel::delete(
                    tasks::table
                        .filter(tasks::id.eq(task_id))
                        .filter(tasks::owner_id.eq(owner.into_inner())),
                )
                .execute(connection),
                TaskScope::All => diesel::delete(tasks::table.filter(tasks::id.eq(task_id)))
                    .execute(connection),
            }
            .map_err(TaskRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(TaskRepositoryError::NotFound(TaskId::from_uuid(task_id)));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().as_str().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        owner_id,
        title: persisted_title,
        description,
        status: persisted_status,
        priority: persisted_priority,
        created_at,
        updated_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        owner: UserId::from_uuid(owner_id),
        title,
        description,
        status,
        priority,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
