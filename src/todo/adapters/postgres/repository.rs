//! `PostgreSQL` repository implementation for to-do item storage.

use super::{
    models::{NewTodoRow, TodoChangeset, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{OwnerId, PersistedTodoData, Title, TodoId, TodoItem},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by to-do adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed to-do repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, todo: &TodoItem) -> TodoRepositoryResult<()> {
        let todo_id = todo.id();
        let new_row = to_new_row(todo);

        self.run_blocking(move |connection| {
            diesel::insert_into(todos::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TodoRepositoryError::DuplicateTodo(todo_id)
                    }
                    _ => TodoRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: TodoId,
        owner: &OwnerId,
    ) -> TodoRepositoryResult<Option<TodoItem>> {
        let owner_value = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = todos::table
                .filter(todos::id.eq(id.into_inner()))
                .filter(todos::owner.eq(owner_value))
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn update(&self, todo: &TodoItem) -> TodoRepositoryResult<()> {
        let todo_id = todo.id();
        let changeset = to_changeset(todo);

        self.run_blocking(move |connection| {
            let affected =
                diesel::update(todos::table.filter(todos::id.eq(todo_id.into_inner())))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::NotFound(todo_id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(todo: &TodoItem) -> NewTodoRow {
    NewTodoRow {
        id: todo.id().into_inner(),
        title: todo.title().as_str().to_owned(),
        owner: todo.owner().as_str().to_owned(),
        due_at: todo.due_at(),
        done: todo.done(),
        created_at: todo.created_at(),
        updated_at: todo.updated_at(),
    }
}

fn to_changeset(todo: &TodoItem) -> TodoChangeset {
    TodoChangeset {
        title: todo.title().as_str().to_owned(),
        due_at: todo.due_at(),
        done: todo.done(),
        updated_at: todo.updated_at(),
    }
}

fn row_to_item(row: TodoRow) -> TodoRepositoryResult<TodoItem> {
    let TodoRow {
        id,
        title: persisted_title,
        owner: persisted_owner,
        due_at,
        done,
        created_at,
        updated_at,
    } = row;

    let title = Title::new(persisted_title).map_err(TodoRepositoryError::persistence)?;
    let owner = OwnerId::new(persisted_owner).map_err(TodoRepositoryError::persistence)?;

    let data = PersistedTodoData {
        id: TodoId::from_uuid(id),
        title,
        owner,
        due_at,
        done,
        created_at,
        updated_at,
    };
    Ok(TodoItem::from_persisted(data))
}
