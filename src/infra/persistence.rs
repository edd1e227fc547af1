use std::collections::HashMap;

use crate::domain::session::Session;
use crate::domain::SessionCode;

/// Абстракция хранилища сессий.
///
/// Контракт: `upsert` — полная замена состояния по коду, последняя запись
/// побеждает. Мутации по одному коду вызывающая сторона обязана
/// сериализовать: цикл read-modify-write без этого гоняется сам с собой
/// (в рамках процесса роль замка играет `&mut self` у SessionManager
/// и у самого хранилища).
pub trait SessionStorage {
    /// Загрузить сессию по коду.
    fn get(&self, code: &str) -> Option<Session>;

    /// Сохранить сессию (полная замена по коду).
    fn upsert(&mut self, code: &str, session: Session);
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    sessions: HashMap<SessionCode, Session>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get(&self, code: &str) -> Option<Session> {
        self.sessions.get(code).cloned()
    }

    fn upsert(&mut self, code: &str, session: Session) {
        self.sessions.insert(code.to_string(), session);
    }
}
