use leptos::prelude::*;
use web_sys::{AbortController, AbortSignal};

/// Монотонный счётчик запросов. Ответ применяется, только если его id
/// совпадает с последним выданным.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, id: u64) -> bool {
        id != 0 && id == self.latest
    }

    /// Делает все выданные id устаревшими
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// Выданный запрос: id для проверки актуальности и сигнал отмены
pub struct RequestTicket {
    pub id: u64,
    signal: Option<AbortSignal>,
}

impl RequestTicket {
    pub fn signal(&self) -> Option<&AbortSignal> {
        self.signal.as_ref()
    }
}

struct ScopeInner {
    sequence: RequestSequence,
    controller: Option<AbortController>,
}

impl ScopeInner {
    fn abort(&mut self) {
        if let Some(controller) = self.controller.take() {
            controller.abort();
        }
    }

    /// Прервать текущий запрос и сделать все id устаревшими
    fn cancel(&mut self) {
        self.abort();
        self.sequence.invalidate();
    }
}

/// Область запросов одного ресурса страницы.
///
/// `begin()` прерывает незавершённый запрос этой же области и выдаёт новый
/// id; при уничтожении владельца (уход со страницы) незавершённый запрос
/// прерывается, а все id становятся устаревшими.
#[derive(Clone, Copy)]
pub struct RequestScope {
    inner: StoredValue<ScopeInner, LocalStorage>,
}

impl RequestScope {
    pub fn new() -> Self {
        let inner = StoredValue::new_local(ScopeInner {
            sequence: RequestSequence::default(),
            controller: None,
        });
        on_cleanup(move || {
            inner.try_update_value(ScopeInner::cancel);
        });
        Self { inner }
    }

    pub fn begin(&self) -> RequestTicket {
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        let id = self
            .inner
            .try_update_value(|scope| {
                scope.abort();
                scope.controller = controller;
                scope.sequence.next()
            })
            .unwrap_or_default();
        RequestTicket { id, signal }
    }

    /// false для устаревшего id и после уничтожения области
    pub fn is_current(&self, id: u64) -> bool {
        self.inner
            .try_with_value(|scope| scope.sequence.is_current(id))
            .unwrap_or(false)
    }

    /// Отмена без нового запроса: ответ незавершённого запроса будет
    /// отброшен, даже если сервер успеет ответить.
    pub fn cancel(&self) {
        self.inner.try_update_value(ScopeInner::cancel);
    }

    /// Завершение запроса: контроллер больше не нужен
    pub fn finish(&self, id: u64) {
        self.inner.try_update_value(|scope| {
            if scope.sequence.is_current(id) {
                scope.controller = None;
            }
        });
    }
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_makes_older_stale() {
        let mut seq = RequestSequence::default();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_invalidate_discards_everything() {
        let mut seq = RequestSequence::default();
        let id = seq.next();
        seq.invalidate();
        assert!(!seq.is_current(id));
        assert!(!seq.is_current(0));
    }

    #[test]
    fn test_cancel_makes_pending_request_stale() {
        let mut scope = ScopeInner {
            sequence: RequestSequence::default(),
            controller: None,
        };
        let pending = scope.sequence.next();
        assert!(scope.sequence.is_current(pending));
        scope.cancel();
        assert!(!scope.sequence.is_current(pending));

        let next = scope.sequence.next();
        assert!(scope.sequence.is_current(next));
    }

    #[test]
    fn test_scope_is_stale_after_cancel_and_after_dispose() {
        let owner = Owner::new();
        let scope = owner.with(RequestScope::new);
        scope.cancel();
        assert!(!scope.is_current(1));
        owner.cleanup();
        scope.cancel();
        assert!(!scope.is_current(1));
    }
}
