use crate::engine::effects::PrivateReveal;

/// Канал приватных уведомлений.
///
/// Ядро только формирует структурированное событие вскрытия; доставка
/// по адресату (хотя бы один раз) — забота транспортного слоя.
pub trait RevealNotifier {
    fn notify(&mut self, reveal: PrivateReveal);
}

/// Реализация-копилка для тестов: просто складывает события.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    pub reveals: Vec<PrivateReveal>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RevealNotifier for CollectingNotifier {
    fn notify(&mut self, reveal: PrivateReveal) {
        self.reveals.push(reveal);
    }
}
