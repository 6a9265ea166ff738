use crate::controllers::marker::events::MarkerEvent;

pub trait MarkerPresenterPort: Send + Sync {
    fn present(&self, event: MarkerEvent);
}
